//! Per-file extraction.
//!
//! Emits the declarations of a file (package, imports, classes, fields,
//! methods and their parameters) and hands every code scope to a fresh
//! [`SymbolReferenceWalker`].

use smol_str::SmolStr;
use tracing::debug;

use super::context::ExtractionContext;
use super::diagnostics::{Diagnostic, codes};
use super::error::ExtractError;
use super::identity::{MethodContext, RangeRecord};
use super::options::ExtractOptions;
use super::resolve::SymbolResolver;
use super::signature::method_descriptor;
use super::walker::SymbolReferenceWalker;
use crate::base::TextRange;
use crate::syntax::{
    AstNode, ClassDecl, ClassMember, EnumConstant, FieldDecl, MethodDecl, SourceFile, SyntaxKind,
    SyntaxNode,
};

/// Records and diagnostics of one file.
///
/// `records` is empty whenever `result` is an error: a file is reported
/// completely or not at all.
#[derive(Debug, Clone)]
pub struct FileExtraction {
    pub file: SmolStr,
    pub records: Vec<RangeRecord>,
    pub diagnostics: Vec<Diagnostic>,
    pub result: Result<(), ExtractError>,
}

impl FileExtraction {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Extract every symbol range of the file rooted at `root`.
pub fn extract_file(
    file: impl Into<SmolStr>,
    root: &SyntaxNode,
    resolver: &dyn SymbolResolver,
    options: &ExtractOptions,
) -> FileExtraction {
    let file = file.into();
    let text = root.text().to_string();
    let mut ctx = ExtractionContext::new(file.clone(), &text, resolver, options);

    let result = extract_source_file(&mut ctx, root);
    let (mut records, diagnostics) = ctx.into_parts();
    if result.is_err() {
        debug!(file = %file, discarded = records.len(), "dropping partial records");
        records.clear();
    }

    FileExtraction {
        file,
        records,
        diagnostics,
        result,
    }
}

fn extract_source_file(
    ctx: &mut ExtractionContext<'_>,
    root: &SyntaxNode,
) -> Result<(), ExtractError> {
    let error = root
        .descendants_with_tokens()
        .find(|e| e.kind() == SyntaxKind::ERROR);
    if let Some(element) = error {
        return Err(malformed(ctx, element.text_range(), "tree contains an error element"));
    }
    let Some(source) = SourceFile::cast(root.clone()) else {
        return Err(malformed(ctx, root.text_range(), "root is not a source file"));
    };

    let package = source.package_name();

    if ctx.options.emit_package_statements {
        if let Some(reference) = source.package_statement().and_then(|p| p.reference()) {
            ctx.emitter
                .emit_package(reference.syntax().text_range(), &package);
        }
    }

    if ctx.options.emit_imports {
        for import in source.imports() {
            if let Some(reference) = import.reference() {
                ctx.emitter
                    .emit_class(reference.syntax().text_range(), &reference.qualified_text());
            }
        }
    }

    for class in source.classes() {
        extract_class(ctx, &class, &package, None)?;
    }
    Ok(())
}

fn extract_class(
    ctx: &mut ExtractionContext<'_>,
    class: &ClassDecl,
    package: &str,
    outer: Option<&str>,
) -> Result<(), ExtractError> {
    let Some(name) = class.name_token() else {
        missing_name(ctx, class.syntax(), "class");
        return Ok(());
    };
    let qualified = match outer {
        Some(outer) => format!("{outer}.{}", name.text()),
        None if package.is_empty() => name.text().to_string(),
        None => format!("{package}.{}", name.text()),
    };
    ctx.emitter.emit_class(name.text_range(), &qualified);

    {
        let mut walker = SymbolReferenceWalker::new(ctx, qualified.as_str());
        for header in class.header_nodes() {
            walker.walk(&header)?;
        }
    }

    for member in class.members() {
        match member {
            ClassMember::Field(field) => extract_field(ctx, &qualified, &field)?,
            ClassMember::EnumConstant(constant) => {
                extract_enum_constant(ctx, &qualified, &constant)?
            }
            ClassMember::Method(method) => extract_method(ctx, &qualified, &method)?,
            ClassMember::Initializer(initializer) => {
                let mut walker = SymbolReferenceWalker::for_method(
                    ctx,
                    qualified.as_str(),
                    MethodContext::class_initializer(),
                );
                walker.walk(initializer.syntax())?;
            }
            ClassMember::Class(inner) => {
                extract_class(ctx, &inner, package, Some(qualified.as_str()))?
            }
        }
    }
    Ok(())
}

fn extract_field(
    ctx: &mut ExtractionContext<'_>,
    owner: &str,
    field: &FieldDecl,
) -> Result<(), ExtractError> {
    let mut walker = SymbolReferenceWalker::new(ctx, owner);
    if let Some(modifiers) = field.modifier_list() {
        walker.walk(modifiers.syntax())?;
    }
    if let Some(ty) = field.ty() {
        walker.emit_type_range(&ty)?;
    }
    match field.name_token() {
        Some(name) => walker
            .context()
            .emitter
            .emit_field(name.text_range(), owner, name.text()),
        None => missing_name(walker.context(), field.syntax(), "field"),
    }
    if let Some(initializer) = field.initializer() {
        walker.walk(&initializer)?;
    }
    Ok(())
}

fn extract_enum_constant(
    ctx: &mut ExtractionContext<'_>,
    owner: &str,
    constant: &EnumConstant,
) -> Result<(), ExtractError> {
    let Some(name) = constant.name_token() else {
        missing_name(ctx, constant.syntax(), "enum constant");
        return Ok(());
    };
    ctx.emitter.emit_field(name.text_range(), owner, name.text());

    // arguments and constant body
    let mut walker = SymbolReferenceWalker::new(ctx, owner);
    for child in constant.syntax().children() {
        walker.walk(&child)?;
    }
    Ok(())
}

fn extract_method(
    ctx: &mut ExtractionContext<'_>,
    owner: &str,
    method: &MethodDecl,
) -> Result<(), ExtractError> {
    let Some(name) = method.name_token() else {
        missing_name(ctx, method.syntax(), "method");
        return Ok(());
    };
    let Some(ty) = ctx.resolver.method_type(method) else {
        let offset = ctx.offset(name.text_range());
        let file = ctx.file().clone();
        ctx.diagnostics.add(
            Diagnostic::error(
                file.clone(),
                codes::UNRESOLVED_METHOD_TYPE,
                format!("unresolved types of method `{}` in {owner}", name.text()),
            )
            .at(offset),
        );
        return Err(ExtractError::UnresolvedMethodType {
            file,
            class: owner.into(),
            method: name.text().into(),
            offset,
        });
    };
    let signature = method_descriptor(&ty);
    ctx.emitter
        .emit_method(name.text_range(), owner, name.text(), &signature);

    let mut walker =
        SymbolReferenceWalker::for_method(ctx, owner, MethodContext::new(name.text(), signature));
    if let Some(modifiers) = method.modifier_list() {
        walker.walk(modifiers.syntax())?;
    }
    if let Some(type_parameters) = method.type_parameter_list() {
        walker.walk(&type_parameters)?;
    }
    if let Some(return_type) = method.return_type() {
        walker.emit_type_range(&return_type)?;
    }
    for (index, parameter) in (0u32..).zip(method.parameters()) {
        walker.declare_method_parameter(index, &parameter)?;
    }
    if let Some(throws) = method.throws_list() {
        walker.walk(throws.syntax())?;
    }
    if let Some(body) = method.body() {
        walker.walk(body.syntax())?;
    }
    Ok(())
}

fn malformed(ctx: &mut ExtractionContext<'_>, range: TextRange, message: &str) -> ExtractError {
    let offset = ctx.offset(range);
    let file = ctx.file().clone();
    ctx.diagnostics.add(
        Diagnostic::error(file.clone(), codes::MALFORMED_SYNTAX, message.to_string()).at(offset),
    );
    ExtractError::MalformedSyntax { file, offset }
}

fn missing_name(ctx: &mut ExtractionContext<'_>, node: &SyntaxNode, what: &str) {
    let offset = ctx.offset(node.text_range());
    let file = ctx.file().clone();
    ctx.diagnostics.add(
        Diagnostic::warning(file, codes::MISSING_NAME, format!("{what} without a name")).at(offset),
    );
}
