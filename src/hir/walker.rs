//! Symbol reference walker.
//!
//! Walks one code scope (a method, an initializer, a field initializer or a
//! class header) in pre-order and emits a record for every declaration and
//! reference it meets.
//!
//! Local variables get a per-walker index in declaration order. Code between
//! `// <tag> start` and `// <tag> end` comments is *injected*: its locals are
//! numbered from a separate counter starting at the injected base, so that the
//! indices of the surrounding code do not shift when the injection changes.

use rustc_hash::FxHashMap;
use smol_str::SmolStr;
use tracing::{debug, trace};

use super::context::ExtractionContext;
use super::diagnostics::{Diagnostic, codes};
use super::error::ExtractError;
use super::identity::MethodContext;
use super::resolve::{DeclarationId, ParameterScope, Referent};
use super::signature::method_descriptor;
use crate::base::constants::{LINE_COMMENT_PREFIX, REGION_END, REGION_START};
use crate::syntax::{
    AstNode, CatchSection, DeclarationStatement, ForeachStatement, LocalVariable, NodeOrToken,
    Parameter, Reference, SyntaxKind, SyntaxNode, SyntaxToken, TypeElement,
};

// ============================================================================
// CODE REGIONS
// ============================================================================

/// Whether the walker is inside injected code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CodeRegion {
    #[default]
    Normal,
    Injected,
}

/// Parse a region marker comment: `// <tag> start` or `// <tag> end`.
///
/// Returns the region the marker switches to, or `None` when the comment is
/// not a marker (or names a tag outside `accept_tag`). Trailing words are
/// ignored.
pub fn parse_region_marker(text: &str, accept_tag: impl Fn(&str) -> bool) -> Option<CodeRegion> {
    let mut words = text.split_whitespace();
    let (Some(opener), Some(tag), Some(command)) = (words.next(), words.next(), words.next())
    else {
        return None;
    };
    if opener != LINE_COMMENT_PREFIX || !accept_tag(tag) {
        return None;
    }
    if command.eq_ignore_ascii_case(REGION_START) {
        Some(CodeRegion::Injected)
    } else if command.eq_ignore_ascii_case(REGION_END) {
        Some(CodeRegion::Normal)
    } else {
        None
    }
}

// ============================================================================
// DECLARATION INDICES
// ============================================================================

/// Local declaration indices of one walker.
///
/// Normal and injected declarations draw from independent counters, so the
/// normal indices only depend on the normal declarations before them.
#[derive(Debug, Clone)]
pub struct DeclarationIndexTable {
    indices: FxHashMap<DeclarationId, u32>,
    next_normal: u32,
    next_injected: u32,
}

impl DeclarationIndexTable {
    pub fn new(injected_base: u32) -> Self {
        Self {
            indices: FxHashMap::default(),
            next_normal: 0,
            next_injected: injected_base,
        }
    }

    /// Assign the next index of `region` to `declaration`.
    pub fn assign(&mut self, declaration: DeclarationId, region: CodeRegion) -> u32 {
        let counter = match region {
            CodeRegion::Normal => &mut self.next_normal,
            CodeRegion::Injected => &mut self.next_injected,
        };
        let index = *counter;
        *counter += 1;
        self.indices.insert(declaration, index);
        index
    }

    pub fn get(&self, declaration: DeclarationId) -> Option<u32> {
        self.indices.get(&declaration).copied()
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

// ============================================================================
// WALKER
// ============================================================================

/// Walks one scope of a class and emits its ranges.
///
/// A walker is never shared between methods: every method body starts with an
/// empty local table and normal region.
pub struct SymbolReferenceWalker<'c, 'a> {
    ctx: &'c mut ExtractionContext<'a>,
    class_name: SmolStr,
    method: MethodContext,
    region: CodeRegion,
    locals: DeclarationIndexTable,
    parameters: FxHashMap<DeclarationId, u32>,
    injected_base: u32,
    collision_reported: bool,
}

impl<'c, 'a> SymbolReferenceWalker<'c, 'a> {
    /// Walker for code outside any method (field initializers, class headers).
    pub fn new(ctx: &'c mut ExtractionContext<'a>, class_name: impl Into<SmolStr>) -> Self {
        Self::for_method(ctx, class_name, MethodContext::outside_method())
    }

    pub fn for_method(
        ctx: &'c mut ExtractionContext<'a>,
        class_name: impl Into<SmolStr>,
        method: MethodContext,
    ) -> Self {
        let injected_base = ctx.options.injected_index_base;
        Self {
            ctx,
            class_name: class_name.into(),
            method,
            region: CodeRegion::Normal,
            locals: DeclarationIndexTable::new(injected_base),
            parameters: FxHashMap::default(),
            injected_base,
            collision_reported: false,
        }
    }

    pub fn context(&mut self) -> &mut ExtractionContext<'a> {
        &mut *self.ctx
    }

    /// Seed the parameter table before the walk begins.
    pub fn add_parameter_indices(
        &mut self,
        indices: impl IntoIterator<Item = (DeclarationId, u32)>,
    ) {
        self.parameters.extend(indices);
    }

    /// Emit the declaration of the `index`-th parameter of the method and
    /// record its index for later references.
    pub fn declare_method_parameter(
        &mut self,
        index: u32,
        parameter: &Parameter,
    ) -> Result<(), ExtractError> {
        if let Some(modifiers) = parameter.modifier_list() {
            self.walk(modifiers.syntax())?;
        }
        if let Some(ty) = parameter.ty() {
            self.emit_type_range(&ty)?;
        }
        let Some(name) = parameter.name_token() else {
            self.missing_name(parameter.syntax(), "parameter");
            return Ok(());
        };
        self.parameters.insert(DeclarationId::of(&name), index);
        self.ctx.emitter.emit_parameter(
            name.text_range(),
            &self.class_name,
            &self.method,
            name.text(),
            Some(index),
        );
        Ok(())
    }

    /// Walk `node` and everything below it in source order.
    ///
    /// Stops at the first unresolved reference.
    pub fn walk(&mut self, node: &SyntaxNode) -> Result<(), ExtractError> {
        match node.kind() {
            SyntaxKind::DECLARATION_STATEMENT => {
                if let Some(statement) = DeclarationStatement::cast(node.clone()) {
                    self.visit_declaration_statement(&statement)?;
                }
            }
            SyntaxKind::CATCH_SECTION => {
                if let Some(parameter) =
                    CatchSection::cast(node.clone()).and_then(|c| c.parameter())
                {
                    self.declare_variable(
                        parameter.ty(),
                        parameter.name_token(),
                        parameter.syntax(),
                    )?;
                }
            }
            SyntaxKind::FOREACH_STATEMENT => {
                if let Some(parameter) =
                    ForeachStatement::cast(node.clone()).and_then(|f| f.iteration_parameter())
                {
                    self.declare_variable(
                        parameter.ty(),
                        parameter.name_token(),
                        parameter.syntax(),
                    )?;
                }
            }
            SyntaxKind::REFERENCE => {
                if let Some(reference) = Reference::cast(node.clone()) {
                    self.visit_reference(&reference)?;
                }
            }
            _ => {}
        }

        for child in node.children_with_tokens() {
            match child {
                NodeOrToken::Node(child) => self.walk(&child)?,
                NodeOrToken::Token(token) => self.visit_token(&token),
            }
        }
        Ok(())
    }

    /// Emit class ranges for the class names inside a type: the type itself,
    /// then its type arguments, wildcard bounds and union alternatives.
    pub fn emit_type_range(&mut self, ty: &TypeElement) -> Result<(), ExtractError> {
        if let Some(reference) = ty.reference() {
            match self.ctx.resolver.resolve(&reference) {
                Some(Referent::Class { qualified_name }) => {
                    if let Some(name) = reference.name_token() {
                        self.ctx
                            .emitter
                            .emit_class(name.text_range(), &qualified_name);
                    }
                    if let Some(arguments) = reference.type_arguments() {
                        for argument in arguments.types() {
                            self.emit_type_range(&argument)?;
                        }
                    }
                }
                Some(other) => {
                    trace!(kind = other.kind_name(), "type does not name a class");
                }
                None => return Err(self.unresolved(&reference)),
            }
        }
        for nested in ty.nested_types() {
            self.emit_type_range(&nested)?;
        }
        Ok(())
    }

    fn visit_token(&mut self, token: &SyntaxToken) {
        if token.kind() != SyntaxKind::LINE_COMMENT {
            return;
        }
        let options = self.ctx.options;
        if let Some(region) =
            parse_region_marker(token.text(), |tag| options.accepts_region_tag(tag))
        {
            if region != self.region {
                debug!(
                    class = %self.class_name,
                    method = %self.method.name,
                    ?region,
                    "region marker"
                );
            }
            self.region = region;
        }
    }

    fn visit_declaration_statement(
        &mut self,
        statement: &DeclarationStatement,
    ) -> Result<(), ExtractError> {
        for element in statement.declared_elements() {
            match element.kind() {
                SyntaxKind::LOCAL_VARIABLE => {
                    if let Some(variable) = LocalVariable::cast(element) {
                        self.declare_variable(
                            variable.ty(),
                            variable.name_token(),
                            variable.syntax(),
                        )?;
                    }
                }
                SyntaxKind::CLASS => {
                    self.warn(
                        &element,
                        codes::UNSUPPORTED_DECLARATION,
                        format!("local class in {} is not indexed", self.scope_description()),
                    );
                }
                kind => {
                    self.warn(
                        &element,
                        codes::UNSUPPORTED_DECLARATION,
                        format!("unknown declaration {kind:?} in {}", self.scope_description()),
                    );
                }
            }
        }
        Ok(())
    }

    /// Local variable, for-each variable or catch parameter.
    fn declare_variable(
        &mut self,
        ty: Option<TypeElement>,
        name: Option<SyntaxToken>,
        declaration: &SyntaxNode,
    ) -> Result<(), ExtractError> {
        if let Some(ty) = ty {
            self.emit_type_range(&ty)?;
        }
        let Some(name) = name else {
            self.missing_name(declaration, "local variable");
            return Ok(());
        };
        let index = self.assign_local_index(DeclarationId::of(&name), &name);
        self.ctx.emitter.emit_local_variable(
            name.text_range(),
            &self.class_name,
            &self.method,
            name.text(),
            Some(index),
        );
        Ok(())
    }

    fn assign_local_index(&mut self, declaration: DeclarationId, name: &SyntaxToken) -> u32 {
        let index = self.locals.assign(declaration, self.region);
        if self.region == CodeRegion::Normal
            && index >= self.injected_base
            && !self.collision_reported
        {
            self.collision_reported = true;
            let message = format!(
                "local index {index} of `{}` reaches the injected base {} in {}",
                name.text(),
                self.injected_base,
                self.scope_description()
            );
            self.warn_at(name, codes::INDEX_COLLISION, message);
        }
        index
    }

    fn visit_reference(&mut self, reference: &Reference) -> Result<(), ExtractError> {
        let Some(name) = reference.name_token() else {
            trace!("reference without a name");
            return Ok(());
        };
        let range = name.text_range();

        match self.ctx.resolver.resolve(reference) {
            None => return Err(self.unresolved(reference)),
            Some(Referent::Package { .. }) => {}
            Some(Referent::Class { qualified_name }) => {
                self.ctx.emitter.emit_class(range, &qualified_name);
            }
            Some(Referent::Field { owner, name }) => {
                self.ctx.emitter.emit_field(range, &owner, &name);
            }
            Some(Referent::Method { owner, name, ty }) => {
                let signature = method_descriptor(&ty);
                self.ctx.emitter.emit_method(range, &owner, &name, &signature);
            }
            Some(Referent::LocalVariable {
                declaration,
                name: local,
            }) => self.emit_local_reference(&name, declaration, &local),
            Some(Referent::Parameter {
                declaration,
                name: parameter,
                scope,
            }) => match scope {
                ParameterScope::Method => {
                    let index = self.parameters.get(&declaration).copied();
                    if index.is_none() {
                        let message = format!(
                            "no index for parameter `{parameter}` in {}",
                            self.scope_description()
                        );
                        self.warn_at(&name, codes::MISSING_PARAMETER_INDEX, message);
                    }
                    self.ctx.emitter.emit_parameter(
                        range,
                        &self.class_name,
                        &self.method,
                        &parameter,
                        index,
                    );
                }
                ParameterScope::Foreach | ParameterScope::Catch => {
                    self.emit_local_reference(&name, declaration, &parameter)
                }
                ParameterScope::Lambda => {
                    let message = format!(
                        "lambda parameter `{parameter}` in {} is not indexed",
                        self.scope_description()
                    );
                    self.warn_at(&name, codes::UNSUPPORTED_REFERENT, message);
                }
            },
            Some(Referent::Other { description }) => {
                let message = format!(
                    "reference `{}` resolves to unsupported {description}",
                    name.text()
                );
                self.warn_at(&name, codes::UNSUPPORTED_REFERENT, message);
            }
        }
        Ok(())
    }

    fn emit_local_reference(
        &mut self,
        token: &SyntaxToken,
        declaration: DeclarationId,
        name: &str,
    ) {
        let index = self.locals.get(declaration);
        if index.is_none() {
            let message = format!(
                "no index for local variable `{name}` in {}",
                self.scope_description()
            );
            self.warn_at(token, codes::MISSING_LOCAL_INDEX, message);
        }
        self.ctx.emitter.emit_local_variable(
            token.text_range(),
            &self.class_name,
            &self.method,
            name,
            index,
        );
    }

    fn scope_description(&self) -> String {
        format!(
            "{} {},{}",
            self.class_name, self.method.name, self.method.signature
        )
    }

    fn unresolved(&mut self, reference: &Reference) -> ExtractError {
        let text = reference.qualified_text();
        let start = reference
            .name_token()
            .map_or_else(|| reference.syntax().text_range(), |t| t.text_range());
        let offset = self.ctx.offset(start);
        let file = self.ctx.file().clone();

        self.ctx.diagnostics.add(
            Diagnostic::error(
                file.clone(),
                codes::UNRESOLVED_REFERENCE,
                format!("unresolved symbol `{text}` in {}", self.scope_description()),
            )
            .at(offset),
        );
        ExtractError::UnresolvedReference {
            file,
            class: self.class_name.clone(),
            method: self.method.name.clone(),
            signature: self.method.signature.clone(),
            name: text.into(),
            offset,
        }
    }

    fn missing_name(&mut self, node: &SyntaxNode, what: &str) {
        let message = format!("{what} without a name in {}", self.scope_description());
        self.warn(node, codes::MISSING_NAME, message);
    }

    fn warn(&mut self, node: &SyntaxNode, code: &'static str, message: String) {
        let offset = self.ctx.offset(node.text_range());
        let file = self.ctx.file().clone();
        self.ctx
            .diagnostics
            .add(Diagnostic::warning(file, code, message).at(offset));
    }

    fn warn_at(&mut self, token: &SyntaxToken, code: &'static str, message: String) {
        let offset = self.ctx.offset(token.text_range());
        let file = self.ctx.file().clone();
        self.ctx
            .diagnostics
            .add(Diagnostic::warning(file, code, message).at(offset));
    }
}
