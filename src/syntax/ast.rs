//! Typed AST wrappers over the untyped rowan CST.
//!
//! Each struct wraps a SyntaxNode and provides accessors for the children the
//! extractor needs. Anything not exposed here is still reachable through
//! [`AstNode::syntax`] and is walked generically.

use super::syntax_kind::SyntaxKind;
use super::{SyntaxNode, SyntaxToken};

// ============================================================================
// Helper utilities
// ============================================================================

/// First direct identifier token, which is the declared name for every
/// declaration node (types and parameter lists are child nodes, not tokens).
#[inline]
fn find_name_token(node: &SyntaxNode) -> Option<SyntaxToken> {
    node.children_with_tokens()
        .filter_map(|e| e.into_token())
        .find(|t| t.kind() == SyntaxKind::IDENT)
}

/// Concatenate the non-trivia token text below `node`, skipping type arguments.
fn collect_name_text(node: &SyntaxNode, out: &mut String) {
    for element in node.children_with_tokens() {
        match element {
            rowan::NodeOrToken::Token(t) => {
                if !t.kind().is_trivia() {
                    out.push_str(t.text());
                }
            }
            rowan::NodeOrToken::Node(n) => {
                if n.kind() != SyntaxKind::TYPE_ARGUMENT_LIST {
                    collect_name_text(&n, out);
                }
            }
        }
    }
}

/// Trait for typed wrappers around a SyntaxNode
pub trait AstNode: Sized {
    fn can_cast(kind: SyntaxKind) -> bool;
    fn cast(node: SyntaxNode) -> Option<Self>;
    fn syntax(&self) -> &SyntaxNode;

    /// Find all descendant nodes of a specific AST type
    fn descendants<T: AstNode>(&self) -> impl Iterator<Item = T> {
        self.syntax().descendants().filter_map(T::cast)
    }
}

// ============================================================================
// Helper macros
// ============================================================================

macro_rules! ast_node {
    ($name:ident, $kind:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(pub(crate) SyntaxNode);

        impl AstNode for $name {
            fn can_cast(kind: SyntaxKind) -> bool {
                kind == SyntaxKind::$kind
            }

            fn cast(node: SyntaxNode) -> Option<Self> {
                if Self::can_cast(node.kind()) {
                    Some(Self(node))
                } else {
                    None
                }
            }

            fn syntax(&self) -> &SyntaxNode {
                &self.0
            }
        }
    };
}

macro_rules! first_child_method {
    ($name:ident, $type:ident) => {
        #[doc = concat!("Get the first `", stringify!($type), "` child of this node.")]
        pub fn $name(&self) -> Option<$type> {
            self.0.children().find_map($type::cast)
        }
    };
}

macro_rules! children_method {
    ($name:ident, $type:ident) => {
        #[doc = concat!("Get all `", stringify!($type), "` children of this node.")]
        pub fn $name(&self) -> impl Iterator<Item = $type> + '_ {
            self.0.children().filter_map($type::cast)
        }
    };
}

macro_rules! name_token_method {
    () => {
        /// The identifier token naming this declaration.
        pub fn name_token(&self) -> Option<SyntaxToken> {
            find_name_token(&self.0)
        }

        /// The declared name, if present.
        pub fn name(&self) -> Option<String> {
            self.name_token().map(|t| t.text().to_string())
        }
    };
}

// ============================================================================
// File level
// ============================================================================

ast_node!(SourceFile, SOURCE_FILE);

impl SourceFile {
    first_child_method!(package_statement, PackageStatement);
    children_method!(imports, ImportStatement);
    children_method!(classes, ClassDecl);

    /// Package name declared by this file, empty for the default package.
    pub fn package_name(&self) -> String {
        self.package_statement()
            .map(|p| p.name())
            .unwrap_or_default()
    }
}

ast_node!(PackageStatement, PACKAGE_STATEMENT);

impl PackageStatement {
    first_child_method!(reference, Reference);

    pub fn name(&self) -> String {
        self.reference()
            .map(|r| r.qualified_text())
            .unwrap_or_default()
    }
}

ast_node!(ImportStatement, IMPORT_STATEMENT);

impl ImportStatement {
    first_child_method!(reference, Reference);
}

// ============================================================================
// Declarations
// ============================================================================

ast_node!(ClassDecl, CLASS);

/// A member of a class body, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ClassMember {
    Field(FieldDecl),
    EnumConstant(EnumConstant),
    Method(MethodDecl),
    Initializer(ClassInitializer),
    Class(ClassDecl),
}

impl ClassDecl {
    name_token_method!();
    first_child_method!(modifier_list, ModifierList);

    /// Header nodes that may contain references: modifiers, type parameters,
    /// extends and implements lists.
    pub fn header_nodes(&self) -> impl Iterator<Item = SyntaxNode> + '_ {
        self.0.children().filter(|n| {
            matches!(
                n.kind(),
                SyntaxKind::MODIFIER_LIST
                    | SyntaxKind::TYPE_PARAMETER_LIST
                    | SyntaxKind::EXTENDS_LIST
                    | SyntaxKind::IMPLEMENTS_LIST
            )
        })
    }

    pub fn members(&self) -> impl Iterator<Item = ClassMember> + '_ {
        self.0.children().filter_map(|n| match n.kind() {
            SyntaxKind::FIELD => Some(ClassMember::Field(FieldDecl(n))),
            SyntaxKind::ENUM_CONSTANT => Some(ClassMember::EnumConstant(EnumConstant(n))),
            SyntaxKind::METHOD => Some(ClassMember::Method(MethodDecl(n))),
            SyntaxKind::CLASS_INITIALIZER => {
                Some(ClassMember::Initializer(ClassInitializer(n)))
            }
            SyntaxKind::CLASS => Some(ClassMember::Class(ClassDecl(n))),
            _ => None,
        })
    }
}

ast_node!(ModifierList, MODIFIER_LIST);

ast_node!(FieldDecl, FIELD);

impl FieldDecl {
    name_token_method!();
    first_child_method!(modifier_list, ModifierList);
    first_child_method!(ty, TypeElement);

    /// The initializer expression after `=`.
    pub fn initializer(&self) -> Option<SyntaxNode> {
        node_after_eq(&self.0)
    }
}

ast_node!(EnumConstant, ENUM_CONSTANT);

impl EnumConstant {
    name_token_method!();
}

ast_node!(MethodDecl, METHOD);

impl MethodDecl {
    name_token_method!();
    first_child_method!(modifier_list, ModifierList);
    first_child_method!(parameter_list, ParameterList);
    first_child_method!(throws_list, ThrowsList);
    first_child_method!(body, CodeBlock);

    pub fn type_parameter_list(&self) -> Option<SyntaxNode> {
        self.0
            .children()
            .find(|n| n.kind() == SyntaxKind::TYPE_PARAMETER_LIST)
    }

    /// Declared return type; `None` for constructors.
    pub fn return_type(&self) -> Option<TypeElement> {
        self.0.children().find_map(TypeElement::cast)
    }

    pub fn is_constructor(&self) -> bool {
        self.return_type().is_none()
    }

    pub fn parameters(&self) -> Vec<Parameter> {
        self.parameter_list()
            .map(|list| list.parameters().collect())
            .unwrap_or_default()
    }
}

ast_node!(ParameterList, PARAMETER_LIST);

impl ParameterList {
    children_method!(parameters, Parameter);
}

ast_node!(Parameter, PARAMETER);

impl Parameter {
    name_token_method!();
    first_child_method!(modifier_list, ModifierList);
    first_child_method!(ty, TypeElement);
}

ast_node!(ThrowsList, THROWS_LIST);

ast_node!(ClassInitializer, CLASS_INITIALIZER);

// ============================================================================
// Types and references
// ============================================================================

ast_node!(TypeElement, TYPE);

impl TypeElement {
    first_child_method!(reference, Reference);
    children_method!(nested_types, TypeElement);

    /// The primitive keyword when this is a primitive (or `void`) type.
    pub fn primitive_token(&self) -> Option<SyntaxToken> {
        self.0
            .children_with_tokens()
            .filter_map(|e| e.into_token())
            .find(|t| t.kind().is_primitive_type())
    }

    /// Primitive types, and arrays of them, never name a renamable symbol.
    pub fn is_primitive(&self) -> bool {
        self.reference().is_none() && self.primitive_token().is_some()
    }

    pub fn array_dimensions(&self) -> usize {
        self.0
            .children_with_tokens()
            .filter_map(|e| e.into_token())
            .filter(|t| matches!(t.kind(), SyntaxKind::L_BRACKET | SyntaxKind::ELLIPSIS))
            .count()
    }
}

ast_node!(TypeArgumentList, TYPE_ARGUMENT_LIST);

impl TypeArgumentList {
    children_method!(types, TypeElement);
}

ast_node!(Reference, REFERENCE);

impl Reference {
    first_child_method!(type_arguments, TypeArgumentList);

    /// The token naming this reference without qualification: the last
    /// identifier (or `this`/`super` for explicit constructor calls).
    pub fn name_token(&self) -> Option<SyntaxToken> {
        self.0
            .children_with_tokens()
            .filter_map(|e| e.into_token())
            .filter(|t| {
                matches!(
                    t.kind(),
                    SyntaxKind::IDENT | SyntaxKind::THIS_KW | SyntaxKind::SUPER_KW
                )
            })
            .last()
    }

    pub fn name(&self) -> Option<String> {
        self.name_token().map(|t| t.text().to_string())
    }

    /// The qualifier before the dot, when there is one.
    pub fn qualifier(&self) -> Option<SyntaxNode> {
        self.0
            .children()
            .find(|n| n.kind() != SyntaxKind::TYPE_ARGUMENT_LIST)
    }

    /// Dotted text of the reference with trivia and type arguments removed.
    pub fn qualified_text(&self) -> String {
        let mut out = String::new();
        collect_name_text(&self.0, &mut out);
        out
    }
}

// ============================================================================
// Statements
// ============================================================================

ast_node!(CodeBlock, CODE_BLOCK);

ast_node!(DeclarationStatement, DECLARATION_STATEMENT);

impl DeclarationStatement {
    /// Declared elements: local variables, local classes, or anything else
    /// the adapter put there.
    pub fn declared_elements(&self) -> impl Iterator<Item = SyntaxNode> + '_ {
        self.0
            .children()
            .filter(|n| n.kind() != SyntaxKind::MODIFIER_LIST)
    }
}

ast_node!(LocalVariable, LOCAL_VARIABLE);

impl LocalVariable {
    name_token_method!();
    first_child_method!(modifier_list, ModifierList);
    first_child_method!(ty, TypeElement);

    pub fn initializer(&self) -> Option<SyntaxNode> {
        node_after_eq(&self.0)
    }
}

ast_node!(CatchSection, CATCH_SECTION);

impl CatchSection {
    first_child_method!(parameter, Parameter);
}

ast_node!(ForeachStatement, FOREACH_STATEMENT);

impl ForeachStatement {
    // the iteration variable of `for (Type v : ...)`
    first_child_method!(iteration_parameter, Parameter);
}

/// First child node following an `=` token.
fn node_after_eq(node: &SyntaxNode) -> Option<SyntaxNode> {
    node.children_with_tokens()
        .skip_while(|e| e.kind() != SyntaxKind::EQ)
        .find_map(|e| e.into_node())
}
