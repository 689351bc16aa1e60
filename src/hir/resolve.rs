//! Resolution seam: what a reference points at.
//!
//! Parsing and type resolution happen outside this crate. The extractor asks a
//! [`SymbolResolver`] two questions:
//!
//! 1. what does this reference resolve to ([`Referent`])?
//! 2. what are the parameter and return types of this method declaration?
//!
//! [`ResolutionTable`] answers both from maps filled ahead of time by an
//! adapter, keyed by the range of the naming identifier.

use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use super::types::MethodType;
use crate::base::TextRange;
use crate::syntax::{AstNode, MethodDecl, Reference, SyntaxNode, SyntaxToken};

// ============================================================================
// DECLARATION IDENTITY
// ============================================================================

/// Identifies a variable or parameter declaration within one file.
///
/// The id is the range of the declaration's name identifier, which is unique
/// per file and available both to the adapter and to the walker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeclarationId(TextRange);

impl DeclarationId {
    pub fn new(name_range: TextRange) -> Self {
        Self(name_range)
    }

    pub fn of(name: &SyntaxToken) -> Self {
        Self(name.text_range())
    }

    pub fn range(self) -> TextRange {
        self.0
    }
}

// ============================================================================
// REFERENTS
// ============================================================================

/// Where a parameter was declared.
///
/// For-each variables and catch parameters are parameters to the parser but
/// behave like local variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterScope {
    Method,
    Foreach,
    Catch,
    Lambda,
}

/// The declaration a reference resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Referent {
    Package {
        name: SmolStr,
    },
    Class {
        qualified_name: SmolStr,
    },
    Field {
        owner: SmolStr,
        name: SmolStr,
    },
    Method {
        owner: SmolStr,
        name: SmolStr,
        ty: MethodType,
    },
    LocalVariable {
        declaration: DeclarationId,
        name: SmolStr,
    },
    Parameter {
        declaration: DeclarationId,
        name: SmolStr,
        scope: ParameterScope,
    },
    /// Anything else: type parameters, labels, ...
    Other {
        description: SmolStr,
    },
}

impl Referent {
    pub fn package(name: impl Into<SmolStr>) -> Self {
        Referent::Package { name: name.into() }
    }

    pub fn class(qualified_name: impl Into<SmolStr>) -> Self {
        Referent::Class {
            qualified_name: qualified_name.into(),
        }
    }

    pub fn field(owner: impl Into<SmolStr>, name: impl Into<SmolStr>) -> Self {
        Referent::Field {
            owner: owner.into(),
            name: name.into(),
        }
    }

    pub fn method(owner: impl Into<SmolStr>, name: impl Into<SmolStr>, ty: MethodType) -> Self {
        Referent::Method {
            owner: owner.into(),
            name: name.into(),
            ty,
        }
    }

    pub fn local(declaration: DeclarationId, name: impl Into<SmolStr>) -> Self {
        Referent::LocalVariable {
            declaration,
            name: name.into(),
        }
    }

    pub fn parameter(
        declaration: DeclarationId,
        name: impl Into<SmolStr>,
        scope: ParameterScope,
    ) -> Self {
        Referent::Parameter {
            declaration,
            name: name.into(),
            scope,
        }
    }

    pub fn other(description: impl Into<SmolStr>) -> Self {
        Referent::Other {
            description: description.into(),
        }
    }

    /// Short label for logs.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Referent::Package { .. } => "package",
            Referent::Class { .. } => "class",
            Referent::Field { .. } => "field",
            Referent::Method { .. } => "method",
            Referent::LocalVariable { .. } => "local variable",
            Referent::Parameter { .. } => "parameter",
            Referent::Other { .. } => "other",
        }
    }
}

// ============================================================================
// RESOLVER
// ============================================================================

/// External resolver consulted by the extractor.
pub trait SymbolResolver {
    /// Resolve a reference; `None` means the reference is unresolved.
    fn resolve(&self, reference: &Reference) -> Option<Referent>;

    /// Resolved types of a method or constructor declaration.
    fn method_type(&self, method: &MethodDecl) -> Option<MethodType>;
}

impl<T: SymbolResolver + ?Sized> SymbolResolver for &T {
    fn resolve(&self, reference: &Reference) -> Option<Referent> {
        (**self).resolve(reference)
    }

    fn method_type(&self, method: &MethodDecl) -> Option<MethodType> {
        (**self).method_type(method)
    }
}

/// Pre-computed resolution results for one file.
///
/// References are keyed by the range of their name token, method declarations
/// by the range of their name identifier.
#[derive(Debug, Clone, Default)]
pub struct ResolutionTable {
    references: FxHashMap<TextRange, Referent>,
    methods: FxHashMap<TextRange, MethodType>,
}

impl ResolutionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record what the reference named at `name_range` resolves to.
    pub fn insert_reference(&mut self, name_range: TextRange, referent: Referent) {
        self.references.insert(name_range, referent);
    }

    /// Record the types of the method declared with its name at `name_range`.
    pub fn insert_method(&mut self, name_range: TextRange, ty: MethodType) {
        self.methods.insert(name_range, ty);
    }

    pub fn reference_count(&self) -> usize {
        self.references.len()
    }

    pub fn method_count(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.references.is_empty() && self.methods.is_empty()
    }
}

impl SymbolResolver for ResolutionTable {
    fn resolve(&self, reference: &Reference) -> Option<Referent> {
        let name = reference.name_token()?;
        self.references.get(&name.text_range()).cloned()
    }

    fn method_type(&self, method: &MethodDecl) -> Option<MethodType> {
        let name = method.name_token()?;
        self.methods.get(&name.text_range()).cloned()
    }
}

/// Resolution tables of several files.
///
/// The table is picked by the root of the tree the reference or method
/// belongs to, so each tree must be registered with the root it is walked
/// from.
#[derive(Debug, Clone, Default)]
pub struct WorkspaceResolution {
    files: FxHashMap<SyntaxNode, ResolutionTable>,
}

impl WorkspaceResolution {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, root: SyntaxNode, table: ResolutionTable) {
        self.files.insert(root, table);
    }

    fn table_of(&self, node: &SyntaxNode) -> Option<&ResolutionTable> {
        let root = node.ancestors().last()?;
        self.files.get(&root)
    }
}

impl SymbolResolver for WorkspaceResolution {
    fn resolve(&self, reference: &Reference) -> Option<Referent> {
        self.table_of(reference.syntax())?.resolve(reference)
    }

    fn method_type(&self, method: &MethodDecl) -> Option<MethodType> {
        self.table_of(method.syntax())?.method_type(method)
    }
}
