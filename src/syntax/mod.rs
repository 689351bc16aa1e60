//! Syntax: the Rowan-based Java CST consumed by the extractor.
//!
//! ```text
//! external parser/resolver
//!     ↓ (adapter drives TreeBuilder)
//! GreenNode (immutable, cheap to clone)
//!     ↓
//! SyntaxNode (rowan) → CST with parent pointers
//!     ↓
//! AST layer → typed wrappers over SyntaxNode
//! ```

pub mod ast;
mod builder;
mod syntax_kind;

pub use ast::*;
pub use builder::TreeBuilder;
pub use syntax_kind::{JavaLanguage, SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken};

/// Re-export rowan types for convenience
pub use rowan::{GreenNode, NodeOrToken, TextRange, TextSize};
