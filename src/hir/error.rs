//! Error types for range extraction.

use smol_str::SmolStr;
use thiserror::Error;

/// Errors that fail the extraction of a whole file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// A reference the resolver could not resolve.
    #[error("unresolved symbol `{name}` at {file}:{offset} in {class} {method},{signature}")]
    UnresolvedReference {
        file: SmolStr,
        class: SmolStr,
        method: SmolStr,
        signature: SmolStr,
        name: SmolStr,
        offset: u32,
    },

    /// A method declaration whose parameter or return types are unknown.
    #[error("unresolved types of method `{method}` at {file}:{offset} in {class}")]
    UnresolvedMethodType {
        file: SmolStr,
        class: SmolStr,
        method: SmolStr,
        offset: u32,
    },

    /// The tree contains an error node.
    #[error("syntax error at {file}:{offset}")]
    MalformedSyntax { file: SmolStr, offset: u32 },
}

impl ExtractError {
    pub fn file(&self) -> &str {
        match self {
            ExtractError::UnresolvedReference { file, .. }
            | ExtractError::UnresolvedMethodType { file, .. }
            | ExtractError::MalformedSyntax { file, .. } => file,
        }
    }
}
