//! Symbol identities and range records.
//!
//! A [`RangeRecord`] ties one identifier occurrence to the identity of the
//! declaration it names. Identities are plain values so a reference and its
//! declaration compare equal field by field.

use std::fmt;

use smol_str::SmolStr;

use crate::base::constants::{
    CLASS_INITIALIZER, MISSING_INDEX, OUTSIDE_METHOD, RECORD_DELIMITER, RECORD_MARKER,
};

/// Kind tag of a symbol identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    Package,
    Class,
    Field,
    Method,
    Parameter,
    LocalVariable,
}

impl SymbolKind {
    /// Label written to the range map.
    pub fn label(self) -> &'static str {
        match self {
            SymbolKind::Package => "package",
            SymbolKind::Class => "class",
            SymbolKind::Field => "field",
            SymbolKind::Method => "method",
            SymbolKind::Parameter => "param",
            SymbolKind::LocalVariable => "localvar",
        }
    }
}

/// The method a walker is inside, or a sentinel for code outside methods.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MethodContext {
    pub name: SmolStr,
    pub signature: SmolStr,
}

impl MethodContext {
    pub fn new(name: impl Into<SmolStr>, signature: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            signature: signature.into(),
        }
    }

    /// Field initializers, class headers and enum constant arguments.
    pub fn outside_method() -> Self {
        Self::new(OUTSIDE_METHOD, "")
    }

    /// Static and instance initializer blocks.
    pub fn class_initializer() -> Self {
        Self::new(CLASS_INITIALIZER, "")
    }
}

impl Default for MethodContext {
    fn default() -> Self {
        Self::outside_method()
    }
}

/// Fully resolved identity of a symbol.
///
/// `index` is `None` when the declaration index could not be determined; it is
/// written as `-1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SymbolIdentity {
    Package {
        name: SmolStr,
    },
    Class {
        name: SmolStr,
    },
    Field {
        owner: SmolStr,
        name: SmolStr,
    },
    Method {
        owner: SmolStr,
        name: SmolStr,
        signature: SmolStr,
    },
    Parameter {
        owner: SmolStr,
        method: SmolStr,
        signature: SmolStr,
        name: SmolStr,
        index: Option<u32>,
    },
    LocalVariable {
        owner: SmolStr,
        method: SmolStr,
        signature: SmolStr,
        name: SmolStr,
        index: Option<u32>,
    },
}

impl SymbolIdentity {
    pub fn kind(&self) -> SymbolKind {
        match self {
            SymbolIdentity::Package { .. } => SymbolKind::Package,
            SymbolIdentity::Class { .. } => SymbolKind::Class,
            SymbolIdentity::Field { .. } => SymbolKind::Field,
            SymbolIdentity::Method { .. } => SymbolKind::Method,
            SymbolIdentity::Parameter { .. } => SymbolKind::Parameter,
            SymbolIdentity::LocalVariable { .. } => SymbolKind::LocalVariable,
        }
    }

    /// Simple name of the symbol (qualified for packages and classes).
    pub fn name(&self) -> &str {
        match self {
            SymbolIdentity::Package { name }
            | SymbolIdentity::Class { name }
            | SymbolIdentity::Field { name, .. }
            | SymbolIdentity::Method { name, .. }
            | SymbolIdentity::Parameter { name, .. }
            | SymbolIdentity::LocalVariable { name, .. } => name,
        }
    }

    /// Declaration index of parameters and local variables.
    pub fn index(&self) -> Option<u32> {
        match self {
            SymbolIdentity::Parameter { index, .. }
            | SymbolIdentity::LocalVariable { index, .. } => *index,
            _ => None,
        }
    }

    fn write_fields(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = RECORD_DELIMITER;
        match self {
            SymbolIdentity::Package { name } | SymbolIdentity::Class { name } => {
                write!(f, "{name}")
            }
            SymbolIdentity::Field { owner, name } => write!(f, "{owner}{d}{name}"),
            SymbolIdentity::Method {
                owner,
                name,
                signature,
            } => write!(f, "{owner}{d}{name}{d}{signature}"),
            SymbolIdentity::Parameter {
                owner,
                method,
                signature,
                name,
                index,
            }
            | SymbolIdentity::LocalVariable {
                owner,
                method,
                signature,
                name,
                index,
            } => {
                let index = index.map_or(MISSING_INDEX, i64::from);
                write!(f, "{owner}{d}{method}{d}{signature}{d}{name}{d}{index}")
            }
        }
    }
}

/// One emitted occurrence: file, half-open offset range, identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RangeRecord {
    pub file: SmolStr,
    pub start: u32,
    pub end: u32,
    pub identity: SymbolIdentity,
}

impl RangeRecord {
    pub fn kind(&self) -> SymbolKind {
        self.identity.kind()
    }
}

impl fmt::Display for RangeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = RECORD_DELIMITER;
        write!(
            f,
            "{RECORD_MARKER}{d}{}{d}{}{d}{}{d}{}{d}",
            self.file,
            self.start,
            self.end,
            self.identity.kind().label()
        )?;
        self.identity.write_fields(f)
    }
}
