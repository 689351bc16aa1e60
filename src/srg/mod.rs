//! Renaming tables from SRG mapping files.
//!
//! The tables are consumed by the rewrite step that applies a range map; they
//! are independent of range extraction.

mod error;
mod loader;
mod tables;

pub use error::LoadError;
pub use loader::{from_reader, load, name_component, owner_component, parse_str};
pub use tables::{
    ClassRename, FieldRename, MemberKey, MethodKey, MethodRename, ParameterNames, RenamingTables,
};
