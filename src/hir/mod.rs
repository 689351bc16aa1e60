//! Symbol range extraction over resolved Java trees.
//!
//! ## Key Types
//!
//! - [`SymbolResolver`]: the external resolver consulted for every reference
//! - [`SymbolReferenceWalker`]: pre-order walker of one code scope
//! - [`RangeEmitter`]: per-file record buffer
//! - [`RangeRecord`]: one emitted occurrence
//! - [`extract_file`]: structural pass over one file
//!
//! ## Flow
//!
//! ```text
//! extract_file(file)                 declarations: package, imports, classes,
//!     │                              fields, methods, parameters
//!     ▼
//! SymbolReferenceWalker (per scope)  locals, references, region markers
//!     │
//!     ▼
//! RangeEmitter                       buffered until the file succeeds
//! ```

mod context;
mod diagnostics;
mod emitter;
mod error;
mod extract;
mod identity;
mod options;
mod resolve;
mod signature;
mod types;
mod walker;

pub use context::ExtractionContext;
pub use diagnostics::{Diagnostic, DiagnosticCollector, Severity, codes};
pub use emitter::{RangeEmitter, RangeMapWriter, RangeSink};
pub use error::ExtractError;
pub use extract::{FileExtraction, extract_file};
pub use identity::{MethodContext, RangeRecord, SymbolIdentity, SymbolKind};
pub use options::ExtractOptions;
pub use resolve::{
    DeclarationId, ParameterScope, Referent, ResolutionTable, SymbolResolver, WorkspaceResolution,
};
pub use signature::{method_descriptor, type_descriptor};
pub use types::{JavaType, MethodType, PrimitiveType};
pub use walker::{CodeRegion, DeclarationIndexTable, SymbolReferenceWalker, parse_region_marker};
