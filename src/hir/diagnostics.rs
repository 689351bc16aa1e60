//! Diagnostics: extraction errors and warnings.
//!
//! Every diagnostic is logged through `tracing` when it is recorded and kept
//! in the per-file outcome, so callers can inspect them without a subscriber.

use std::sync::Arc;

use smol_str::SmolStr;

// ============================================================================
// DIAGNOSTIC TYPES
// ============================================================================

/// Severity level of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Warning,
}

/// A diagnostic message with location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// The file containing this diagnostic.
    pub file: SmolStr,
    /// Emitted-encoding offset of the offending identifier, when known.
    pub offset: Option<u32>,
    pub severity: Severity,
    /// Diagnostic code (see [`codes`]).
    pub code: &'static str,
    pub message: Arc<str>,
}

impl Diagnostic {
    pub fn error(
        file: impl Into<SmolStr>,
        code: &'static str,
        message: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            file: file.into(),
            offset: None,
            severity: Severity::Error,
            code,
            message: message.into(),
        }
    }

    pub fn warning(
        file: impl Into<SmolStr>,
        code: &'static str,
        message: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            file: file.into(),
            offset: None,
            severity: Severity::Warning,
            code,
            message: message.into(),
        }
    }

    pub fn at(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

// ============================================================================
// DIAGNOSTIC CODES
// ============================================================================

/// Diagnostic codes.
///
/// - **E0001-E0099**: errors that fail the file
/// - **W0001-W0099**: warnings, extraction continues
pub mod codes {
    /// Reference without a referent.
    pub const UNRESOLVED_REFERENCE: &str = "E0001";
    /// Method declaration whose types could not be resolved.
    pub const UNRESOLVED_METHOD_TYPE: &str = "E0002";
    /// Tree contains error nodes.
    pub const MALFORMED_SYNTAX: &str = "E0003";

    /// Local variable reference with no recorded declaration index.
    pub const MISSING_LOCAL_INDEX: &str = "W0001";
    /// Method parameter reference with no recorded parameter index.
    pub const MISSING_PARAMETER_INDEX: &str = "W0002";
    /// Referent outside the known kinds.
    pub const UNSUPPORTED_REFERENT: &str = "W0003";
    /// Declaration the walker does not index (local class, ...).
    pub const UNSUPPORTED_DECLARATION: &str = "W0004";
    /// Normal declaration index reached the injected index base.
    pub const INDEX_COLLISION: &str = "W0005";
    /// Declaration without a name identifier.
    pub const MISSING_NAME: &str = "W0006";
}

// ============================================================================
// DIAGNOSTIC COLLECTOR
// ============================================================================

/// Collects diagnostics for one file.
#[derive(Clone, Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic and log it.
    pub fn add(&mut self, diagnostic: Diagnostic) {
        match diagnostic.severity {
            Severity::Error => tracing::error!(
                file = %diagnostic.file,
                code = diagnostic.code,
                offset = ?diagnostic.offset,
                "{}",
                diagnostic.message
            ),
            Severity::Warning => tracing::warn!(
                file = %diagnostic.file,
                code = diagnostic.code,
                offset = ?diagnostic.offset,
                "{}",
                diagnostic.message
            ),
        }
        self.diagnostics.push(diagnostic);
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}
