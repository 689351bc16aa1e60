//! Extraction context: per-file state shared by all walkers of one file.

use smol_str::SmolStr;

use super::diagnostics::{Diagnostic, DiagnosticCollector};
use super::emitter::RangeEmitter;
use super::identity::RangeRecord;
use super::options::ExtractOptions;
use super::resolve::SymbolResolver;
use crate::base::TextRange;

/// Extraction state passed to every walker of a file.
pub struct ExtractionContext<'a> {
    pub resolver: &'a dyn SymbolResolver,
    pub options: &'a ExtractOptions,
    pub emitter: RangeEmitter,
    pub diagnostics: DiagnosticCollector,
}

impl<'a> ExtractionContext<'a> {
    pub fn new(
        file: impl Into<SmolStr>,
        text: &str,
        resolver: &'a dyn SymbolResolver,
        options: &'a ExtractOptions,
    ) -> Self {
        Self {
            resolver,
            options,
            emitter: RangeEmitter::for_text(file, text, options.offset_encoding),
            diagnostics: DiagnosticCollector::new(),
        }
    }

    pub fn file(&self) -> &SmolStr {
        self.emitter.file()
    }

    /// Emitted-encoding offset of the start of `range`.
    pub fn offset(&self, range: TextRange) -> u32 {
        self.emitter.offsets().offset(range.start())
    }

    pub fn into_parts(self) -> (Vec<RangeRecord>, Vec<Diagnostic>) {
        (
            self.emitter.into_records(),
            self.diagnostics.into_diagnostics(),
        )
    }
}
