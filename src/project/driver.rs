//! Extraction driver: runs every source unit and aggregates per-file outcomes.

use std::io;

use indexmap::IndexMap;
use smol_str::SmolStr;
use tracing::{debug, info, warn};

use crate::hir::{
    Diagnostic, ExtractError, ExtractOptions, FileExtraction, RangeSink, SymbolResolver,
    extract_file,
};
use crate::syntax::SyntaxNode;

/// A parsed and resolved source file.
#[derive(Debug, Clone)]
pub struct SourceUnit {
    /// Path written into every record of this file.
    pub path: SmolStr,
    pub syntax: SyntaxNode,
}

impl SourceUnit {
    pub fn new(path: impl Into<SmolStr>, syntax: SyntaxNode) -> Self {
        Self {
            path: path.into(),
            syntax,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileStatus {
    /// All records of the file were forwarded to the sink.
    Extracted { records: usize },
    /// The file produced no records.
    Failed(ExtractError),
}

/// Outcome of one file.
#[derive(Debug, Clone)]
pub struct FileOutcome {
    pub status: FileStatus,
    pub diagnostics: Vec<Diagnostic>,
}

impl FileOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self.status, FileStatus::Extracted { .. })
    }

    pub fn error(&self) -> Option<&ExtractError> {
        match &self.status {
            FileStatus::Failed(error) => Some(error),
            FileStatus::Extracted { .. } => None,
        }
    }

    pub fn record_count(&self) -> usize {
        match self.status {
            FileStatus::Extracted { records } => records,
            FileStatus::Failed(_) => 0,
        }
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| !d.is_error()).count()
    }
}

/// Per-file outcomes of a run, in input order.
#[derive(Debug, Clone, Default)]
pub struct ExtractionReport {
    files: IndexMap<SmolStr, FileOutcome>,
}

impl ExtractionReport {
    /// True only if every file succeeded.
    pub fn is_success(&self) -> bool {
        self.files.values().all(FileOutcome::is_success)
    }

    pub fn get(&self, path: &str) -> Option<&FileOutcome> {
        self.files.get(path)
    }

    pub fn files(&self) -> impl Iterator<Item = (&SmolStr, &FileOutcome)> {
        self.files.iter()
    }

    pub fn failed_files(&self) -> impl Iterator<Item = (&SmolStr, &ExtractError)> {
        self.files
            .iter()
            .filter_map(|(path, outcome)| outcome.error().map(|e| (path, e)))
    }

    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.files.values().flat_map(|o| o.diagnostics.iter())
    }

    pub fn record_count(&self) -> usize {
        self.files.values().map(FileOutcome::record_count).sum()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    fn insert(&mut self, path: SmolStr, outcome: FileOutcome) {
        if self.files.insert(path.clone(), outcome).is_some() {
            warn!(file = %path, "file extracted twice, keeping the later outcome");
        }
    }
}

/// Runs extraction over source units with one resolver.
pub struct ExtractionDriver<'r> {
    resolver: &'r dyn SymbolResolver,
    options: ExtractOptions,
}

impl<'r> ExtractionDriver<'r> {
    pub fn new(resolver: &'r dyn SymbolResolver) -> Self {
        Self {
            resolver,
            options: ExtractOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ExtractOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Extract one unit without touching any sink.
    pub fn extract_unit(&self, unit: &SourceUnit) -> FileExtraction {
        extract_file(unit.path.clone(), &unit.syntax, self.resolver, &self.options)
    }

    /// Extract every unit, forwarding the records of successful files to `sink`.
    ///
    /// A failing file does not stop the run. Sink errors do.
    pub fn run<'u>(
        &self,
        units: impl IntoIterator<Item = &'u SourceUnit>,
        sink: &mut dyn RangeSink,
    ) -> io::Result<ExtractionReport> {
        let mut report = ExtractionReport::default();

        for unit in units {
            debug!(file = %unit.path, "extracting");
            let FileExtraction {
                file,
                records,
                diagnostics,
                result,
            } = self.extract_unit(unit);

            let status = match result {
                Ok(()) => {
                    for record in &records {
                        sink.accept(record)?;
                    }
                    FileStatus::Extracted {
                        records: records.len(),
                    }
                }
                Err(error) => {
                    warn!(file = %file, "skipping file: {error}");
                    FileStatus::Failed(error)
                }
            };
            report.insert(file, FileOutcome { status, diagnostics });
        }

        info!(
            files = report.len(),
            failed = report.failed_files().count(),
            records = report.record_count(),
            "extraction finished"
        );
        Ok(report)
    }
}
