//! Project-level extraction: runs files through the extractor and collects
//! per-file outcomes.

mod driver;

pub use driver::{ExtractionDriver, ExtractionReport, FileOutcome, FileStatus, SourceUnit};

pub use crate::hir::ExtractOptions;
