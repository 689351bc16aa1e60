//! # srgmap-base
//!
//! Symbol range maps over resolved Java syntax trees, and SRG renaming tables.
//!
//! A range map lists every occurrence of a renamable symbol in a source file
//! (its exact identifier range plus a fully resolved identity). Together with
//! the renaming tables it drives a source-level rename.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! project   → Extraction driver, per-file outcomes
//!   ↓
//! hir       → Resolver seam, walker, emitter, signatures, diagnostics
//!   ↓
//! srg       → Renaming-table loader
//!   ↓
//! syntax    → Rowan Java CST, typed AST, tree builder
//!   ↓
//! base      → TextRange, offset conversion, constants
//! ```

// ============================================================================
// MODULES (dependency order: base → syntax → srg → hir → project)
// ============================================================================

/// Foundation types: TextRange, offset encodings, constants
pub mod base;

/// Syntax: rowan-based Java CST and typed AST wrappers
pub mod syntax;

/// SRG renaming tables
pub mod srg;

/// Range extraction over resolved trees
pub mod hir;

/// Extraction driver
pub mod project;

// Re-export foundation types
pub use base::{OffsetEncoding, OffsetIndex, TextRange, TextSize};
