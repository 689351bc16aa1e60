//! Foundation types for the range map toolchain.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`TextRange`], [`TextSize`] - Source positions (byte offsets in the tree)
//! - [`OffsetIndex`], [`OffsetEncoding`] - Byte offset to emitted offset conversion
//! - Shared constants (method sentinels, index partition base, marker words)
//!
//! This module has NO dependencies on other crate modules.

pub mod constants;
mod span;

pub use span::{OffsetEncoding, OffsetIndex, TextRange, TextSize};

// Re-export text-size types for convenience
pub use text_size;
