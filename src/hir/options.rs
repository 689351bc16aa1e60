//! Extraction options

use smol_str::SmolStr;

use crate::base::OffsetEncoding;
use crate::base::constants::DEFAULT_INJECTED_INDEX_BASE;

/// Options controlling range extraction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    /// First index handed out inside injected code regions
    pub injected_index_base: u32,
    /// Marker tags accepted in `// <tag> start|end` comments (empty = any tag)
    pub region_tags: Vec<SmolStr>,
    /// Unit of emitted offsets
    pub offset_encoding: OffsetEncoding,
    /// Emit a `package` record for the package statement
    pub emit_package_statements: bool,
    /// Emit a `class` record for every import
    pub emit_imports: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            injected_index_base: DEFAULT_INJECTED_INDEX_BASE,
            region_tags: Vec::new(),
            offset_encoding: OffsetEncoding::Char,
            emit_package_statements: true,
            emit_imports: true,
        }
    }
}

impl ExtractOptions {
    pub fn with_injected_index_base(mut self, base: u32) -> Self {
        self.injected_index_base = base;
        self
    }

    pub fn with_region_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SmolStr>,
    {
        self.region_tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_offset_encoding(mut self, encoding: OffsetEncoding) -> Self {
        self.offset_encoding = encoding;
        self
    }

    /// Whether `tag` opens or closes an injected region.
    pub fn accepts_region_tag(&self, tag: &str) -> bool {
        self.region_tags.is_empty()
            || self
                .region_tags
                .iter()
                .any(|t| t.eq_ignore_ascii_case(tag))
    }
}
