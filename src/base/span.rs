//! Offset conversion between the syntax tree and the emitted range map.
//!
//! Syntax trees carry UTF-8 byte offsets. Range map consumers usually index the
//! source by characters (or by UTF-16 code units when they come from a JVM
//! editor), so every emitted range goes through an [`OffsetIndex`].

pub use text_size::{TextRange, TextSize};

/// Unit in which emitted offsets are counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OffsetEncoding {
    /// Unicode scalar values.
    #[default]
    Char,
    /// UTF-16 code units.
    Utf16,
    /// Raw UTF-8 bytes (tree offsets unchanged).
    Utf8,
}

impl OffsetEncoding {
    fn units(self, ch: char) -> u32 {
        match self {
            OffsetEncoding::Char => 1,
            OffsetEncoding::Utf16 => ch.len_utf16() as u32,
            OffsetEncoding::Utf8 => ch.len_utf8() as u32,
        }
    }
}

/// Maps byte offsets of one source text to offsets in a chosen encoding.
///
/// Only characters whose width differs between UTF-8 and the target encoding
/// are recorded, so pure ASCII sources cost nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OffsetIndex {
    encoding: OffsetEncoding,
    /// (byte offset right after a wide char, bytes saved up to that point)
    wide_chars: Vec<(TextSize, u32)>,
}

impl OffsetIndex {
    pub fn new(text: &str, encoding: OffsetEncoding) -> Self {
        let mut wide_chars = Vec::new();
        if encoding != OffsetEncoding::Utf8 {
            let mut saved = 0u32;
            for (pos, ch) in text.char_indices() {
                let len = ch.len_utf8() as u32;
                let units = encoding.units(ch);
                if len != units {
                    saved += len - units;
                    wide_chars.push((TextSize::from(pos as u32 + len), saved));
                }
            }
        }
        Self {
            encoding,
            wide_chars,
        }
    }

    pub fn encoding(&self) -> OffsetEncoding {
        self.encoding
    }

    /// Convert a byte offset that lies on a character boundary.
    pub fn offset(&self, byte: TextSize) -> u32 {
        let idx = self.wide_chars.partition_point(|(end, _)| *end <= byte);
        let saved = match idx {
            0 => 0,
            _ => self.wide_chars[idx - 1].1,
        };
        u32::from(byte) - saved
    }

    /// Convert a half-open byte range into (start, end) offsets.
    pub fn range(&self, range: TextRange) -> (u32, u32) {
        (self.offset(range.start()), self.offset(range.end()))
    }
}
