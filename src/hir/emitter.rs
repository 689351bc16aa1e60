//! Range emitter: formats one record per occurrence.
//!
//! The emitter performs no resolution: callers hand it the identifier range
//! and the identity. Records are buffered per file so that a file whose walk
//! fails can be dropped as a whole.
//!
//! Records come out in traversal (pre-)order, which is not sorted by offset:
//! type-argument ranges follow their enclosing type, and a declared type can be
//! reported both by its declaration and by the walk of its reference. Rewriters
//! sort by start offset and drop duplicates before editing.

use std::io::{self, Write};

use smol_str::SmolStr;

use super::identity::{MethodContext, RangeRecord, SymbolIdentity};
use crate::base::{OffsetEncoding, OffsetIndex, TextRange};

/// Per-file record buffer.
#[derive(Debug, Clone)]
pub struct RangeEmitter {
    file: SmolStr,
    offsets: OffsetIndex,
    records: Vec<RangeRecord>,
}

impl RangeEmitter {
    pub fn new(file: impl Into<SmolStr>, offsets: OffsetIndex) -> Self {
        Self {
            file: file.into(),
            offsets,
            records: Vec::new(),
        }
    }

    pub fn for_text(file: impl Into<SmolStr>, text: &str, encoding: OffsetEncoding) -> Self {
        Self::new(file, OffsetIndex::new(text, encoding))
    }

    pub fn file(&self) -> &SmolStr {
        &self.file
    }

    pub fn offsets(&self) -> &OffsetIndex {
        &self.offsets
    }

    /// Emit a record for `range` (tree byte offsets).
    pub fn emit(&mut self, range: TextRange, identity: SymbolIdentity) {
        let (start, end) = self.offsets.range(range);
        tracing::trace!(file = %self.file, start, end, ?identity, "emit");
        self.records.push(RangeRecord {
            file: self.file.clone(),
            start,
            end,
            identity,
        });
    }

    pub fn emit_package(&mut self, range: TextRange, name: &str) {
        self.emit(range, SymbolIdentity::Package { name: name.into() });
    }

    pub fn emit_class(&mut self, range: TextRange, qualified_name: &str) {
        self.emit(
            range,
            SymbolIdentity::Class {
                name: qualified_name.into(),
            },
        );
    }

    pub fn emit_field(&mut self, range: TextRange, owner: &str, name: &str) {
        self.emit(
            range,
            SymbolIdentity::Field {
                owner: owner.into(),
                name: name.into(),
            },
        );
    }

    pub fn emit_method(&mut self, range: TextRange, owner: &str, name: &str, signature: &str) {
        self.emit(
            range,
            SymbolIdentity::Method {
                owner: owner.into(),
                name: name.into(),
                signature: signature.into(),
            },
        );
    }

    pub fn emit_parameter(
        &mut self,
        range: TextRange,
        owner: &str,
        method: &MethodContext,
        name: &str,
        index: Option<u32>,
    ) {
        self.emit(
            range,
            SymbolIdentity::Parameter {
                owner: owner.into(),
                method: method.name.clone(),
                signature: method.signature.clone(),
                name: name.into(),
                index,
            },
        );
    }

    pub fn emit_local_variable(
        &mut self,
        range: TextRange,
        owner: &str,
        method: &MethodContext,
        name: &str,
        index: Option<u32>,
    ) {
        self.emit(
            range,
            SymbolIdentity::LocalVariable {
                owner: owner.into(),
                method: method.name.clone(),
                signature: method.signature.clone(),
                name: name.into(),
                index,
            },
        );
    }

    pub fn records(&self) -> &[RangeRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn into_records(self) -> Vec<RangeRecord> {
        self.records
    }
}

// ============================================================================
// SINKS
// ============================================================================

/// Destination of records from successfully extracted files.
pub trait RangeSink {
    fn accept(&mut self, record: &RangeRecord) -> io::Result<()>;
}

impl RangeSink for Vec<RangeRecord> {
    fn accept(&mut self, record: &RangeRecord) -> io::Result<()> {
        self.push(record.clone());
        Ok(())
    }
}

/// Writes records as tab-separated lines.
pub struct RangeMapWriter<W: Write> {
    out: W,
    written: usize,
}

impl<W: Write> RangeMapWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, written: 0 }
    }

    /// Number of lines written so far.
    pub fn written(&self) -> usize {
        self.written
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RangeSink for RangeMapWriter<W> {
    fn accept(&mut self, record: &RangeRecord) -> io::Result<()> {
        writeln!(self.out, "{record}")?;
        self.written += 1;
        Ok(())
    }
}
