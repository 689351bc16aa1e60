//! Assertion helpers over emitted range records.

use srgmap::hir::{RangeRecord, SymbolKind};

/// Source text covered by a record (character offsets).
pub fn text_at(source: &str, record: &RangeRecord) -> String {
    source
        .chars()
        .skip(record.start as usize)
        .take((record.end - record.start) as usize)
        .collect()
}

pub fn of_kind(records: &[RangeRecord], kind: SymbolKind) -> Vec<&RangeRecord> {
    records.iter().filter(|r| r.kind() == kind).collect()
}

/// `(name, index)` of every record of `kind`, in emission order.
pub fn indexed(records: &[RangeRecord], kind: SymbolKind) -> Vec<(String, Option<u32>)> {
    of_kind(records, kind)
        .into_iter()
        .map(|r| (r.identity.name().to_string(), r.identity.index()))
        .collect()
}

pub fn lines(records: &[RangeRecord]) -> Vec<String> {
    records.iter().map(ToString::to_string).collect()
}

/// Every record must cover exactly the identifier it names.
pub fn assert_ranges_cover_names(source: &str, records: &[RangeRecord]) {
    for record in records {
        let text = text_at(source, record);
        let expected = match record.kind() {
            SymbolKind::Package => record.identity.name(),
            _ => record
                .identity
                .name()
                .rsplit('.')
                .next()
                .unwrap_or_default(),
        };
        // imports cover the whole qualified reference
        assert!(
            text == expected || text == record.identity.name(),
            "record {record} covers `{text}`"
        );
    }
}
