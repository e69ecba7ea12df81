//! Filter predicate

use crate::types::{FilterQuery, WmiRecord};

use super::SearchPattern;

/// Decide whether `record` belongs to the filtered view.
///
/// The country check runs first and short-circuits; the text check only
/// runs when `pattern` is present (i.e. the search text is non-empty).
pub fn matches(record: &WmiRecord, query: &FilterQuery, pattern: Option<&SearchPattern>) -> bool {
    if query.restricts_country() && record.country != query.selected_country {
        return false;
    }

    pattern.is_none_or(|p| p.matches_record(record))
}

/// Records passing [`matches`], cloned, in source order
pub fn filter_records(
    records: &[WmiRecord],
    query: &FilterQuery,
    pattern: Option<&SearchPattern>,
) -> Vec<WmiRecord> {
    records
        .iter()
        .filter(|record| matches(record, query, pattern))
        .cloned()
        .collect()
}
