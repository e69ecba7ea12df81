//! Derivation pipeline
//!
//! Three stages over an in-memory record list:
//!
//! 1. [`extract_countries`]: selectable country options
//! 2. [`filter_records`] / [`matches`]: country + free-text predicate
//! 3. [`sort_records`] / [`compare_records`]: `created_on` desc, `wmi` desc
//!
//! [`derive`] runs all three for one [`FilterQuery`]. Every stage is a pure
//! function of its inputs; the source slice is never mutated.

mod countries;
mod filter;
mod search;
mod sort;

use serde::Serialize;

use crate::error::CoreResult;
use crate::types::{FilterQuery, WmiRecord};

pub use countries::extract_countries;
pub use filter::{filter_records, matches};
pub use search::SearchPattern;
pub use sort::{compare_records, sort_records};

/// Result of running the pipeline once
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DerivedView {
    /// Country options, sentinel first
    pub countries: Vec<String>,
    /// Filtered records, sorted for display
    pub records: Vec<WmiRecord>,
}

impl DerivedView {
    /// Number of records passing the filter (the running total)
    pub fn total(&self) -> usize {
        self.records.len()
    }
}

/// Run extraction, filter and sort for `query` over `records`.
///
/// Fails only when the search text is not a valid pattern.
pub fn derive(records: &[WmiRecord], query: &FilterQuery) -> CoreResult<DerivedView> {
    let pattern = if query.has_search() {
        Some(SearchPattern::new(&query.search_text)?)
    } else {
        None
    };

    let countries = extract_countries(records);
    let mut filtered = filter_records(records, query, pattern.as_ref());
    sort_records(&mut filtered);

    log::debug!(
        "[wmi] derived view: {} of {} records (country={:?}, search={:?})",
        filtered.len(),
        records.len(),
        query.selected_country,
        query.search_text
    );

    Ok(DerivedView {
        countries,
        records: filtered,
    })
}
