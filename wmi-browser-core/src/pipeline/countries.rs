//! Country option extraction

use std::collections::HashSet;

use crate::types::{WmiRecord, ALL_COUNTRIES};

/// Distinct non-empty countries in first-seen order, with [`ALL_COUNTRIES`]
/// always first.
///
/// A record whose country is literally `"All Countries"` does not produce a
/// second sentinel entry.
pub fn extract_countries(records: &[WmiRecord]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    seen.insert(ALL_COUNTRIES);

    let mut countries = vec![ALL_COUNTRIES.to_string()];
    for record in records {
        let country = record.country.as_str();
        if !country.is_empty() && seen.insert(country) {
            countries.push(country.to_string());
        }
    }
    countries
}
