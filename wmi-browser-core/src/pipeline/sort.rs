//! Sort comparator

use std::cmp::Ordering;

use crate::types::WmiRecord;

/// `created_on` descending, then `wmi` descending; both compared as text.
pub fn compare_records(a: &WmiRecord, b: &WmiRecord) -> Ordering {
    b.created_on
        .cmp(&a.created_on)
        .then_with(|| b.wmi.cmp(&a.wmi))
}

/// Stable in-place sort by [`compare_records`].
///
/// Callers sort their own copy; the loaded source list must keep its order.
pub fn sort_records(records: &mut [WmiRecord]) {
    records.sort_by(compare_records);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, created_on: &str, wmi: &str) -> WmiRecord {
        WmiRecord {
            id: id.into(),
            created_on: created_on.into(),
            wmi: wmi.into(),
            ..WmiRecord::default()
        }
    }

    fn ids(records: &[WmiRecord]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_created_on_descending() {
        let mut records = vec![
            record("a", "2020", "AAA"),
            record("b", "2022", "AAA"),
            record("c", "2021", "AAA"),
        ];
        sort_records(&mut records);
        assert_eq!(ids(&records), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_wmi_tiebreak_descending() {
        let mut records = vec![
            record("a", "2020", "AAA"),
            record("b", "2020", "CCC"),
            record("c", "2020", "BBB"),
        ];
        sort_records(&mut records);
        assert_eq!(ids(&records), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_lexicographic_not_numeric() {
        // "9" > "10" as text
        let mut records = vec![record("ten", "10", "A"), record("nine", "9", "A")];
        sort_records(&mut records);
        assert_eq!(ids(&records), vec!["nine", "ten"]);
    }

    #[test]
    fn test_full_tie_is_equal() {
        let a = record("a", "2020", "AAA");
        let b = record("b", "2020", "AAA");
        assert_eq!(compare_records(&a, &b), Ordering::Equal);
    }

    #[test]
    fn test_empty_created_on_sorts_last() {
        let mut records = vec![record("empty", "", "ZZZ"), record("dated", "2001", "AAA")];
        sort_records(&mut records);
        assert_eq!(ids(&records), vec!["dated", "empty"]);
    }
}
