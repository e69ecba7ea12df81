//! Derivation pipeline integration tests

#![allow(clippy::unwrap_used)]

mod common;

use common::{record, sample_records};
use wmi_browser_core::{
    derive, extract_countries, filter_records, sort_records, CoreError, FilterQuery, RecordRow,
    SearchPattern, ALL_COUNTRIES,
};

#[test]
fn test_countries_sentinel_first_and_distinct() {
    let records = sample_records();
    let countries = extract_countries(&records);

    assert_eq!(countries[0], ALL_COUNTRIES);
    let rest = &countries[1..];
    for country in rest {
        assert!(!country.is_empty());
        assert!(records.iter().any(|r| &r.country == country));
    }
    let mut deduped = rest.to_vec();
    deduped.sort();
    deduped.dedup();
    assert_eq!(deduped.len(), rest.len());
}

#[test]
fn test_country_filter_only_selected_country() {
    let records = sample_records();
    let query = FilterQuery::new("UNITED STATES (USA)", "");
    let view = derive(&records, &query).unwrap();

    assert_eq!(view.total(), 2);
    assert!(view.records.iter().all(|r| r.country == "UNITED STATES (USA)"));
}

#[test]
fn test_all_countries_keeps_membership() {
    let records = sample_records();
    let view = derive(&records, &FilterQuery::default()).unwrap();

    assert_eq!(view.total(), records.len());
    for r in &records {
        assert!(view.records.contains(r));
    }
}

#[test]
fn test_search_results_match_some_field() {
    let records = sample_records();
    let query = FilterQuery::new(ALL_COUNTRIES, "motor");
    let view = derive(&records, &query).unwrap();
    let pattern = SearchPattern::new("motor").unwrap();

    assert_eq!(view.total(), 2);
    assert!(view.records.iter().all(|r| pattern.matches_record(r)));
    let excluded: Vec<_> = records.iter().filter(|r| !view.records.contains(r)).collect();
    assert!(excluded.iter().all(|r| !pattern.matches_record(r)));
}

#[test]
fn test_search_on_timestamp_fields() {
    let records = sample_records();
    let view = derive(&records, &FilterQuery::new(ALL_COUNTRIES, "2019-01")).unwrap();
    assert_eq!(view.total(), 1);
    assert_eq!(view.records[0].id, "4");
}

#[test]
fn test_sorted_output_non_increasing() {
    let records = sample_records();
    let view = derive(&records, &FilterQuery::default()).unwrap();

    for pair in view.records.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(a.created_on >= b.created_on);
        if a.created_on == b.created_on {
            assert!(a.wmi >= b.wmi);
        }
    }
}

#[test]
fn test_derive_is_idempotent() {
    let records = sample_records();
    let query = FilterQuery::new("UNITED STATES (USA)", "honda");
    let first = derive(&records, &query).unwrap();
    let second = derive(&records, &query).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_source_list_not_reordered() {
    let records = sample_records();
    let before: Vec<String> = records.iter().map(|r| r.id.clone()).collect();
    let _ = derive(&records, &FilterQuery::default()).unwrap();
    let after: Vec<String> = records.iter().map(|r| r.id.clone()).collect();
    assert_eq!(before, after);
}

#[test]
fn test_invalid_pattern_is_typed_error() {
    let records = sample_records();
    let result = derive(&records, &FilterQuery::new(ALL_COUNTRIES, "honda("));
    assert!(matches!(result, Err(CoreError::InvalidPattern(_))));
}

#[test]
fn test_scenario_1_newest_first() {
    let records = vec![
        record("a", "USA", "2020", "AAA"),
        record("b", "JPN", "2021", "BBB"),
    ];
    let view = derive(&records, &FilterQuery::default()).unwrap();
    let wmis: Vec<&str> = view.records.iter().map(|r| r.wmi.as_str()).collect();
    assert_eq!(wmis, vec!["BBB", "AAA"]);
}

#[test]
fn test_scenario_2_country_usa() {
    let records = vec![
        record("a", "USA", "2020", "AAA"),
        record("b", "JPN", "2021", "BBB"),
    ];
    let view = derive(&records, &FilterQuery::new("USA", "")).unwrap();
    assert_eq!(view.total(), 1);
    assert_eq!(view.records[0].wmi, "AAA");
}

#[test]
fn test_scenario_3_case_insensitive_name() {
    let mut honda = record("a", "JPN", "2020", "JHM");
    honda.name = "Honda".into();
    let records = vec![honda, record("b", "USA", "2021", "1FA")];

    let view = derive(&records, &FilterQuery::new(ALL_COUNTRIES, "honda")).unwrap();
    assert_eq!(view.total(), 1);
    assert_eq!(view.records[0].name, "Honda");
}

#[test]
fn test_scenario_4_updated_on_placeholder() {
    let mut absent = record("a", "USA", "2020", "AAA");
    absent.updated_on = None;
    let mut present = record("b", "USA", "2020", "BBB");
    present.updated_on = Some("2022".into());

    assert_eq!(RecordRow::from(&absent).updated_on(), "-");
    assert_eq!(RecordRow::from(&present).updated_on(), "2022");
}

#[test]
fn test_scenario_5_full_tie_both_present() {
    let mut records = vec![
        record("first", "USA", "2020", "AAA"),
        record("second", "USA", "2020", "AAA"),
        record("newer", "USA", "2021", "AAA"),
    ];
    sort_records(&mut records);

    assert_eq!(records[0].id, "newer");
    let tied: Vec<&str> = records[1..].iter().map(|r| r.id.as_str()).collect();
    assert!(tied.contains(&"first"));
    assert!(tied.contains(&"second"));
}

#[test]
fn test_duplicates_are_kept() {
    let dup = record("same", "USA", "2020", "AAA");
    let records = vec![dup.clone(), dup];
    let filtered = filter_records(&records, &FilterQuery::default(), None);
    assert_eq!(filtered.len(), 2);
}
