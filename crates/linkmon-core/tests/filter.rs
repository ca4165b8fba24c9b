//! Scenario tests for the filter engine.

use linkmon_core::{FilterCriteria, distinct_statuses, filter_indices};
use linkmon_model::{Record, RecordId};

fn record(id: &str, url: &str, status: &str) -> Record {
    Record {
        id: RecordId::new(id),
        url: url.to_string(),
        status: status.to_string(),
        last_checked: "2024-10-24 09:48:02".to_string(),
        log: String::new(),
        screenshot: None,
    }
}

fn sample() -> Vec<Record> {
    vec![
        record("1", "a.com", "STATUS_OK"),
        record("2", "b.com", "STATUS_ERROR"),
    ]
}

#[test]
fn status_only_filtering() {
    let records = sample();
    let criteria = FilterCriteria::with_statuses(["STATUS_OK"]);
    assert_eq!(filter_indices(&records, &criteria), vec![0]);
}

#[test]
fn query_matches_on_url() {
    let records = sample();
    let mut criteria = FilterCriteria::with_statuses(["STATUS_OK", "STATUS_ERROR"]);
    criteria.search_query = "b".to_string();
    assert_eq!(filter_indices(&records, &criteria), vec![1]);
}

#[test]
fn query_matches_on_stringified_id() {
    let records = vec![
        record("12", "first.example", "STATUS_OK"),
        record("34", "second.example", "STATUS_OK"),
    ];
    let mut criteria = FilterCriteria::with_statuses(["STATUS_OK"]);
    criteria.search_query = "2".to_string();
    // "2" is a substring of id "12"; nothing else contains it.
    assert_eq!(filter_indices(&records, &criteria), vec![0]);
}

#[test]
fn query_without_matches_yields_empty() {
    let records = sample();
    let mut criteria = FilterCriteria::with_statuses(["STATUS_OK", "STATUS_ERROR"]);
    criteria.search_query = "3".to_string();
    assert!(filter_indices(&records, &criteria).is_empty());
}

#[test]
fn empty_selection_yields_empty() {
    let records = sample();
    let criteria = FilterCriteria::default();
    assert!(filter_indices(&records, &criteria).is_empty());
}

#[test]
fn empty_query_matches_every_record() {
    let records = sample();
    let criteria = FilterCriteria::with_statuses(["STATUS_OK", "STATUS_ERROR"]);
    assert_eq!(filter_indices(&records, &criteria), vec![0, 1]);
}

#[test]
fn matching_is_case_sensitive() {
    let records = vec![record("1", "Aardvark.example", "STATUS_OK")];
    let mut criteria = FilterCriteria::with_statuses(["STATUS_OK"]);
    criteria.search_query = "aardvark".to_string();
    assert!(filter_indices(&records, &criteria).is_empty());

    criteria.search_query = "Aardvark".to_string();
    assert_eq!(filter_indices(&records, &criteria), vec![0]);
}

#[test]
fn unrecognized_statuses_filter_as_opaque_keys() {
    let records = vec![
        record("1", "a.com", "SOMETHING_NEW"),
        record("2", "b.com", "STATUS_OK"),
    ];
    let criteria = FilterCriteria::with_statuses(["SOMETHING_NEW"]);
    assert_eq!(filter_indices(&records, &criteria), vec![0]);
}

#[test]
fn order_of_input_is_preserved() {
    let records = vec![
        record("3", "c.com", "STATUS_OK"),
        record("1", "a.com", "STATUS_OK"),
        record("2", "b.com", "STATUS_ERROR"),
        record("4", "d.com", "STATUS_OK"),
    ];
    let criteria = FilterCriteria::with_statuses(["STATUS_OK"]);
    assert_eq!(filter_indices(&records, &criteria), vec![0, 1, 3]);
}

#[test]
fn distinct_statuses_keep_first_appearance_order() {
    let records = vec![
        record("1", "a.com", "STATUS_ERROR"),
        record("2", "b.com", "STATUS_OK"),
        record("3", "c.com", "STATUS_ERROR"),
        record("4", "d.com", "STATUS_REDIRECT"),
    ];
    assert_eq!(
        distinct_statuses(&records),
        vec!["STATUS_ERROR", "STATUS_OK", "STATUS_REDIRECT"]
    );
}

#[test]
fn distinct_statuses_of_empty_dataset_is_empty() {
    assert!(distinct_statuses(&[]).is_empty());
}
