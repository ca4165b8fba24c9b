//! Tests for status-count aggregation.

use linkmon_core::{StatusCount, status_counts};
use linkmon_model::{Record, RecordId};

fn record(id: &str, status: &str) -> Record {
    Record {
        id: RecordId::new(id),
        url: format!("https://example.com/{id}"),
        status: status.to_string(),
        last_checked: String::new(),
        log: String::new(),
        screenshot: None,
    }
}

#[test]
fn counts_group_by_status_in_first_appearance_order() {
    let records = vec![
        record("1", "STATUS_ERROR"),
        record("2", "STATUS_OK"),
        record("3", "STATUS_ERROR"),
        record("4", "STATUS_ERROR"),
    ];

    assert_eq!(
        status_counts(&records),
        vec![
            StatusCount {
                status: "STATUS_ERROR".to_string(),
                count: 3,
            },
            StatusCount {
                status: "STATUS_OK".to_string(),
                count: 1,
            },
        ]
    );
}

#[test]
fn counts_of_empty_dataset_are_empty() {
    assert!(status_counts(&[]).is_empty());
}
