//! Property tests for the filter engine.

use std::collections::BTreeSet;

use linkmon_core::{FilterCriteria, filter_indices};
use linkmon_model::{Record, RecordId};
use proptest::prelude::*;

const STATUS_POOL: [&str; 4] = [
    "STATUS_OK",
    "STATUS_ERROR",
    "STATUS_REDIRECT",
    "STATUS_SERVER_ERROR",
];

fn arb_record() -> impl Strategy<Value = Record> {
    (
        0u32..1000,
        "[a-z]{0,8}\\.(com|org)",
        prop::sample::select(&STATUS_POOL[..]),
    )
        .prop_map(|(id, url, status)| Record {
            id: RecordId::new(id.to_string()),
            url,
            status: status.to_string(),
            last_checked: "2024-10-24 09:48:02".to_string(),
            log: String::new(),
            screenshot: None,
        })
}

fn arb_criteria() -> impl Strategy<Value = FilterCriteria> {
    (
        prop::collection::btree_set(prop::sample::select(&STATUS_POOL[..]), 0..=4),
        "[a-z0-9]{0,3}",
    )
        .prop_map(|(statuses, query)| FilterCriteria {
            selected_statuses: statuses.into_iter().map(str::to_string).collect::<BTreeSet<_>>(),
            search_query: query,
        })
}

proptest! {
    /// Every returned index points at a record matching both criteria.
    #[test]
    fn included_records_match(records in prop::collection::vec(arb_record(), 0..40), criteria in arb_criteria()) {
        for idx in filter_indices(&records, &criteria) {
            prop_assert!(criteria.matches(&records[idx]));
        }
    }

    /// No matching record is left out.
    #[test]
    fn excluded_records_do_not_match(records in prop::collection::vec(arb_record(), 0..40), criteria in arb_criteria()) {
        let included: BTreeSet<usize> = filter_indices(&records, &criteria).into_iter().collect();
        for (idx, record) in records.iter().enumerate() {
            if !included.contains(&idx) {
                prop_assert!(!criteria.matches(record));
            }
        }
    }

    /// The derived view preserves input order (indices strictly increase).
    #[test]
    fn output_order_preserves_input_order(records in prop::collection::vec(arb_record(), 0..40), criteria in arb_criteria()) {
        let indices = filter_indices(&records, &criteria);
        prop_assert!(indices.windows(2).all(|pair| pair[0] < pair[1]));
    }

    /// Filtering is deterministic: recomputing with unchanged criteria
    /// yields the same sequence.
    #[test]
    fn recompute_is_idempotent(records in prop::collection::vec(arb_record(), 0..40), criteria in arb_criteria()) {
        let first = filter_indices(&records, &criteria);
        let second = filter_indices(&records, &criteria);
        prop_assert_eq!(first, second);
    }
}
