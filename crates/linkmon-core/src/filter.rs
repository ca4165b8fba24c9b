//! Filter engine: derives the visible subset of records from the current
//! filter criteria.
//!
//! Everything here is a pure function of its inputs so the store can
//! recompute the derived view synchronously after every mutation.

use std::collections::BTreeSet;

use linkmon_model::Record;

/// The criteria pair driving the derived view.
///
/// Matching is case-sensitive substring containment over the stringified id
/// and the url (not tokenized, not fuzzy). The empty query matches every
/// record. Status is treated purely as an equality key; labels outside the
/// recognized vocabulary participate like any other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub selected_statuses: BTreeSet<String>,
    pub search_query: String,
}

impl FilterCriteria {
    /// Criteria that accept every record carrying one of `statuses`.
    pub fn with_statuses<I, S>(statuses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            selected_statuses: statuses.into_iter().map(Into::into).collect(),
            search_query: String::new(),
        }
    }

    /// Whether a single record passes both criteria.
    pub fn matches(&self, record: &Record) -> bool {
        self.selected_statuses.contains(&record.status)
            && (record.id.as_str().contains(&self.search_query)
                || record.url.contains(&self.search_query))
    }
}

/// Indices of the records passing `criteria`, preserving input order.
pub fn filter_indices(records: &[Record], criteria: &FilterCriteria) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| criteria.matches(record))
        .map(|(idx, _)| idx)
        .collect()
}

/// Distinct status values in order of first appearance.
pub fn distinct_statuses(records: &[Record]) -> Vec<String> {
    let mut seen = BTreeSet::new();
    let mut statuses = Vec::new();
    for record in records {
        if seen.insert(record.status.as_str()) {
            statuses.push(record.status.clone());
        }
    }
    statuses
}
