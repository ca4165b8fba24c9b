//! Per-status aggregation for the chart and legend surfaces.

use linkmon_model::Record;

/// Number of records carrying one status label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusCount {
    pub status: String,
    pub count: usize,
}

/// Count records per status, in order of first appearance.
///
/// Computed over the full dataset, not the filtered view; the charts
/// summarize everything that was loaded.
pub fn status_counts(records: &[Record]) -> Vec<StatusCount> {
    let mut counts: Vec<StatusCount> = Vec::new();
    for record in records {
        match counts.iter_mut().find(|entry| entry.status == record.status) {
            Some(entry) => entry.count += 1,
            None => counts.push(StatusCount {
                status: record.status.clone(),
                count: 1,
            }),
        }
    }
    counts
}
