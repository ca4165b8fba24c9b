pub mod filter;
pub mod summary;

pub use filter::{FilterCriteria, distinct_statuses, filter_indices};
pub use summary::{StatusCount, status_counts};
