pub mod error;
pub mod report;

pub use error::IngestError;
pub use report::{load_report, records_from_range};
