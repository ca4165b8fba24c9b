//! Ingestion failure taxonomy.
//!
//! Every variant is a hard load failure surfaced to the user as a blocking
//! error; an empty dataset is not an error (see [`crate::report`]).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to read workbook: {0}")]
    Workbook(#[from] calamine::XlsxError),
    #[error("workbook has no worksheets")]
    NoSheet,
    #[error("missing required column `{0}` in header row")]
    MissingColumn(&'static str),
    #[error("row {row}: missing required field `{field}`")]
    MissingField { row: usize, field: &'static str },
    #[error("row {row}: duplicate record id `{id}`")]
    DuplicateId { row: usize, id: String },
}
