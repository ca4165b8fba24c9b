//! Report workbook reading.
//!
//! A processed report is an `.xlsx` workbook whose first worksheet carries a
//! header row naming at least `id, url, status, last_checked, log,
//! screenshot`; each subsequent row becomes one [`Record`]. Columns the
//! checker pipeline adds beyond these (e.g. `title`, `page_type`) are
//! ignored. The record-id uniqueness invariant is enforced here, at the
//! boundary, so nothing downstream has to revalidate rows.

use std::collections::BTreeSet;
use std::path::Path;

use calamine::{Data, Range, Reader, Xlsx, open_workbook};
use linkmon_model::{Record, RecordId};

use crate::error::IngestError;

/// Required header columns, matched case-insensitively after trimming.
const REQUIRED_COLUMNS: [&str; 6] = ["id", "url", "status", "last_checked", "log", "screenshot"];

/// Timestamp layout used when rendering spreadsheet date cells.
const DATE_CELL_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Load all records from the first worksheet of the workbook at `path`.
pub fn load_report(path: &Path) -> Result<Vec<Record>, IngestError> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(IngestError::NoSheet)??;
    let records = records_from_range(&range)?;
    tracing::info!(
        path = %path.display(),
        records = records.len(),
        "loaded report workbook"
    );
    Ok(records)
}

/// Column positions resolved from the header row.
struct HeaderMap {
    id: usize,
    url: usize,
    status: usize,
    last_checked: usize,
    log: usize,
    screenshot: usize,
}

impl HeaderMap {
    fn resolve(header: &[String]) -> Result<Self, IngestError> {
        let find = |name: &'static str| -> Result<usize, IngestError> {
            header
                .iter()
                .position(|cell| cell.eq_ignore_ascii_case(name))
                .ok_or(IngestError::MissingColumn(name))
        };
        Ok(Self {
            id: find(REQUIRED_COLUMNS[0])?,
            url: find(REQUIRED_COLUMNS[1])?,
            status: find(REQUIRED_COLUMNS[2])?,
            last_checked: find(REQUIRED_COLUMNS[3])?,
            log: find(REQUIRED_COLUMNS[4])?,
            screenshot: find(REQUIRED_COLUMNS[5])?,
        })
    }
}

/// Convert a worksheet range into validated records.
///
/// Blank rows are skipped wherever they appear; the first non-blank row is
/// the header. A worksheet with no non-blank rows at all is a valid empty
/// dataset, matching the original loader.
pub fn records_from_range(range: &Range<Data>) -> Result<Vec<Record>, IngestError> {
    let mut rows = range
        .rows()
        .map(|row| row.iter().map(cell_to_string).collect::<Vec<String>>())
        .filter(|row| row.iter().any(|cell| !cell.is_empty()));

    let Some(header_row) = rows.next() else {
        return Ok(Vec::new());
    };
    let header = HeaderMap::resolve(&header_row)?;

    let mut records = Vec::new();
    let mut seen_ids: BTreeSet<String> = BTreeSet::new();
    // Worksheet rows are reported 1-based with the header as row 1.
    for (offset, row) in rows.enumerate() {
        let row_number = offset + 2;
        let field = |idx: usize| row.get(idx).map(String::as_str).unwrap_or("");

        let require = |idx: usize, name: &'static str| -> Result<String, IngestError> {
            let value = field(idx);
            if value.is_empty() {
                Err(IngestError::MissingField {
                    row: row_number,
                    field: name,
                })
            } else {
                Ok(value.to_string())
            }
        };

        let id = require(header.id, "id")?;
        if !seen_ids.insert(id.clone()) {
            return Err(IngestError::DuplicateId {
                row: row_number,
                id,
            });
        }

        let screenshot = field(header.screenshot);
        records.push(Record {
            id: RecordId::new(id),
            url: require(header.url, "url")?,
            status: require(header.status, "status")?,
            last_checked: field(header.last_checked).to_string(),
            log: field(header.log).to_string(),
            screenshot: (!screenshot.is_empty()).then(|| screenshot.to_string()),
        });
    }

    Ok(records)
}

/// Render one cell as the string the dashboard works with.
///
/// Numeric ids come out of spreadsheets as floats; integral floats render
/// without a decimal point so `7` never becomes `"7.0"`. Date cells render
/// in the checker's timestamp layout.
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty | Data::Error(_) => String::new(),
        Data::String(value) => value.trim().to_string(),
        Data::Int(value) => value.to_string(),
        Data::Float(value) => {
            if value.fract() == 0.0 && value.abs() < 9e15 {
                format!("{}", *value as i64)
            } else {
                value.to_string()
            }
        }
        Data::Bool(value) => value.to_string(),
        Data::DateTime(value) => match value.as_datetime() {
            Some(datetime) => datetime.format(DATE_CELL_FORMAT).to_string(),
            None => value.as_f64().to_string(),
        },
        Data::DateTimeIso(value) | Data::DurationIso(value) => value.trim().to_string(),
    }
}
