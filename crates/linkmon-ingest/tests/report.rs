//! Unit tests for worksheet-to-record conversion.
//!
//! Ranges are built in memory so no workbook fixtures are needed.

use calamine::{Data, Range};
use linkmon_ingest::{IngestError, records_from_range};

const HEADER: [&str; 6] = ["id", "url", "status", "last_checked", "log", "screenshot"];

fn sheet(rows: &[Vec<Data>]) -> Range<Data> {
    let height = rows.len().max(1) as u32;
    let width = rows.iter().map(Vec::len).max().unwrap_or(1).max(1) as u32;
    let mut range = Range::new((0, 0), (height - 1, width - 1));
    for (row_idx, row) in rows.iter().enumerate() {
        for (col_idx, cell) in row.iter().enumerate() {
            range.set_value((row_idx as u32, col_idx as u32), cell.clone());
        }
    }
    range
}

fn text_row(cells: &[&str]) -> Vec<Data> {
    cells.iter().map(|cell| Data::String(cell.to_string())).collect()
}

fn header_row() -> Vec<Data> {
    text_row(&HEADER)
}

#[test]
fn parses_a_well_formed_sheet() {
    let range = sheet(&[
        header_row(),
        text_row(&[
            "1",
            "https://a.example",
            "STATUS_OK",
            "2024-10-24 09:48:02",
            "ok",
            "shots/1.png",
        ]),
        text_row(&["2", "https://b.example", "STATUS_ERROR", "", "timed out", ""]),
    ]);

    let records = records_from_range(&range).expect("sheet should parse");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id.as_str(), "1");
    assert_eq!(records[0].screenshot.as_deref(), Some("shots/1.png"));
    assert_eq!(records[1].status, "STATUS_ERROR");
    // Empty screenshot cells normalize to None.
    assert_eq!(records[1].screenshot, None);
    assert_eq!(records[1].last_checked, "");
}

#[test]
fn numeric_ids_stringify_without_decimal_point() {
    let range = sheet(&[
        header_row(),
        vec![
            Data::Float(7.0),
            Data::String("https://a.example".to_string()),
            Data::String("STATUS_OK".to_string()),
            Data::Empty,
            Data::Empty,
            Data::Empty,
        ],
    ]);

    let records = records_from_range(&range).expect("sheet should parse");
    assert_eq!(records[0].id.as_str(), "7");
}

#[test]
fn header_match_is_case_insensitive_and_extra_columns_are_ignored() {
    let range = sheet(&[
        text_row(&[
            "ID",
            "Url",
            "STATUS",
            "Last_Checked",
            "Log",
            "Screenshot",
            "title",
            "page_type",
        ]),
        text_row(&[
            "1",
            "https://a.example",
            "STATUS_OK",
            "",
            "",
            "",
            "Launch post",
            "product",
        ]),
    ]);

    let records = records_from_range(&range).expect("sheet should parse");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].url, "https://a.example");
}

#[test]
fn blank_rows_are_skipped() {
    let range = sheet(&[
        vec![Data::Empty; 6],
        header_row(),
        vec![Data::Empty; 6],
        text_row(&["1", "https://a.example", "STATUS_OK", "", "", ""]),
    ]);

    let records = records_from_range(&range).expect("sheet should parse");
    assert_eq!(records.len(), 1);
}

#[test]
fn empty_sheet_is_an_empty_dataset() {
    let range = sheet(&[]);
    let records = records_from_range(&range).expect("empty sheet is valid");
    assert!(records.is_empty());
}

#[test]
fn header_without_rows_is_an_empty_dataset() {
    let range = sheet(&[header_row()]);
    let records = records_from_range(&range).expect("header-only sheet is valid");
    assert!(records.is_empty());
}

#[test]
fn missing_required_column_is_rejected() {
    let range = sheet(&[
        text_row(&["id", "url", "status", "last_checked", "log"]),
        text_row(&["1", "https://a.example", "STATUS_OK", "", ""]),
    ]);

    match records_from_range(&range) {
        Err(IngestError::MissingColumn(column)) => assert_eq!(column, "screenshot"),
        other => panic!("expected MissingColumn, got {other:?}"),
    }
}

#[test]
fn missing_required_field_is_rejected_with_row_number() {
    let range = sheet(&[
        header_row(),
        text_row(&["1", "", "STATUS_OK", "", "", ""]),
    ]);

    match records_from_range(&range) {
        Err(IngestError::MissingField { row, field }) => {
            assert_eq!(row, 2);
            assert_eq!(field, "url");
        }
        other => panic!("expected MissingField, got {other:?}"),
    }
}

#[test]
fn duplicate_ids_are_rejected() {
    let range = sheet(&[
        header_row(),
        text_row(&["1", "https://a.example", "STATUS_OK", "", "", ""]),
        text_row(&["1", "https://b.example", "STATUS_ERROR", "", "", ""]),
    ]);

    match records_from_range(&range) {
        Err(IngestError::DuplicateId { row, id }) => {
            assert_eq!(row, 3);
            assert_eq!(id, "1");
        }
        other => panic!("expected DuplicateId, got {other:?}"),
    }
}
