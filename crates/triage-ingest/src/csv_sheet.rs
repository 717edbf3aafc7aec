#![deny(unsafe_code)]

//! CSV export adapter for the CLI's ingestion path.
//!
//! Measurement platforms commonly offer a CSV export of the same workbook.
//! This adapter reads one file as a single worksheet, inferring numeric and
//! ISO-date cells so the rest of the pipeline sees the same typed cells an
//! upload boundary would hand over.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveDateTime};
use csv::ReaderBuilder;
use triage_model::{SheetCell, Worksheet};

/// Reads a CSV export as a one-sheet workbook worksheet.
pub fn read_worksheet_csv(path: &Path) -> Result<Worksheet> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    let name = path
        .file_stem()
        .map_or_else(|| "Sheet1".to_string(), |stem| stem.to_string_lossy().to_string());
    worksheet_from_reader(file, &name)
}

/// Reads CSV content from any reader; header row stays row 0.
pub fn worksheet_from_reader(reader: impl Read, name: &str) -> Result<Worksheet> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut sheet = Worksheet::new(name);
    for record in csv_reader.records() {
        let record = record.context("failed to read csv record")?;
        sheet.push_row(record.iter().map(infer_cell).collect());
    }
    Ok(sheet)
}

/// Types a raw CSV field the way a workbook export would.
fn infer_cell(raw: &str) -> SheetCell {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    if trimmed.is_empty() {
        return SheetCell::Empty;
    }
    if let Ok(number) = trimmed.parse::<f64>() {
        return SheetCell::Number(number);
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return SheetCell::Date(dt);
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        if let Some(dt) = date.and_hms_opt(0, 0, 0) {
            return SheetCell::Date(dt);
        }
    }
    SheetCell::Text(trimmed.to_string())
}
