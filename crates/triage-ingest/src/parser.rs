#![deny(unsafe_code)]

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};
use sha2::{Digest, Sha256};
use tracing::{debug, warn};
use triage_map::ColumnMap;
use triage_model::{CellValue, PatientId, PatientRecord, RowId, SheetCell, Worksheet};

use crate::dob::{age_in_years, extract_dob};
use crate::normalize::normalize_cell;

const UNKNOWN_CONDITION: &str = "Unknown";

/// Parses every data row of a worksheet against a resolved column map.
///
/// `now` is the processing-time reference for age derivation; injecting it
/// keeps a batch pass deterministic under test.
pub fn parse_sheet(
    sheet: &Worksheet,
    headers: &[String],
    columns: &ColumnMap,
    now: NaiveDateTime,
) -> Vec<PatientRecord> {
    sheet
        .data_rows()
        .iter()
        .enumerate()
        .map(|(idx, row)| parse_row(headers, row, columns, idx + 1, now))
        .collect()
}

/// Parses one data row into a [`PatientRecord`].
///
/// Never fails: blank identity falls back to a sequence-derived id,
/// unparsable ages fall back to the explicit age column and then to 0.
pub fn parse_row(
    headers: &[String],
    row: &[SheetCell],
    columns: &ColumnMap,
    sequence: usize,
    now: NaiveDateTime,
) -> PatientRecord {
    let cell = |idx: usize| -> CellValue {
        row.get(idx).map_or(CellValue::Missing, normalize_cell)
    };

    let mut variables = BTreeMap::new();
    for (idx, header) in headers.iter().enumerate() {
        let value = cell(idx);
        if !value.is_missing() {
            variables.insert(header.clone(), value);
        }
    }

    let patient_id = PatientId::new(cell(columns.patient_id).as_text())
        .unwrap_or_else(|_| PatientId::from_sequence(sequence));

    let recorded_at = columns
        .timestamp
        .and_then(|idx| parse_reference_timestamp(&cell(idx)));
    let reference_date = recorded_at.unwrap_or(now).date();

    let raw_name = cell(columns.name).as_text();
    let (name, age) = match extract_dob(&raw_name) {
        Some((dob, cleaned)) => (cleaned, age_in_years(dob, reference_date)),
        None => (raw_name.trim().to_string(), explicit_age(&cell(columns.age))),
    };

    let condition = match cell(columns.condition) {
        CellValue::Missing => UNKNOWN_CONDITION.to_string(),
        value => {
            let text = value.as_text().trim().to_string();
            if text.is_empty() {
                UNKNOWN_CONDITION.to_string()
            } else {
                text
            }
        }
    };

    // Long-format exports name the metric in the condition column and carry
    // the reading in a separate value column; surface the pair under the
    // metric name so threshold evaluation sees it.
    if let Some(idx) = columns.value {
        let value = cell(idx);
        if !value.is_missing() && condition != UNKNOWN_CONDITION {
            variables.insert(condition.clone(), value);
        }
    }

    let is_alert = columns
        .alert_flag
        .is_some_and(|idx| cell(idx).is_truthy());

    let issues = collect_issues(headers, &variables);

    let record = PatientRecord {
        row_id: row_id(sequence, row),
        patient_id,
        name,
        age,
        condition,
        is_alert,
        variables,
        issues,
        recorded_at,
    };
    debug!(
        patient = %record.patient_id,
        sequence,
        age = record.age,
        "parsed row"
    );
    record
}

/// Parses a per-row reference timestamp column value.
pub fn parse_reference_timestamp(value: &CellValue) -> Option<NaiveDateTime> {
    match value {
        CellValue::Date(dt) => Some(*dt),
        CellValue::Text(text) => {
            let trimmed = text.trim();
            for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
                if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
                    return Some(dt);
                }
            }
            for format in ["%Y-%m-%d", "%m/%d/%Y"] {
                if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
                    return date.and_hms_opt(0, 0, 0);
                }
            }
            warn!(value = trimmed, "unparsable reference timestamp, using now");
            None
        }
        CellValue::Number(_) | CellValue::Missing => None,
    }
}

fn explicit_age(value: &CellValue) -> u32 {
    match value.as_f64() {
        Some(age) if age >= 0.0 => age as u32,
        Some(_) => 0,
        None => {
            if !value.is_missing() {
                warn!(value = %value.as_text(), "non-numeric age, defaulting to 0");
            }
            0
        }
    }
}

/// Issue lists ride along in free-text columns, semicolon separated.
fn collect_issues(headers: &[String], variables: &BTreeMap<String, CellValue>) -> Vec<String> {
    let mut issues = Vec::new();
    for header in headers {
        let normalized = header.to_lowercase();
        if !(normalized.contains("issue") || normalized.contains("note")) {
            continue;
        }
        if let Some(value) = variables.get(header) {
            for item in value.as_text().split(';') {
                let item = item.trim();
                if !item.is_empty() {
                    issues.push(item.to_string());
                }
            }
        }
    }
    issues
}

fn row_id(sequence: usize, row: &[SheetCell]) -> RowId {
    let mut hasher = Sha256::new();
    hasher.update(sequence.to_le_bytes());
    for cell in row {
        hasher.update(normalize_cell(cell).as_text().as_bytes());
        hasher.update([0x1f]);
    }
    RowId::from_first_16_bytes_of_sha256(hasher.finalize().into())
}
