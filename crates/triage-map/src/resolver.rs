#![deny(unsafe_code)]

use tracing::debug;

use crate::patterns::{FIELD_PATTERNS, Field, is_timestamp_header};

/// Resolved column positions for one batch.
///
/// Required fields always hold an in-range index (positional fallback);
/// optional fields stay `None` when no header matched.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ColumnMap {
    pub patient_id: usize,
    pub name: usize,
    pub age: usize,
    pub condition: usize,
    pub alert_flag: Option<usize>,
    pub value: Option<usize>,
    pub timestamp: Option<usize>,
}

/// Lowercases, trims a UTF-8 BOM, and collapses internal whitespace.
pub fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut normalized = String::new();
    for part in trimmed.split_whitespace() {
        if !normalized.is_empty() {
            normalized.push(' ');
        }
        normalized.push_str(&part.to_lowercase());
    }
    normalized
}

/// Maps semantic fields to column positions for one header row.
///
/// Evaluates the pattern table once; unmatched required fields fall back to
/// positions chained off the previous required field (patient id -> 0,
/// name -> patient id + 1, and so on), clamped into range so the mapping is
/// total for any header row.
pub fn resolve_columns(headers: &[String]) -> ColumnMap {
    let normalized: Vec<String> = headers.iter().map(|h| normalize_header(h)).collect();

    let find = |field: Field| -> Option<usize> {
        let pattern = FIELD_PATTERNS.iter().find(|p| p.field == field)?;
        for keyword in pattern.keywords {
            if let Some(idx) = normalized.iter().position(|h| h.contains(keyword)) {
                return Some(idx);
            }
        }
        None
    };

    let clamp = |idx: usize| -> usize { idx.min(headers.len().saturating_sub(1)) };

    let patient_id = find(Field::PatientId).map_or(0, clamp);
    let name = find(Field::Name).map_or_else(|| clamp(patient_id + 1), clamp);
    let age = find(Field::Age).map_or_else(|| clamp(name + 1), clamp);
    let condition = find(Field::Condition).map_or_else(|| clamp(age + 1), clamp);
    let alert_flag = find(Field::AlertFlag);
    let value = find(Field::Value);
    let timestamp = normalized.iter().position(|h| is_timestamp_header(h));

    let map = ColumnMap {
        patient_id,
        name,
        age,
        condition,
        alert_flag,
        value,
        timestamp,
    };
    debug!(?map, columns = headers.len(), "resolved columns");
    map
}
