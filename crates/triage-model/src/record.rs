#![deny(unsafe_code)]

//! Per-row and per-patient records produced by the pipeline.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::cell::CellValue;
use crate::ids::{PatientId, RowId};
use crate::severity::{HealthStatus, Severity};

/// One parsed spreadsheet row. Immutable after parsing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientRecord {
    pub row_id: RowId,
    pub patient_id: PatientId,
    /// Display name with any embedded date-of-birth substring stripped.
    pub name: String,
    /// Derived age in whole years.
    pub age: u32,
    /// Condition label, `"Unknown"` when the source cell was blank.
    pub condition: String,
    pub is_alert: bool,
    /// Every source column retained, header -> normalized value.
    pub variables: BTreeMap<String, CellValue>,
    pub issues: Vec<String>,
    /// Reference timestamp taken from the row, when one was present.
    pub recorded_at: Option<NaiveDateTime>,
}

/// The consolidated record for one patient id within a batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregatedPatient {
    pub patient_id: PatientId,
    pub name: String,
    pub age: u32,
    /// Distinct conditions in first-seen order.
    pub conditions: Vec<String>,
    /// Issues concatenated across rows; duplicates kept, each row is a
    /// distinct reading.
    pub issues: Vec<String>,
    /// Alert reasons concatenated across rows, same list semantics.
    pub alert_reasons: Vec<String>,
    /// Flat variable map, later rows overwrite earlier ones.
    pub variables: BTreeMap<String, CellValue>,
    pub severity: Severity,
    pub health_status: HealthStatus,
    pub is_alert: bool,
    /// Every contributing row, retained for audit and regeneration.
    pub raw_data: Vec<PatientRecord>,
}

impl AggregatedPatient {
    /// Joined condition label for display (`"Diabetes; Hypertension"`).
    pub fn condition_label(&self) -> String {
        if self.conditions.is_empty() {
            "Unknown".to_string()
        } else {
            self.conditions.join("; ")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aggregate_with(conditions: Vec<String>) -> AggregatedPatient {
        AggregatedPatient {
            patient_id: PatientId::new("P001").unwrap(),
            name: "Jane Doe".to_string(),
            age: 74,
            conditions,
            issues: Vec::new(),
            alert_reasons: Vec::new(),
            variables: BTreeMap::new(),
            severity: Severity::Green,
            health_status: HealthStatus::Healthy,
            is_alert: false,
            raw_data: Vec::new(),
        }
    }

    #[test]
    fn condition_label_joins_or_defaults() {
        assert_eq!(aggregate_with(Vec::new()).condition_label(), "Unknown");
        assert_eq!(
            aggregate_with(vec!["Diabetes".into(), "Hypertension".into()]).condition_label(),
            "Diabetes; Hypertension"
        );
    }
}
