#![deny(unsafe_code)]

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::cell::CellValue;
use crate::ids::{PatientId, RowId};
use crate::severity::Severity;

/// Send state of an alert. Owned by the downstream dispatch collaborator;
/// this core only sets the initial value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertStatus {
    Pending,
    Healthy,
}

/// One displayed reading on an alert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableReading {
    pub name: String,
    pub value: CellValue,
    pub recorded_at: Option<NaiveDateTime>,
}

/// The triage worklist entry handed to the dispatch collaborator.
///
/// Created fresh on every classification run; never persisted here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    pub id: RowId,
    pub patient_id: PatientId,
    pub patient_name: String,
    pub age: u32,
    pub condition: String,
    pub severity: Severity,
    pub alert_reasons: Vec<String>,
    pub variables: Vec<VariableReading>,
    pub message: String,
    pub alert_count: usize,
    pub status: AlertStatus,
}
