#![deny(unsafe_code)]

use serde::{Deserialize, Serialize};
use tracing::debug;
use triage_model::cell::format_numeric;
use triage_model::{PatientRecord, Severity};

use crate::thresholds::METRIC_THRESHOLDS;

/// Reason emitted when nothing trips a threshold.
pub const NORMAL_READINGS_REASON: &str = "All readings within normal range";

/// Reason emitted when only the source's alert flag marks the row.
pub const SOURCE_FLAG_REASON: &str = "Flagged by source alert indicator";

/// The classifier's verdict for one parsed row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Classification {
    pub severity: Severity,
    pub is_alert: bool,
    /// Ordered, human-readable reasons; red reasons carry `CRITICAL:`.
    pub reasons: Vec<String>,
    /// Set when upstream metadata explicitly marked the patient healthy;
    /// takes precedence over every threshold result.
    pub healthy_override: bool,
}

/// Evaluates one row's variables against the threshold table.
///
/// Only numeric (or numeric-parseable) values are evaluated; everything
/// else is skipped without error. An explicit healthy status in the source
/// metadata forces green regardless of readings.
pub fn classify(record: &PatientRecord) -> Classification {
    if has_healthy_override(record) {
        return Classification {
            severity: Severity::Green,
            is_alert: false,
            reasons: vec![NORMAL_READINGS_REASON.to_string()],
            healthy_override: true,
        };
    }

    let mut severity = Severity::Green;
    let mut reasons = Vec::new();

    for (name, value) in &record.variables {
        let Some(number) = value.as_f64() else {
            continue;
        };
        let Some(metric) = METRIC_THRESHOLDS.iter().find(|m| m.matches(name)) else {
            continue;
        };
        let rendered = format_numeric(number);
        if metric.red.trips(number) {
            severity = Severity::Red.max(severity);
            reasons.push(format!("CRITICAL: {} is {}", metric.label, rendered));
        } else if metric.yellow.trips(number) {
            severity = Severity::Yellow.max(severity);
            reasons.push(format!("ATTENTION: {} is {}", metric.label, rendered));
        }
    }

    let mut is_alert = !reasons.is_empty();
    if record.is_alert && !is_alert {
        // Source flag without numeric evidence: attention tier by default.
        severity = Severity::Yellow;
        reasons.push(SOURCE_FLAG_REASON.to_string());
        is_alert = true;
    }

    if reasons.is_empty() {
        reasons.push(NORMAL_READINGS_REASON.to_string());
    }

    debug!(
        patient = %record.patient_id,
        severity = %severity,
        reasons = reasons.len(),
        "classified row"
    );

    Classification {
        severity,
        is_alert,
        reasons,
        healthy_override: false,
    }
}

/// True when upstream metadata carries `health status == healthy`.
fn has_healthy_override(record: &PatientRecord) -> bool {
    record.variables.iter().any(|(name, value)| {
        let key = name.to_lowercase();
        key.contains("health")
            && key.contains("status")
            && value.as_text().trim().eq_ignore_ascii_case("healthy")
    })
}
