#![deny(unsafe_code)]

//! SMS-style message rendering.
//!
//! Detail scales with severity: critical alerts carry every critical
//! reason and the readings behind them; attention alerts a moderate
//! summary; healthy entries a one-line reassurance.

use tracing::debug;
use triage_classify::METRIC_THRESHOLDS;
use triage_model::{
    AggregatedPatient, Alert, AlertStatus, RowId, Severity, VariableReading,
};

pub const RED_PREFIX: &str = "\u{1f534} URGENT ACTION REQUIRED";
pub const YELLOW_PREFIX: &str = "\u{1f7e1} ATTENTION NEEDED";
pub const GREEN_PREFIX: &str = "\u{1f7e2} ROUTINE CHECK";
pub const RED_SUFFIX: &str = "REQUIRES IMMEDIATE CLINICAL ATTENTION";

const YELLOW_MAX_REASONS: usize = 2;
const YELLOW_MAX_READINGS: usize = 3;
const GREEN_MAX_READINGS: usize = 1;
const GREEN_REASSURANCE: &str = "All readings within normal range. No action needed.";

/// Renders the severity-tiered message for one aggregated patient.
pub fn format_message(patient: &AggregatedPatient) -> String {
    let message = match patient.severity {
        Severity::Red => red_message(patient),
        Severity::Yellow => yellow_message(patient),
        Severity::Green => green_message(patient),
    };
    debug!(patient = %patient.patient_id, severity = %patient.severity, "formatted message");
    message
}

/// Builds the worklist [`Alert`] handed to the dispatch collaborator.
pub fn build_alert(id: RowId, patient: &AggregatedPatient) -> Alert {
    let recorded_at = patient.raw_data.iter().rev().find_map(|r| r.recorded_at);
    let variables = patient
        .variables
        .iter()
        .map(|(name, value)| VariableReading {
            name: name.clone(),
            value: value.clone(),
            recorded_at,
        })
        .collect();

    Alert {
        id,
        patient_id: patient.patient_id.clone(),
        patient_name: patient.name.clone(),
        age: patient.age,
        condition: patient.condition_label(),
        severity: patient.severity,
        alert_reasons: patient.alert_reasons.clone(),
        variables,
        message: format_message(patient),
        alert_count: patient.alert_reasons.len(),
        status: if patient.severity == Severity::Green {
            AlertStatus::Healthy
        } else {
            AlertStatus::Pending
        },
    }
}

fn red_message(patient: &AggregatedPatient) -> String {
    let critical: Vec<&str> = patient
        .alert_reasons
        .iter()
        .filter(|reason| reason.contains("CRITICAL"))
        .map(String::as_str)
        .collect();

    let mut lines = vec![format!(
        "{RED_PREFIX}: {}, age {} ({})",
        patient.name,
        patient.age,
        patient.condition_label()
    )];
    if !critical.is_empty() {
        lines.push(critical.join("; "));
    }
    let readings = critical_readings(patient, &critical);
    if !readings.is_empty() {
        lines.push(format!("Readings: {}", readings.join(", ")));
    }
    lines.push(RED_SUFFIX.to_string());
    lines.join("\n")
}

fn yellow_message(patient: &AggregatedPatient) -> String {
    let mut lines = vec![format!(
        "{YELLOW_PREFIX}: {}, age {} ({})",
        patient.name,
        patient.age,
        patient.condition_label()
    )];
    let summary: Vec<&str> = patient
        .alert_reasons
        .iter()
        .take(YELLOW_MAX_REASONS)
        .map(String::as_str)
        .collect();
    if !summary.is_empty() {
        lines.push(summary.join("; "));
    }
    let readings = metric_readings(patient, YELLOW_MAX_READINGS);
    if !readings.is_empty() {
        lines.push(format!("Readings: {}", readings.join(", ")));
    }
    lines.push("Please arrange a routine follow-up.".to_string());
    lines.join("\n")
}

fn green_message(patient: &AggregatedPatient) -> String {
    let mut lines = vec![format!(
        "{GREEN_PREFIX}: {}, age {}",
        patient.name, patient.age
    )];
    lines.push(GREEN_REASSURANCE.to_string());
    if let Some(reading) = metric_readings(patient, GREEN_MAX_READINGS).into_iter().next() {
        lines.push(format!("Latest reading: {reading}"));
    }
    lines.join("\n")
}

/// Readings shown on a critical message: only variables whose metric a
/// critical reason names. Variables and reasons are tied through the
/// threshold table, so a `Pulse` column still surfaces under a
/// `heart rate` reason.
fn critical_readings(patient: &AggregatedPatient, critical: &[&str]) -> Vec<String> {
    let labels: Vec<String> = critical.iter().filter_map(|r| metric_phrase(r)).collect();
    patient
        .variables
        .iter()
        .filter(|(name, _)| {
            metric_label(name).is_some_and(|label| labels.iter().any(|l| l == label))
        })
        .map(|(name, value)| format!("{name}={}", value.as_text()))
        .collect()
}

/// `name=value` readings for recognized vital-sign variables only.
/// Identity columns riding along in the variable map (age, condition,
/// patient id) never render as readings.
fn metric_readings(patient: &AggregatedPatient, limit: usize) -> Vec<String> {
    patient
        .variables
        .iter()
        .filter(|(name, _)| metric_label(name).is_some())
        .take(limit)
        .map(|(name, value)| format!("{name}={}", value.as_text()))
        .collect()
}

fn metric_label(variable_name: &str) -> Option<&'static str> {
    METRIC_THRESHOLDS
        .iter()
        .find(|metric| metric.matches(variable_name))
        .map(|metric| metric.label)
}

/// Extracts the metric phrase out of `"CRITICAL: <metric> is <value>"`.
fn metric_phrase(reason: &str) -> Option<String> {
    let rest = reason.split_once("CRITICAL:")?.1;
    let phrase = rest.split_once(" is ")?.0;
    let phrase = phrase.trim().to_lowercase();
    if phrase.is_empty() { None } else { Some(phrase) }
}
