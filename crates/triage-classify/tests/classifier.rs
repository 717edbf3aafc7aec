//! Threshold-table scenarios from the triage rules.

use std::collections::BTreeMap;

use triage_classify::{NORMAL_READINGS_REASON, SOURCE_FLAG_REASON, classify};
use triage_model::{CellValue, PatientId, PatientRecord, RowId, Severity};

fn record(variables: &[(&str, CellValue)], is_alert: bool) -> PatientRecord {
    PatientRecord {
        row_id: RowId::from_first_16_bytes_of_sha256([0u8; 32]),
        patient_id: PatientId::new("P001").unwrap(),
        name: "Jane Doe".to_string(),
        age: 74,
        condition: "Diabetes".to_string(),
        is_alert,
        variables: variables
            .iter()
            .map(|(k, v)| ((*k).to_string(), v.clone()))
            .collect::<BTreeMap<_, _>>(),
        issues: Vec::new(),
        recorded_at: None,
    }
}

#[test]
fn glucose_320_is_red_with_critical_reason() {
    let classification = classify(&record(&[("Glucose", CellValue::Number(320.0))], false));
    assert_eq!(classification.severity, Severity::Red);
    assert!(classification.is_alert);
    assert_eq!(classification.reasons.len(), 1);
    let reason = &classification.reasons[0];
    assert!(reason.contains("CRITICAL"), "{reason}");
    assert!(reason.contains("glucose"), "{reason}");
    assert!(reason.contains("320"), "{reason}");
}

#[test]
fn glucose_200_is_yellow() {
    let classification = classify(&record(&[("Glucose", CellValue::Number(200.0))], false));
    assert_eq!(classification.severity, Severity::Yellow);
    assert!(classification.reasons[0].contains("ATTENTION"));
}

#[test]
fn glucose_100_emits_no_glucose_reason() {
    let classification = classify(&record(&[("Glucose", CellValue::Number(100.0))], false));
    assert_eq!(classification.severity, Severity::Green);
    assert!(!classification.is_alert);
    assert_eq!(classification.reasons, vec![NORMAL_READINGS_REASON]);
}

#[test]
fn red_takes_precedence_over_yellow_for_one_variable() {
    // 320 trips both the red (>300) and yellow (>180) bands; only the
    // CRITICAL reason may be emitted.
    let classification = classify(&record(&[("Glucose", CellValue::Number(320.0))], false));
    assert_eq!(
        classification
            .reasons
            .iter()
            .filter(|r| r.contains("glucose"))
            .count(),
        1
    );
}

#[test]
fn low_oxygen_is_red() {
    let classification = classify(&record(&[("Oxygen Saturation", CellValue::Number(80.0))], false));
    assert_eq!(classification.severity, Severity::Red);
    assert!(classification.reasons[0].contains("oxygen"));
}

#[test]
fn boundary_values_do_not_trip() {
    for (name, value) in [
        ("Glucose", 300.0),
        ("Blood Pressure", 180.0),
        ("Heart Rate", 150.0),
        ("Temperature", 103.0),
        ("Oxygen Saturation", 92.0),
    ] {
        let classification = classify(&record(&[(name, CellValue::Number(value))], false));
        assert_ne!(classification.severity, Severity::Red, "{name} {value}");
    }
}

#[test]
fn numeric_strings_are_evaluated_and_text_is_skipped() {
    let classification = classify(&record(
        &[
            ("Heart Rate", CellValue::Text("160".to_string())),
            ("Temperature", CellValue::Text("not taken".to_string())),
        ],
        false,
    ));
    assert_eq!(classification.severity, Severity::Red);
    assert_eq!(classification.reasons.len(), 1);
}

#[test]
fn source_flag_without_evidence_defaults_to_yellow() {
    let classification = classify(&record(&[("Glucose", CellValue::Number(100.0))], true));
    assert_eq!(classification.severity, Severity::Yellow);
    assert!(classification.is_alert);
    assert_eq!(classification.reasons, vec![SOURCE_FLAG_REASON]);
}

#[test]
fn source_flag_does_not_override_threshold_severity() {
    let classification = classify(&record(&[("Glucose", CellValue::Number(320.0))], true));
    assert_eq!(classification.severity, Severity::Red);
}

#[test]
fn healthy_override_beats_critical_readings() {
    let classification = classify(&record(
        &[
            ("Glucose", CellValue::Number(400.0)),
            ("Health Status", CellValue::Text("healthy".to_string())),
        ],
        true,
    ));
    assert_eq!(classification.severity, Severity::Green);
    assert!(!classification.is_alert);
    assert!(classification.healthy_override);
    assert_eq!(classification.reasons, vec![NORMAL_READINGS_REASON]);
}

#[test]
fn multiple_metrics_accumulate_reasons_most_severe_wins() {
    let classification = classify(&record(
        &[
            ("Blood Pressure", CellValue::Number(150.0)),
            ("Heart Rate", CellValue::Number(35.0)),
        ],
        false,
    ));
    assert_eq!(classification.severity, Severity::Red);
    assert_eq!(classification.reasons.len(), 2);
}
