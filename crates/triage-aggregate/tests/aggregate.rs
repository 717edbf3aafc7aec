//! Aggregation and backfill behavior.

use std::collections::BTreeMap;

use proptest::prelude::*;
use triage_aggregate::{
    HEALTHY_CONDITION, MAX_WORKLIST_PATIENTS, MIN_WORKLIST_PATIENTS, aggregate,
    aggregate_with_backfill,
};
use triage_classify::{Classification, classify};
use triage_model::{
    CellValue, HealthStatus, PatientId, PatientRecord, RowId, Severity,
};

fn record(id: &str, condition: &str, variables: &[(&str, f64)]) -> PatientRecord {
    PatientRecord {
        row_id: RowId::from_first_16_bytes_of_sha256([id.len() as u8; 32]),
        patient_id: PatientId::new(id).unwrap(),
        name: format!("Patient {id}"),
        age: 60,
        condition: condition.to_string(),
        is_alert: false,
        variables: variables
            .iter()
            .map(|(k, v)| ((*k).to_string(), CellValue::Number(*v)))
            .collect::<BTreeMap<_, _>>(),
        issues: Vec::new(),
        recorded_at: None,
    }
}

fn classified(
    id: &str,
    condition: &str,
    variables: &[(&str, f64)],
) -> (PatientRecord, Classification) {
    let record = record(id, condition, variables);
    let classification = classify(&record);
    (record, classification)
}

#[test]
fn same_patient_rows_union_conditions_exactly_once() {
    let rows = vec![
        classified("P001", "Diabetes", &[("Glucose", 320.0)]),
        classified("P001", "Hypertension", &[("Blood Pressure", 150.0)]),
        classified("P001", "Diabetes", &[("Glucose", 310.0)]),
    ];
    let aggregates = aggregate(&rows);
    assert_eq!(aggregates.len(), 1);
    let patient = &aggregates[0];
    assert_eq!(patient.conditions, vec!["Diabetes", "Hypertension"]);
    assert_eq!(patient.raw_data.len(), 3);
    // Reasons keep list semantics: one per reading.
    assert_eq!(patient.alert_reasons.len(), 3);
}

#[test]
fn severity_is_monotonic_most_severe_wins() {
    let rows = vec![
        classified("P001", "Diabetes", &[("Glucose", 320.0)]),
        classified("P001", "Diabetes", &[("Glucose", 100.0)]),
    ];
    let aggregates = aggregate(&rows);
    assert_eq!(aggregates[0].severity, Severity::Red);
    assert_eq!(aggregates[0].health_status, HealthStatus::Alert);
}

#[test]
fn variables_merge_last_write_wins() {
    let rows = vec![
        classified("P001", "Diabetes", &[("Glucose", 320.0)]),
        classified("P001", "Diabetes", &[("Glucose", 190.0)]),
    ];
    let aggregates = aggregate(&rows);
    assert_eq!(
        aggregates[0].variables.get("Glucose"),
        Some(&CellValue::Number(190.0))
    );
}

#[test]
fn healthy_override_on_any_row_forces_green() {
    let mut flagged = record("P001", "Diabetes", &[("Glucose", 400.0)]);
    flagged.variables.insert(
        "Health Status".to_string(),
        CellValue::Text("healthy".to_string()),
    );
    let classification = classify(&flagged);
    let rows = vec![
        (flagged, classification),
        classified("P001", "Diabetes", &[("Glucose", 400.0)]),
    ];
    let aggregates = aggregate(&rows);
    assert_eq!(aggregates[0].severity, Severity::Green);
    assert_eq!(aggregates[0].health_status, HealthStatus::Healthy);
}

#[test]
fn sparse_batch_backfills_to_at_least_five_capped_at_twenty() {
    // 30 patients, only 2 alerting.
    let mut rows = Vec::new();
    for i in 0..30 {
        let id = format!("P{i:03}");
        let glucose = if i < 2 { 320.0 } else { 100.0 };
        rows.push(classified(&id, "Checkup", &[("Glucose", glucose)]));
    }
    let worklist = aggregate_with_backfill(&rows);
    assert!(worklist.len() >= MIN_WORKLIST_PATIENTS);
    assert!(worklist.len() <= MAX_WORKLIST_PATIENTS);

    let alerting: Vec<_> = worklist
        .iter()
        .filter(|p| p.health_status == HealthStatus::Alert)
        .collect();
    assert_eq!(alerting.len(), 2);

    let backfilled = &worklist[2];
    assert_eq!(backfilled.severity, Severity::Green);
    assert_eq!(backfilled.conditions, vec![HEALTHY_CONDITION]);
}

#[test]
fn every_alerting_patient_survives_a_large_batch() {
    // More critical patients than the padding bound; none may be dropped.
    let rows: Vec<_> = (0..25)
        .map(|i| classified(&format!("P{i:03}"), "Diabetes", &[("Glucose", 320.0)]))
        .collect();
    let worklist = aggregate_with_backfill(&rows);
    assert_eq!(worklist.len(), 25);
    assert!(
        worklist
            .iter()
            .all(|p| p.health_status == HealthStatus::Alert)
    );
}

#[test]
fn alerting_batch_is_not_backfilled() {
    let mut rows = Vec::new();
    for i in 0..6 {
        let id = format!("P{i:03}");
        rows.push(classified(&id, "Diabetes", &[("Glucose", 320.0)]));
    }
    rows.push(classified("P999", "Checkup", &[("Glucose", 100.0)]));
    let worklist = aggregate_with_backfill(&rows);
    assert_eq!(worklist.len(), 6);
    assert!(
        worklist
            .iter()
            .all(|p| p.health_status == HealthStatus::Alert)
    );
}

proptest! {
    /// Aggregate severity is never below any contributing row's severity.
    #[test]
    fn aggregate_severity_dominates_rows(glucose in prop::collection::vec(40.0f64..400.0, 1..8)) {
        let rows: Vec<_> = glucose
            .iter()
            .map(|value| classified("P001", "Diabetes", &[("Glucose", *value)]))
            .collect();
        let aggregates = aggregate(&rows);
        prop_assert_eq!(aggregates.len(), 1);
        for (_, classification) in &rows {
            prop_assert!(aggregates[0].severity >= classification.severity);
        }
    }
}
