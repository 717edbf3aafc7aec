//! End-to-end pipeline behavior over in-memory workbooks.

use chrono::NaiveDate;
use triage_core::{BatchOptions, process_batch};
use triage_model::{HealthStatus, Severity, SheetCell, Workbook, Worksheet};

fn options() -> BatchOptions {
    BatchOptions {
        reference_time: NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(12, 0, 0),
    }
}

fn sample_workbook() -> Workbook {
    let mut sheet = Worksheet::new("export");
    sheet.push_row(
        ["Patient ID", "Patient Name", "Age", "Condition", "Glucose"]
            .into_iter()
            .map(SheetCell::text)
            .collect(),
    );
    sheet.push_row(vec![
        SheetCell::text("P001"),
        SheetCell::text("Jane Doe (03/15/1950)"),
        SheetCell::Empty,
        SheetCell::text("Diabetes"),
        SheetCell::Number(320.0),
    ]);
    sheet.push_row(vec![
        SheetCell::text("P001"),
        SheetCell::text("Jane Doe (03/15/1950)"),
        SheetCell::Empty,
        SheetCell::text("Hypertension"),
        SheetCell::Number(100.0),
    ]);
    sheet.push_row(vec![
        SheetCell::text("P002"),
        SheetCell::text("John Smith"),
        SheetCell::Number(61.0),
        SheetCell::Empty,
        SheetCell::Number(95.0),
    ]);
    Workbook::new(vec![sheet])
}

#[test]
fn empty_workbook_fails_fast() {
    let outcome = process_batch(&Workbook::default(), &options());
    assert!(outcome.is_err());
}

#[test]
fn dob_round_trip_through_the_pipeline() {
    let outcome = process_batch(&sample_workbook(), &options()).unwrap();
    let jane = outcome
        .patients
        .iter()
        .find(|p| p.patient_id.as_str() == "P001")
        .expect("P001 aggregated");
    assert_eq!(jane.name, "Jane Doe");
    assert_eq!(jane.age, 74);
    assert_eq!(jane.severity, Severity::Red);
    assert_eq!(jane.conditions, vec!["Diabetes", "Hypertension"]);
}

#[test]
fn two_runs_produce_identical_output() {
    let workbook = sample_workbook();
    let first = process_batch(&workbook, &options()).unwrap();
    let second = process_batch(&workbook, &options()).unwrap();
    assert_eq!(first.batch_id, second.batch_id);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn healthy_rows_backfill_the_sparse_worklist() {
    let outcome = process_batch(&sample_workbook(), &options()).unwrap();
    // One alerting patient, so the healthy one is backfilled in.
    assert_eq!(outcome.patients.len(), 2);
    let john = outcome
        .patients
        .iter()
        .find(|p| p.patient_id.as_str() == "P002")
        .expect("P002 backfilled");
    assert_eq!(john.health_status, HealthStatus::Healthy);
    assert_eq!(john.conditions, vec!["Healthy"]);
    assert_eq!(outcome.alerts.len(), outcome.patients.len());
}

#[test]
fn alert_messages_match_severity_tier() {
    let outcome = process_batch(&sample_workbook(), &options()).unwrap();
    let jane = outcome
        .alerts
        .iter()
        .find(|a| a.patient_id.as_str() == "P001")
        .unwrap();
    assert!(jane.message.starts_with("\u{1f534} URGENT ACTION REQUIRED"));
    assert!(jane.message.contains("REQUIRES IMMEDIATE CLINICAL ATTENTION"));
    let john = outcome
        .alerts
        .iter()
        .find(|a| a.patient_id.as_str() == "P002")
        .unwrap();
    assert!(john.message.starts_with("\u{1f7e2} ROUTINE CHECK"));
}
