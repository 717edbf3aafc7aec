#![deny(unsafe_code)]

use anyhow::{Context, Result};
use chrono::{NaiveDateTime, Utc};
use serde::Serialize;
use sha2::{Digest, Sha256};
use tracing::info;

use triage_aggregate::aggregate_with_backfill;
use triage_classify::classify;
use triage_ingest::{normalize_cell, parse_sheet};
use triage_map::resolve_columns;
use triage_model::{
    AggregatedPatient, Alert, BatchId, PatientId, RowId, Workbook, Worksheet,
};
use triage_report::build_alert;

/// Per-batch processing options.
#[derive(Debug, Clone, Default)]
pub struct BatchOptions {
    /// Age-derivation reference for rows without a timestamp column.
    /// `None` means processing time; tests pin it for determinism.
    pub reference_time: Option<NaiveDateTime>,
}

/// The pass's output: one hand-off per collaborator boundary.
#[derive(Debug, Clone, Serialize)]
pub struct TriageOutcome {
    pub batch_id: BatchId,
    /// For the persistence collaborator, stored verbatim.
    pub patients: Vec<AggregatedPatient>,
    /// For the triage/dispatch collaborator.
    pub alerts: Vec<Alert>,
}

/// Runs the full pipeline over a workbook's first worksheet.
///
/// Fails fast only when the workbook has no worksheets; everything else
/// degrades per the ingestion rules (positional fallbacks, per-row
/// warnings, healthy backfill).
pub fn process_batch(workbook: &Workbook, options: &BatchOptions) -> Result<TriageOutcome> {
    let sheet = workbook
        .first_sheet()
        .context("cannot process uploaded workbook")?;
    let batch_id = batch_id(sheet);
    let now = options
        .reference_time
        .unwrap_or_else(|| Utc::now().naive_utc());

    let headers: Vec<String> = sheet
        .header()
        .unwrap_or_default()
        .iter()
        .map(|cell| normalize_cell(cell).as_text())
        .collect();
    let columns = resolve_columns(&headers);
    info!(batch = %batch_id, columns = headers.len(), "resolved columns");

    let records = parse_sheet(sheet, &headers, &columns, now);
    info!(batch = %batch_id, rows = records.len(), "parsed rows");

    let classified: Vec<_> = records
        .into_iter()
        .map(|record| {
            let classification = classify(&record);
            (record, classification)
        })
        .collect();

    let patients = aggregate_with_backfill(&classified);
    let alerts: Vec<Alert> = patients
        .iter()
        .map(|patient| build_alert(alert_id(&batch_id, &patient.patient_id), patient))
        .collect();
    info!(
        batch = %batch_id,
        patients = patients.len(),
        alerts = alerts.len(),
        "batch complete"
    );

    Ok(TriageOutcome {
        batch_id,
        patients,
        alerts,
    })
}

/// Content-derived batch id: identical bytes, identical id.
fn batch_id(sheet: &Worksheet) -> BatchId {
    let mut hasher = Sha256::new();
    for row in &sheet.rows {
        for cell in row {
            hasher.update(normalize_cell(cell).as_text().as_bytes());
            hasher.update([0x1f]);
        }
        hasher.update([0x1e]);
    }
    BatchId::from_first_16_bytes_of_sha256(hasher.finalize().into())
}

fn alert_id(batch: &BatchId, patient: &PatientId) -> RowId {
    let mut hasher = Sha256::new();
    hasher.update(batch.as_bytes());
    hasher.update(patient.as_str().as_bytes());
    RowId::from_first_16_bytes_of_sha256(hasher.finalize().into())
}
