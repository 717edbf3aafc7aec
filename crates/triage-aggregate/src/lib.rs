#![deny(unsafe_code)]

//! Per-patient aggregation of classified rows.
//!
//! Folds all rows sharing a patient id into one [`AggregatedPatient`]
//! (first-seen order preserved), then backfills small or healthy-only
//! batches with explicitly healthy patients so the triage worklist is
//! never empty or too sparse.

use std::collections::BTreeMap;

use tracing::info;
use triage_classify::{Classification, NORMAL_READINGS_REASON};
use triage_model::{AggregatedPatient, HealthStatus, PatientId, PatientRecord, Severity};

/// Below this many alerting patients the worklist is padded with healthy
/// entries.
pub const MIN_WORKLIST_PATIENTS: usize = 5;

/// Upper bound the healthy padding fills up to. Alerting patients are
/// never dropped, so a batch with more alerts than this stays whole.
pub const MAX_WORKLIST_PATIENTS: usize = 20;

/// Condition label given to backfilled healthy entries.
pub const HEALTHY_CONDITION: &str = "Healthy";

/// Folds a sequence of classified rows into one aggregate per patient id.
///
/// Conditions are deduplicated in insertion order; issues and alert
/// reasons concatenate (each row is a distinct reading); variables merge
/// last-write-wins; severity is monotonic most-severe-wins. A healthy
/// override on any contributing row forces the aggregate green.
pub fn aggregate(rows: &[(PatientRecord, Classification)]) -> Vec<AggregatedPatient> {
    let mut order: Vec<PatientId> = Vec::new();
    let mut by_id: BTreeMap<PatientId, AggregatedPatient> = BTreeMap::new();
    let mut overridden: BTreeMap<PatientId, bool> = BTreeMap::new();

    for (record, classification) in rows {
        let entry = by_id
            .entry(record.patient_id.clone())
            .or_insert_with(|| {
                order.push(record.patient_id.clone());
                new_aggregate(record)
            });
        merge_row(entry, record, classification);
        let flag = overridden.entry(record.patient_id.clone()).or_insert(false);
        *flag |= classification.healthy_override;
    }

    // Deterministic output: aggregates stay in first-seen row order.
    let aggregates: Vec<AggregatedPatient> = order
        .into_iter()
        .filter_map(|id| {
            let mut aggregate = by_id.remove(&id)?;
            if overridden.get(&id).copied().unwrap_or(false) {
                force_healthy(&mut aggregate);
            }
            aggregate.health_status = HealthStatus::from_severity(aggregate.severity);
            aggregate.is_alert = aggregate.health_status == HealthStatus::Alert;
            Some(aggregate)
        })
        .collect();

    info!(patients = aggregates.len(), "aggregated batch");
    aggregates
}

/// Aggregation plus the sparse-batch backfill policy.
///
/// Every alerting aggregate is kept, in first-seen order. When fewer than
/// [`MIN_WORKLIST_PATIENTS`] of them exist, non-alerting patients are
/// appended as explicitly healthy entries; only that padding is bounded,
/// stopping at [`MAX_WORKLIST_PATIENTS`] total.
pub fn aggregate_with_backfill(
    rows: &[(PatientRecord, Classification)],
) -> Vec<AggregatedPatient> {
    let all = aggregate(rows);
    let (alerting, healthy): (Vec<_>, Vec<_>) = all
        .into_iter()
        .partition(|p| p.health_status == HealthStatus::Alert);

    let mut worklist = alerting;
    if worklist.len() < MIN_WORKLIST_PATIENTS {
        let room = MAX_WORKLIST_PATIENTS.saturating_sub(worklist.len());
        let backfilled = healthy
            .into_iter()
            .take(room)
            .map(into_backfilled_healthy);
        worklist.extend(backfilled);
        info!(total = worklist.len(), "backfilled sparse worklist");
    }
    worklist
}

fn new_aggregate(record: &PatientRecord) -> AggregatedPatient {
    AggregatedPatient {
        patient_id: record.patient_id.clone(),
        name: record.name.clone(),
        age: record.age,
        conditions: Vec::new(),
        issues: Vec::new(),
        alert_reasons: Vec::new(),
        variables: BTreeMap::new(),
        severity: Severity::Green,
        health_status: HealthStatus::Healthy,
        is_alert: false,
        raw_data: Vec::new(),
    }
}

fn merge_row(
    aggregate: &mut AggregatedPatient,
    record: &PatientRecord,
    classification: &Classification,
) {
    if aggregate.name.is_empty() && !record.name.is_empty() {
        aggregate.name = record.name.clone();
    }
    if aggregate.age == 0 {
        aggregate.age = record.age;
    }
    if !aggregate.conditions.contains(&record.condition) {
        aggregate.conditions.push(record.condition.clone());
    }
    aggregate.issues.extend(record.issues.iter().cloned());
    aggregate
        .alert_reasons
        .extend(classification.reasons.iter().cloned());
    for (name, value) in &record.variables {
        aggregate.variables.insert(name.clone(), value.clone());
    }
    // Monotonic: a red row can never be downgraded by a later green one.
    aggregate.severity = aggregate.severity.max(classification.severity);
    aggregate.raw_data.push(record.clone());
}

fn force_healthy(aggregate: &mut AggregatedPatient) {
    aggregate.severity = Severity::Green;
    aggregate.alert_reasons = vec![NORMAL_READINGS_REASON.to_string()];
}

fn into_backfilled_healthy(mut aggregate: AggregatedPatient) -> AggregatedPatient {
    aggregate.severity = Severity::Green;
    aggregate.health_status = HealthStatus::Healthy;
    aggregate.is_alert = false;
    aggregate.conditions = vec![HEALTHY_CONDITION.to_string()];
    aggregate.alert_reasons = vec![NORMAL_READINGS_REASON.to_string()];
    aggregate
}
