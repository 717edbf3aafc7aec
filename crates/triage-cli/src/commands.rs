use anyhow::{Context, Result};
use tracing::info;

use triage_classify::METRIC_THRESHOLDS;
use triage_core::{BatchOptions, TriageOutcome, process_batch};
use triage_ingest::read_worksheet_csv;
use triage_model::Workbook;

use crate::cli::WorklistArgs;
use crate::summary::print_thresholds;

/// Read the export, run the pipeline, return the outcome for rendering.
pub fn run_worklist(args: &WorklistArgs) -> Result<TriageOutcome> {
    let sheet = read_worksheet_csv(&args.file)
        .with_context(|| format!("failed to read export {}", args.file.display()))?;
    info!(file = %args.file.display(), rows = sheet.rows.len(), "loaded export");

    let workbook = Workbook::new(vec![sheet]);
    let options = BatchOptions {
        reference_time: args
            .reference_date
            .and_then(|date| date.and_hms_opt(0, 0, 0)),
    };
    process_batch(&workbook, &options)
}

pub fn run_thresholds() {
    print_thresholds(METRIC_THRESHOLDS);
}
