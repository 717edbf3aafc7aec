//! Worklist rendering with `comfy-table`.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use triage_classify::MetricThreshold;
use triage_core::TriageOutcome;
use triage_model::Severity;

pub fn print_worklist(outcome: &TriageOutcome) {
    println!("Batch: {}", outcome.batch_id);
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Patient"),
        header_cell("Name"),
        header_cell("Age"),
        header_cell("Condition"),
        header_cell("Severity"),
        header_cell("Reasons"),
    ]);
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    if let Some(column) = table.column_mut(2) {
        column.set_cell_alignment(CellAlignment::Right);
    }

    for alert in &outcome.alerts {
        table.add_row(vec![
            Cell::new(alert.patient_id.as_str()),
            Cell::new(&alert.patient_name),
            Cell::new(alert.age),
            Cell::new(&alert.condition),
            severity_cell(alert.severity),
            Cell::new(alert.alert_reasons.join("; ")),
        ]);
    }
    println!("{table}");

    for alert in &outcome.alerts {
        println!();
        println!("{}", alert.message);
    }
}

pub fn print_thresholds(thresholds: &[MetricThreshold]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Metric"),
        header_cell("Red"),
        header_cell("Yellow"),
    ]);
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS);
    for metric in thresholds {
        table.add_row(vec![
            Cell::new(metric.label),
            Cell::new(band_label(metric.red.above, metric.red.below)).fg(Color::Red),
            Cell::new(band_label(metric.yellow.above, metric.yellow.below)).fg(Color::Yellow),
        ]);
    }
    println!("{table}");
}

fn band_label(above: Option<f64>, below: Option<f64>) -> String {
    match (above, below) {
        (Some(a), Some(b)) => format!(">{a} or <{b}"),
        (Some(a), None) => format!(">{a}"),
        (None, Some(b)) => format!("<{b}"),
        (None, None) => "-".to_string(),
    }
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn severity_cell(severity: Severity) -> Cell {
    let cell = Cell::new(severity.label());
    match severity {
        Severity::Red => cell.fg(Color::Red),
        Severity::Yellow => cell.fg(Color::Yellow),
        Severity::Green => cell.fg(Color::Green),
    }
}
