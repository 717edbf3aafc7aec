#![deny(unsafe_code)]

use triage_model::{CellValue, SheetCell};

/// Normalizes a raw workbook cell to the value shape the pipeline consumes.
///
/// Rich text unwraps to its concatenated runs, formulas to their cached
/// result, hyperlinks to their display text; dates stay typed and render
/// as ISO-8601 downstream. Anything blank becomes `Missing`.
pub fn normalize_cell(cell: &SheetCell) -> CellValue {
    match cell {
        SheetCell::Text(value) => text_value(value),
        SheetCell::Number(value) => CellValue::Number(*value),
        SheetCell::Bool(value) => CellValue::Text(value.to_string()),
        SheetCell::Date(value) => CellValue::Date(*value),
        SheetCell::RichText(runs) => text_value(&runs.concat()),
        SheetCell::Formula { result } => match result {
            Some(inner) => normalize_cell(inner),
            None => CellValue::Missing,
        },
        SheetCell::Hyperlink { text, .. } => text_value(text),
        SheetCell::Empty => CellValue::Missing,
    }
}

fn text_value(raw: &str) -> CellValue {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    if trimmed.is_empty() {
        CellValue::Missing
    } else {
        CellValue::Text(trimmed.to_string())
    }
}
