#![deny(unsafe_code)]

use crate::cell::SheetCell;
use crate::error::ModelError;

/// One worksheet: a header row followed by data rows.
#[derive(Debug, Clone, Default)]
pub struct Worksheet {
    pub name: String,
    pub rows: Vec<Vec<SheetCell>>,
}

impl Worksheet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<SheetCell>) {
        self.rows.push(row);
    }

    /// The header row, when the sheet has one.
    pub fn header(&self) -> Option<&[SheetCell]> {
        self.rows.first().map(Vec::as_slice)
    }

    /// All rows after the header.
    pub fn data_rows(&self) -> &[Vec<SheetCell>] {
        if self.rows.is_empty() {
            &[]
        } else {
            &self.rows[1..]
        }
    }
}

/// An uploaded workbook; the pipeline only reads the first worksheet.
#[derive(Debug, Clone, Default)]
pub struct Workbook {
    pub sheets: Vec<Worksheet>,
}

impl Workbook {
    pub fn new(sheets: Vec<Worksheet>) -> Self {
        Self { sheets }
    }

    /// Returns the first worksheet, failing fast on an empty workbook.
    pub fn first_sheet(&self) -> Result<&Worksheet, ModelError> {
        self.sheets.first().ok_or(ModelError::EmptyWorkbook)
    }
}
