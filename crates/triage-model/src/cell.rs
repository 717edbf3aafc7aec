#![deny(unsafe_code)]

//! Cell content as it arrives from a workbook export and its normalized form.
//!
//! Spreadsheet exports carry rich cell shapes: styled text runs, formulas
//! with cached results, hyperlinks, native dates. The pipeline only ever
//! consumes the normalized [`CellValue`]; [`SheetCell`] exists so the
//! upload boundary can hand over cells without flattening them itself.

use chrono::NaiveDateTime;

/// A raw workbook cell as delivered by the upload collaborator.
#[derive(Debug, Clone, PartialEq)]
pub enum SheetCell {
    Text(String),
    Number(f64),
    Bool(bool),
    Date(NaiveDateTime),
    /// Styled text runs; display text is the concatenation of the runs.
    RichText(Vec<String>),
    /// A formula cell carrying its cached evaluation result, when present.
    Formula { result: Option<Box<SheetCell>> },
    /// A hyperlink cell; only the display text is meaningful downstream.
    Hyperlink { text: String, target: String },
    Empty,
}

impl SheetCell {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(value) => value.trim().is_empty(),
            _ => false,
        }
    }
}

/// A normalized cell value, the only shape the pipeline stages see.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Text(String),
    Number(f64),
    Date(NaiveDateTime),
    Missing,
}

impl CellValue {
    /// Renders the value as display text; dates become ISO-8601.
    pub fn as_text(&self) -> String {
        match self {
            Self::Text(value) => value.clone(),
            Self::Number(value) => format_numeric(*value),
            Self::Date(value) => value.format("%Y-%m-%dT%H:%M:%S").to_string(),
            Self::Missing => String::new(),
        }
    }

    /// Numeric view of the value, parsing numeric strings.
    ///
    /// Dates and non-numeric text yield `None`; threshold evaluation skips
    /// those without raising.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Text(value) => {
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    trimmed.parse::<f64>().ok()
                }
            }
            Self::Date(_) | Self::Missing => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// Interprets the value as a boolean flag.
    ///
    /// Truthy tokens follow the source systems' conventions: `true`, `1`,
    /// `yes`, `y` (any case).
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Number(value) => *value == 1.0,
            Self::Text(value) => {
                matches!(
                    value.trim().to_ascii_lowercase().as_str(),
                    "true" | "1" | "yes" | "y"
                )
            }
            Self::Date(_) | Self::Missing => false,
        }
    }
}

/// Formats a float without a trailing `.0` when it is integral.
pub fn format_numeric(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
