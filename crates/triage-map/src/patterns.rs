#![deny(unsafe_code)]

//! The header-matching table.
//!
//! Keywords are matched as case-insensitive substrings of the normalized
//! header. New header synonyms are additive: extend the keyword slice, do
//! not add inline conditionals in the resolver.

/// Semantic fields the resolver maps onto column positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    PatientId,
    Name,
    Age,
    Condition,
    AlertFlag,
    Value,
    Timestamp,
}

/// One matching rule: keywords tried in order against every header.
#[derive(Debug, Clone, Copy)]
pub struct FieldPattern {
    pub field: Field,
    pub keywords: &'static [&'static str],
}

/// Required fields first; their positional fallbacks chain in this order.
pub const FIELD_PATTERNS: &[FieldPattern] = &[
    FieldPattern {
        field: Field::PatientId,
        keywords: &["patient id", "patientid", "patient_id", "mrn", "subject"],
    },
    FieldPattern {
        field: Field::Name,
        keywords: &["name"],
    },
    FieldPattern {
        field: Field::Age,
        keywords: &["age"],
    },
    FieldPattern {
        field: Field::Condition,
        keywords: &["condition", "diagnosis", "ailment", "variable"],
    },
    FieldPattern {
        field: Field::AlertFlag,
        keywords: &["is alert", "isalert", "alert", "flag"],
    },
    FieldPattern {
        field: Field::Value,
        keywords: &["value", "reading", "measurement", "result"],
    },
];

/// Timestamp headers need a conjunction ("date" and "time") that the plain
/// keyword table cannot express.
pub fn is_timestamp_header(normalized: &str) -> bool {
    normalized.contains("timestamp")
        || normalized.contains("recorded")
        || (normalized.contains("date") && normalized.contains("time"))
}
