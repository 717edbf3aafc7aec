#![deny(unsafe_code)]

//! Row parsing for measurement exports.
//!
//! Takes raw worksheet rows plus a resolved column map and produces one
//! [`triage_model::PatientRecord`] per row: rich cell shapes are
//! normalized, identity fields extracted, and age derived from an embedded
//! date of birth or an explicit age column.

pub mod csv_sheet;
pub mod dob;
pub mod normalize;
pub mod parser;

pub use csv_sheet::{read_worksheet_csv, worksheet_from_reader};
pub use dob::{age_in_years, extract_dob};
pub use normalize::normalize_cell;
pub use parser::{parse_reference_timestamp, parse_row, parse_sheet};
