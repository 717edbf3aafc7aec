#![deny(unsafe_code)]

//! Date-of-birth extraction from free-text name cells.
//!
//! Source exports frequently embed the DOB in the name column, e.g.
//! `"Jane Doe (03/15/1950)"`. Three date layouts are recognized, each bare
//! or wrapped in parentheses: `MM/DD/YYYY`, `YYYY-MM-DD`, `MM-DD-YYYY`.

use chrono::{Datelike, NaiveDate};

/// All recognized layouts are exactly ten characters wide.
const DATE_WIDTH: usize = 10;

const DOB_FORMATS: &[&str] = &["%m/%d/%Y", "%Y-%m-%d", "%m-%d-%Y"];

/// Finds an embedded date of birth in a name cell.
///
/// Returns the parsed DOB together with the display name: the matched
/// substring (parentheses included, when present) removed and whitespace
/// collapsed. Scans left to right and takes the first match.
pub fn extract_dob(name: &str) -> Option<(NaiveDate, String)> {
    let bytes = name.as_bytes();
    for start in 0..bytes.len().saturating_sub(DATE_WIDTH - 1) {
        let Some(window) = name.get(start..start + DATE_WIDTH) else {
            continue;
        };
        if !window
            .bytes()
            .all(|b| b.is_ascii_digit() || b == b'/' || b == b'-')
        {
            continue;
        }
        let Some(dob) = parse_date(window) else {
            continue;
        };

        // Widen the span over surrounding parentheses so "(03/15/1950)"
        // strips cleanly.
        let mut span_start = start;
        let mut span_end = start + DATE_WIDTH;
        if span_start > 0
            && bytes[span_start - 1] == b'('
            && span_end < bytes.len()
            && bytes[span_end] == b')'
        {
            span_start -= 1;
            span_end += 1;
        }

        let mut cleaned = String::with_capacity(name.len());
        cleaned.push_str(&name[..span_start]);
        cleaned.push(' ');
        cleaned.push_str(&name[span_end..]);
        let cleaned = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");

        return Some((dob, cleaned));
    }
    None
}

fn parse_date(window: &str) -> Option<NaiveDate> {
    DOB_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(window, format).ok())
}

/// Age in whole calendar years at the reference date, clamped non-negative.
///
/// Calendar years, not `floor(days / 365.25)`: the quotient comes up one
/// short on a birthday whenever the span carries fewer leap days than one
/// per four years. A first birthday with no leap day in between spans 365
/// days and floors to 0.
pub fn age_in_years(dob: NaiveDate, reference: NaiveDate) -> u32 {
    let mut age = reference.year() - dob.year();
    if (reference.month(), reference.day()) < (dob.month(), dob.day()) {
        age -= 1;
    }
    age.max(0) as u32
}
