#![deny(unsafe_code)]

//! Severity-tiered message formatting for the triage worklist.

pub mod message;

pub use message::{
    GREEN_PREFIX, RED_PREFIX, RED_SUFFIX, YELLOW_PREFIX, build_alert, format_message,
};
