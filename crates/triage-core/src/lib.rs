#![deny(unsafe_code)]

//! Batch pipeline orchestration.
//!
//! One uploaded workbook is processed top to bottom as one unit of work:
//! resolve columns, parse rows, classify, aggregate, format. Each stage is
//! a pure function of the previous stage's output; the whole pass is a
//! restartable function of one input batch.

pub mod pipeline;

pub use pipeline::{BatchOptions, TriageOutcome, process_batch};
