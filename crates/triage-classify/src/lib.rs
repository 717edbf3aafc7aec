#![deny(unsafe_code)]

//! Severity classification of parsed rows against vital-sign thresholds.

pub mod classifier;
pub mod thresholds;

pub use classifier::{Classification, NORMAL_READINGS_REASON, SOURCE_FLAG_REASON, classify};
pub use thresholds::{Band, METRIC_THRESHOLDS, MetricThreshold};
