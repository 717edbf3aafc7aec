#![deny(unsafe_code)]

use std::fmt;

use serde::{Deserialize, Serialize};

/// Alert severity tier.
///
/// Ordered so that most-severe-wins aggregation is a plain `max`:
/// `Green < Yellow < Red`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Green,
    Yellow,
    Red,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Red => "red",
        }
    }

    /// Display label used in the triage worklist.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Green => "healthy",
            Self::Yellow => "attention",
            Self::Red => "critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Overall patient health state derived from the aggregate severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Alert,
}

impl HealthStatus {
    pub fn from_severity(severity: Severity) -> Self {
        if severity == Severity::Green {
            Self::Healthy
        } else {
            Self::Alert
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Healthy => "healthy",
            Self::Alert => "alert",
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
