#![deny(unsafe_code)]

//! The clinical threshold table.
//!
//! Fixed rules, not learned models. Variable names are matched by
//! case-insensitive substring against each metric's keyword list, so new
//! header synonyms are additive. Red takes precedence over yellow for the
//! same variable.

/// One severity band: trips when the value is above `above` or below
/// `below`.
#[derive(Debug, Clone, Copy)]
pub struct Band {
    pub above: Option<f64>,
    pub below: Option<f64>,
}

impl Band {
    pub fn trips(&self, value: f64) -> bool {
        self.above.is_some_and(|limit| value > limit)
            || self.below.is_some_and(|limit| value < limit)
    }
}

/// Threshold rules for one vital-sign metric.
#[derive(Debug, Clone, Copy)]
pub struct MetricThreshold {
    /// Display label used in reason strings.
    pub label: &'static str,
    /// Substrings that identify the metric in a variable name.
    pub keywords: &'static [&'static str],
    pub red: Band,
    pub yellow: Band,
}

impl MetricThreshold {
    pub fn matches(&self, variable_name: &str) -> bool {
        let normalized = variable_name.to_lowercase();
        self.keywords.iter().any(|kw| normalized.contains(kw))
    }
}

pub const METRIC_THRESHOLDS: &[MetricThreshold] = &[
    MetricThreshold {
        label: "glucose",
        keywords: &["glucose"],
        red: Band {
            above: Some(300.0),
            below: None,
        },
        yellow: Band {
            above: Some(180.0),
            below: Some(70.0),
        },
    },
    MetricThreshold {
        label: "blood pressure",
        keywords: &["blood pressure", "systolic"],
        red: Band {
            above: Some(180.0),
            below: None,
        },
        yellow: Band {
            above: Some(140.0),
            below: Some(90.0),
        },
    },
    MetricThreshold {
        label: "heart rate",
        keywords: &["heart rate", "pulse"],
        red: Band {
            above: Some(150.0),
            below: Some(40.0),
        },
        yellow: Band {
            above: Some(100.0),
            below: Some(50.0),
        },
    },
    MetricThreshold {
        label: "temperature",
        keywords: &["temperature", "temp"],
        red: Band {
            above: Some(103.0),
            below: None,
        },
        yellow: Band {
            above: Some(99.5),
            below: Some(97.0),
        },
    },
    MetricThreshold {
        label: "oxygen saturation",
        keywords: &["oxygen", "spo2", "o2 sat"],
        red: Band {
            above: None,
            below: Some(85.0),
        },
        yellow: Band {
            above: None,
            below: Some(92.0),
        },
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_trips_on_either_side() {
        let band = Band {
            above: Some(100.0),
            below: Some(50.0),
        };
        assert!(band.trips(101.0));
        assert!(band.trips(49.0));
        assert!(!band.trips(100.0));
        assert!(!band.trips(50.0));
        assert!(!band.trips(75.0));
    }

    #[test]
    fn keywords_match_case_insensitively() {
        let glucose = &METRIC_THRESHOLDS[0];
        assert!(glucose.matches("Blood Glucose (mg/dL)"));
        assert!(glucose.matches("GLUCOSE"));
        assert!(!glucose.matches("Heart Rate"));
    }
}
