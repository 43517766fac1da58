//! A single chart sample: value plus optional timestamp and label.

use chrono::{DateTime, Utc};

/// One data point of a line chart.
///
/// `timestamp` drives time-proportional x spacing (only when every point of the
/// dataset has one). `label` is shown in the secondary label line, or in the main
/// line when the chart runs in [`DisplayMode::NoValues`](crate::DisplayMode::NoValues).
#[derive(Debug, Clone, PartialEq)]
pub struct ChartDataPoint {
    pub value: f64,
    pub timestamp: Option<DateTime<Utc>>,
    pub label: Option<String>,
}

impl ChartDataPoint {
    /// Plain value without timestamp or label.
    pub fn new(value: f64) -> Self {
        Self {
            value,
            timestamp: None,
            label: None,
        }
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

impl From<f64> for ChartDataPoint {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}
