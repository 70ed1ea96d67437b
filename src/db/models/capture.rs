//! Shapes read out of the `captures` table.

use serde::{Deserialize, Serialize};

/// Values of one metric, aligned index-for-index with a timestamp array.
/// `None` is a missing reading, never a stand-in for zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub metric: String,
    pub values: Vec<Option<f64>>,
}

impl Series {
    pub fn new(metric: impl Into<String>, values: Vec<Option<f64>>) -> Self {
        Self {
            metric: metric.into(),
            values,
        }
    }

    pub fn empty(metric: impl Into<String>) -> Self {
        Self::new(metric, Vec::new())
    }

    pub fn has_values(&self) -> bool {
        self.values.iter().any(Option::is_some)
    }
}

/// Parallel arrays: one sort-key timestamp per row plus one [`Series`] per
/// requested metric, in request order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TimeSeries {
    pub timestamps: Vec<f64>,
    pub series: Vec<Series>,
}

impl TimeSeries {
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// Keep only the rows at `indices`, in the order given.
    pub fn select(&self, indices: &[usize]) -> TimeSeries {
        TimeSeries {
            timestamps: indices.iter().map(|&i| self.timestamps[i]).collect(),
            series: self
                .series
                .iter()
                .map(|s| Series {
                    metric: s.metric.clone(),
                    values: indices.iter().map(|&i| s.values[i]).collect(),
                })
                .collect(),
        }
    }
}

/// `timestamp` and `mode` of a single capture, used for zone shading.
#[derive(Debug, Clone, PartialEq)]
pub struct ModeRow {
    pub timestamp: String,
    pub mode: Option<String>,
}
