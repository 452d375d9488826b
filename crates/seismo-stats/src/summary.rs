//! Distribution and activity summaries

use serde::{Deserialize, Serialize};

use seismo_core::QuakeEvent;

use crate::percentile::{median_sorted, percentile_sorted, sorted_finite};

/// Five-number-plus-mean summary of a numeric sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Distribution {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
    /// 25th percentile (linear interpolation)
    pub q1: f64,
    /// 75th percentile (linear interpolation)
    pub q3: f64,
}

impl Distribution {
    /// Summarize a sample; non-finite values are dropped first and an
    /// empty sample yields `None`
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        let sorted = sorted_finite(values);
        if sorted.is_empty() {
            return None;
        }
        let mean = sorted.iter().sum::<f64>() / sorted.len() as f64;
        Some(Self {
            min: sorted[0],
            max: sorted[sorted.len() - 1],
            mean,
            median: median_sorted(&sorted)?,
            q1: percentile_sorted(&sorted, 25.0)?,
            q3: percentile_sorted(&sorted, 75.0)?,
        })
    }
}

/// Headline numbers for the currently filtered view
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActivitySummary {
    /// Number of events in the view
    pub count: usize,

    /// Mean magnitude; `None` when the view is empty
    pub mean_magnitude: Option<f64>,

    /// Mean depth in kilometers; `None` when the view is empty
    pub mean_depth_km: Option<f64>,

    /// `count / max(1, year_span)`; `None` when the view is empty
    pub events_per_year: Option<f64>,
}

impl ActivitySummary {
    /// Summarize a filtered view over an inclusive year span
    pub fn new(events: &[&QuakeEvent], year_span: u32) -> Self {
        if events.is_empty() {
            return Self {
                count: 0,
                mean_magnitude: None,
                mean_depth_km: None,
                events_per_year: None,
            };
        }
        let count = events.len();
        Self {
            count,
            mean_magnitude: finite_mean(events.iter().map(|event| event.magnitude)),
            mean_depth_km: finite_mean(events.iter().map(|event| event.depth_km)),
            events_per_year: Some(count as f64 / year_span.max(1) as f64),
        }
    }
}

fn finite_mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let mut sum = 0.0;
    let mut n = 0usize;
    for value in values.filter(|value| value.is_finite()) {
        sum += value;
        n += 1;
    }
    (n > 0).then(|| sum / n as f64)
}
