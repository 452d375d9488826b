//! Deterministic event sampling
//!
//! Thinning is done by even-stride index selection, never by randomness:
//! the same filtered view, zoom, and configuration always yield the same
//! render set. With significance prioritization on, every event at or above
//! the magnitude cutoff survives and only the remainder is thinned, so the
//! likelihood of retention never decreases with magnitude. Ties and output
//! ordering resolve by original catalog position.

use serde::{Deserialize, Serialize};

use seismo_core::QuakeEvent;

use crate::rate_table::RateTable;

/// Decimation policy handed in by the embedding application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecimationConfig {
    /// Zoom-to-rate brackets
    pub table: RateTable,

    /// Keep all events at or above `significance_cutoff` when thinning
    pub prioritize_significant: bool,

    /// Magnitude from which events are always retained
    pub significance_cutoff: f64,

    /// Above this many rendered points the renderer should switch from
    /// individually styled markers to batched drawing
    pub max_individual_markers: usize,
}

impl Default for DecimationConfig {
    fn default() -> Self {
        Self {
            table: RateTable::default(),
            prioritize_significant: true,
            significance_cutoff: 5.0,
            max_individual_markers: 500,
        }
    }
}

impl DecimationConfig {
    /// Rendering-mode signal for a decimated point count
    pub fn render_strategy(&self, count: usize) -> RenderStrategy {
        if count > self.max_individual_markers {
            RenderStrategy::Batched
        } else {
            RenderStrategy::Individual
        }
    }
}

/// How the external renderer should draw the decimated set
///
/// This is a drawing-mode selection, not a filtering decision: the point
/// sequence is identical either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RenderStrategy {
    /// One discrete, individually styled marker per event
    Individual,
    /// Bulk/batched rendering of the whole set
    Batched,
}

impl RenderStrategy {
    pub fn is_batched(&self) -> bool {
        matches!(self, RenderStrategy::Batched)
    }
}

/// Thin a filtered view for the current zoom level
///
/// At or above the table's highest threshold the input comes back
/// unchanged. Otherwise the bracket rate applies: with prioritization,
/// significant events are all retained and the sub-cutoff stratum is
/// stride-sampled; without it, the whole input is stride-sampled. Input
/// order is preserved.
pub fn decimate<'a>(
    events: &[&'a QuakeEvent],
    zoom: f64,
    config: &DecimationConfig,
) -> Vec<&'a QuakeEvent> {
    let rate = config.table.rate_for_zoom(zoom);
    if rate >= 1.0 {
        return events.to_vec();
    }

    if !config.prioritize_significant {
        let keep = stride_mask(events.len(), target_count(events.len(), rate));
        return events
            .iter()
            .enumerate()
            .filter(|(index, _)| keep[*index])
            .map(|(_, event)| *event)
            .collect();
    }

    // Stratified: significant events always survive; only the sub-cutoff
    // stratum is thinned at the bracket rate.
    let minor_total = events
        .iter()
        .filter(|event| event.magnitude < config.significance_cutoff)
        .count();
    let keep_minor = stride_mask(minor_total, target_count(minor_total, rate));

    let mut minor_seen = 0;
    events
        .iter()
        .filter(|event| {
            if event.magnitude >= config.significance_cutoff {
                true
            } else {
                let keep = keep_minor[minor_seen];
                minor_seen += 1;
                keep
            }
        })
        .copied()
        .collect()
}

/// Number of events a rate keeps; a non-empty input never thins to nothing
fn target_count(len: usize, rate: f64) -> usize {
    if len == 0 {
        return 0;
    }
    ((len as f64 * rate).round() as usize).clamp(1, len)
}

/// Even-stride selection mask keeping exactly `target` of `len` positions
fn stride_mask(len: usize, target: usize) -> Vec<bool> {
    let mut mask = vec![false; len];
    if len == 0 || target == 0 {
        return mask;
    }
    for index in 0..len {
        // Accumulator crossing: marks exactly `target` evenly spread slots
        if (index + 1) * target / len > index * target / len {
            mask[index] = true;
        }
    }
    mask
}
