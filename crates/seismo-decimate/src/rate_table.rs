//! Zoom-to-rate bracket table
//!
//! Maps the map's zoom level to a sampling rate. Brackets are resolved by
//! "highest threshold not exceeding the current zoom": below the lowest
//! threshold the lowest configured rate applies, and at or above the
//! highest threshold everything is drawn.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors rejected when a rate table is configured
#[derive(Debug, Error)]
pub enum RateTableError {
    /// A table needs at least one bracket
    #[error("rate table has no brackets")]
    Empty,

    /// Zoom thresholds must be finite
    #[error("non-finite zoom threshold at bracket {index}")]
    InvalidZoom { index: usize },

    /// Zoom thresholds must strictly ascend
    #[error("zoom thresholds not ascending at bracket {index} (zoom {zoom})")]
    NonAscendingZoom { index: usize, zoom: f64 },

    /// Rates must lie in (0, 1] and never decrease with zoom
    #[error("invalid rate {rate} at bracket {index}")]
    InvalidRate { index: usize, rate: f64 },
}

/// One `(zoom, rate)` bracket
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateBracket {
    /// Zoom threshold at which this rate starts to apply
    pub zoom: f64,
    /// Fraction of events to keep, in (0, 1]
    pub rate: f64,
}

/// Validated ascending table of sampling brackets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<RateBracket>", into = "Vec<RateBracket>")]
pub struct RateTable {
    brackets: Vec<RateBracket>,
}

impl RateTable {
    /// Build a table, rejecting misconfiguration up front rather than at
    /// query time
    pub fn new(brackets: Vec<RateBracket>) -> Result<Self, RateTableError> {
        if brackets.is_empty() {
            return Err(RateTableError::Empty);
        }
        for (index, bracket) in brackets.iter().enumerate() {
            if !bracket.zoom.is_finite() {
                return Err(RateTableError::InvalidZoom { index });
            }
            if !bracket.rate.is_finite() || bracket.rate <= 0.0 || bracket.rate > 1.0 {
                return Err(RateTableError::InvalidRate {
                    index,
                    rate: bracket.rate,
                });
            }
            if index > 0 {
                let prev = brackets[index - 1];
                if !(bracket.zoom > prev.zoom) {
                    return Err(RateTableError::NonAscendingZoom {
                        index,
                        zoom: bracket.zoom,
                    });
                }
                if bracket.rate < prev.rate {
                    return Err(RateTableError::InvalidRate {
                        index,
                        rate: bracket.rate,
                    });
                }
            }
        }
        Ok(Self { brackets })
    }

    /// Rate for a zoom level: the bracket with the highest threshold not
    /// exceeding `zoom` wins; below all thresholds the lowest rate applies;
    /// at or above the highest threshold everything is kept.
    pub fn rate_for_zoom(&self, zoom: f64) -> f64 {
        let last = self.brackets[self.brackets.len() - 1];
        if zoom >= last.zoom {
            return 1.0;
        }
        self.brackets
            .iter()
            .rev()
            .find(|bracket| bracket.zoom <= zoom)
            .map(|bracket| bracket.rate)
            .unwrap_or(self.brackets[0].rate)
    }

    /// Configured brackets in ascending zoom order
    pub fn brackets(&self) -> &[RateBracket] {
        &self.brackets
    }

    /// Highest configured threshold; zooms at or past it draw everything
    pub fn full_detail_zoom(&self) -> f64 {
        self.brackets[self.brackets.len() - 1].zoom
    }
}

impl Default for RateTable {
    /// The map's default brackets: 5%, 10%, 20%, 50%, 80% through zoom 9,
    /// full detail from zoom 10
    fn default() -> Self {
        Self::new(vec![
            RateBracket { zoom: 5.0, rate: 0.05 },
            RateBracket { zoom: 6.0, rate: 0.10 },
            RateBracket { zoom: 7.0, rate: 0.20 },
            RateBracket { zoom: 8.0, rate: 0.50 },
            RateBracket { zoom: 9.0, rate: 0.80 },
            RateBracket { zoom: 10.0, rate: 1.0 },
        ])
        .expect("default rate table is valid")
    }
}

impl TryFrom<Vec<RateBracket>> for RateTable {
    type Error = RateTableError;

    fn try_from(brackets: Vec<RateBracket>) -> Result<Self, Self::Error> {
        Self::new(brackets)
    }
}

impl From<RateTable> for Vec<RateBracket> {
    fn from(table: RateTable) -> Self {
        table.brackets
    }
}
