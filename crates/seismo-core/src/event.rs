//! Seismic event records and magnitude classification
//!
//! This module defines:
//! - QuakeEvent: one event as supplied by the catalog loader
//! - MagnitudeClass: fixed half-open magnitude intervals used for styling
//!   and class histograms

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

/// A single seismic event
///
/// Records are immutable once loaded. Field types are already normalized by
/// the loader: numeric fields are numbers and `time` is an absolute instant,
/// so the engines never re-parse anything.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuakeEvent {
    /// Stable unique identifier within a catalog snapshot
    pub id: String,

    /// Origin time (UTC)
    pub time: DateTime<Utc>,

    /// Moment magnitude, finite and >= 0
    pub magnitude: f64,

    /// Hypocenter depth in kilometers, >= 0
    pub depth_km: f64,

    /// Epicenter latitude (WGS-84)
    pub latitude: f64,

    /// Epicenter longitude (WGS-84)
    pub longitude: f64,

    /// Country-level bucket; may be empty after trimming
    pub region: String,

    /// Admin-area bucket within the region; may be empty after trimming
    pub subregion: String,

    /// Whether the event was reported felt
    pub felt: bool,
}

impl QuakeEvent {
    /// Calendar year of the origin time
    pub fn year(&self) -> i32 {
        self.time.year()
    }

    /// Severity class for this event, if its magnitude reaches the scale
    pub fn magnitude_class(&self) -> Option<MagnitudeClass> {
        MagnitudeClass::classify(self.magnitude)
    }
}

/// Severity class derived from magnitude
///
/// The classes form a fixed ordered table of half-open intervals starting at
/// magnitude 2.5; exactly one class matches any finite magnitude >= 2.5 and
/// none matches below that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MagnitudeClass {
    /// [2.5, 4.0)
    Minor,
    /// [4.0, 5.0)
    Light,
    /// [5.0, 6.0)
    Moderate,
    /// [6.0, 7.0)
    Strong,
    /// [7.0, +inf)
    Major,
}

impl MagnitudeClass {
    /// All classes in table order
    pub const ALL: [MagnitudeClass; 5] = [
        MagnitudeClass::Minor,
        MagnitudeClass::Light,
        MagnitudeClass::Moderate,
        MagnitudeClass::Strong,
        MagnitudeClass::Major,
    ];

    /// Classify a magnitude
    ///
    /// Returns `None` for non-finite magnitudes and magnitudes below 2.5.
    pub fn classify(magnitude: f64) -> Option<Self> {
        if !magnitude.is_finite() || magnitude < 2.5 {
            return None;
        }
        Some(if magnitude < 4.0 {
            MagnitudeClass::Minor
        } else if magnitude < 5.0 {
            MagnitudeClass::Light
        } else if magnitude < 6.0 {
            MagnitudeClass::Moderate
        } else if magnitude < 7.0 {
            MagnitudeClass::Strong
        } else {
            MagnitudeClass::Major
        })
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            MagnitudeClass::Minor => "Minor",
            MagnitudeClass::Light => "Light",
            MagnitudeClass::Moderate => "Moderate",
            MagnitudeClass::Strong => "Strong",
            MagnitudeClass::Major => "Major",
        }
    }

    /// Interval covered by this class: inclusive lower bound and exclusive
    /// upper bound (`None` for the open-ended Major class)
    pub fn bounds(&self) -> (f64, Option<f64>) {
        match self {
            MagnitudeClass::Minor => (2.5, Some(4.0)),
            MagnitudeClass::Light => (4.0, Some(5.0)),
            MagnitudeClass::Moderate => (5.0, Some(6.0)),
            MagnitudeClass::Strong => (6.0, Some(7.0)),
            MagnitudeClass::Major => (7.0, None),
        }
    }
}
