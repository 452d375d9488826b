//! Facet filter state
//!
//! This module defines the filter selections the UI layer owns and passes
//! into every facet-engine call:
//!
//! - MagnitudeBand: the magnitude slider range
//! - TimeSelector: relative lookback window or absolute year range
//! - region / subregion selectors
//!
//! The engines treat an absent selector (or the literal `"all"` token the
//! controls emit) as identity, so a default `FilterState` matches every
//! event.

use serde::{Deserialize, Serialize};

/// Upper bound of the magnitude slider.
///
/// The control's visual maximum doubles as the domain's practical cap: a
/// band whose `max` sits at this value means "and everything above it".
pub const MAG_SLIDER_MAX: f64 = 7.0;

/// Floating tolerance when comparing a band's `max` against the slider cap
pub const MAG_SLIDER_TOLERANCE: f64 = 1e-6;

/// Inclusive magnitude range selected on the slider
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MagnitudeBand {
    pub min: f64,
    pub max: f64,
}

impl MagnitudeBand {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Whether `max` sits at the slider cap and the band extends to +inf
    pub fn is_open_ended(&self) -> bool {
        (self.max - MAG_SLIDER_MAX).abs() <= MAG_SLIDER_TOLERANCE
    }

    /// A band is usable only when both bounds are finite and ordered;
    /// anything else degrades to "no restriction"
    pub fn is_well_formed(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min <= self.max
    }
}

/// Symbolic lookback windows offered by the time control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LookbackWindow {
    /// Last 24 hours
    Day,
    /// Last 7 days
    Week,
    /// Last 30 days
    #[default]
    Month,
    /// Last 365 days
    Year,
}

impl LookbackWindow {
    /// Window length in days
    pub fn days(&self) -> i64 {
        match self {
            LookbackWindow::Day => 1,
            LookbackWindow::Week => 7,
            LookbackWindow::Month => 30,
            LookbackWindow::Year => 365,
        }
    }

    /// Map a control token to a window; unrecognized tokens fall back to
    /// the 30-day default
    pub fn from_token(token: &str) -> Self {
        match token.trim() {
            "1day" | "day" | "24h" => LookbackWindow::Day,
            "7days" | "week" => LookbackWindow::Week,
            "30days" | "month" => LookbackWindow::Month,
            "1year" | "year" => LookbackWindow::Year,
            _ => LookbackWindow::default(),
        }
    }
}

/// Time facet selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeSelector {
    /// No time restriction
    #[default]
    All,
    /// Events within a relative window ending at the injected "now"
    Lookback(LookbackWindow),
    /// Events whose origin year lies in an inclusive range; open ends mean
    /// unbounded on that side
    YearRange {
        start: Option<i32>,
        end: Option<i32>,
    },
}

/// Full facet state, owned by the controlling UI layer
///
/// The engines never store this; it is passed by reference into every call
/// so rapid UI interaction just produces independent fresh results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    /// Magnitude slider range; `None` means unrestricted
    pub magnitude: Option<MagnitudeBand>,

    /// Time window or year range
    pub time: TimeSelector,

    /// Selected region, or `None`/`"all"` for every region
    pub region: Option<String>,

    /// Selected subregion, or `None`/`"all"` for every subregion
    pub subregion: Option<String>,
}

impl FilterState {
    /// Region selector with the `"all"` token collapsed to no restriction
    pub fn effective_region(&self) -> Option<&str> {
        effective_selector(&self.region)
    }

    /// Subregion selector with the `"all"` token collapsed to no restriction
    pub fn effective_subregion(&self) -> Option<&str> {
        effective_selector(&self.subregion)
    }
}

fn effective_selector(selector: &Option<String>) -> Option<&str> {
    selector.as_deref().filter(|value| *value != "all")
}
