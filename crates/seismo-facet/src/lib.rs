//! seismo-facet - Cascading facet filter engine
//!
//! The map's four facets (magnitude, time, region, subregion) restrict each
//! other: the options offered by any one control must reflect the current
//! state of the *other three*, never its own, so the UI cannot present a
//! dead-end selection.
//!
//! This crate provides:
//!
//! - **predicate**: the four total, pure facet predicates
//! - **engine**: the filtered-view and per-facet option queries, each
//!   excluding exactly its own facet's predicate
//!
//! All operations are total: malformed or absent filter parameters degrade
//! to "no restriction", and empty results come back as `None` or an empty
//! sequence, never an error. The current instant is injected by the caller
//! so relative time windows stay deterministic under test.

pub mod engine;
pub mod predicate;

pub use engine::{
    filtered_events, magnitude_class_options, magnitude_limits, region_options,
    subregion_options, year_limits, MagnitudeLimits, YearLimits,
};
pub use predicate::{in_time_window, magnitude_in_band, region_matches, subregion_matches};
