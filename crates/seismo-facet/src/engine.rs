//! Facet engine queries
//!
//! Each query applies a fixed subset of the four predicates: the filtered
//! view applies all of them, and every per-facet option query excludes
//! exactly its own facet. The predicates commute, so the orders documented
//! on each function are canonical for reproducibility rather than
//! correctness.
//!
//! | Query                     | Applied                               | Excluded  |
//! |---------------------------|---------------------------------------|-----------|
//! | `filtered_events`         | magnitude, time, region, subregion    | none      |
//! | `year_limits`             | magnitude, region, subregion          | time      |
//! | `region_options`          | magnitude, time, subregion            | region    |
//! | `subregion_options`       | magnitude, time, region               | subregion |
//! | `magnitude_class_options` | time, region, subregion               | magnitude |
//! | `magnitude_limits`        | time, region, subregion               | magnitude |

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use seismo_core::{Catalog, FilterState, MagnitudeClass, QuakeEvent};

use crate::predicate::{in_time_window, magnitude_in_band, region_matches, subregion_matches};

/// Inclusive year span still reachable for the time-facet control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearLimits {
    pub min: i32,
    pub max: i32,
}

/// Magnitude extent still reachable for the magnitude-facet control
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MagnitudeLimits {
    pub min: f64,
    pub max: f64,
}

/// Full filtered view: magnitude, time, region, subregion.
///
/// Preserves catalog order, never returns null; an empty catalog or an
/// all-excluding state just yields an empty sequence. Filtering an already
/// filtered sequence with the same state returns it unchanged.
pub fn filtered_events<'a>(
    catalog: &'a Catalog,
    state: &FilterState,
    now: DateTime<Utc>,
) -> Vec<&'a QuakeEvent> {
    catalog
        .iter()
        .filter(|event| magnitude_in_band(event, state.magnitude.as_ref()))
        .filter(|event| in_time_window(event, &state.time, now))
        .filter(|event| region_matches(event, state.effective_region()))
        .filter(|event| subregion_matches(event, state.effective_subregion()))
        .collect()
}

/// Year extent for the time control: magnitude, region, subregion; the time
/// facet itself is excluded so the control never constrains its own range.
///
/// `None` iff no event survives the other three facets.
pub fn year_limits(
    catalog: &Catalog,
    state: &FilterState,
    _now: DateTime<Utc>,
) -> Option<YearLimits> {
    let mut years = catalog
        .iter()
        .filter(|event| magnitude_in_band(event, state.magnitude.as_ref()))
        .filter(|event| region_matches(event, state.effective_region()))
        .filter(|event| subregion_matches(event, state.effective_subregion()))
        .map(|event| event.year());

    let first = years.next()?;
    let (min, max) = years.fold((first, first), |(min, max), year| {
        (min.min(year), max.max(year))
    });
    Some(YearLimits { min, max })
}

/// Region options: magnitude, time, subregion; region itself excluded.
///
/// Deduplicated, trimmed, empty values dropped, sorted case-insensitively
/// (exact bytes break ties). Every returned value yields a non-empty
/// filtered view when selected, given the other three facets as passed.
pub fn region_options(catalog: &Catalog, state: &FilterState, now: DateTime<Utc>) -> Vec<String> {
    collect_options(
        catalog
            .iter()
            .filter(|event| magnitude_in_band(event, state.magnitude.as_ref()))
            .filter(|event| in_time_window(event, &state.time, now))
            .filter(|event| subregion_matches(event, state.effective_subregion()))
            .map(|event| event.region.trim()),
    )
}

/// Subregion options: magnitude, time, region; subregion itself excluded.
pub fn subregion_options(catalog: &Catalog, state: &FilterState, now: DateTime<Utc>) -> Vec<String> {
    collect_options(
        catalog
            .iter()
            .filter(|event| magnitude_in_band(event, state.magnitude.as_ref()))
            .filter(|event| in_time_window(event, &state.time, now))
            .filter(|event| region_matches(event, state.effective_region()))
            .map(|event| event.subregion.trim()),
    )
}

/// Magnitude classes still reachable, in table order: time, region,
/// subregion; magnitude itself excluded. Legacy query kept for the class
/// legend toggles.
pub fn magnitude_class_options(
    catalog: &Catalog,
    state: &FilterState,
    now: DateTime<Utc>,
) -> Vec<MagnitudeClass> {
    let mut present = std::collections::BTreeSet::new();
    for event in other_than_magnitude(catalog, state, now) {
        if let Some(class) = event.magnitude_class() {
            present.insert(class);
        }
    }
    MagnitudeClass::ALL
        .iter()
        .copied()
        .filter(|class| present.contains(class))
        .collect()
}

/// Magnitude extent for the magnitude control: time, region, subregion;
/// magnitude itself excluded. `None` iff the intermediate view is empty.
pub fn magnitude_limits(
    catalog: &Catalog,
    state: &FilterState,
    now: DateTime<Utc>,
) -> Option<MagnitudeLimits> {
    let mut magnitudes = other_than_magnitude(catalog, state, now)
        .map(|event| event.magnitude)
        .filter(|magnitude| magnitude.is_finite());

    let first = magnitudes.next()?;
    let (min, max) = magnitudes.fold((first, first), |(min, max), magnitude| {
        (min.min(magnitude), max.max(magnitude))
    });
    Some(MagnitudeLimits { min, max })
}

fn other_than_magnitude<'a>(
    catalog: &'a Catalog,
    state: &'a FilterState,
    now: DateTime<Utc>,
) -> impl Iterator<Item = &'a QuakeEvent> {
    catalog
        .iter()
        .filter(move |event| in_time_window(event, &state.time, now))
        .filter(move |event| region_matches(event, state.effective_region()))
        .filter(move |event| subregion_matches(event, state.effective_subregion()))
}

fn collect_options<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut options: Vec<String> = values
        .filter(|value| !value.is_empty())
        .map(|value| value.to_string())
        .collect();
    options.sort_by(|a, b| {
        a.to_lowercase()
            .cmp(&b.to_lowercase())
            .then_with(|| a.cmp(b))
    });
    options.dedup();
    options
}
