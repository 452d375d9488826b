//! Detailed catalog report
//!
//! The full breakdown shown in the statistics panel: headline summary,
//! magnitude/depth distributions, and histograms by magnitude class, year,
//! and region.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use seismo_core::{MagnitudeClass, QuakeEvent};

use crate::summary::{ActivitySummary, Distribution};

/// Events per magnitude class
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassCount {
    pub class: MagnitudeClass,
    pub count: usize,
}

/// Events per calendar year
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearCount {
    pub year: i32,
    pub count: usize,
}

/// Events per region
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionCount {
    pub region: String,
    pub count: usize,
}

/// Full statistics breakdown for a filtered view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogReport {
    pub summary: ActivitySummary,

    /// Magnitude distribution; `None` when the view is empty
    pub magnitude: Option<Distribution>,

    /// Depth distribution; `None` when the view is empty
    pub depth_km: Option<Distribution>,

    /// All five classes in table order, zero counts included; events below
    /// the 2.5 class floor are not counted here
    pub by_class: Vec<ClassCount>,

    /// Years ascending; only years with events appear
    pub by_year: Vec<YearCount>,

    /// Regions by descending count, ties broken by name; events with an
    /// empty region are not counted
    pub by_region: Vec<RegionCount>,

    /// Events reported felt
    pub felt_count: usize,
}

impl CatalogReport {
    /// Build the report for a filtered view over an inclusive year span
    pub fn new(events: &[&QuakeEvent], year_span: u32) -> Self {
        let mut class_counts: BTreeMap<MagnitudeClass, usize> = BTreeMap::new();
        let mut year_counts: BTreeMap<i32, usize> = BTreeMap::new();
        let mut region_counts: BTreeMap<String, usize> = BTreeMap::new();
        let mut felt_count = 0;

        for event in events {
            if let Some(class) = event.magnitude_class() {
                *class_counts.entry(class).or_default() += 1;
            }
            *year_counts.entry(event.year()).or_default() += 1;
            let region = event.region.trim();
            if !region.is_empty() {
                *region_counts.entry(region.to_string()).or_default() += 1;
            }
            if event.felt {
                felt_count += 1;
            }
        }

        let by_class = MagnitudeClass::ALL
            .iter()
            .map(|class| ClassCount {
                class: *class,
                count: class_counts.get(class).copied().unwrap_or(0),
            })
            .collect();

        let by_year = year_counts
            .into_iter()
            .map(|(year, count)| YearCount { year, count })
            .collect();

        let mut by_region: Vec<RegionCount> = region_counts
            .into_iter()
            .map(|(region, count)| RegionCount { region, count })
            .collect();
        by_region.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.region.cmp(&b.region)));

        Self {
            summary: ActivitySummary::new(events, year_span),
            magnitude: Distribution::from_values(events.iter().map(|event| event.magnitude)),
            depth_km: Distribution::from_values(events.iter().map(|event| event.depth_km)),
            by_class,
            by_year,
            by_region,
            felt_count,
        }
    }
}
