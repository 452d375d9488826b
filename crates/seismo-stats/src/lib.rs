//! seismo-stats - Aggregate summaries over filtered views
//!
//! Everything here is computed fresh from a filtered view; nothing is
//! cached or mutated. Empty input is reported as explicit "no data"
//! (`None`), never as zero, so a display collaborator can distinguish "no
//! events matched" from "the mean is 0".
//!
//! - **percentile**: interpolated order statistics
//! - **summary**: `Distribution` and `ActivitySummary`
//! - **report**: `CatalogReport` with class/year/region histograms

pub mod percentile;
pub mod report;
pub mod summary;

pub use percentile::{median_sorted, percentile_sorted, sorted_finite};
pub use report::{CatalogReport, ClassCount, RegionCount, YearCount};
pub use summary::{ActivitySummary, Distribution};
