//! seismo-core - Data model for the seismo interactive seismicity map
//!
//! This crate provides the shared value types the seismo engines operate on:
//!
//! - **QuakeEvent**: a single seismic event record
//! - **MagnitudeClass**: fixed severity classes derived from magnitude
//! - **Catalog**: an ordered, read-only snapshot of events
//! - **FilterState**: the facet selections owned by the UI layer
//!
//! # Design
//!
//! Everything here is plain data. The engines that consume these types
//! (`seismo-facet`, `seismo-decimate`, `seismo-stats`) are pure, synchronous
//! functions over immutable inputs; nothing in this crate holds process-wide
//! mutable state, and the current instant is always injected by the caller.

pub mod catalog;
pub mod event;
pub mod filter;

pub use catalog::{Catalog, CatalogError};
pub use event::{MagnitudeClass, QuakeEvent};
pub use filter::{
    FilterState, LookbackWindow, MagnitudeBand, TimeSelector, MAG_SLIDER_MAX, MAG_SLIDER_TOLERANCE,
};
