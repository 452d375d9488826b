//! Catalog snapshots
//!
//! A `Catalog` is the ordered, read-only set of events the engines work
//! over. It is produced once by a loader and replaced wholesale on refresh;
//! filtered views are always derived fresh and never stored back into it.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::event::QuakeEvent;

/// Errors raised when assembling a catalog snapshot
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Two records share an id; ids cross-reference map markers and must be
    /// unique within a snapshot
    #[error("duplicate event id '{id}' in catalog")]
    DuplicateId { id: String },
}

/// An ordered, read-only snapshot of seismic events
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    events: Vec<QuakeEvent>,
}

impl Catalog {
    /// Build a catalog from loader output, validating id uniqueness
    pub fn new(events: Vec<QuakeEvent>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(events.len());
        for event in &events {
            if !seen.insert(event.id.as_str()) {
                return Err(CatalogError::DuplicateId {
                    id: event.id.clone(),
                });
            }
        }
        Ok(Self { events })
    }

    /// Events in their original load order
    pub fn events(&self) -> &[QuakeEvent] {
        &self.events
    }

    /// Number of events in the snapshot
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the snapshot holds no events
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Look up an event by id
    pub fn find(&self, id: &str) -> Option<&QuakeEvent> {
        self.events.iter().find(|event| event.id == id)
    }

    /// Position of an event in load order, for highlight cross-referencing
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.events.iter().position(|event| event.id == id)
    }

    /// Iterate events in load order
    pub fn iter(&self) -> impl Iterator<Item = &QuakeEvent> {
        self.events.iter()
    }
}
