//! seismo-io - Catalog loading
//!
//! Reads the cleaned earthquake catalog CSV produced by the data pipeline
//! into a `seismo_core::Catalog`. This is the only crate in the workspace
//! that touches the filesystem: the engines downstream trust that numeric
//! fields are numbers and timestamps are absolute instants, so malformed
//! rows are dropped (with a warning) here rather than surfacing later.
//!
//! Expected columns: `epiid`, `latitude`, `longitude`, `date`, `date-time`,
//! `magnitude`, `depth`, `felt?`, `city`, `area`, `country`.

pub mod csv_catalog;
pub mod normalize;

pub use csv_catalog::{read_catalog, CsvCatalogReader};
pub use normalize::normalize_region;

use thiserror::Error;

/// Errors raised while loading a catalog
#[derive(Debug, Error)]
pub enum IoError {
    /// Input file does not exist
    #[error("catalog file not found: {0}")]
    FileNotFound(String),

    /// Input file could not be opened
    #[error("failed to open catalog: {0}")]
    OpenFailed(String),

    /// CSV structure problems (bad header, unreadable records)
    #[error("invalid catalog format: {0}")]
    InvalidFormat(String),

    /// A required column is missing from the header
    #[error("catalog column '{0}' missing")]
    ColumnMissing(String),

    /// Catalog invariant violations surfaced by `Catalog::new`
    #[error(transparent)]
    Catalog(#[from] seismo_core::CatalogError),
}

/// Result type for catalog loading
pub type IoResult<T> = Result<T, IoError>;
