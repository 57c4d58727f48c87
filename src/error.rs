//! Error types for catalog loading and drink lookup
//!
//! Every failure is recoverable at the request boundary. The HTTP layer maps
//! each [`LookupError`] variant to its own user-visible message.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to produce a catalog from its source. Loads never return a
/// partial catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed catalog: {0}")]
    Csv(#[from] csv::Error),

    #[error("Catalog is missing required columns {missing:?} (found {found:?})")]
    MissingColumns {
        missing: Vec<String>,
        found: Vec<String>,
    },

    #[error("Empty value for column '{column}' in row {row}")]
    EmptyField { row: usize, column: String },

    #[error("Non-finite number for column '{column}' in row {row}")]
    NotFinite { row: usize, column: String },
}

/// Outcome of a lookup that produced no recommendation.
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("Catalog unavailable: {0}")]
    Catalog(#[from] CatalogError),

    #[error("No catalog drink is close enough to '{query}'")]
    NoMatch { query: String },

    #[error("Drink '{name}' is not in the catalog")]
    NotFound { name: String },
}

impl LookupError {
    /// Message shown to the person who typed the query.
    pub fn user_message(&self) -> &'static str {
        match self {
            LookupError::Catalog(_) => "Database error",
            LookupError::NoMatch { .. } => "Drink not found",
            LookupError::NotFound { .. } => "No alternatives found",
        }
    }
}
