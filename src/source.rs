//! Where catalogs come from
//!
//! [`CsvFileSource`] rebuilds the catalog on every call. [`CachedCsvSource`]
//! keeps the last good catalog as an immutable snapshot and rebuilds it only
//! when the file's modification time changes.

use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, PoisonError, RwLock};
use std::time::SystemTime;

use crate::catalog::Catalog;
use crate::error::CatalogError;

/// Produces a complete catalog or an error, never a partial one.
pub trait CatalogSource: Send + Sync {
    fn load(&self) -> Result<Arc<Catalog>, CatalogError>;
}

/// Reads the CSV file fresh on each load.
#[derive(Debug, Clone)]
pub struct CsvFileSource {
    path: PathBuf,
}

impl CsvFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogSource for CsvFileSource {
    fn load(&self) -> Result<Arc<Catalog>, CatalogError> {
        let catalog = Catalog::from_path(&self.path)?;
        tracing::debug!(path = %self.path.display(), records = catalog.len(), "Catalog loaded");
        Ok(Arc::new(catalog))
    }
}

#[derive(Debug)]
struct Snapshot {
    modified: SystemTime,
    catalog: Arc<Catalog>,
}

/// Serves a cached catalog until the backing file's mtime changes.
#[derive(Debug)]
pub struct CachedCsvSource {
    path: PathBuf,
    snapshot: RwLock<Option<Snapshot>>,
}

impl CachedCsvSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            snapshot: RwLock::new(None),
        }
    }

    fn modified(&self) -> Result<SystemTime, CatalogError> {
        fs::metadata(&self.path)
            .and_then(|meta| meta.modified())
            .map_err(|source| CatalogError::Io {
                path: self.path.clone(),
                source,
            })
    }
}

impl CatalogSource for CachedCsvSource {
    fn load(&self) -> Result<Arc<Catalog>, CatalogError> {
        let modified = self.modified()?;

        {
            let guard = self.snapshot.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(snapshot) = guard.as_ref().filter(|s| s.modified == modified) {
                return Ok(Arc::clone(&snapshot.catalog));
            }
        }

        let catalog = Arc::new(Catalog::from_path(&self.path)?);
        tracing::info!(
            path = %self.path.display(),
            records = catalog.len(),
            "Catalog snapshot refreshed"
        );

        let mut guard = self.snapshot.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Some(Snapshot {
            modified,
            catalog: Arc::clone(&catalog),
        });

        Ok(catalog)
    }
}
