//! Server configuration from environment variables
//!
//!   DRINK_SWAP_CATALOG_PATH     - catalog CSV (default: data/BlueBottleDB.csv)
//!   DRINK_SWAP_BIND_ADDR        - listen address (default: 0.0.0.0:5000)
//!   DRINK_SWAP_CATALOG_CACHE    - reuse the catalog until the file changes (default: false)
//!   DRINK_SWAP_MATCH_ALGORITHM  - ratcliff-obershelp | jaro-winkler | levenshtein
//!   DRINK_SWAP_MATCH_THRESHOLD  - minimum similarity, 0.0..=1.0 (default: 0.6)

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use drink_swap::{
    CachedCsvSource, CatalogSource, CsvFileSource, DrinkService, NameMatcher,
    SimilarityAlgorithm, DEFAULT_THRESHOLD,
};
use thiserror::Error;

const DEFAULT_CATALOG_PATH: &str = "data/BlueBottleDB.csv";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value '{value}' for {key}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub catalog_path: PathBuf,
    pub bind_addr: SocketAddr,
    pub cache_catalog: bool,
    pub algorithm: SimilarityAlgorithm,
    pub threshold: f64,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset keys take their defaults.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let catalog_path = get("DRINK_SWAP_CATALOG_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG_PATH));

        let bind_raw =
            get("DRINK_SWAP_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw
            .parse::<SocketAddr>()
            .map_err(|e| invalid("DRINK_SWAP_BIND_ADDR", &bind_raw, e))?;

        let cache_catalog = match get("DRINK_SWAP_CATALOG_CACHE") {
            None => false,
            Some(v) => parse_flag(&v).ok_or_else(|| {
                invalid("DRINK_SWAP_CATALOG_CACHE", &v, "expected true/false")
            })?,
        };

        let algorithm = match get("DRINK_SWAP_MATCH_ALGORITHM") {
            None => SimilarityAlgorithm::default(),
            Some(v) => v
                .parse::<SimilarityAlgorithm>()
                .map_err(|e| invalid("DRINK_SWAP_MATCH_ALGORITHM", &v, e))?,
        };

        let threshold = match get("DRINK_SWAP_MATCH_THRESHOLD") {
            None => DEFAULT_THRESHOLD,
            Some(v) => {
                let t = v
                    .trim()
                    .parse::<f64>()
                    .map_err(|e| invalid("DRINK_SWAP_MATCH_THRESHOLD", &v, e))?;
                if !(0.0..=1.0).contains(&t) {
                    return Err(invalid(
                        "DRINK_SWAP_MATCH_THRESHOLD",
                        &v,
                        "must be between 0.0 and 1.0",
                    ));
                }
                t
            }
        };

        Ok(Self {
            catalog_path,
            bind_addr,
            cache_catalog,
            algorithm,
            threshold,
        })
    }

    pub fn catalog_source(&self) -> Arc<dyn CatalogSource> {
        if self.cache_catalog {
            Arc::new(CachedCsvSource::new(&self.catalog_path))
        } else {
            Arc::new(CsvFileSource::new(&self.catalog_path))
        }
    }

    pub fn build_service(&self) -> DrinkService {
        DrinkService::new(
            self.catalog_source(),
            NameMatcher::new(self.algorithm, self.threshold),
        )
    }
}

fn invalid(key: &'static str, value: &str, reason: impl ToString) -> ConfigError {
    ConfigError::Invalid {
        key,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
