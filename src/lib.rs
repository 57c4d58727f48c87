//! drink-swap - find a drink by name and suggest lighter ones
//!
//! The crate owns the lookup core only. A CSV catalog is loaded into
//! [`Catalog`], a free-text query is resolved to a catalog name by
//! [`NameMatcher`], and [`recommend`] picks up to three lower-calorie
//! alternatives. [`DrinkService`] wires those steps together behind a
//! [`CatalogSource`] so the HTTP layer only deals in plain strings and
//! serializable results.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use drink_swap::{CsvFileSource, DrinkService, NameMatcher};
//!
//! let source = Arc::new(CsvFileSource::new("data/BlueBottleDB.csv"));
//! let service = DrinkService::new(source, NameMatcher::default());
//! match service.lookup("flat whte") {
//!     Ok(rec) => println!("{} -> {} alternatives", rec.original.drink_name, rec.alternatives.len()),
//!     Err(e) => println!("{}", e.user_message()),
//! }
//! ```

pub mod catalog;
pub mod error;
pub mod matcher;
pub mod recommend;
pub mod service;
pub mod similarity;
pub mod source;
pub mod suggest;

pub use catalog::{Catalog, DrinkRecord, REQUIRED_COLUMNS};
pub use error::{CatalogError, LookupError};
pub use matcher::{NameMatch, NameMatcher, DEFAULT_THRESHOLD};
pub use recommend::{recommend, Recommendation, MAX_ALTERNATIVES};
pub use service::DrinkService;
pub use similarity::SimilarityAlgorithm;
pub use source::{CachedCsvSource, CatalogSource, CsvFileSource};
pub use suggest::{suggest, MAX_SUGGESTIONS};
