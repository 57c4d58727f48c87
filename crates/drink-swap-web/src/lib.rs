//! drink-swap-web - HTTP front end for the drink lookup core
//!
//! ## Endpoints
//!
//! - `GET  /`            - search page
//! - `POST /`            - search page with the result for form field `drink`
//! - `POST /api/lookup`  - JSON lookup, `{"drink": "..."}`
//! - `GET  /suggestions` - autocomplete, `?q=...`
//! - `GET  /health`      - liveness

pub mod config;
pub mod error;
pub mod handlers;
pub mod pages;
pub mod router;
pub mod state;

pub use config::{ConfigError, ServerConfig};
pub use pages::Pages;
pub use router::build_router;
pub use state::AppState;
