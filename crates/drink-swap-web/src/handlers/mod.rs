//! Request handlers
//!
//! Catalog loads are blocking file reads, so every call into the lookup
//! service runs on the blocking pool.

pub mod health;
pub mod index;
pub mod lookup;
pub mod suggestions;

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Envelope for JSON endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

pub(crate) async fn blocking<F, T>(f: F) -> Result<T, AppError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    Ok(tokio::task::spawn_blocking(f).await?)
}

/// Unknown routes; the status page layer renders the body.
pub async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}
