//! POST /api/lookup
//!
//! JSON counterpart of the search form. Body: `{"drink": "flat white"}`.

use axum::{extract::State, http::StatusCode, Json};
use drink_swap::{LookupError, Recommendation};
use serde::Deserialize;

use super::{blocking, ApiResponse};
use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LookupRequest {
    pub drink: String,
}

pub async fn lookup(
    State(state): State<AppState>,
    Json(req): Json<LookupRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Recommendation>>), AppError> {
    let service = state.service.clone();
    let outcome = blocking(move || service.lookup(&req.drink)).await?;

    Ok(match outcome {
        Ok(recommendation) => (StatusCode::OK, Json(ApiResponse::ok(recommendation))),
        Err(e) => {
            let status = match &e {
                LookupError::Catalog(_) => StatusCode::INTERNAL_SERVER_ERROR,
                LookupError::NoMatch { .. } | LookupError::NotFound { .. } => {
                    StatusCode::NOT_FOUND
                }
            };
            (status, Json(ApiResponse::err(e.user_message())))
        }
    })
}
