//! GET /suggestions?q=lat
//!
//! Up to five distinct drink names containing `q`. Always answers with a
//! JSON array; a missing query or unreadable catalog gives `[]`.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use super::blocking;
use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SuggestionQuery {
    #[serde(default)]
    pub q: String,
}

pub async fn suggestions(
    State(state): State<AppState>,
    Query(query): Query<SuggestionQuery>,
) -> Result<Json<Vec<String>>, AppError> {
    if query.q.is_empty() {
        return Ok(Json(Vec::new()));
    }

    let service = state.service.clone();
    let names = blocking(move || service.suggestions(&query.q)).await?;
    Ok(Json(names))
}
