//! Search page
//!
//!   GET  /  - empty form
//!   POST /  - form field `drink`, page shows the match or an error message

use axum::{extract::State, response::Html, Form};
use serde::Deserialize;

use super::blocking;
use crate::error::AppError;
use crate::pages::IndexView;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct DrinkForm {
    pub drink: String,
}

pub async fn show_form(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    Ok(Html(state.pages.index(&IndexView::default())?))
}

pub async fn submit(
    State(state): State<AppState>,
    Form(form): Form<DrinkForm>,
) -> Result<Html<String>, AppError> {
    let service = state.service.clone();
    let query = form.drink.clone();
    let outcome = blocking(move || service.lookup(&query)).await?;

    let view = match outcome {
        Ok(recommendation) => IndexView::found(form.drink, recommendation),
        Err(e) => {
            tracing::info!(query = %form.drink, "Lookup failed: {}", e);
            IndexView::failed(form.drink, e.user_message())
        }
    };

    Ok(Html(state.pages.index(&view)?))
}
