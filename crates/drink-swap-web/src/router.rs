//! Router construction

use axum::{
    extract::DefaultBodyLimit,
    middleware as axum_mw,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::handlers;
use crate::pages::status_pages;
use crate::state::AppState;

/// Largest request body accepted. A drink name never comes close.
pub const MAX_BODY_BYTES: usize = 16 * 1024;

/// Build the full axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/",
            get(handlers::index::show_form).post(handlers::index::submit),
        )
        .route("/suggestions", get(handlers::suggestions::suggestions))
        .route("/api/lookup", post(handlers::lookup::lookup))
        .route("/health", get(handlers::health::health))
        .fallback(handlers::not_found)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                )
                .layer(axum_mw::from_fn_with_state(
                    state.pages.clone(),
                    status_pages,
                )),
        )
        .with_state(state)
}
