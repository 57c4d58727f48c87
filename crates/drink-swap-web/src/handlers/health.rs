//! GET /health

use axum::Json;

use super::ApiResponse;

pub async fn health() -> Json<ApiResponse<String>> {
    Json(ApiResponse::ok("OK".to_string()))
}
