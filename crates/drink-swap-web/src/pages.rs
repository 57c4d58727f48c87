//! HTML pages rendered with Handlebars
//!
//! Templates are compiled into the binary and registered once at startup.

use axum::{
    extract::{Request, State},
    http::{header::CONTENT_TYPE, StatusCode},
    middleware::Next,
    response::{Html, IntoResponse, Response},
};
use drink_swap::{DrinkRecord, Recommendation};
use handlebars::{Handlebars, RenderError, TemplateError};
use serde::Serialize;
use std::sync::Arc;

const INDEX: &str = "index";
const FORBIDDEN: &str = "forbidden";
const NOT_FOUND: &str = "not_found";

/// Data for the search page. An empty view renders the bare form.
#[derive(Debug, Default, Serialize)]
pub struct IndexView {
    pub query: Option<String>,
    pub error: Option<&'static str>,
    pub original: Option<DrinkRecord>,
    pub alternatives: Vec<DrinkRecord>,
}

impl IndexView {
    pub fn found(query: String, recommendation: Recommendation) -> Self {
        Self {
            query: Some(query),
            error: None,
            original: Some(recommendation.original),
            alternatives: recommendation.alternatives,
        }
    }

    pub fn failed(query: String, message: &'static str) -> Self {
        Self {
            query: Some(query),
            error: Some(message),
            ..Self::default()
        }
    }
}

pub struct Pages {
    handlebars: Handlebars<'static>,
}

impl Pages {
    pub fn new() -> Result<Self, TemplateError> {
        let mut handlebars = Handlebars::new();
        handlebars.register_template_string(INDEX, include_str!("../templates/index.hbs"))?;
        handlebars.register_template_string(FORBIDDEN, include_str!("../templates/403.hbs"))?;
        handlebars.register_template_string(NOT_FOUND, include_str!("../templates/404.hbs"))?;
        Ok(Self { handlebars })
    }

    pub fn index(&self, view: &IndexView) -> Result<String, RenderError> {
        self.handlebars.render(INDEX, view)
    }

    /// Error page for 403 and 404, `None` for any other status.
    pub fn status_page(&self, status: StatusCode) -> Option<Result<String, RenderError>> {
        let name = match status {
            StatusCode::FORBIDDEN => FORBIDDEN,
            StatusCode::NOT_FOUND => NOT_FOUND,
            _ => return None,
        };
        Some(self.handlebars.render(name, &serde_json::json!({})))
    }
}

/// Replace bare 403/404 responses with the matching HTML page. Responses
/// that already carry a body type (JSON errors, rendered pages) pass through.
pub async fn status_pages(
    State(pages): State<Arc<Pages>>,
    req: Request,
    next: Next,
) -> Response {
    let response = next.run(req).await;
    let status = response.status();
    if response.headers().contains_key(CONTENT_TYPE) {
        return response;
    }

    match pages.status_page(status) {
        Some(Ok(html)) => (status, Html(html)).into_response(),
        Some(Err(e)) => {
            tracing::warn!("Failed to render {} page: {}", status, e);
            response
        }
        None => response,
    }
}
