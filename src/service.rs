//! Lookup pipeline used by the HTTP layer
//!
//! load catalog -> fuzzy match the query -> recommend lighter drinks

use std::sync::Arc;

use crate::error::LookupError;
use crate::matcher::NameMatcher;
use crate::recommend::{recommend, Recommendation};
use crate::source::CatalogSource;
use crate::suggest::suggest;

#[derive(Clone)]
pub struct DrinkService {
    source: Arc<dyn CatalogSource>,
    matcher: NameMatcher,
}

impl DrinkService {
    pub fn new(source: Arc<dyn CatalogSource>, matcher: NameMatcher) -> Self {
        Self { source, matcher }
    }

    /// Resolve a typed drink name and recommend lighter alternatives.
    pub fn lookup(&self, query: &str) -> Result<Recommendation, LookupError> {
        let catalog = self.source.load().map_err(|e| {
            tracing::error!("Error loading catalog: {}", e);
            LookupError::from(e)
        })?;

        let matched = self
            .matcher
            .find_closest(query, &catalog)
            .ok_or_else(|| LookupError::NoMatch {
                query: query.to_string(),
            })?;

        let recommendation =
            recommend(matched.name, &catalog).ok_or_else(|| LookupError::NotFound {
                name: matched.name.to_string(),
            })?;

        tracing::info!(
            query = %query,
            matched = matched.name,
            score = matched.score,
            alternatives = recommendation.alternatives.len(),
            "Drink lookup"
        );
        Ok(recommendation)
    }

    /// Autocomplete names for a partial query. An empty query never touches
    /// the catalog source, and a catalog failure yields no suggestions.
    pub fn suggestions(&self, query: &str) -> Vec<String> {
        if query.is_empty() {
            return Vec::new();
        }

        match self.source.load() {
            Ok(catalog) => suggest(query, &catalog),
            Err(e) => {
                tracing::warn!("Suggestions unavailable, catalog failed to load: {}", e);
                Vec::new()
            }
        }
    }
}
