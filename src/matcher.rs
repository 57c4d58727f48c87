//! Resolve free text to a single catalog drink name

use crate::catalog::Catalog;
use crate::similarity::SimilarityAlgorithm;

/// Minimum similarity for a fuzzy match to be accepted.
pub const DEFAULT_THRESHOLD: f64 = 0.6;

/// Best-scoring catalog name for a query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NameMatch<'a> {
    /// Name as spelled in the catalog
    pub name: &'a str,
    pub score: f64,
}

/// Single best-match fuzzy matcher over catalog names.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NameMatcher {
    algorithm: SimilarityAlgorithm,
    threshold: f64,
}

impl Default for NameMatcher {
    fn default() -> Self {
        Self {
            algorithm: SimilarityAlgorithm::default(),
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl NameMatcher {
    pub fn new(algorithm: SimilarityAlgorithm, threshold: f64) -> Self {
        Self {
            algorithm,
            threshold,
        }
    }

    /// Closest catalog name to `query`, compared case-insensitively.
    ///
    /// Each candidate is scored as `score(name, query)`; Ratcliff/Obershelp
    /// is order sensitive. Candidates whose length alone rules out the
    /// threshold are not scored.
    ///
    /// Returns `None` when the best score falls below the threshold, the
    /// query is empty, or the catalog is empty. When several names tie for
    /// the best score, which one is returned is not part of the contract.
    pub fn find_closest<'a>(&self, query: &str, catalog: &'a Catalog) -> Option<NameMatch<'a>> {
        let query = query.to_lowercase();
        if query.is_empty() {
            return None;
        }
        let query_len = query.chars().count();

        let mut best: Option<NameMatch<'a>> = None;
        for record in catalog.iter() {
            let name = record.drink_name.to_lowercase();
            if self.algorithm.upper_bound(name.chars().count(), query_len) < self.threshold {
                continue;
            }
            let score = self.algorithm.score(&name, &query);
            if best.map_or(true, |b| score > b.score) {
                best = Some(NameMatch {
                    name: &record.drink_name,
                    score,
                });
            }
        }

        let best = best?;
        tracing::debug!(
            query = %query,
            candidate = best.name,
            score = best.score,
            algorithm = %self.algorithm,
            "Closest catalog name"
        );

        (best.score >= self.threshold).then_some(best)
    }
}
