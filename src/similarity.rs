//! String similarity scoring on a 0.0..=1.0 scale
//!
//! Ratcliff/Obershelp is the default: it rewards long shared runs, so
//! "flatwhite" still lands on "flat white". Jaro-Winkler and normalized
//! Levenshtein come from `strsim` for deployments that prefer them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Scoring function used by the name matcher.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SimilarityAlgorithm {
    #[default]
    RatcliffObershelp,
    JaroWinkler,
    Levenshtein,
}

impl SimilarityAlgorithm {
    pub fn score(self, a: &str, b: &str) -> f64 {
        match self {
            SimilarityAlgorithm::RatcliffObershelp => ratcliff_obershelp(a, b),
            SimilarityAlgorithm::JaroWinkler => strsim::jaro_winkler(a, b),
            SimilarityAlgorithm::Levenshtein => strsim::normalized_levenshtein(a, b),
        }
    }

    /// Highest score two strings of these character lengths could reach.
    /// Lets callers skip candidates that cannot clear a threshold.
    pub fn upper_bound(self, len_a: usize, len_b: usize) -> f64 {
        let (short, long) = (len_a.min(len_b), len_a.max(len_b));
        if long == 0 {
            return 1.0;
        }
        match self {
            SimilarityAlgorithm::RatcliffObershelp => 2.0 * short as f64 / (short + long) as f64,
            SimilarityAlgorithm::Levenshtein => short as f64 / long as f64,
            SimilarityAlgorithm::JaroWinkler => 1.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SimilarityAlgorithm::RatcliffObershelp => "ratcliff-obershelp",
            SimilarityAlgorithm::JaroWinkler => "jaro-winkler",
            SimilarityAlgorithm::Levenshtein => "levenshtein",
        }
    }
}

impl fmt::Display for SimilarityAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SimilarityAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ratcliff-obershelp" | "ratcliff" | "gestalt" => Ok(Self::RatcliffObershelp),
            "jaro-winkler" | "jaro_winkler" => Ok(Self::JaroWinkler),
            "levenshtein" => Ok(Self::Levenshtein),
            other => Err(format!("unknown similarity algorithm '{}'", other)),
        }
    }
}

/// Gestalt pattern matching: `2 * M / (|a| + |b|)` where `M` is the number
/// of characters covered by matching blocks. Two empty strings score 1.0.
pub fn ratcliff_obershelp(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }

    2.0 * matching_characters(&a, &b) as f64 / total as f64
}

/// Sum of matching block sizes: take the longest common run, then recurse
/// on the unmatched pieces to its left and right.
fn matching_characters(a: &[char], b: &[char]) -> usize {
    let mut matched = 0;
    let mut pending = vec![(0, a.len(), 0, b.len())];

    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let (i, j, size) = longest_match(a, b, alo, ahi, blo, bhi);
        if size == 0 {
            continue;
        }
        matched += size;
        if alo < i && blo < j {
            pending.push((alo, i, blo, j));
        }
        if i + size < ahi && j + size < bhi {
            pending.push((i + size, ahi, j + size, bhi));
        }
    }

    matched
}

/// Longest common contiguous run inside `a[alo..ahi]` and `b[blo..bhi]`.
/// Earliest run wins on ties. Returns `(start_a, start_b, len)`.
fn longest_match(
    a: &[char],
    b: &[char],
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> (usize, usize, usize) {
    let width = bhi - blo;
    let mut best = (alo, blo, 0);
    let mut prev = vec![0usize; width + 1];
    let mut curr = vec![0usize; width + 1];

    for i in alo..ahi {
        for j in blo..bhi {
            let col = j - blo;
            if a[i] == b[j] {
                let run = prev[col] + 1;
                curr[col + 1] = run;
                if run > best.2 {
                    best = (i + 1 - run, j + 1 - run, run);
                }
            } else {
                curr[col + 1] = 0;
            }
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    best
}
