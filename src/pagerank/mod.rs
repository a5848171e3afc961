//! PageRank estimators.
//!
//! Two independent estimators over the same transition model: a random-walk
//! sampler and a power-iteration solver.

pub mod iterative;
pub mod sampling;
pub mod transition;

/// Estimated ranks for every page of a corpus.
///
/// Scores are indexed by page id and sum to 1.0 within floating-point
/// tolerance. Produced fresh by each estimator call.
#[derive(Debug, Clone, PartialEq)]
pub struct RankTable {
    /// Rank for each page (indexed by page id).
    pub scores: Vec<f64>,
}

impl RankTable {
    /// Wrap a score vector.
    pub fn new(scores: Vec<f64>) -> Self {
        Self { scores }
    }

    /// Get the rank for a specific page.
    pub fn score(&self, page: u32) -> f64 {
        self.scores.get(page as usize).copied().unwrap_or(0.0)
    }

    /// Sum of all ranks. 1.0 within tolerance for a valid table.
    pub fn sum(&self) -> f64 {
        self.scores.iter().sum()
    }

    /// Get top N pages by rank.
    pub fn top_n(&self, n: usize) -> Vec<(u32, f64)> {
        let mut indexed: Vec<_> = self
            .scores
            .iter()
            .enumerate()
            .map(|(i, &s)| (i as u32, s))
            .collect();
        indexed.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap());
        indexed.truncate(n);
        indexed
    }
}
