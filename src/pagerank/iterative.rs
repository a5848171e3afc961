//! Iterative PageRank solver.
//!
//! Power iteration of the PageRank fixed-point equation with proper
//! handling of sink pages: a sink is treated as linking to every page, so
//! its rank mass is redistributed uniformly each round.

use tracing::trace;

use super::RankTable;
use crate::corpus::Corpus;
use crate::error::{RankError, Result};

/// Outcome of an iterative run.
///
/// Carries the convergence diagnostics alongside the ranks so a
/// non-converged run can be reported instead of looping forever.
#[derive(Debug, Clone)]
pub struct IterationResult {
    /// Estimated ranks.
    pub ranks: RankTable,
    /// Number of rounds performed.
    pub iterations: usize,
    /// Largest per-page change in the final round.
    pub delta: f64,
    /// Whether every page's change fell below the tolerance.
    pub converged: bool,
}

/// Iterative PageRank estimator.
///
/// Deterministic: the same corpus and parameters always produce the same
/// ranks.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct IterativeEstimator {
    /// Damping factor (typically 0.85).
    pub damping: f64,
    /// Convergence tolerance on the per-page absolute change.
    pub tolerance: f64,
    /// Safety bound on the number of rounds.
    pub max_iterations: usize,
}

impl Default for IterativeEstimator {
    fn default() -> Self {
        Self {
            damping: 0.85,
            tolerance: 0.001,
            max_iterations: 100,
        }
    }
}

impl IterativeEstimator {
    /// Create a new estimator with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the damping factor.
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the convergence tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the maximum number of rounds.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Iterate to convergence and return the ranks.
    ///
    /// Returns the result even if convergence wasn't achieved within
    /// `max_iterations`, with `converged = false`.
    pub fn run(&self, corpus: &Corpus) -> Result<IterationResult> {
        if corpus.is_empty() {
            return Err(RankError::EmptyCorpus);
        }
        if !(0.0..=1.0).contains(&self.damping) {
            return Err(RankError::InvalidDamping(self.damping));
        }

        let n = corpus.len();
        let initial = 1.0 / n as f64;
        let mut scores = vec![initial; n];
        let mut new_scores = vec![0.0; n];

        let sinks = corpus.sinks();
        let teleport = (1.0 - self.damping) / n as f64;

        let mut iterations = 0;
        let mut delta = f64::MAX;

        while iterations < self.max_iterations && delta > self.tolerance {
            iterations += 1;

            // Sink pages link to everything, so their mass spreads uniformly.
            let sink_mass: f64 = sinks.iter().map(|&s| scores[s as usize]).sum();
            let sink_contribution = self.damping * sink_mass / n as f64;

            new_scores.fill(teleport + sink_contribution);

            // Push each page's mass along its outgoing links.
            for (page, &page_score) in scores.iter().enumerate() {
                let links = corpus.out_links(page as u32);
                if !links.is_empty() {
                    let share = self.damping * page_score / links.len() as f64;
                    for &target in links {
                        new_scores[target as usize] += share;
                    }
                }
            }

            // Per-page absolute change; every page must settle.
            delta = scores
                .iter()
                .zip(new_scores.iter())
                .map(|(old, new)| (old - new).abs())
                .fold(0.0, f64::max);

            std::mem::swap(&mut scores, &mut new_scores);
            trace!(round = iterations, delta, "iteration round");
        }

        // The update conserves mass; normalize only for numerical stability.
        let sum: f64 = scores.iter().sum();
        if sum > 0.0 {
            for score in &mut scores {
                *score /= sum;
            }
        }

        Ok(IterationResult {
            ranks: RankTable::new(scores),
            iterations,
            delta,
            converged: delta <= self.tolerance,
        })
    }
}
