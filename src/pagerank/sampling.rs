//! Random-walk PageRank sampler.
//!
//! Drives a discrete-time Markov chain with the transition model: one walk
//! of `samples` steps, starting from a uniformly random page, counting
//! visits. The visit frequencies are the rank estimate and converge in
//! probability to the stationary distribution as the walk length grows.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::transition::transition_model;
use super::RankTable;
use crate::corpus::Corpus;
use crate::error::{RankError, Result};

/// Random-walk PageRank estimator.
///
/// Intentionally stochastic: repeated unseeded runs differ. Supply a seed
/// for reproducible results.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SamplingEstimator {
    /// Damping factor (typically 0.85).
    pub damping: f64,
    /// Number of steps in the walk, including the starting page.
    pub samples: usize,
    /// Optional RNG seed for reproducible walks.
    pub seed: Option<u64>,
}

impl Default for SamplingEstimator {
    fn default() -> Self {
        Self {
            damping: 0.85,
            samples: 10_000,
            seed: None,
        }
    }
}

impl SamplingEstimator {
    /// Create a new estimator with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the damping factor.
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the number of walk steps.
    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    /// Fix the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Run the walk and return visit frequencies as ranks.
    pub fn run(&self, corpus: &Corpus) -> Result<RankTable> {
        if corpus.is_empty() {
            return Err(RankError::EmptyCorpus);
        }
        if self.samples < 1 {
            return Err(RankError::ZeroSamples);
        }
        if !(0.0..=1.0).contains(&self.damping) {
            return Err(RankError::InvalidDamping(self.damping));
        }

        let n = corpus.len();
        let mut rng = match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };

        // The corpus is small; precompute every page's cumulative transition
        // row once so each step is a draw plus a binary search.
        let rows: Vec<Vec<f64>> = (0..n as u32)
            .map(|page| {
                let mut cumulative = transition_model(corpus, page, self.damping);
                let mut acc = 0.0;
                for p in &mut cumulative {
                    acc += *p;
                    *p = acc;
                }
                cumulative
            })
            .collect();

        let mut visits = vec![0u64; n];
        let mut current = rng.gen_range(0..n);
        visits[current] += 1;

        for _ in 1..self.samples {
            let x: f64 = rng.gen();
            // Cumulative rows end at ~1.0; clamp guards the last bucket
            // against floating-point shortfall.
            current = rows[current].partition_point(|&c| c <= x).min(n - 1);
            visits[current] += 1;
        }

        debug!(steps = self.samples, pages = n, "sampling walk complete");

        let scores = visits
            .into_iter()
            .map(|count| count as f64 / self.samples as f64)
            .collect();
        Ok(RankTable::new(scores))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagerank::iterative::IterativeEstimator;

    fn page(name: &str, targets: &[&str]) -> (String, Vec<String>) {
        (
            name.to_string(),
            targets.iter().map(|t| t.to_string()).collect(),
        )
    }

    fn three_page_corpus() -> Corpus {
        Corpus::from_pages([
            page("1.html", &["2.html"]),
            page("2.html", &["1.html", "3.html"]),
            page("3.html", &["2.html"]),
        ])
    }

    #[test]
    fn test_frequencies_sum_to_one() {
        let corpus = three_page_corpus();
        let ranks = SamplingEstimator::new()
            .with_samples(5_000)
            .with_seed(7)
            .run(&corpus)
            .unwrap();

        assert!((ranks.sum() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_single_sample_is_one_hot() {
        let corpus = three_page_corpus();
        let ranks = SamplingEstimator::new()
            .with_samples(1)
            .with_seed(42)
            .run(&corpus)
            .unwrap();

        let ones = ranks.scores.iter().filter(|&&s| s == 1.0).count();
        let zeros = ranks.scores.iter().filter(|&&s| s == 0.0).count();
        assert_eq!(ones, 1);
        assert_eq!(zeros, corpus.len() - 1);
    }

    #[test]
    fn test_seeded_runs_reproducible() {
        let corpus = three_page_corpus();
        let estimator = SamplingEstimator::new().with_samples(2_000).with_seed(99);

        let a = estimator.run(&corpus).unwrap();
        let b = estimator.run(&corpus).unwrap();
        assert_eq!(a.scores, b.scores);
    }

    #[test]
    fn test_long_walk_approximates_fixed_point() {
        let corpus = three_page_corpus();
        let sampled = SamplingEstimator::new()
            .with_samples(50_000)
            .with_seed(3)
            .run(&corpus)
            .unwrap();
        let iterated = IterativeEstimator::new()
            .with_tolerance(1e-9)
            .with_max_iterations(1_000)
            .run(&corpus)
            .unwrap();

        for (s, i) in sampled.scores.iter().zip(iterated.ranks.scores.iter()) {
            assert!((s - i).abs() < 0.05, "sampled {s} vs iterated {i}");
        }
    }

    #[test]
    fn test_sink_page_reached() {
        // b is a sink; the walk must still pass through it.
        let corpus = Corpus::from_pages([
            page("a.html", &["b.html"]),
            page("b.html", &[]),
        ]);
        let ranks = SamplingEstimator::new()
            .with_samples(10_000)
            .with_seed(11)
            .run(&corpus)
            .unwrap();

        let b = corpus.page_id("b.html").unwrap();
        assert!(ranks.score(b) > 0.0);
    }

    #[test]
    fn test_empty_corpus_rejected() {
        let corpus = Corpus::from_pages(Vec::<(String, Vec<String>)>::new());
        let err = SamplingEstimator::new().run(&corpus).unwrap_err();
        assert!(matches!(err, RankError::EmptyCorpus));
    }

    #[test]
    fn test_zero_samples_rejected() {
        let corpus = three_page_corpus();
        let err = SamplingEstimator::new()
            .with_samples(0)
            .run(&corpus)
            .unwrap_err();
        assert!(matches!(err, RankError::ZeroSamples));
    }

    #[test]
    fn test_invalid_damping_rejected() {
        let corpus = three_page_corpus();
        let err = SamplingEstimator::new()
            .with_damping(1.5)
            .run(&corpus)
            .unwrap_err();
        assert!(matches!(err, RankError::InvalidDamping(_)));
    }

    #[test]
    fn test_config_deserializes_from_json() {
        let json = r#"{ "damping": 0.85, "samples": 10000, "seed": 42 }"#;
        let estimator: SamplingEstimator = serde_json::from_str(json).unwrap();
        assert_eq!(estimator.samples, 10_000);
        assert_eq!(estimator.seed, Some(42));
    }
}
