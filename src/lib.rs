//! # rapid-pagerank
//!
//! PageRank over a small, closed hyperlink corpus, estimated two ways:
//!
//! - **Sampling**: a single random walk driven by the transition model,
//!   with visit frequencies as the rank estimate.
//! - **Iteration**: power iteration of the PageRank fixed-point equation
//!   until per-page convergence.
//!
//! The corpus is built once (usually from a directory of HTML files) and is
//! immutable afterwards; both estimators are independent, pure computations
//! over it.
//!
//! ```
//! use rapid_pagerank::corpus::Corpus;
//! use rapid_pagerank::pagerank::iterative::IterativeEstimator;
//!
//! let corpus = Corpus::from_pages([
//!     ("a.html".to_string(), vec!["b.html".to_string()]),
//!     ("b.html".to_string(), vec!["a.html".to_string()]),
//! ]);
//!
//! let result = IterativeEstimator::new().run(&corpus).unwrap();
//! assert!((result.ranks.sum() - 1.0).abs() < 1e-3);
//! ```

pub mod corpus;
pub mod error;
pub mod pagerank;
pub mod report;

pub use corpus::Corpus;
pub use error::{RankError, Result};
pub use pagerank::iterative::IterativeEstimator;
pub use pagerank::sampling::SamplingEstimator;
pub use pagerank::RankTable;
