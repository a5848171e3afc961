use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use rapid_pagerank::corpus::loader::load_corpus;
use rapid_pagerank::report::write_report;
use rapid_pagerank::{IterativeEstimator, SamplingEstimator};

/// Estimate PageRank for a directory of HTML pages, by sampling and by
/// iteration.
#[derive(Debug, Parser)]
#[command(name = "rapid-pagerank", version, about)]
struct Args {
    /// Directory containing the corpus (.html files).
    corpus: PathBuf,

    /// Damping factor for both estimators.
    #[arg(long, default_value_t = 0.85)]
    damping: f64,

    /// Number of steps in the sampling walk.
    #[arg(long, default_value_t = 10_000)]
    samples: usize,

    /// RNG seed for a reproducible sampling walk.
    #[arg(long)]
    seed: Option<u64>,

    /// Convergence tolerance for the iterative estimator.
    #[arg(long, default_value_t = 0.001)]
    tolerance: f64,

    /// Iteration cap for the iterative estimator.
    #[arg(long, default_value_t = 100)]
    max_iterations: usize,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let corpus = load_corpus(&args.corpus)?;
    info!(pages = corpus.len(), links = corpus.num_links(), "corpus loaded");

    let mut sampler = SamplingEstimator::new()
        .with_damping(args.damping)
        .with_samples(args.samples);
    if let Some(seed) = args.seed {
        sampler = sampler.with_seed(seed);
    }
    let sampled = sampler.run(&corpus)?;

    let iterated = IterativeEstimator::new()
        .with_damping(args.damping)
        .with_tolerance(args.tolerance)
        .with_max_iterations(args.max_iterations)
        .run(&corpus)?;
    if !iterated.converged {
        warn!(
            iterations = iterated.iterations,
            delta = iterated.delta,
            "iterative estimator did not converge"
        );
    }

    let stdout = io::stdout();
    write_report(
        &mut stdout.lock(),
        &corpus,
        &sampled,
        args.samples,
        &iterated.ranks,
    )?;

    Ok(())
}
