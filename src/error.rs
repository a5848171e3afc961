//! Error types for corpus loading and rank estimation.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RankError {
    #[error("corpus is empty")]
    EmptyCorpus,

    #[error("damping factor {0} is outside [0, 1]")]
    InvalidDamping(f64),

    #[error("sample count must be at least 1")]
    ZeroSamples,

    #[error("failed to read corpus directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to read page {path}: {source}")]
    ReadPage {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, RankError>;
