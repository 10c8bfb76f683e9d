// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RankError {
    #[error("corpus is empty")]
    EmptyCorpus,

    #[error("page not in corpus: {0}")]
    UnknownPage(String),

    #[error("damping factor must be in [0, 1], got {0}")]
    InvalidDamping(f64),

    #[error("sample count must be at least 1, got {0}")]
    InvalidSamples(usize),

    #[error("link from {from} targets unknown page {to}")]
    DanglingLink { from: String, to: String },

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    #[error("I/O error: {source} (path: {})", .path.display())]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Generic error: {0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, RankError>;

// Allow `?` on std::io::Error by converting to RankError::Io with unknown path.
impl From<std::io::Error> for RankError {
    fn from(source: std::io::Error) -> Self {
        RankError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}

// Gracefully convert WalkDir errors
impl From<walkdir::Error> for RankError {
    fn from(e: walkdir::Error) -> Self {
        RankError::Other(e.to_string())
    }
}
