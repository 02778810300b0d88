// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MillError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("{path}:{line}: malformed input: {reason}")]
    Parse {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    #[error("Unknown input format: {0}")]
    UnknownFormat(String),

    #[error("Unknown input transform: {0}")]
    UnknownTransform(String),

    #[error("Unknown update nature: {0}")]
    UnknownUpdateNature(String),

    #[error("Unknown probability distribution: {0}")]
    UnknownDistribution(String),

    #[error("Input format not implemented: {0}")]
    UnsupportedFormat(&'static str),

    #[error("Input transform not implemented: {0}")]
    UnsupportedTransform(&'static str),

    #[error("Update nature not implemented: {0}")]
    UnsupportedUpdateNature(&'static str),

    #[error("Cannot normalize an empty or zero-sum weight vector")]
    Normalization,

    #[error("KL divergence undefined: Q[{index}] is zero where P[{index}] is positive")]
    DivergenceUndefined { index: usize },
}

pub type Result<T> = std::result::Result<T, MillError>;

impl MillError {
    /// Attaches the offending path to an I/O failure.
    pub fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        MillError::Io {
            source,
            path: path.to_path_buf(),
        }
    }
}

// Allow `?` on std::io::Error by converting to MillError::Io with unknown path.
impl From<std::io::Error> for MillError {
    fn from(source: std::io::Error) -> Self {
        MillError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}
