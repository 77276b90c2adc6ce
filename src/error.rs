use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Entropy source unavailable: {0}")]
    Entropy(String),

    #[error("Invalid key length: {0} bytes")]
    InvalidKeyLength(usize),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Prompt error: {0}")]
    Prompt(String),
}

impl AppError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::Io {
            path: path.into(),
            source,
        }
    }
}

// Convenience type alias
pub type Result<T> = std::result::Result<T, AppError>;

impl From<rand::Error> for AppError {
    fn from(err: rand::Error) -> Self {
        AppError::Entropy(err.to_string())
    }
}
