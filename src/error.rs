use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GemimgError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Reference image error: {}: {message}", path.display())]
    Reference { path: PathBuf, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Request error: {0}")]
    Request(String),

    #[error("Response error: {0}")]
    Response(String),
}

pub type Result<T> = std::result::Result<T, GemimgError>;
