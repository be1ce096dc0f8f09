//! Error types for the generator

use thiserror::Error;

/// Main error type for the generator
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Schematic format error: {0}")]
    Format(#[from] serde_json::Error),

    #[error("Missing template region: {0}")]
    TemplateMissing(String),

    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
