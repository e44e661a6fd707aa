// ABOUTME: Error types for the substitution engine
// ABOUTME: Defines the failure conditions of a generation run

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Environment variable [{key}] not found")]
    MissingEnvironmentVariable { key: String },

    #[error("Unsupported input: {message}")]
    UnsupportedInput { message: String },

    #[error("Template not found for '{path}': {source}")]
    TemplateNotFound {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read template: {0}")]
    ReadFailure(#[from] std::io::Error),

    #[error("Failed to write output '{path}': {source}")]
    WriteFailure {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, EngineError>;
