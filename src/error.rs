//! Error handling for the resumecraft application
//!
//! The extraction and scoring core never fails; these errors belong to the
//! layer around it (reading input, configuration, rendering output).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeCraftError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("{0}")]
    UnsupportedFormat(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Please paste some resume text first.")]
    EmptyInput,

    #[error("Please parse a resume first.")]
    NoResumeLoaded,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Template rendering error: {0}")]
    Template(#[from] askama::Error),
}

pub type Result<T> = std::result::Result<T, ResumeCraftError>;

