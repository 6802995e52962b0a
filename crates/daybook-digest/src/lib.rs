//! Daybook Digest - Offline daily-browsing summarizer
//!
//! Takes an export document produced by the capture service, prepares a
//! budgeted prompt from the day's pages, asks a local Ollama instance for a
//! short digest, and writes it out as Markdown. Everything runs against
//! `localhost`; no page content leaves the machine.

#![warn(missing_docs)]

pub mod cli;
pub mod input;
pub mod markdown;
pub mod ollama;
pub mod prompt;

use thiserror::Error;

pub use cli::Cli;
pub use ollama::OllamaClient;

/// Errors that can occur while producing a digest
#[derive(Error, Debug)]
pub enum DigestError {
    /// Reading or writing a file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The input file is not valid JSON
    #[error("Invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// The input parses as JSON but is not a usable export document
    #[error("Malformed export: {0}")]
    MalformedExport(String),

    /// The export holds no pages to summarize
    #[error("No pages to summarize")]
    EmptyExport,

    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// The model returned something that is not a usable response
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// The requested model is not available on the Ollama instance
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),
}

/// Result type for digest operations
pub type Result<T> = std::result::Result<T, DigestError>;
