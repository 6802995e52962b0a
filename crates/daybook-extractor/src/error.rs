//! Error types for the Extractor

use thiserror::Error;

/// Errors that can occur during extraction
///
/// None of these ever reach the hosting page: the extractor logs them at
/// debug level and reports a non-error outcome instead.
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Document access or traversal failure
    #[error("DOM error: {0}")]
    Dom(String),

    /// The submission transport or store rejected the capture
    #[error("Submission error: {0}")]
    Submission(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
