//! Configuration for the Extractor

use daybook_domain::{MAX_CONTENT_LENGTH, MIN_CANDIDATE_LENGTH, MIN_CONTENT_LENGTH, QUIET_DELAY_MS};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the Extractor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Quiet delay after page load before extraction fires (milliseconds)
    pub quiet_delay_ms: u64,

    /// Minimum trimmed text length for a selector candidate to qualify
    pub min_candidate_length: usize,

    /// Emission gate: cleaned content must exceed this length to be submitted
    pub min_content_length: usize,

    /// Maximum stored content length (characters); longer text is truncated
    pub max_content_length: usize,

    /// Main-content selectors, evaluated in priority order
    pub content_selectors: Vec<String>,

    /// Boilerplate subtrees excluded from extracted text
    pub denylist: Vec<String>,
}

impl ExtractorConfig {
    /// Get the quiet delay as a Duration
    pub fn quiet_delay(&self) -> Duration {
        Duration::from_millis(self.quiet_delay_ms)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_content_length == 0 {
            return Err("max_content_length must be greater than 0".to_string());
        }
        if self.min_content_length >= self.max_content_length {
            return Err("min_content_length must be below max_content_length".to_string());
        }
        if self.content_selectors.is_empty() {
            return Err("content_selectors must not be empty".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for ExtractorConfig {
    /// Default configuration matching the stock capture heuristic
    fn default() -> Self {
        Self {
            quiet_delay_ms: QUIET_DELAY_MS,
            min_candidate_length: MIN_CANDIDATE_LENGTH,
            min_content_length: MIN_CONTENT_LENGTH,
            max_content_length: MAX_CONTENT_LENGTH,
            content_selectors: default_content_selectors(),
            denylist: default_denylist(),
        }
    }
}

/// Prioritized main-content selectors. Order matters: the first selector
/// whose text clears the relevance threshold wins.
fn default_content_selectors() -> Vec<String> {
    [
        "article",
        "[role=\"main\"]",
        "main",
        "#content",
        ".content",
        ".post-content",
        ".article-content",
        ".entry-content",
        "#main-content",
        ".main-content",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Boilerplate denylist: structural chrome, scripts, ads, comments, share
/// widgets, and ARIA-hidden subtrees.
fn default_denylist() -> Vec<String> {
    [
        "script",
        "style",
        "noscript",
        "iframe",
        "svg",
        "nav",
        "header",
        "footer",
        "aside",
        "form",
        ".nav",
        ".navbar",
        ".menu",
        ".sidebar",
        ".ad",
        ".ads",
        ".advertisement",
        ".promo",
        ".comments",
        ".comment",
        ".share",
        ".social",
        ".related",
        ".cookie-banner",
        "[aria-hidden=\"true\"]",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}
