//! Core Extractor implementation

use crate::config::ExtractorConfig;
use crate::eligibility::is_capturable;
use crate::error::ExtractorError;
use crate::snapshot::PageSnapshot;
use crate::text::{normalize_whitespace, truncate_content};
use chrono::Utc;
use daybook_domain::{
    reading_time_minutes, word_count, CaptureDraft, CaptureId, UNTITLED_PLACEHOLDER,
};
use tracing::debug;
use url::Url;

/// The submission interface between the extractor and the record store
///
/// Delivery is at-most-once and best-effort: a failed submission is logged
/// and dropped, never retried.
pub trait CaptureSink {
    /// Submit a capture draft, receiving the assigned id on success
    fn submit(&self, draft: CaptureDraft) -> Result<CaptureId, String>;
}

/// What a capture attempt did
///
/// Extraction never surfaces an error to the hosting page; failures collapse
/// into [`ExtractionOutcome::Failed`] after a debug log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionOutcome {
    /// A capture was extracted and accepted by the sink
    Captured(CaptureId),
    /// The URL failed the eligibility gate; nothing was extracted
    SkippedUrl,
    /// Cleaned content fell below the emission gate; nothing was submitted
    InsufficientContent,
    /// Extraction or submission failed; the capture was dropped
    Failed,
}

/// The Extractor converts a page snapshot into a bounded, cleaned capture
pub struct Extractor<S: CaptureSink> {
    sink: S,
    config: ExtractorConfig,
}

impl<S: CaptureSink> Extractor<S> {
    /// Create a new Extractor submitting through the given sink
    pub fn new(sink: S, config: ExtractorConfig) -> Self {
        Self { sink, config }
    }

    /// The extractor's configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Run the full capture pipeline for one page view
    ///
    /// Gate, extract, clean, gate again, submit. This is the fire-and-forget
    /// entry point: every failure mode is swallowed into the outcome.
    pub fn capture_page(&self, snapshot: &dyn PageSnapshot) -> ExtractionOutcome {
        if !is_capturable(snapshot.url()) {
            debug!("Skipping ineligible URL: {}", snapshot.url());
            return ExtractionOutcome::SkippedUrl;
        }

        let draft = match self.extract(snapshot) {
            Ok(Some(draft)) => draft,
            Ok(None) => {
                debug!(
                    "Dropping {}: cleaned content below emission gate",
                    snapshot.url()
                );
                return ExtractionOutcome::InsufficientContent;
            }
            Err(e) => {
                debug!("Extraction failed for {}: {}", snapshot.url(), e);
                return ExtractionOutcome::Failed;
            }
        };

        match self.sink.submit(draft) {
            Ok(id) => {
                debug!("Captured {} as {}", snapshot.url(), id);
                ExtractionOutcome::Captured(id)
            }
            Err(e) => {
                // At-most-once: drop, never retry.
                debug!("Submission failed for {}: {}", snapshot.url(), e);
                ExtractionOutcome::Failed
            }
        }
    }

    /// Extract a capture draft from an eligible snapshot
    ///
    /// Returns `Ok(None)` when the page has too little extractable text to
    /// be worth storing.
    pub fn extract(
        &self,
        snapshot: &dyn PageSnapshot,
    ) -> Result<Option<CaptureDraft>, ExtractorError> {
        let content = self.select_content(snapshot)?;
        let content = truncate_content(&content, self.config.max_content_length);

        if content.chars().count() <= self.config.min_content_length {
            return Ok(None);
        }

        let words = word_count(&content);
        let title = snapshot
            .title()?
            .unwrap_or_else(|| UNTITLED_PLACEHOLDER.to_string());

        Ok(Some(CaptureDraft {
            url: snapshot.url().to_string(),
            domain: domain_of(snapshot.url()),
            title,
            timestamp: Utc::now(),
            content,
            word_count: words,
            reading_time: reading_time_minutes(words),
        }))
    }

    /// Ordered-first-match-with-minimum-length selection
    ///
    /// Walks the configured selectors in priority order and returns the
    /// cleaned text of the first one whose content exceeds the relevance
    /// threshold. Priority breaks ties, never text length: an earlier
    /// selector that fails the threshold loses to a later one that passes.
    /// Falls back to the whole body when no selector qualifies.
    fn select_content(&self, snapshot: &dyn PageSnapshot) -> Result<String, ExtractorError> {
        for selector in &self.config.content_selectors {
            if let Some(raw) = snapshot.candidate_text(selector, &self.config.denylist)? {
                let cleaned = normalize_whitespace(&raw);
                if cleaned.chars().count() > self.config.min_candidate_length {
                    debug!("Selected content via '{}'", selector);
                    return Ok(cleaned);
                }
            }
        }

        debug!("No selector qualified, falling back to body");
        Ok(snapshot
            .body_text(&self.config.denylist)?
            .map(|raw| normalize_whitespace(&raw))
            .unwrap_or_default())
    }
}

/// Hostname of a URL, or "unknown" when it has none
fn domain_of(raw_url: &str) -> String {
    Url::parse(raw_url)
        .ok()
        .and_then(|u| u.host_str().map(|h| h.to_string()))
        .unwrap_or_else(|| "unknown".to_string())
}
