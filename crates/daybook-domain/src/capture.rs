//! Capture module - the unit record of Daybook's browsing memory

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a capture, backed by UUIDv7
///
/// UUIDv7 provides:
/// - Chronological sortability for temporal queries
/// - 128-bit uniqueness without coordination
/// - RFC 9562-standard string form with broad ecosystem support
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct CaptureId(uuid::Uuid);

impl CaptureId {
    /// Generate a new UUIDv7-based CaptureId
    ///
    /// # Examples
    ///
    /// ```
    /// use daybook_domain::CaptureId;
    ///
    /// let id = CaptureId::new();
    /// assert_eq!(id.to_string().len(), 36);
    /// ```
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7())
    }

    /// Parse a CaptureId from its string form
    ///
    /// This is primarily for storage layer deserialization.
    pub fn from_string(s: &str) -> Result<Self, String> {
        uuid::Uuid::parse_str(s)
            .map(Self)
            .map_err(|e| format!("Invalid capture id: {}", e))
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> uuid::Uuid {
        self.0
    }
}

impl Default for CaptureId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CaptureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One stored record of a page visit's extracted content and metadata
///
/// Captures are immutable once stored; `id` and `saved_at` are assigned by
/// the store at insertion and never travel over the submission interface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Capture {
    /// Unique identifier, assigned at insertion
    pub id: CaptureId,

    /// Full page URL
    pub url: String,

    /// Document title ([`crate::UNTITLED_PLACEHOLDER`] when absent)
    pub title: String,

    /// Hostname the page was served from
    pub domain: String,

    /// When the content was captured on the page
    pub timestamp: DateTime<Utc>,

    /// When the record was inserted into the store (distinct from `timestamp`)
    pub saved_at: DateTime<Utc>,

    /// Cleaned text, at most [`crate::MAX_CONTENT_LENGTH`] characters
    pub content: String,

    /// Whitespace-delimited token count of `content`
    pub word_count: usize,

    /// Estimated reading time in minutes, `ceil(word_count / 200)`, min 1
    /// for non-empty content
    pub reading_time: u32,
}

/// A capture as submitted by the extractor, before the store assigns
/// `id` and `saved_at`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptureDraft {
    /// Full page URL
    pub url: String,

    /// Document title, placeholder already applied
    pub title: String,

    /// Hostname the page was served from
    pub domain: String,

    /// When the content was captured
    pub timestamp: DateTime<Utc>,

    /// Cleaned, bounded text
    pub content: String,

    /// Whitespace-delimited token count of `content`
    pub word_count: usize,

    /// Estimated reading time in minutes
    pub reading_time: u32,
}

impl CaptureDraft {
    /// Promote a draft to a full capture with store-assigned fields
    pub fn into_capture(self, id: CaptureId, saved_at: DateTime<Utc>) -> Capture {
        Capture {
            id,
            url: self.url,
            title: self.title,
            domain: self.domain,
            timestamp: self.timestamp,
            saved_at,
            content: self.content,
            word_count: self.word_count,
            reading_time: self.reading_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_id_display_and_parse() {
        let id = CaptureId::new();
        let id_str = id.to_string();

        // UUID strings are 36 characters (8-4-4-4-12 with hyphens)
        assert_eq!(id_str.len(), 36);

        let parsed = CaptureId::from_string(&id_str).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_capture_id_invalid_string() {
        assert!(CaptureId::from_string("not-a-valid-uuid").is_err());
        assert!(CaptureId::from_string("").is_err());
    }

    #[test]
    fn test_capture_id_chronological() {
        let id1 = CaptureId::new();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let id2 = CaptureId::new();

        assert!(id1 < id2, "Earlier UUIDv7 should sort before later UUIDv7");
    }

    #[test]
    fn test_draft_promotion_preserves_fields() {
        let draft = CaptureDraft {
            url: "https://example.com/article".to_string(),
            title: "Example".to_string(),
            domain: "example.com".to_string(),
            timestamp: Utc::now(),
            content: "Some cleaned content".to_string(),
            word_count: 3,
            reading_time: 1,
        };

        let id = CaptureId::new();
        let saved_at = Utc::now();
        let capture = draft.clone().into_capture(id, saved_at);

        assert_eq!(capture.id, id);
        assert_eq!(capture.saved_at, saved_at);
        assert_eq!(capture.url, draft.url);
        assert_eq!(capture.content, draft.content);
        assert_eq!(capture.word_count, draft.word_count);
    }
}
