//! The export document: a stable, versionless JSON contract
//!
//! The exported shape is consumed by an external summarization client, so
//! field names are pinned exactly (`exportedAt`, `totalPages`, `readingTime`,
//! ...) and the internal fields `id` and `saved_at` are never serialized.

use crate::capture::Capture;
use crate::day::{day_label, CaptureDay};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The public projection of a single capture
///
/// Identical to [`Capture`] minus the store-internal fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportedPage {
    /// Full page URL
    pub url: String,
    /// Document title
    pub title: String,
    /// Cleaned, bounded text
    pub content: String,
    /// When the content was captured
    pub timestamp: DateTime<Utc>,
    /// Hostname the page was served from
    pub domain: String,
    /// Estimated reading time in minutes
    #[serde(rename = "readingTime")]
    pub reading_time: u32,
}

impl From<&Capture> for ExportedPage {
    fn from(capture: &Capture) -> Self {
        Self {
            url: capture.url.clone(),
            title: capture.title.clone(),
            content: capture.content.clone(),
            timestamp: capture.timestamp,
            domain: capture.domain.clone(),
            reading_time: capture.reading_time,
        }
    }
}

/// A day-scoped (or full) export of the record store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportDocument {
    /// When the export was produced
    #[serde(rename = "exportedAt")]
    pub exported_at: DateTime<Utc>,
    /// The requested day, or `"all"` when no day was given
    pub date: String,
    /// Number of exported pages
    #[serde(rename = "totalPages")]
    pub total_pages: usize,
    /// The exported captures, in stored order
    pub pages: Vec<ExportedPage>,
}

impl ExportDocument {
    /// Project a queried capture set into the export shape
    pub fn new(day: Option<CaptureDay>, captures: &[Capture]) -> Self {
        let pages: Vec<ExportedPage> = captures.iter().map(ExportedPage::from).collect();
        Self {
            exported_at: Utc::now(),
            date: day_label(day),
            total_pages: pages.len(),
            pages,
        }
    }
}
