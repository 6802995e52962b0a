//! Daybook Domain Layer
//!
//! This crate contains the core domain model for Daybook: the capture record,
//! the calendar-day value type used for retention queries, the stable export
//! contract, and the trait interface every record store implements.
//!
//! ## Key Concepts
//!
//! - **Capture**: one stored record of a page visit's extracted text plus
//!   metadata (url, title, domain, timestamps, reading time)
//! - **CaptureDay**: a calendar day in `YYYY-MM-DD` form; day filtering is
//!   string equality on this value, never timestamp-range arithmetic
//! - **ExportDocument**: the versionless JSON shape consumed by the external
//!   summarization client
//! - **CaptureStore**: the operation contract (append / query / clear /
//!   export) implemented by the storage layer
//!
//! ## Architecture
//!
//! Only fundamental primitives are pulled in here (ids, instants, the serde
//! derive for the export contract). Infrastructure (HTML parsing, SQLite,
//! transports) lives in the other crates and depends on this one.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod capture;
pub mod day;
pub mod export;
pub mod traits;

// Re-exports for convenience
pub use capture::{Capture, CaptureDraft, CaptureId};
pub use day::{day_label, CaptureDay};
pub use export::{ExportDocument, ExportedPage};
pub use traits::CaptureStore;

/// Maximum stored content length in characters. Longer text is truncated and
/// marked with [`TRUNCATION_MARKER`].
pub const MAX_CONTENT_LENGTH: usize = 5000;

/// Maximum number of captures retained by a store. Appending past this cap
/// evicts the oldest entries first (sliding-window retention).
pub const MAX_ENTRIES: usize = 500;

/// Emission gate: cleaned content at or below this length is never submitted.
pub const MIN_CONTENT_LENGTH: usize = 100;

/// Selector relevance threshold: a content candidate qualifies only when its
/// trimmed text exceeds this many characters.
pub const MIN_CANDIDATE_LENGTH: usize = 200;

/// Reading speed used for the reading-time estimate.
pub const WORDS_PER_MINUTE: usize = 200;

/// Quiet delay before extraction fires, letting dynamic content settle.
pub const QUIET_DELAY_MS: u64 = 2000;

/// Suffix appended to content that was cut at [`MAX_CONTENT_LENGTH`].
pub const TRUNCATION_MARKER: &str = "... [truncated]";

/// Title used when a document carries none.
pub const UNTITLED_PLACEHOLDER: &str = "Untitled page";

/// Estimated reading time in whole minutes for a given word count.
///
/// `ceil(word_count / 200)`; at least 1 minute for any non-empty content,
/// 0 only when there are no words at all.
///
/// # Examples
///
/// ```
/// use daybook_domain::reading_time_minutes;
///
/// assert_eq!(reading_time_minutes(0), 0);
/// assert_eq!(reading_time_minutes(1), 1);
/// assert_eq!(reading_time_minutes(200), 1);
/// assert_eq!(reading_time_minutes(201), 2);
/// ```
pub fn reading_time_minutes(word_count: usize) -> u32 {
    word_count.div_ceil(WORDS_PER_MINUTE) as u32
}

/// Count of whitespace-delimited tokens in a text.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
