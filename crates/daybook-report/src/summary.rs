//! Day summary projection.
//!
//! Shapes a day's captures into what the popup-style view needs: the most
//! recent pages first, capped, plus aggregate counts.

use daybook_domain::Capture;

use crate::TOP_PAGES_LIMIT;

/// Aggregated view of one day's captures
#[derive(Debug, Clone, PartialEq)]
pub struct DaySummary {
    /// The most recent captures, newest first, at most [`TOP_PAGES_LIMIT`]
    pub top_pages: Vec<Capture>,

    /// Total number of captures for the day (before the top-N cap)
    pub total_pages: usize,

    /// Sum of estimated reading time across all captures, in minutes
    pub total_reading_time: u32,
}

impl DaySummary {
    /// Build a summary from a day's captures.
    ///
    /// Input order does not matter; the listing is sorted by capture
    /// timestamp, newest first, and truncated to [`TOP_PAGES_LIMIT`].
    /// Aggregates cover every capture, not just the listed ones.
    pub fn from_captures(captures: &[Capture]) -> Self {
        let total_pages = captures.len();
        let total_reading_time = captures.iter().map(|c| c.reading_time).sum();

        let mut top_pages: Vec<Capture> = captures.to_vec();
        top_pages.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        top_pages.truncate(TOP_PAGES_LIMIT);

        Self {
            top_pages,
            total_pages,
            total_reading_time,
        }
    }
}
