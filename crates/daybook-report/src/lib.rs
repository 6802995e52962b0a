//! Daybook Report Projection
//!
//! Pure, read-only shaping of a day's captures for the UI: per-domain
//! labels, a reverse-chronological top listing, aggregate reading time, and
//! a self-contained HTML report. Everything here is derived from `query`
//! results; this crate holds no state and performs no I/O.

#![warn(missing_docs)]

mod html;
mod icons;
mod summary;

pub use html::render_report;
pub use icons::domain_label;
pub use summary::DaySummary;

/// How many pages the reverse-chronological listing shows at most
pub const TOP_PAGES_LIMIT: usize = 10;

/// How many characters of content the report excerpts per entry
pub const EXCERPT_LENGTH: usize = 500;
