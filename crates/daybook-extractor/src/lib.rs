//! Daybook Extractor
//!
//! Converts a loaded web page into a bounded, cleaned [`CaptureDraft`], or
//! declines to emit one.
//!
//! # Overview
//!
//! The extractor is the write-side of Daybook. Once per page view, after a
//! quiet delay, it runs a fixed heuristic pipeline:
//!
//! ```text
//! URL → eligibility gate → main-content selection → cleaning → emission gate → sink
//! ```
//!
//! # Key Features
//!
//! - **Eligibility gate**: internal/extension/local URLs are hard-skipped
//! - **Ordered selector heuristic**: first selector whose text clears the
//!   relevance threshold wins; priority breaks ties, never length
//! - **Cleaning pipeline**: boilerplate denylist removal, whitespace
//!   normalization, bounded truncation with a marker
//! - **Emission gate**: near-empty pages are silently dropped
//! - **Deferred scheduling**: one cancellable capture task per page load
//!
//! Extraction failures never propagate to the hosting page; everything is
//! logged at debug level and swallowed.
//!
//! # Example Usage
//!
//! ```no_run
//! use daybook_extractor::{Extractor, ExtractorConfig, HtmlSnapshot, CaptureSink};
//! use daybook_domain::{CaptureDraft, CaptureId};
//!
//! struct PrintSink;
//!
//! impl CaptureSink for PrintSink {
//!     fn submit(&self, draft: CaptureDraft) -> Result<CaptureId, String> {
//!         println!("captured {} ({} words)", draft.url, draft.word_count);
//!         Ok(CaptureId::new())
//!     }
//! }
//!
//! let extractor = Extractor::new(PrintSink, ExtractorConfig::default());
//! let snapshot = HtmlSnapshot::parse(
//!     "https://example.com/article",
//!     "<html><body><article>...</article></body></html>",
//! );
//! let outcome = extractor.capture_page(&snapshot);
//! println!("{:?}", outcome);
//! ```

#![warn(missing_docs)]

mod config;
mod eligibility;
mod error;
mod extractor;
mod scheduler;
mod snapshot;
mod text;


pub use config::ExtractorConfig;
pub use eligibility::is_capturable;
pub use error::ExtractorError;
pub use extractor::{CaptureSink, ExtractionOutcome, Extractor};
pub use scheduler::CaptureSchedule;
pub use snapshot::{HtmlSnapshot, PageSnapshot};
pub use text::{normalize_whitespace, truncate_content};
