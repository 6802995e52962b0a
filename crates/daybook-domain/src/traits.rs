//! Trait definitions for external interactions
//!
//! These traits define the boundary between domain logic and infrastructure.
//! The storage implementation lives in `daybook-store`; the extractor
//! submits through whatever sink the hosting environment wires up.

use crate::capture::{Capture, CaptureDraft, CaptureId};
use crate::day::CaptureDay;
use crate::export::ExportDocument;

/// Trait for the bounded, ordered capture store
///
/// Implementations own the persisted sequence exclusively; callers interact
/// only through these operations. Mutating operations must be atomic with
/// respect to the persisted store: an `append`'s eviction or a `clear`'s
/// date-filtered delete never interleaves with another mutation.
pub trait CaptureStore {
    /// Error type for store operations
    type Error;

    /// Insert a capture at the end of the sequence
    ///
    /// Assigns `id` and `saved_at`, then applies the retention cap: when the
    /// sequence exceeds [`crate::MAX_ENTRIES`], the oldest entries are
    /// dropped first.
    fn append(&mut self, draft: CaptureDraft) -> Result<CaptureId, Self::Error>;

    /// Return captures in insertion order
    ///
    /// With a day, only captures whose stored calendar day equals it; with
    /// `None`, everything. An empty result is a valid response, not an error.
    fn query(&self, day: Option<CaptureDay>) -> Result<Vec<Capture>, Self::Error>;

    /// Remove captures, returning how many were removed
    ///
    /// With a day, removes exactly the matching captures and preserves the
    /// relative order of the remainder; with `None`, empties the store.
    fn clear(&mut self, day: Option<CaptureDay>) -> Result<usize, Self::Error>;

    /// Produce the external export document for a day (or for everything)
    ///
    /// Runs [`CaptureStore::query`] and projects the result into the stable
    /// contract shape.
    fn export(&self, day: Option<CaptureDay>) -> Result<ExportDocument, Self::Error> {
        let captures = self.query(day)?;
        Ok(ExportDocument::new(day, &captures))
    }
}
