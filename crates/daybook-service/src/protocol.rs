//! Message types for the submission and query interfaces

use daybook_domain::{Capture, CaptureDay, CaptureDraft, CaptureId, ExportDocument};
use serde::{Deserialize, Serialize};

/// A request to the record store service
///
/// The `action` tag matches the names the enclosing transport uses on the
/// wire (`SUBMIT_CAPTURE`, `GET_HISTORY`, `EXPORT_DATA`, `CLEAR_HISTORY`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Request {
    /// Submit a capture draft for insertion (extractor → store)
    SubmitCapture {
        /// The capture payload; `id` and `savedAt` are assigned by the store
        capture: CaptureDraft,
    },

    /// Fetch captures, optionally scoped to a calendar day (UI → store)
    GetHistory {
        /// The day to filter on; absent means everything
        #[serde(default, skip_serializing_if = "Option::is_none")]
        date: Option<CaptureDay>,
    },

    /// Produce the export document for a day, or for everything
    ExportData {
        /// The day to export; absent means everything
        #[serde(default, skip_serializing_if = "Option::is_none")]
        date: Option<CaptureDay>,
    },

    /// Remove captures for a day, or reset the store entirely
    ClearHistory {
        /// The day to clear; absent means a full reset
        #[serde(default, skip_serializing_if = "Option::is_none")]
        date: Option<CaptureDay>,
    },
}

/// A response from the record store service
///
/// Every arm but [`Response::Error`] is a success acknowledgement; failures
/// carry a human-readable message the UI can surface as a transient status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "camelCase")]
pub enum Response {
    /// Capture accepted and stored
    Submitted {
        /// The id the store assigned
        id: CaptureId,
    },

    /// Captures in insertion order
    History {
        /// The matching captures (possibly empty, which is not an error)
        captures: Vec<Capture>,
    },

    /// The export document
    Export {
        /// The projected document
        document: ExportDocument,
    },

    /// Captures removed
    Cleared {
        /// How many captures were removed
        removed: usize,
    },

    /// The operation failed
    Error {
        /// What went wrong
        message: String,
    },
}

impl Response {
    /// Build a failure response
    pub fn error(message: impl Into<String>) -> Self {
        Response::Error {
            message: message.into(),
        }
    }

    /// Whether this response reports a failure
    pub fn is_error(&self) -> bool {
        matches!(self, Response::Error { .. })
    }
}
