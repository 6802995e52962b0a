//! Daybook Service Layer
//!
//! The request/response surface over the record store. The capture agent and
//! the query surface (UI) never hold the store directly; they exchange typed
//! messages with a [`Dispatcher`] that owns it and serializes every mutation
//! (single-writer semantics: an append's eviction or a clear's filtered
//! delete never interleaves with another mutation).
//!
//! # Architecture
//!
//! ```text
//! Extractor ── SUBMIT_CAPTURE ──▶ Dispatcher ──▶ CaptureStore
//! UI ───── GET_HISTORY / EXPORT_DATA / CLEAR_HISTORY ──▶ Dispatcher
//! ```
//!
//! Store failures propagate exactly one level: the caller receives a
//! structured [`Response::Error`] with a message, never a panic.

#![warn(missing_docs)]

pub mod dispatcher;
pub mod protocol;

pub use dispatcher::Dispatcher;
pub use protocol::{Request, Response};
