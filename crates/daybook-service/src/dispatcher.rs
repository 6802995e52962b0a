//! Request dispatch over an exclusively-owned capture store

use crate::protocol::{Request, Response};
use daybook_domain::traits::CaptureStore;
use daybook_domain::{CaptureDraft, CaptureId};
use daybook_extractor::CaptureSink;
use std::fmt::Display;
use std::sync::{Arc, Mutex};
use tracing::{debug, warn};

/// Owns the capture store and serializes access to it
///
/// All mutations go through one mutex, which is the single-writer discipline
/// the retention policy needs; reads take the same lock and therefore always
/// observe a consistent snapshot, never a sequence mid-eviction. The lock is
/// held only for the duration of one store operation, with no await points
/// while holding it.
pub struct Dispatcher<S> {
    store: Arc<Mutex<S>>,
}

impl<S> Clone for Dispatcher<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S> Dispatcher<S>
where
    S: CaptureStore,
    S::Error: Display,
{
    /// Take exclusive ownership of a store
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Handle one request, producing a structured response
    ///
    /// Store failures come back as [`Response::Error`]; nothing here panics
    /// the caller.
    pub async fn handle(&self, request: Request) -> Response {
        debug!("Handling {:?}", request_name(&request));

        match request {
            Request::SubmitCapture { capture } => self.submit_capture(capture),
            Request::GetHistory { date } => {
                let store = match self.store.lock() {
                    Ok(guard) => guard,
                    Err(_) => return Response::error("store lock poisoned"),
                };
                match store.query(date) {
                    Ok(captures) => Response::History { captures },
                    Err(e) => {
                        warn!("Query failed: {}", e);
                        Response::error(e.to_string())
                    }
                }
            }
            Request::ExportData { date } => {
                let store = match self.store.lock() {
                    Ok(guard) => guard,
                    Err(_) => return Response::error("store lock poisoned"),
                };
                match store.export(date) {
                    Ok(document) => Response::Export { document },
                    Err(e) => {
                        warn!("Export failed: {}", e);
                        Response::error(e.to_string())
                    }
                }
            }
            Request::ClearHistory { date } => {
                let mut store = match self.store.lock() {
                    Ok(guard) => guard,
                    Err(_) => return Response::error("store lock poisoned"),
                };
                match store.clear(date) {
                    Ok(removed) => Response::Cleared { removed },
                    Err(e) => {
                        warn!("Clear failed: {}", e);
                        Response::error(e.to_string())
                    }
                }
            }
        }
    }

    /// Handle a JSON-encoded request line, producing a JSON-encoded response
    ///
    /// Convenience for line-delimited transports; malformed requests come
    /// back as error responses rather than transport failures.
    pub async fn handle_json(&self, line: &str) -> String {
        let response = match serde_json::from_str::<Request>(line) {
            Ok(request) => self.handle(request).await,
            Err(e) => {
                warn!("Unparseable request: {}", e);
                Response::error(format!("invalid request: {}", e))
            }
        };

        // Response serialization has no failing inputs; fall back to a
        // hand-built error object all the same.
        serde_json::to_string(&response)
            .unwrap_or_else(|e| format!(r#"{{"result":"error","message":"{}"}}"#, e))
    }

    fn submit_capture(&self, draft: CaptureDraft) -> Response {
        let mut store = match self.store.lock() {
            Ok(guard) => guard,
            Err(_) => return Response::error("store lock poisoned"),
        };
        match store.append(draft) {
            Ok(id) => Response::Submitted { id },
            Err(e) => {
                warn!("Append failed: {}", e);
                Response::error(e.to_string())
            }
        }
    }
}

/// The submission interface: the extractor submits through the same surface
/// the UI reads from, so every mutation funnels through one lock.
impl<S> CaptureSink for Dispatcher<S>
where
    S: CaptureStore,
    S::Error: Display,
{
    fn submit(&self, draft: CaptureDraft) -> Result<CaptureId, String> {
        match self.submit_capture(draft) {
            Response::Submitted { id } => Ok(id),
            Response::Error { message } => Err(message),
            other => Err(format!("unexpected response: {:?}", other)),
        }
    }
}

fn request_name(request: &Request) -> &'static str {
    match request {
        Request::SubmitCapture { .. } => "SUBMIT_CAPTURE",
        Request::GetHistory { .. } => "GET_HISTORY",
        Request::ExportData { .. } => "EXPORT_DATA",
        Request::ClearHistory { .. } => "CLEAR_HISTORY",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use daybook_store::SqliteStore;

    fn draft(url: &str) -> CaptureDraft {
        CaptureDraft {
            url: url.to_string(),
            title: "A page".to_string(),
            domain: "example.com".to_string(),
            timestamp: Utc::now(),
            content: "Enough cleaned text to be worth keeping around.".to_string(),
            word_count: 8,
            reading_time: 1,
        }
    }

    fn dispatcher() -> Dispatcher<SqliteStore> {
        Dispatcher::new(SqliteStore::new(":memory:").unwrap())
    }

    #[tokio::test]
    async fn test_submit_then_history_round_trip() {
        let dispatcher = dispatcher();

        let resp = dispatcher
            .handle(Request::SubmitCapture {
                capture: draft("https://example.com/a"),
            })
            .await;
        assert!(matches!(resp, Response::Submitted { .. }));

        let resp = dispatcher.handle(Request::GetHistory { date: None }).await;
        match resp {
            Response::History { captures } => {
                assert_eq!(captures.len(), 1);
                assert_eq!(captures[0].url, "https://example.com/a");
            }
            other => panic!("unexpected response: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_export_matches_history() {
        let dispatcher = dispatcher();
        for i in 0..3 {
            dispatcher
                .handle(Request::SubmitCapture {
                    capture: draft(&format!("https://example.com/{}", i)),
                })
                .await;
        }

        let resp = dispatcher.handle(Request::ExportData { date: None }).await;
        match resp {
            Response::Export { document } => {
                assert_eq!(document.total_pages, 3);
                assert_eq!(document.date, "all");
            }
            other => panic!("unexpected response: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_clear_acknowledges_removed_count() {
        let dispatcher = dispatcher();
        for i in 0..2 {
            dispatcher
                .handle(Request::SubmitCapture {
                    capture: draft(&format!("https://example.com/{}", i)),
                })
                .await;
        }

        let resp = dispatcher.handle(Request::ClearHistory { date: None }).await;
        assert_eq!(resp, Response::Cleared { removed: 2 });

        let resp = dispatcher.handle(Request::GetHistory { date: None }).await;
        assert_eq!(resp, Response::History { captures: vec![] });
    }

    #[tokio::test]
    async fn test_sink_submission_goes_through_dispatcher() {
        let dispatcher = dispatcher();

        let id = dispatcher.submit(draft("https://example.com/sink")).unwrap();

        let resp = dispatcher.handle(Request::GetHistory { date: None }).await;
        match resp {
            Response::History { captures } => {
                assert_eq!(captures.len(), 1);
                assert_eq!(captures[0].id, id);
            }
            other => panic!("unexpected response: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_malformed_json_is_an_error_response() {
        let dispatcher = dispatcher();

        let raw = dispatcher.handle_json("{not json").await;
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["result"], "error");
    }

    #[tokio::test]
    async fn test_json_round_trip() {
        let dispatcher = dispatcher();

        let raw = dispatcher
            .handle_json(r#"{"action":"GET_HISTORY"}"#)
            .await;
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["result"], "history");
        assert_eq!(value["captures"].as_array().unwrap().len(), 0);
    }

    /// Store whose persistence layer is always unreachable
    struct UnavailableStore;

    impl CaptureStore for UnavailableStore {
        type Error = String;

        fn append(&mut self, _draft: CaptureDraft) -> Result<CaptureId, Self::Error> {
            Err("Storage unavailable: disk offline".to_string())
        }

        fn query(
            &self,
            _day: Option<daybook_domain::CaptureDay>,
        ) -> Result<Vec<daybook_domain::Capture>, Self::Error> {
            Err("Storage unavailable: disk offline".to_string())
        }

        fn clear(
            &mut self,
            _day: Option<daybook_domain::CaptureDay>,
        ) -> Result<usize, Self::Error> {
            Err("Storage unavailable: disk offline".to_string())
        }
    }

    #[tokio::test]
    async fn test_store_failure_surfaces_as_structured_error() {
        let dispatcher = Dispatcher::new(UnavailableStore);

        let resp = dispatcher
            .handle(Request::SubmitCapture {
                capture: draft("https://example.com/x"),
            })
            .await;
        match resp {
            Response::Error { message } => assert!(message.contains("Storage unavailable")),
            other => panic!("unexpected response: {:?}", other),
        }

        let resp = dispatcher.handle(Request::GetHistory { date: None }).await;
        assert!(resp.is_error());
    }
}
