//! Deferred, cancellable capture scheduling
//!
//! Each page load gets exactly one scheduled capture: a task that waits out
//! the quiet delay, takes a snapshot, and runs the pipeline. The schedule is
//! bound to the document's lifetime: cancelling it on unload guarantees the
//! snapshot closure is never invoked against a destroyed document. There is
//! no retry and no queueing; a cancelled or failed capture simply never
//! happened.

use crate::extractor::{CaptureSink, ExtractionOutcome, Extractor};
use crate::snapshot::PageSnapshot;
use std::sync::Arc;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::debug;

/// Handle to a pending one-shot capture
///
/// Dropping the handle without cancelling detaches the task (it still fires
/// after the quiet delay). Call [`CaptureSchedule::cancel`] on page unload.
pub struct CaptureSchedule {
    cancel: Option<oneshot::Sender<()>>,
    handle: JoinHandle<Option<ExtractionOutcome>>,
}

impl CaptureSchedule {
    /// Cancel the pending capture; a no-op once it has fired
    pub fn cancel(&mut self) {
        if let Some(tx) = self.cancel.take() {
            let _ = tx.send(());
        }
    }

    /// Wait for the task to finish, yielding the outcome (or `None` when the
    /// capture was cancelled or the document was gone)
    pub async fn finished(self) -> Option<ExtractionOutcome> {
        self.handle.await.unwrap_or(None)
    }
}

impl<S> Extractor<S>
where
    S: CaptureSink + Send + Sync + 'static,
{
    /// Schedule a one-shot capture after the configured quiet delay
    ///
    /// `snapshot_fn` is invoked once, after the delay, and only if the
    /// schedule wasn't cancelled; it returns `None` when the document is no
    /// longer available, which ends the task quietly.
    pub fn schedule_capture<P, F>(self: &Arc<Self>, snapshot_fn: F) -> CaptureSchedule
    where
        P: PageSnapshot,
        F: FnOnce() -> Option<P> + Send + 'static,
    {
        let (tx, rx) = oneshot::channel::<()>();
        let delay = self.config().quiet_delay();
        let extractor = Arc::clone(self);

        let handle = tokio::spawn(async move {
            // A dropped sender means the schedule handle went away without
            // an explicit cancel; the capture still fires.
            let cancelled = async move {
                match rx.await {
                    Ok(()) => (),
                    Err(_) => std::future::pending::<()>().await,
                }
            };

            tokio::select! {
                _ = cancelled => {
                    debug!("Capture cancelled before quiet delay elapsed");
                    None
                }
                _ = tokio::time::sleep(delay) => {
                    match snapshot_fn() {
                        Some(snapshot) => Some(extractor.capture_page(&snapshot)),
                        None => {
                            debug!("Document unavailable when capture fired");
                            None
                        }
                    }
                }
            }
        });

        CaptureSchedule {
            cancel: Some(tx),
            handle,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::ExtractorConfig;
    use crate::extractor::{ExtractionOutcome, Extractor};
    use crate::snapshot::HtmlSnapshot;
    use crate::tests::MockSink;
    use std::sync::Arc;

    fn article_page() -> String {
        format!(
            "<html><head><title>Scheduled</title></head><body><article><p>{}</p></article></body></html>",
            "Plenty of real article text here. ".repeat(30)
        )
    }

    #[tokio::test(start_paused = true)]
    async fn test_capture_fires_after_quiet_delay() {
        let sink = MockSink::new();
        let drafts = sink.drafts();
        let extractor = Arc::new(Extractor::new(sink, ExtractorConfig::default()));

        let html = article_page();
        let schedule = extractor
            .schedule_capture(move || Some(HtmlSnapshot::parse("https://example.com/a", &html)));

        let outcome = schedule.finished().await;
        assert!(matches!(outcome, Some(ExtractionOutcome::Captured(_))));
        assert_eq!(drafts.lock().unwrap().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_before_delay_suppresses_capture() {
        let sink = MockSink::new();
        let drafts = sink.drafts();
        let extractor = Arc::new(Extractor::new(sink, ExtractorConfig::default()));

        let html = article_page();
        let mut schedule = extractor
            .schedule_capture(move || Some(HtmlSnapshot::parse("https://example.com/a", &html)));

        schedule.cancel();

        let outcome = schedule.finished().await;
        assert_eq!(outcome, None);
        assert!(drafts.lock().unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_unloaded_document_never_captured() {
        let sink = MockSink::new();
        let drafts = sink.drafts();
        let extractor = Arc::new(Extractor::new(sink, ExtractorConfig::default()));

        // Snapshot source is gone by the time the delay elapses.
        let schedule = extractor.schedule_capture(|| None::<HtmlSnapshot>);

        let outcome = schedule.finished().await;
        assert_eq!(outcome, None);
        assert!(drafts.lock().unwrap().is_empty());
    }
}
