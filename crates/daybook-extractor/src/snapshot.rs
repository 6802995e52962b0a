//! Page snapshot: the capability boundary between the capture heuristic and
//! the DOM
//!
//! The extractor never touches a live document. It works against a
//! [`PageSnapshot`], which exposes exactly the two capabilities the
//! heuristic needs: pull the text of the first element matching a selector,
//! and pull it with a boilerplate denylist excluded. [`HtmlSnapshot`] is the
//! concrete binding, parsing a detached copy of the document with the
//! `scraper` crate so the source page is never mutated.

use crate::error::ExtractorError;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

/// A read-only view of a loaded document
///
/// Implementations must be detached from the live page: extracting text must
/// never mutate or require the original document. Bindings to a live DOM may
/// fail mid-traversal (navigation, teardown); such failures surface as
/// [`ExtractorError::Dom`] and are swallowed by the capture pipeline.
pub trait PageSnapshot {
    /// The document URL
    fn url(&self) -> &str;

    /// The document title, if it has a non-empty one
    fn title(&self) -> Result<Option<String>, ExtractorError>;

    /// Raw text of the first element matching `selector`, with any subtree
    /// matching the denylist excluded
    ///
    /// Returns `Ok(None)` when the selector matches nothing (or is invalid).
    fn candidate_text(
        &self,
        selector: &str,
        denylist: &[String],
    ) -> Result<Option<String>, ExtractorError>;

    /// Raw denylist-excluded text of the whole document body
    fn body_text(&self, denylist: &[String]) -> Result<Option<String>, ExtractorError>;
}

/// Scraper-backed snapshot over a detached HTML parse
pub struct HtmlSnapshot {
    url: String,
    document: Html,
}

impl HtmlSnapshot {
    /// Parse a snapshot from the document source
    pub fn parse(url: impl Into<String>, html: &str) -> Self {
        Self {
            url: url.into(),
            document: Html::parse_document(html),
        }
    }

    /// Compile denylist selectors, skipping any that fail to parse
    fn compile_denylist(denylist: &[String]) -> Vec<Selector> {
        denylist
            .iter()
            .filter_map(|s| match Selector::parse(s) {
                Ok(sel) => Some(sel),
                Err(e) => {
                    debug!("Skipping unparseable denylist selector '{}': {}", s, e);
                    None
                }
            })
            .collect()
    }

    /// Collect the text of `root`'s subtree, excluding every node that sits
    /// under a denylisted element
    ///
    /// A single pass over the subtree; exclusion is order-independent across
    /// the denylist.
    fn text_excluding(root: ElementRef<'_>, denylist: &[Selector]) -> String {
        let root_id = root.id();
        let mut out = String::new();

        for node in root.descendants() {
            let Some(text) = node.value().as_text() else {
                continue;
            };

            let mut excluded = false;
            for ancestor in node.ancestors() {
                if ancestor.id() == root_id {
                    break;
                }
                if let Some(el) = ElementRef::wrap(ancestor) {
                    if denylist.iter().any(|sel| sel.matches(&el)) {
                        excluded = true;
                        break;
                    }
                }
            }

            if !excluded {
                out.push_str(text);
                // Keep a line boundary between text nodes so adjacent
                // elements don't run together after normalization.
                out.push('\n');
            }
        }

        out
    }

    fn first_match_text(&self, selector: &str, denylist: &[Selector]) -> Option<String> {
        let sel = match Selector::parse(selector) {
            Ok(sel) => sel,
            Err(e) => {
                debug!("Unparseable content selector '{}': {}", selector, e);
                return None;
            }
        };

        self.document
            .select(&sel)
            .next()
            .map(|el| Self::text_excluding(el, denylist))
    }
}

impl PageSnapshot for HtmlSnapshot {
    fn url(&self) -> &str {
        &self.url
    }

    // A detached parse can't fail mid-traversal, so these are always Ok.

    fn title(&self) -> Result<Option<String>, ExtractorError> {
        let Ok(sel) = Selector::parse("title") else {
            return Ok(None);
        };
        let title = self
            .document
            .select(&sel)
            .next()
            .map(|el| el.text().collect::<String>())
            .unwrap_or_default();
        let title = title.trim();
        Ok(if title.is_empty() {
            None
        } else {
            Some(title.to_string())
        })
    }

    fn candidate_text(
        &self,
        selector: &str,
        denylist: &[String],
    ) -> Result<Option<String>, ExtractorError> {
        let compiled = Self::compile_denylist(denylist);
        Ok(self.first_match_text(selector, &compiled))
    }

    fn body_text(&self, denylist: &[String]) -> Result<Option<String>, ExtractorError> {
        let compiled = Self::compile_denylist(denylist);
        Ok(self.first_match_text("body", &compiled))
    }
}
