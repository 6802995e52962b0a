//! The eligibility gate: which URLs may be captured at all
//!
//! Internal browser surfaces, extension pages, local schemes, and
//! loopback/local hosts are hard-skipped before any document access. A
//! rejection here is a skip, never a retry condition.

use url::Url;

/// Whether a page at this URL is eligible for capture
///
/// Only well-formed `http`/`https` URLs pointing at non-local hosts pass;
/// the allowlist subsumes every internal scheme (`chrome:`,
/// `chrome-extension:`, `about:`, `file:`, `data:`, `blob:` and the rest).
/// Loopback addresses, `localhost`, and any `.local` suffix are rejected.
///
/// # Examples
///
/// ```
/// use daybook_extractor::is_capturable;
///
/// assert!(is_capturable("https://example.com/article"));
/// assert!(!is_capturable("chrome-extension://abc/page"));
/// assert!(!is_capturable("http://localhost:3000"));
/// ```
pub fn is_capturable(raw_url: &str) -> bool {
    let Ok(url) = Url::parse(raw_url) else {
        return false;
    };

    if url.scheme() != "http" && url.scheme() != "https" {
        return false;
    }

    match url.host_str() {
        Some(host) => {
            let host = host.to_ascii_lowercase();
            host != "localhost" && host != "127.0.0.1" && !host.ends_with(".local")
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_internal_and_local_urls() {
        assert!(!is_capturable("chrome-extension://abc/page"));
        assert!(!is_capturable("chrome://settings"));
        assert!(!is_capturable("moz-extension://def/popup.html"));
        assert!(!is_capturable("edge://settings"));
        assert!(!is_capturable("view-source:https://example.com"));
        assert!(!is_capturable("devtools://devtools/bundled/inspector.html"));
        assert!(!is_capturable("about:blank"));
        assert!(!is_capturable("file:///home/user/notes.html"));
        assert!(!is_capturable("data:text/html,<p>hi</p>"));
        assert!(!is_capturable("blob:https://example.com/uuid"));
        assert!(!is_capturable("http://localhost:3000"));
        assert!(!is_capturable("http://127.0.0.1/x"));
        assert!(!is_capturable("http://printer.local/status"));
    }

    #[test]
    fn test_accepts_ordinary_web_pages() {
        assert!(is_capturable("https://example.com/article"));
        assert!(is_capturable("http://news.example.org/2025/01/19/story"));
        assert!(is_capturable("https://sub.domain.example.com/path?q=1"));
    }

    #[test]
    fn test_rejects_malformed_and_exotic() {
        assert!(!is_capturable("not a url"));
        assert!(!is_capturable(""));
        assert!(!is_capturable("ftp://example.com/file"));
    }

    #[test]
    fn test_host_matching_is_case_insensitive() {
        assert!(!is_capturable("http://LOCALHOST:8080"));
        assert!(!is_capturable("http://Printer.LOCAL/"));
    }
}
