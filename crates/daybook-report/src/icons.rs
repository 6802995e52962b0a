//! Domain classification for report entries.
//!
//! Maps a capture's domain to a short category label by substring match
//! against a fixed table. First match wins; unknown domains fall back to
//! a generic label.

/// Fixed domain-fragment to label table, checked in order.
const DOMAIN_LABELS: &[(&str, &str)] = &[
    ("github", "code"),
    ("gitlab", "code"),
    ("stackoverflow", "code"),
    ("youtube", "video"),
    ("vimeo", "video"),
    ("wikipedia", "reference"),
    ("docs.", "docs"),
    ("medium", "article"),
    ("substack", "article"),
    ("reddit", "forum"),
    ("news", "news"),
    ("twitter", "social"),
    ("x.com", "social"),
    ("linkedin", "social"),
    ("mail", "mail"),
];

/// Label used when no table entry matches the domain
pub const DEFAULT_LABEL: &str = "web";

/// Classifies a domain into a short category label.
///
/// Matching is case-insensitive substring containment against the fixed
/// table; the first matching entry wins. Domains with no match get
/// [`DEFAULT_LABEL`].
pub fn domain_label(domain: &str) -> &'static str {
    let lowered = domain.to_ascii_lowercase();
    DOMAIN_LABELS
        .iter()
        .find(|(fragment, _)| lowered.contains(fragment))
        .map(|(_, label)| *label)
        .unwrap_or(DEFAULT_LABEL)
}
