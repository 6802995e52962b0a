//! Text cleaning: whitespace normalization and bounded truncation

use daybook_domain::TRUNCATION_MARKER;

/// Normalize whitespace in extracted text
///
/// Collapses runs of horizontal whitespace to a single space, collapses runs
/// of blank lines to exactly one blank line, and trims leading/trailing
/// whitespace.
pub fn normalize_whitespace(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_blank = false;

    for line in raw.lines() {
        let mut collapsed = String::with_capacity(line.len());
        for token in line.split_whitespace() {
            if !collapsed.is_empty() {
                collapsed.push(' ');
            }
            collapsed.push_str(token);
        }

        if collapsed.is_empty() {
            if !out.is_empty() {
                pending_blank = true;
            }
            continue;
        }

        if !out.is_empty() {
            out.push('\n');
            if pending_blank {
                out.push('\n');
            }
        }
        out.push_str(&collapsed);
        pending_blank = false;
    }

    out
}

/// Truncate text to at most `max_chars` characters, appending the truncation
/// marker when anything was cut
///
/// The marker counts toward the budget, so the result never exceeds
/// `max_chars`.
pub fn truncate_content(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let marker_len = TRUNCATION_MARKER.chars().count();
    let keep = max_chars.saturating_sub(marker_len);
    let head: String = text.chars().take(keep).collect();

    format!("{}{}", head.trim_end(), TRUNCATION_MARKER)
}
