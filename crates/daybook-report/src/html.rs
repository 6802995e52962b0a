//! Self-contained HTML report rendering.
//!
//! Produces a single standalone document listing a day's captures in
//! forward-chronological order, suitable for saving or printing. No
//! external assets; styles are inlined.

use chrono::Local;
use daybook_domain::{day_label, Capture, CaptureDay};

use crate::{domain_label, EXCERPT_LENGTH};

/// Renders a day's captures as a standalone HTML document.
///
/// Entries appear in forward-chronological order regardless of input
/// order. Each entry carries the capture time, title, URL, domain with its
/// category label, reading time, and a content excerpt of at most
/// [`EXCERPT_LENGTH`] characters. All page-derived text is HTML-escaped.
pub fn render_report(day: Option<CaptureDay>, captures: &[Capture]) -> String {
    let mut ordered: Vec<&Capture> = captures.iter().collect();
    ordered.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));

    let label = day_label(day);
    let total_minutes: u32 = captures.iter().map(|c| c.reading_time).sum();

    let mut out = String::with_capacity(2048 + captures.len() * 1024);
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("<meta charset=\"utf-8\">\n");
    out.push_str(&format!(
        "<title>Daybook report - {}</title>\n",
        escape_html(&label)
    ));
    out.push_str(
        "<style>\n\
         body { font-family: system-ui, sans-serif; max-width: 48rem; margin: 2rem auto; color: #222; }\n\
         h1 { font-size: 1.4rem; }\n\
         .meta { color: #666; font-size: 0.85rem; }\n\
         .entry { border-top: 1px solid #ddd; padding: 1rem 0; }\n\
         .entry h2 { font-size: 1.05rem; margin: 0 0 0.25rem; }\n\
         .entry a { color: #1a5fb4; text-decoration: none; word-break: break-all; }\n\
         .excerpt { margin-top: 0.5rem; white-space: pre-wrap; font-size: 0.9rem; }\n\
         </style>\n</head>\n<body>\n",
    );

    out.push_str(&format!("<h1>Daybook - {}</h1>\n", escape_html(&label)));
    out.push_str(&format!(
        "<p class=\"meta\">{} page{}, {} min total reading time</p>\n",
        ordered.len(),
        if ordered.len() == 1 { "" } else { "s" },
        total_minutes
    ));

    for capture in &ordered {
        out.push_str("<div class=\"entry\">\n");
        out.push_str(&format!(
            "<h2>{}</h2>\n",
            escape_html(&capture.title)
        ));
        out.push_str(&format!(
            "<p class=\"meta\">{} · {} ({}) · {} min · <a href=\"{}\">{}</a></p>\n",
            capture.timestamp.with_timezone(&Local).format("%H:%M"),
            escape_html(&capture.domain),
            domain_label(&capture.domain),
            capture.reading_time,
            escape_html(&capture.url),
            escape_html(&capture.url),
        ));
        out.push_str(&format!(
            "<p class=\"excerpt\">{}</p>\n",
            escape_html(&excerpt(&capture.content))
        ));
        out.push_str("</div>\n");
    }

    out.push_str("</body>\n</html>\n");
    out
}

/// First [`EXCERPT_LENGTH`] characters of the content, with an ellipsis
/// when anything was cut.
fn excerpt(content: &str) -> String {
    if content.chars().count() <= EXCERPT_LENGTH {
        return content.to_string();
    }
    let mut cut: String = content.chars().take(EXCERPT_LENGTH).collect();
    cut.push('…');
    cut
}

/// Minimal HTML escaping for page-derived text.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use daybook_domain::{CaptureDraft, CaptureId};

    fn capture(url: &str, title: &str, content: &str, minutes_ago: i64) -> Capture {
        CaptureDraft {
            url: url.to_string(),
            title: title.to_string(),
            domain: "example.com".to_string(),
            timestamp: Utc::now() - Duration::minutes(minutes_ago),
            content: content.to_string(),
            word_count: daybook_domain::word_count(content),
            reading_time: 1,
        }
        .into_capture(CaptureId::new(), Utc::now())
    }

    #[test]
    fn report_is_a_standalone_document() {
        let html = render_report(None, &[]);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<style>"));
        assert!(html.ends_with("</html>\n"));
        assert!(html.contains("0 pages"));
    }

    #[test]
    fn entries_appear_in_forward_chronological_order() {
        let captures = vec![
            capture("https://example.com/b", "Second", "bbb", 10),
            capture("https://example.com/a", "First", "aaa", 60),
            capture("https://example.com/c", "Third", "ccc", 1),
        ];
        let html = render_report(None, &captures);

        let first = html.find("First").unwrap();
        let second = html.find("Second").unwrap();
        let third = html.find("Third").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn page_text_is_escaped() {
        let captures = vec![capture(
            "https://example.com/x?a=1&b=2",
            "<script>alert('x')</script>",
            "a & b < c",
            0,
        )];
        let html = render_report(None, &captures);

        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("a &amp; b &lt; c"));
        assert!(html.contains("a=1&amp;b=2"));
    }

    #[test]
    fn excerpt_cuts_at_limit_with_ellipsis() {
        let long = "x".repeat(EXCERPT_LENGTH + 200);
        let captures = vec![capture("https://example.com/long", "Long", &long, 0)];
        let html = render_report(None, &captures);

        let expected = format!("{}…", "x".repeat(EXCERPT_LENGTH));
        assert!(html.contains(&expected));
        assert!(!html.contains(&"x".repeat(EXCERPT_LENGTH + 1)));
    }

    #[test]
    fn short_content_is_not_marked() {
        assert_eq!(excerpt("short"), "short");
    }

    #[test]
    fn title_carries_the_day_label() {
        let day: CaptureDay = "2026-08-30".parse().unwrap();
        let html = render_report(Some(day), &[]);
        assert!(html.contains("Daybook - 2026-08-30"));

        let all = render_report(None, &[]);
        assert!(all.contains("Daybook - all"));
    }
}
