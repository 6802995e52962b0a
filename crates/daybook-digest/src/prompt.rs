//! Prompt preparation under a token budget.
//!
//! Local models have small context windows, so the browsing log is built
//! page by page in chronological order and cut off once a rough token
//! estimate would blow the budget.

use chrono::Local;
use daybook_domain::{ExportDocument, ExportedPage};

/// Rough token budget for the browsing log portion of the prompt
pub const MAX_PROMPT_TOKENS: usize = 4000;

/// Per-page content cap in characters, applied before budgeting
pub const PAGE_CONTENT_LIMIT: usize = 1000;

/// Rough tokens-per-character estimate for budget accounting
const TOKENS_PER_CHAR: f64 = 0.25;

/// Builds the browsing log section of the prompt.
///
/// Pages are ordered by capture timestamp. Each page contributes at most
/// [`PAGE_CONTENT_LIMIT`] characters of content; once the running token
/// estimate would exceed `max_tokens`, remaining pages are dropped.
pub fn browsing_log(doc: &ExportDocument, max_tokens: usize) -> String {
    let mut pages: Vec<&ExportedPage> = doc.pages.iter().collect();
    pages.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));

    let mut parts: Vec<String> = Vec::new();
    let mut estimated_tokens = 0.0;

    for page in pages {
        let content: String = page.content.chars().take(PAGE_CONTENT_LIMIT).collect();
        let time = page.timestamp.with_timezone(&Local).format("%H:%M");
        let entry = format!(
            "\n---\n[{}] {}\nSource: {}\nContent: {}\n",
            time, page.title, page.domain, content
        );

        let entry_tokens = entry.chars().count() as f64 * TOKENS_PER_CHAR;
        if estimated_tokens + entry_tokens > max_tokens as f64 {
            break;
        }
        parts.push(entry);
        estimated_tokens += entry_tokens;
    }

    parts.join("\n")
}

/// Wraps the browsing log in the digest instruction template.
pub fn digest_prompt(log: &str, date: &str) -> String {
    format!(
        "You are a personal assistant that creates concise daily browsing digests.\n\
         \n\
         Below is a log of web pages visited on {date}. Create a 2-minute reading digest that covers:\n\
         \n\
         1. **Main Themes**: What topics got the most attention? (2-3 bullet points)\n\
         2. **Key Insights**: The most important things learned. (3-5 bullet points)\n\
         3. **Action Items**: Tasks, ideas, or follow-ups worth noting. (if applicable)\n\
         4. **Time Analysis**: A brief observation about the browsing pattern.\n\
         \n\
         Keep it conversational and useful. Skip the fluff.\n\
         \n\
         ---\n\
         BROWSING LOG:\n\
         {log}\n\
         ---\n\
         \n\
         Now write the digest:"
    )
}
