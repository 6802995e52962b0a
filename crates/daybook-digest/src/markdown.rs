//! Markdown digest output.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use daybook_domain::ExportDocument;

use crate::Result;

/// Wraps the generated digest in a Markdown document with a stats header.
pub fn render_digest(digest: &str, doc: &ExportDocument) -> String {
    let total_reading_time: u32 = doc.pages.iter().map(|p| p.reading_time).sum();

    format!(
        "# Browsing Digest - {date}\n\
         \n\
         **Generated**: {generated}\n\
         **Pages analyzed**: {pages}\n\
         **Estimated reading time**: {minutes} minutes\n\
         \n\
         ---\n\
         \n\
         {digest}\n\
         \n\
         ---\n\
         \n\
         *Generated locally with Ollama. No data left your machine.*\n",
        date = doc.date,
        generated = Local::now().format("%Y-%m-%d %H:%M"),
        pages = doc.total_pages,
        minutes = total_reading_time,
    )
}

/// Default output file name for a digest: `digest-<date>.md`, with the
/// date sanitized for use in a file name.
pub fn default_output_path(date: &str) -> PathBuf {
    let safe: String = date
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect();
    PathBuf::from(format!("digest-{}.md", safe))
}

/// Writes the rendered digest to disk.
pub fn write_digest(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)?;
    Ok(())
}
