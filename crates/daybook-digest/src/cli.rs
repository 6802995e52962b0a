//! CLI argument definitions.

use std::path::PathBuf;

use clap::Parser;

use crate::ollama;

/// Daybook Digest - Summarize a day's captured browsing with a local LLM.
#[derive(Debug, Parser)]
#[command(name = "daybook-digest")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Export JSON file produced by the capture service
    pub input: PathBuf,

    /// Ollama model to use
    #[arg(short, long, default_value = ollama::DEFAULT_MODEL)]
    pub model: String,

    /// Ollama API endpoint
    #[arg(long, default_value = ollama::DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Output markdown file (default: digest-<date>.md)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
