//! Daybook Digest - Main entry point

use clap::Parser;
use daybook_digest::{input, markdown, prompt, Cli, DigestError, OllamaClient};
use tracing::{info, Level};

#[tokio::main]
async fn main() {
    // Log to stderr so the digest preview stays clean on stdout
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(Level::INFO)
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> daybook_digest::Result<()> {
    let cli = Cli::parse();

    info!(input = %cli.input.display(), "loading export");
    let doc = input::load_export(&cli.input)?;
    if doc.pages.is_empty() {
        return Err(DigestError::EmptyExport);
    }

    let total_reading_time: u32 = doc.pages.iter().map(|p| p.reading_time).sum();
    info!(
        pages = doc.total_pages,
        reading_minutes = total_reading_time,
        date = %doc.date,
        "export loaded"
    );

    let log = prompt::browsing_log(&doc, prompt::MAX_PROMPT_TOKENS);
    if log.is_empty() {
        return Err(DigestError::EmptyExport);
    }

    let client = OllamaClient::new(&cli.endpoint, &cli.model)?;
    info!(model = client.model(), "generating digest, this can take a minute");
    let digest = client.generate(&prompt::digest_prompt(&log, &doc.date)).await?;

    let output_path = cli
        .output
        .unwrap_or_else(|| markdown::default_output_path(&doc.date));
    markdown::write_digest(&output_path, &markdown::render_digest(&digest, &doc))?;
    info!(output = %output_path.display(), "digest written");

    println!("{}", digest);
    Ok(())
}
