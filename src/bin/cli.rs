//! URL Submitter CLI
//!
//! Parses an RSS sitemap and submits the extracted article URLs to the
//! Bing URL Submission and IndexNow APIs. Intended to be invoked as a
//! batch job by an external scheduler.

use std::path::PathBuf;

use clap::Parser;
use submitter::{
    error::Result,
    logging,
    models::{BING_API_KEY_VAR, Config, Credentials, INDEXNOW_API_KEY_VAR},
    pipeline,
    services::{BingSubmitter, IndexNowSubmitter, SitemapParser, Submitter},
    utils::http,
};

/// URL Submitter - RSS sitemap to search engine indexing APIs
#[derive(Parser, Debug)]
#[command(
    name = "submitter",
    version,
    about = "Extracts article URLs from an RSS sitemap and submits them to indexing APIs"
)]
struct Cli {
    /// Path to the RSS sitemap file
    #[arg(short, long, default_value = "sitemap.xml")]
    sitemap: PathBuf,

    /// Path to an optional TOML config file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Mirror log output to this file
    #[arg(short, long)]
    log: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Main entry point for the CLI application.
///
/// Exits non-zero on fatal setup errors; a completed run exits zero even
/// when individual submissions failed.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log.as_deref())?;

    log::info!("URL submitter starting...");

    let config = Config::load_or_default(&cli.config);
    config.validate()?;

    // All fatal setup checks happen before any network call
    let credentials = Credentials::from_env();
    credentials.validate()?;

    let urls = SitemapParser::new(&cli.sitemap).parse()?;

    let client = http::create_client(&config.submitter)?;
    let mut submitters: Vec<Box<dyn Submitter>> = Vec::new();

    match &credentials.bing_api_key {
        Some(key) => submitters.push(Box::new(BingSubmitter::new(
            client.clone(),
            config.endpoints.bing.as_str(),
            key.as_str(),
        ))),
        None => log::warn!("{BING_API_KEY_VAR} not set; skipping Bing submissions"),
    }

    match &credentials.indexnow_api_key {
        Some(key) => submitters.push(Box::new(IndexNowSubmitter::new(
            client,
            config.endpoints.indexnow.as_str(),
            key.as_str(),
        ))),
        None => log::warn!("{INDEXNOW_API_KEY_VAR} not set; skipping IndexNow submissions"),
    }

    pipeline::run_submitter(&urls, &submitters).await?;

    log::info!("Done!");

    Ok(())
}
