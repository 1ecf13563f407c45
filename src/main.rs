//! # Naver News Scrape
//!
//! Collects the headline listing of a Naver News section into a dated,
//! styled spreadsheet for offline review.
//!
//! ## Usage
//!
//! ```sh
//! naver_news_scrape -o ./sheets
//! ```
//!
//! ## Pipeline
//!
//! 1. **Fetching**: one GET of the section page; any status but `200 OK` ends the run
//! 2. **Extracting**: every `li.sa_item` becomes an article record, items without a title are dropped
//! 3. **Output**: records are written to `naver_news_YYYY_MM_DD.xlsx`

use chrono::Local;
use clap::Parser;
use std::error::Error;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};
use url::Url;

mod cli;
mod errors;
mod models;
mod outputs;
mod scrapers;
#[cfg(test)]
mod test_utils;
mod utils;

use cli::Cli;
use errors::Result;
use outputs::xlsx;
use scrapers::naver;
use utils::ensure_writable_dir;

#[tokio::main(flavor = "current_thread")]
async fn main() -> std::result::Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    match run(&args).await {
        Ok(path) => {
            let elapsed = start_time.elapsed();
            info!(path = %path.display(), ?elapsed, "Execution complete");
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "Run aborted; no spreadsheet written");
            Err(e.into())
        }
    }
}

/// Fetch, extract and export once. Returns the written spreadsheet's path.
#[instrument(level = "info", skip_all, fields(url = %args.url))]
async fn run(args: &Cli) -> Result<PathBuf> {
    let output_dir = Path::new(&args.output_dir);
    ensure_writable_dir(output_dir)?;

    let base = Url::parse(&args.url)?;
    let client = naver::build_client(&args.user_agent)?;

    let html = naver::fetch_section(&client, &args.url).await?;

    let articles = naver::extract_articles(&html, Some(&base));

    let path = output_dir.join(xlsx::output_file_name(Local::now().date_naive()));
    info!(path = %path.display(), count = articles.len(), "Saving spreadsheet");
    xlsx::write_articles(&articles, &path, !args.plain)?;

    Ok(path)
}
