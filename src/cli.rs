//! Command-line interface definitions.
//!
//! Every option has a default matching the fixed Naver News IT/Science setup
//! and can also be supplied through an environment variable.

use crate::scrapers::naver::{BROWSER_USER_AGENT, SECTION_URL};
use clap::Parser;

/// Command-line arguments for a single scrape run.
///
/// # Examples
///
/// ```sh
/// # Scrape IT/Science into the current directory
/// naver_news_scrape
///
/// # Write an unstyled sheet into ./out
/// naver_news_scrape -o ./out --plain
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Section listing page to scrape
    #[arg(short, long, env = "NAVER_NEWS_URL", default_value = SECTION_URL)]
    pub url: String,

    /// Directory the dated spreadsheet is written into
    #[arg(short, long, env = "NAVER_NEWS_OUTPUT_DIR", default_value = ".")]
    pub output_dir: String,

    /// User-Agent header sent with the request
    #[arg(long, env = "NAVER_NEWS_USER_AGENT", default_value = BROWSER_USER_AGENT)]
    pub user_agent: String,

    /// Skip column widths, fonts and borders
    #[arg(long)]
    pub plain: bool,
}
