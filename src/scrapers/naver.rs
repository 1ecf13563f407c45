//! Naver News section scraper.
//!
//! Fetches a section listing such as
//! [IT/Science](https://news.naver.com/section/105) and pulls one
//! [`ArticleRecord`] out of every `li.sa_item` entry.
//!
//! # Markup
//!
//! ```text
//! li.sa_item
//! ├── a.sa_text_title[href]
//! │   └── strong.sa_text_strong   title
//! ├── div.sa_text_lede            summary
//! └── div.sa_text_press           publisher
//! ```
//!
//! Only the title is mandatory. The selectors track the portal's current page
//! structure and will silently stop matching if that structure changes.

use crate::errors::{ExtractError, Result, ScrapeError};
use crate::models::ArticleRecord;
use once_cell::sync::Lazy;
use reqwest::{Client, StatusCode};
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info, instrument, warn};
use url::Url;

/// IT/Science section listing.
pub const SECTION_URL: &str = "https://news.naver.com/section/105";

/// Desktop Chrome identification; the portal rejects obvious bots.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

static ITEM: Lazy<Selector> = Lazy::new(|| selector("li.sa_item"));
static TITLE: Lazy<Selector> = Lazy::new(|| selector("strong.sa_text_strong"));
static SUMMARY: Lazy<Selector> = Lazy::new(|| selector("div.sa_text_lede"));
static PUBLISHER: Lazy<Selector> = Lazy::new(|| selector("div.sa_text_press"));
static LINK: Lazy<Selector> = Lazy::new(|| selector("a.sa_text_title"));

fn selector(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid selector {css:?}: {e}"))
}

/// Build the HTTP client used for the section fetch.
pub fn build_client(user_agent: &str) -> Result<Client> {
    Ok(Client::builder().user_agent(user_agent).build()?)
}

/// Fetch the section listing and return its markup.
///
/// Issues a single GET; there is no retry.
///
/// # Arguments
///
/// * `client` - Client carrying the browser `User-Agent`, see [`build_client`]
/// * `url` - Section listing to fetch
///
/// # Returns
///
/// The response body on `200 OK`. Any other status is reported as
/// [`ScrapeError::Status`]; transport failures as [`ScrapeError::Http`].
#[instrument(level = "info", skip(client))]
pub async fn fetch_section(client: &Client, url: &str) -> Result<String> {
    info!("Connecting to Naver News");
    let response = client.get(url).send().await?;

    let status = response.status();
    if status != StatusCode::OK {
        return Err(ScrapeError::Status(status.as_u16()));
    }

    let html = response.text().await?;
    debug!(bytes = html.len(), "Fetched section listing");
    Ok(html)
}

/// Extract every article entry from a section listing, in page order.
///
/// Entries without a title are dropped. An entry that fails to extract is
/// logged and dropped; the rest are still collected.
///
/// # Arguments
///
/// * `html` - Markup of the section listing
/// * `base` - URL relative links are resolved against, if any
///
/// # Returns
///
/// One [`ArticleRecord`] per titled `li.sa_item`, in source order.
#[instrument(level = "info", skip_all)]
pub fn extract_articles(html: &str, base: Option<&Url>) -> Vec<ArticleRecord> {
    let document = Html::parse_document(html);
    let items: Vec<ElementRef> = document.select(&ITEM).collect();
    info!(count = items.len(), "Found news list items");

    let mut articles = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        match extract_item(item, base) {
            Ok(Some(article)) => articles.push(article),
            Ok(None) => debug!(index, "List item has no title; skipping"),
            Err(e) => warn!(index, error = %e, "Failed to extract list item; skipping"),
        }
    }

    info!(count = articles.len(), "Collected articles");
    articles
}

fn extract_item(
    item: ElementRef<'_>,
    base: Option<&Url>,
) -> std::result::Result<Option<ArticleRecord>, ExtractError> {
    let Some(title) = first_text(item, &TITLE).filter(|t| !t.trim().is_empty()) else {
        return Ok(None);
    };
    let summary = first_text(item, &SUMMARY);
    let publisher = first_text(item, &PUBLISHER);

    let link = match item.select(&LINK).next() {
        Some(anchor) => {
            let href = anchor
                .value()
                .attr("href")
                .ok_or(ExtractError::MissingHref)?;
            Some(resolve_link(href, base))
        }
        None => None,
    };

    Ok(ArticleRecord::new(
        &title,
        summary.as_deref(),
        publisher.as_deref(),
        link,
    ))
}

fn first_text(item: ElementRef<'_>, selector: &Selector) -> Option<String> {
    item.select(selector)
        .next()
        .map(|el| el.text().collect::<String>())
}

/// Absolute hrefs are kept as written; relative ones are joined onto `base`.
fn resolve_link(href: &str, base: Option<&Url>) -> String {
    let href = href.trim();
    if href.is_empty() {
        return String::new();
    }
    match (Url::parse(href), base) {
        (Err(url::ParseError::RelativeUrlWithoutBase), Some(base)) => base
            .join(href)
            .map(String::from)
            .unwrap_or_else(|_| href.to_string()),
        _ => href.to_string(),
    }
}
