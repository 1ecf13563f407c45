//! Error types for the scrape pipeline.
//!
//! [`ScrapeError`] covers everything that aborts a run. [`ExtractError`] is
//! confined to a single list item and never leaves the extractor.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("unexpected HTTP status: {0}")]
    Status(u16),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("spreadsheet error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ExtractError {
    #[error("link anchor has no href attribute")]
    MissingHref,
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
