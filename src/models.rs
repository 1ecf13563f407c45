//! Data model for scraped headline entries.
//!
//! - [`ArticleRecord`]: one article entry pulled from a section listing
//! - Placeholder values substituted for optional fields
//! - Column labels used as the spreadsheet header row

/// Summary placeholder used when a list item has no lede element ("no summary").
pub const NO_SUMMARY: &str = "요약 없음";

/// Publisher placeholder used when a list item has no press element ("unknown").
pub const UNKNOWN_PUBLISHER: &str = "알 수 없음";

/// Header labels in output column order: title, summary, publisher, link.
pub const COLUMN_LABELS: [&str; 4] = ["뉴스 제목", "뉴스 내용", "신문사", "링크"];

/// Index of the link column within [`COLUMN_LABELS`].
pub const LINK_COLUMN: usize = 3;

/// A single article entry as listed on a news section page.
///
/// Position in the collected `Vec` is the only identity a record has; it maps
/// one-to-one onto a data row of the output sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleRecord {
    /// Headline text. Never empty.
    pub title: String,
    /// Lede text, or [`NO_SUMMARY`].
    pub summary: String,
    /// Press name, or [`UNKNOWN_PUBLISHER`].
    pub publisher: String,
    /// Article URL, or an empty string when the item carried no anchor.
    pub link: String,
}

impl ArticleRecord {
    /// Build a record, substituting placeholders for missing optional fields.
    ///
    /// Returns `None` when the title is empty after trimming.
    pub fn new(
        title: &str,
        summary: Option<&str>,
        publisher: Option<&str>,
        link: Option<String>,
    ) -> Option<Self> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }
        Some(Self {
            title: title.to_string(),
            summary: summary.map(str::trim).unwrap_or(NO_SUMMARY).to_string(),
            publisher: publisher.map(str::trim).unwrap_or(UNKNOWN_PUBLISHER).to_string(),
            link: link.unwrap_or_default(),
        })
    }

    /// Cell values in [`COLUMN_LABELS`] order.
    pub fn cells(&self) -> [&str; 4] {
        [
            self.title.as_str(),
            self.summary.as_str(),
            self.publisher.as_str(),
            self.link.as_str(),
        ]
    }
}
