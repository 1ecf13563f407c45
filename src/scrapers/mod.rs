//! News source scrapers.
//!
//! | Source | Module | Method |
//! |--------|--------|--------|
//! | Naver News section listing | [`naver`] | HTML scraping |
//!
//! Each scraper exposes a fetch step returning raw markup and a pure extract
//! step turning that markup into [`crate::models::ArticleRecord`]s, so the
//! extraction can be exercised against recorded pages.

pub mod naver;
