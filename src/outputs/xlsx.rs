//! Spreadsheet output.
//!
//! One sheet, a header row of [`COLUMN_LABELS`], then one row per article in
//! collection order. Styling is applied while the cells are written; there
//! is no second pass over the saved file.
//!
//! ```text
//! output_dir/
//! └── naver_news_2026_01_21.xlsx
//! ```
//!
//! A second run on the same day overwrites that day's file.

use crate::errors::Result;
use crate::models::{ArticleRecord, COLUMN_LABELS};
use crate::outputs::style::{COLUMN_WIDTHS, SheetFormats};
use chrono::NaiveDate;
use rust_xlsxwriter::Workbook;
use std::path::Path;
use tracing::{info, instrument};

/// File name for the given local date, e.g. `naver_news_2026_01_21.xlsx`.
pub fn output_file_name(date: NaiveDate) -> String {
    format!("naver_news_{}.xlsx", date.format("%Y_%m_%d"))
}

/// Write `articles` to a spreadsheet at `path`, replacing any existing file.
///
/// Row 0 holds [`COLUMN_LABELS`]; row `n` holds the `n`-th article. When
/// `styled` is set, column widths and [`SheetFormats`] are applied to every
/// cell as it is written.
///
/// # Arguments
///
/// * `articles` - Collected records, in output order
/// * `path` - Destination `.xlsx` file
/// * `styled` - Apply widths, fonts, fills and borders
///
/// # Returns
///
/// `Ok(())` once the workbook is saved, or an error if a cell cannot be
/// written or the file cannot be saved.
#[instrument(level = "info", skip_all, fields(path = %path.display(), count = articles.len(), styled = styled))]
pub fn write_articles(articles: &[ArticleRecord], path: &Path, styled: bool) -> Result<()> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    let formats = styled.then(SheetFormats::new);

    if formats.is_some() {
        for (col, width) in COLUMN_WIDTHS.iter().enumerate() {
            sheet.set_column_width(col as u16, *width)?;
        }
    }

    let rows = std::iter::once(COLUMN_LABELS).chain(articles.iter().map(ArticleRecord::cells));
    for (row, cells) in rows.enumerate() {
        let row = row as u32;
        for (col, value) in cells.into_iter().enumerate() {
            match &formats {
                Some(f) => sheet.write_string_with_format(
                    row,
                    col as u16,
                    value,
                    f.for_cell(row, col, value),
                )?,
                None => sheet.write_string(row, col as u16, value)?,
            };
        }
    }

    workbook.save(path)?;
    info!(styled, "Saved spreadsheet");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NO_SUMMARY;
    use calamine::{Reader, Xlsx, open_workbook};

    fn sample() -> Vec<ArticleRecord> {
        vec![
            ArticleRecord::new("A", Some("s1"), Some("P1"), Some("http://x".into())).unwrap(),
            ArticleRecord::new("C", None, Some("P3"), Some("http://z".into())).unwrap(),
            ArticleRecord::new("D", Some("s4"), None, None).unwrap(),
        ]
    }

    fn read_rows(path: &Path) -> Vec<Vec<String>> {
        let mut workbook: Xlsx<_> = open_workbook(path).unwrap();
        let range = workbook.worksheet_range("Sheet1").unwrap();
        range
            .rows()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_output_file_name() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 21).unwrap();
        assert_eq!(output_file_name(date), "naver_news_2026_01_21.xlsx");
        let date = NaiveDate::from_ymd_opt(2025, 11, 3).unwrap();
        assert_eq!(output_file_name(date), "naver_news_2025_11_03.xlsx");
    }

    #[test]
    fn test_rows_match_records_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.xlsx");
        write_articles(&sample(), &path, true).unwrap();

        let rows = read_rows(&path);
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0], COLUMN_LABELS.map(String::from).to_vec());
        assert_eq!(rows[1], vec!["A", "s1", "P1", "http://x"]);
        assert_eq!(rows[2], vec!["C", NO_SUMMARY, "P3", "http://z"]);
        assert_eq!(rows[3][0], "D");
        assert_eq!(rows[3][3], "");
    }

    #[test]
    fn test_plain_write_has_same_data() {
        let dir = tempfile::tempdir().unwrap();
        let styled = dir.path().join("styled.xlsx");
        let plain = dir.path().join("plain.xlsx");
        write_articles(&sample(), &styled, true).unwrap();
        write_articles(&sample(), &plain, false).unwrap();
        assert_eq!(read_rows(&styled), read_rows(&plain));
    }

    #[test]
    fn test_existing_file_is_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.xlsx");
        write_articles(&sample(), &path, true).unwrap();
        write_articles(&sample()[..1], &path, true).unwrap();
        assert_eq!(read_rows(&path).len(), 2);
    }

    #[test]
    fn test_empty_input_writes_header_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.xlsx");
        write_articles(&[], &path, true).unwrap();
        assert_eq!(read_rows(&path), vec![COLUMN_LABELS.map(String::from).to_vec()]);
    }
}
