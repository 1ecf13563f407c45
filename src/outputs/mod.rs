//! Output generation.
//!
//! - [`xlsx`]: writes collected articles to the dated spreadsheet
//! - [`style`]: column widths and cell formats applied during that write

pub mod style;
pub mod xlsx;
