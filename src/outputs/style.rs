//! Cosmetic formatting for the article sheet.
//!
//! Styles are described as plain [`CellStyle`] values and only turned into a
//! [`rust_xlsxwriter::Format`] at write time.

use crate::models::LINK_COLUMN;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, FormatUnderline};

/// Widths for title, summary, publisher and link columns.
pub const COLUMN_WIDTHS: [f64; 4] = [50.0, 80.0, 15.0, 50.0];

const HEADER_FILL: u32 = 0x4472C4;
const HEADER_FONT: u32 = 0xFFFFFF;
const LINK_FONT: u32 = 0x0563C1;

/// Look of a single cell. Every cell is also vertically centered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    /// Bold font.
    pub bold: bool,
    /// Font colour as `0xRRGGBB`; `None` keeps the default black.
    pub font_color: Option<u32>,
    /// Solid background fill.
    pub fill: Option<u32>,
    /// Single underline.
    pub underline: bool,
    pub center_horizontal: bool,
    /// Wrap long text within the column width.
    pub wrap: bool,
    /// Thin border on all four sides.
    pub thin_border: bool,
}

impl CellStyle {
    pub fn header() -> Self {
        Self {
            bold: true,
            font_color: Some(HEADER_FONT),
            fill: Some(HEADER_FILL),
            underline: false,
            center_horizontal: true,
            wrap: false,
            thin_border: true,
        }
    }

    pub fn data() -> Self {
        Self {
            bold: false,
            font_color: None,
            fill: None,
            underline: false,
            center_horizontal: true,
            wrap: true,
            thin_border: true,
        }
    }

    pub fn link() -> Self {
        Self {
            font_color: Some(LINK_FONT),
            underline: true,
            ..Self::data()
        }
    }

    /// Style for a data cell. Only non-empty link values get the link font.
    pub fn for_data_cell(column: usize, value: &str) -> Self {
        if column == LINK_COLUMN && !value.is_empty() {
            Self::link()
        } else {
            Self::data()
        }
    }

    pub fn to_format(self) -> Format {
        let mut format = Format::new().set_align(FormatAlign::VerticalCenter);
        if self.bold {
            format = format.set_bold();
        }
        if let Some(rgb) = self.font_color {
            format = format.set_font_color(Color::RGB(rgb));
        }
        if let Some(rgb) = self.fill {
            format = format
                .set_pattern(FormatPattern::Solid)
                .set_background_color(Color::RGB(rgb));
        }
        if self.underline {
            format = format.set_underline(FormatUnderline::Single);
        }
        if self.center_horizontal {
            format = format.set_align(FormatAlign::Center);
        }
        if self.wrap {
            format = format.set_text_wrap();
        }
        if self.thin_border {
            format = format.set_border(FormatBorder::Thin);
        }
        format
    }
}

/// Prebuilt formats for one sheet.
pub struct SheetFormats {
    pub header: Format,
    pub data: Format,
    pub link: Format,
}

impl SheetFormats {
    pub fn new() -> Self {
        Self {
            header: CellStyle::header().to_format(),
            data: CellStyle::data().to_format(),
            link: CellStyle::link().to_format(),
        }
    }

    /// Format for the cell at `row`, `column`. Row 0 is the header row.
    pub fn for_cell(&self, row: u32, column: usize, value: &str) -> &Format {
        if row == 0 {
            &self.header
        } else if CellStyle::for_data_cell(column, value).underline {
            &self.link
        } else {
            &self.data
        }
    }
}
