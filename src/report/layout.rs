//! Report geometry and pagination.
//!
//! Everything here works in layout units (millimetres by default) measured
//! from the top-left corner of the page. The renderer converts to PDF points.

use crate::config::ReportConfig;
use crate::error::Result;
use crate::text::RankedEntry;
use std::ops::Range;

/// PDF points per millimetre.
pub const POINTS_PER_MM: f32 = 72.0 / 25.4;

/// Horizontal padding between a cell border and its text.
pub const CELL_PADDING: f32 = 1.0;

/// One row of the report table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow<'a> {
    /// The word
    pub word: &'a str,
    /// Text of the count cell, e.g. `(12)`
    pub count_label: String,
}

impl<'a> From<&'a RankedEntry> for ReportRow<'a> {
    fn from(entry: &'a RankedEntry) -> Self {
        Self {
            word: &entry.word,
            count_label: format!("({})", entry.count),
        }
    }
}

/// A rectangle in layout units, top-left origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellRect {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

/// One page of the report and the rows it carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPage {
    /// Page number (1-based)
    pub number: usize,
    /// Indices of the ranked entries on this page
    pub rows: Range<usize>,
}

/// Resolved table geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportLayout {
    /// Page width
    pub page_width: f32,
    /// Page height
    pub page_height: f32,
    /// Left edge of the table
    pub left: f32,
    /// Widths of the word, count and translation columns
    pub column_widths: [f32; 3],
    /// Top edge of the first row on each page
    pub body_top: f32,
    /// Row height
    pub row_height: f32,
    /// Rows that fit between `body_top` and the bottom margin
    pub rows_per_page: usize,
}

impl ReportLayout {
    /// Resolve geometry from validated configuration.
    pub fn from_config(config: &ReportConfig) -> Result<Self> {
        config.validate()?;

        let body_top = config.body_top();
        let available = config.body_bottom() - body_top;
        // Tolerate float noise so an exact fit still counts
        let rows_per_page = ((available / config.row_height) + 1e-4).floor() as usize;

        Ok(Self {
            page_width: config.page_width,
            page_height: config.page_height,
            left: config.margin_left,
            column_widths: [
                config.column_widths.word,
                config.column_widths.count,
                config.translation_width(),
            ],
            body_top,
            row_height: config.row_height,
            rows_per_page: rows_per_page.max(1),
        })
    }

    /// Split `entry_count` rows into pages.
    pub fn paginate(&self, entry_count: usize) -> Vec<ReportPage> {
        paginate(entry_count, self.rows_per_page)
    }

    /// Top edge of the row in `slot` (0-based position on its page).
    pub fn row_top(&self, slot: usize) -> f32 {
        self.body_top + slot as f32 * self.row_height
    }

    /// The three cell rectangles of the row in `slot`.
    pub fn cells(&self, slot: usize) -> [CellRect; 3] {
        let y = self.row_top(slot);
        let mut x = self.left;
        self.column_widths.map(|width| {
            let rect = CellRect {
                x,
                y,
                width,
                height: self.row_height,
            };
            x += width;
            rect
        })
    }
}

/// Split `entry_count` rows into pages of at most `rows_per_page` rows.
///
/// Always returns at least one page; an empty report still gets its header
/// and footer.
pub fn paginate(entry_count: usize, rows_per_page: usize) -> Vec<ReportPage> {
    let rows_per_page = rows_per_page.max(1);
    if entry_count == 0 {
        return vec![ReportPage {
            number: 1,
            rows: 0..0,
        }];
    }

    (0..entry_count)
        .step_by(rows_per_page)
        .enumerate()
        .map(|(i, first)| ReportPage {
            number: i + 1,
            rows: first..(first + rows_per_page).min(entry_count),
        })
        .collect()
}
