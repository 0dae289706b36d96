//! Paginated word-list report.
//!
//! [`layout`] decides which rows land on which page; [`render`] draws them
//! with the PDF writer.

pub mod layout;
pub mod render;

pub use layout::{paginate, CellRect, ReportLayout, ReportPage, ReportRow, POINTS_PER_MM};
pub use render::{render_report, RenderedReport, ReportRenderer, CELL_FILL};
