//! Draws the ranked word table into a PDF document.

use super::layout::{CellRect, ReportLayout, ReportRow, CELL_PADDING, POINTS_PER_MM};
use crate::config::ReportConfig;
use crate::error::Result;
use crate::text::RankedEntry;
use crate::writer::{
    fit_font_size, ContentStreamBuilder, HFStyle, HeaderFooter, PageTemplate, PdfWriter,
    PdfWriterConfig,
};

/// Fill color of the word and count cells.
pub const CELL_FILL: (u8, u8, u8) = (200, 220, 255);

const WORD_FONT: &str = "Helvetica";
const WORD_FONT_SIZE: f32 = 12.0;
const MIN_WORD_FONT_SIZE: f32 = 6.0;
const COUNT_FONT: &str = "Helvetica";
const COUNT_FONT_SIZE: f32 = 8.0;
const HEADER_FONT_SIZE: f32 = 10.0;
const FOOTER_FONT_SIZE: f32 = 8.0;
const BORDER_WIDTH: f32 = 0.2;

/// A rendered report.
#[derive(Debug, Clone)]
pub struct RenderedReport {
    /// PDF bytes
    pub bytes: Vec<u8>,
    /// Number of pages in the document
    pub page_count: usize,
}

/// Render `entries` into PDF bytes.
pub fn render_report(entries: &[RankedEntry], config: &ReportConfig) -> Result<Vec<u8>> {
    ReportRenderer::new(config)?.render(entries).map(|report| report.bytes)
}

/// Renders ranked entries with a fixed layout.
#[derive(Debug, Clone)]
pub struct ReportRenderer {
    config: ReportConfig,
    layout: ReportLayout,
}

impl ReportRenderer {
    /// Create a renderer, validating the configuration.
    pub fn new(config: &ReportConfig) -> Result<Self> {
        Ok(Self {
            layout: ReportLayout::from_config(config)?,
            config: config.clone(),
        })
    }

    /// Resolved geometry.
    pub fn layout(&self) -> &ReportLayout {
        &self.layout
    }

    /// Render all entries, one table row each, in the given order.
    pub fn render(&self, entries: &[RankedEntry]) -> Result<RenderedReport> {
        let mut writer_config = PdfWriterConfig::default().with_compress(self.config.compress);
        if let Some(title) = &self.config.title {
            writer_config = writer_config.with_title(title.clone());
        }
        let mut writer = PdfWriter::with_config(writer_config);
        writer.set_template(self.page_template());

        let pages = self.layout.paginate(entries.len());
        let page_width = pt(self.layout.page_width);
        let page_height = pt(self.layout.page_height);

        for page in &pages {
            let mut builder = writer.add_page(page_width, page_height);
            let content = builder.content();
            for (slot, entry) in entries[page.rows.clone()].iter().enumerate() {
                self.draw_row(content, slot, &ReportRow::from(entry));
            }
            builder.finish();
            log::debug!("Report page {}: rows {:?}", page.number, page.rows);
        }

        let bytes = writer.finish()?;
        log::info!("Rendered {} rows on {} report pages", entries.len(), pages.len());
        Ok(RenderedReport {
            bytes,
            page_count: pages.len(),
        })
    }

    fn page_template(&self) -> PageTemplate {
        let config = &self.config;
        let header = HeaderFooter::new(config.header_text.clone(), config.header_alignment)
            .with_style(HFStyle::new().font("Helvetica-Bold", HEADER_FONT_SIZE))
            .with_band(pt(config.margin_top), pt(config.header_height));
        let footer = HeaderFooter::new(config.footer_text.clone(), config.footer_alignment)
            .with_style(HFStyle::new().font("Helvetica-Oblique", FOOTER_FONT_SIZE))
            .with_band(pt(config.footer_offset), pt(config.row_height));
        PageTemplate::new()
            .margins(pt(config.margin_left), pt(config.margin_right))
            .header(header)
            .footer(footer)
    }

    fn draw_row(&self, content: &mut ContentStreamBuilder, slot: usize, row: &ReportRow<'_>) {
        let [word_cell, count_cell, translation_cell] = self.layout.cells(slot);
        let (r, g, b) = CELL_FILL;

        content
            .set_line_width(BORDER_WIDTH)
            .set_stroke_color(0.0, 0.0, 0.0)
            .set_fill_color(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0);
        self.cell_path(content, &word_cell).fill_stroke();
        self.cell_path(content, &count_cell).fill_stroke();
        self.cell_path(content, &translation_cell).stroke();

        let max_width = pt(word_cell.width - 2.0 * CELL_PADDING);
        let word_size =
            fit_font_size(WORD_FONT, WORD_FONT_SIZE, MIN_WORD_FONT_SIZE, row.word, max_width);
        content.set_fill_color(0.0, 0.0, 0.0);
        self.cell_text(content, &word_cell, row.word, WORD_FONT, word_size);
        self.cell_text(content, &count_cell, &row.count_label, COUNT_FONT, COUNT_FONT_SIZE);
    }

    fn cell_path<'b>(
        &self,
        content: &'b mut ContentStreamBuilder,
        cell: &CellRect,
    ) -> &'b mut ContentStreamBuilder {
        // PDF y grows upwards from the bottom edge
        let bottom = self.layout.page_height - cell.y - cell.height;
        content.rect(pt(cell.x), pt(bottom), pt(cell.width), pt(cell.height))
    }

    fn cell_text(
        &self,
        content: &mut ContentStreamBuilder,
        cell: &CellRect,
        text: &str,
        font: &str,
        size: f32,
    ) {
        let x = pt(cell.x + CELL_PADDING);
        let baseline = pt(self.layout.page_height - cell.y - cell.height / 2.0) - 0.3 * size;
        content
            .begin_text()
            .set_font(font, size)
            .text(text, x, baseline)
            .end_text();
    }
}

/// Convert layout units to points.
fn pt(units: f32) -> f32 {
    units * POINTS_PER_MM
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_HEADER_TEXT;

    fn entries(n: usize) -> Vec<RankedEntry> {
        (0..n).map(|i| RankedEntry::new(format!("word{}", i), n - i)).collect()
    }

    fn render_plain(entries: &[RankedEntry]) -> (String, usize) {
        let renderer = ReportRenderer::new(&ReportConfig::default()).unwrap();
        let report = renderer.render(entries).unwrap();
        (String::from_utf8_lossy(&report.bytes).to_string(), report.page_count)
    }

    #[test]
    fn test_empty_report_has_one_page() {
        let (content, pages) = render_plain(&[]);
        assert_eq!(pages, 1);
        assert!(content.contains("/Count 1"));
        assert!(content.contains(&format!("({}) Tj", DEFAULT_HEADER_TEXT)));
        assert!(content.contains("(1) Tj"));
    }

    #[test]
    fn test_rows_in_order() {
        let list = vec![RankedEntry::new("the", 2), RankedEntry::new("are", 1)];
        let (content, pages) = render_plain(&list);
        assert_eq!(pages, 1);
        let the = content.find("(the) Tj").unwrap();
        let are = content.find("(are) Tj").unwrap();
        assert!(the < are);
        assert!(content.contains("(\\(2\\)) Tj"));
        assert!(content.contains("(\\(1\\)) Tj"));
    }

    #[test]
    fn test_cells_filled_and_stroked() {
        let (content, _) = render_plain(&[RankedEntry::new("cat", 1)]);
        assert!(content.contains("0.7843 0.8627 1 rg"));
        assert_eq!(content.matches("\nB\n").count(), 2);
        assert!(content.contains("\nS\n"));
    }

    #[test]
    fn test_header_and_footer_on_every_page() {
        let (content, pages) = render_plain(&entries(50));
        assert_eq!(pages, 3);
        assert_eq!(content.matches(&format!("({}) Tj", DEFAULT_HEADER_TEXT)).count(), 3);
        for page in 1..=3 {
            assert!(content.contains(&format!("({}) Tj", page)));
        }
        assert!(content.contains("/Count 3"));
    }

    #[test]
    fn test_long_word_shrinks() {
        let long = "pneumonoultramicroscopicsilicovolcanoconiosis";
        let (content, _) = render_plain(&[RankedEntry::new(long, 1)]);
        assert!(!content.contains("/Helvetica 12 Tf"));
        assert!(content.contains(&format!("({}) Tj", long)));
    }

    #[test]
    fn test_render_report_bytes() {
        let config = ReportConfig::default().with_compress(true).with_title("Words");
        let bytes = render_report(&entries(3), &config).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
        assert!(bytes.ends_with(b"%%EOF"));
        let content = String::from_utf8_lossy(&bytes);
        assert!(content.contains("/Filter /FlateDecode"));
        assert!(content.contains("/Title (Words)"));
    }

    /// x position of the text object that shows `text`.
    fn text_x(content: &str, text: &str) -> f32 {
        let shown = content.find(&format!("({}) Tj", text)).unwrap();
        let matrix = content[..shown].trim_end().lines().last().unwrap();
        matrix.split_whitespace().nth(4).unwrap().parse().unwrap()
    }

    #[test]
    fn test_header_and_footer_alignment() {
        use crate::writer::{text_width, HFAlignment};

        let config = ReportConfig::default()
            .with_header_text("Left words")
            .with_alignment(HFAlignment::Left, HFAlignment::Right);
        let report = ReportRenderer::new(&config).unwrap().render(&entries(1)).unwrap();
        let content = String::from_utf8_lossy(&report.bytes).to_string();

        assert!((text_x(&content, "Left words") - pt(10.0)).abs() < 0.01);
        let right_edge = pt(200.0) - text_width("Helvetica-Oblique", FOOTER_FONT_SIZE, "1");
        assert!((text_x(&content, "1") - right_edge).abs() < 0.01);
    }
}
