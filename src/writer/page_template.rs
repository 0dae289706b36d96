//! Page templates for headers, footers, and page numbers.
//!
//! A template is drawn onto every page of a document, with placeholders
//! resolved per page.
//!
//! # Example
//!
//! ```
//! use book_words::writer::{HFAlignment, HFStyle, HeaderFooter, PageTemplate};
//!
//! let template = PageTemplate::new()
//!     .header(
//!         HeaderFooter::center("My Word List")
//!             .with_style(HFStyle::new().font("Helvetica-Bold", 10.0)),
//!     )
//!     .footer(HeaderFooter::new("{page} of {pages}", HFAlignment::Right));
//! assert!(!template.is_empty());
//! ```

use super::content_stream::ContentStreamBuilder;
use super::font_metrics::text_width;
use serde::{Deserialize, Serialize};

/// Placeholder tokens that can be used in headers and footers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    /// Current page number (1-indexed)
    PageNumber,
    /// Total number of pages
    TotalPages,
    /// Current date (formatted as YYYY-MM-DD)
    Date,
    /// Document title
    Title,
}

impl Placeholder {
    /// Get the placeholder token string.
    pub fn token(&self) -> &'static str {
        match self {
            Placeholder::PageNumber => "{page}",
            Placeholder::TotalPages => "{pages}",
            Placeholder::Date => "{date}",
            Placeholder::Title => "{title}",
        }
    }
}

/// Horizontal placement of header/footer text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HFAlignment {
    /// Start at the left margin
    Left,
    /// Center between the margins
    #[default]
    Center,
    /// End at the right margin
    Right,
}

/// Font used for a header or footer band.
#[derive(Debug, Clone, PartialEq)]
pub struct HFStyle {
    /// Base-14 font name
    pub font_name: String,
    /// Font size in points
    pub font_size: f32,
}

impl Default for HFStyle {
    fn default() -> Self {
        Self {
            font_name: "Helvetica".to_string(),
            font_size: 10.0,
        }
    }
}

impl HFStyle {
    /// Create a new default style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the font.
    pub fn font(mut self, name: impl Into<String>, size: f32) -> Self {
        self.font_name = name.into();
        self.font_size = size;
        self
    }
}

/// Header or footer text with its alignment.
#[derive(Debug, Clone, PartialEq)]
pub struct HFElement {
    /// The text content (may include placeholders)
    pub text: String,
    /// Horizontal alignment
    pub alignment: HFAlignment,
}

impl HFElement {
    /// Create an element with the given alignment.
    pub fn new(text: impl Into<String>, alignment: HFAlignment) -> Self {
        Self {
            text: text.into(),
            alignment,
        }
    }

    /// Resolve placeholders in the text.
    pub fn resolve(&self, context: &PlaceholderContext) -> String {
        self.text
            .replace(Placeholder::PageNumber.token(), &context.page_number.to_string())
            .replace(Placeholder::TotalPages.token(), &context.total_pages.to_string())
            .replace(Placeholder::Date.token(), &context.date)
            .replace(Placeholder::Title.token(), &context.title)
    }

    /// Left edge of `width` points of text between the margins.
    fn x(&self, width: f32, page_width: f32, margin_left: f32, margin_right: f32) -> f32 {
        match self.alignment {
            HFAlignment::Left => margin_left,
            HFAlignment::Center => {
                margin_left + (page_width - margin_left - margin_right - width) / 2.0
            },
            HFAlignment::Right => page_width - margin_right - width,
        }
    }
}

/// A header or footer band holding one line of text.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderFooter {
    /// Text and its alignment
    pub element: HFElement,
    /// Font for the text
    pub style: HFStyle,
    /// Distance from the page edge to the near side of the band (points)
    pub offset: f32,
    /// Band height (points); text is centered vertically in it
    pub height: f32,
}

impl HeaderFooter {
    /// Create a band with aligned text, half an inch from the page edge.
    pub fn new(text: impl Into<String>, alignment: HFAlignment) -> Self {
        Self {
            element: HFElement::new(text, alignment),
            style: HFStyle::default(),
            offset: 36.0,
            height: 20.0,
        }
    }

    /// Create a band with centered text.
    pub fn center(text: impl Into<String>) -> Self {
        Self::new(text, HFAlignment::Center)
    }

    /// Set the style.
    pub fn with_style(mut self, style: HFStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the band position and height.
    pub fn with_band(mut self, offset: f32, height: f32) -> Self {
        self.offset = offset;
        self.height = height;
        self
    }

    /// Check if the band has no text.
    pub fn is_empty(&self) -> bool {
        self.element.text.is_empty()
    }
}

/// Context for resolving placeholders.
#[derive(Debug, Clone)]
pub struct PlaceholderContext {
    /// Current page number (1-indexed)
    pub page_number: usize,
    /// Total number of pages
    pub total_pages: usize,
    /// Current date
    pub date: String,
    /// Document title
    pub title: String,
}

impl PlaceholderContext {
    /// Create a new context dated today.
    pub fn new(page_number: usize, total_pages: usize) -> Self {
        Self {
            page_number,
            total_pages,
            date: chrono::Local::now().format("%Y-%m-%d").to_string(),
            title: String::new(),
        }
    }

    /// Set the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

impl Default for PlaceholderContext {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

/// A page template with header and footer.
#[derive(Debug, Clone, Default)]
pub struct PageTemplate {
    /// Header definition
    pub header: Option<HeaderFooter>,
    /// Footer definition
    pub footer: Option<HeaderFooter>,
    /// Left margin (points)
    pub margin_left: f32,
    /// Right margin (points)
    pub margin_right: f32,
}

impl PageTemplate {
    /// Create a new empty page template.
    pub fn new() -> Self {
        Self {
            margin_left: 72.0,  // 1 inch
            margin_right: 72.0, // 1 inch
            ..Default::default()
        }
    }

    /// Set the header.
    pub fn header(mut self, header: HeaderFooter) -> Self {
        self.header = Some(header);
        self
    }

    /// Set the footer.
    pub fn footer(mut self, footer: HeaderFooter) -> Self {
        self.footer = Some(footer);
        self
    }

    /// Set margins.
    pub fn margins(mut self, left: f32, right: f32) -> Self {
        self.margin_left = left;
        self.margin_right = right;
        self
    }

    /// Check if the template has any content.
    pub fn is_empty(&self) -> bool {
        self.header.as_ref().map_or(true, HeaderFooter::is_empty)
            && self.footer.as_ref().map_or(true, HeaderFooter::is_empty)
    }

    /// Draw header and footer onto a page.
    pub fn render(
        &self,
        builder: &mut ContentStreamBuilder,
        context: &PlaceholderContext,
        page_width: f32,
        page_height: f32,
    ) {
        if let Some(header) = &self.header {
            // Band measured down from the top edge
            let band_top = page_height - header.offset;
            self.render_band(builder, header, context, page_width, band_top);
        }
        if let Some(footer) = &self.footer {
            // Band measured up from the bottom edge
            let band_top = footer.offset;
            self.render_band(builder, footer, context, page_width, band_top);
        }
    }

    fn render_band(
        &self,
        builder: &mut ContentStreamBuilder,
        band: &HeaderFooter,
        context: &PlaceholderContext,
        page_width: f32,
        band_top: f32,
    ) {
        let text = band.element.resolve(context);
        if text.is_empty() {
            return;
        }
        let style = &band.style;
        let width = text_width(&style.font_name, style.font_size, &text);
        let x = band.element.x(width, page_width, self.margin_left, self.margin_right);
        let baseline = band_top - band.height / 2.0 - 0.3 * style.font_size;

        builder
            .begin_text()
            .set_fill_color(0.0, 0.0, 0.0)
            .set_font(&style.font_name, style.font_size)
            .text(&text, x, baseline)
            .end_text();
    }
}
