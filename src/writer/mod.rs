//! PDF writing module for generating the word report.
//!
//! ## Architecture
//!
//! ```text
//! report rows
//!     ↓
//! [ContentStreamBuilder] (drawing ops → content stream bytes)
//!     ↓
//! [PdfWriter] (pages, fonts, header/footer template, xref)
//!     ↓
//! [ObjectSerializer] (serializes PDF objects)
//!     ↓
//! PDF bytes
//! ```
//!
//! ## Example
//!
//! ```
//! use book_words::writer::{PdfWriter, PdfWriterConfig};
//!
//! let mut writer = PdfWriter::with_config(PdfWriterConfig::default().with_title("Words"));
//! writer.add_a4_page().add_text("Hello, World!", 72.0, 720.0, "Helvetica", 12.0);
//! let bytes = writer.finish()?;
//! assert!(bytes.starts_with(b"%PDF-"));
//! # Ok::<(), book_words::Error>(())
//! ```

mod content_stream;
pub mod font_metrics;
mod object_serializer;
mod page_template;
mod pdf_writer;

pub use content_stream::{font_resource_name, ContentStreamBuilder, ContentStreamOp};
pub use font_metrics::{fit_font_size, text_width};
pub use object_serializer::{encode_win_ansi, format_number, ObjectSerializer};
pub use page_template::{
    HFAlignment, HFElement, HFStyle, HeaderFooter, PageTemplate, Placeholder, PlaceholderContext,
};
pub use pdf_writer::{PageBuilder, PdfWriter, PdfWriterConfig};
