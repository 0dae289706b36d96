// Allow some clippy lints that are too pedantic for this project
#![allow(clippy::too_many_arguments)]
#![allow(clippy::should_implement_trait)]

//! # Book Words
//!
//! Turns a page range of a PDF book into a ranked vocabulary list, rendered
//! as a printable PDF table with an empty column for handwritten
//! translations.
//!
//! ## Pipeline
//!
//! ```text
//! PdfPageSource ─▶ extract_range ─▶ Tokenizer ─▶ FrequencyMap ─▶ rank ─▶ ReportRenderer
//! ```
//!
//! - **Extraction**: any [`PageSource`]; PDFs are read with `lopdf`
//! - **Tokenization**: lowercase ASCII words, digits rejected, single
//!   letters dropped
//! - **Ranking**: descending count, alphabetical or first-seen tie-break
//! - **Report**: A4 pages, bold header, page-number footer, 3-column table
//!
//! ## Quick Start
//!
//! ```no_run
//! use book_words::{AnalyzerConfig, WordListPipeline};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let pipeline = WordListPipeline::new(AnalyzerConfig::default())?;
//! let summary = pipeline.run("book.pdf", "1-20", "book_words.pdf", None)?;
//! println!("{} distinct words", summary.distinct_words);
//! # Ok(())
//! # }
//! ```
//!
//! Text that is already in memory skips extraction:
//!
//! ```
//! use book_words::{AnalyzerConfig, WordListPipeline};
//!
//! let pipeline = WordListPipeline::new(AnalyzerConfig::default()).unwrap();
//! let ranked = pipeline.analyze_text("The cat sat on the mat.");
//! assert_eq!(ranked[0].word, "the");
//! assert_eq!(ranked[0].count, 2);
//! ```
//!
//! ## License
//!
//! Licensed under either of:
//!
//! * Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
//! * MIT license ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)
//!
//! at your option.

#![warn(missing_docs)]

// Error handling
pub mod error;

// Configuration
pub mod config;

// Source documents
pub mod extract;
pub mod page_range;
pub mod pdf;

// Word analysis
pub mod text;

// PDF writing
pub mod object;
pub mod writer;

// Report layout and rendering
pub mod report;

// End-to-end runs
pub mod pipeline;

// Re-exports
pub use config::{AnalyzerConfig, ColumnWidths, ReportConfig};
pub use error::{Error, Result};
pub use extract::{extract_range, extract_text, PageSource, ProgressObserver, TextPageSource};
pub use page_range::{parse_page_range, PageRange};
pub use pdf::PdfPageSource;
pub use pipeline::{RunSummary, WordListPipeline};
pub use report::{paginate, render_report, ReportPage};
pub use text::{count_words, rank, tokenize, FrequencyMap, RankedEntry, TieBreak, Tokenizer};

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
        assert_eq!(NAME, "book_words");
    }
}
