//! Page-range text extraction.
//!
//! The pipeline never parses documents itself. It talks to a [`PageSource`]
//! (see [`crate::pdf::PdfPageSource`] for PDFs) and pulls the text of each
//! requested page in order, notifying an optional [`ProgressObserver`] after
//! every page.

use crate::error::Result;
use crate::page_range::PageRange;

/// A document that can hand out the raw text of its pages.
pub trait PageSource {
    /// Total number of pages.
    fn page_count(&self) -> usize;

    /// Raw text of the 0-based page `index`.
    ///
    /// Implementations return [`Error::Format`](crate::Error::Format) when the
    /// page cannot be decoded.
    fn page_text(&mut self, index: usize) -> Result<String>;
}

/// Receives one notification per extracted page.
pub trait ProgressObserver {
    /// Called once after each page has been processed.
    fn page_done(&mut self);
}

impl<F: FnMut()> ProgressObserver for F {
    fn page_done(&mut self) {
        self()
    }
}

/// In-memory pages, for callers that already hold the text.
#[derive(Debug, Clone, Default)]
pub struct TextPageSource {
    pages: Vec<String>,
}

impl TextPageSource {
    /// Create a source from page strings.
    pub fn new<I, S>(pages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            pages: pages.into_iter().map(Into::into).collect(),
        }
    }
}

impl PageSource for TextPageSource {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page_text(&mut self, index: usize) -> Result<String> {
        // Callers validate the range first, so a miss is a decode failure
        self.pages
            .get(index)
            .cloned()
            .ok_or_else(|| crate::Error::Format {
                page: index,
                reason: "page does not exist".to_string(),
            })
    }
}

/// Extract the text of `range` from `source`.
///
/// Page texts are joined with `'\n'` rather than concatenated directly, so
/// the last word of one page never merges with the first word of the next.
/// Callers expecting raw concatenation of page texts will see one extra
/// newline between pages.
pub fn extract_range(
    source: &mut dyn PageSource,
    range: PageRange,
    mut progress: Option<&mut dyn ProgressObserver>,
) -> Result<String> {
    let mut text = String::new();
    for index in range.pages() {
        let page_text = source.page_text(index)?;
        log::debug!("Extracted {} characters from page {}", page_text.len(), index);
        if index > range.start {
            text.push('\n');
        }
        text.push_str(&page_text);
        if let Some(observer) = progress.as_mut() {
            observer.page_done();
        }
    }
    Ok(text)
}

/// Extract the text of pages `start..=end` from `source`.
///
/// `end` falls back to the last page when `None` or past the end of the
/// document. A `start` at or beyond the page count is an error, as is a
/// `start` after `end`. Pages are joined as in [`extract_range`].
pub fn extract_text(
    source: &mut dyn PageSource,
    start: usize,
    end: Option<usize>,
    progress: Option<&mut dyn ProgressObserver>,
) -> Result<String> {
    let range = PageRange::resolve(start, end, source.page_count())?;
    extract_range(source, range, progress)
}
