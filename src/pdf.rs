//! PDF input backed by `lopdf`.

use crate::error::{Error, Result};
use crate::extract::PageSource;
use lopdf::Document;
use std::path::Path;

/// Page text provider for a PDF file.
pub struct PdfPageSource {
    document: Document,
    /// 1-based page numbers in document order
    page_numbers: Vec<u32>,
}

impl PdfPageSource {
    /// Open a PDF file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::info!("Opening {}", path.display());
        let document = Document::load(path)
            .map_err(|e| Error::Input(format!("{}: {}", path.display(), e)))?;
        Self::from_document(document)
    }

    /// Load a PDF from memory.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let document = Document::load_mem(bytes).map_err(|e| Error::Input(e.to_string()))?;
        Self::from_document(document)
    }

    fn from_document(document: Document) -> Result<Self> {
        if document.is_encrypted() {
            return Err(Error::Input("encrypted documents are not supported".to_string()));
        }
        let page_numbers: Vec<u32> = document.get_pages().keys().copied().collect();
        log::debug!("Document has {} pages", page_numbers.len());
        Ok(Self {
            document,
            page_numbers,
        })
    }
}

impl PageSource for PdfPageSource {
    fn page_count(&self) -> usize {
        self.page_numbers.len()
    }

    fn page_text(&mut self, index: usize) -> Result<String> {
        let number = *self.page_numbers.get(index).ok_or_else(|| Error::Range {
            start: index,
            end: index,
            total: self.page_numbers.len(),
        })?;
        self.document
            .extract_text(&[number])
            .map_err(|e| Error::Format {
                page: index,
                reason: e.to_string(),
            })
    }
}

impl std::fmt::Debug for PdfPageSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PdfPageSource")
            .field("pages", &self.page_numbers.len())
            .finish()
    }
}
