//! Page range selection.
//!
//! Users pick pages with a short expression: `all`, a single page (`7`), or a
//! start and end page separated by a dash or comma (`1-5`, `1,5`). User
//! numbers are 1-based; [`PageRange`] is 0-based and inclusive.

use crate::error::{Error, Result};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref RE_SEPARATOR: Regex = Regex::new(r"[-,]").unwrap();
}

/// An inclusive, 0-based span of source pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageRange {
    /// First page (0-based)
    pub start: usize,
    /// Last page (0-based, inclusive)
    pub end: usize,
}

impl PageRange {
    /// Create a validated range for a document with `total_pages` pages.
    pub fn new(start: usize, end: usize, total_pages: usize) -> Result<Self> {
        if total_pages == 0 {
            return Err(Error::EmptyDocument);
        }
        if start >= total_pages || end >= total_pages || start > end {
            return Err(Error::Range {
                start,
                end,
                total: total_pages,
            });
        }
        Ok(Self { start, end })
    }

    /// Every page of a document.
    pub fn all(total_pages: usize) -> Result<Self> {
        if total_pages == 0 {
            return Err(Error::EmptyDocument);
        }
        Ok(Self {
            start: 0,
            end: total_pages - 1,
        })
    }

    /// Resolve an optional end page.
    ///
    /// A missing end, or one beyond the document, means the last page. The
    /// start page is never clamped.
    pub fn resolve(start: usize, end: Option<usize>, total_pages: usize) -> Result<Self> {
        if total_pages == 0 {
            return Err(Error::EmptyDocument);
        }
        let last = total_pages - 1;
        let end = end.map_or(last, |e| e.min(last));
        Self::new(start, end, total_pages)
    }

    /// Number of pages covered.
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// Always false; a valid range covers at least one page.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterate the page indices in order.
    pub fn pages(&self) -> std::ops::RangeInclusive<usize> {
        self.start..=self.end
    }
}

impl std::fmt::Display for PageRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Shown 1-based, the way users type it
        if self.start == self.end {
            write!(f, "{}", self.start + 1)
        } else {
            write!(f, "{}-{}", self.start + 1, self.end + 1)
        }
    }
}

/// Parse a user page-range expression against a document's page count.
pub fn parse_page_range(input: &str, total_pages: usize) -> Result<PageRange> {
    let trimmed = input.trim();
    if trimmed.eq_ignore_ascii_case("all") {
        return PageRange::all(total_pages);
    }

    let numbers = RE_SEPARATOR
        .split(trimmed)
        .map(|part| part.trim().parse::<usize>())
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|_| Error::PageRangeSyntax(input.to_string()))?;

    let (first, last) = match numbers.as_slice() {
        [page] => (*page, *page),
        [first, last] => (*first, *last),
        _ => return Err(Error::PageRangeSyntax(input.to_string())),
    };

    if first == 0 || last == 0 {
        return Err(Error::Range {
            start: first.saturating_sub(1),
            end: last.saturating_sub(1),
            total: total_pages,
        });
    }

    PageRange::new(first - 1, last - 1, total_pages)
}
