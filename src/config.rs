//! Configuration for word-list analysis and report rendering.
//!
//! Every field has a default, so a JSON config file only needs the values it
//! changes:
//!
//! ```json
//! { "min_token_length": 3, "report": { "row_height": 8.0 } }
//! ```

use crate::error::{Error, Result};
use crate::text::{default_excluded_letters, TieBreak, TokenizerConfig, DEFAULT_MIN_TOKEN_LENGTH};
use crate::writer::HFAlignment;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

/// Default report header.
pub const DEFAULT_HEADER_TEXT: &str = "Words used in your book or selected pages";

/// Widths of the three report columns, in layout units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnWidths {
    /// Word column
    pub word: f32,
    /// Count column
    pub count: f32,
    /// Translation column; `None` fills the remaining usable width
    pub translation: Option<f32>,
}

impl Default for ColumnWidths {
    fn default() -> Self {
        Self {
            word: 60.0,
            count: 15.0,
            translation: None,
        }
    }
}

/// Page geometry and text of the rendered report.
///
/// Lengths are layout units (millimetres by default).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Header text drawn on every page
    pub header_text: String,
    /// Footer text; `{page}` and `{pages}` are substituted
    pub footer_text: String,
    /// Horizontal placement of the header text
    pub header_alignment: HFAlignment,
    /// Horizontal placement of the footer text
    pub footer_alignment: HFAlignment,
    /// Column widths
    pub column_widths: ColumnWidths,
    /// Page width
    pub page_width: f32,
    /// Page height
    pub page_height: f32,
    /// Left margin
    pub margin_left: f32,
    /// Top margin
    pub margin_top: f32,
    /// Right margin
    pub margin_right: f32,
    /// Bottom margin; rows never cross it
    pub margin_bottom: f32,
    /// Height of one table row
    pub row_height: f32,
    /// Height of the header band
    pub header_height: f32,
    /// Space between the header band and the first row
    pub header_gap: f32,
    /// Distance from the bottom edge to the footer band
    pub footer_offset: f32,
    /// Compress page content streams
    pub compress: bool,
    /// Document title stored in the PDF Info dictionary
    pub title: Option<String>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            header_text: DEFAULT_HEADER_TEXT.to_string(),
            footer_text: "{page}".to_string(),
            header_alignment: HFAlignment::Center,
            footer_alignment: HFAlignment::Center,
            column_widths: ColumnWidths::default(),
            page_width: 210.0,
            page_height: 297.0,
            margin_left: 10.0,
            margin_top: 10.0,
            margin_right: 10.0,
            margin_bottom: 20.0,
            row_height: 10.0,
            header_height: 10.0,
            header_gap: 10.0,
            footer_offset: 15.0,
            compress: false,
            title: None,
        }
    }
}

impl ReportConfig {
    /// Create the default A4 report configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the header text.
    pub fn with_header_text(mut self, text: impl Into<String>) -> Self {
        self.header_text = text.into();
        self
    }

    /// Set the footer text.
    pub fn with_footer_text(mut self, text: impl Into<String>) -> Self {
        self.footer_text = text.into();
        self
    }

    /// Set where the header and footer text sit horizontally.
    pub fn with_alignment(mut self, header: HFAlignment, footer: HFAlignment) -> Self {
        self.header_alignment = header;
        self.footer_alignment = footer;
        self
    }

    /// Set the row height.
    pub fn with_row_height(mut self, height: f32) -> Self {
        self.row_height = height;
        self
    }

    /// Set the page size.
    pub fn with_page_size(mut self, width: f32, height: f32) -> Self {
        self.page_width = width;
        self.page_height = height;
        self
    }

    /// Set the column widths.
    pub fn with_column_widths(mut self, widths: ColumnWidths) -> Self {
        self.column_widths = widths;
        self
    }

    /// Enable or disable content stream compression.
    pub fn with_compress(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    /// Set the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Width between the left and right margins.
    pub fn usable_width(&self) -> f32 {
        self.page_width - self.margin_left - self.margin_right
    }

    /// Width of the translation column.
    pub fn translation_width(&self) -> f32 {
        let widths = &self.column_widths;
        widths
            .translation
            .unwrap_or(self.usable_width() - widths.word - widths.count)
    }

    /// Top edge of the first row on every page.
    pub fn body_top(&self) -> f32 {
        self.margin_top + self.header_height + self.header_gap
    }

    /// Lowest edge a row may reach.
    pub fn body_bottom(&self) -> f32 {
        self.page_height - self.margin_bottom
    }

    /// Check geometry for values that cannot produce a report.
    pub fn validate(&self) -> Result<()> {
        let lengths = [
            ("page_width", self.page_width),
            ("page_height", self.page_height),
            ("row_height", self.row_height),
            ("column_widths.word", self.column_widths.word),
            ("column_widths.count", self.column_widths.count),
        ];
        for (name, value) in lengths {
            if !(value.is_finite() && value > 0.0) {
                return Err(Error::Config(format!("{} must be positive, got {}", name, value)));
            }
        }

        let offsets = [
            ("margin_left", self.margin_left),
            ("margin_top", self.margin_top),
            ("margin_right", self.margin_right),
            ("margin_bottom", self.margin_bottom),
            ("header_height", self.header_height),
            ("header_gap", self.header_gap),
            ("footer_offset", self.footer_offset),
        ];
        for (name, value) in offsets {
            if !(value.is_finite() && value >= 0.0) {
                return Err(Error::Config(format!("{} must not be negative, got {}", name, value)));
            }
        }

        let widths = &self.column_widths;
        let translation = self.translation_width();
        if widths.translation.is_some() && translation <= 0.0 {
            return Err(Error::Config("column_widths.translation must be positive".to_string()));
        }
        let total = widths.word + widths.count + translation.max(0.0);
        if translation < 0.0 || total > self.usable_width() + f32::EPSILON * 1000.0 {
            return Err(Error::Config(format!(
                "columns need {} units but only {} fit between the margins",
                total,
                self.usable_width()
            )));
        }

        if self.body_bottom() - self.body_top() < self.row_height {
            return Err(Error::Config(format!(
                "page body from {} to {} cannot hold a row of height {}",
                self.body_top(),
                self.body_bottom(),
                self.row_height
            )));
        }

        Ok(())
    }
}

/// Configuration for the whole word-list run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Single letters dropped by the tokenizer
    pub excluded_letters: BTreeSet<String>,
    /// Tokens shorter than this are dropped
    pub min_token_length: usize,
    /// Order of words with equal counts
    pub tie_break: TieBreak,
    /// Report layout
    pub report: ReportConfig,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            excluded_letters: default_excluded_letters(),
            min_token_length: DEFAULT_MIN_TOKEN_LENGTH,
            tie_break: TieBreak::default(),
            report: ReportConfig::default(),
        }
    }
}

impl AnalyzerConfig {
    /// Create configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the excluded letter set.
    pub fn with_excluded_letters<I, S>(mut self, letters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_letters = letters.into_iter().map(Into::into).collect();
        self
    }

    /// Set the minimum token length.
    pub fn with_min_token_length(mut self, min: usize) -> Self {
        self.min_token_length = min;
        self
    }

    /// Set the tie-break policy.
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Set the report configuration.
    pub fn with_report(mut self, report: ReportConfig) -> Self {
        self.report = report;
        self
    }

    /// Tokenizer settings derived from this configuration.
    pub fn tokenizer_config(&self) -> TokenizerConfig {
        TokenizerConfig::default()
            .with_excluded_letters(self.excluded_letters.iter().cloned())
            .with_min_token_length(self.min_token_length)
    }

    /// Parse configuration from JSON and validate it.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| Error::Config(format!("invalid config JSON: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a JSON file and validate it.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("cannot read {}: {}", path.display(), e)))?;
        Self::from_json_str(&json)
    }

    /// Check all values.
    pub fn validate(&self) -> Result<()> {
        if self.min_token_length == 0 {
            return Err(Error::Config("min_token_length must be at least 1".to_string()));
        }
        if let Some(bad) = self
            .excluded_letters
            .iter()
            .find(|l| l.is_empty() || l.chars().any(|c| !c.is_ascii_lowercase()))
        {
            return Err(Error::Config(format!(
                "excluded_letters entries must be lowercase ASCII letters, got '{}'",
                bad
            )));
        }
        self.report.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = AnalyzerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.excluded_letters.len(), 20);
        assert_eq!(config.min_token_length, 2);
        assert_eq!(config.tie_break, TieBreak::Alphabetical);
    }

    #[test]
    fn test_default_geometry() {
        let report = ReportConfig::default();
        assert_eq!(report.usable_width(), 190.0);
        assert_eq!(report.translation_width(), 115.0);
        assert_eq!(report.body_top(), 30.0);
        assert_eq!(report.body_bottom(), 277.0);
    }

    #[test]
    fn test_partial_json() {
        let config =
            AnalyzerConfig::from_json_str(r#"{"min_token_length": 3, "report": {"row_height": 8}}"#)
                .unwrap();
        assert_eq!(config.min_token_length, 3);
        assert_eq!(config.report.row_height, 8.0);
        assert_eq!(config.report.header_text, DEFAULT_HEADER_TEXT);
        assert_eq!(config.tie_break, TieBreak::Alphabetical);
    }

    #[test]
    fn test_alignment_from_json() {
        let config =
            AnalyzerConfig::from_json_str(r#"{"report": {"footer_alignment": "right"}}"#).unwrap();
        assert_eq!(config.report.header_alignment, HFAlignment::Center);
        assert_eq!(config.report.footer_alignment, HFAlignment::Right);
    }

    #[test]
    fn test_tie_break_from_json() {
        let config = AnalyzerConfig::from_json_str(r#"{"tie_break": "first_seen"}"#).unwrap();
        assert_eq!(config.tie_break, TieBreak::FirstSeen);
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let err = AnalyzerConfig::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert_eq!(err.stage(), "config");
    }

    #[test]
    fn test_rejects_zero_row_height() {
        let config = AnalyzerConfig::new().with_report(ReportConfig::new().with_row_height(0.0));
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_rejects_columns_wider_than_page() {
        let report = ReportConfig::new().with_column_widths(ColumnWidths {
            word: 150.0,
            count: 50.0,
            translation: None,
        });
        assert!(report.validate().is_err());

        let report = ReportConfig::new().with_column_widths(ColumnWidths {
            word: 60.0,
            count: 15.0,
            translation: Some(200.0),
        });
        assert!(report.validate().is_err());
    }

    #[test]
    fn test_rejects_body_shorter_than_row() {
        let report = ReportConfig::new().with_page_size(210.0, 45.0);
        assert!(report.validate().is_err());
    }

    #[test]
    fn test_rejects_bad_excluded_letters() {
        let config = AnalyzerConfig::new().with_excluded_letters(["A"]);
        assert!(config.validate().is_err());
        let config = AnalyzerConfig::new().with_min_token_length(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_tokenizer_config() {
        let config = AnalyzerConfig::new()
            .with_excluded_letters(["a"])
            .with_min_token_length(4);
        let tokenizer = config.tokenizer_config();
        assert_eq!(tokenizer.min_token_length, 4);
        assert!(tokenizer.excluded_letters.contains("a"));
        assert_eq!(tokenizer.excluded_letters.len(), 1);
    }

    #[test]
    fn test_from_missing_file() {
        let err = AnalyzerConfig::from_json_file("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
