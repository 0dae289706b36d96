//! End-to-end word-list pipeline.
//!
//! ```text
//! PDF ─▶ page range ─▶ extract ─▶ tokenize ─▶ count ─▶ rank ─▶ render ─▶ file
//! ```
//!
//! Every stage runs on the calling thread. A run either writes the complete
//! report or leaves the destination untouched.

use crate::config::AnalyzerConfig;
use crate::error::{Error, Result};
use crate::extract::{extract_range, PageSource, ProgressObserver};
use crate::page_range::{parse_page_range, PageRange};
use crate::pdf::PdfPageSource;
use crate::report::ReportRenderer;
use crate::text::{rank, FrequencyMap, RankedEntry, Tokenizer};
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tempfile::NamedTempFile;

/// Outcome of a completed run.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    /// Where the report was written
    pub output: PathBuf,
    /// Number of source pages read
    pub pages_processed: usize,
    /// Tokens surviving the filters, duplicates included
    pub token_count: usize,
    /// Distinct words in the report
    pub distinct_words: usize,
    /// Pages in the generated report
    pub report_pages: usize,
    /// The ranked list as rendered
    pub words: Vec<RankedEntry>,
}

/// Ranked words plus the token total they came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    /// Words in report order
    pub entries: Vec<RankedEntry>,
    /// Number of tokens counted
    pub token_count: usize,
}

/// Runs extraction, analysis and rendering with one configuration.
#[derive(Debug, Clone)]
pub struct WordListPipeline {
    config: AnalyzerConfig,
    tokenizer: Tokenizer,
    renderer: ReportRenderer,
}

impl WordListPipeline {
    /// Create a pipeline, validating `config`.
    pub fn new(config: AnalyzerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            tokenizer: Tokenizer::with_config(config.tokenizer_config()),
            renderer: ReportRenderer::new(&config.report)?,
            config,
        })
    }

    /// Active configuration.
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Tokenize, count and rank `text`.
    pub fn analyze_text(&self, text: &str) -> Vec<RankedEntry> {
        self.analyze(text).entries
    }

    /// Like [`analyze_text`](Self::analyze_text), also reporting the token count.
    pub fn analyze(&self, text: &str) -> Analysis {
        let tokens = self.tokenizer.tokenize(text);
        let frequencies = FrequencyMap::from_tokens(&tokens);
        log::debug!(
            "{} tokens, {} distinct words",
            frequencies.total(),
            frequencies.len()
        );
        Analysis {
            entries: rank(&frequencies, self.config.tie_break),
            token_count: tokens.len(),
        }
    }

    /// Extract `range` from `source` and analyze the text.
    pub fn analyze_source(
        &self,
        source: &mut dyn PageSource,
        range: PageRange,
        progress: Option<&mut dyn ProgressObserver>,
    ) -> Result<Vec<RankedEntry>> {
        let text = extract_range(source, range, progress)?;
        Ok(self.analyze_text(&text))
    }

    /// Render ranked entries into PDF bytes.
    pub fn render(&self, entries: &[RankedEntry]) -> Result<Vec<u8>> {
        self.renderer.render(entries).map(|report| report.bytes)
    }

    /// Read `input`, analyze the pages selected by `range_expr` and write the
    /// report to `output`.
    pub fn run(
        &self,
        input: impl AsRef<Path>,
        range_expr: &str,
        output: impl AsRef<Path>,
        progress: Option<&mut dyn ProgressObserver>,
    ) -> Result<RunSummary> {
        let mut source = PdfPageSource::open(input)?;
        self.run_source(&mut source, range_expr, output, progress)
    }

    /// [`run`](Self::run) over an already opened source.
    pub fn run_source(
        &self,
        source: &mut dyn PageSource,
        range_expr: &str,
        output: impl AsRef<Path>,
        progress: Option<&mut dyn ProgressObserver>,
    ) -> Result<RunSummary> {
        let output = output.as_ref();
        let range = parse_page_range(range_expr, source.page_count())?;
        log::info!("Extracting pages {} of {}", range, source.page_count());

        let started = Instant::now();
        let text = extract_range(source, range, progress)?;
        log::info!(
            "Extracted {} characters in {:.2?}",
            text.len(),
            started.elapsed()
        );

        let started = Instant::now();
        let analysis = self.analyze(&text);
        log::info!(
            "Found {} distinct words in {} tokens ({:.2?})",
            analysis.entries.len(),
            analysis.token_count,
            started.elapsed()
        );

        let report = self.renderer.render(&analysis.entries)?;
        write_atomic(output, &report.bytes)?;
        log::info!("Wrote {} ({} pages)", output.display(), report.page_count);

        Ok(RunSummary {
            output: output.to_path_buf(),
            pages_processed: range.len(),
            token_count: analysis.token_count,
            distinct_words: analysis.entries.len(),
            report_pages: report.page_count,
            words: analysis.entries,
        })
    }
}

/// Write `bytes` to `path` through a temporary file in the same directory.
///
/// The destination only ever holds a complete file.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let output_error = |e: std::io::Error| Error::Output(format!("{}: {}", path.display(), e));

    let mut temp_file = NamedTempFile::new_in(parent).map_err(output_error)?;
    temp_file.write_all(bytes).map_err(output_error)?;
    temp_file.as_file().sync_all().map_err(output_error)?;
    temp_file.persist(path).map_err(|e| output_error(e.error))?;
    Ok(())
}

/// Default report path: `<stem>_words.pdf` beside `input`.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "report".to_string());
    input.with_file_name(format!("{}_words.pdf", stem))
}
