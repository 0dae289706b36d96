//! End-to-end tests: PDF in, word report out.

use book_words::writer::{PdfWriter, PdfWriterConfig};
use book_words::{
    extract_text, AnalyzerConfig, Error, PageSource, PdfPageSource, RankedEntry, TextPageSource,
    WordListPipeline,
};
use std::path::Path;
use tempfile::TempDir;

/// Write a PDF with one source page per entry of `pages`; each line is its
/// own text object.
fn write_book(path: &Path, pages: &[&[&str]]) {
    let mut writer = PdfWriter::with_config(PdfWriterConfig::default().with_compress(false));
    for lines in pages {
        let mut page = writer.add_a4_page();
        for (i, line) in lines.iter().enumerate() {
            page.content()
                .begin_text()
                .set_font("Helvetica", 12.0)
                .text(&format!("{} ", line), 72.0, 760.0 - 16.0 * i as f32)
                .end_text();
        }
        page.finish();
    }
    writer.save(path).unwrap();
}

fn pipeline() -> WordListPipeline {
    WordListPipeline::new(AnalyzerConfig::default()).unwrap()
}

fn book(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("book.pdf");
    write_book(
        &path,
        &[
            &["The cat sat on the mat"],
            &["Another cat slept", "on a warm mat"],
            &["Nothing here but zebras"],
        ],
    );
    path
}

mod pdf_source {
    use super::*;

    #[test]
    fn test_page_count_and_text() {
        let dir = TempDir::new().unwrap();
        let mut source = PdfPageSource::open(book(&dir)).unwrap();
        assert_eq!(source.page_count(), 3);

        let text = source.page_text(0).unwrap();
        assert!(text.contains("cat"), "page text was {:?}", text);
        assert!(text.contains("mat"));
    }

    #[test]
    fn test_extract_single_page() {
        let dir = TempDir::new().unwrap();
        let mut source = PdfPageSource::open(book(&dir)).unwrap();
        let text = extract_text(&mut source, 2, Some(2), None).unwrap();
        assert!(text.contains("zebras"));
        assert!(!text.contains("cat"));
    }

    #[test]
    fn test_start_past_end_is_range_error() {
        let dir = TempDir::new().unwrap();
        let mut source = PdfPageSource::open(book(&dir)).unwrap();
        let err = extract_text(&mut source, 5, None, None).unwrap_err();
        assert!(err.is_range_error());
    }
}

mod runs {
    use super::*;

    #[test]
    fn test_run_all_pages() {
        let dir = TempDir::new().unwrap();
        let input = book(&dir);
        let output = dir.path().join("words.pdf");

        let mut pages_seen = 0;
        let mut progress = || pages_seen += 1;
        let summary = pipeline()
            .run(&input, "all", &output, Some(&mut progress))
            .unwrap();

        assert_eq!(pages_seen, 3);
        assert_eq!(summary.pages_processed, 3);
        assert_eq!(summary.report_pages, 1);
        assert_eq!(summary.words[0], RankedEntry::new("cat", 2));
        assert!(summary.words.contains(&RankedEntry::new("zebras", 1)));

        let report = lopdf::Document::load(&output).unwrap();
        assert_eq!(report.get_pages().len(), 1);
    }

    #[test]
    fn test_run_page_subset() {
        let dir = TempDir::new().unwrap();
        let input = book(&dir);
        let output = dir.path().join("first.pdf");

        let summary = pipeline().run(&input, "1", &output, None).unwrap();
        assert_eq!(summary.pages_processed, 1);
        let words: Vec<&str> = summary.words.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(words, vec!["the", "cat", "mat", "on", "sat"]);
    }

    #[test]
    fn test_bad_range_leaves_no_output() {
        let dir = TempDir::new().unwrap();
        let input = book(&dir);
        let output = dir.path().join("words.pdf");

        let err = pipeline().run(&input, "2-9", &output, None).unwrap_err();
        assert!(err.is_range_error());
        assert!(!output.exists());

        let err = pipeline().run(&input, "one-two", &output, None).unwrap_err();
        assert!(matches!(err, Error::PageRangeSyntax(_)));
        assert!(!output.exists());
    }

    #[test]
    fn test_unreadable_input_is_input_error() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("broken.pdf");
        std::fs::write(&input, b"%PDF-1.4 truncated").unwrap();
        let output = dir.path().join("words.pdf");

        let err = pipeline().run(&input, "all", &output, None).unwrap_err();
        assert!(matches!(err, Error::Input(_)));
        assert_eq!(err.stage(), "extraction");
        assert!(!output.exists());
    }

    #[test]
    fn test_unwritable_output_is_output_error() {
        let dir = TempDir::new().unwrap();
        let mut source = TextPageSource::new(["some words here"]);
        let output = dir.path().join("no_such_dir").join("words.pdf");

        let err = pipeline().run_source(&mut source, "all", &output, None).unwrap_err();
        assert!(matches!(err, Error::Output(_)));
        assert_eq!(err.stage(), "output");
    }

    #[test]
    fn test_empty_text_renders_one_page() {
        let dir = TempDir::new().unwrap();
        let mut source = TextPageSource::new(["1 2 3", "..."]);
        let output = dir.path().join("words.pdf");

        let summary = pipeline().run_source(&mut source, "all", &output, None).unwrap();
        assert_eq!(summary.distinct_words, 0);
        assert_eq!(summary.report_pages, 1);
        assert!(output.exists());
    }
}
