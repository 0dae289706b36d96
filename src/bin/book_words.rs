//! Build a word-frequency report from a PDF book.
//!
//! Usage:
//!   book_words <input.pdf> [-o output.pdf] [-p RANGE] [-c config.json] [--json] [--quiet]
//!
//! RANGE is `all` (default), a single page `7`, or `1-5` / `1,5`.
//! Set RUST_LOG=debug for per-page detail.

use book_words::pipeline::default_output_path;
use book_words::{
    parse_page_range, AnalyzerConfig, PageSource, PdfPageSource, Result, RunSummary,
    WordListPipeline,
};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

const USAGE: &str =
    "Usage: book_words <input.pdf> [-o output.pdf] [-p RANGE] [-c config.json] [--json] [--quiet]";

struct CliArgs {
    input: PathBuf,
    output: Option<PathBuf>,
    range: String,
    config: Option<PathBuf>,
    json: bool,
    quiet: bool,
}

impl CliArgs {
    fn from_args() -> std::result::Result<Self, String> {
        let args: Vec<String> = std::env::args().skip(1).collect();
        let mut input = None;
        let mut output = None;
        let mut range = "all".to_string();
        let mut config = None;
        let mut json = false;
        let mut quiet = false;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "-o" | "--output" | "-p" | "--pages" | "-c" | "--config" => {
                    let flag = args[i].clone();
                    i += 1;
                    let value = args
                        .get(i)
                        .ok_or_else(|| format!("{} needs a value", flag))?
                        .clone();
                    match flag.as_str() {
                        "-o" | "--output" => output = Some(PathBuf::from(value)),
                        "-p" | "--pages" => range = value,
                        _ => config = Some(PathBuf::from(value)),
                    }
                },
                "--json" => json = true,
                "--quiet" | "-q" => quiet = true,
                "-h" | "--help" => return Err(String::new()),
                other if other.starts_with('-') => {
                    return Err(format!("unknown option {}", other));
                },
                other => {
                    if input.replace(PathBuf::from(other)).is_some() {
                        return Err("only one input file is supported".to_string());
                    }
                },
            }
            i += 1;
        }

        Ok(Self {
            input: input.ok_or_else(|| "missing input file".to_string())?,
            output,
            range,
            config,
            json,
            quiet,
        })
    }
}

/// Overwrite the progress line. Write errors on a closed stderr are ignored.
fn show_progress(out: &mut impl Write, done: usize, total: usize) {
    write!(out, "\rExtracting page {}/{}", done, total).ok();
    out.flush().ok();
}

fn summary_line(summary: &RunSummary) -> String {
    format!(
        "{} distinct words ({} tokens) from {} pages -> {} ({} pages)",
        summary.distinct_words,
        summary.token_count,
        summary.pages_processed,
        summary.output.display(),
        summary.report_pages
    )
}

fn run(args: &CliArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => AnalyzerConfig::from_json_file(path)?,
        None => AnalyzerConfig::default(),
    };
    let pipeline = WordListPipeline::new(config)?;
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&args.input));

    let mut source = PdfPageSource::open(&args.input)?;
    let total = parse_page_range(&args.range, source.page_count())?.len();

    let quiet = args.quiet;
    let mut done = 0usize;
    let mut progress = || {
        done += 1;
        if !quiet {
            show_progress(&mut std::io::stderr(), done, total);
        }
    };
    let summary = pipeline.run_source(&mut source, &args.range, &output, Some(&mut progress))?;
    if !quiet {
        eprintln!();
    }

    if args.json {
        let json = serde_json::to_string_pretty(&summary.words)
            .map_err(|e| book_words::Error::Output(e.to_string()))?;
        println!("{}", json);
    }
    if !quiet {
        eprintln!("{}", summary_line(&summary));
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = match CliArgs::from_args() {
        Ok(args) => args,
        Err(message) if message.is_empty() => {
            println!("{}", USAGE);
            return ExitCode::SUCCESS;
        },
        Err(message) => {
            eprintln!("Error: {}", message);
            eprintln!("{}", USAGE);
            return ExitCode::from(2);
        },
    };

    let default_level = if args.quiet { "warn" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!();
            eprintln!("Error during {}: {}", e.stage(), e);
            ExitCode::FAILURE
        },
    }
}
