//! Lexsum CLI - Extractive Text Summarization
//!
//! Summarizes text files and writes each summary next to the others in an
//! output directory.

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use lexsum::{
    Config, Language, LogObserver, Result, Strategy, Summarizer, SummaryError, WordNormalization,
};
use log::{error, info, warn};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "lexsum")]
#[command(author = "Lexsum Contributors")]
#[command(version)]
#[command(about = "Extractive text summarization (Luhn and LSA)", long_about = None)]
struct Cli {
    /// Input text files
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Output directory for summaries
    #[arg(short, long, default_value = "data")]
    out_dir: PathBuf,

    /// Summarization method (luhn, lsa)
    #[arg(short, long)]
    method: Option<Strategy>,

    /// Number of sentences in an LSA summary
    #[arg(short = 'n', long)]
    sentences: Option<usize>,

    /// Percentile above which a word is significant (Luhn)
    #[arg(long)]
    word_percentile: Option<f64>,

    /// Percentile above which a sentence is kept (Luhn)
    #[arg(long)]
    sentence_percentile: Option<f64>,

    /// Word normalization (none, stem)
    #[arg(long)]
    normalization: Option<WordNormalization>,

    /// Document language; detected per file when omitted
    #[arg(short, long)]
    language: Option<Language>,

    /// JSON configuration file; command-line flags override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print summaries instead of writing files
    #[arg(long)]
    stdout: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Loads the configuration file, if any, and applies flag overrides.
    fn resolve_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_json_file(path)?,
            None => Config::default(),
        };

        let summarizer = &mut config.summarizer;
        if let Some(method) = self.method {
            summarizer.strategy = method;
        }
        if let Some(n) = self.sentences {
            summarizer.target_sentence_count = n;
        }
        if let Some(p) = self.word_percentile {
            summarizer.significant_word_percentile = p;
        }
        if let Some(p) = self.sentence_percentile {
            summarizer.summary_sentence_percentile = p;
        }
        if let Some(normalization) = self.normalization {
            summarizer.word_normalization = normalization;
        }
        if let Some(language) = self.language {
            summarizer.language = language;
        }

        config.validate()?;
        Ok(config)
    }
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    if let Err(e) = run(&cli) {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let start_time = Instant::now();
    let config = cli.resolve_config()?;
    info!(
        "Summarizing {} file(s) with {} (normalization: {})",
        cli.inputs.len(),
        config.summarizer.strategy,
        config.summarizer.word_normalization
    );

    if !cli.stdout {
        fs::create_dir_all(&cli.out_dir)?;
    }

    let pb = if cli.inputs.len() > 1 && !cli.stdout {
        let pb = ProgressBar::new(cli.inputs.len() as u64);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░  ");
        pb.set_style(style);
        pb
    } else {
        ProgressBar::hidden()
    };

    let results: Vec<(PathBuf, Result<String>)> = cli
        .inputs
        .par_iter()
        .map(|input| {
            let result = summarize_file(input, &config, cli.language.is_none());
            pb.inc(1);
            (input.clone(), result)
        })
        .collect();
    pb.finish_and_clear();

    let failures = if cli.stdout {
        print_summaries(results)
    } else {
        write_summaries(&cli.out_dir, results)
    };

    info!(
        "Done in {:.2?}: {} succeeded, {} failed",
        start_time.elapsed(),
        cli.inputs.len() - failures,
        failures
    );

    if failures > 0 {
        return Err(SummaryError::Config(format!(
            "{} of {} file(s) could not be summarized",
            failures,
            cli.inputs.len()
        )));
    }
    Ok(())
}

/// Prints every summary; returns the number of failed inputs.
fn print_summaries(results: Vec<(PathBuf, Result<String>)>) -> usize {
    let headers = results.len() > 1;
    let mut failures = 0;
    for (input, result) in results {
        match result {
            Ok(summary) => {
                if headers {
                    println!("==> {} <==", input.display());
                }
                println!("{}", summary);
            }
            Err(e) => {
                error!("{}: {}", input.display(), e);
                failures += 1;
            }
        }
    }
    failures
}

/// Writes every summary to `out_dir`; returns the number of failed inputs.
///
/// A summary that cannot be written counts as a failure and does not stop
/// the remaining ones.
fn write_summaries(out_dir: &Path, results: Vec<(PathBuf, Result<String>)>) -> usize {
    let mut failures = 0;
    for (input, result) in results {
        match result.and_then(|summary| write_summary(out_dir, &input, &summary)) {
            Ok(output) => info!("{} -> {}", input.display(), output.display()),
            Err(e) => {
                error!("{}: {}", input.display(), e);
                failures += 1;
            }
        }
    }
    failures
}

fn write_summary(out_dir: &Path, input: &Path, summary: &str) -> Result<PathBuf> {
    let output = output_path(out_dir, input)?;
    fs::write(&output, summary)?;
    Ok(output)
}

/// Summarizes one file, detecting its language when requested.
fn summarize_file(input: &Path, config: &Config, detect_language: bool) -> Result<String> {
    if !input.exists() {
        return Err(SummaryError::FileNotFound(input.to_path_buf()));
    }
    let text = fs::read_to_string(input)?;

    let mut config = config.clone();
    if detect_language {
        match Language::detect(&text) {
            Ok(language) => config.summarizer.language = language,
            Err(e) => warn!(
                "{}: {}; using {}",
                input.display(),
                e,
                config.summarizer.language
            ),
        }
    }

    let label = input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| input.display().to_string());
    let summarizer = Summarizer::new(config)?;
    summarizer.summarize_with_observer(&text, &LogObserver::labeled(label))
}

/// `<out_dir>/summed_<file name>`.
fn output_path(out_dir: &Path, input: &Path) -> Result<PathBuf> {
    let name = input.file_name().ok_or_else(|| {
        SummaryError::Config(format!("{} has no file name", input.display()))
    })?;
    Ok(out_dir.join(format!("summed_{}", name.to_string_lossy())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path() {
        let path = output_path(Path::new("data"), Path::new("texts/article.txt")).unwrap();
        assert_eq!(path, PathBuf::from("data/summed_article.txt"));
        assert!(output_path(Path::new("data"), Path::new("/")).is_err());
    }

    #[test]
    fn test_write_failure_does_not_stop_batch() {
        let dir = tempfile::tempdir().unwrap();
        // A directory where the first summary should go makes its write fail
        fs::create_dir(dir.path().join("summed_a.txt")).unwrap();

        let results = vec![
            (PathBuf::from("in/a.txt"), Ok("First summary.".to_string())),
            (
                PathBuf::from("in/missing.txt"),
                Err(SummaryError::FileNotFound(PathBuf::from("in/missing.txt"))),
            ),
            (PathBuf::from("in/b.txt"), Ok("Second summary.".to_string())),
        ];

        assert_eq!(write_summaries(dir.path(), results), 2);
        let written = fs::read_to_string(dir.path().join("summed_b.txt")).unwrap();
        assert_eq!(written, "Second summary.");
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::parse_from([
            "lexsum",
            "-m",
            "lsa",
            "-n",
            "5",
            "--normalization",
            "none",
            "-l",
            "de",
            "a.txt",
        ]);
        let config = cli.resolve_config().unwrap();
        assert_eq!(config.summarizer.strategy, Strategy::Lsa);
        assert_eq!(config.summarizer.target_sentence_count, 5);
        assert_eq!(config.summarizer.word_normalization, WordNormalization::None);
        assert_eq!(config.summarizer.language, Language::German);
        assert_eq!(cli.out_dir, PathBuf::from("data"));
    }

    #[test]
    fn test_invalid_flag_value_rejected() {
        let cli = Cli::parse_from(["lexsum", "--word-percentile", "150", "a.txt"]);
        assert!(cli.resolve_config().unwrap_err().is_config());
        assert!(Cli::try_parse_from(["lexsum", "-m", "textrank", "a.txt"]).is_err());
    }
}
