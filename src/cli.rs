//! CLI argument parsing for the wordplot binaries

use crate::zipf::TableFormat;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Output target that prints the chart to the terminal instead of a file
pub const ASCII_OUTPUT: &str = "ascii";

/// `countwords`: count the words of a text file
#[derive(Parser, Debug)]
#[command(name = "countwords")]
#[command(version)]
#[command(about = "Count word frequencies in a text file", long_about = None)]
pub struct CountWordsCli {
    /// Text file to count
    pub input_file: PathBuf,

    /// Data file to write (word count percentage per line)
    pub output_file: PathBuf,

    /// Ignore words shorter than this many characters
    #[arg(default_value = "1")]
    pub min_length: usize,

    /// Enable debug tracing output to stderr
    #[arg(long)]
    pub debug: bool,
}

/// `plotcounts`: chart the most frequent words of a data file
#[derive(Parser, Debug)]
#[command(name = "plotcounts")]
#[command(version)]
#[command(about = "Make plots for documents or to view", long_about = None)]
pub struct PlotCountsCli {
    /// Plot only the LIMIT most frequent words
    #[arg(long, value_name = "LIMIT", default_value = "10")]
    pub limit: usize,

    /// Display the chart on the terminal
    #[arg(long)]
    pub show: bool,

    /// Chart layout file (TOML)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable debug tracing output to stderr
    #[arg(long)]
    pub debug: bool,

    /// Data file produced by countwords
    pub input_file: PathBuf,

    /// "ascii" for a terminal chart, otherwise an image path such as name.svg
    pub output_file: Option<String>,
}

impl PlotCountsCli {
    /// True when the chart goes to the terminal rather than a file
    pub fn ascii_requested(&self) -> bool {
        self.output_file.as_deref() == Some(ASCII_OUTPUT)
    }
}

/// `testzipf`: compare the two most frequent words of each book
#[derive(Parser, Debug)]
#[command(name = "testzipf")]
#[command(version)]
#[command(
    about = "Print a table of the 2 most frequent words in each book",
    long_about = None
)]
pub struct TestZipfCli {
    /// Use LaTeX format for table
    #[arg(long)]
    pub latex: bool,

    /// Enable debug tracing output to stderr
    #[arg(long)]
    pub debug: bool,

    /// Data files produced by countwords
    pub data_files: Vec<PathBuf>,
}

impl TestZipfCli {
    pub fn table_format(&self) -> TableFormat {
        if self.latex {
            TableFormat::Latex
        } else {
            TableFormat::Text
        }
    }
}

/// Initialize the stderr tracing subscriber
///
/// Warnings are always shown; `--debug` adds debug and info events.
pub fn init_tracing(debug: bool) {
    let level = if debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .init();
}
