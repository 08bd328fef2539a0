//! Command line argument parsing for the Quiver CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Quiver - frequency-ranked keyword search over a small document corpus
#[derive(Parser, Debug, Clone)]
#[command(name = "quiver")]
#[command(about = "Index a set of documents and search them for two keywords")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct QuiverArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Engine configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "QUIVER_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl QuiverArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Build the index and search it for documents containing either keyword
    Search(SearchArgs),

    /// Build the index and show its statistics
    Index(CorpusArgs),

    /// Build the index and show one keyword's occurrences
    Show(ShowArgs),
}

/// The files a corpus is read from
#[derive(Args, Debug, Clone)]
pub struct CorpusArgs {
    /// File listing the documents to index
    #[arg(value_name = "DOCS_FILE")]
    pub docs_file: PathBuf,

    /// File listing the noise words
    #[arg(value_name = "NOISE_FILE")]
    pub noise_file: PathBuf,

    /// Directory document names are relative to (defaults to the docs file's directory)
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,
}

/// Arguments for searching
#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    #[command(flatten)]
    pub corpus: CorpusArgs,

    /// First keyword; wins ties
    #[arg(value_name = "KEYWORD1")]
    pub keyword1: String,

    /// Second keyword
    #[arg(value_name = "KEYWORD2")]
    pub keyword2: String,

    /// Show the frequency and keyword behind each result
    #[arg(long)]
    pub details: bool,
}

/// Arguments for showing a keyword
#[derive(Args, Debug, Clone)]
pub struct ShowArgs {
    #[command(flatten)]
    pub corpus: CorpusArgs,

    /// Keyword to show
    #[arg(value_name = "KEYWORD")]
    pub keyword: String,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
