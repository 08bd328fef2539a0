//! Command implementations for the Quiver CLI.

use std::io::{self, Write};
use std::time::Instant;

use log::debug;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::search::{EngineConfig, SearchEngine};
use crate::source::FileSource;

/// Execute a CLI command, writing its result to stdout.
pub fn execute_command(args: QuiverArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute_command_to(&args, &mut out)
}

/// Execute a CLI command, writing its result to `out`.
pub fn execute_command_to<W: Write>(args: &QuiverArgs, out: &mut W) -> Result<()> {
    match &args.command {
        Command::Search(search_args) => search(search_args, args, out),
        Command::Index(corpus_args) => show_stats(corpus_args, args, out),
        Command::Show(show_args) => show_keyword(show_args, args, out),
    }
}

/// Load the engine configuration named on the command line, or the default.
fn load_config(cli_args: &QuiverArgs) -> Result<EngineConfig> {
    match &cli_args.config {
        Some(path) => {
            debug!("loading configuration from {}", path.display());
            EngineConfig::from_json_file(path)
        }
        None => Ok(EngineConfig::default()),
    }
}

/// Build an engine over the corpus the arguments name.
fn build_engine(corpus: &CorpusArgs, cli_args: &QuiverArgs) -> Result<SearchEngine> {
    let mut source = FileSource::new(&corpus.docs_file, &corpus.noise_file);
    if let Some(root) = &corpus.root {
        source = source.with_root(root);
    }

    let mut engine = SearchEngine::with_config(load_config(cli_args)?)?;
    engine.build_from_source(&source)?;
    Ok(engine)
}

/// Search the corpus for two keywords.
fn search<W: Write>(args: &SearchArgs, cli_args: &QuiverArgs, out: &mut W) -> Result<()> {
    let engine = build_engine(&args.corpus, cli_args)?;

    let start = Instant::now();
    let (documents, hits) = if args.details {
        let hits = engine.search_hits(&args.keyword1, &args.keyword2);
        let documents = hits
            .as_ref()
            .map(|hits| hits.iter().map(|hit| hit.document.clone()).collect());
        (documents, hits)
    } else {
        (engine.search(&args.keyword1, &args.keyword2), None)
    };
    let duration = start.elapsed();

    let results = SearchResults {
        keyword1: args.keyword1.clone(),
        keyword2: args.keyword2.clone(),
        documents,
        hits,
        duration_ms: duration.as_millis() as u64,
    };

    output_result(out, &results, cli_args)
}

/// Build the index and report its size.
fn show_stats<W: Write>(args: &CorpusArgs, cli_args: &QuiverArgs, out: &mut W) -> Result<()> {
    let start = Instant::now();
    let engine = build_engine(args, cli_args)?;
    let duration = start.elapsed();

    let stats = engine.stats();
    let summary = IndexSummary {
        documents: stats.documents,
        keywords: stats.keywords,
        occurrences: stats.occurrences,
        noise_words: engine.analyzer().noise_words().len(),
        duration_ms: duration.as_millis() as u64,
    };

    output_result(out, &summary, cli_args)
}

/// Show the occurrence list stored for one keyword.
fn show_keyword<W: Write>(args: &ShowArgs, cli_args: &QuiverArgs, out: &mut W) -> Result<()> {
    let engine = build_engine(&args.corpus, cli_args)?;

    let keyword = args.keyword.to_lowercase();
    let occurrences = engine.index().occurrences(&keyword).map(<[_]>::to_vec);

    output_result(
        out,
        &KeywordOccurrences {
            keyword,
            occurrences,
        },
        cli_args,
    )
}
