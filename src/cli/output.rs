//! Output formatting for CLI commands.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, QuiverArgs};
use crate::error::Result;
use crate::index::Occurrence;
use crate::search::SearchHit;

/// Result structure for search operations.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResults {
    pub keyword1: String,
    pub keyword2: String,
    /// Matching documents, `None` when nothing matched.
    pub documents: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hits: Option<Vec<SearchHit>>,
    pub duration_ms: u64,
}

/// Index statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct IndexSummary {
    pub documents: usize,
    pub keywords: usize,
    pub occurrences: usize,
    pub noise_words: usize,
    pub duration_ms: u64,
}

/// One keyword's occurrence list.
#[derive(Debug, Serialize, Deserialize)]
pub struct KeywordOccurrences {
    pub keyword: String,
    pub occurrences: Option<Vec<Occurrence>>,
}

/// Human-readable rendering of a command result.
pub trait HumanOutput {
    /// Write this result for a person to read.
    fn write_human(&self, out: &mut dyn Write, verbosity: u8) -> Result<()>;
}

/// Output a result in the specified format.
pub fn output_result<T, W>(out: &mut W, result: &T, args: &QuiverArgs) -> Result<()>
where
    T: Serialize + HumanOutput,
    W: Write,
{
    match args.output_format {
        OutputFormat::Human => result.write_human(out, args.verbosity()),
        OutputFormat::Json => output_json(out, result, args.pretty),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize, W: Write>(out: &mut W, result: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    writeln!(out, "{json}")?;
    Ok(())
}

impl HumanOutput for SearchResults {
    fn write_human(&self, out: &mut dyn Write, verbosity: u8) -> Result<()> {
        if verbosity > 1 {
            writeln!(out, "Query: {} OR {}", self.keyword1, self.keyword2)?;
        }

        match (&self.documents, &self.hits) {
            (None, _) => writeln!(out, "No matching documents.")?,
            (Some(_), Some(hits)) => {
                for (i, hit) in hits.iter().enumerate() {
                    writeln!(
                        out,
                        "{}. {} ({} x {})",
                        i + 1,
                        hit.document,
                        hit.keyword,
                        hit.frequency
                    )?;
                }
            }
            (Some(documents), None) => {
                for (i, document) in documents.iter().enumerate() {
                    writeln!(out, "{}. {document}", i + 1)?;
                }
            }
        }

        if verbosity > 1 {
            writeln!(out, "Search time: {}ms", self.duration_ms)?;
        }
        Ok(())
    }
}

impl HumanOutput for IndexSummary {
    fn write_human(&self, out: &mut dyn Write, verbosity: u8) -> Result<()> {
        writeln!(out, "Index Statistics:")?;
        writeln!(out, "════════════════")?;
        writeln!(out, "Documents: {}", self.documents)?;
        writeln!(out, "Keywords: {}", self.keywords)?;
        writeln!(out, "Occurrences: {}", self.occurrences)?;
        writeln!(out, "Noise words: {}", self.noise_words)?;
        if verbosity > 1 {
            writeln!(out, "Build time: {}ms", self.duration_ms)?;
        }
        Ok(())
    }
}

impl HumanOutput for KeywordOccurrences {
    fn write_human(&self, out: &mut dyn Write, _verbosity: u8) -> Result<()> {
        match &self.occurrences {
            Some(occurrences) => {
                let rendered: Vec<String> = occurrences.iter().map(ToString::to_string).collect();
                writeln!(out, "{}: {}", self.keyword, rendered.join(" "))?;
            }
            None => writeln!(out, "{}: not indexed", self.keyword)?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn args(extra: &[&str]) -> QuiverArgs {
        let mut argv = vec!["quiver"];
        argv.extend_from_slice(extra);
        argv.extend_from_slice(&["index", "docs.txt", "noise.txt"]);
        QuiverArgs::try_parse_from(argv).unwrap()
    }

    fn render<T: Serialize + HumanOutput>(result: &T, args: &QuiverArgs) -> String {
        let mut out = Vec::new();
        output_result(&mut out, result, args).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn results(documents: Option<Vec<&str>>) -> SearchResults {
        SearchResults {
            keyword1: "cat".to_string(),
            keyword2: "sat".to_string(),
            documents: documents.map(|docs| docs.into_iter().map(String::from).collect()),
            hits: None,
            duration_ms: 0,
        }
    }

    #[test]
    fn test_search_results_human() {
        let output = render(&results(Some(vec!["d2", "d1"])), &args(&[]));
        assert_eq!(output, "1. d2\n2. d1\n");

        let output = render(&results(None), &args(&[]));
        assert_eq!(output, "No matching documents.\n");
    }

    #[test]
    fn test_search_results_json() {
        let output = render(&results(None), &args(&["--format", "json"]));
        assert_eq!(
            output,
            "{\"keyword1\":\"cat\",\"keyword2\":\"sat\",\"documents\":null,\"duration_ms\":0}\n"
        );
    }

    #[test]
    fn test_search_hits_human() {
        let mut with_hits = results(Some(vec!["d2"]));
        with_hits.hits = Some(vec![SearchHit {
            document: "d2".to_string(),
            frequency: 3,
            keyword: "cat".to_string(),
        }]);

        assert_eq!(render(&with_hits, &args(&[])), "1. d2 (cat x 3)\n");
    }

    #[test]
    fn test_keyword_occurrences_human() {
        let shown = KeywordOccurrences {
            keyword: "cat".to_string(),
            occurrences: Some(vec![Occurrence::new("d2", 3), Occurrence::new("d1", 2)]),
        };
        assert_eq!(render(&shown, &args(&[])), "cat: (d2,3) (d1,2)\n");

        let missing = KeywordOccurrences {
            keyword: "dog".to_string(),
            occurrences: None,
        };
        assert_eq!(render(&missing, &args(&[])), "dog: not indexed\n");
    }

    #[test]
    fn test_index_summary_human() {
        let summary = IndexSummary {
            documents: 2,
            keywords: 4,
            occurrences: 5,
            noise_words: 2,
            duration_ms: 1,
        };
        let output = render(&summary, &args(&[]));
        assert!(output.contains("Keywords: 4"));
        assert!(!output.contains("Build time"));

        let output = render(&summary, &args(&["-vv"]));
        assert!(output.contains("Build time: 1ms"));
    }
}
