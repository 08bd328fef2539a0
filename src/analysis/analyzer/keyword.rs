//! Keyword analyzer: decides which words of a document are keywords.
//!
//! A word is a keyword if, once a trailing run of non-letters is stripped,
//! it consists only of ASCII letters and its lower-cased form is not a
//! noise word. The analyzer is a fixed pipeline:
//!
//! ```text
//! whitespace → strip → alphabetic → lowercase → stop
//! ```
//!
//! Letters are checked before lowercasing, so characters whose lowercase
//! form is ASCII (the Kelvin sign, for one) are rejected.
//!
//! # Examples
//!
//! ```
//! use quiver::analysis::analyzer::KeywordAnalyzer;
//!
//! let analyzer = KeywordAnalyzer::new().unwrap().with_noise_words(["the"]);
//!
//! assert_eq!(analyzer.normalize("End."), Some("end".to_string()));
//! assert_eq!(analyzer.normalize("a.b"), None);
//! assert_eq!(analyzer.normalize("?!"), None);
//! assert_eq!(analyzer.normalize("The"), None);
//! ```

use std::sync::Arc;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::{AlphabeticFilter, LowercaseFilter, StopFilter, StripFilter};
use crate::analysis::tokenizer::WhitespaceTokenizer;
use crate::error::Result;

/// An analyzer that extracts normalized keywords from text.
#[derive(Clone, Debug)]
pub struct KeywordAnalyzer {
    strip: StripFilter,
    noise_words: StopFilter,
    pipeline: PipelineAnalyzer,
}

impl KeywordAnalyzer {
    /// Create a keyword analyzer with no noise words.
    pub fn new() -> Result<Self> {
        Ok(Self::build(StripFilter::new()?, StopFilter::new()))
    }

    /// Create a keyword analyzer using the given noise-word filter.
    pub fn with_stop_filter(noise_words: StopFilter) -> Result<Self> {
        Ok(Self::build(StripFilter::new()?, noise_words))
    }

    /// Return an analyzer that additionally treats `words` as noise words.
    pub fn with_noise_words<I, S>(&self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::build(self.strip.clone(), self.noise_words.extended(words))
    }

    fn build(strip: StripFilter, noise_words: StopFilter) -> Self {
        let pipeline = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
            .add_filter(Arc::new(strip.clone()))
            .add_filter(Arc::new(AlphabeticFilter::new()))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(noise_words.clone()))
            .with_name("keyword");

        KeywordAnalyzer {
            strip,
            noise_words,
            pipeline,
        }
    }

    /// The noise words this analyzer rejects.
    pub fn noise_words(&self) -> &StopFilter {
        &self.noise_words
    }

    /// Normalize a single raw word.
    ///
    /// Returns the keyword, or `None` if the word is not a keyword: it is
    /// empty after stripping, it still holds a non-letter, or it is a noise
    /// word.
    pub fn normalize(&self, word: &str) -> Option<String> {
        let stripped = self.strip.strip(word)?;
        if !AlphabeticFilter::is_alphabetic(stripped) {
            return None;
        }

        let keyword = stripped.to_lowercase();
        (!self.noise_words.is_stop_word(&keyword)).then_some(keyword)
    }
}

impl Analyzer for KeywordAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.pipeline.analyze(text)
    }

    fn name(&self) -> &'static str {
        "keyword"
    }
}
