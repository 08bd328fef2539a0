//! High-level search engine that combines indexing and searching.
//!
//! A [`SearchEngine`] has two phases. During the build phase documents are
//! read through a [`LineReader`], counted, and merged into the index; this
//! needs `&mut self`. Afterwards the engine is only queried, through `&self`,
//! so a built engine can be shared between threads.

use std::fs;
use std::path::Path;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::KeywordAnalyzer;
use crate::error::{QuiverError, Result};
use crate::index::{FrequencyTable, IndexConfig, IndexStats, KeywordIndex};
use crate::search::SearchConfig;
use crate::search::ranked::{RankedSearcher, SearchHit};
use crate::source::{DocumentSource, LineReader};

/// Configuration for a [`SearchEngine`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Index settings.
    pub index: IndexConfig,
    /// Search settings.
    pub search: SearchConfig,
}

impl EngineConfig {
    /// Load a configuration from a JSON file.
    ///
    /// Missing fields take their default values.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())?;
        let config: EngineConfig = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the maximum number of documents a search returns.
    pub fn max_results(mut self, max_results: usize) -> Self {
        self.search.max_results = max_results;
        self
    }

    /// Set the initial capacity of the keyword map.
    pub fn index_capacity(mut self, index_capacity: usize) -> Self {
        self.index.index_capacity = index_capacity;
        self
    }

    /// Check that the configuration is usable.
    pub fn validate(&self) -> Result<()> {
        if self.search.max_results == 0 {
            return Err(QuiverError::config("search.max_results must be at least 1"));
        }
        Ok(())
    }
}

/// Builds a keyword index and answers ranked two-keyword searches.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    config: EngineConfig,
    analyzer: KeywordAnalyzer,
    index: KeywordIndex,
}

impl SearchEngine {
    /// Create an empty engine with the default configuration.
    pub fn new() -> Result<Self> {
        Self::with_config(EngineConfig::default())
    }

    /// Create an empty engine with the given configuration.
    pub fn with_config(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(SearchEngine {
            analyzer: KeywordAnalyzer::new()?,
            index: KeywordIndex::with_config(&config.index),
            config,
        })
    }

    /// Index every document listed by `source`.
    ///
    /// The noise words are read first, then the document list, then each
    /// document in order. Any source that cannot be read aborts the build
    /// with `SourceUnavailable`; documents merged before the failure stay
    /// in the index.
    pub fn build_from_source<S>(&mut self, source: &S) -> Result<()>
    where
        S: DocumentSource + ?Sized,
    {
        let noise_words = source.list_noise_words()?;
        let documents = source.list_documents()?;
        self.build_index(documents.as_slice(), noise_words, source)
    }

    /// Index `documents`, reading their lines through `reader`.
    ///
    /// `noise_words` are added to the engine's noise words before any
    /// document is read.
    pub fn build_index<D, N, W, R>(&mut self, documents: &[D], noise_words: N, reader: &R) -> Result<()>
    where
        D: AsRef<str>,
        N: IntoIterator<Item = W>,
        W: Into<String>,
        R: LineReader + ?Sized,
    {
        self.add_noise_words(noise_words);

        let mut indexed = 0;
        for document in documents {
            if self.index_document(document.as_ref(), reader)? {
                indexed += 1;
            }
        }

        let stats = self.index.stats();
        info!(
            "indexed {indexed} documents; index holds {} keywords over {} documents",
            stats.keywords, stats.documents
        );
        Ok(())
    }

    /// Add words to exclude from subsequently indexed documents.
    pub fn add_noise_words<N, W>(&mut self, noise_words: N)
    where
        N: IntoIterator<Item = W>,
        W: Into<String>,
    {
        self.analyzer = self.analyzer.with_noise_words(noise_words);
        debug!("{} noise words loaded", self.analyzer.noise_words().len());
    }

    /// Read, count and merge a single document.
    ///
    /// Returns `false` without reading anything if the document has already
    /// been indexed.
    pub fn index_document<R>(&mut self, document: &str, reader: &R) -> Result<bool>
    where
        R: LineReader + ?Sized,
    {
        if self.index.contains_document(document) {
            warn!("skipping {document}: already indexed");
            return Ok(false);
        }

        let lines = reader.read_lines(document)?;
        let table = FrequencyTable::from_lines(document, lines, &self.analyzer)?;
        self.index.merge(table);
        Ok(true)
    }

    /// Documents containing either keyword, best first, at most
    /// `max_results` of them; `None` when nothing matches.
    pub fn search(&self, keyword1: &str, keyword2: &str) -> Option<Vec<String>> {
        self.searcher().search(keyword1, keyword2)
    }

    /// Like [`search`](Self::search), with the frequency and keyword behind
    /// each document.
    pub fn search_hits(&self, keyword1: &str, keyword2: &str) -> Option<Vec<SearchHit>> {
        self.searcher().search_hits(keyword1, keyword2)
    }

    /// A searcher over the current index.
    pub fn searcher(&self) -> RankedSearcher<'_> {
        RankedSearcher::new(&self.index, &self.config.search)
    }

    /// Normalize a raw word the way documents are indexed.
    pub fn normalize(&self, word: &str) -> Option<String> {
        self.analyzer.normalize(word)
    }

    /// The keyword index.
    pub fn index(&self) -> &KeywordIndex {
        &self.index
    }

    /// The analyzer documents are indexed with.
    pub fn analyzer(&self) -> &KeywordAnalyzer {
        &self.analyzer
    }

    /// The engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Index summary counts.
    pub fn stats(&self) -> IndexStats {
        self.index.stats()
    }

    /// Whether `word` is currently a noise word.
    pub fn has_noise_word(&self, word: &str) -> bool {
        self.analyzer.noise_words().is_stop_word(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::Occurrence;
    use crate::source::MemorySource;

    fn corpus() -> MemorySource {
        MemorySource::new()
            .add_document("d1", "The cat sat. The cat ran!")
            .add_document("d2", "A cat cat cat.")
            .add_noise_words(["the", "is"])
    }

    #[test]
    fn test_worked_example() {
        let mut engine = SearchEngine::new().unwrap();
        engine.build_from_source(&corpus()).unwrap();

        assert_eq!(
            engine.index().occurrences("cat").unwrap(),
            &[Occurrence::new("d2", 3), Occurrence::new("d1", 2)]
        );
        assert_eq!(
            engine.index().occurrences("a").unwrap(),
            &[Occurrence::new("d2", 1)]
        );
        assert!(engine.index().occurrences("the").is_none());
        assert_eq!(
            engine.search("cat", "sat"),
            Some(vec!["d2".to_string(), "d1".to_string()])
        );
    }

    #[test]
    fn test_build_index_with_explicit_parts() {
        let source = corpus();
        let mut engine = SearchEngine::new().unwrap();
        engine
            .build_index(&["d2", "d1"], ["cat"], &source)
            .unwrap();

        assert!(engine.has_noise_word("cat"));
        assert!(!engine.index().contains_keyword("cat"));
        assert!(engine.index().contains_keyword("the"));
        assert_eq!(engine.search("sat", "ran"), Some(vec!["d1".to_string()]));
    }

    #[test]
    fn test_missing_document_aborts_build() {
        let source = MemorySource::new()
            .add_document("d1", "alpha beta")
            .add_missing_document("gone")
            .add_document("d3", "gamma");

        let mut engine = SearchEngine::new().unwrap();
        let err = engine.build_from_source(&source).unwrap_err();

        assert!(err.is_source_unavailable());
        assert!(engine.index().contains_document("d1"));
        assert!(!engine.index().contains_document("d3"));
        assert_eq!(engine.search("alpha", "gamma"), Some(vec!["d1".to_string()]));
    }

    #[test]
    fn test_duplicate_document_is_skipped() {
        let source = MemorySource::new().add_document("d1", "echo echo");
        let mut engine = SearchEngine::new().unwrap();

        engine.build_index(&["d1", "d1"], Vec::<String>::new(), &source).unwrap();
        assert_eq!(engine.index().occurrences("echo").unwrap().len(), 1);
        assert!(!engine.index_document("d1", &source).unwrap());
        assert_eq!(engine.stats().documents, 1);
    }

    #[test]
    fn test_no_results() {
        let mut engine = SearchEngine::new().unwrap();
        engine.build_from_source(&corpus()).unwrap();

        assert_eq!(engine.search("dog", "bird"), None);
        assert_eq!(engine.search_hits("dog", "bird"), None);
    }

    #[test]
    fn test_config() {
        let config = EngineConfig::default().max_results(1).index_capacity(16);
        let mut engine = SearchEngine::with_config(config.clone()).unwrap();
        engine.build_from_source(&corpus()).unwrap();

        assert_eq!(engine.config(), &config);
        assert_eq!(engine.search("cat", "sat"), Some(vec!["d2".to_string()]));

        let err = SearchEngine::with_config(EngineConfig::default().max_results(0)).unwrap_err();
        assert!(matches!(err, QuiverError::Config(_)));
    }

    #[test]
    fn test_config_from_json() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("quiver.json");
        fs::write(&path, r#"{"search": {"max_results": 3}}"#).unwrap();

        let config = EngineConfig::from_json_file(&path).unwrap();
        assert_eq!(config.search.max_results, 3);
        assert_eq!(config.index, IndexConfig::default());

        fs::write(&path, r#"{"search": {"max_results": 0}}"#).unwrap();
        assert!(EngineConfig::from_json_file(&path).is_err());

        fs::write(&path, "not json").unwrap();
        assert!(matches!(
            EngineConfig::from_json_file(&path).unwrap_err(),
            QuiverError::Json(_)
        ));
    }

    #[test]
    fn test_normalize_uses_noise_words() {
        let mut engine = SearchEngine::new().unwrap();
        engine.add_noise_words(["and"]);

        assert_eq!(engine.normalize("And,"), None);
        assert_eq!(engine.normalize("Or,"), Some("or".to_string()));
        assert_eq!(engine.analyzer().noise_words().len(), 1);
    }
}
