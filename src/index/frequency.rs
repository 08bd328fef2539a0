//! Per-document keyword counting.
//!
//! A [`FrequencyTable`] holds one document's keyword counts. It is built
//! from the document's lines, merged into the global index, and discarded.

use std::collections::hash_map;

use ahash::AHashMap;

use crate::analysis::analyzer::{Analyzer, KeywordAnalyzer};
use crate::error::Result;
use crate::index::occurrence::Occurrence;

/// Keyword counts for a single document.
#[derive(Debug, Clone)]
pub struct FrequencyTable {
    document: String,
    entries: AHashMap<String, Occurrence>,
}

impl FrequencyTable {
    /// Create an empty table for `document`.
    pub fn new<S: Into<String>>(document: S) -> Self {
        FrequencyTable {
            document: document.into(),
            entries: AHashMap::new(),
        }
    }

    /// Count the keywords of a document's lines.
    ///
    /// Every word of every line goes through `analyzer`; words it rejects
    /// are skipped.
    pub fn from_lines<S, I, L>(document: S, lines: I, analyzer: &KeywordAnalyzer) -> Result<Self>
    where
        S: Into<String>,
        I: IntoIterator<Item = L>,
        L: AsRef<str>,
    {
        let mut table = FrequencyTable::new(document);
        for line in lines {
            for token in analyzer.analyze(line.as_ref())? {
                table.record(token.text);
            }
        }
        Ok(table)
    }

    /// Count one more appearance of `keyword`.
    pub fn record<K: Into<String>>(&mut self, keyword: K) {
        let document = &self.document;
        self.entries
            .entry(keyword.into())
            .and_modify(|occurrence| occurrence.frequency += 1)
            .or_insert_with(|| Occurrence::new(document.as_str(), 1));
    }

    /// The document this table counts.
    pub fn document(&self) -> &str {
        &self.document
    }

    /// Look up the occurrence of `keyword`.
    pub fn get(&self, keyword: &str) -> Option<&Occurrence> {
        self.entries.get(keyword)
    }

    /// Frequency of `keyword`, zero when absent.
    pub fn frequency(&self, keyword: &str) -> u32 {
        self.get(keyword).map_or(0, |occurrence| occurrence.frequency)
    }

    /// Number of distinct keywords.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the document had no keywords.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over keyword and occurrence pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Occurrence)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl IntoIterator for FrequencyTable {
    type Item = (String, Occurrence);
    type IntoIter = hash_map::IntoIter<String, Occurrence>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
