//! The in-memory keyword index.
//!
//! Maps each keyword to its occurrences across documents, kept in
//! descending frequency order after every merge.

use ahash::{AHashMap, AHashSet};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::index::IndexConfig;
use crate::index::frequency::FrequencyTable;
use crate::index::insertion::insert_last_occurrence;
use crate::index::occurrence::Occurrence;

/// Summary counts of a [`KeywordIndex`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IndexStats {
    /// Number of distinct keywords.
    pub keywords: usize,
    /// Number of (keyword, document) occurrences.
    pub occurrences: usize,
    /// Number of documents merged.
    pub documents: usize,
}

/// Keyword to frequency-sorted occurrence list.
#[derive(Debug, Clone, Default)]
pub struct KeywordIndex {
    entries: AHashMap<String, Vec<Occurrence>>,
    documents: AHashSet<String>,
}

impl KeywordIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty index sized according to `config`.
    pub fn with_config(config: &IndexConfig) -> Self {
        KeywordIndex {
            entries: AHashMap::with_capacity(config.index_capacity),
            documents: AHashSet::new(),
        }
    }

    /// Merge one document's keyword counts into the index.
    ///
    /// A keyword seen for the first time gets a list of its own; otherwise
    /// the occurrence is appended and moved into place by binary search.
    /// Each table must come from a document not merged before.
    pub fn merge(&mut self, table: FrequencyTable) {
        let document = table.document().to_string();
        let keywords = table.len();

        for (keyword, occurrence) in table {
            self.merge_occurrence(keyword, occurrence);
        }

        debug!("merged {keywords} keywords from {document}");
        self.documents.insert(document);
    }

    /// Merge a single occurrence for `keyword`.
    ///
    /// Returns the midpoints probed while placing it, or `None` when the
    /// keyword's list had no other entries.
    pub fn merge_occurrence<K: Into<String>>(
        &mut self,
        keyword: K,
        occurrence: Occurrence,
    ) -> Option<Vec<usize>> {
        let occurrences = self.entries.entry(keyword.into()).or_default();
        occurrences.push(occurrence);
        insert_last_occurrence(occurrences)
    }

    /// Occurrences of `keyword`, highest frequency first.
    pub fn occurrences(&self, keyword: &str) -> Option<&[Occurrence]> {
        self.entries.get(keyword).map(Vec::as_slice)
    }

    /// Whether `keyword` is indexed.
    pub fn contains_keyword(&self, keyword: &str) -> bool {
        self.entries.contains_key(keyword)
    }

    /// Whether a table for `document` has been merged.
    pub fn contains_document(&self, document: &str) -> bool {
        self.documents.contains(document)
    }

    /// All indexed keywords, in no particular order.
    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterate over keywords with their occurrence lists.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Occurrence])> {
        self.entries
            .iter()
            .map(|(keyword, occurrences)| (keyword.as_str(), occurrences.as_slice()))
    }

    /// Number of distinct keywords.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been indexed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Summary counts.
    pub fn stats(&self) -> IndexStats {
        IndexStats {
            keywords: self.entries.len(),
            occurrences: self.entries.values().map(Vec::len).sum(),
            documents: self.documents.len(),
        }
    }
}
