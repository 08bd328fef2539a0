//! In-memory document source for tests and embedding callers.

use std::collections::HashSet;
use std::io;

use ahash::AHashMap;

use crate::error::{QuiverError, Result};
use crate::source::traits::{DocumentSource, LineReader};

/// A document source holding its corpus in memory.
///
/// Documents are listed in the order they were added.
///
/// # Examples
///
/// ```
/// use quiver::source::{DocumentSource, LineReader, MemorySource};
///
/// let source = MemorySource::new()
///     .add_document("d1", "The cat sat.\nThe cat ran!")
///     .add_noise_words(["the", "is"]);
///
/// assert_eq!(source.list_documents().unwrap(), vec!["d1"]);
/// assert_eq!(source.read_lines("d1").unwrap().len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    order: Vec<String>,
    contents: AHashMap<String, String>,
    noise_words: HashSet<String>,
}

impl MemorySource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document with the given text.
    pub fn add_document<N: Into<String>, T: Into<String>>(mut self, name: N, text: T) -> Self {
        let name = name.into();
        if self.contents.insert(name.clone(), text.into()).is_none() {
            self.order.push(name);
        }
        self
    }

    /// List a document without providing its text.
    ///
    /// Reading it fails with `SourceUnavailable`.
    pub fn add_missing_document<N: Into<String>>(mut self, name: N) -> Self {
        self.order.push(name.into());
        self
    }

    /// Add noise words.
    pub fn add_noise_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.noise_words.extend(words.into_iter().map(Into::into));
        self
    }
}

impl LineReader for MemorySource {
    fn read_lines(&self, document: &str) -> Result<Vec<String>> {
        self.contents
            .get(document)
            .map(|text| text.lines().map(String::from).collect())
            .ok_or_else(|| {
                QuiverError::source_unavailable(
                    document,
                    io::Error::new(io::ErrorKind::NotFound, "no such document"),
                )
            })
    }
}

impl DocumentSource for MemorySource {
    fn list_documents(&self) -> Result<Vec<String>> {
        Ok(self.order.clone())
    }

    fn list_noise_words(&self) -> Result<HashSet<String>> {
        Ok(self.noise_words.clone())
    }
}
