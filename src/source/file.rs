//! File-based document source.
//!
//! Two list files drive indexing: one naming the documents and one holding
//! the noise words. Both hold whitespace-separated entries, usually one per
//! line. Document names are resolved against a root directory, by default
//! the directory containing the document list.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{QuiverError, Result};
use crate::source::traits::{DocumentSource, LineReader};

/// A document source backed by files on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    /// File listing the document names.
    document_list: PathBuf,
    /// File listing the noise words.
    noise_words: PathBuf,
    /// Directory document names are resolved against.
    root: PathBuf,
}

impl FileSource {
    /// Create a source from a document list file and a noise-word file.
    pub fn new<D: AsRef<Path>, N: AsRef<Path>>(document_list: D, noise_words: N) -> Self {
        let document_list = document_list.as_ref().to_path_buf();
        let root = document_list
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        FileSource {
            document_list,
            noise_words: noise_words.as_ref().to_path_buf(),
            root,
        }
    }

    /// Resolve document names against `root` instead.
    pub fn with_root<P: AsRef<Path>>(mut self, root: P) -> Self {
        self.root = root.as_ref().to_path_buf();
        self
    }

    /// Directory document names are resolved against.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the full path for a document name.
    pub fn document_path(&self, document: &str) -> PathBuf {
        self.root.join(document)
    }

    fn read(path: &Path, name: &str) -> Result<String> {
        fs::read_to_string(path).map_err(|e| QuiverError::source_unavailable(name, e))
    }

    fn read_list(path: &Path) -> Result<Vec<String>> {
        let name = path.display().to_string();
        let contents = Self::read(path, &name)?;
        Ok(contents.split_whitespace().map(String::from).collect())
    }
}

impl LineReader for FileSource {
    fn read_lines(&self, document: &str) -> Result<Vec<String>> {
        let path = self.document_path(document);
        debug!("reading {}", path.display());

        let contents = Self::read(&path, document)?;
        Ok(contents.lines().map(String::from).collect())
    }
}

impl DocumentSource for FileSource {
    fn list_documents(&self) -> Result<Vec<String>> {
        Self::read_list(&self.document_list)
    }

    fn list_noise_words(&self) -> Result<HashSet<String>> {
        Ok(Self::read_list(&self.noise_words)?.into_iter().collect())
    }
}
