//! Document source traits.

use std::collections::HashSet;

use crate::error::Result;

/// Supplies the raw lines of a document.
pub trait LineReader: Send + Sync {
    /// Read every line of `document`.
    ///
    /// Fails with [`SourceUnavailable`](crate::error::QuiverError::SourceUnavailable)
    /// if the document cannot be located or read.
    fn read_lines(&self, document: &str) -> Result<Vec<String>>;
}

/// A complete corpus: documents, their lines, and the noise words.
pub trait DocumentSource: LineReader {
    /// Identifiers of the documents to index, in indexing order.
    fn list_documents(&self) -> Result<Vec<String>>;

    /// Words to exclude from the index.
    fn list_noise_words(&self) -> Result<HashSet<String>>;
}
