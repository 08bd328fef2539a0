//! # Quiver
//!
//! A small in-memory keyword search engine.
//!
//! Quiver reads a list of text documents, counts how often each keyword
//! occurs in each document and keeps, per keyword, the documents it occurs
//! in ordered by that count. A search takes two keywords and returns the
//! documents containing either one, best first.
//!
//! ## Features
//!
//! - Word normalization with noise-word removal
//! - Occurrence lists kept sorted by frequency during indexing
//! - Two-keyword OR search ranked by frequency
//! - File-backed and in-memory document sources
//!
//! ## Example
//!
//! ```
//! use quiver::prelude::*;
//!
//! let source = MemorySource::new()
//!     .add_document("d1", "The cat sat. The cat ran!")
//!     .add_document("d2", "A cat cat cat.")
//!     .add_noise_words(["the", "is"]);
//!
//! let mut engine = SearchEngine::new().unwrap();
//! engine.build_from_source(&source).unwrap();
//!
//! assert_eq!(
//!     engine.search("cat", "sat"),
//!     Some(vec!["d2".to_string(), "d1".to_string()])
//! );
//! ```

pub mod analysis;
pub mod cli;
pub mod error;
pub mod index;
pub mod search;
pub mod source;

pub mod prelude {
    pub use crate::analysis::{Analyzer, KeywordAnalyzer};
    pub use crate::error::{QuiverError, Result};
    pub use crate::index::{IndexConfig, IndexStats, KeywordIndex, Occurrence};
    pub use crate::search::{EngineConfig, SearchConfig, SearchEngine, SearchHit};
    pub use crate::source::{DocumentSource, FileSource, LineReader, MemorySource};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
