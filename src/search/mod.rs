//! Search engine for building the index and running ranked queries.

pub mod engine;
pub mod ranked;

pub use self::engine::{EngineConfig, SearchEngine};
pub use self::ranked::{RankedSearcher, SearchHit};

use serde::{Deserialize, Serialize};

/// Configuration for search operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Maximum number of documents a search returns.
    pub max_results: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig { max_results: 5 }
    }
}

impl SearchConfig {
    /// Set the maximum number of documents to return.
    pub fn max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }
}
