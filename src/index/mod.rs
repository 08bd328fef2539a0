//! Keyword index construction.
//!
//! Documents are counted into a [`FrequencyTable`] each, and the tables are
//! merged one after another into the [`KeywordIndex`].

pub mod frequency;
pub mod insertion;
pub mod keyword_index;
pub mod occurrence;

pub use frequency::FrequencyTable;
pub use insertion::{InsertionPoint, find_insertion_point, insert_last_occurrence};
pub use keyword_index::{IndexStats, KeywordIndex};
pub use occurrence::Occurrence;

use serde::{Deserialize, Serialize};

/// Configuration for the keyword index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Initial capacity of the keyword map.
    pub index_capacity: usize,
}

impl Default for IndexConfig {
    fn default() -> Self {
        IndexConfig {
            index_capacity: 1000,
        }
    }
}
