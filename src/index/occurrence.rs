//! Keyword occurrences.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How often one keyword occurs in one document.
///
/// The frequency only changes while the owning document is being counted;
/// once merged into a [`KeywordIndex`](super::KeywordIndex) an occurrence may
/// move within its list but its fields stay fixed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occurrence {
    /// Document in which the keyword occurs.
    pub document: String,
    /// Number of times the keyword occurs in the document.
    pub frequency: u32,
}

impl Occurrence {
    /// Create a new occurrence.
    pub fn new<S: Into<String>>(document: S, frequency: u32) -> Self {
        Occurrence {
            document: document.into(),
            frequency,
        }
    }
}

impl fmt::Display for Occurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.document, self.frequency)
    }
}
