//! Frequency-ranked search over two keywords.
//!
//! A document matches `keyword1 OR keyword2`. Matches are ranked by the
//! frequency of the occurrence that brought them in; a document reached by
//! both keywords is ranked by the higher of the two. On equal frequencies
//! the first keyword's occurrences come first, which is what a stable sort
//! of "first keyword's list, then second keyword's list" gives.

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::index::{KeywordIndex, Occurrence};
use crate::search::SearchConfig;

/// One ranked document in a search result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    /// The matching document.
    pub document: String,
    /// Frequency of the keyword that ranked this document.
    pub frequency: u32,
    /// The keyword, lower-cased, that ranked this document.
    pub keyword: String,
}

/// Executes ranked searches against a [`KeywordIndex`].
///
/// The searcher only borrows the index; nothing it does modifies it.
#[derive(Debug, Clone, Copy)]
pub struct RankedSearcher<'a> {
    index: &'a KeywordIndex,
    max_results: usize,
}

impl<'a> RankedSearcher<'a> {
    /// Create a searcher over `index`.
    pub fn new(index: &'a KeywordIndex, config: &SearchConfig) -> Self {
        RankedSearcher {
            index,
            max_results: config.max_results,
        }
    }

    /// Documents matching either keyword, best first.
    ///
    /// Returns at most `max_results` distinct documents, or `None` when
    /// neither keyword occurs anywhere.
    pub fn search(&self, keyword1: &str, keyword2: &str) -> Option<Vec<String>> {
        self.search_hits(keyword1, keyword2)
            .map(|hits| hits.into_iter().map(|hit| hit.document).collect())
    }

    /// Like [`search`](Self::search), keeping the frequency and keyword
    /// behind each ranked document.
    pub fn search_hits(&self, keyword1: &str, keyword2: &str) -> Option<Vec<SearchHit>> {
        let keyword1 = keyword1.to_lowercase();
        let keyword2 = keyword2.to_lowercase();

        let mut candidates: Vec<(&Occurrence, &str)> = self
            .tagged(&keyword1)
            .chain(self.tagged(&keyword2))
            .collect();
        // Stable: equal frequencies keep the first keyword's entries ahead.
        candidates.sort_by(|(a, _), (b, _)| b.frequency.cmp(&a.frequency));

        let mut seen = AHashSet::new();
        let hits: Vec<SearchHit> = candidates
            .into_iter()
            .filter(|&(occurrence, _)| seen.insert(occurrence.document.as_str()))
            .take(self.max_results)
            .map(|(occurrence, keyword)| SearchHit {
                document: occurrence.document.clone(),
                frequency: occurrence.frequency,
                keyword: keyword.to_string(),
            })
            .collect();

        (!hits.is_empty()).then_some(hits)
    }

    fn tagged<'k>(&self, keyword: &'k str) -> impl Iterator<Item = (&'a Occurrence, &'k str)> {
        self.index
            .occurrences(keyword)
            .unwrap_or_default()
            .iter()
            .map(move |occurrence| (occurrence, keyword))
    }
}
