//! Stop filter implementation.
//!
//! Removes noise words: common words (like "the", "is", "at") that are
//! excluded from the index. The noise-word set is supplied by the caller,
//! usually read from a noise-word list before indexing starts, and is
//! compared verbatim against the token text. Place this filter after
//! [`LowercaseFilter`](super::LowercaseFilter) so that capitalized
//! occurrences are caught by a lower-case list.
//!
//! # Examples
//!
//! ```
//! use quiver::analysis::token_filter::Filter;
//! use quiver::analysis::token_filter::stop::StopFilter;
//! use quiver::analysis::token::Token;
//!
//! let filter = StopFilter::from_words(vec!["the", "is"]);
//! let tokens = vec![
//!     Token::new("the", 0),
//!     Token::new("cat", 1),
//!     Token::new("is", 2)
//! ];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(result.len(), 1);
//! assert_eq!(result[0].text, "cat");
//! ```

use std::collections::HashSet;
use std::sync::Arc;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that removes noise words from the token stream.
///
/// The set is shared behind an `Arc`, so cloning the filter is cheap.
#[derive(Clone, Debug, Default)]
pub struct StopFilter {
    /// The set of noise words to remove
    stop_words: Arc<HashSet<String>>,
}

impl StopFilter {
    /// Create a stop filter with an empty noise-word set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new stop filter with custom stop words.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::HashSet;
    /// use quiver::analysis::token_filter::stop::StopFilter;
    ///
    /// let mut words = HashSet::new();
    /// words.insert("custom".to_string());
    ///
    /// let filter = StopFilter::with_stop_words(words);
    /// assert!(filter.is_stop_word("custom"));
    /// ```
    pub fn with_stop_words(stop_words: HashSet<String>) -> Self {
        StopFilter {
            stop_words: Arc::new(stop_words),
        }
    }

    /// Create a new stop filter from a list of stop words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stop_words = words.into_iter().map(|s| s.into()).collect();
        Self::with_stop_words(stop_words)
    }

    /// Return a filter holding this filter's words plus `words`.
    pub fn extended<I, S>(&self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut stop_words = (*self.stop_words).clone();
        stop_words.extend(words.into_iter().map(|s| s.into()));
        Self::with_stop_words(stop_words)
    }

    /// Check if a word is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the stop word set is empty.
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens: Vec<Token> = tokens
            .filter(|token| !self.is_stop_word(&token.text))
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}
