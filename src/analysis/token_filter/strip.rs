//! Strip filter implementation.
//!
//! Removes a trailing run of characters that are not ASCII letters, so that
//! `"end."`, `"ran!"` and `"what?!"` index as `"end"`, `"ran"` and `"what"`.
//! Only the end of the token is touched; leading and embedded punctuation is
//! left for [`AlphabeticFilter`](super::AlphabeticFilter) to judge. A token
//! that strips down to nothing is dropped.
//!
//! # Examples
//!
//! ```
//! use quiver::analysis::token_filter::Filter;
//! use quiver::analysis::token_filter::strip::StripFilter;
//! use quiver::analysis::token::Token;
//!
//! let filter = StripFilter::new().unwrap();
//! let tokens = vec![Token::new("end.", 0), Token::new("?!", 1), Token::new("a.b", 2)];
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(result.len(), 2);
//! assert_eq!(result[0].text, "end");
//! assert_eq!(result[1].text, "a.b");
//! ```

use regex::Regex;

use super::Filter;
use crate::analysis::token::{Token, TokenStream};
use crate::error::{QuiverError, Result};

/// Trailing characters that are not ASCII letters.
const TRAILING_NON_LETTERS: &str = r"[^a-zA-Z]+$";

/// A filter that strips trailing punctuation from tokens.
#[derive(Clone, Debug)]
pub struct StripFilter {
    pattern: Regex,
}

impl StripFilter {
    /// Create a new strip filter removing trailing non-letters.
    pub fn new() -> Result<Self> {
        Self::with_pattern(TRAILING_NON_LETTERS)
    }

    /// Create a strip filter with a custom pattern.
    ///
    /// The pattern should be anchored at the end (`$`); whatever it matches is
    /// removed from the token.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let pattern = Regex::new(pattern)
            .map_err(|e| QuiverError::analysis(format!("Invalid strip pattern: {e}")))?;
        Ok(StripFilter { pattern })
    }

    /// Strip a single word, returning `None` when nothing is left.
    pub fn strip<'a>(&self, word: &'a str) -> Option<&'a str> {
        let end = self.pattern.find(word).map_or(word.len(), |m| m.start());
        let stripped = &word[..end];
        (!stripped.is_empty()).then_some(stripped)
    }
}

impl Filter for StripFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens: Vec<Token> = tokens
            .filter_map(|token| {
                self.strip(&token.text)
                    .map(|stripped| token.with_text(stripped))
            })
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "strip"
    }
}
