//! Alphabetic filter implementation.
//!
//! Drops every token that is empty or holds anything other than ASCII
//! letters. Run after [`StripFilter`](super::StripFilter): whatever
//! punctuation or digits remain at that point are embedded in the word, and
//! such a word is not a keyword at all rather than something to clean up.
//!
//! # Examples
//!
//! ```
//! use quiver::analysis::token_filter::Filter;
//! use quiver::analysis::token_filter::alphabetic::AlphabeticFilter;
//! use quiver::analysis::token::Token;
//!
//! let filter = AlphabeticFilter::new();
//! let tokens = vec![
//!     Token::new("hello", 0),
//!     Token::new("a.b", 1),      // Removed: internal punctuation
//!     Token::new("mp3", 2),      // Removed: digit
//!     Token::new("World", 3),
//! ];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(result.len(), 2);
//! assert_eq!(result[0].text, "hello");
//! assert_eq!(result[1].text, "World");
//! ```

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that keeps only tokens made entirely of ASCII letters.
#[derive(Clone, Debug, Default)]
pub struct AlphabeticFilter;

impl AlphabeticFilter {
    /// Create a new alphabetic filter.
    pub fn new() -> Self {
        AlphabeticFilter
    }

    /// Check whether a word would pass this filter.
    pub fn is_alphabetic(word: &str) -> bool {
        !word.is_empty() && word.bytes().all(|b| b.is_ascii_alphabetic())
    }
}

impl Filter for AlphabeticFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens: Vec<Token> = tokens
            .filter(|token| Self::is_alphabetic(&token.text))
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "alphabetic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabetic_filter() {
        let filter = AlphabeticFilter::new();
        let tokens = vec![
            Token::new("valid", 0),
            Token::new("", 1),
            Token::new("don't", 2),
            Token::new("x2", 3),
            Token::new("kept", 4),
        ];
        let token_stream = Box::new(tokens.into_iter());

        let result: Vec<Token> = filter.filter(token_stream).unwrap().collect();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].text, "valid");
        assert_eq!(result[1].text, "kept");
    }

    #[test]
    fn test_is_alphabetic() {
        assert!(AlphabeticFilter::is_alphabetic("Cat"));
        assert!(AlphabeticFilter::is_alphabetic("a"));
        assert!(!AlphabeticFilter::is_alphabetic(""));
        assert!(!AlphabeticFilter::is_alphabetic("naïve"));
        assert!(!AlphabeticFilter::is_alphabetic("-dash"));
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(AlphabeticFilter::new().name(), "alphabetic");
    }
}
