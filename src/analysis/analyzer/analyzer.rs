//! Core analyzer trait definition.
//!
//! Analyzers combine a tokenizer with a chain of filters and turn a raw
//! line of text into the tokens that get counted:
//!
//! ```text
//! Raw Line → Analyzer → Token Stream → Frequency Table
//!             ↓
//!         Tokenizer
//!             ↓
//!         Filter 1 … Filter N
//! ```
//!
//! # Examples
//!
//! ```
//! use quiver::analysis::analyzer::{Analyzer, KeywordAnalyzer};
//!
//! let analyzer = KeywordAnalyzer::new().unwrap();
//! let tokens: Vec<_> = analyzer.analyze("Hello, World!").unwrap().collect();
//!
//! assert_eq!(tokens[0].text, "hello");
//! assert_eq!(tokens[1].text, "world");
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
///
/// The trait requires `Send + Sync` so that a built engine, analyzer
/// included, can be shared across threads for read-only querying.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}
