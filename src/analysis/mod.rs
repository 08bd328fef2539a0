//! Text analysis for Quiver.
//!
//! Tokenization and filtering that turn raw document lines into keywords.
//! [`KeywordAnalyzer`] is the pipeline the index is built with.

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

pub use analyzer::*;
pub use token::*;
pub use token_filter::*;
pub use tokenizer::*;
