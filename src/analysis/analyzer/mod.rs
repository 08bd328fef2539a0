//! Analyzer implementations that combine tokenizers and filters.

mod analyzer;
mod keyword;
mod pipeline;

pub use analyzer::Analyzer;
pub use keyword::KeywordAnalyzer;
pub use pipeline::PipelineAnalyzer;
