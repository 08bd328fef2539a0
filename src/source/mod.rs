//! Document sources the index is built from.
//!
//! The index never reads files itself. A [`DocumentSource`] lists the
//! documents and noise words and hands out each document's lines; the
//! engine is handed one at build time.

pub mod file;
pub mod memory;
pub mod traits;

pub use file::FileSource;
pub use memory::MemorySource;
pub use traits::{DocumentSource, LineReader};
