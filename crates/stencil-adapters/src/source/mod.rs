//! Schema document sources.

mod directory;
mod memory;

pub use directory::{DEFAULT_EXTENSIONS, DirectorySource};
pub use memory::MemorySource;
