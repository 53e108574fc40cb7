//! Javachunk Library
//!
//! Splits Java source files into semantically coherent chunks aligned to
//! syntactic boundaries (package, import, class, field, method) and hands
//! the resulting records to a vector store for semantic retrieval.

pub mod batch;
pub mod engine;
pub mod output;
pub mod parsing;
pub mod types;

pub use batch::{BatchConfig, BatchProcessor, BatchResult};
pub use engine::{chunk_tree, JavaChunker};
pub use output::VectorStoreClient;
pub use types::{ChunkMetadata, ChunkRecord, ChunkType, ChunkingConfig};

/// Default advisory maximum chunk size in characters
pub const DEFAULT_MAX_CHUNK_SIZE: usize = 1000;

/// Default overlap window in characters
pub const DEFAULT_CHUNK_OVERLAP: usize = 200;

/// Default merge threshold in characters
pub const DEFAULT_MIN_CHUNK_SIZE: usize = 100;
