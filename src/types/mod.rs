//! Core types for the chunking pipeline.

mod chunk;
mod config;

pub use chunk::{ChunkMetadata, ChunkRecord, ChunkType};
pub use config::ChunkingConfig;
