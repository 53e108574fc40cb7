//! The chunking engine: walk, merge, overlap.
//!
//! A strict three-stage pipeline over an ordered sequence. Each stage
//! consumes the previous stage's full output and produces a new sequence;
//! stages never interleave and nothing is revisited after emission.

mod classifier;
mod merger;
mod overlap;
mod walker;

pub use classifier::{classify_member, classify_top_level, Boundary};
pub use merger::merge;
pub use overlap::inject_overlap;
pub use walker::walk;

use anyhow::Result;
use tracing::debug;
use tree_sitter::Node;

use crate::parsing::parse_java;
use crate::types::{ChunkRecord, ChunkingConfig};

/// Run the full pipeline over an already-built syntax tree.
///
/// Purely functional and synchronous; callers processing many files may
/// fan out at one invocation per file, but merge and overlap never cross
/// file boundaries.
pub fn chunk_tree(
    root: Node<'_>,
    source: &str,
    file_path: &str,
    config: &ChunkingConfig,
) -> Vec<ChunkRecord> {
    let raw = walk(root, source, file_path);
    let raw_count = raw.len();

    let merged = merge(raw, config.min_chunk_size);
    let final_chunks = inject_overlap(merged, config.chunk_overlap);

    debug!(
        file_path,
        raw = raw_count,
        emitted = final_chunks.len(),
        "Chunking pipeline complete"
    );

    final_chunks
}

/// Parse-and-chunk convenience over the pipeline.
pub struct JavaChunker {
    config: ChunkingConfig,
}

impl JavaChunker {
    /// Create a chunker with the given configuration.
    pub fn new(config: ChunkingConfig) -> Self {
        Self { config }
    }

    /// Chunk one Java source file.
    pub fn chunk_source(&self, source: &str, file_path: &str) -> Result<Vec<ChunkRecord>> {
        let tree = parse_java(source)?;
        Ok(chunk_tree(tree.root_node(), source, file_path, &self.config))
    }

    /// The configuration this chunker runs with.
    pub fn config(&self) -> &ChunkingConfig {
        &self.config
    }
}

impl Default for JavaChunker {
    fn default() -> Self {
        Self::new(ChunkingConfig::default())
    }
}
