//! Chunk merger: coalesce consecutive undersized chunks.
//!
//! A single scan keeps at most one open accumulator. A chunk strictly
//! shorter than the threshold opens or extends it; a big chunk closes it
//! (emitted even if still undersized) and passes through unchanged.

use crate::types::{ChunkMetadata, ChunkRecord, ChunkType};

/// Merge consecutive chunks shorter than `min_chunk_size` characters.
///
/// Source order is preserved; merging never reorders or crosses a
/// big-enough chunk. A chunk of exactly `min_chunk_size` is big enough.
pub fn merge(chunks: Vec<ChunkRecord>, min_chunk_size: usize) -> Vec<ChunkRecord> {
    let mut merged = Vec::with_capacity(chunks.len());
    let mut accumulator: Option<ChunkRecord> = None;

    for chunk in chunks {
        if chunk.char_len() < min_chunk_size {
            match accumulator.as_mut() {
                Some(acc) => {
                    acc.content.push('\n');
                    acc.content.push_str(&chunk.content);
                    acc.end_line = chunk.end_line;
                }
                None => accumulator = Some(open_accumulator(chunk)),
            }
        } else {
            if let Some(acc) = accumulator.take() {
                merged.push(close_accumulator(acc));
            }
            merged.push(chunk);
        }
    }

    if let Some(acc) = accumulator.take() {
        merged.push(close_accumulator(acc));
    }

    merged
}

/// Seed an accumulator from the first undersized chunk.
///
/// A merged chunk may span multiple declarations, so per-declaration
/// identity (`class_name`, `method_name`, `node_type`) is dropped; only the
/// first constituent's `file_path` survives.
fn open_accumulator(chunk: ChunkRecord) -> ChunkRecord {
    ChunkRecord {
        content: chunk.content,
        start_line: chunk.start_line,
        end_line: chunk.end_line,
        chunk_type: ChunkType::Merged,
        metadata: ChunkMetadata {
            file_path: chunk.metadata.file_path,
            ..Default::default()
        },
    }
}

/// Finalize an accumulator's length metadata before emission.
fn close_accumulator(mut acc: ChunkRecord) -> ChunkRecord {
    acc.metadata.length = acc.content.chars().count();
    acc
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn chunk(content: &str, start_line: usize, chunk_type: ChunkType) -> ChunkRecord {
        let end_line = start_line + content.lines().count().saturating_sub(1);
        ChunkRecord::new(
            content.to_string(),
            start_line,
            end_line,
            chunk_type,
            ChunkMetadata::for_node("Sample.java", "test_node", 0).with_class("Sample"),
        )
    }

    #[test]
    fn test_chunk_below_threshold_is_merged() {
        let chunks = vec![
            chunk(&"a".repeat(99), 1, ChunkType::Import),
            chunk(&"b".repeat(99), 2, ChunkType::Import),
        ];
        let merged = merge(chunks, 100);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].chunk_type, ChunkType::Merged);
        assert_eq!(merged[0].metadata.length, 199);
    }

    #[test]
    fn test_chunk_at_threshold_is_not_merged() {
        let chunks = vec![
            chunk(&"a".repeat(100), 1, ChunkType::Field),
            chunk(&"b".repeat(100), 2, ChunkType::Field),
        ];
        let merged = merge(chunks, 100);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].chunk_type, ChunkType::Field);
    }

    #[test]
    fn test_big_chunk_closes_accumulator() {
        let chunks = vec![
            chunk("small", 1, ChunkType::Package),
            chunk(&"x".repeat(150), 2, ChunkType::Method),
            chunk("tiny", 5, ChunkType::Import),
        ];
        let merged = merge(chunks, 100);
        // Undersized accumulator is emitted anyway; merging never crosses a
        // big-enough chunk.
        assert_eq!(merged.len(), 3);
        assert_eq!(merged[0].chunk_type, ChunkType::Merged);
        assert_eq!(merged[1].chunk_type, ChunkType::Method);
        assert_eq!(merged[2].chunk_type, ChunkType::Merged);
    }

    #[test]
    fn test_trailing_accumulator_flushed() {
        let chunks = vec![
            chunk(&"x".repeat(150), 1, ChunkType::Method),
            chunk("trailing", 4, ChunkType::Comment),
        ];
        let merged = merge(chunks, 100);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[1].chunk_type, ChunkType::Merged);
        assert_eq!(merged[1].content, "trailing");
    }

    #[test]
    fn test_merged_line_span_and_separator() {
        let chunks = vec![
            chunk("one", 1, ChunkType::Package),
            chunk("two", 3, ChunkType::Import),
            chunk("three", 5, ChunkType::Import),
        ];
        let merged = merge(chunks, 100);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].content, "one\ntwo\nthree");
        assert_eq!(merged[0].start_line, 1);
        assert_eq!(merged[0].end_line, 5);
    }

    #[test]
    fn test_merged_metadata_drops_identity() {
        let chunks = vec![
            chunk("one", 1, ChunkType::Field),
            chunk("two", 2, ChunkType::Method),
        ];
        let merged = merge(chunks, 100);
        let meta = &merged[0].metadata;
        assert_eq!(meta.file_path.as_deref(), Some("Sample.java"));
        assert_eq!(meta.class_name, None);
        assert_eq!(meta.method_name, None);
        assert_eq!(meta.node_type, None);
    }

    #[test]
    fn test_empty_input() {
        assert!(merge(Vec::new(), 100).is_empty());
    }
}
