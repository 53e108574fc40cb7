//! Tree walker: syntax tree to raw chunk sequence.
//!
//! Two-level descent: top-level declarations first, then the members of any
//! class-like body. Emission follows document order, so `start_line` is
//! non-decreasing across the output.

use tracing::debug;
use tree_sitter::Node;

use crate::engine::classifier::{classify_member, classify_top_level, is_callable_member, Boundary};
use crate::types::{ChunkMetadata, ChunkRecord, ChunkType};

/// Walk the program node and emit one raw chunk per qualifying declaration.
///
/// Never fails on a well-formed tree; nodes that match no classification
/// contribute nothing.
pub fn walk(root: Node<'_>, source: &str, file_path: &str) -> Vec<ChunkRecord> {
    let mut chunks = Vec::new();

    for i in 0..root.named_child_count() {
        let Some(child) = root.named_child(i) else {
            continue;
        };

        match classify_top_level(child.kind()) {
            Boundary::Emit(chunk_type) => {
                chunks.push(make_record(child, source, file_path, chunk_type, None));
            }
            Boundary::Descend(fallback_type) => {
                walk_class_like(child, source, file_path, fallback_type, &mut chunks);
            }
            Boundary::Skip => {}
        }
    }

    debug!(
        file_path,
        chunk_count = chunks.len(),
        "Walked syntax tree"
    );

    chunks
}

/// Descend into a class-like declaration's body.
///
/// Falls back to one whole-declaration chunk only when the body sub-node is
/// absent; an empty body yields zero member chunks and no fallback.
fn walk_class_like(
    node: Node<'_>,
    source: &str,
    file_path: &str,
    fallback_type: ChunkType,
    chunks: &mut Vec<ChunkRecord>,
) {
    // Empty-string placeholder when the name sub-node is missing; one
    // malformed declaration must not abort the rest of the file.
    let class_name = node
        .child_by_field_name("name")
        .and_then(|n| node_text(n, source))
        .unwrap_or("");

    let Some(body) = node.child_by_field_name("body") else {
        chunks.push(make_record(node, source, file_path, fallback_type, None));
        return;
    };

    for i in 0..body.named_child_count() {
        let Some(member) = body.named_child(i) else {
            continue;
        };

        let chunk_type = classify_member(member.kind());
        let method_name = if is_callable_member(member.kind()) {
            Some(
                member
                    .child_by_field_name("name")
                    .and_then(|n| node_text(n, source))
                    .unwrap_or(""),
            )
        } else {
            None
        };

        let mut record = make_record(member, source, file_path, chunk_type, method_name);
        record.metadata.class_name = Some(class_name.to_string());
        chunks.push(record);
    }
}

/// Build one chunk record spanning the node's byte range.
fn make_record(
    node: Node<'_>,
    source: &str,
    file_path: &str,
    chunk_type: ChunkType,
    method_name: Option<&str>,
) -> ChunkRecord {
    let content = node_text(node, source).unwrap_or("").to_string();
    let mut metadata = ChunkMetadata::for_node(file_path, node.kind(), 0);
    if let Some(name) = method_name {
        metadata = metadata.with_method(name);
    }

    ChunkRecord::new(
        content,
        node.start_position().row + 1,
        node.end_position().row + 1,
        chunk_type,
        metadata,
    )
}

/// Exact source substring for a node's byte range.
fn node_text<'a>(node: Node<'_>, source: &'a str) -> Option<&'a str> {
    source.get(node.byte_range())
}
