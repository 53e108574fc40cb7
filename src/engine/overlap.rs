//! Overlap injector: thread trailing predecessor context between chunks.
//!
//! Overlap is presentation context, not a claim about where a chunk lives
//! in the file, so line numbers and `length` metadata stay untouched.

use crate::types::ChunkRecord;

/// Prepend to each chunk (except the first) the trailing `overlap_size`
/// characters of its predecessor's original content.
///
/// The window is always cut from the predecessor's pre-overlap content,
/// never from its already-injected form, so overlap cannot compound across
/// the sequence.
pub fn inject_overlap(chunks: Vec<ChunkRecord>, overlap_size: usize) -> Vec<ChunkRecord> {
    let mut result = Vec::with_capacity(chunks.len());
    let mut prev_original: Option<String> = None;

    for mut chunk in chunks {
        let original = chunk.content.clone();

        if let Some(prev) = prev_original.as_deref() {
            let tail = trailing_chars(prev, overlap_size);
            // An empty window injects nothing; has_overlap holds exactly
            // when predecessor content was prepended.
            if !tail.is_empty() {
                chunk.content = format!("{}\n{}", tail, chunk.content);
                chunk.metadata.has_overlap = true;
            }
        }

        prev_original = Some(original);
        result.push(chunk);
    }

    result
}

/// The last `count` characters of `text` (all of it when shorter).
fn trailing_chars(text: &str, count: usize) -> &str {
    if count == 0 {
        return "";
    }
    let char_len = text.chars().count();
    if char_len <= count {
        return text;
    }
    let skip = char_len - count;
    match text.char_indices().nth(skip) {
        Some((byte_idx, _)) => &text[byte_idx..],
        None => text,
    }
}
