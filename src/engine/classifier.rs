//! Boundary classification for Java syntax nodes.
//!
//! Maps raw grammar production names to the semantic categories that decide
//! chunk granularity: emit the node as one chunk, descend into its body, or
//! skip it entirely.

use crate::types::ChunkType;

/// Decision for a top-level syntax node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    /// Emit one chunk spanning the whole node.
    Emit(ChunkType),
    /// Class-like node: walk its body instead of emitting it whole. The
    /// carried type is the fallback used when the body sub-node is absent.
    Descend(ChunkType),
    /// No chunk. Only named declarations and comments carry retrieval
    /// value; everything else is skipped on purpose.
    Skip,
}

/// Classify an immediate child of the program node.
pub fn classify_top_level(kind: &str) -> Boundary {
    match kind {
        "package_declaration" => Boundary::Emit(ChunkType::Package),
        "import_declaration" => Boundary::Emit(ChunkType::Import),
        "line_comment" | "block_comment" => Boundary::Emit(ChunkType::Comment),
        "class_declaration" | "enum_declaration" => Boundary::Descend(ChunkType::Class),
        "interface_declaration" => Boundary::Descend(ChunkType::Interface),
        _ => Boundary::Skip,
    }
}

/// Classify a named member of a class-like body.
///
/// Constructors emit as `Method`; the raw production name survives in
/// `node_type` metadata for consumers that care about the distinction.
pub fn classify_member(kind: &str) -> ChunkType {
    match kind {
        "field_declaration" | "constant_declaration" => ChunkType::Field,
        "method_declaration" | "constructor_declaration" => ChunkType::Method,
        _ => ChunkType::ClassMember,
    }
}

/// Whether a member of this kind carries a `method_name`.
pub fn is_callable_member(kind: &str) -> bool {
    matches!(kind, "method_declaration" | "constructor_declaration")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_top_level_emittable() {
        assert_eq!(
            classify_top_level("package_declaration"),
            Boundary::Emit(ChunkType::Package)
        );
        assert_eq!(
            classify_top_level("import_declaration"),
            Boundary::Emit(ChunkType::Import)
        );
        assert_eq!(
            classify_top_level("block_comment"),
            Boundary::Emit(ChunkType::Comment)
        );
    }

    #[test]
    fn test_class_likes_descend() {
        assert_eq!(
            classify_top_level("class_declaration"),
            Boundary::Descend(ChunkType::Class)
        );
        assert_eq!(
            classify_top_level("enum_declaration"),
            Boundary::Descend(ChunkType::Class)
        );
        assert_eq!(
            classify_top_level("interface_declaration"),
            Boundary::Descend(ChunkType::Interface)
        );
    }

    #[test]
    fn test_unrecognized_top_level_skipped() {
        assert_eq!(classify_top_level("module_declaration"), Boundary::Skip);
        assert_eq!(classify_top_level("ERROR"), Boundary::Skip);
    }

    #[test]
    fn test_member_classification() {
        assert_eq!(classify_member("field_declaration"), ChunkType::Field);
        assert_eq!(classify_member("constant_declaration"), ChunkType::Field);
        assert_eq!(classify_member("method_declaration"), ChunkType::Method);
        assert_eq!(classify_member("constructor_declaration"), ChunkType::Method);
        assert_eq!(classify_member("static_initializer"), ChunkType::ClassMember);
        assert_eq!(classify_member("class_declaration"), ChunkType::ClassMember);
    }

    #[test]
    fn test_callable_members() {
        assert!(is_callable_member("method_declaration"));
        assert!(is_callable_member("constructor_declaration"));
        assert!(!is_callable_member("field_declaration"));
    }
}
