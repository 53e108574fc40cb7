//! Chunk record definitions.

use serde::{Deserialize, Serialize};

/// Semantic category of a chunk, decided by the boundary classifier.
///
/// `Merged` is produced only by the chunk merger; the tree walker never
/// emits it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChunkType {
    /// Package declaration
    Package,
    /// Import declaration
    Import,
    /// Whole class declaration (only when the body sub-node is absent)
    Class,
    /// Whole interface declaration (only when the body sub-node is absent)
    Interface,
    /// Method or constructor declaration inside a class body
    Method,
    /// Field declaration inside a class body
    Field,
    /// Any other class-body member (static initializer, nested type, ...)
    ClassMember,
    /// Free-floating comment at the top level
    Comment,
    /// Coalesced run of undersized chunks
    Merged,
}

impl std::fmt::Display for ChunkType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChunkType::Package => write!(f, "package"),
            ChunkType::Import => write!(f, "import"),
            ChunkType::Class => write!(f, "class"),
            ChunkType::Interface => write!(f, "interface"),
            ChunkType::Method => write!(f, "method"),
            ChunkType::Field => write!(f, "field"),
            ChunkType::ClassMember => write!(f, "class_member"),
            ChunkType::Comment => write!(f, "comment"),
            ChunkType::Merged => write!(f, "merged"),
        }
    }
}

/// Metadata attached to a chunk record.
///
/// Typed rather than an open map so the recognized keys carry compile-time
/// guarantees.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkMetadata {
    /// Path of the source file, stamped verbatim from the caller
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,

    /// Raw grammar production name (e.g. "method_declaration")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_type: Option<String>,

    /// Character count of `content` before overlap injection
    pub length: usize,

    /// Name of the nearest enclosing class or interface declaration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,

    /// Name of the method or constructor (method chunks only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method_name: Option<String>,

    /// Whether the overlap injector prepended predecessor content
    pub has_overlap: bool,
}

impl ChunkMetadata {
    /// Create metadata for a chunk emitted from a syntax node.
    pub fn for_node(file_path: &str, node_type: &str, length: usize) -> Self {
        Self {
            file_path: Some(file_path.to_string()),
            node_type: Some(node_type.to_string()),
            length,
            ..Default::default()
        }
    }

    /// Set the enclosing class name.
    pub fn with_class(mut self, class_name: &str) -> Self {
        self.class_name = Some(class_name.to_string());
        self
    }

    /// Set the method or constructor name.
    pub fn with_method(mut self, method_name: &str) -> Self {
        self.method_name = Some(method_name.to_string());
        self
    }
}

/// One semantically bounded fragment of Java source with its metadata.
///
/// Created once by the tree walker, possibly rewritten once by the merger,
/// and mutated at most once more by the overlap injector. After the pipeline
/// returns, records are never touched again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkRecord {
    /// The source text of this chunk (after merge/overlap transforms)
    pub content: String,

    /// First line of the original span (1-indexed, inclusive)
    pub start_line: usize,

    /// Last line of the original span (1-indexed, inclusive)
    pub end_line: usize,

    /// Semantic category of this chunk
    pub chunk_type: ChunkType,

    /// Associated metadata
    pub metadata: ChunkMetadata,
}

impl ChunkRecord {
    /// Create a new chunk record, filling in `length` from the content.
    pub fn new(
        content: String,
        start_line: usize,
        end_line: usize,
        chunk_type: ChunkType,
        mut metadata: ChunkMetadata,
    ) -> Self {
        metadata.length = content.chars().count();
        Self {
            content,
            start_line,
            end_line,
            chunk_type,
            metadata,
        }
    }

    /// Character count of the current content.
    ///
    /// After overlap injection this differs from `metadata.length`, which
    /// keeps describing the pre-overlap content.
    pub fn char_len(&self) -> usize {
        self.content.chars().count()
    }

    /// Check if the chunk has no content.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}
