//! Tree-sitter based syntax tree provider for Java.
//!
//! The chunking engine consumes an already-built tree; this module is the
//! collaborator that builds one. Grammar construction and error recovery
//! are tree-sitter's job, not ours.

use thiserror::Error;
use tracing::debug;
use tree_sitter::{Parser, Tree};

/// Errors from the syntax tree provider.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The Java grammar could not be loaded into the parser.
    #[error("failed to load Java grammar: {0}")]
    Grammar(#[from] tree_sitter::LanguageError),

    /// tree-sitter returned no tree (cancellation or timeout).
    #[error("failed to parse source")]
    Failed,
}

/// Parse Java source into a syntax tree.
///
/// A fresh `Parser` is created per call; `Parser` is not `Sync` and this
/// keeps callers free to fan out over files.
pub fn parse_java(source: &str) -> Result<Tree, ParseError> {
    let mut parser = Parser::new();
    parser.set_language(&tree_sitter_java::language())?;

    let tree = parser
        .parse(source.as_bytes(), None)
        .ok_or(ParseError::Failed)?;

    debug!(
        root = tree.root_node().kind(),
        has_error = tree.root_node().has_error(),
        "Parsed Java source"
    );

    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_program_root() {
        let tree = parse_java("package com.example;\n").unwrap();
        assert_eq!(tree.root_node().kind(), "program");
        assert!(!tree.root_node().has_error());
    }

    #[test]
    fn test_parse_class_declaration() {
        let tree = parse_java("public class A { }").unwrap();
        let root = tree.root_node();
        assert_eq!(root.named_child_count(), 1);
        assert_eq!(root.named_child(0).unwrap().kind(), "class_declaration");
    }

    #[test]
    fn test_malformed_source_still_yields_tree() {
        // tree-sitter produces a tree with ERROR nodes instead of failing;
        // downstream stages rely on this.
        let tree = parse_java("class {{{").unwrap();
        assert_eq!(tree.root_node().kind(), "program");
        assert!(tree.root_node().has_error());
    }
}
