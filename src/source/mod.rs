//! # Source Module
//!
//! Loads Go source units from disk and gives the rest of the crate a parsed
//! syntax tree to classify.
//!
//! - [`GoParser`] wraps a tree-sitter parser loaded with the Go grammar
//! - [`SourceUnit`] is one parsed `.go` file (path, text and tree)
//! - [`discover_sources`] walks a directory, deletes stale generated files and
//!   parses everything else
//! - [`StructTag`] reads Go struct tags (`gorm:"..." json:"..."`)
//!
//! Syntax errors never abort a run: tree-sitter always yields a tree, so a
//! unit with error nodes is still classified and a warning names the file.

mod discover;
mod tag;

pub use discover::{discover_sources, Discovery, GO_FILE_EXT};
pub use tag::StructTag;

use crate::error::Result;
use std::path::{Path, PathBuf};
use tree_sitter::{Node, Parser, Tree};

/// Parser for Go source files
pub struct GoParser {
    parser: Parser,
}

impl GoParser {
    /// Create a parser with the Go grammar loaded
    ///
    /// # Errors
    ///
    /// Returns [`crate::GenError::Grammar`] if the grammar ABI is incompatible
    /// with the linked tree-sitter runtime.
    pub fn new() -> Result<Self> {
        let mut parser = Parser::new();
        parser.set_language(&tree_sitter_go::LANGUAGE.into())?;
        Ok(Self { parser })
    }

    /// Parse one unit
    ///
    /// Returns `None` only when tree-sitter gives up on the input entirely.
    pub fn parse(&mut self, path: impl Into<PathBuf>, source: String) -> Option<SourceUnit> {
        let tree = self.parser.parse(&source, None)?;
        Some(SourceUnit {
            path: path.into(),
            source,
            tree,
        })
    }
}

/// A parsed Go source file
pub struct SourceUnit {
    path: PathBuf,
    source: String,
    tree: Tree,
}

impl SourceUnit {
    /// Path the unit was read from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Root `source_file` node
    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    /// Whether tree-sitter had to recover from syntax errors
    pub fn has_syntax_errors(&self) -> bool {
        self.root().has_error()
    }

    /// Identifier of the unit's `package` clause
    pub fn package_name(&self) -> Option<&str> {
        let root = self.root();
        let mut cursor = root.walk();
        let clause = root
            .named_children(&mut cursor)
            .find(|n| n.kind() == "package_clause")?;
        let mut cursor = clause.walk();
        let ident = clause
            .named_children(&mut cursor)
            .find(|n| n.kind() == "package_identifier")?;
        Some(self.text(ident))
    }

    /// Source text covered by `node`
    pub fn text(&self, node: Node<'_>) -> &str {
        node.utf8_text(self.source.as_bytes()).unwrap_or_default()
    }

    /// Contiguous comment block directly above `node`
    ///
    /// A comment that trails code on its own line belongs to that code and
    /// ends the block.
    pub fn doc_comments(&self, node: Node<'_>) -> Vec<String> {
        let mut blocks = Vec::new();
        let mut next_row = node.start_position().row;
        let mut prev = node.prev_named_sibling();
        while let Some(comment) = prev {
            if comment.kind() != "comment" || comment.end_position().row + 1 != next_row {
                break;
            }
            // anonymous tokens count too: `struct { // x` trails the brace
            if comment.prev_sibling().is_some_and(|b| {
                b.kind() != "comment" && b.end_position().row == comment.start_position().row
            }) {
                break;
            }
            let before = comment.prev_named_sibling();
            blocks.push(comment_lines(self.text(comment)));
            next_row = comment.start_position().row;
            prev = before;
        }
        blocks.into_iter().rev().flatten().collect()
    }

    /// Comment that starts on the same line `node` ends on
    pub fn trailing_comment(&self, node: Node<'_>) -> Vec<String> {
        match node.next_named_sibling() {
            Some(next)
                if next.kind() == "comment"
                    && next.start_position().row == node.end_position().row =>
            {
                comment_lines(self.text(next))
            }
            _ => Vec::new(),
        }
    }
}

/// Strip comment markers and split a comment into lines
fn comment_lines(raw: &str) -> Vec<String> {
    if let Some(line) = raw.strip_prefix("//") {
        let line = line.strip_prefix(' ').unwrap_or(line);
        return vec![line.trim_end().to_string()];
    }
    let body = raw
        .strip_prefix("/*")
        .and_then(|s| s.strip_suffix("*/"))
        .unwrap_or(raw);
    let mut lines: Vec<String> = body
        .lines()
        .map(|l| {
            let l = l.trim_end();
            l.strip_prefix(' ').unwrap_or(l).to_string()
        })
        .collect();
    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    let leading = lines.iter().take_while(|l| l.is_empty()).count();
    lines.split_off(leading)
}
