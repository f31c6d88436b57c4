//! Error types for the generator
//!
//! Every fatal condition of a run is a [`GenError`]. Problems that only
//! affect a single source unit (unreadable nested files, syntax errors) are
//! logged and skipped instead, so they never appear here.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal generator error
#[derive(Debug, Error)]
pub enum GenError {
    /// The search directory itself could not be read
    #[error("cannot scan {}: {source}", path.display())]
    Discovery {
        /// Directory that was being scanned
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A previously generated file could not be removed
    #[error("cannot remove stale generated file {}: {source}", path.display())]
    Cleanup {
        /// Stale file
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The Go grammar could not be loaded into the parser
    #[error("cannot load Go grammar: {0}")]
    Grammar(#[from] tree_sitter::LanguageError),

    /// A strategy template failed to compile
    #[error("invalid {template} template: {source}")]
    TemplateCompile {
        /// `header` or `content`
        template: &'static str,
        #[source]
        source: minijinja::Error,
    },

    /// A template failed to render
    #[error("cannot render {template} template for `{target}`: {source}")]
    Render {
        /// `header` or `content`
        template: &'static str,
        /// Model name, or the package for the header
        target: String,
        #[source]
        source: minijinja::Error,
    },

    /// An output file could not be created or written
    #[error("cannot write {}: {source}", path.display())]
    Write {
        /// Output file
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The strategy configuration file is unreadable or malformed
    #[error("invalid generator config {}: {message}", path.display())]
    Config {
        /// Config file (or a template file it references)
        path: PathBuf,
        /// What went wrong
        message: String,
    },
}

/// Result alias used across the crate
pub type Result<T, E = GenError> = std::result::Result<T, E>;
