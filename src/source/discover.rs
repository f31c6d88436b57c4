use super::{GoParser, SourceUnit};
use crate::error::{GenError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Extension of scanned and generated files
pub const GO_FILE_EXT: &str = "go";

/// Outcome of scanning a directory
pub struct Discovery {
    /// Parsed units in walk order
    pub units: Vec<SourceUnit>,
    /// Previously generated files that were deleted
    pub removed: Vec<PathBuf>,
}

/// Walk `root` recursively and load every Go source unit
///
/// Files whose name starts with `file_prefix` are output of an earlier run:
/// they are deleted and never parsed. Entries are visited in file-name order
/// so repeated runs see units in the same order.
///
/// # Errors
///
/// - [`GenError::Discovery`] if `root` cannot be read
/// - [`GenError::Cleanup`] if a stale generated file cannot be deleted
/// - [`GenError::Grammar`] if the Go grammar cannot be loaded
pub fn discover_sources(root: &Path, file_prefix: &str) -> Result<Discovery> {
    fs::read_dir(root).map_err(|source| GenError::Discovery {
        path: root.to_path_buf(),
        source,
    })?;

    let mut parser = GoParser::new()?;
    let mut units = Vec::new();
    let mut removed = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(error = %e, "skipping unreadable entry");
                continue;
            }
        };
        if !entry.file_type().is_file() || !is_go_file(entry.path()) {
            continue;
        }

        let path = entry.path();
        if entry.file_name().to_string_lossy().starts_with(file_prefix) {
            fs::remove_file(path).map_err(|source| GenError::Cleanup {
                path: path.to_path_buf(),
                source,
            })?;
            debug!(path = %path.display(), "removed stale generated file");
            removed.push(path.to_path_buf());
            continue;
        }

        let source = match fs::read_to_string(path) {
            Ok(source) => source,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "skipping unreadable source file");
                continue;
            }
        };
        match parser.parse(path, source) {
            Some(unit) => {
                if unit.has_syntax_errors() {
                    warn!(
                        path = %path.display(),
                        "source file has syntax errors; only intact declarations will be used"
                    );
                }
                units.push(unit);
            }
            None => warn!(path = %path.display(), "parser gave up on source file"),
        }
    }

    debug!(
        root = %root.display(),
        units = units.len(),
        removed = removed.len(),
        "discovery finished"
    );
    Ok(Discovery { units, removed })
}

fn is_go_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == GO_FILE_EXT)
}
