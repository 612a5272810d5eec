//! Icon source discovery.
//!
//! Walks a directory tree collecting the Java sources that may declare icon
//! constants. Filtering happens on the file name (default: anything ending
//! in `Icons.java`) so the expensive extraction pass only touches files
//! that opted into the convention.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Default maximum search depth
pub const DEFAULT_MAX_DEPTH: usize = 8;

/// Default file name suffix an icon source must match
pub const DEFAULT_SOURCE_SUFFIX: &str = "Icons.java";

/// Directories to skip during search
const SKIP_DIRECTORIES: &[&str] = &[
    "node_modules",
    "build",
    "out",
    ".git",
    ".idea",
    ".vscode",
    ".gradle",
    "__pycache__",
    "target", // Rust build dir
];

/// Result of source discovery
#[derive(Debug)]
pub struct DiscoveryResult {
    /// Matching source files, sorted by path
    pub sources: Vec<PathBuf>,
    /// Base path that was searched
    pub searched_from: PathBuf,
    /// Maximum depth that was searched
    pub max_depth: usize,
}

/// Discover icon source files under `base_path`.
///
/// Directories in [`SKIP_DIRECTORIES`] are never entered. The result is
/// sorted so repeated runs over an unchanged tree are deterministic.
pub fn discover_icon_sources(base_path: &Path, suffix: &str, max_depth: usize) -> DiscoveryResult {
    let mut result = DiscoveryResult {
        sources: Vec::new(),
        searched_from: base_path.to_path_buf(),
        max_depth,
    };

    walk(base_path, suffix, max_depth, 0, &mut result.sources);
    result.sources.sort();

    debug!(
        "discovered {} icon source(s) under {}",
        result.sources.len(),
        base_path.display()
    );
    result
}

/// Check whether a single path counts as an icon source
pub fn is_icon_source(path: &Path, suffix: &str) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.ends_with(suffix))
        .unwrap_or(false)
}

fn walk(dir: &Path, suffix: &str, max_depth: usize, depth: usize, sources: &mut Vec<PathBuf>) {
    if depth > max_depth {
        return;
    }

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            trace!("skipping unreadable directory {}: {}", dir.display(), e);
            return;
        }
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            let skip = path
                .file_name()
                .and_then(|n| n.to_str())
                .map(|n| SKIP_DIRECTORIES.contains(&n))
                .unwrap_or(false);
            if !skip {
                walk(&path, suffix, max_depth, depth + 1, sources);
            }
        } else if is_icon_source(&path, suffix) {
            sources.push(path);
        }
    }
}
