//! Per-source generation state.
//!
//! Each icon source file gets one state file recording the output paths of
//! its last generation, newline-separated. Replaying the state with the new
//! output set deletes outputs that disappeared from the source (stale
//! icons); replaying with an empty set removes everything the source ever
//! produced, including the state file itself.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use icongen_core::prelude::*;

/// State file for `source`, located in `state_dir`.
///
/// The name encodes the full source path with separators flattened so two
/// sources never collide on the same state file.
pub fn resolve_state_file(state_dir: &Path, source: &Path) -> PathBuf {
    let name: String = source
        .to_string_lossy()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' => '_',
            c => c,
        })
        .collect();
    state_dir.join(name)
}

/// Replay the state of one source file.
///
/// Deletes outputs recorded in the previous run that are not in
/// `new_outputs`, then rewrites the state file (or removes it when
/// `new_outputs` is empty, so abandoned sources leave no garbage behind).
/// Returns the number of stale outputs removed.
pub fn update_state(state_file: &Path, new_outputs: &BTreeSet<PathBuf>) -> Result<usize> {
    let old_outputs = read_state(state_file);

    let mut removed = 0;
    for stale in old_outputs.difference(new_outputs) {
        match std::fs::remove_file(stale) {
            Ok(()) => {
                debug!("removed stale icon {}", stale.display());
                removed += 1;
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => warn!("could not remove stale icon {}: {}", stale.display(), e),
        }
    }

    if new_outputs.is_empty() {
        match std::fs::remove_file(state_file) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }
    } else {
        if let Some(parent) = state_file.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let serialized = new_outputs
            .iter()
            .map(|p| p.to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join("\n");
        std::fs::write(state_file, serialized)?;
    }

    Ok(removed)
}

/// Outputs recorded by the previous run, empty if there was none
fn read_state(state_file: &Path) -> BTreeSet<PathBuf> {
    let Ok(content) = std::fs::read_to_string(state_file) else {
        return BTreeSet::new();
    };
    content
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(PathBuf::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn outputs(paths: &[&Path]) -> BTreeSet<PathBuf> {
        paths.iter().map(|p| p.to_path_buf()).collect()
    }

    #[test]
    fn test_resolve_state_file_flattens_path() {
        let state = resolve_state_file(Path::new("/state"), Path::new("/a/b/FooIcons.java"));
        assert_eq!(state, Path::new("/state/_a_b_FooIcons.java"));
    }

    #[test]
    fn test_distinct_sources_distinct_state_files() {
        let dir = Path::new("/state");
        let a = resolve_state_file(dir, Path::new("/x/AIcons.java"));
        let b = resolve_state_file(dir, Path::new("/y/AIcons.java"));
        assert_ne!(a, b);
    }

    #[test]
    fn test_update_state_writes_and_reads_back() {
        let temp = tempdir().unwrap();
        let state_file = temp.path().join("state/src_FooIcons.java");
        let out = temp.path().join("a.png");
        std::fs::write(&out, b"png").unwrap();

        update_state(&state_file, &outputs(&[&out])).unwrap();

        assert!(state_file.exists());
        assert_eq!(read_state(&state_file), outputs(&[&out]));
    }

    #[test]
    fn test_update_state_removes_stale_outputs() {
        let temp = tempdir().unwrap();
        let state_file = temp.path().join("state");
        let kept = temp.path().join("kept.png");
        let stale = temp.path().join("stale.png");
        std::fs::write(&kept, b"png").unwrap();
        std::fs::write(&stale, b"png").unwrap();

        update_state(&state_file, &outputs(&[&kept, &stale])).unwrap();
        let removed = update_state(&state_file, &outputs(&[&kept])).unwrap();

        assert_eq!(removed, 1);
        assert!(kept.exists());
        assert!(!stale.exists());
    }

    #[test]
    fn test_update_state_empty_set_removes_everything() {
        let temp = tempdir().unwrap();
        let state_file = temp.path().join("state");
        let out = temp.path().join("only.png");
        std::fs::write(&out, b"png").unwrap();

        update_state(&state_file, &outputs(&[&out])).unwrap();
        update_state(&state_file, &BTreeSet::new()).unwrap();

        assert!(!out.exists());
        assert!(!state_file.exists());
    }

    #[test]
    fn test_update_state_tolerates_already_deleted_output() {
        let temp = tempdir().unwrap();
        let state_file = temp.path().join("state");
        let gone = temp.path().join("gone.png");
        std::fs::write(&gone, b"png").unwrap();

        update_state(&state_file, &outputs(&[&gone])).unwrap();
        std::fs::remove_file(&gone).unwrap();

        // replaying with an empty set must not error on the missing file
        update_state(&state_file, &BTreeSet::new()).unwrap();
        assert!(!state_file.exists());
    }
}
