//! PNG generation from icon sources.
//!
//! A run discovers icon sources under the configured roots, extracts their
//! base64 constants and writes one PNG per constant to
//! `<out dir>/<class fqn with '.' as '/'>/<field>.png`. Every source file
//! has isolated outputs and its own state record, so a changed or removed
//! source only ever touches its own PNGs.

pub mod state;

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use icongen_core::discovery::discover_icon_sources;
use icongen_core::extract::{extract_icons_from_file, ParsedIcon};
use icongen_core::prelude::*;

use crate::config::Settings;
use state::{resolve_state_file, update_state};

/// Summary of a generation run
#[derive(Debug, Default, PartialEq, Eq)]
pub struct GenerateReport {
    /// Source files processed
    pub sources: usize,
    /// Icons written
    pub icons_written: usize,
    /// Stale outputs removed
    pub stale_removed: usize,
}

/// Run a full generation pass over every configured source root.
///
/// Fails with [`Error::NoSourceFiles`] when no root contains a single icon
/// source; a project pointing the tool at the wrong directory should hear
/// about it rather than silently generate nothing.
pub fn generate(project_root: &Path, settings: &Settings) -> Result<GenerateReport> {
    let sources = discover_sources(project_root, settings);
    if sources.is_empty() {
        return Err(Error::no_source_files(project_root));
    }

    let mut report = GenerateReport::default();
    for source in &sources {
        let file = generate_file(source, project_root, settings)?;
        report.sources += 1;
        report.icons_written += file.icons_written;
        report.stale_removed += file.stale_removed;
    }

    info!(
        "generated {} icon(s) from {} source(s), removed {} stale output(s)",
        report.icons_written, report.sources, report.stale_removed
    );
    Ok(report)
}

/// Per-file generation summary
#[derive(Debug, Default, PartialEq, Eq)]
pub struct FileReport {
    pub icons_written: usize,
    pub stale_removed: usize,
}

/// Regenerate the outputs of a single source file.
///
/// Extracts the file's icons, writes each payload, then replays the state
/// so icons dropped from the source since the last run are deleted.
pub fn generate_file(
    source: &Path,
    project_root: &Path,
    settings: &Settings,
) -> Result<FileReport> {
    let out_dir = project_root.join(&settings.output.dir);
    let state_dir = project_root.join(&settings.output.state_dir);

    let icons = extract_icons_from_file(source, &settings.source.field_type);

    let mut outputs = BTreeSet::new();
    let mut report = FileReport::default();
    for icon in &icons {
        let path = output_path(&out_dir, icon);
        write_icon(icon, &path)?;
        outputs.insert(path);
        report.icons_written += 1;
    }

    let state_file = resolve_state_file(&state_dir, source);
    report.stale_removed = update_state(&state_file, &outputs)?;
    Ok(report)
}

/// Handle a source file that no longer exists.
///
/// Replays its state with an empty output set, removing every PNG the file
/// ever produced along with the state record.
pub fn remove_file(source: &Path, project_root: &Path, settings: &Settings) -> Result<usize> {
    let state_dir = project_root.join(&settings.output.state_dir);
    let state_file = resolve_state_file(&state_dir, source);
    let removed = update_state(&state_file, &BTreeSet::new())?;
    if removed > 0 {
        info!(
            "source {} removed, deleted {} output(s)",
            source.display(),
            removed
        );
    }
    Ok(removed)
}

/// Delete the output and state directories entirely
pub fn clean(project_root: &Path, settings: &Settings) -> Result<()> {
    for dir in [
        project_root.join(&settings.output.dir),
        project_root.join(&settings.output.state_dir),
    ] {
        match std::fs::remove_dir_all(&dir) {
            Ok(()) => info!("removed {}", dir.display()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}

/// All icon sources under the configured roots, sorted
pub fn discover_sources(project_root: &Path, settings: &Settings) -> Vec<PathBuf> {
    let mut sources = Vec::new();
    for root in &settings.source.roots {
        let base = project_root.join(root);
        sources.extend(
            discover_icon_sources(&base, &settings.source.suffix, settings.source.max_depth)
                .sources,
        );
    }
    sources.sort();
    sources
}

/// Output path for one icon: class FQN as directories, field name as file
fn output_path(out_dir: &Path, icon: &ParsedIcon) -> PathBuf {
    let prefix = icon.class_fqn.replace('.', "/");
    out_dir.join(prefix).join(format!("{}.png", icon.field_name))
}

fn write_icon(icon: &ParsedIcon, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, &icon.content)?;
    debug!("wrote {}", path.display());
    Ok(())
}
