//! icongen library
//!
//! Turns base64 icon constants embedded in Java sources into PNG files.
//! The binary entry point is thin; all logic lives here and in
//! `icongen-core`.

// Module declarations
pub mod config;
pub mod generate;
pub mod list;
pub mod watcher;

use std::path::Path;

use tokio::sync::mpsc;

use icongen_core::is_icon_source;
use icongen_core::prelude::*;

use config::Settings;
use watcher::{FileWatcher, Message, WatcherConfig};

// Re-export main entry points
pub use generate::{clean, generate, GenerateReport};
pub use list::run_list;

/// Run an initial generation pass, then regenerate on source changes until
/// interrupted (Ctrl-C).
pub async fn run_watch(project_root: &Path, settings: &Settings) -> Result<()> {
    // Initial full pass; a missing source tree should fail before we start
    // watching it.
    generate(project_root, settings)?;

    let (tx, mut rx) = mpsc::channel(32);
    let watcher_config = WatcherConfig::new()
        .with_paths(settings.source.roots.clone())
        .with_debounce_ms(settings.watcher.debounce_ms)
        .with_extensions(settings.watcher.extensions.clone());
    let mut watcher = FileWatcher::new(project_root.to_path_buf(), watcher_config);
    watcher.start(tx).map_err(Error::watcher)?;

    info!("watching for icon source changes (Ctrl-C to stop)");

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                info!("watch mode stopped");
                break;
            }
            msg = rx.recv() => match msg {
                Some(Message::SourcesChanged { paths }) => {
                    handle_changes(&paths, project_root, settings);
                }
                Some(Message::WatcherError { message }) => {
                    warn!("watcher error: {message}");
                }
                None => {
                    // watcher task is gone, nothing more will arrive
                    return Err(Error::watcher("watcher channel closed"));
                }
            },
        }
    }

    watcher.stop();
    Ok(())
}

/// Regenerate or clean up each changed path
fn handle_changes(paths: &[std::path::PathBuf], project_root: &Path, settings: &Settings) {
    for path in paths {
        if !is_icon_source(path, &settings.source.suffix) {
            continue;
        }
        let result = if path.exists() {
            generate::generate_file(path, project_root, settings).map(|report| {
                info!(
                    "regenerated {}: {} icon(s), {} stale removed",
                    path.display(),
                    report.icons_written,
                    report.stale_removed
                );
            })
        } else {
            generate::remove_file(path, project_root, settings).map(|_| ())
        };
        if let Err(e) = result {
            // keep watching; one bad file must not end the session
            warn!("failed to process {}: {}", path.display(), e);
        }
    }
}
