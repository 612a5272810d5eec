//! File watcher module for watch mode
//!
//! Watches the configured source roots for Java file changes and reports
//! debounced change batches over a channel so the watch loop can regenerate
//! only the affected sources.

use std::path::PathBuf;
use std::time::Duration;

use notify::RecursiveMode;
use notify_debouncer_full::{new_debouncer, DebounceEventResult};
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

/// Default debounce duration in milliseconds
pub const DEFAULT_DEBOUNCE_MS: u64 = 500;

/// Messages emitted by the watcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// One or more watched files changed (created, modified or removed)
    SourcesChanged { paths: Vec<PathBuf> },
    /// The watcher backend reported an error
    WatcherError { message: String },
}

/// Configuration for the file watcher
#[derive(Debug, Clone)]
pub struct WatcherConfig {
    /// Paths to watch (relative to the project root)
    pub paths: Vec<PathBuf>,
    /// Debounce duration
    pub debounce: Duration,
    /// File extensions to watch (empty = all files)
    pub extensions: Vec<String>,
}

impl Default for WatcherConfig {
    fn default() -> Self {
        Self {
            paths: vec![PathBuf::from("src")],
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
            extensions: vec!["java".to_string()],
        }
    }
}

impl WatcherConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set custom paths to watch
    pub fn with_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.paths = paths;
        self
    }

    /// Set debounce duration in milliseconds
    pub fn with_debounce_ms(mut self, ms: u64) -> Self {
        self.debounce = Duration::from_millis(ms);
        self
    }

    /// Set file extensions to watch
    pub fn with_extensions(mut self, extensions: Vec<String>) -> Self {
        self.extensions = extensions;
        self
    }
}

/// Manages file watching over a project's source roots
pub struct FileWatcher {
    /// Project root directory
    project_root: PathBuf,
    /// Configuration
    config: WatcherConfig,
    /// Handle to stop the watcher
    stop_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl FileWatcher {
    /// Create a new file watcher for the given project
    pub fn new(project_root: PathBuf, config: WatcherConfig) -> Self {
        Self {
            project_root,
            config,
            stop_tx: None,
        }
    }

    /// Start watching for file changes
    ///
    /// Sends [`Message::SourcesChanged`] batches to the channel.
    pub fn start(&mut self, message_tx: mpsc::Sender<Message>) -> Result<(), String> {
        if self.is_running() {
            return Err("Watcher is already running".to_string());
        }

        let project_root = self.project_root.clone();
        let config = self.config.clone();
        let (stop_tx, stop_rx) = tokio::sync::oneshot::channel();

        self.stop_tx = Some(stop_tx);

        // Spawn the watcher in a blocking task
        tokio::task::spawn_blocking(move || {
            Self::run_watcher(project_root, config, message_tx, stop_rx);
        });

        Ok(())
    }

    /// Stop the file watcher
    pub fn stop(&mut self) {
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(());
        }
    }

    /// Check if watcher is running
    pub fn is_running(&self) -> bool {
        self.stop_tx.is_some()
    }

    /// Internal: run the blocking watcher
    fn run_watcher(
        project_root: PathBuf,
        config: WatcherConfig,
        message_tx: mpsc::Sender<Message>,
        mut stop_rx: tokio::sync::oneshot::Receiver<()>,
    ) {
        let tx_clone = message_tx.clone();
        let extensions = config.extensions.clone();

        // Create debounced watcher
        let debouncer_result = new_debouncer(
            config.debounce,
            None, // No tick rate override
            move |result: DebounceEventResult| match result {
                Ok(events) => {
                    // Collect paths matching the watched extensions
                    let mut paths: Vec<PathBuf> = events
                        .iter()
                        .flat_map(|event| event.paths.iter())
                        .filter(|path| {
                            if extensions.is_empty() {
                                return true;
                            }
                            path.extension()
                                .and_then(|ext| ext.to_str())
                                .map(|ext| extensions.iter().any(|e| e == ext))
                                .unwrap_or(false)
                        })
                        .cloned()
                        .collect();
                    paths.sort();
                    paths.dedup();

                    if paths.is_empty() {
                        return;
                    }

                    debug!("File watcher detected {} change(s)", paths.len());
                    let _ = tx_clone.blocking_send(Message::SourcesChanged { paths });
                }
                Err(errors) => {
                    for error in errors {
                        warn!("File watcher error: {:?}", error);
                        let _ = tx_clone.blocking_send(Message::WatcherError {
                            message: error.to_string(),
                        });
                    }
                }
            },
        );

        let mut debouncer = match debouncer_result {
            Ok(d) => d,
            Err(e) => {
                error!("Failed to create file watcher: {}", e);
                let _ = message_tx.blocking_send(Message::WatcherError {
                    message: format!("Failed to create watcher: {}", e),
                });
                return;
            }
        };

        // Add watched paths
        for relative_path in &config.paths {
            let full_path = project_root.join(relative_path);
            if full_path.exists() {
                if let Err(e) = debouncer.watch(&full_path, RecursiveMode::Recursive) {
                    warn!("Failed to watch {}: {}", full_path.display(), e);
                } else {
                    info!("Watching: {}", full_path.display());
                }
            } else {
                warn!("Watch path does not exist: {}", full_path.display());
            }
        }

        // Keep running until stop signal
        loop {
            match stop_rx.try_recv() {
                Ok(()) | Err(tokio::sync::oneshot::error::TryRecvError::Closed) => {
                    info!("File watcher stopping");
                    break;
                }
                Err(tokio::sync::oneshot::error::TryRecvError::Empty) => {
                    // Still running, sleep briefly
                    std::thread::sleep(Duration::from_millis(100));
                }
            }
        }
    }
}

impl Drop for FileWatcher {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_watcher_config_default() {
        let config = WatcherConfig::default();

        assert_eq!(config.debounce, Duration::from_millis(500));
        assert_eq!(config.paths, vec![PathBuf::from("src")]);
        assert_eq!(config.extensions, vec!["java".to_string()]);
    }

    #[test]
    fn test_watcher_config_builder() {
        let config = WatcherConfig::new()
            .with_debounce_ms(1000)
            .with_paths(vec![PathBuf::from("app"), PathBuf::from("lib")])
            .with_extensions(vec!["java".to_string(), "kt".to_string()]);

        assert_eq!(config.debounce, Duration::from_millis(1000));
        assert_eq!(config.paths.len(), 2);
        assert_eq!(config.extensions.len(), 2);
    }

    #[test]
    fn test_file_watcher_creation() {
        let project_root = PathBuf::from("/tmp/test_project");
        let config = WatcherConfig::default();
        let watcher = FileWatcher::new(project_root.clone(), config);

        assert_eq!(watcher.project_root, project_root);
        assert!(!watcher.is_running());
    }

    #[tokio::test]
    async fn test_file_watcher_stop_when_not_started() {
        let project_root = PathBuf::from("/tmp/test_project");
        let config = WatcherConfig::default();
        let mut watcher = FileWatcher::new(project_root, config);

        // Should not panic
        watcher.stop();
        assert!(!watcher.is_running());
    }

    #[tokio::test]
    async fn test_file_watcher_double_start_error() {
        let project_root = PathBuf::from("/tmp/test_project");
        let config = WatcherConfig::default();
        let mut watcher = FileWatcher::new(project_root, config);

        let (tx, _rx) = mpsc::channel(32);

        // First start should succeed
        let result1 = watcher.start(tx.clone());
        assert!(result1.is_ok());
        assert!(watcher.is_running());

        // Second start should fail
        let result2 = watcher.start(tx);
        assert!(result2.is_err());
        assert!(result2.unwrap_err().contains("already running"));

        watcher.stop();
    }
}
