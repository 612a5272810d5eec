//! Configuration types for icongen
//!
//! Defines:
//! - `Settings` - Project settings loaded from `.icongen/config.toml`
//! - Related sub-types with serde defaults

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use icongen_core::discovery::{DEFAULT_MAX_DEPTH, DEFAULT_SOURCE_SUFFIX};

/// Project settings (`.icongen/config.toml`)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub source: SourceSettings,

    #[serde(default)]
    pub output: OutputSettings,

    #[serde(default)]
    pub watcher: WatcherSettings,
}

/// Where icon sources live and what counts as one
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SourceSettings {
    /// Source roots to scan, relative to the project root
    #[serde(default = "default_roots")]
    pub roots: Vec<PathBuf>,

    /// File name suffix an icon source must match
    #[serde(default = "default_suffix")]
    pub suffix: String,

    /// Declared Java type of an icon field
    #[serde(default = "default_field_type")]
    pub field_type: String,

    /// Maximum directory depth to search below each root
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            roots: default_roots(),
            suffix: default_suffix(),
            field_type: default_field_type(),
            max_depth: default_max_depth(),
        }
    }
}

/// Where generated files go
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputSettings {
    /// Directory for generated PNG files, relative to the project root
    #[serde(default = "default_out_dir")]
    pub dir: PathBuf,

    /// Directory for per-source state files, relative to the project root
    #[serde(default = "default_state_dir")]
    pub state_dir: PathBuf,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            dir: default_out_dir(),
            state_dir: default_state_dir(),
        }
    }
}

/// Watch mode settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WatcherSettings {
    /// Debounce duration in milliseconds
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// File extensions that can trigger a rebuild (empty = all files)
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

impl Default for WatcherSettings {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            extensions: default_extensions(),
        }
    }
}

fn default_roots() -> Vec<PathBuf> {
    vec![PathBuf::from("src")]
}

fn default_suffix() -> String {
    DEFAULT_SOURCE_SUFFIX.to_string()
}

fn default_field_type() -> String {
    "String".to_string()
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

fn default_out_dir() -> PathBuf {
    PathBuf::from("build/icons")
}

fn default_state_dir() -> PathBuf {
    PathBuf::from("build/icon-state")
}

fn default_debounce_ms() -> u64 {
    500
}

fn default_extensions() -> Vec<String> {
    vec!["java".to_string()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();
        assert_eq!(settings.source.roots, vec![PathBuf::from("src")]);
        assert_eq!(settings.source.suffix, "Icons.java");
        assert_eq!(settings.source.field_type, "String");
        assert_eq!(settings.output.dir, PathBuf::from("build/icons"));
        assert_eq!(settings.watcher.debounce_ms, 500);
        assert_eq!(settings.watcher.extensions, vec!["java".to_string()]);
    }

    #[test]
    fn test_settings_partial_toml() {
        let settings: Settings = toml::from_str(
            r#"
[source]
field_type = "Base64Png"

[output]
dir = "generated"
"#,
        )
        .unwrap();
        assert_eq!(settings.source.field_type, "Base64Png");
        assert_eq!(settings.source.suffix, "Icons.java");
        assert_eq!(settings.output.dir, PathBuf::from("generated"));
        assert_eq!(settings.output.state_dir, PathBuf::from("build/icon-state"));
    }

    #[test]
    fn test_settings_empty_toml() {
        let settings: Settings = toml::from_str("").unwrap();
        assert_eq!(settings.source.max_depth, DEFAULT_MAX_DEPTH);
    }
}
