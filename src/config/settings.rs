//! Settings parser for .icongen/config.toml

use super::types::Settings;
use icongen_core::prelude::*;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.toml";
const ICONGEN_DIR: &str = ".icongen";

/// Load settings from .icongen/config.toml
///
/// Returns default settings if file doesn't exist or can't be parsed.
pub fn load_settings(project_path: &Path) -> Settings {
    let config_path = project_path.join(ICONGEN_DIR).join(CONFIG_FILENAME);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Create a default config file in the .icongen/ directory
pub fn init_config_dir(project_path: &Path) -> Result<()> {
    let icongen_dir = project_path.join(ICONGEN_DIR);

    if !icongen_dir.exists() {
        std::fs::create_dir_all(&icongen_dir)
            .map_err(|e| Error::config(format!("Failed to create .icongen dir: {}", e)))?;
    }

    let config_path = icongen_dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        let default_content = r#"# icongen configuration

[source]
roots = ["src"]
suffix = "Icons.java"   # only files named *Icons.java are scanned
field_type = "String"   # declared Java type of an icon constant
max_depth = 8

[output]
dir = "build/icons"
state_dir = "build/icon-state"

[watcher]
debounce_ms = 500
extensions = ["java"]
"#;
        std::fs::write(&config_path, default_content)
            .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::tempdir;

    #[test]
    fn test_load_settings_defaults() {
        let temp = tempdir().unwrap();
        let settings = load_settings(temp.path());

        assert_eq!(settings.source.suffix, "Icons.java");
        assert_eq!(settings.watcher.debounce_ms, 500);
    }

    #[test]
    fn test_load_settings_custom() {
        let temp = tempdir().unwrap();
        let icongen_dir = temp.path().join(".icongen");
        std::fs::create_dir_all(&icongen_dir).unwrap();

        let config = r#"
[source]
roots = ["app/src/main/java"]
field_type = "Base64Png"

[watcher]
debounce_ms = 1000
"#;
        std::fs::write(icongen_dir.join("config.toml"), config).unwrap();

        let settings = load_settings(temp.path());

        assert_eq!(
            settings.source.roots,
            vec![PathBuf::from("app/src/main/java")]
        );
        assert_eq!(settings.source.field_type, "Base64Png");
        assert_eq!(settings.watcher.debounce_ms, 1000);
    }

    #[test]
    fn test_load_settings_invalid_toml() {
        let temp = tempdir().unwrap();
        let icongen_dir = temp.path().join(".icongen");
        std::fs::create_dir_all(&icongen_dir).unwrap();

        // Invalid TOML
        std::fs::write(icongen_dir.join("config.toml"), "not valid toml {{{{").unwrap();

        // Should return defaults
        let settings = load_settings(temp.path());
        assert_eq!(settings.source.field_type, "String");
    }

    #[test]
    fn test_init_config_dir() {
        let temp = tempdir().unwrap();

        init_config_dir(temp.path()).unwrap();

        assert!(temp.path().join(".icongen").exists());
        assert!(temp.path().join(".icongen/config.toml").exists());

        // Content should be valid TOML
        let content = std::fs::read_to_string(temp.path().join(".icongen/config.toml")).unwrap();
        let _: Settings = toml::from_str(&content).expect("Default config should be valid TOML");
    }

    #[test]
    fn test_init_config_dir_idempotent() {
        let temp = tempdir().unwrap();

        // First init
        init_config_dir(temp.path()).unwrap();

        // Modify the file
        let config_path = temp.path().join(".icongen/config.toml");
        std::fs::write(&config_path, "[source]\nfield_type = \"Kept\"\n").unwrap();

        // Second init should not overwrite
        init_config_dir(temp.path()).unwrap();

        let settings = load_settings(temp.path());
        assert_eq!(settings.source.field_type, "Kept");
    }
}
