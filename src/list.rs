//! The `list` command: show catalog contents without generating anything.
//!
//! Each source file is exposed through the catalog contract, so the listing
//! reflects exactly what a generation run would produce.

use std::path::Path;

use icongen_core::catalog::IconCatalog;
use icongen_core::extract::{extract_icons_from_file, ParsedIcon};
use icongen_core::prelude::*;

use crate::config::Settings;
use crate::generate::discover_sources;

/// Build a catalog over one source file's icons, keyed by qualified name
pub fn catalog_for_source(icons: &[ParsedIcon]) -> Result<IconCatalog> {
    let mut builder = IconCatalog::builder();
    for icon in icons {
        builder = builder.entry(icon.qualified_name(), icon.encoded.clone());
    }
    builder.build()
}

/// List every icon declared under the configured source roots.
///
/// Prints one line per icon (`<qualified name>  <decoded size> bytes`), or a
/// single JSON object mapping source paths to icon names with `json`.
pub fn run_list(project_root: &Path, settings: &Settings, json: bool) -> Result<()> {
    let sources = discover_sources(project_root, settings);
    if sources.is_empty() {
        return Err(Error::no_source_files(project_root));
    }

    let mut listing = serde_json::Map::new();
    for source in &sources {
        let icons = extract_icons_from_file(source, &settings.source.field_type);
        let catalog = catalog_for_source(&icons)?;

        if json {
            let names: Vec<_> = catalog.names().map(serde_json::Value::from).collect();
            listing.insert(
                source.display().to_string(),
                serde_json::Value::Array(names),
            );
        } else {
            println!("{}", source.display());
            for name in catalog.names() {
                let size = catalog.decode(name)?.len();
                println!("  {}  {} bytes", name, size);
            }
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&listing)?);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    // "icon" in base64
    const ICON_B64: &str = "aWNvbg==";

    #[test]
    fn test_catalog_for_source_uses_qualified_names() {
        let source = format!(
            "package foo;\nclass AppIcons {{\n    public final static String AIcon = \"{ICON_B64}\";\n}}\n"
        );
        let icons = icongen_core::extract::extract_icons(&source, "String");
        let catalog = catalog_for_source(&icons).unwrap();

        assert_eq!(
            catalog.names().collect::<Vec<_>>(),
            vec!["foo.AppIcons.AIcon"]
        );
        assert_eq!(catalog.get("foo.AppIcons.AIcon").unwrap(), ICON_B64);
        assert!(catalog.get("AIcon").is_err());
    }

    #[test]
    fn test_catalog_for_empty_source() {
        let catalog = catalog_for_source(&[]).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_run_list_no_sources() {
        let temp = tempdir().unwrap();
        let err = run_list(temp.path(), &Settings::default(), false).unwrap_err();
        assert!(matches!(err, Error::NoSourceFiles { .. }));
    }

    #[test]
    fn test_run_list_json_smoke() {
        let temp = tempdir().unwrap();
        let dir = temp.path().join("src/foo");
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join("AppIcons.java"),
            format!(
                "package foo;\nclass AppIcons {{\n    public final static String AIcon = \"{ICON_B64}\";\n}}\n"
            ),
        )
        .unwrap();

        run_list(temp.path(), &Settings::default(), true).unwrap();
    }
}
