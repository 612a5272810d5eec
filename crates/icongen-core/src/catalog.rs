//! Immutable named icon catalogs.
//!
//! An [`IconCatalog`] is a fixed mapping from a symbolic name to a
//! base64-encoded binary payload, built once and read-only afterwards.
//! Lookups never mutate the catalog, so any number of threads may call
//! [`IconCatalog::get`], [`IconCatalog::decode`] and [`IconCatalog::names`]
//! concurrently without coordination.

use std::collections::HashMap;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::error::{Error, Result};

/// A single named entry: symbolic name plus base64 payload text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconEntry {
    pub name: String,
    pub encoded: String,
}

/// A fixed, read-only mapping from icon name to base64 payload.
///
/// Constructed through [`IconCatalog::builder`]; construction validates
/// every entry (unique name, decodable base64) so lookups on a built
/// catalog only fail for names that were never declared.
#[derive(Debug, Clone)]
pub struct IconCatalog {
    /// Entries in declaration order
    entries: Vec<IconEntry>,
    /// Name -> index into `entries`
    index: HashMap<String, usize>,
}

impl IconCatalog {
    /// Start building a catalog
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder {
            entries: Vec::new(),
        }
    }

    /// Return the stored base64 text for `name`
    ///
    /// Fails with [`Error::UnknownIcon`] for names that were never declared.
    pub fn get(&self, name: &str) -> Result<&str> {
        self.index
            .get(name)
            .map(|&i| self.entries[i].encoded.as_str())
            .ok_or_else(|| Error::unknown_icon(name))
    }

    /// Decode the payload for `name` into raw bytes
    ///
    /// Catalog construction already verified the encoding, so
    /// [`Error::MalformedEncoding`] is unreachable here for built catalogs;
    /// it is still reported rather than panicking in case entries ever come
    /// from a less trusted source.
    pub fn decode(&self, name: &str) -> Result<Vec<u8>> {
        let encoded = self.get(name)?;
        STANDARD
            .decode(encoded)
            .map_err(|e| Error::malformed_encoding(name, e))
    }

    /// Iterate over all declared names, in declaration order
    ///
    /// Restartable: every call yields the same sequence.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Builder for [`IconCatalog`]
///
/// Entries are collected as declared; [`CatalogBuilder::build`] performs the
/// validation pass and fails on the first duplicate name or undecodable
/// payload.
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    entries: Vec<IconEntry>,
}

impl CatalogBuilder {
    /// Declare an entry
    pub fn entry(mut self, name: impl Into<String>, encoded: impl Into<String>) -> Self {
        self.entries.push(IconEntry {
            name: name.into(),
            encoded: encoded.into(),
        });
        self
    }

    /// Validate all declared entries and produce the catalog
    pub fn build(self) -> Result<IconCatalog> {
        let mut index = HashMap::with_capacity(self.entries.len());
        for (i, entry) in self.entries.iter().enumerate() {
            if index.insert(entry.name.clone(), i).is_some() {
                return Err(Error::duplicate_icon(entry.name.as_str()));
            }
            STANDARD
                .decode(&entry.encoded)
                .map_err(|e| Error::malformed_encoding(entry.name.as_str(), e))?;
        }
        Ok(IconCatalog {
            entries: self.entries,
            index,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // "icon" in base64
    const SMALL: &str = "aWNvbg==";

    fn two_entry_catalog() -> IconCatalog {
        IconCatalog::builder()
            .entry("AIcon", SMALL)
            .entry("BIcon", "AAEC")
            .build()
            .unwrap()
    }

    #[test]
    fn test_get_returns_exact_literal() {
        let catalog = two_entry_catalog();
        assert_eq!(catalog.get("AIcon").unwrap(), SMALL);
        assert_eq!(catalog.get("BIcon").unwrap(), "AAEC");
    }

    #[test]
    fn test_get_unknown_name() {
        let catalog = two_entry_catalog();
        let err = catalog.get("ZIcon").unwrap_err();
        assert!(matches!(err, Error::UnknownIcon { ref name } if name == "ZIcon"));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_decode_matches_independent_decode() {
        let catalog = two_entry_catalog();
        assert_eq!(catalog.decode("AIcon").unwrap(), b"icon");
        assert_eq!(catalog.decode("BIcon").unwrap(), vec![0x00, 0x01, 0x02]);
    }

    #[test]
    fn test_decode_unknown_name() {
        let catalog = two_entry_catalog();
        assert!(matches!(
            catalog.decode("ZIcon"),
            Err(Error::UnknownIcon { .. })
        ));
    }

    #[test]
    fn test_round_trip_reproduces_literal() {
        let catalog = two_entry_catalog();
        for name in ["AIcon", "BIcon"] {
            let bytes = catalog.decode(name).unwrap();
            assert_eq!(STANDARD.encode(&bytes), catalog.get(name).unwrap());
        }
    }

    #[test]
    fn test_names_declaration_order_and_restartable() {
        let catalog = two_entry_catalog();
        let first: Vec<_> = catalog.names().collect();
        let second: Vec<_> = catalog.names().collect();
        assert_eq!(first, vec!["AIcon", "BIcon"]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_duplicate_name_fails_build() {
        let err = IconCatalog::builder()
            .entry("AIcon", SMALL)
            .entry("AIcon", "AAEC")
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::DuplicateIcon { ref name } if name == "AIcon"));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_malformed_entry_fails_build() {
        let err = IconCatalog::builder()
            .entry("Bad", "not!!valid@@base64")
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::MalformedEncoding { ref name, .. } if name == "Bad"));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = IconCatalog::builder().build().unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.names().count(), 0);
        assert!(matches!(
            catalog.get("anything"),
            Err(Error::UnknownIcon { .. })
        ));
    }

    #[test]
    fn test_contains_and_len() {
        let catalog = two_entry_catalog();
        assert_eq!(catalog.len(), 2);
        assert!(catalog.contains("AIcon"));
        assert!(!catalog.contains("ZIcon"));
    }

    #[test]
    fn test_catalog_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<IconCatalog>();
    }
}
