//! Curated part catalog: canonical query keys mapped to vendor listings.
//!
//! Key order is significant. The fuzzy match stages walk keys in the order
//! they were defined and stop at the first hit, so the catalog keeps its
//! entries in a `Vec` and uses the `HashMap` only for exact lookups.
//!
//! Aliased keys (`"falcon"` / `"falcon 500"`) intentionally carry identical
//! listings and are not deduplicated.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::Deserialize;

use crate::parts::{PartEntry, PartRecord};
use crate::ConfigError;

const BUILTIN_CATALOG: &str = include_str!("../../../config/catalog.yaml");

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogItem {
    pub key: String,
    pub entries: Vec<PartEntry>,
}

/// On-disk catalog shape.
#[derive(Debug, Deserialize)]
pub struct CatalogFile {
    pub parts: Vec<CatalogFileItem>,
}

#[derive(Debug, Deserialize)]
pub struct CatalogFileItem {
    pub key: String,
    #[serde(default)]
    pub entries: Vec<PartRecord>,
}

/// Read-only, insertion-ordered catalog.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<CatalogItem>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Builds a catalog from already-converted items, validating keys.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] if a key is empty, not trimmed and
    /// lowercase, duplicated, or has no entries.
    pub fn from_items(items: Vec<CatalogItem>) -> Result<Self, ConfigError> {
        validate_items(&items)?;
        let index = items
            .iter()
            .enumerate()
            .map(|(idx, item)| (item.key.clone(), idx))
            .collect();
        Ok(Self { items, index })
    }

    /// The catalog shipped with the binary.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] only if the embedded document is malformed.
    pub fn builtin() -> Result<Self, ConfigError> {
        parse_catalog(BUILTIN_CATALOG)
    }

    /// Exact key lookup.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&[PartEntry]> {
        self.index
            .get(key)
            .map(|&idx| self.items[idx].entries.as_slice())
    }

    /// Iterates `(key, entries)` in definition order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[PartEntry])> {
        self.items
            .iter()
            .map(|item| (item.key.as_str(), item.entries.as_slice()))
    }

    #[must_use]
    pub fn keys(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.key.as_str()).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Parses and validates a catalog from YAML text.
///
/// # Errors
///
/// Returns [`ConfigError::CatalogParse`] on malformed YAML and
/// [`ConfigError::Validation`] when keys fail validation.
pub fn parse_catalog(content: &str) -> Result<Catalog, ConfigError> {
    let file: CatalogFile = serde_yaml::from_str(content).map_err(ConfigError::CatalogParse)?;
    let items = file
        .parts
        .into_iter()
        .map(|item| CatalogItem {
            key: item.key,
            entries: item
                .entries
                .into_iter()
                .map(PartRecord::into_entry)
                .collect(),
        })
        .collect();
    Catalog::from_items(items)
}

/// Loads and validates a catalog file.
///
/// # Errors
///
/// Returns [`ConfigError`] if the file cannot be read, parsed, or fails
/// validation.
pub fn load_catalog(path: &Path) -> Result<Catalog, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::CatalogIo {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_catalog(&content)
}

fn validate_items(items: &[CatalogItem]) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();

    for item in items {
        if item.key.trim().is_empty() {
            return Err(ConfigError::Validation(
                "catalog key must be non-empty".to_string(),
            ));
        }

        // Exact-match lookups use the trimmed, lowercased query.
        if item.key != item.key.trim().to_lowercase() {
            return Err(ConfigError::Validation(format!(
                "catalog key '{}' must be trimmed and lowercase",
                item.key
            )));
        }

        if !seen.insert(item.key.as_str()) {
            return Err(ConfigError::Validation(format!(
                "duplicate catalog key: '{}'",
                item.key
            )));
        }

        if item.entries.is_empty() {
            return Err(ConfigError::Validation(format!(
                "catalog key '{}' has no entries",
                item.key
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parts::StockState;

    fn item(key: &str) -> CatalogItem {
        CatalogItem {
            key: key.to_string(),
            entries: vec![PartRecord {
                name: format!("{key} part"),
                vendor: "AndyMark".to_string(),
                ..PartRecord::default()
            }
            .into_entry()],
        }
    }

    #[test]
    fn builtin_catalog_loads_in_definition_order() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.len(), 32);
        let keys = catalog.keys();
        assert_eq!(keys[0], "neo motor");
        assert_eq!(keys[1], "neo 550");
        assert_eq!(keys[keys.len() - 1], "cancoder wired");
    }

    #[test]
    fn builtin_catalog_has_aliases_with_identical_entries() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.get("falcon"), catalog.get("falcon 500"));
        assert_eq!(catalog.get("roborio"), catalog.get("roborio 2.0"));
    }

    #[test]
    fn builtin_catalog_migrates_legacy_stock() {
        let catalog = Catalog::builtin().unwrap();
        let victor = catalog.get("victor spx").unwrap();
        assert_eq!(victor[0].stock_state, StockState::OutOfStock);
        let neo = catalog.get("neo motor").unwrap();
        assert_eq!(neo[0].stock_state, StockState::InStock);
        assert_eq!(neo[0].price, Some(50.0));
        assert!(neo.iter().all(|e| !e.is_search_link));
    }

    #[test]
    fn get_is_exact() {
        let catalog = Catalog::builtin().unwrap();
        assert!(catalog.get("kraken").is_some());
        assert!(catalog.get("Kraken").is_none());
        assert!(catalog.get("krak").is_none());
    }

    #[test]
    fn validate_rejects_duplicate_key() {
        let err = Catalog::from_items(vec![item("cim"), item("cim")]).unwrap_err();
        assert!(err.to_string().contains("duplicate catalog key"));
    }

    #[test]
    fn validate_rejects_uppercase_key() {
        let err = Catalog::from_items(vec![item("NEO")]).unwrap_err();
        assert!(err.to_string().contains("lowercase"));
    }

    #[test]
    fn validate_rejects_blank_key() {
        let err = Catalog::from_items(vec![item("   ")]).unwrap_err();
        assert!(err.to_string().contains("non-empty"));
    }

    #[test]
    fn validate_rejects_key_without_entries() {
        let empty = CatalogItem {
            key: "pdh".to_string(),
            entries: Vec::new(),
        };
        let err = Catalog::from_items(vec![empty]).unwrap_err();
        assert!(err.to_string().contains("no entries"));
    }

    #[test]
    fn empty_catalog_is_allowed() {
        let catalog = Catalog::from_items(Vec::new()).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn parse_catalog_accepts_both_record_generations() {
        let yaml = r#"
parts:
  - key: "kraken"
    entries:
      - name: "Kraken X60"
        vendor: "CTRE"
        price: "217.99"
        inStock: false
  - key: "neo"
    entries:
      - name: "NEO"
        vendor: "REV Robotics"
        price: 50
        stock: "limited-stock"
"#;
        let catalog = parse_catalog(yaml).unwrap();
        assert_eq!(catalog.keys(), vec!["kraken", "neo"]);
        let kraken = &catalog.get("kraken").unwrap()[0];
        assert_eq!(kraken.price, Some(217.99));
        assert_eq!(kraken.stock_state, StockState::OutOfStock);
        let neo = &catalog.get("neo").unwrap()[0];
        assert_eq!(neo.stock_state, StockState::LimitedStock);
    }

    #[test]
    fn parse_catalog_reports_malformed_yaml() {
        let err = parse_catalog("parts: [ {key: ").unwrap_err();
        assert!(matches!(err, ConfigError::CatalogParse(_)));
    }

    #[test]
    fn load_catalog_reports_missing_file() {
        let err = load_catalog(Path::new("/definitely/not/here/catalog.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::CatalogIo { .. }));
    }

    #[test]
    fn load_catalog_from_real_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join("config")
            .join("catalog.yaml");
        let result = load_catalog(&path);
        assert!(result.is_ok(), "failed to load catalog.yaml: {result:?}");
        assert!(!result.unwrap().is_empty());
    }
}
