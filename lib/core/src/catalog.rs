//! Product catalog store
//!
//! The catalog is loaded wholesale at startup and is immutable for the
//! lifetime of the process. Any change to the source file requires a full
//! reload; there is no update or delete path.

use crate::error::{Error, Result};
use crate::money::Money;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// A single product offering in the catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogItem {
    /// Unique identifier, stable for the lifetime of the catalog
    pub sku: String,
    pub name: String,
    pub description: String,
    /// Open business-category label (e.g. "ERP", "Cloud Infrastructure")
    pub category: String,
    /// Normalized lowercase tokens used for fallback keyword matching
    #[serde(default)]
    pub technical_keywords: Vec<String>,
    /// Attribute name -> value pairs, folded into the embedding text.
    /// BTreeMap keeps the rendered text order deterministic.
    #[serde(default)]
    pub specs: BTreeMap<String, String>,
    pub base_price: Money,
}

impl CatalogItem {
    /// Text representation fed to the embedder: name, description,
    /// technical keywords, then specs as `key: value` pairs.
    pub fn embedding_text(&self) -> String {
        let mut text = format!("{} {} ", self.name, self.description);
        text.push_str(&self.technical_keywords.join(" "));
        for (key, value) in &self.specs {
            text.push_str(&format!(" {}: {}", key, value));
        }
        text
    }
}

/// On-disk catalog file shape: `{"products": [...]}`
#[derive(Debug, Deserialize)]
struct CatalogFile {
    products: Vec<CatalogItem>,
}

/// Read-only, in-memory catalog of product offerings
///
/// Items are kept in load order, which the keyword fallback matcher relies
/// on (first catalog entry wins).
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<CatalogItem>,
    by_sku: AHashMap<String, usize>,
}

impl Catalog {
    /// Load a catalog from a JSON file.
    ///
    /// Fails on a missing file, malformed JSON, a duplicate SKU, or a
    /// non-positive base price. Load failures are fatal: the service must
    /// refuse to serve matching requests until the source is corrected.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Catalog> {
        let raw = std::fs::read_to_string(path)?;
        let file: CatalogFile = serde_json::from_str(&raw)?;
        Self::from_items(file.products)
    }

    /// Build a catalog from already-deserialized items, enforcing the same
    /// invariants as [`Catalog::load`].
    pub fn from_items(items: Vec<CatalogItem>) -> Result<Catalog> {
        let mut by_sku = AHashMap::with_capacity(items.len());

        for (idx, item) in items.iter().enumerate() {
            if !item.base_price.is_positive() {
                return Err(Error::InvalidItem {
                    sku: item.sku.clone(),
                    reason: "base_price must be positive".to_string(),
                });
            }
            if by_sku.insert(item.sku.clone(), idx).is_some() {
                return Err(Error::DuplicateSku(item.sku.clone()));
            }
        }

        Ok(Catalog { items, by_sku })
    }

    #[must_use]
    pub fn find_by_sku(&self, sku: &str) -> Option<&CatalogItem> {
        self.by_sku.get(sku).map(|&idx| &self.items[idx])
    }

    /// Items in load order
    #[must_use]
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&CatalogItem> {
        self.items.get(index)
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn item(sku: &str, name: &str, price: i64) -> CatalogItem {
        CatalogItem {
            sku: sku.to_string(),
            name: name.to_string(),
            description: format!("{} description", name),
            category: "ERP".to_string(),
            technical_keywords: vec!["erp".to_string()],
            specs: BTreeMap::new(),
            base_price: Money::from_major(price),
        }
    }

    #[test]
    fn test_from_items_and_lookup() {
        let catalog =
            Catalog::from_items(vec![item("SKU-1", "Alpha", 100), item("SKU-2", "Beta", 200)])
                .unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.find_by_sku("SKU-2").unwrap().name, "Beta");
        assert!(catalog.find_by_sku("SKU-3").is_none());
    }

    #[test]
    fn test_duplicate_sku_rejected() {
        let result =
            Catalog::from_items(vec![item("SKU-1", "Alpha", 100), item("SKU-1", "Beta", 200)]);
        assert!(matches!(result, Err(Error::DuplicateSku(sku)) if sku == "SKU-1"));
    }

    #[test]
    fn test_non_positive_price_rejected() {
        let result = Catalog::from_items(vec![item("SKU-1", "Alpha", 0)]);
        assert!(matches!(result, Err(Error::InvalidItem { .. })));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"products": [{{
                "sku": "CLOUD-01",
                "name": "Cloud Platform",
                "description": "Managed cloud infrastructure",
                "category": "Cloud Infrastructure",
                "technical_keywords": ["cloud", "hosting"],
                "specs": {{"availability": "99.9%"}},
                "base_price": 2500000
            }}]}}"#
        )
        .unwrap();

        let catalog = Catalog::load(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        let loaded = catalog.find_by_sku("CLOUD-01").unwrap();
        assert_eq!(loaded.base_price, Money::from_major(2_500_000));
        assert!(loaded.embedding_text().contains("availability: 99.9%"));
    }

    #[test]
    fn test_load_missing_file_fails() {
        assert!(matches!(
            Catalog::load("/nonexistent/catalog.json"),
            Err(Error::Io(_))
        ));
    }

    #[test]
    fn test_load_malformed_json_fails() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(Catalog::load(file.path()), Err(Error::Parse(_))));
    }
}
