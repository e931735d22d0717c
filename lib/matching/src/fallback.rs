//! Keyword fallback matcher
//!
//! Deterministic rule-based matching used when semantic similarity is weak
//! or the index has no candidates. Scans the catalog in load order; the
//! first item satisfying any condition wins. There is no ranking among
//! fallback candidates.

use crate::expand::contains_any;
use rfpmatch_core::{Catalog, CatalogItem};

const MANUFACTURING_TERMS: &[&str] = &["manufactur", "plant", "factory"];
const ERP_TERMS: &[&str] = &["sap", "oracle", "erp"];
const ERP_PRODUCT_TERMS: &[&str] = &["sap", "oracle", "erp", "integration"];
const CLOUD_TERMS: &[&str] = &["cloud", "hosting", "server"];
const CLOUD_PRODUCT_TERMS: &[&str] = &["cloud", "server", "infrastructure"];

/// Find the first catalog item matching the raw lowercase requirement text.
///
/// Conditions per item, checked in order:
/// (a) any technical keyword appears as a substring of the requirement;
/// (b) a manufacturing-family term in the requirement and "manufactur" or
///     "plant" in the item name or category;
/// (c) an ERP-family term in the requirement and an ERP term in the item
///     name or description;
/// (d) a cloud-family term in the requirement and a cloud/infrastructure
///     term in the item name or description.
pub fn keyword_fallback<'a>(catalog: &'a Catalog, requirement_text: &str) -> Option<&'a CatalogItem> {
    let requirement = requirement_text.to_lowercase();

    for item in catalog.items() {
        let name = item.name.to_lowercase();
        let description = item.description.to_lowercase();
        let category = item.category.to_lowercase();

        if item
            .technical_keywords
            .iter()
            .any(|keyword| requirement.contains(&keyword.to_lowercase()))
        {
            return Some(item);
        }

        if contains_any(&requirement, MANUFACTURING_TERMS)
            && (name.contains("manufactur")
                || name.contains("plant")
                || category.contains("manufactur")
                || category.contains("plant"))
        {
            return Some(item);
        }

        if contains_any(&requirement, ERP_TERMS)
            && ERP_PRODUCT_TERMS
                .iter()
                .any(|term| name.contains(term) || description.contains(term))
        {
            return Some(item);
        }

        if contains_any(&requirement, CLOUD_TERMS)
            && CLOUD_PRODUCT_TERMS
                .iter()
                .any(|term| name.contains(term) || description.contains(term))
        {
            return Some(item);
        }
    }

    None
}
