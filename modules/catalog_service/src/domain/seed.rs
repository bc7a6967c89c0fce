//! Default collections written by the reset operations
//!
//! The built-in catalog is `seed/defaults.json`, embedded at build time.
//! Deployments may point `seed_file` at their own copy with the same layout.

use super::validation::{validate_partners, validate_shop_products};
use crate::contract::{PartnerDraft, ShopProductDraft};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

const BUILTIN_SEED: &str = include_str!("../../seed/defaults.json");

/// Validated seed lists for both collections
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedCatalog {
    partners: Vec<PartnerDraft>,
    shop_products: Vec<ShopProductDraft>,
}

impl SeedCatalog {
    /// Catalog shipped with the service
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_SEED).context("built-in seed catalog is invalid")
    }

    /// Load a seed file from disk
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read seed file {}", path.display()))?;
        Self::from_json(&raw)
            .with_context(|| format!("seed file {} is invalid", path.display()))
    }

    /// Parse and validate seed JSON; records must pass bulk-replace validation
    pub fn from_json(raw: &str) -> Result<Self> {
        let file: SeedFileJson = serde_json::from_str(raw)?;

        let partners = validate_partners(file.partners.into_iter().map(Into::into).collect())?;
        let shop_products =
            validate_shop_products(file.shop_products.into_iter().map(Into::into).collect())?;

        Ok(Self {
            partners,
            shop_products,
        })
    }

    pub fn partners(&self) -> &[PartnerDraft] {
        &self.partners
    }

    pub fn shop_products(&self) -> &[ShopProductDraft] {
        &self.shop_products
    }
}

// ===== JSON Deserialization Helpers =====

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SeedFileJson {
    partners: Vec<PartnerSeedJson>,
    shop_products: Vec<ShopProductSeedJson>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PartnerSeedJson {
    name: String,
    logo_src: String,
    website_url: String,
    alt_text: String,
    #[serde(default)]
    order_index: i64,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ShopProductSeedJson {
    title: String,
    description: String,
    logo_src: String,
    logo_alt: String,
    #[serde(default)]
    order_index: i64,
}

impl From<PartnerSeedJson> for PartnerDraft {
    fn from(json: PartnerSeedJson) -> Self {
        Self {
            name: json.name,
            logo_src: json.logo_src,
            website_url: json.website_url,
            alt_text: json.alt_text,
            order_index: json.order_index,
        }
    }
}

impl From<ShopProductSeedJson> for ShopProductDraft {
    fn from(json: ShopProductSeedJson) -> Self {
        Self {
            title: json.title,
            description: json.description,
            logo_src: json.logo_src,
            logo_alt: json.logo_alt,
            order_index: json.order_index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_has_five_of_each() {
        let seed = SeedCatalog::builtin().unwrap();

        let names: Vec<&str> = seed.partners().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Microsoft", "Google", "Amazon", "Apple", "Meta"]);

        let titles: Vec<&str> = seed
            .shop_products()
            .iter()
            .map(|p| p.title.as_str())
            .collect();
        assert_eq!(
            titles,
            [
                "Laptop Dell XPS 13",
                "MacBook Pro M2",
                "ThinkPad X1 Carbon",
                "Surface Laptop 5",
                "ROG Zephyrus G14"
            ]
        );
    }

    #[test]
    fn order_index_defaults_to_zero() {
        let raw = r#"{
            "partners": [
                {"name": "Acme", "logo_src": "/a.png", "website_url": "https://a.com", "alt_text": "Acme"}
            ],
            "shop_products": []
        }"#;

        let seed = SeedCatalog::from_json(raw).unwrap();
        assert_eq!(seed.partners()[0].order_index, 0);
        assert!(seed.shop_products().is_empty());
    }

    #[test]
    fn blank_required_field_fails_the_whole_file() {
        let raw = r#"{
            "partners": [],
            "shop_products": [
                {"title": "Kit", "description": "", "logo_src": "/k.png", "logo_alt": "Kit"}
            ]
        }"#;

        let err = SeedCatalog::from_json(raw).unwrap_err();
        assert!(err.to_string().contains("products[0].description is required"));
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = SeedCatalog::from_path(Path::new("/nonexistent/seed.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/seed.json"));
    }
}
