//! Domain service - business logic orchestration

use super::repository::{PartnerRepository, ShopProductRepository};
use super::seed::SeedCatalog;
use super::validation::{validate_partners, validate_shop_products};
use crate::contract::{CatalogError, Partner, PartnerDraft, ShopProduct, ShopProductDraft};
use std::sync::Arc;

/// Domain service for the partners and shop products collections
pub struct Service {
    partner_repo: Arc<dyn PartnerRepository>,
    shop_product_repo: Arc<dyn ShopProductRepository>,
    seed: SeedCatalog,
}

impl Service {
    /// Create a new service instance
    pub fn new(
        partner_repo: Arc<dyn PartnerRepository>,
        shop_product_repo: Arc<dyn ShopProductRepository>,
        seed: SeedCatalog,
    ) -> Self {
        Self {
            partner_repo,
            shop_product_repo,
            seed,
        }
    }

    // ===== Partner Operations =====

    /// All partners ordered by order_index; empty collection is not an error
    pub async fn list_partners(&self) -> Result<Vec<Partner>, CatalogError> {
        self.partner_repo
            .list_ordered()
            .await
            .map_err(|e| CatalogError::storage(&e))
    }

    /// Replace the whole partners collection.
    ///
    /// Every draft is validated before anything is deleted, so a validation
    /// failure leaves stored partners untouched.
    pub async fn replace_partners(
        &self,
        drafts: Vec<PartnerDraft>,
    ) -> Result<Vec<Partner>, CatalogError> {
        let drafts = validate_partners(drafts)?;
        self.store_partners(&drafts).await
    }

    /// Replace the partners collection with the seed list
    pub async fn reset_partners(&self) -> Result<Vec<Partner>, CatalogError> {
        tracing::debug!(count = self.seed.partners().len(), "Resetting partners to seed");
        self.store_partners(self.seed.partners()).await
    }

    async fn store_partners(&self, drafts: &[PartnerDraft]) -> Result<Vec<Partner>, CatalogError> {
        self.partner_repo
            .replace_all(drafts)
            .await
            .map_err(|e| CatalogError::storage(&e))
    }

    // ===== Shop Product Operations =====

    /// All shop products ordered by order_index
    pub async fn list_shop_products(&self) -> Result<Vec<ShopProduct>, CatalogError> {
        self.shop_product_repo
            .list_ordered()
            .await
            .map_err(|e| CatalogError::storage(&e))
    }

    /// Replace the whole shop products collection after validating every draft
    pub async fn replace_shop_products(
        &self,
        drafts: Vec<ShopProductDraft>,
    ) -> Result<Vec<ShopProduct>, CatalogError> {
        let drafts = validate_shop_products(drafts)?;
        self.store_shop_products(&drafts).await
    }

    /// Replace the shop products collection with the seed list
    pub async fn reset_shop_products(&self) -> Result<Vec<ShopProduct>, CatalogError> {
        tracing::debug!(
            count = self.seed.shop_products().len(),
            "Resetting shop products to seed"
        );
        self.store_shop_products(self.seed.shop_products()).await
    }

    async fn store_shop_products(
        &self,
        drafts: &[ShopProductDraft],
    ) -> Result<Vec<ShopProduct>, CatalogError> {
        self.shop_product_repo
            .replace_all(drafts)
            .await
            .map_err(|e| CatalogError::storage(&e))
    }
}
