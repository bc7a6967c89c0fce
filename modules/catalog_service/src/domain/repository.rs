//! Repository traits for data access
//!
//! These traits define the interface for data access operations.
//! Implementations are in infra/storage/repositories.rs

use crate::contract::{Partner, PartnerDraft, ShopProduct, ShopProductDraft};
use anyhow::Result;
use async_trait::async_trait;

/// Repository for the partners collection
#[async_trait]
pub trait PartnerRepository: Send + Sync {
    /// All partners, ascending by order_index then submission position
    async fn list_ordered(&self) -> Result<Vec<Partner>>;

    /// Delete every partner, then insert `drafts` with fresh identities.
    ///
    /// Returns the inserted records in submission order. Not atomic: a
    /// failure after the delete leaves the collection empty.
    async fn replace_all(&self, drafts: &[PartnerDraft]) -> Result<Vec<Partner>>;
}

/// Repository for the shop products collection
#[async_trait]
pub trait ShopProductRepository: Send + Sync {
    /// All shop products, ascending by order_index then submission position
    async fn list_ordered(&self) -> Result<Vec<ShopProduct>>;

    /// Delete every shop product, then insert `drafts` with fresh identities
    async fn replace_all(&self, drafts: &[ShopProductDraft]) -> Result<Vec<ShopProduct>>;
}
