//! SeaORM repository implementations

use crate::contract::{Partner, PartnerDraft, ShopProduct, ShopProductDraft};
use crate::domain::repository::{PartnerRepository, ShopProductRepository};
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, SubsecRound, Utc};
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use std::sync::Arc;

use super::entity::{partner, shop_product};
use super::mapper;

/// Timestamps are kept at millisecond precision so that values read back
/// from any backend compare equal to the ones returned on insert.
fn storage_now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

/// Rows per INSERT; 9 bound columns per row stays under SQLite's 32766
/// variable limit and Postgres's 65535.
const INSERT_CHUNK_ROWS: usize = 1000;

fn batch_position(index: usize) -> Result<i32> {
    i32::try_from(index).context("batch is too large")
}

// ===== Partner Repository =====

pub struct SeaOrmPartnerRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmPartnerRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PartnerRepository for SeaOrmPartnerRepository {
    async fn list_ordered(&self) -> Result<Vec<Partner>> {
        let results = partner::Entity::find()
            .order_by_asc(partner::Column::OrderIndex)
            .order_by_asc(partner::Column::Position)
            .all(&*self.db)
            .await
            .context("failed to query partners")?;

        Ok(results.into_iter().map(Into::into).collect())
    }

    async fn replace_all(&self, drafts: &[PartnerDraft]) -> Result<Vec<Partner>> {
        let now = storage_now();
        let rows = drafts
            .iter()
            .enumerate()
            .map(|(index, draft)| Ok(mapper::partner_row(draft, batch_position(index)?, now)))
            .collect::<Result<Vec<_>>>()?;

        let deleted = partner::Entity::delete_many()
            .exec(&*self.db)
            .await
            .context("failed to clear partners")?;

        for chunk in rows.chunks(INSERT_CHUNK_ROWS) {
            partner::Entity::insert_many(chunk.iter().map(mapper::partner_active))
                .exec_without_returning(&*self.db)
                .await
                .context("failed to insert partners")?;
        }

        tracing::debug!(
            deleted = deleted.rows_affected,
            inserted = rows.len(),
            "Replaced partners"
        );

        Ok(rows.into_iter().map(Into::into).collect())
    }
}

// ===== Shop Product Repository =====

pub struct SeaOrmShopProductRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmShopProductRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ShopProductRepository for SeaOrmShopProductRepository {
    async fn list_ordered(&self) -> Result<Vec<ShopProduct>> {
        let results = shop_product::Entity::find()
            .order_by_asc(shop_product::Column::OrderIndex)
            .order_by_asc(shop_product::Column::Position)
            .all(&*self.db)
            .await
            .context("failed to query shop products")?;

        Ok(results.into_iter().map(Into::into).collect())
    }

    async fn replace_all(&self, drafts: &[ShopProductDraft]) -> Result<Vec<ShopProduct>> {
        let now = storage_now();
        let rows = drafts
            .iter()
            .enumerate()
            .map(|(index, draft)| {
                Ok(mapper::shop_product_row(draft, batch_position(index)?, now))
            })
            .collect::<Result<Vec<_>>>()?;

        let deleted = shop_product::Entity::delete_many()
            .exec(&*self.db)
            .await
            .context("failed to clear shop products")?;

        for chunk in rows.chunks(INSERT_CHUNK_ROWS) {
            shop_product::Entity::insert_many(chunk.iter().map(mapper::shop_product_active))
                .exec_without_returning(&*self.db)
                .await
                .context("failed to insert shop products")?;
        }

        tracing::debug!(
            deleted = deleted.rows_affected,
            inserted = rows.len(),
            "Replaced shop products"
        );

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
