//! Common test utilities: in-memory repositories and sample records

#![allow(dead_code)]

use async_trait::async_trait;
use catalog_service::contract::*;
use catalog_service::domain::repository::{PartnerRepository, ShopProductRepository};
use catalog_service::domain::{SeedCatalog, Service};
use chrono::Utc;
use parking_lot::RwLock;
use std::sync::Arc;
use uuid::Uuid;

/// In-memory partners collection with the same replace semantics as storage
#[derive(Default)]
pub struct MockPartnerRepo {
    data: RwLock<Vec<Partner>>,
}

impl MockPartnerRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored records in insertion order
    pub fn snapshot(&self) -> Vec<Partner> {
        self.data.read().clone()
    }
}

#[async_trait]
impl PartnerRepository for MockPartnerRepo {
    async fn list_ordered(&self) -> anyhow::Result<Vec<Partner>> {
        let mut partners = self.data.read().clone();
        partners.sort_by_key(|p| p.order_index);
        Ok(partners)
    }

    async fn replace_all(&self, drafts: &[PartnerDraft]) -> anyhow::Result<Vec<Partner>> {
        let now = Utc::now();
        let inserted: Vec<Partner> = drafts
            .iter()
            .map(|d| Partner {
                id: Uuid::new_v4(),
                name: d.name.clone(),
                logo_src: d.logo_src.clone(),
                website_url: d.website_url.clone(),
                alt_text: d.alt_text.clone(),
                order_index: d.order_index,
                created_at: now,
                updated_at: now,
            })
            .collect();
        *self.data.write() = inserted.clone();
        Ok(inserted)
    }
}

/// In-memory shop products collection
#[derive(Default)]
pub struct MockShopProductRepo {
    data: RwLock<Vec<ShopProduct>>,
}

impl MockShopProductRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> Vec<ShopProduct> {
        self.data.read().clone()
    }
}

#[async_trait]
impl ShopProductRepository for MockShopProductRepo {
    async fn list_ordered(&self) -> anyhow::Result<Vec<ShopProduct>> {
        let mut products = self.data.read().clone();
        products.sort_by_key(|p| p.order_index);
        Ok(products)
    }

    async fn replace_all(&self, drafts: &[ShopProductDraft]) -> anyhow::Result<Vec<ShopProduct>> {
        let now = Utc::now();
        let inserted: Vec<ShopProduct> = drafts
            .iter()
            .map(|d| ShopProduct {
                id: Uuid::new_v4(),
                title: d.title.clone(),
                description: d.description.clone(),
                logo_src: d.logo_src.clone(),
                logo_alt: d.logo_alt.clone(),
                order_index: d.order_index,
                created_at: now,
                updated_at: now,
            })
            .collect();
        *self.data.write() = inserted.clone();
        Ok(inserted)
    }
}

/// Repository whose every call fails as if the database were unreachable
pub struct UnreachableRepo;

#[async_trait]
impl PartnerRepository for UnreachableRepo {
    async fn list_ordered(&self) -> anyhow::Result<Vec<Partner>> {
        Err(anyhow::anyhow!("connection refused").context("failed to query partners"))
    }

    async fn replace_all(&self, _drafts: &[PartnerDraft]) -> anyhow::Result<Vec<Partner>> {
        Err(anyhow::anyhow!("connection refused").context("failed to clear partners"))
    }
}

#[async_trait]
impl ShopProductRepository for UnreachableRepo {
    async fn list_ordered(&self) -> anyhow::Result<Vec<ShopProduct>> {
        Err(anyhow::anyhow!("connection refused").context("failed to query shop products"))
    }

    async fn replace_all(&self, _drafts: &[ShopProductDraft]) -> anyhow::Result<Vec<ShopProduct>> {
        Err(anyhow::anyhow!("connection refused").context("failed to clear shop products"))
    }
}

/// Clears stored partners, then fails the insert like a dropped connection
pub struct InsertFailsPartnerRepo {
    pub inner: MockPartnerRepo,
}

#[async_trait]
impl PartnerRepository for InsertFailsPartnerRepo {
    async fn list_ordered(&self) -> anyhow::Result<Vec<Partner>> {
        self.inner.list_ordered().await
    }

    async fn replace_all(&self, _drafts: &[PartnerDraft]) -> anyhow::Result<Vec<Partner>> {
        self.inner.replace_all(&[]).await?;
        Err(anyhow::anyhow!("connection reset").context("failed to insert partners"))
    }
}

pub struct MockCatalog {
    pub service: Arc<Service>,
    pub partners: Arc<MockPartnerRepo>,
    pub shop_products: Arc<MockShopProductRepo>,
}

pub fn mock_catalog() -> MockCatalog {
    let partners = Arc::new(MockPartnerRepo::new());
    let shop_products = Arc::new(MockShopProductRepo::new());
    let seed = SeedCatalog::builtin().unwrap();
    let service = Arc::new(Service::new(partners.clone(), shop_products.clone(), seed));
    MockCatalog {
        service,
        partners,
        shop_products,
    }
}

pub fn unreachable_service() -> Arc<Service> {
    let repo = Arc::new(UnreachableRepo);
    Arc::new(Service::new(repo.clone(), repo, SeedCatalog::builtin().unwrap()))
}

/// Service whose partner inserts fail after the delete, with `stored` preloaded
pub fn insert_failing_service(stored: &[PartnerDraft]) -> Arc<Service> {
    let partners = MockPartnerRepo::new();
    {
        let now = Utc::now();
        *partners.data.write() = stored
            .iter()
            .map(|d| Partner {
                id: Uuid::new_v4(),
                name: d.name.clone(),
                logo_src: d.logo_src.clone(),
                website_url: d.website_url.clone(),
                alt_text: d.alt_text.clone(),
                order_index: d.order_index,
                created_at: now,
                updated_at: now,
            })
            .collect();
    }
    let repo = Arc::new(InsertFailsPartnerRepo { inner: partners });
    Arc::new(Service::new(
        repo,
        Arc::new(MockShopProductRepo::new()),
        SeedCatalog::builtin().unwrap(),
    ))
}

pub fn partner(name: &str, order_index: i64) -> PartnerDraft {
    PartnerDraft {
        name: name.to_string(),
        logo_src: format!("/imgs/logo-mf/{}.png", name.to_lowercase()),
        website_url: format!("https://{}.example", name.to_lowercase()),
        alt_text: format!("{name} Logo"),
        order_index,
    }
}

pub fn shop_product(title: &str, order_index: i64) -> ShopProductDraft {
    ShopProductDraft {
        title: title.to_string(),
        description: format!("{title} with 16GB RAM"),
        logo_src: format!("/imgs/laptop/{}.png", title.to_lowercase().replace(' ', "-")),
        logo_alt: title.to_string(),
        order_index,
    }
}
