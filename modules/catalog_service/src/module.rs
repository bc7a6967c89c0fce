//! Module declaration and lifecycle

use crate::config::Config;
use crate::domain::{SeedCatalog, Service};
use crate::infra::storage::repositories::{SeaOrmPartnerRepository, SeaOrmShopProductRepository};
use anyhow::Result;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// Catalog service module
///
/// Owns the domain service built on an explicitly passed database handle.
/// The host process opens the connection, runs [`Self::migrate`], calls
/// [`Self::init`] and mounts [`Self::register_rest`] on its router.
pub struct CatalogServiceModule {
    config: Config,
    service: Arc<Service>,
}

impl CatalogServiceModule {
    /// Load the seed catalog and build repositories and the domain service
    pub fn init(config: Config, db: Arc<DatabaseConnection>) -> Result<Self> {
        let seed = match &config.seed_file {
            Some(path) => SeedCatalog::from_path(path)?,
            None => SeedCatalog::builtin()?,
        };

        let partner_repo = Arc::new(SeaOrmPartnerRepository::new(db.clone()));
        let shop_product_repo = Arc::new(SeaOrmShopProductRepository::new(db));

        let service = Arc::new(Service::new(partner_repo, shop_product_repo, seed));

        tracing::info!(
            seed_file = ?config.seed_file,
            expose_error_details = config.expose_error_details,
            "Catalog service initialized"
        );
        Ok(Self { config, service })
    }

    /// Create or upgrade the catalog tables
    pub async fn migrate(db: &DatabaseConnection) -> Result<()> {
        use crate::infra::storage::migrations::Migrator;
        use sea_orm_migration::MigratorTrait;

        Migrator::up(db, None).await?;
        tracing::info!("Catalog service migrations completed");
        Ok(())
    }

    /// Mount the catalog REST routes on `router`
    pub fn register_rest(&self, router: axum::Router) -> axum::Router {
        tracing::info!("Registering catalog service REST routes");
        crate::api::rest::routes::register_routes(
            router,
            self.service.clone(),
            self.config.expose_error_details,
        )
    }

    pub fn service(&self) -> Arc<Service> {
        self.service.clone()
    }
}
