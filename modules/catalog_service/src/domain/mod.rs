//! Domain layer - business logic and services

pub mod repository;
pub mod seed;
pub mod service;
pub mod validation;

pub use repository::{PartnerRepository, ShopProductRepository};
pub use seed::SeedCatalog;
pub use service::Service;
