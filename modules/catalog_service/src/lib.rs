//! Catalog Service Module
//!
//! Partners and shop products collections exposed over REST. Each collection
//! is listed in display order, replaced wholesale, or reset to a seed list.

// Public exports
pub mod contract;
pub use contract::{
    CatalogError, Partner, PartnerDraft, ShopProduct, ShopProductDraft,
};

pub mod module;
pub use module::CatalogServiceModule;

pub mod config;
pub use config::Config;

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
