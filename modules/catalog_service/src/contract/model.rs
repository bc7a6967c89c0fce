//! Contract models for catalog service
//!
//! Stored records carry an identity and timestamps assigned by storage;
//! drafts are what callers submit for bulk-replace and what seed files hold.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Partner shown in the partners strip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partner {
    /// Identity assigned on insert
    pub id: Uuid,
    pub name: String,
    /// Logo path or URL
    pub logo_src: String,
    pub website_url: String,
    pub alt_text: String,
    /// Ascending display order, not unique
    pub order_index: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partner fields as submitted, before storage assigns identity
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PartnerDraft {
    pub name: String,
    pub logo_src: String,
    pub website_url: String,
    pub alt_text: String,
    pub order_index: i64,
}

/// Product card shown in the shop section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopProduct {
    /// Identity assigned on insert
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub logo_src: String,
    pub logo_alt: String,
    /// Ascending display order, not unique
    pub order_index: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Shop product fields as submitted
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ShopProductDraft {
    pub title: String,
    pub description: String,
    pub logo_src: String,
    pub logo_alt: String,
    pub order_index: i64,
}

impl PartnerDraft {
    /// Drop identity and timestamps, keeping the submitted fields
    pub fn from_record(partner: &Partner) -> Self {
        Self {
            name: partner.name.clone(),
            logo_src: partner.logo_src.clone(),
            website_url: partner.website_url.clone(),
            alt_text: partner.alt_text.clone(),
            order_index: partner.order_index,
        }
    }
}

impl ShopProductDraft {
    /// Drop identity and timestamps, keeping the submitted fields
    pub fn from_record(product: &ShopProduct) -> Self {
        Self {
            title: product.title.clone(),
            description: product.description.clone(),
            logo_src: product.logo_src.clone(),
            logo_alt: product.logo_alt.clone(),
            order_index: product.order_index,
        }
    }
}
