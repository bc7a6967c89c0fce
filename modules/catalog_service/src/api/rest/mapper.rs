//! Conversions between REST DTOs and contract models

use super::dto::*;
use crate::contract::{Partner, PartnerDraft, ShopProduct, ShopProductDraft};

// ===== Partner conversions =====

impl From<Partner> for PartnerDto {
    fn from(partner: Partner) -> Self {
        Self {
            id: partner.id,
            name: partner.name,
            logo_src: partner.logo_src,
            website_url: partner.website_url,
            alt_text: partner.alt_text,
            order_index: partner.order_index,
            created_at: partner.created_at,
            updated_at: partner.updated_at,
        }
    }
}

/// Absent text fields become empty and are rejected by domain validation
impl From<PartnerInput> for PartnerDraft {
    fn from(input: PartnerInput) -> Self {
        Self {
            name: input.name.unwrap_or_default(),
            logo_src: input.logo_src.unwrap_or_default(),
            website_url: input.website_url.unwrap_or_default(),
            alt_text: input.alt_text.unwrap_or_default(),
            order_index: input.order_index.unwrap_or_default(),
        }
    }
}

impl PartnersResponse {
    pub fn ok(partners: Vec<Partner>) -> Self {
        Self {
            success: true,
            partners: partners.into_iter().map(Into::into).collect(),
        }
    }
}

// ===== Shop product conversions =====

impl From<ShopProduct> for ShopProductDto {
    fn from(product: ShopProduct) -> Self {
        Self {
            id: product.id,
            title: product.title,
            description: product.description,
            logo_src: product.logo_src,
            logo_alt: product.logo_alt,
            order_index: product.order_index,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

impl From<ShopProductInput> for ShopProductDraft {
    fn from(input: ShopProductInput) -> Self {
        Self {
            title: input.title.unwrap_or_default(),
            description: input.description.unwrap_or_default(),
            logo_src: input.logo_src.unwrap_or_default(),
            logo_alt: input.logo_alt.unwrap_or_default(),
            order_index: input.order_index.unwrap_or_default(),
        }
    }
}

impl ShopProductsResponse {
    pub fn ok(products: Vec<ShopProduct>) -> Self {
        Self {
            success: true,
            products: products.into_iter().map(Into::into).collect(),
        }
    }
}
