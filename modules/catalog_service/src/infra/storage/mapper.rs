//! Entity to model mappers
//!
//! Conversions between SeaORM entities and contract models

use super::entity::{partner, shop_product};
use crate::contract::{Partner, PartnerDraft, ShopProduct, ShopProductDraft};
use chrono::{DateTime, Utc};
use uuid::Uuid;

// ===== Partner Conversions =====

impl From<partner::Model> for Partner {
    fn from(entity: partner::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            logo_src: entity.logo_src,
            website_url: entity.website_url,
            alt_text: entity.alt_text,
            order_index: entity.order_index,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Fresh row for a draft; identity and timestamps are assigned here
pub fn partner_row(draft: &PartnerDraft, position: i32, now: DateTime<Utc>) -> partner::Model {
    partner::Model {
        id: Uuid::new_v4(),
        name: draft.name.clone(),
        logo_src: draft.logo_src.clone(),
        website_url: draft.website_url.clone(),
        alt_text: draft.alt_text.clone(),
        order_index: draft.order_index,
        position,
        created_at: now,
        updated_at: now,
    }
}

pub fn partner_active(model: &partner::Model) -> partner::ActiveModel {
    use sea_orm::ActiveValue::Set;

    partner::ActiveModel {
        id: Set(model.id),
        name: Set(model.name.clone()),
        logo_src: Set(model.logo_src.clone()),
        website_url: Set(model.website_url.clone()),
        alt_text: Set(model.alt_text.clone()),
        order_index: Set(model.order_index),
        position: Set(model.position),
        created_at: Set(model.created_at),
        updated_at: Set(model.updated_at),
    }
}

// ===== Shop Product Conversions =====

impl From<shop_product::Model> for ShopProduct {
    fn from(entity: shop_product::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            logo_src: entity.logo_src,
            logo_alt: entity.logo_alt,
            order_index: entity.order_index,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

pub fn shop_product_row(
    draft: &ShopProductDraft,
    position: i32,
    now: DateTime<Utc>,
) -> shop_product::Model {
    shop_product::Model {
        id: Uuid::new_v4(),
        title: draft.title.clone(),
        description: draft.description.clone(),
        logo_src: draft.logo_src.clone(),
        logo_alt: draft.logo_alt.clone(),
        order_index: draft.order_index,
        position,
        created_at: now,
        updated_at: now,
    }
}

pub fn shop_product_active(model: &shop_product::Model) -> shop_product::ActiveModel {
    use sea_orm::ActiveValue::Set;

    shop_product::ActiveModel {
        id: Set(model.id),
        title: Set(model.title.clone()),
        description: Set(model.description.clone()),
        logo_src: Set(model.logo_src.clone()),
        logo_alt: Set(model.logo_alt.clone()),
        order_index: Set(model.order_index),
        position: Set(model.position),
        created_at: Set(model.created_at),
        updated_at: Set(model.updated_at),
    }
}
