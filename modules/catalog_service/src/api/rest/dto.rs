//! REST DTOs with serde derives for HTTP API
//!
//! Record field names follow the wire format existing clients were built
//! against: `_id`, snake_case entity fields, camelCase timestamps.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

// ===== Partner DTOs =====

/// Stored partner
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PartnerDto {
    /// Identifier assigned on insert
    #[serde(rename = "_id")]
    pub id: Uuid,

    #[schema(example = "Microsoft")]
    pub name: String,

    #[schema(example = "/imgs/logo-mf/microsoft.png")]
    pub logo_src: String,

    #[schema(example = "https://microsoft.com")]
    pub website_url: String,

    #[schema(example = "Microsoft Logo")]
    pub alt_text: String,

    /// Ascending display order
    pub order_index: i64,

    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,

    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// Partner as submitted for bulk-replace.
///
/// Missing text fields fail validation; unknown fields such as `_id` are
/// ignored.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct PartnerInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub logo_src: Option<String>,
    #[serde(default)]
    pub website_url: Option<String>,
    #[serde(default)]
    pub alt_text: Option<String>,
    /// Defaults to 0
    #[serde(default)]
    pub order_index: Option<i64>,
}

/// Bulk-replace request for partners
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ReplacePartnersRequest {
    pub partners: Vec<PartnerInput>,
}

/// Partners collection envelope
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PartnersResponse {
    pub success: bool,
    pub partners: Vec<PartnerDto>,
}

// ===== Shop Product DTOs =====

/// Stored shop product
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ShopProductDto {
    /// Identifier assigned on insert
    #[serde(rename = "_id")]
    pub id: Uuid,

    #[schema(example = "MacBook Pro M2")]
    pub title: String,

    pub description: String,

    #[schema(example = "/imgs/laptop/macbook-pro.png")]
    pub logo_src: String,

    pub logo_alt: String,

    /// Ascending display order
    pub order_index: i64,

    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,

    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// Shop product as submitted for bulk-replace
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ShopProductInput {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub logo_src: Option<String>,
    #[serde(default)]
    pub logo_alt: Option<String>,
    /// Defaults to 0
    #[serde(default)]
    pub order_index: Option<i64>,
}

/// Bulk-replace request for shop products
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ReplaceShopProductsRequest {
    pub products: Vec<ShopProductInput>,
}

/// Shop products collection envelope
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ShopProductsResponse {
    pub success: bool,
    pub products: Vec<ShopProductDto>,
}

// ===== Health =====

/// Liveness probe body
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub ok: bool,
}

// Note: Conversion implementations live in mapper.rs
