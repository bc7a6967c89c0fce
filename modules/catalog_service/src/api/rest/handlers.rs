//! HTTP request handlers - thin layer that delegates to domain service

use super::{
    dto::*,
    error::{map_domain_error, ApiError, ErrorResponse},
};
use crate::contract::CatalogError;
use crate::domain::Service;
use axum::{extract::rejection::JsonRejection, Json};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;

/// Shared by every catalog route
pub struct RestState {
    pub service: Arc<Service>,
    pub expose_error_details: bool,
}

// ===== Health =====

/// Liveness probe; does not touch the database
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Process is up", body = HealthResponse))
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { ok: true })
}

// ===== Partner Handlers =====

/// List partners ordered by order_index
#[utoipa::path(
    get,
    path = "/api/partners",
    tag = "partners",
    responses(
        (status = 200, description = "Partners in display order", body = PartnersResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn list_partners(state: Arc<RestState>) -> Result<Json<PartnersResponse>, ApiError> {
    let started = Instant::now();
    let result = state.service.list_partners().await;
    let partners = finish(&state, "GET /api/partners", "Failed to fetch partners", started, result)?;

    Ok(Json(PartnersResponse::ok(partners)))
}

/// Replace all partners with the submitted list
#[utoipa::path(
    put,
    path = "/api/partners",
    tag = "partners",
    request_body = ReplacePartnersRequest,
    responses(
        (status = 200, description = "Inserted partners in submission order", body = PartnersResponse),
        (status = 400, description = "Body is not `{ partners: [...] }` or a record is invalid", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn replace_partners(
    state: Arc<RestState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<PartnersResponse>, ApiError> {
    let started = Instant::now();
    let result = match collection_items::<PartnerInput>(body, "partners", "Partners must be an array") {
        Ok(inputs) => {
            state
                .service
                .replace_partners(inputs.into_iter().map(Into::into).collect())
                .await
        }
        Err(error) => Err(error),
    };
    let partners = finish(&state, "PUT /api/partners", "Failed to update partners", started, result)?;

    Ok(Json(PartnersResponse::ok(partners)))
}

/// Replace all partners with the seed list
#[utoipa::path(
    post,
    path = "/api/partners/reset",
    tag = "partners",
    responses(
        (status = 200, description = "Seed partners as inserted", body = PartnersResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn reset_partners(state: Arc<RestState>) -> Result<Json<PartnersResponse>, ApiError> {
    let started = Instant::now();
    let result = state.service.reset_partners().await;
    let partners = finish(
        &state,
        "POST /api/partners/reset",
        "Failed to reset partners",
        started,
        result,
    )?;

    Ok(Json(PartnersResponse::ok(partners)))
}

// ===== Shop Product Handlers =====

/// List shop products ordered by order_index
#[utoipa::path(
    get,
    path = "/api/shop-products",
    tag = "shop-products",
    responses(
        (status = 200, description = "Shop products in display order", body = ShopProductsResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn list_shop_products(
    state: Arc<RestState>,
) -> Result<Json<ShopProductsResponse>, ApiError> {
    let started = Instant::now();
    let result = state.service.list_shop_products().await;
    let products = finish(
        &state,
        "GET /api/shop-products",
        "Failed to fetch shop products",
        started,
        result,
    )?;

    Ok(Json(ShopProductsResponse::ok(products)))
}

/// Replace all shop products with the submitted list
#[utoipa::path(
    put,
    path = "/api/shop-products",
    tag = "shop-products",
    request_body = ReplaceShopProductsRequest,
    responses(
        (status = 200, description = "Inserted shop products in submission order", body = ShopProductsResponse),
        (status = 400, description = "Body is not `{ products: [...] }` or a record is invalid", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn replace_shop_products(
    state: Arc<RestState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ShopProductsResponse>, ApiError> {
    let started = Instant::now();
    let result =
        match collection_items::<ShopProductInput>(body, "products", "Products must be an array") {
            Ok(inputs) => {
                state
                    .service
                    .replace_shop_products(inputs.into_iter().map(Into::into).collect())
                    .await
            }
            Err(error) => Err(error),
        };
    let products = finish(
        &state,
        "PUT /api/shop-products",
        "Failed to update shop products",
        started,
        result,
    )?;

    Ok(Json(ShopProductsResponse::ok(products)))
}

/// Replace all shop products with the seed list
#[utoipa::path(
    post,
    path = "/api/shop-products/reset",
    tag = "shop-products",
    responses(
        (status = 200, description = "Seed shop products as inserted", body = ShopProductsResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn reset_shop_products(
    state: Arc<RestState>,
) -> Result<Json<ShopProductsResponse>, ApiError> {
    let started = Instant::now();
    let result = state.service.reset_shop_products().await;
    let products = finish(
        &state,
        "POST /api/shop-products/reset",
        "Failed to reset shop products",
        started,
        result,
    )?;

    Ok(Json(ShopProductsResponse::ok(products)))
}

// ===== Helpers =====

/// Pull the array stored under `key` out of a JSON object body and decode
/// each element.
///
/// An unparsable body reports the extractor's message; any other body that
/// is not an object with an array under `key` reports `not_array`.
fn collection_items<T: DeserializeOwned>(
    body: Result<Json<Value>, JsonRejection>,
    key: &str,
    not_array: &str,
) -> Result<Vec<T>, CatalogError> {
    let Json(body) = body.map_err(|rejection| CatalogError::validation(rejection.body_text()))?;
    let Value::Object(mut fields) = body else {
        return Err(CatalogError::validation(not_array));
    };
    let Some(Value::Array(items)) = fields.remove(key) else {
        return Err(CatalogError::validation(not_array));
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value(item).map_err(|e| {
                CatalogError::validation(format!("{key}[{index}] is invalid: {e}"))
            })
        })
        .collect()
}

/// Log the outcome with timing and record count, and map failures
fn finish<T>(
    state: &RestState,
    operation: &'static str,
    failure_message: &'static str,
    started: Instant,
    result: Result<Vec<T>, CatalogError>,
) -> Result<Vec<T>, ApiError> {
    let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

    match result {
        Ok(items) => {
            tracing::info!(operation, elapsed_ms, items = items.len(), "Request completed");
            Ok(items)
        }
        Err(error) => {
            match &error {
                CatalogError::Validation { .. } => {
                    tracing::warn!(operation, elapsed_ms, items = 0, %error, "Request rejected")
                }
                CatalogError::Storage { .. } => {
                    tracing::error!(operation, elapsed_ms, items = 0, %error, "Request failed")
                }
            }
            Err(map_domain_error(error, failure_message, state.expose_error_details))
        }
    }
}
