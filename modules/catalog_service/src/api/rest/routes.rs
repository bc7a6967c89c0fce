//! Route registration

use super::{dto::*, error::ApiError, handlers, handlers::RestState, openapi::ApiDoc};
use crate::domain::Service;
use axum::{
    extract::rejection::JsonRejection,
    routing::{get, post},
    Extension, Json, Router,
};
use serde_json::Value;
use std::sync::Arc;
use utoipa::OpenApi;

/// Register all REST routes
pub fn register_routes(router: Router, service: Arc<Service>, expose_error_details: bool) -> Router {
    let state = Arc::new(RestState {
        service,
        expose_error_details,
    });

    router
        .route("/health", get(handlers::health))
        .route("/api/openapi.json", get(openapi_handler))
        // Partner endpoints
        .route(
            "/api/partners",
            get(list_partners_handler).put(replace_partners_handler),
        )
        .route("/api/partners/reset", post(reset_partners_handler))
        // Shop product endpoints
        .route(
            "/api/shop-products",
            get(list_shop_products_handler).put(replace_shop_products_handler),
        )
        .route("/api/shop-products/reset", post(reset_shop_products_handler))
        .layer(Extension(state))
}

async fn openapi_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

// ===== Handler wrappers that extract state from Extension =====

async fn list_partners_handler(
    Extension(state): Extension<Arc<RestState>>,
) -> Result<Json<PartnersResponse>, ApiError> {
    handlers::list_partners(state).await
}

async fn replace_partners_handler(
    Extension(state): Extension<Arc<RestState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<PartnersResponse>, ApiError> {
    handlers::replace_partners(state, body).await
}

async fn reset_partners_handler(
    Extension(state): Extension<Arc<RestState>>,
) -> Result<Json<PartnersResponse>, ApiError> {
    handlers::reset_partners(state).await
}

async fn list_shop_products_handler(
    Extension(state): Extension<Arc<RestState>>,
) -> Result<Json<ShopProductsResponse>, ApiError> {
    handlers::list_shop_products(state).await
}

async fn replace_shop_products_handler(
    Extension(state): Extension<Arc<RestState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ShopProductsResponse>, ApiError> {
    handlers::replace_shop_products(state, body).await
}

async fn reset_shop_products_handler(
    Extension(state): Extension<Arc<RestState>>,
) -> Result<Json<ShopProductsResponse>, ApiError> {
    handlers::reset_shop_products(state).await
}
