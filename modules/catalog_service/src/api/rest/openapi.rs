//! OpenAPI document for the catalog routes

use super::{dto::*, error::ErrorResponse, handlers};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Catalog Service",
        description = "Partners and shop products collections"
    ),
    paths(
        handlers::health,
        handlers::list_partners,
        handlers::replace_partners,
        handlers::reset_partners,
        handlers::list_shop_products,
        handlers::replace_shop_products,
        handlers::reset_shop_products,
    ),
    components(schemas(
        PartnerDto,
        PartnerInput,
        ReplacePartnersRequest,
        PartnersResponse,
        ShopProductDto,
        ShopProductInput,
        ReplaceShopProductsRequest,
        ShopProductsResponse,
        HealthResponse,
        ErrorResponse,
    )),
    tags(
        (name = "partners", description = "Partner logos in display order"),
        (name = "shop-products", description = "Shop product cards in display order"),
        (name = "health", description = "Liveness probe")
    )
)]
pub struct ApiDoc;
