use axum::{
    extract::{Json, Path, Query, State},
    response::Response,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::errors::ServiceError;
use crate::forms::{BulkIdsInput, ProductInput};
use crate::handlers::common::{
    created_response, no_content_response, success_response, PaginatedResponse, PaginationParams,
};
use crate::handlers::AppState;
use crate::services::admin::products::bulk_update_message;
use crate::services::admin::{ProductFilter, ProductView};

/// Result of a bulk publish/unpublish
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BulkUpdateResponse {
    pub updated: u64,
    pub message: String,
}

pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/products", get(list_products).post(create_product))
        .route("/admin/products/publish", post(publish_products))
        .route("/admin/products/unpublish", post(unpublish_products))
        .route(
            "/admin/products/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
}

/// List products, drafts included
#[utoipa::path(
    get,
    path = "/admin/products",
    params(PaginationParams, ProductFilter),
    responses(
        (status = 200, description = "Products", body = PaginatedResponse<ProductView>),
        (status = 401, description = "Unauthorized", body = crate::errors::ErrorResponse)
    ),
    security(("Bearer" = [])),
    tag = "Products"
)]
pub async fn list_products(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
    Query(filter): Query<ProductFilter>,
) -> Result<Response, ServiceError> {
    let page = pagination.resolve(&state.config);
    let result = state.services.products.list(&filter, page).await?;
    Ok(success_response(PaginatedResponse::from_page(result, page)))
}

/// Get one product with its author and genre ids
#[utoipa::path(
    get,
    path = "/admin/products/{id}",
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product", body = ProductView),
        (status = 404, description = "Not found", body = crate::errors::ErrorResponse)
    ),
    security(("Bearer" = [])),
    tag = "Products"
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, ServiceError> {
    Ok(success_response(state.services.products.get(id).await?))
}

/// Create a product
#[utoipa::path(
    post,
    path = "/admin/products",
    request_body = ProductInput,
    responses(
        (status = 201, description = "Product created", body = ProductView),
        (status = 400, description = "Invalid payload", body = crate::errors::ErrorResponse),
        (status = 409, description = "Slug already used", body = crate::errors::ErrorResponse)
    ),
    security(("Bearer" = [])),
    tag = "Products"
)]
pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<ProductInput>,
) -> Result<Response, ServiceError> {
    Ok(created_response(state.services.products.create(payload).await?))
}

/// Replace a product and its author/genre links
#[utoipa::path(
    put,
    path = "/admin/products/{id}",
    params(("id" = i32, Path, description = "Product id")),
    request_body = ProductInput,
    responses(
        (status = 200, description = "Product updated", body = ProductView),
        (status = 404, description = "Not found", body = crate::errors::ErrorResponse),
        (status = 409, description = "Slug already used", body = crate::errors::ErrorResponse)
    ),
    security(("Bearer" = [])),
    tag = "Products"
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<ProductInput>,
) -> Result<Response, ServiceError> {
    Ok(success_response(
        state.services.products.update(id, payload).await?,
    ))
}

/// Delete a product with its collection, ratings and reviews
#[utoipa::path(
    delete,
    path = "/admin/products/{id}",
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 404, description = "Not found", body = crate::errors::ErrorResponse)
    ),
    security(("Bearer" = [])),
    tag = "Products"
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, ServiceError> {
    state.services.products.delete(id).await?;
    Ok(no_content_response())
}

/// Publish the selected products
#[utoipa::path(
    post,
    path = "/admin/products/publish",
    request_body = BulkIdsInput,
    responses(
        (status = 200, description = "Products published", body = BulkUpdateResponse),
        (status = 400, description = "No ids given", body = crate::errors::ErrorResponse)
    ),
    security(("Bearer" = [])),
    tag = "Products"
)]
pub async fn publish_products(
    State(state): State<AppState>,
    Json(payload): Json<BulkIdsInput>,
) -> Result<Response, ServiceError> {
    set_draft(&state, payload, false).await
}

/// Take the selected products off the site
#[utoipa::path(
    post,
    path = "/admin/products/unpublish",
    request_body = BulkIdsInput,
    responses(
        (status = 200, description = "Products unpublished", body = BulkUpdateResponse),
        (status = 400, description = "No ids given", body = crate::errors::ErrorResponse)
    ),
    security(("Bearer" = [])),
    tag = "Products"
)]
pub async fn unpublish_products(
    State(state): State<AppState>,
    Json(payload): Json<BulkIdsInput>,
) -> Result<Response, ServiceError> {
    set_draft(&state, payload, true).await
}

async fn set_draft(
    state: &AppState,
    payload: BulkIdsInput,
    draft: bool,
) -> Result<Response, ServiceError> {
    payload.validate()?;
    let updated = state.services.products.set_draft(&payload.ids, draft).await?;
    Ok(success_response(BulkUpdateResponse {
        updated,
        message: bulk_update_message(updated),
    }))
}
