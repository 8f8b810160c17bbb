use axum::{
    extract::{Json, Path, Query, State},
    response::Response,
    routing::get,
    Router,
};

use crate::entities::category;
use crate::errors::ServiceError;
use crate::forms::CategoryInput;
use crate::handlers::common::{
    created_response, no_content_response, success_response, PaginatedResponse, PaginationParams,
};
use crate::handlers::AppState;
use crate::services::admin::CategoryFilter;

pub fn category_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/categories", get(list_categories).post(create_category))
        .route(
            "/admin/categories/:id",
            get(get_category).put(update_category).delete(delete_category),
        )
}

/// List categories
#[utoipa::path(
    get,
    path = "/admin/categories",
    params(PaginationParams, CategoryFilter),
    responses(
        (status = 200, description = "Categories", body = PaginatedResponse<category::Model>),
        (status = 401, description = "Unauthorized", body = crate::errors::ErrorResponse)
    ),
    security(("Bearer" = [])),
    tag = "Categories"
)]
pub async fn list_categories(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
    Query(filter): Query<CategoryFilter>,
) -> Result<Response, ServiceError> {
    let page = pagination.resolve(&state.config);
    let result = state.services.categories.list(&filter, page).await?;
    Ok(success_response(PaginatedResponse::from_page(result, page)))
}

/// Get one category
#[utoipa::path(
    get,
    path = "/admin/categories/{id}",
    params(("id" = i32, Path, description = "Category id")),
    responses(
        (status = 200, description = "Category", body = category::Model),
        (status = 404, description = "Not found", body = crate::errors::ErrorResponse)
    ),
    security(("Bearer" = [])),
    tag = "Categories"
)]
pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, ServiceError> {
    Ok(success_response(state.services.categories.get(id).await?))
}

/// Create a category
#[utoipa::path(
    post,
    path = "/admin/categories",
    request_body = CategoryInput,
    responses(
        (status = 201, description = "Category created", body = category::Model),
        (status = 400, description = "Invalid payload", body = crate::errors::ErrorResponse),
        (status = 409, description = "Slug already used", body = crate::errors::ErrorResponse)
    ),
    security(("Bearer" = [])),
    tag = "Categories"
)]
pub async fn create_category(
    State(state): State<AppState>,
    Json(payload): Json<CategoryInput>,
) -> Result<Response, ServiceError> {
    Ok(created_response(state.services.categories.create(payload).await?))
}

/// Replace a category
#[utoipa::path(
    put,
    path = "/admin/categories/{id}",
    params(("id" = i32, Path, description = "Category id")),
    request_body = CategoryInput,
    responses(
        (status = 200, description = "Category updated", body = category::Model),
        (status = 404, description = "Not found", body = crate::errors::ErrorResponse),
        (status = 409, description = "Slug already used", body = crate::errors::ErrorResponse)
    ),
    security(("Bearer" = [])),
    tag = "Categories"
)]
pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<CategoryInput>,
) -> Result<Response, ServiceError> {
    Ok(success_response(
        state.services.categories.update(id, payload).await?,
    ))
}

/// Delete a category; its products lose the reference
#[utoipa::path(
    delete,
    path = "/admin/categories/{id}",
    params(("id" = i32, Path, description = "Category id")),
    responses(
        (status = 204, description = "Category deleted"),
        (status = 404, description = "Not found", body = crate::errors::ErrorResponse)
    ),
    security(("Bearer" = [])),
    tag = "Categories"
)]
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, ServiceError> {
    state.services.categories.delete(id).await?;
    Ok(no_content_response())
}
