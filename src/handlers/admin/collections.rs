use axum::{
    extract::{Json, Path, Query, State},
    response::Response,
    routing::get,
    Router,
};

use crate::entities::collection;
use crate::errors::ServiceError;
use crate::forms::CollectionInput;
use crate::handlers::common::{
    created_response, no_content_response, success_response, PaginatedResponse, PaginationParams,
};
use crate::handlers::AppState;
use crate::services::admin::CollectionFilter;

pub fn collection_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/collections", get(list_collections).post(create_collection))
        .route(
            "/admin/collections/:id",
            get(get_collection).put(update_collection).delete(delete_collection),
        )
}

/// List collections
#[utoipa::path(
    get,
    path = "/admin/collections",
    params(PaginationParams, CollectionFilter),
    responses(
        (status = 200, description = "Collections", body = PaginatedResponse<collection::Model>),
        (status = 401, description = "Unauthorized", body = crate::errors::ErrorResponse)
    ),
    security(("Bearer" = [])),
    tag = "Collections"
)]
pub async fn list_collections(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
    Query(filter): Query<CollectionFilter>,
) -> Result<Response, ServiceError> {
    let page = pagination.resolve(&state.config);
    let result = state.services.collections.list(&filter, page).await?;
    Ok(success_response(PaginatedResponse::from_page(result, page)))
}

/// Get one collection
#[utoipa::path(
    get,
    path = "/admin/collections/{id}",
    params(("id" = i32, Path, description = "Collection id")),
    responses(
        (status = 200, description = "Collection", body = collection::Model),
        (status = 404, description = "Not found", body = crate::errors::ErrorResponse)
    ),
    security(("Bearer" = [])),
    tag = "Collections"
)]
pub async fn get_collection(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, ServiceError> {
    Ok(success_response(state.services.collections.get(id).await?))
}

/// Create a collection
#[utoipa::path(
    post,
    path = "/admin/collections",
    request_body = CollectionInput,
    responses(
        (status = 201, description = "Collection created", body = collection::Model),
        (status = 400, description = "Invalid payload", body = crate::errors::ErrorResponse)
    ),
    security(("Bearer" = [])),
    tag = "Collections"
)]
pub async fn create_collection(
    State(state): State<AppState>,
    Json(payload): Json<CollectionInput>,
) -> Result<Response, ServiceError> {
    Ok(created_response(state.services.collections.create(payload).await?))
}

/// Replace a collection
#[utoipa::path(
    put,
    path = "/admin/collections/{id}",
    params(("id" = i32, Path, description = "Collection id")),
    request_body = CollectionInput,
    responses(
        (status = 200, description = "Collection updated", body = collection::Model),
        (status = 404, description = "Not found", body = crate::errors::ErrorResponse)
    ),
    security(("Bearer" = [])),
    tag = "Collections"
)]
pub async fn update_collection(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<CollectionInput>,
) -> Result<Response, ServiceError> {
    Ok(success_response(
        state.services.collections.update(id, payload).await?,
    ))
}

/// Delete a collection item
#[utoipa::path(
    delete,
    path = "/admin/collections/{id}",
    params(("id" = i32, Path, description = "Collection id")),
    responses(
        (status = 204, description = "Collection deleted"),
        (status = 404, description = "Not found", body = crate::errors::ErrorResponse)
    ),
    security(("Bearer" = [])),
    tag = "Collections"
)]
pub async fn delete_collection(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, ServiceError> {
    state.services.collections.delete(id).await?;
    Ok(no_content_response())
}
