use axum::{
    extract::{Json, Path, Query, State},
    response::Response,
    routing::get,
    Router,
};

use crate::entities::author;
use crate::errors::ServiceError;
use crate::forms::AuthorInput;
use crate::handlers::common::{
    created_response, no_content_response, success_response, PaginatedResponse, PaginationParams,
};
use crate::handlers::AppState;
use crate::services::admin::AuthorFilter;

pub fn author_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/authors", get(list_authors).post(create_author))
        .route(
            "/admin/authors/:id",
            get(get_author).put(update_author).delete(delete_author),
        )
}

/// List authors
#[utoipa::path(
    get,
    path = "/admin/authors",
    params(PaginationParams, AuthorFilter),
    responses(
        (status = 200, description = "Authors", body = PaginatedResponse<author::Model>),
        (status = 401, description = "Unauthorized", body = crate::errors::ErrorResponse)
    ),
    security(("Bearer" = [])),
    tag = "Authors"
)]
pub async fn list_authors(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
    Query(filter): Query<AuthorFilter>,
) -> Result<Response, ServiceError> {
    let page = pagination.resolve(&state.config);
    let result = state.services.authors.list(&filter, page).await?;
    Ok(success_response(PaginatedResponse::from_page(result, page)))
}

/// Get one author
#[utoipa::path(
    get,
    path = "/admin/authors/{id}",
    params(("id" = i32, Path, description = "Author id")),
    responses(
        (status = 200, description = "Author", body = author::Model),
        (status = 404, description = "Not found", body = crate::errors::ErrorResponse)
    ),
    security(("Bearer" = [])),
    tag = "Authors"
)]
pub async fn get_author(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, ServiceError> {
    Ok(success_response(state.services.authors.get(id).await?))
}

/// Create a author
#[utoipa::path(
    post,
    path = "/admin/authors",
    request_body = AuthorInput,
    responses(
        (status = 201, description = "Author created", body = author::Model),
        (status = 400, description = "Invalid payload", body = crate::errors::ErrorResponse)
    ),
    security(("Bearer" = [])),
    tag = "Authors"
)]
pub async fn create_author(
    State(state): State<AppState>,
    Json(payload): Json<AuthorInput>,
) -> Result<Response, ServiceError> {
    Ok(created_response(state.services.authors.create(payload).await?))
}

/// Replace a author
#[utoipa::path(
    put,
    path = "/admin/authors/{id}",
    params(("id" = i32, Path, description = "Author id")),
    request_body = AuthorInput,
    responses(
        (status = 200, description = "Author updated", body = author::Model),
        (status = 404, description = "Not found", body = crate::errors::ErrorResponse)
    ),
    security(("Bearer" = [])),
    tag = "Authors"
)]
pub async fn update_author(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<AuthorInput>,
) -> Result<Response, ServiceError> {
    Ok(success_response(
        state.services.authors.update(id, payload).await?,
    ))
}

/// Delete an author; their product links are removed
#[utoipa::path(
    delete,
    path = "/admin/authors/{id}",
    params(("id" = i32, Path, description = "Author id")),
    responses(
        (status = 204, description = "Author deleted"),
        (status = 404, description = "Not found", body = crate::errors::ErrorResponse)
    ),
    security(("Bearer" = [])),
    tag = "Authors"
)]
pub async fn delete_author(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, ServiceError> {
    state.services.authors.delete(id).await?;
    Ok(no_content_response())
}
