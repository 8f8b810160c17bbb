use axum::{
    extract::{Json, Path, Query, State},
    response::Response,
    routing::get,
    Router,
};

use crate::entities::genre;
use crate::errors::ServiceError;
use crate::forms::GenreInput;
use crate::handlers::common::{
    created_response, no_content_response, success_response, PaginatedResponse, PaginationParams,
};
use crate::handlers::AppState;
use crate::services::admin::GenreFilter;

pub fn genre_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/genres", get(list_genres).post(create_genre))
        .route(
            "/admin/genres/:id",
            get(get_genre).put(update_genre).delete(delete_genre),
        )
}

/// List genres
#[utoipa::path(
    get,
    path = "/admin/genres",
    params(PaginationParams, GenreFilter),
    responses(
        (status = 200, description = "Genres", body = PaginatedResponse<genre::Model>),
        (status = 401, description = "Unauthorized", body = crate::errors::ErrorResponse)
    ),
    security(("Bearer" = [])),
    tag = "Genres"
)]
pub async fn list_genres(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
    Query(filter): Query<GenreFilter>,
) -> Result<Response, ServiceError> {
    let page = pagination.resolve(&state.config);
    let result = state.services.genres.list(&filter, page).await?;
    Ok(success_response(PaginatedResponse::from_page(result, page)))
}

/// Get one genre
#[utoipa::path(
    get,
    path = "/admin/genres/{id}",
    params(("id" = i32, Path, description = "Genre id")),
    responses(
        (status = 200, description = "Genre", body = genre::Model),
        (status = 404, description = "Not found", body = crate::errors::ErrorResponse)
    ),
    security(("Bearer" = [])),
    tag = "Genres"
)]
pub async fn get_genre(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, ServiceError> {
    Ok(success_response(state.services.genres.get(id).await?))
}

/// Create a genre
#[utoipa::path(
    post,
    path = "/admin/genres",
    request_body = GenreInput,
    responses(
        (status = 201, description = "Genre created", body = genre::Model),
        (status = 400, description = "Invalid payload", body = crate::errors::ErrorResponse)
    ),
    security(("Bearer" = [])),
    tag = "Genres"
)]
pub async fn create_genre(
    State(state): State<AppState>,
    Json(payload): Json<GenreInput>,
) -> Result<Response, ServiceError> {
    Ok(created_response(state.services.genres.create(payload).await?))
}

/// Replace a genre
#[utoipa::path(
    put,
    path = "/admin/genres/{id}",
    params(("id" = i32, Path, description = "Genre id")),
    request_body = GenreInput,
    responses(
        (status = 200, description = "Genre updated", body = genre::Model),
        (status = 404, description = "Not found", body = crate::errors::ErrorResponse)
    ),
    security(("Bearer" = [])),
    tag = "Genres"
)]
pub async fn update_genre(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<GenreInput>,
) -> Result<Response, ServiceError> {
    Ok(success_response(
        state.services.genres.update(id, payload).await?,
    ))
}

/// Delete a genre
#[utoipa::path(
    delete,
    path = "/admin/genres/{id}",
    params(("id" = i32, Path, description = "Genre id")),
    responses(
        (status = 204, description = "Genre deleted"),
        (status = 404, description = "Not found", body = crate::errors::ErrorResponse)
    ),
    security(("Bearer" = [])),
    tag = "Genres"
)]
pub async fn delete_genre(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, ServiceError> {
    state.services.genres.delete(id).await?;
    Ok(no_content_response())
}
