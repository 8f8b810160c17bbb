use axum::{
    extract::{Json, Path, Query, State},
    response::Response,
    routing::get,
    Router,
};

use crate::entities::{overall_rating, rating};
use crate::errors::ServiceError;
use crate::forms::{OverallRatingInput, RatingInput};
use crate::handlers::common::{
    created_response, no_content_response, success_response, PaginatedResponse, PaginationParams,
};
use crate::handlers::AppState;
use crate::services::admin::RatingFilter;

pub fn rating_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/ratings", get(list_ratings).post(create_rating))
        .route(
            "/admin/ratings/:id",
            get(get_rating).put(update_rating).delete(delete_rating),
        )
}

/// List ratings
#[utoipa::path(
    get,
    path = "/admin/ratings",
    params(PaginationParams, RatingFilter),
    responses(
        (status = 200, description = "Ratings", body = PaginatedResponse<rating::Model>),
        (status = 401, description = "Unauthorized", body = crate::errors::ErrorResponse)
    ),
    security(("Bearer" = [])),
    tag = "Ratings"
)]
pub async fn list_ratings(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
    Query(filter): Query<RatingFilter>,
) -> Result<Response, ServiceError> {
    let page = pagination.resolve(&state.config);
    let result = state.services.ratings.list(&filter, page).await?;
    Ok(success_response(PaginatedResponse::from_page(result, page)))
}

/// Get one rating
#[utoipa::path(
    get,
    path = "/admin/ratings/{id}",
    params(("id" = i32, Path, description = "Rating id")),
    responses(
        (status = 200, description = "Rating", body = rating::Model),
        (status = 404, description = "Not found", body = crate::errors::ErrorResponse)
    ),
    security(("Bearer" = [])),
    tag = "Ratings"
)]
pub async fn get_rating(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, ServiceError> {
    Ok(success_response(state.services.ratings.get(id).await?))
}

/// Create a rating
#[utoipa::path(
    post,
    path = "/admin/ratings",
    request_body = RatingInput,
    responses(
        (status = 201, description = "Rating created", body = rating::Model),
        (status = 400, description = "Invalid payload", body = crate::errors::ErrorResponse)
    ),
    security(("Bearer" = [])),
    tag = "Ratings"
)]
pub async fn create_rating(
    State(state): State<AppState>,
    Json(payload): Json<RatingInput>,
) -> Result<Response, ServiceError> {
    Ok(created_response(state.services.ratings.create(payload).await?))
}

/// Replace a rating
#[utoipa::path(
    put,
    path = "/admin/ratings/{id}",
    params(("id" = i32, Path, description = "Rating id")),
    request_body = RatingInput,
    responses(
        (status = 200, description = "Rating updated", body = rating::Model),
        (status = 404, description = "Not found", body = crate::errors::ErrorResponse)
    ),
    security(("Bearer" = [])),
    tag = "Ratings"
)]
pub async fn update_rating(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<RatingInput>,
) -> Result<Response, ServiceError> {
    Ok(success_response(
        state.services.ratings.update(id, payload).await?,
    ))
}

/// Delete a rating
#[utoipa::path(
    delete,
    path = "/admin/ratings/{id}",
    params(("id" = i32, Path, description = "Rating id")),
    responses(
        (status = 204, description = "Rating deleted"),
        (status = 404, description = "Not found", body = crate::errors::ErrorResponse)
    ),
    security(("Bearer" = [])),
    tag = "Ratings"
)]
pub async fn delete_rating(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, ServiceError> {
    state.services.ratings.delete(id).await?;
    Ok(no_content_response())
}

pub fn overall_rating_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/admin/overall-ratings",
            get(list_overall_ratings).post(create_overall_rating),
        )
        .route(
            "/admin/overall-ratings/:id",
            get(get_overall_rating).put(update_overall_rating).delete(delete_overall_rating),
        )
}

/// List overall ratings
#[utoipa::path(
    get,
    path = "/admin/overall-ratings",
    params(PaginationParams),
    responses(
        (status = 200, description = "Overall ratings", body = PaginatedResponse<overall_rating::Model>),
        (status = 401, description = "Unauthorized", body = crate::errors::ErrorResponse)
    ),
    security(("Bearer" = [])),
    tag = "Overall ratings"
)]
pub async fn list_overall_ratings(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Response, ServiceError> {
    let page = pagination.resolve(&state.config);
    let result = state.services.overall_ratings.list(page).await?;
    Ok(success_response(PaginatedResponse::from_page(result, page)))
}

/// Get one star level
#[utoipa::path(
    get,
    path = "/admin/overall-ratings/{id}",
    params(("id" = i32, Path, description = "Star level id")),
    responses(
        (status = 200, description = "Star level", body = overall_rating::Model),
        (status = 404, description = "Not found", body = crate::errors::ErrorResponse)
    ),
    security(("Bearer" = [])),
    tag = "Overall ratings"
)]
pub async fn get_overall_rating(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, ServiceError> {
    Ok(success_response(state.services.overall_ratings.get(id).await?))
}

/// Create a star level
#[utoipa::path(
    post,
    path = "/admin/overall-ratings",
    request_body = OverallRatingInput,
    responses(
        (status = 201, description = "Star level created", body = overall_rating::Model),
        (status = 400, description = "Invalid payload", body = crate::errors::ErrorResponse)
    ),
    security(("Bearer" = [])),
    tag = "Overall ratings"
)]
pub async fn create_overall_rating(
    State(state): State<AppState>,
    Json(payload): Json<OverallRatingInput>,
) -> Result<Response, ServiceError> {
    Ok(created_response(state.services.overall_ratings.create(payload).await?))
}

/// Replace a star level
#[utoipa::path(
    put,
    path = "/admin/overall-ratings/{id}",
    params(("id" = i32, Path, description = "Star level id")),
    request_body = OverallRatingInput,
    responses(
        (status = 200, description = "Star level updated", body = overall_rating::Model),
        (status = 404, description = "Not found", body = crate::errors::ErrorResponse)
    ),
    security(("Bearer" = [])),
    tag = "Overall ratings"
)]
pub async fn update_overall_rating(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<OverallRatingInput>,
) -> Result<Response, ServiceError> {
    Ok(success_response(
        state.services.overall_ratings.update(id, payload).await?,
    ))
}

/// Delete a star level and the ratings using it
#[utoipa::path(
    delete,
    path = "/admin/overall-ratings/{id}",
    params(("id" = i32, Path, description = "Star level id")),
    responses(
        (status = 204, description = "Star level deleted"),
        (status = 404, description = "Not found", body = crate::errors::ErrorResponse)
    ),
    security(("Bearer" = [])),
    tag = "Overall ratings"
)]
pub async fn delete_overall_rating(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, ServiceError> {
    state.services.overall_ratings.delete(id).await?;
    Ok(no_content_response())
}
