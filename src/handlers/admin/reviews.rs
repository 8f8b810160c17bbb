use axum::{
    extract::{Path, Query, State},
    response::Response,
    routing::get,
    Router,
};

use crate::entities::review;
use crate::errors::ServiceError;
use crate::handlers::common::{
    no_content_response, success_response, PaginatedResponse, PaginationParams,
};
use crate::handlers::AppState;
use crate::services::admin::ReviewFilter;

pub fn review_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/reviews", get(list_reviews))
        .route("/admin/reviews/:id", get(get_review).delete(delete_review))
}

/// List reviews
#[utoipa::path(
    get,
    path = "/admin/reviews",
    params(PaginationParams, ReviewFilter),
    responses(
        (status = 200, description = "Reviews", body = PaginatedResponse<review::Model>),
        (status = 401, description = "Unauthorized", body = crate::errors::ErrorResponse)
    ),
    security(("Bearer" = [])),
    tag = "Reviews"
)]
pub async fn list_reviews(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
    Query(filter): Query<ReviewFilter>,
) -> Result<Response, ServiceError> {
    let page = pagination.resolve(&state.config);
    let result = state.services.admin_reviews.list(&filter, page).await?;
    Ok(success_response(PaginatedResponse::from_page(result, page)))
}

#[utoipa::path(
    get,
    path = "/admin/reviews/{id}",
    params(("id" = i32, Path, description = "Review id")),
    responses(
        (status = 200, description = "Review", body = review::Model),
        (status = 404, description = "Not found", body = crate::errors::ErrorResponse)
    ),
    security(("Bearer" = [])),
    tag = "Reviews"
)]
pub async fn get_review(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, ServiceError> {
    Ok(success_response(state.services.admin_reviews.get(id).await?))
}

/// Delete a review; its replies stay as top-level reviews
#[utoipa::path(
    delete,
    path = "/admin/reviews/{id}",
    params(("id" = i32, Path, description = "Review id")),
    responses(
        (status = 204, description = "Review deleted"),
        (status = 404, description = "Not found", body = crate::errors::ErrorResponse)
    ),
    security(("Bearer" = [])),
    tag = "Reviews"
)]
pub async fn delete_review(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, ServiceError> {
    state.services.admin_reviews.delete(id).await?;
    Ok(no_content_response())
}
