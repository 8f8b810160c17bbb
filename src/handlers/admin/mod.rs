//! JSON administration API mounted under `/admin`.

use axum::{extract::State, middleware, response::Response, routing::get, Json, Router};
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

use crate::handlers::common::success_response;
use crate::handlers::AppState;
use crate::middleware_helpers::admin_auth::{admin_auth_middleware, AdminToken};

pub mod authors;
pub mod categories;
pub mod collections;
pub mod genres;
pub mod products;
pub mod ratings;
pub mod reviews;

/// Resources exposed by the admin API, in menu order
pub const RESOURCES: [&str; 8] = [
    "categories",
    "authors",
    "genres",
    "products",
    "collections",
    "overall-ratings",
    "ratings",
    "reviews",
];

/// Admin landing payload
#[derive(Debug, Serialize, ToSchema)]
pub struct AdminIndex {
    pub site_title: String,
    pub site_header: String,
    pub resources: Vec<String>,
}

/// Every admin route, behind the bearer-token guard
pub fn admin_routes(token: AdminToken) -> Router<AppState> {
    Router::new()
        .route("/admin", get(admin_index))
        .route("/admin/", get(admin_index))
        .route("/admin/openapi.json", get(openapi_json))
        .merge(categories::category_routes())
        .merge(authors::author_routes())
        .merge(genres::genre_routes())
        .merge(products::product_routes())
        .merge(collections::collection_routes())
        .merge(ratings::overall_rating_routes())
        .merge(ratings::rating_routes())
        .merge(reviews::review_routes())
        .route_layer(middleware::from_fn_with_state(token, admin_auth_middleware))
}

/// Site labels and the list of managed resources
#[utoipa::path(
    get,
    path = "/admin/",
    responses(
        (status = 200, description = "Admin index", body = AdminIndex),
        (status = 401, description = "Unauthorized", body = crate::errors::ErrorResponse)
    ),
    security(("Bearer" = [])),
    tag = "Admin"
)]
pub async fn admin_index(State(state): State<AppState>) -> Response {
    let site = state.templates.site();
    success_response(AdminIndex {
        site_title: site.title.clone(),
        site_header: site.header.clone(),
        resources: RESOURCES.iter().map(|r| r.to_string()).collect(),
    })
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(crate::openapi::ApiDoc::openapi())
}
