use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::entities::{author, category, collection, genre, overall_rating, rating, review};
use crate::handlers::admin;
use crate::handlers::common::PaginationMeta;
use crate::services::admin::ProductView;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "ArtFusion Admin API",
        version = "0.1.0",
        description = r#"
Administration API for the ArtFusion gallery.

Every endpoint expects `Authorization: Bearer <admin token>` when an admin
token is configured. List endpoints accept `page`, `per_page` and `search`
plus resource specific filters.
        "#
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Admin", description = "Admin index"),
        (name = "Categories", description = "Product categories"),
        (name = "Authors", description = "Photographers and painters"),
        (name = "Genres", description = "Genres"),
        (name = "Products", description = "Works, including publish/unpublish actions"),
        (name = "Collections", description = "Extra images of a work"),
        (name = "Overall ratings", description = "Star levels"),
        (name = "Ratings", description = "Visitor ratings"),
        (name = "Reviews", description = "Visitor reviews")
    ),
    paths(
        admin::admin_index,
        admin::categories::list_categories,
        admin::categories::get_category,
        admin::categories::create_category,
        admin::categories::update_category,
        admin::categories::delete_category,
        admin::authors::list_authors,
        admin::authors::get_author,
        admin::authors::create_author,
        admin::authors::update_author,
        admin::authors::delete_author,
        admin::genres::list_genres,
        admin::genres::get_genre,
        admin::genres::create_genre,
        admin::genres::update_genre,
        admin::genres::delete_genre,
        admin::products::list_products,
        admin::products::get_product,
        admin::products::create_product,
        admin::products::update_product,
        admin::products::delete_product,
        admin::products::publish_products,
        admin::products::unpublish_products,
        admin::collections::list_collections,
        admin::collections::get_collection,
        admin::collections::create_collection,
        admin::collections::update_collection,
        admin::collections::delete_collection,
        admin::ratings::list_overall_ratings,
        admin::ratings::get_overall_rating,
        admin::ratings::create_overall_rating,
        admin::ratings::update_overall_rating,
        admin::ratings::delete_overall_rating,
        admin::ratings::list_ratings,
        admin::ratings::get_rating,
        admin::ratings::create_rating,
        admin::ratings::update_rating,
        admin::ratings::delete_rating,
        admin::reviews::list_reviews,
        admin::reviews::get_review,
        admin::reviews::delete_review,
    ),
    components(
        schemas(
            category::Model,
            author::Model,
            genre::Model,
            ProductView,
            collection::Model,
            overall_rating::Model,
            rating::Model,
            review::Model,
            PaginationMeta,
            crate::forms::CategoryInput,
            crate::forms::AuthorInput,
            crate::forms::GenreInput,
            crate::forms::ProductInput,
            crate::forms::CollectionInput,
            crate::forms::OverallRatingInput,
            crate::forms::RatingInput,
            crate::forms::BulkIdsInput,
            admin::AdminIndex,
            admin::products::BulkUpdateResponse,
            crate::errors::ErrorResponse
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "Bearer",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).build()),
            );
        }
    }
}
