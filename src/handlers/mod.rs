pub mod admin;
pub mod common;
pub mod health;
pub mod pages;

use std::sync::Arc;

use crate::db::DbPool;
use crate::repositories::CatalogRepository;
use crate::services::admin::{
    AuthorAdminService, CategoryAdminService, CollectionAdminService, GenreAdminService,
    OverallRatingAdminService, ProductAdminService, RatingAdminService, ReviewAdminService,
};
use crate::services::{CatalogService, ReviewService};

// Re-export AppState so handler modules can import it as crate::handlers::AppState
pub use crate::AppState;

/// Services layer that encapsulates business logic used by HTTP handlers
#[derive(Clone, Debug)]
pub struct AppServices {
    pub catalog: Arc<CatalogService>,
    pub reviews: Arc<ReviewService>,
    pub categories: Arc<CategoryAdminService>,
    pub authors: Arc<AuthorAdminService>,
    pub genres: Arc<GenreAdminService>,
    pub products: Arc<ProductAdminService>,
    pub collections: Arc<CollectionAdminService>,
    pub overall_ratings: Arc<OverallRatingAdminService>,
    pub ratings: Arc<RatingAdminService>,
    pub admin_reviews: Arc<ReviewAdminService>,
}

impl AppServices {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self {
            catalog: Arc::new(CatalogService::new(CatalogRepository::new(db_pool.clone()))),
            reviews: Arc::new(ReviewService::new(db_pool.clone())),
            categories: Arc::new(CategoryAdminService::new(db_pool.clone())),
            authors: Arc::new(AuthorAdminService::new(db_pool.clone())),
            genres: Arc::new(GenreAdminService::new(db_pool.clone())),
            products: Arc::new(ProductAdminService::new(db_pool.clone())),
            collections: Arc::new(CollectionAdminService::new(db_pool.clone())),
            overall_ratings: Arc::new(OverallRatingAdminService::new(db_pool.clone())),
            ratings: Arc::new(RatingAdminService::new(db_pool.clone())),
            admin_reviews: Arc::new(ReviewAdminService::new(db_pool)),
        }
    }
}
