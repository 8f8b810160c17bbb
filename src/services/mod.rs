pub mod admin;
pub mod catalog;
pub mod reviews;

pub use catalog::{AuthorDetail, CatalogService, ProductDetail, RatingView, ReviewThread};
pub use reviews::ReviewService;
