use serde::Serialize;
use tracing::instrument;

use crate::entities::{author, category, collection, genre, product, review};
use crate::errors::ServiceError;
use crate::repositories::CatalogRepository;

/// A rating with the star value it refers to
#[derive(Debug, Clone, Serialize)]
pub struct RatingView {
    pub id: i32,
    pub ip: String,
    pub star: Option<i32>,
}

/// A root review and its direct replies
#[derive(Debug, Clone, Serialize)]
pub struct ReviewThread {
    #[serde(flatten)]
    pub review: review::Model,
    pub replies: Vec<review::Model>,
}

/// Everything the product page shows
#[derive(Debug, Clone, Serialize)]
pub struct ProductDetail {
    pub product: product::Model,
    pub category: Option<category::Model>,
    pub authors: Vec<author::Model>,
    pub genres: Vec<genre::Model>,
    pub collections: Vec<collection::Model>,
    pub ratings: Vec<RatingView>,
    pub average_rating: Option<f64>,
    pub reviews: Vec<ReviewThread>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AuthorDetail {
    pub author: author::Model,
    pub products: Vec<product::Model>,
}

/// Assembles the public page view models
#[derive(Debug, Clone)]
pub struct CatalogService {
    repo: CatalogRepository,
}

impl CatalogService {
    pub fn new(repo: CatalogRepository) -> Self {
        Self { repo }
    }

    pub fn repository(&self) -> &CatalogRepository {
        &self.repo
    }

    #[instrument(skip(self))]
    pub async fn list_products(&self) -> Result<Vec<product::Model>, ServiceError> {
        self.repo.list_published_products().await
    }

    #[instrument(skip(self))]
    pub async fn product_detail(&self, slug: &str) -> Result<ProductDetail, ServiceError> {
        let product = self.repo.get_product_by_slug(slug).await?;
        self.detail_for(product).await
    }

    /// Loads the related records of an already resolved product
    pub async fn detail_for(&self, product: product::Model) -> Result<ProductDetail, ServiceError> {
        let category = self.repo.category_of(&product).await?;
        let authors = self.repo.authors_of(&product).await?;
        let genres = self.repo.genres_of(&product).await?;
        let collections = self.repo.collections_of(&product).await?;

        let ratings: Vec<RatingView> = self
            .repo
            .ratings_of(&product)
            .await?
            .into_iter()
            .map(|(rating, star)| RatingView {
                id: rating.id,
                ip: rating.ip,
                star: star.map(|s| s.value),
            })
            .collect();
        let average_rating = average(ratings.iter().filter_map(|r| r.star));

        let roots = self.repo.get_top_level_reviews(product.id).await?;
        let root_ids: Vec<i32> = roots.iter().map(|r| r.id).collect();
        let mut replies = self.repo.get_replies(&root_ids).await?;
        let reviews = roots
            .into_iter()
            .map(|review| {
                let (mine, rest): (Vec<_>, Vec<_>) = replies
                    .drain(..)
                    .partition(|reply| reply.parent_id == Some(review.id));
                replies = rest;
                ReviewThread {
                    review,
                    replies: mine,
                }
            })
            .collect();

        Ok(ProductDetail {
            product,
            category,
            authors,
            genres,
            collections,
            ratings,
            average_rating,
            reviews,
        })
    }

    #[instrument(skip(self))]
    pub async fn author_detail(&self, slug: &str) -> Result<AuthorDetail, ServiceError> {
        let author = self.repo.get_author_by_slug(slug).await?;
        let products = self.repo.published_products_of(&author).await?;
        Ok(AuthorDetail { author, products })
    }
}

fn average(values: impl Iterator<Item = i32>) -> Option<f64> {
    let (sum, count) = values.fold((0i64, 0u32), |(sum, count), v| (sum + i64::from(v), count + 1));
    (count > 0).then(|| sum as f64 / f64::from(count))
}
