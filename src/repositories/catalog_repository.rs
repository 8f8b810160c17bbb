use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter, QueryOrder,
};
use std::sync::Arc;
use tracing::warn;

use crate::entities::{
    author, category, collection, genre, overall_rating, product, rating, review,
};
use crate::errors::AppError;
use crate::repositories::{BaseRepository, Repository};

/// Read-side filters backing the public pages
#[derive(Debug, Clone)]
pub struct CatalogRepository {
    base: BaseRepository,
}

impl CatalogRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Every product with `draft = false`, in insertion order
    pub async fn list_published_products(&self) -> Result<Vec<product::Model>, AppError> {
        Ok(product::Entity::find()
            .filter(product::Column::Draft.eq(false))
            .order_by_asc(product::Column::Id)
            .all(self.base.get_db())
            .await?)
    }

    /// Exact match on the unique `url` slug
    pub async fn get_product_by_slug(&self, slug: &str) -> Result<product::Model, AppError> {
        product::Entity::find()
            .filter(product::Column::Url.eq(slug))
            .one(self.base.get_db())
            .await?
            .ok_or_else(|| AppError::not_found("Product", slug))
    }

    pub async fn get_product(&self, id: i32) -> Result<product::Model, AppError> {
        product::Entity::find_by_id(id)
            .one(self.base.get_db())
            .await?
            .ok_or_else(|| AppError::not_found("Product", id))
    }

    /// Root reviews of a product; replies are not included
    pub async fn get_top_level_reviews(
        &self,
        product_id: i32,
    ) -> Result<Vec<review::Model>, AppError> {
        Ok(review::Entity::find()
            .filter(review::Column::ProductId.eq(product_id))
            .filter(review::Column::ParentId.is_null())
            .order_by_asc(review::Column::Id)
            .all(self.base.get_db())
            .await?)
    }

    /// Direct replies to any of `parent_ids`
    pub async fn get_replies(&self, parent_ids: &[i32]) -> Result<Vec<review::Model>, AppError> {
        if parent_ids.is_empty() {
            return Ok(Vec::new());
        }
        Ok(review::Entity::find()
            .filter(review::Column::ParentId.is_in(parent_ids.iter().copied()))
            .order_by_asc(review::Column::Id)
            .all(self.base.get_db())
            .await?)
    }

    pub async fn find_review(&self, id: i32) -> Result<Option<review::Model>, AppError> {
        Ok(review::Entity::find_by_id(id)
            .one(self.base.get_db())
            .await?)
    }

    /// Authors are addressed by name. Names are not unique; the oldest
    /// author wins when several share one.
    pub async fn get_author_by_slug(&self, name: &str) -> Result<author::Model, AppError> {
        let mut matches = author::Entity::find()
            .filter(author::Column::Name.eq(name))
            .order_by_asc(author::Column::Id)
            .all(self.base.get_db())
            .await?;

        if matches.len() > 1 {
            warn!(
                author = name,
                count = matches.len(),
                "author name is ambiguous; using the first match"
            );
        }

        if matches.is_empty() {
            Err(AppError::not_found("Author", name))
        } else {
            Ok(matches.swap_remove(0))
        }
    }

    pub async fn category_of(
        &self,
        product: &product::Model,
    ) -> Result<Option<category::Model>, AppError> {
        Ok(product
            .find_related(category::Entity)
            .one(self.base.get_db())
            .await?)
    }

    pub async fn authors_of(&self, product: &product::Model) -> Result<Vec<author::Model>, AppError> {
        Ok(product
            .find_related(author::Entity)
            .order_by_asc(author::Column::Name)
            .all(self.base.get_db())
            .await?)
    }

    pub async fn genres_of(&self, product: &product::Model) -> Result<Vec<genre::Model>, AppError> {
        Ok(product
            .find_related(genre::Entity)
            .order_by_asc(genre::Column::Name)
            .all(self.base.get_db())
            .await?)
    }

    pub async fn collections_of(
        &self,
        product: &product::Model,
    ) -> Result<Vec<collection::Model>, AppError> {
        Ok(product
            .find_related(collection::Entity)
            .order_by_asc(collection::Column::Id)
            .all(self.base.get_db())
            .await?)
    }

    /// Ratings paired with the star level they point at
    pub async fn ratings_of(
        &self,
        product: &product::Model,
    ) -> Result<Vec<(rating::Model, Option<overall_rating::Model>)>, AppError> {
        Ok(rating::Entity::find()
            .filter(rating::Column::ProductId.eq(product.id))
            .find_also_related(overall_rating::Entity)
            .order_by_asc(rating::Column::Id)
            .all(self.base.get_db())
            .await?)
    }

    /// Non-draft products the author is credited on
    pub async fn published_products_of(
        &self,
        author: &author::Model,
    ) -> Result<Vec<product::Model>, AppError> {
        Ok(author
            .find_related(product::Entity)
            .filter(product::Column::Draft.eq(false))
            .order_by_asc(product::Column::Id)
            .all(self.base.get_db())
            .await?)
    }
}
