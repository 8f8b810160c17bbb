use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};
use utoipa::IntoParams;
use validator::Validate;

use super::{delete_or_404, ensure_exists, fetch_page, find_or_404, Page, PageRequest};
use crate::db::DbPool;
use crate::entities::{overall_rating, product, rating};
use crate::errors::ServiceError;
use crate::forms::{OverallRatingInput, RatingInput};

/// Star levels
#[derive(Debug, Clone)]
pub struct OverallRatingAdminService {
    db: Arc<DbPool>,
}

impl OverallRatingAdminService {
    pub fn new(db: Arc<DbPool>) -> Self {
        Self { db }
    }

    pub async fn list(&self, page: PageRequest) -> Result<Page<overall_rating::Model>, ServiceError> {
        let query = overall_rating::Entity::find().order_by_asc(overall_rating::Column::Value);
        fetch_page(&self.db, query, page).await
    }

    pub async fn get(&self, id: i32) -> Result<overall_rating::Model, ServiceError> {
        find_or_404::<overall_rating::Entity, _>(&*self.db, id, "OverallRating").await
    }

    #[instrument(skip(self))]
    pub async fn create(
        &self,
        input: OverallRatingInput,
    ) -> Result<overall_rating::Model, ServiceError> {
        input.validate()?;
        let saved = overall_rating::ActiveModel {
            value: Set(input.value),
            ..Default::default()
        }
        .insert(&*self.db)
        .await?;
        info!(star_id = saved.id, value = saved.value, "star level created");
        Ok(saved)
    }

    #[instrument(skip(self))]
    pub async fn update(
        &self,
        id: i32,
        input: OverallRatingInput,
    ) -> Result<overall_rating::Model, ServiceError> {
        input.validate()?;
        let mut active: overall_rating::ActiveModel = self.get(id).await?.into();
        active.value = Set(input.value);
        Ok(active.update(&*self.db).await?)
    }

    /// Ratings pointing at the star level are removed too
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        delete_or_404::<overall_rating::Entity>(&self.db, id, "OverallRating").await
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RatingFilter {
    pub star_id: Option<i32>,
    pub product_id: Option<i32>,
}

/// Individual votes
#[derive(Debug, Clone)]
pub struct RatingAdminService {
    db: Arc<DbPool>,
}

impl RatingAdminService {
    pub fn new(db: Arc<DbPool>) -> Self {
        Self { db }
    }

    #[instrument(skip(self))]
    pub async fn list(
        &self,
        filter: &RatingFilter,
        page: PageRequest,
    ) -> Result<Page<rating::Model>, ServiceError> {
        let mut query = rating::Entity::find().order_by_asc(rating::Column::Id);
        if let Some(star_id) = filter.star_id {
            query = query.filter(rating::Column::StarId.eq(star_id));
        }
        if let Some(product_id) = filter.product_id {
            query = query.filter(rating::Column::ProductId.eq(product_id));
        }
        fetch_page(&self.db, query, page).await
    }

    pub async fn get(&self, id: i32) -> Result<rating::Model, ServiceError> {
        find_or_404::<rating::Entity, _>(&*self.db, id, "Rating").await
    }

    #[instrument(skip(self, input))]
    pub async fn create(&self, input: RatingInput) -> Result<rating::Model, ServiceError> {
        input.validate()?;
        self.check_references(&input).await?;
        let saved = rating::ActiveModel {
            ip: Set(input.ip),
            star_id: Set(input.star_id),
            product_id: Set(input.product_id),
            ..Default::default()
        }
        .insert(&*self.db)
        .await?;
        Ok(saved)
    }

    #[instrument(skip(self, input))]
    pub async fn update(&self, id: i32, input: RatingInput) -> Result<rating::Model, ServiceError> {
        input.validate()?;
        let existing = self.get(id).await?;
        self.check_references(&input).await?;
        let mut active: rating::ActiveModel = existing.into();
        active.ip = Set(input.ip);
        active.star_id = Set(input.star_id);
        active.product_id = Set(input.product_id);
        Ok(active.update(&*self.db).await?)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        delete_or_404::<rating::Entity>(&self.db, id, "Rating").await
    }

    async fn check_references(&self, input: &RatingInput) -> Result<(), ServiceError> {
        ensure_exists::<overall_rating::Entity>(&self.db, input.star_id, "OverallRating").await?;
        ensure_exists::<product::Entity>(&self.db, input.product_id, "Product").await
    }
}
