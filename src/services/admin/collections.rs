use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, Set,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};
use utoipa::IntoParams;
use validator::Validate;

use super::{delete_or_404, ensure_exists, fetch_page, find_or_404, search_term, Page, PageRequest};
use crate::db::DbPool;
use crate::entities::collection::{self, Column, Entity as Collection};
use crate::entities::product;
use crate::errors::ServiceError;
use crate::forms::CollectionInput;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CollectionFilter {
    /// Matches title or product title
    pub search: Option<String>,
    pub product_id: Option<i32>,
}

#[derive(Debug, Clone)]
pub struct CollectionAdminService {
    db: Arc<DbPool>,
}

impl CollectionAdminService {
    pub fn new(db: Arc<DbPool>) -> Self {
        Self { db }
    }

    #[instrument(skip(self))]
    pub async fn list(
        &self,
        filter: &CollectionFilter,
        page: PageRequest,
    ) -> Result<Page<collection::Model>, ServiceError> {
        let mut query = Collection::find().order_by_asc(Column::Id);
        if let Some(term) = search_term(&filter.search) {
            query = query.left_join(product::Entity).filter(
                Condition::any()
                    .add(Column::Title.contains(term))
                    .add(product::Column::Title.contains(term)),
            );
        }
        if let Some(product_id) = filter.product_id {
            query = query.filter(Column::ProductId.eq(product_id));
        }
        fetch_page(&self.db, query, page).await
    }

    pub async fn get(&self, id: i32) -> Result<collection::Model, ServiceError> {
        find_or_404::<Collection, _>(&*self.db, id, "Collection").await
    }

    #[instrument(skip(self, input), fields(product_id = input.product_id))]
    pub async fn create(&self, input: CollectionInput) -> Result<collection::Model, ServiceError> {
        input.validate()?;
        ensure_exists::<product::Entity>(&self.db, input.product_id, "Product").await?;

        let saved = collection::ActiveModel {
            title: Set(input.title),
            description: Set(input.description),
            image: Set(input.image),
            product_id: Set(input.product_id),
            ..Default::default()
        }
        .insert(&*self.db)
        .await?;

        info!(collection_id = saved.id, "collection item created");
        Ok(saved)
    }

    #[instrument(skip(self, input))]
    pub async fn update(
        &self,
        id: i32,
        input: CollectionInput,
    ) -> Result<collection::Model, ServiceError> {
        input.validate()?;
        let existing = self.get(id).await?;
        ensure_exists::<product::Entity>(&self.db, input.product_id, "Product").await?;

        let mut active: collection::ActiveModel = existing.into();
        active.title = Set(input.title);
        active.description = Set(input.description);
        active.image = Set(input.image);
        active.product_id = Set(input.product_id);
        Ok(active.update(&*self.db).await?)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        delete_or_404::<Collection>(&self.db, id, "Collection").await
    }
}
