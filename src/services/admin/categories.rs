use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, Set,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};
use utoipa::IntoParams;
use validator::Validate;

use super::{delete_or_404, ensure_unique_slug, fetch_page, find_or_404, search_term, Page, PageRequest};
use crate::db::DbPool;
use crate::entities::category::{self, Column, Entity as Category};
use crate::errors::ServiceError;
use crate::forms::CategoryInput;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CategoryFilter {
    /// Matches name or url
    pub search: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CategoryAdminService {
    db: Arc<DbPool>,
}

impl CategoryAdminService {
    pub fn new(db: Arc<DbPool>) -> Self {
        Self { db }
    }

    #[instrument(skip(self))]
    pub async fn list(
        &self,
        filter: &CategoryFilter,
        page: PageRequest,
    ) -> Result<Page<category::Model>, ServiceError> {
        let mut query = Category::find().order_by_asc(Column::Id);
        if let Some(term) = search_term(&filter.search) {
            query = query.filter(
                Condition::any()
                    .add(Column::Name.contains(term))
                    .add(Column::Url.contains(term)),
            );
        }
        fetch_page(&self.db, query, page).await
    }

    pub async fn get(&self, id: i32) -> Result<category::Model, ServiceError> {
        find_or_404::<Category, _>(&*self.db, id, "Category").await
    }

    #[instrument(skip(self, input), fields(url = %input.url))]
    pub async fn create(&self, input: CategoryInput) -> Result<category::Model, ServiceError> {
        input.validate()?;
        ensure_unique_slug::<Category, _>(&self.db, Column::Url, Column::Id, &input.url, None, "Category")
            .await?;

        let saved = category::ActiveModel {
            name: Set(input.name),
            description: Set(input.description),
            url: Set(input.url),
            ..Default::default()
        }
        .insert(&*self.db)
        .await?;

        info!(category_id = saved.id, "category created");
        Ok(saved)
    }

    #[instrument(skip(self, input))]
    pub async fn update(
        &self,
        id: i32,
        input: CategoryInput,
    ) -> Result<category::Model, ServiceError> {
        input.validate()?;
        let existing = self.get(id).await?;
        ensure_unique_slug::<Category, _>(
            &self.db,
            Column::Url,
            Column::Id,
            &input.url,
            Some(id),
            "Category",
        )
        .await?;

        let mut active: category::ActiveModel = existing.into();
        active.name = Set(input.name);
        active.description = Set(input.description);
        active.url = Set(input.url);
        Ok(active.update(&*self.db).await?)
    }

    /// Products of the category keep existing with no category
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        delete_or_404::<Category>(&self.db, id, "Category").await?;
        info!(category_id = id, "category deleted");
        Ok(())
    }
}
