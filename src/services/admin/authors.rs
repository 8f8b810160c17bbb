use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};
use utoipa::IntoParams;
use validator::Validate;

use super::{delete_or_404, fetch_page, find_or_404, search_term, Page, PageRequest};
use crate::db::DbPool;
use crate::entities::author::{self, Column, Entity as Author};
use crate::errors::ServiceError;
use crate::forms::AuthorInput;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AuthorFilter {
    /// Matches name
    pub search: Option<String>,
    pub age: Option<i32>,
}

#[derive(Debug, Clone)]
pub struct AuthorAdminService {
    db: Arc<DbPool>,
}

impl AuthorAdminService {
    pub fn new(db: Arc<DbPool>) -> Self {
        Self { db }
    }

    #[instrument(skip(self))]
    pub async fn list(
        &self,
        filter: &AuthorFilter,
        page: PageRequest,
    ) -> Result<Page<author::Model>, ServiceError> {
        let mut query = Author::find().order_by_asc(Column::Id);
        if let Some(term) = search_term(&filter.search) {
            query = query.filter(Column::Name.contains(term));
        }
        if let Some(age) = filter.age {
            query = query.filter(Column::Age.eq(age));
        }
        fetch_page(&self.db, query, page).await
    }

    pub async fn get(&self, id: i32) -> Result<author::Model, ServiceError> {
        find_or_404::<Author, _>(&*self.db, id, "Author").await
    }

    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create(&self, input: AuthorInput) -> Result<author::Model, ServiceError> {
        input.validate()?;
        let saved = author::ActiveModel {
            name: Set(input.name),
            age: Set(input.age),
            description: Set(input.description),
            image: Set(input.image),
            ..Default::default()
        }
        .insert(&*self.db)
        .await?;

        info!(author_id = saved.id, "author created");
        Ok(saved)
    }

    #[instrument(skip(self, input))]
    pub async fn update(&self, id: i32, input: AuthorInput) -> Result<author::Model, ServiceError> {
        input.validate()?;
        let mut active: author::ActiveModel = self.get(id).await?.into();
        active.name = Set(input.name);
        active.age = Set(input.age);
        active.description = Set(input.description);
        active.image = Set(input.image);
        Ok(active.update(&*self.db).await?)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        delete_or_404::<Author>(&self.db, id, "Author").await?;
        info!(author_id = id, "author deleted");
        Ok(())
    }
}
