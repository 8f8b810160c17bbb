use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};
use utoipa::IntoParams;
use validator::Validate;

use super::{delete_or_404, fetch_page, find_or_404, search_term, Page, PageRequest};
use crate::db::DbPool;
use crate::entities::genre::{self, Column, Entity as Genre};
use crate::errors::ServiceError;
use crate::forms::GenreInput;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GenreFilter {
    /// Matches name
    pub search: Option<String>,
}

#[derive(Debug, Clone)]
pub struct GenreAdminService {
    db: Arc<DbPool>,
}

impl GenreAdminService {
    pub fn new(db: Arc<DbPool>) -> Self {
        Self { db }
    }

    #[instrument(skip(self))]
    pub async fn list(
        &self,
        filter: &GenreFilter,
        page: PageRequest,
    ) -> Result<Page<genre::Model>, ServiceError> {
        let mut query = Genre::find().order_by_asc(Column::Id);
        if let Some(term) = search_term(&filter.search) {
            query = query.filter(Column::Name.contains(term));
        }
        fetch_page(&self.db, query, page).await
    }

    pub async fn get(&self, id: i32) -> Result<genre::Model, ServiceError> {
        find_or_404::<Genre, _>(&*self.db, id, "Genre").await
    }

    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create(&self, input: GenreInput) -> Result<genre::Model, ServiceError> {
        input.validate()?;
        let saved = genre::ActiveModel {
            name: Set(input.name),
            description: Set(input.description),
            url: Set(input.url),
            ..Default::default()
        }
        .insert(&*self.db)
        .await?;

        info!(genre_id = saved.id, "genre created");
        Ok(saved)
    }

    #[instrument(skip(self, input))]
    pub async fn update(&self, id: i32, input: GenreInput) -> Result<genre::Model, ServiceError> {
        input.validate()?;
        let mut active: genre::ActiveModel = self.get(id).await?.into();
        active.name = Set(input.name);
        active.description = Set(input.description);
        active.url = Set(input.url);
        Ok(active.update(&*self.db).await?)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        delete_or_404::<Genre>(&self.db, id, "Genre").await?;
        info!(genre_id = id, "genre deleted");
        Ok(())
    }
}
