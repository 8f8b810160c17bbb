use sea_orm::{ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};
use utoipa::IntoParams;

use super::{delete_or_404, fetch_page, find_or_404, search_term, Page, PageRequest};
use crate::db::DbPool;
use crate::entities::product;
use crate::entities::review::{self, Column, Entity as Review};
use crate::errors::ServiceError;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ReviewFilter {
    /// Matches reviewer name or product title
    pub search: Option<String>,
    pub product_id: Option<i32>,
}

/// Reviews are written by visitors; the admin side only reads and deletes
#[derive(Debug, Clone)]
pub struct ReviewAdminService {
    db: Arc<DbPool>,
}

impl ReviewAdminService {
    pub fn new(db: Arc<DbPool>) -> Self {
        Self { db }
    }

    #[instrument(skip(self))]
    pub async fn list(
        &self,
        filter: &ReviewFilter,
        page: PageRequest,
    ) -> Result<Page<review::Model>, ServiceError> {
        let mut query = Review::find().order_by_asc(Column::Id);
        if let Some(term) = search_term(&filter.search) {
            query = query.left_join(product::Entity).filter(
                Condition::any()
                    .add(Column::Name.contains(term))
                    .add(product::Column::Title.contains(term)),
            );
        }
        if let Some(product_id) = filter.product_id {
            query = query.filter(Column::ProductId.eq(product_id));
        }
        fetch_page(&self.db, query, page).await
    }

    pub async fn get(&self, id: i32) -> Result<review::Model, ServiceError> {
        find_or_404::<Review, _>(&*self.db, id, "Review").await
    }

    /// Replies to the deleted review become top-level
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        delete_or_404::<Review>(&self.db, id, "Review").await?;
        info!(review_id = id, "review deleted");
        Ok(())
    }
}
