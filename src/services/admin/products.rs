use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait,
    DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;
use tracing::{info, instrument};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::{
    delete_or_404, ensure_exists, ensure_unique_slug, fetch_page, find_or_404, search_term, Page,
    PageRequest,
};
use crate::db::DbPool;
use crate::entities::product::{self, Column, Entity as Product};
use crate::entities::{author, category, genre, product_author, product_genre};
use crate::errors::ServiceError;
use crate::forms::ProductInput;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductFilter {
    /// Matches title or category name
    pub search: Option<String>,
    pub year: Option<i32>,
    pub country: Option<String>,
    pub category_id: Option<i32>,
    pub draft: Option<bool>,
}

/// A product with the ids of its linked authors and genres
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProductView {
    #[serde(flatten)]
    pub product: product::Model,
    pub author_ids: Vec<i32>,
    pub genre_ids: Vec<i32>,
}

#[derive(Debug, Clone)]
pub struct ProductAdminService {
    db: Arc<DbPool>,
}

impl ProductAdminService {
    pub fn new(db: Arc<DbPool>) -> Self {
        Self { db }
    }

    #[instrument(skip(self))]
    pub async fn list(
        &self,
        filter: &ProductFilter,
        page: PageRequest,
    ) -> Result<Page<ProductView>, ServiceError> {
        let mut query = Product::find().order_by_asc(Column::Id);
        if let Some(term) = search_term(&filter.search) {
            query = query.left_join(category::Entity).filter(
                Condition::any()
                    .add(Column::Title.contains(term))
                    .add(category::Column::Name.contains(term)),
            );
        }
        if let Some(year) = filter.year {
            query = query.filter(Column::Year.eq(year));
        }
        if let Some(country) = filter.country.as_deref() {
            query = query.filter(Column::Country.eq(country));
        }
        if let Some(category_id) = filter.category_id {
            query = query.filter(Column::CategoryId.eq(category_id));
        }
        if let Some(draft) = filter.draft {
            query = query.filter(Column::Draft.eq(draft));
        }

        let page = fetch_page(&self.db, query, page).await?;
        let items = self.with_links(page.items).await?;
        Ok(Page {
            items,
            total: page.total,
        })
    }

    pub async fn get(&self, id: i32) -> Result<ProductView, ServiceError> {
        let product = find_or_404::<Product, _>(&*self.db, id, "Product").await?;
        let mut views = self.with_links(vec![product]).await?;
        views
            .pop()
            .ok_or_else(|| ServiceError::InternalError("product view missing".into()))
    }

    #[instrument(skip(self, input), fields(url = %input.url))]
    pub async fn create(&self, input: ProductInput) -> Result<ProductView, ServiceError> {
        input.validate()?;
        ensure_unique_slug::<Product, _>(&self.db, Column::Url, Column::Id, &input.url, None, "Product")
            .await?;
        let (author_ids, genre_ids) = self.check_references(&input).await?;

        let txn = self.db.begin().await?;
        let saved = product::ActiveModel {
            title: Set(input.title),
            description: Set(input.description),
            image: Set(input.image),
            year: Set(input.year),
            country: Set(input.country),
            date_added: Set(input.date_added.unwrap_or_else(|| Utc::now().date_naive())),
            category_id: Set(input.category_id),
            url: Set(input.url),
            draft: Set(input.draft),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
        replace_links(&txn, saved.id, &author_ids, &genre_ids).await?;
        txn.commit().await?;

        info!(product_id = saved.id, "product created");
        Ok(ProductView {
            product: saved,
            author_ids,
            genre_ids,
        })
    }

    #[instrument(skip(self, input))]
    pub async fn update(&self, id: i32, input: ProductInput) -> Result<ProductView, ServiceError> {
        input.validate()?;
        let existing = find_or_404::<Product, _>(&*self.db, id, "Product").await?;
        ensure_unique_slug::<Product, _>(
            &self.db,
            Column::Url,
            Column::Id,
            &input.url,
            Some(id),
            "Product",
        )
        .await?;
        let (author_ids, genre_ids) = self.check_references(&input).await?;

        let txn = self.db.begin().await?;
        let mut active: product::ActiveModel = existing.into();
        active.title = Set(input.title);
        active.description = Set(input.description);
        active.image = Set(input.image);
        active.year = Set(input.year);
        active.country = Set(input.country);
        if let Some(date_added) = input.date_added {
            active.date_added = Set(date_added);
        }
        active.category_id = Set(input.category_id);
        active.url = Set(input.url);
        active.draft = Set(input.draft);
        let saved = active.update(&txn).await?;
        replace_links(&txn, id, &author_ids, &genre_ids).await?;
        txn.commit().await?;

        Ok(ProductView {
            product: saved,
            author_ids,
            genre_ids,
        })
    }

    /// Collections, ratings and reviews of the product go with it
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        delete_or_404::<Product>(&self.db, id, "Product").await?;
        info!(product_id = id, "product deleted");
        Ok(())
    }

    /// Sets `draft` on every listed product; returns the number of rows changed
    #[instrument(skip(self))]
    pub async fn set_draft(&self, ids: &[i32], draft: bool) -> Result<u64, ServiceError> {
        let result = Product::update_many()
            .col_expr(Column::Draft, Expr::value(draft))
            .filter(Column::Id.is_in(ids.iter().copied()))
            .exec(&*self.db)
            .await?;

        info!(updated = result.rows_affected, draft, "bulk draft change");
        Ok(result.rows_affected)
    }

    async fn check_references(
        &self,
        input: &ProductInput,
    ) -> Result<(Vec<i32>, Vec<i32>), ServiceError> {
        if let Some(category_id) = input.category_id {
            ensure_exists::<category::Entity>(&self.db, category_id, "Category").await?;
        }
        let author_ids = dedup(&input.author_ids);
        let genre_ids = dedup(&input.genre_ids);
        ensure_all_exist::<author::Entity, _>(&self.db, author::Column::Id, &author_ids, "Author")
            .await?;
        ensure_all_exist::<genre::Entity, _>(&self.db, genre::Column::Id, &genre_ids, "Genre")
            .await?;
        Ok((author_ids, genre_ids))
    }

    async fn with_links(
        &self,
        products: Vec<product::Model>,
    ) -> Result<Vec<ProductView>, ServiceError> {
        let ids: Vec<i32> = products.iter().map(|p| p.id).collect();

        let mut authors: HashMap<i32, Vec<i32>> = HashMap::new();
        for link in product_author::Entity::find()
            .filter(product_author::Column::ProductId.is_in(ids.clone()))
            .order_by_asc(product_author::Column::AuthorId)
            .all(&*self.db)
            .await?
        {
            authors.entry(link.product_id).or_default().push(link.author_id);
        }

        let mut genres: HashMap<i32, Vec<i32>> = HashMap::new();
        for link in product_genre::Entity::find()
            .filter(product_genre::Column::ProductId.is_in(ids))
            .order_by_asc(product_genre::Column::GenreId)
            .all(&*self.db)
            .await?
        {
            genres.entry(link.product_id).or_default().push(link.genre_id);
        }

        Ok(products
            .into_iter()
            .map(|product| ProductView {
                author_ids: authors.remove(&product.id).unwrap_or_default(),
                genre_ids: genres.remove(&product.id).unwrap_or_default(),
                product,
            })
            .collect())
    }
}

async fn replace_links<C>(
    db: &C,
    product_id: i32,
    author_ids: &[i32],
    genre_ids: &[i32],
) -> Result<(), ServiceError>
where
    C: ConnectionTrait,
{
    product_author::Entity::delete_many()
        .filter(product_author::Column::ProductId.eq(product_id))
        .exec(db)
        .await?;
    if !author_ids.is_empty() {
        product_author::Entity::insert_many(author_ids.iter().map(|&author_id| {
            product_author::ActiveModel {
                product_id: Set(product_id),
                author_id: Set(author_id),
            }
        }))
        .exec_without_returning(db)
        .await?;
    }

    product_genre::Entity::delete_many()
        .filter(product_genre::Column::ProductId.eq(product_id))
        .exec(db)
        .await?;
    if !genre_ids.is_empty() {
        product_genre::Entity::insert_many(genre_ids.iter().map(|&genre_id| {
            product_genre::ActiveModel {
                product_id: Set(product_id),
                genre_id: Set(genre_id),
            }
        }))
        .exec_without_returning(db)
        .await?;
    }

    Ok(())
}

async fn ensure_all_exist<'db, E, Col>(
    db: &'db DatabaseConnection,
    id_column: Col,
    ids: &[i32],
    entity: &str,
) -> Result<(), ServiceError>
where
    E: EntityTrait<Column = Col>,
    E::Model: Sync + 'db,
    Col: ColumnTrait,
{
    if ids.is_empty() {
        return Ok(());
    }
    let found = E::find()
        .filter(id_column.is_in(ids.iter().copied()))
        .count(db)
        .await?;
    if found != ids.len() as u64 {
        return Err(ServiceError::InvalidInput(format!(
            "one or more {entity} IDs do not exist"
        )));
    }
    Ok(())
}

fn dedup(ids: &[i32]) -> Vec<i32> {
    ids.iter().copied().collect::<BTreeSet<_>>().into_iter().collect()
}

/// Admin feedback for a bulk publish/unpublish
pub fn bulk_update_message(updated: u64) -> String {
    if updated == 1 {
        "1 record was updated".to_string()
    } else {
        format!("{updated} records were updated")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bulk_message_pluralises() {
        assert_eq!(bulk_update_message(1), "1 record was updated");
        assert_eq!(bulk_update_message(0), "0 records were updated");
        assert_eq!(bulk_update_message(3), "3 records were updated");
    }

    #[test]
    fn dedup_sorts_and_removes_duplicates() {
        assert_eq!(dedup(&[3, 1, 3, 2]), vec![1, 2, 3]);
    }
}
