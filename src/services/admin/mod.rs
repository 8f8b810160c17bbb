//! CRUD services behind the `/admin` API.

use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, PaginatorTrait,
    PrimaryKeyTrait, QueryFilter, Select,
};

use crate::errors::ServiceError;

pub mod authors;
pub mod categories;
pub mod collections;
pub mod genres;
pub mod products;
pub mod ratings;
pub mod reviews;

pub use authors::{AuthorAdminService, AuthorFilter};
pub use categories::{CategoryAdminService, CategoryFilter};
pub use collections::{CollectionAdminService, CollectionFilter};
pub use genres::{GenreAdminService, GenreFilter};
pub use products::{ProductAdminService, ProductFilter, ProductView};
pub use ratings::{OverallRatingAdminService, RatingAdminService, RatingFilter};
pub use reviews::{ReviewAdminService, ReviewFilter};

/// Resolved 1-based page request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub per_page: u64,
}

/// One page of records plus the total row count
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
}

pub(crate) async fn fetch_page<'db, E>(
    db: &'db DatabaseConnection,
    select: Select<E>,
    page: PageRequest,
) -> Result<Page<E::Model>, ServiceError>
where
    E: EntityTrait,
    E::Model: Sync + 'db,
{
    let paginator = select.paginate(db, page.per_page);
    let total = paginator.num_items().await?;
    let items = paginator.fetch_page(page.page.saturating_sub(1)).await?;
    Ok(Page { items, total })
}

pub(crate) async fn find_or_404<E, C>(db: &C, id: i32, entity: &str) -> Result<E::Model, ServiceError>
where
    E: EntityTrait,
    C: ConnectionTrait,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
{
    E::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found(entity, id))
}

pub(crate) async fn delete_or_404<E>(
    db: &DatabaseConnection,
    id: i32,
    entity: &str,
) -> Result<(), ServiceError>
where
    E: EntityTrait,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
{
    let result = E::delete_by_id(id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(ServiceError::not_found(entity, id));
    }
    Ok(())
}

/// Rejects references to rows that do not exist
pub(crate) async fn ensure_exists<E>(
    db: &DatabaseConnection,
    id: i32,
    entity: &str,
) -> Result<(), ServiceError>
where
    E: EntityTrait,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
{
    match E::find_by_id(id).one(db).await? {
        Some(_) => Ok(()),
        None => Err(ServiceError::InvalidInput(format!(
            "{entity} with ID {id} does not exist"
        ))),
    }
}

/// Fails with `Conflict` when another row already uses `slug` in `column`
pub(crate) async fn ensure_unique_slug<E, Col>(
    db: &DatabaseConnection,
    column: Col,
    id_column: Col,
    slug: &str,
    exclude_id: Option<i32>,
    entity: &str,
) -> Result<(), ServiceError>
where
    E: EntityTrait<Column = Col>,
    Col: ColumnTrait,
{
    let mut query = E::find().filter(column.eq(slug));
    if let Some(id) = exclude_id {
        query = query.filter(id_column.ne(id));
    }
    if query.one(db).await?.is_some() {
        return Err(ServiceError::Conflict(format!(
            "{entity} with url '{slug}' already exists"
        )));
    }
    Ok(())
}

/// Trimmed search term, `None` when blank
pub(crate) fn search_term(search: &Option<String>) -> Option<&str> {
    search.as_deref().map(str::trim).filter(|s| !s.is_empty())
}
