use chrono::{NaiveDate, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, ActiveValue::Set, ConnectionTrait};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Year stored when none is given
pub const DEFAULT_YEAR: i32 = 2020;

/// Artwork. Drafts stay out of the public listings.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "products")]
#[schema(as = Product)]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub title: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,

    /// Main image path relative to the media root
    pub image: String,

    /// Year the work was created
    pub year: i32,

    pub country: Option<String>,

    /// Date the work was put on the site
    pub date_added: NaiveDate,

    /// Cleared when the category is deleted
    pub category_id: Option<i32>,

    /// Unique slug used in public URLs
    #[sea_orm(unique)]
    pub url: String,

    pub draft: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id",
        on_delete = "SetNull"
    )]
    Category,
    #[sea_orm(has_many = "super::collection::Entity")]
    Collections,
    #[sea_orm(has_many = "super::rating::Entity")]
    Ratings,
    #[sea_orm(has_many = "super::review::Entity")]
    Reviews,
    #[sea_orm(has_many = "super::product_author::Entity")]
    ProductAuthors,
    #[sea_orm(has_many = "super::product_genre::Entity")]
    ProductGenres,
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::collection::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Collections.def()
    }
}

impl Related<super::rating::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ratings.def()
    }
}

impl Related<super::review::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reviews.def()
    }
}

impl Related<super::author::Entity> for Entity {
    fn to() -> RelationDef {
        super::product_author::Relation::Author.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::product_author::Relation::Product.def().rev())
    }
}

impl Related<super::genre::Entity> for Entity {
    fn to() -> RelationDef {
        super::product_genre::Relation::Genre.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::product_genre::Relation::Product.def().rev())
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        let mut active_model = self;

        if insert {
            if let ActiveValue::NotSet = active_model.date_added {
                active_model.date_added = Set(Utc::now().date_naive());
            }
            if let ActiveValue::NotSet = active_model.year {
                active_model.year = Set(DEFAULT_YEAR);
            }
            if let ActiveValue::NotSet = active_model.draft {
                active_model.draft = Set(false);
            }
        }

        Ok(active_model)
    }
}
