use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Photographer or painter. Public pages address authors by `name`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "authors")]
#[schema(as = Author)]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub age: i32,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    /// Avatar path relative to the media root
    pub image: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::product_author::Entity")]
    ProductAuthors,
}

impl Related<super::product_author::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductAuthors.def()
    }
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        super::product_author::Relation::Product.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::product_author::Relation::Author.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
