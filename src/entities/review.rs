use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, ConnectionTrait};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Longest review text accepted, counted in characters
pub const MAX_TEXT_CHARS: usize = 5000;

/// Visitor review. A review with a `parent_id` is a reply; replies survive
/// the deletion of their parent with the link cleared.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "reviews")]
#[schema(as = Review)]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub email: String,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub text: String,
    pub parent_id: Option<i32>,
    pub product_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::product::Entity",
        from = "Column::ProductId",
        to = "super::product::Column::Id",
        on_delete = "Cascade"
    )]
    Product,
    #[sea_orm(
        belongs_to = "Entity",
        from = "Column::ParentId",
        to = "Column::Id",
        on_delete = "SetNull"
    )]
    Parent,
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Product.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if let ActiveValue::Set(text) | ActiveValue::Unchanged(text) = &self.text {
            if text.chars().count() > MAX_TEXT_CHARS {
                return Err(DbErr::Custom(format!(
                    "Validation error: review text exceeds {MAX_TEXT_CHARS} characters"
                )));
            }
        }
        Ok(self)
    }
}
