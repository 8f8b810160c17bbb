use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::validate_slug;

/// Create/update body for a category
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CategoryInput {
    #[validate(length(min = 1, max = 150))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[validate(length(max = 150), custom = "validate_slug")]
    pub url: String,
}

/// Create/update body for an author
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct AuthorInput {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[serde(default)]
    #[validate(range(min = 0, max = 32767))]
    pub age: i32,
    #[serde(default)]
    pub description: String,
    /// Path of the avatar relative to the media root
    #[serde(default)]
    #[validate(length(max = 255))]
    pub image: String,
}

/// Create/update body for a genre
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct GenreInput {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    #[validate(length(max = 150), custom = "validate_slug")]
    pub url: Option<String>,
}

/// Create/update body for a product. `author_ids` and `genre_ids` replace
/// the current links.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ProductInput {
    #[validate(length(min = 1, max = 100))]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    #[validate(length(max = 255))]
    pub image: String,
    #[serde(default = "default_year")]
    #[validate(range(min = 0, max = 32767))]
    pub year: i32,
    #[serde(default)]
    #[validate(length(max = 30))]
    pub country: Option<String>,
    /// Defaults to today on create; kept as-is on update when omitted
    #[serde(default)]
    pub date_added: Option<NaiveDate>,
    #[serde(default)]
    pub category_id: Option<i32>,
    #[validate(length(max = 150), custom = "validate_slug")]
    pub url: String,
    #[serde(default)]
    pub draft: bool,
    #[serde(default)]
    pub author_ids: Vec<i32>,
    #[serde(default)]
    pub genre_ids: Vec<i32>,
}

fn default_year() -> i32 {
    crate::entities::product::DEFAULT_YEAR
}

/// Create/update body for a collection image
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CollectionInput {
    #[validate(length(min = 1, max = 100))]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    #[validate(length(max = 255))]
    pub image: String,
    pub product_id: i32,
}

/// Create/update body for a star level
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct OverallRatingInput {
    #[serde(default)]
    #[validate(range(min = 0, max = 32767))]
    pub value: i32,
}

/// Create/update body for a rating
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct RatingInput {
    #[validate(length(min = 1, max = 15))]
    pub ip: String,
    pub star_id: i32,
    pub product_id: i32,
}

/// Body of the bulk publish/unpublish actions
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct BulkIdsInput {
    #[validate(length(min = 1, message = "Select at least one record."))]
    pub ids: Vec<i32>,
}
