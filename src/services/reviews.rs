use metrics::counter;
use sea_orm::{ActiveModelTrait, Set};
use std::sync::Arc;
use tracing::{info, instrument, warn};
use validator::{Validate, ValidationErrors};

use crate::db::DbPool;
use crate::entities::{product, review};
use crate::errors::ServiceError;
use crate::forms::{field_error, ReviewForm};
use crate::repositories::CatalogRepository;

/// Accepts public review submissions
#[derive(Debug, Clone)]
pub struct ReviewService {
    db: Arc<DbPool>,
    repo: CatalogRepository,
}

impl ReviewService {
    pub fn new(db: Arc<DbPool>) -> Self {
        Self {
            repo: CatalogRepository::new(db.clone()),
            db,
        }
    }

    /// Validates `form` and stores it as a review of `product`.
    ///
    /// A parent, when given, must be an existing top-level review of the
    /// same product. Any failure yields [`ServiceError::FormErrors`] and nothing
    /// is written.
    #[instrument(skip(self, form), fields(product_id = product.id))]
    pub async fn submit(
        &self,
        product: &product::Model,
        form: ReviewForm,
    ) -> Result<review::Model, ServiceError> {
        let form = form.normalized();
        let mut errors = form.validate().err().unwrap_or_else(ValidationErrors::new);

        let parent_id = match form.parent.as_deref() {
            None => None,
            Some(raw) => match raw.parse::<i32>() {
                Ok(id) => match self.repo.find_review(id).await? {
                    Some(parent) if parent.product_id == product.id && parent.parent_id.is_none() => {
                        Some(parent.id)
                    }
                    Some(parent) if parent.product_id == product.id => {
                        // threads are one level deep
                        errors.add("parent", invalid_parent());
                        None
                    }
                    Some(_) => {
                        warn!(parent_id = id, "reply targets a review of another product");
                        errors.add("parent", invalid_parent());
                        None
                    }
                    None => {
                        errors.add("parent", invalid_parent());
                        None
                    }
                },
                Err(_) => {
                    errors.add("parent", invalid_parent());
                    None
                }
            },
        };

        if !errors.errors().is_empty() {
            counter!("artfusion.reviews.rejected", 1);
            return Err(ServiceError::FormErrors(errors));
        }

        let saved = review::ActiveModel {
            email: Set(form.email),
            name: Set(form.name),
            text: Set(form.text),
            parent_id: Set(parent_id),
            product_id: Set(product.id),
            ..Default::default()
        }
        .insert(&*self.db)
        .await?;

        counter!("artfusion.reviews.submitted", 1);
        info!(review_id = saved.id, reply = parent_id.is_some(), "review stored");

        Ok(saved)
    }
}

fn invalid_parent() -> validator::ValidationError {
    field_error(
        "invalid_choice",
        "Select a valid review. That choice is not one of the available choices.",
    )
}
