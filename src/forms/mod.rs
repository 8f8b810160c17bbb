//! Validated request payloads: the public review form and the admin
//! create/update bodies.

use std::collections::BTreeMap;
use validator::{ValidationError, ValidationErrors};

pub mod admin;
pub mod review;

pub use admin::{
    AuthorInput, BulkIdsInput, CategoryInput, CollectionInput, GenreInput, OverallRatingInput,
    ProductInput, RatingInput,
};
pub use review::ReviewForm;

/// Flattens field errors into `field -> [message]`, falling back to the
/// error code when no message was attached.
pub fn field_errors(errors: &ValidationErrors) -> BTreeMap<String, Vec<String>> {
    let mut out = BTreeMap::new();
    for (field, errs) in errors.field_errors() {
        let messages = errs
            .iter()
            .map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| default_message(&e.code).to_string())
            })
            .collect::<Vec<_>>();
        out.insert(field.to_string(), messages);
    }
    out
}

fn default_message(code: &str) -> &str {
    match code {
        "length" => "Ensure this value has a valid length.",
        "email" => "Enter a valid email address.",
        "range" => "Ensure this value is within the allowed range.",
        "required" => "This field is required.",
        other => other,
    }
}

/// Builds a single-field error with a message, as the validators below do.
pub fn field_error(code: &'static str, message: impl Into<String>) -> ValidationError {
    let message: String = message.into();
    let mut err = ValidationError::new(code);
    err.message = Some(message.into());
    err
}

/// Path segments the public router claims before `/{slug}/`.
pub const RESERVED_SLUGS: [&str; 5] = ["admin", "author", "review", "media", "health"];

/// Slugs are lowercase ASCII letters, digits, `-` and `_`.
pub fn validate_slug(value: &str) -> Result<(), ValidationError> {
    if RESERVED_SLUGS.contains(&value) {
        return Err(field_error("reserved", "This slug is reserved for the site."));
    }
    if !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
    {
        Ok(())
    } else {
        Err(field_error(
            "slug",
            "Enter a valid slug consisting of lowercase letters, numbers, underscores or hyphens.",
        ))
    }
}
