use serde::{Deserialize, Serialize};
use validator::Validate;

/// Public review submission, posted as `application/x-www-form-urlencoded`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ReviewForm {
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "Name is required (at most 100 characters)."))]
    pub name: String,

    #[serde(default)]
    #[validate(
        length(min = 1, max = 254, message = "Email is required."),
        email(message = "Enter a valid email address.")
    )]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 1, max = 5000, message = "Message is required (at most 5000 characters)."))]
    pub text: String,

    /// Id of the review being answered; blank means a top-level review
    #[serde(default)]
    pub parent: Option<String>,
}

impl ReviewForm {
    /// Trims every field and collapses a blank `parent` into `None`.
    pub fn normalized(self) -> Self {
        let parent = self
            .parent
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty());
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            text: self.text.trim().to_string(),
            parent,
        }
    }
}
