//! HTML rendering for the public pages.

use axum::response::Html;
use serde::Serialize;
use std::sync::Arc;
use tera::{Context, Tera};

use crate::config::SiteConfig;
use crate::errors::ServiceError;

pub const PRODUCT_LIST: &str = "products/products.html";
pub const PRODUCT_DETAIL: &str = "products/product_detail.html";
pub const AUTHOR_DETAIL: &str = "products/author.html";
pub const ERROR_PAGE: &str = "error.html";

const SOURCES: [(&str, &str); 5] = [
    ("base.html", include_str!("../templates/base.html")),
    (PRODUCT_LIST, include_str!("../templates/products/products.html")),
    (
        PRODUCT_DETAIL,
        include_str!("../templates/products/product_detail.html"),
    ),
    (AUTHOR_DETAIL, include_str!("../templates/products/author.html")),
    (ERROR_PAGE, include_str!("../templates/error.html")),
];

/// Compiled templates plus the site settings every page receives
#[derive(Clone)]
pub struct Templates {
    tera: Arc<Tera>,
    site: SiteConfig,
    media_url: String,
}

impl std::fmt::Debug for Templates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Templates")
            .field("site", &self.site)
            .field("media_url", &self.media_url)
            .finish_non_exhaustive()
    }
}

impl Templates {
    pub fn new(site: SiteConfig, media_url: impl Into<String>) -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_templates(SOURCES.to_vec())?;
        Ok(Self {
            tera: Arc::new(tera),
            site,
            media_url: media_url.into(),
        })
    }

    pub fn site(&self) -> &SiteConfig {
        &self.site
    }

    /// Renders `name` with the fields of `data` plus `site` and `media_url`
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<Html<String>, ServiceError> {
        let mut context = Context::from_serialize(data)?;
        context.insert("site", &self.site);
        context.insert("media_url", &self.media_url);
        Ok(Html(self.tera.render(name, &context)?))
    }
}
