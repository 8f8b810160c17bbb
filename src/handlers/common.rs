use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::config::AppConfig;
use crate::services::admin::{Page, PageRequest};

/// Standard success response
pub fn success_response<T: Serialize>(data: T) -> Response {
    (StatusCode::OK, Json(data)).into_response()
}

/// Standard created response
pub fn created_response<T: Serialize>(data: T) -> Response {
    (StatusCode::CREATED, Json(data)).into_response()
}

/// Standard no content response
pub fn no_content_response() -> Response {
    StatusCode::NO_CONTENT.into_response()
}

/// Pagination parameters for list operations
#[derive(Debug, Deserialize, Serialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationParams {
    /// 1-based page number
    #[serde(default = "default_page")]
    pub page: u64,
    /// Falls back to the configured admin page size
    #[serde(default)]
    pub per_page: Option<u64>,
}

fn default_page() -> u64 {
    1
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: default_page(),
            per_page: None,
        }
    }
}

impl PaginationParams {
    /// Applies the configured default and cap
    pub fn resolve(&self, config: &AppConfig) -> PageRequest {
        let max = config.admin_max_page_size.max(1);
        PageRequest {
            page: self.page.max(1),
            per_page: self.per_page.unwrap_or(config.admin_page_size).clamp(1, max),
        }
    }
}

/// Standard pagination response metadata
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PaginationMeta {
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
    pub total_pages: u64,
}

impl PaginationMeta {
    pub fn new(page: u64, per_page: u64, total: u64) -> Self {
        let total_pages = if total == 0 {
            0
        } else {
            (total + per_page - 1) / per_page
        };
        Self {
            page,
            per_page,
            total,
            total_pages,
        }
    }
}

/// Standard paginated response wrapper
#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
}

impl<T> PaginatedResponse<T> {
    pub fn new(data: Vec<T>, page: u64, per_page: u64, total: u64) -> Self {
        Self {
            data,
            pagination: PaginationMeta::new(page, per_page, total),
        }
    }

    pub fn from_page(page: Page<T>, request: PageRequest) -> Self {
        Self::new(page.items, request.page, request.per_page, page.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> AppConfig {
        let mut cfg = AppConfig::new(
            "sqlite::memory:".into(),
            "127.0.0.1".into(),
            8080,
            "development".into(),
        );
        cfg.admin_page_size = 25;
        cfg.admin_max_page_size = 100;
        cfg
    }

    #[test]
    fn pagination_defaults_and_caps() {
        let cfg = config();
        assert_eq!(
            PaginationParams::default().resolve(&cfg),
            PageRequest { page: 1, per_page: 25 }
        );
        let params = PaginationParams {
            page: 0,
            per_page: Some(5000),
        };
        assert_eq!(params.resolve(&cfg), PageRequest { page: 1, per_page: 100 });
        let params = PaginationParams {
            page: 3,
            per_page: Some(0),
        };
        assert_eq!(params.resolve(&cfg), PageRequest { page: 3, per_page: 1 });
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(PaginationMeta::new(1, 10, 0).total_pages, 0);
        assert_eq!(PaginationMeta::new(1, 10, 10).total_pages, 1);
        assert_eq!(PaginationMeta::new(1, 10, 11).total_pages, 2);
    }
}
