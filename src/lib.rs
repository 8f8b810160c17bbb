//! ArtFusion gallery
//!
//! Public gallery pages (works, authors, reviews) and a JSON administration
//! API over the same catalog.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

// Core modules
pub mod config;
pub mod db;
pub mod entities;
pub mod errors;
pub mod forms;
pub mod handlers;
pub mod middleware_helpers;
pub mod migrator;
pub mod openapi;
pub mod repositories;
pub mod services;
pub mod templates;
pub mod tracing;

use axum::Router;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower_http::services::ServeDir;

use crate::middleware_helpers::admin_auth::AdminToken;

// App state definition
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
    pub config: Arc<config::AppConfig>,
    pub services: handlers::AppServices,
    pub templates: templates::Templates,
}

impl AppState {
    /// Wires services and templates around an open connection pool
    pub fn new(
        db: Arc<DatabaseConnection>,
        config: config::AppConfig,
    ) -> Result<Self, errors::ServiceError> {
        let templates = templates::Templates::new(config.site.clone(), config.media_url.clone())?;
        Ok(Self {
            services: handlers::AppServices::new(db.clone()),
            db,
            config: Arc::new(config),
            templates,
        })
    }
}

/// Full application router: public pages, health, admin API and media
pub fn app_router(state: AppState) -> Router {
    let admin_token = AdminToken::new(state.config.admin_token());
    if admin_token.0.is_none() {
        ::tracing::warn!("admin API is not protected by a token");
    }

    let mut app = Router::new()
        .merge(handlers::pages::page_routes())
        .merge(handlers::health::health_routes())
        .merge(handlers::admin::admin_routes(admin_token));

    if let Some(root) = state.config.media_root.as_deref() {
        ::tracing::info!(media_root = root, "serving media files");
        app = app.nest_service("/media", ServeDir::new(root));
    }

    app.layer(crate::tracing::configure_http_tracing())
        // Ensure every request carries a request id for traceability
        .layer(axum::middleware::from_fn(
            middleware_helpers::request_id::request_id_middleware,
        ))
        .with_state(state)
}
