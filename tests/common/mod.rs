#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Method, Request},
    response::Response,
    Router,
};
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, Set};
use serde_json::Value;
use tower::ServiceExt;

use artfusion::{
    config::{AppConfig, SiteConfig},
    db,
    entities::{
        author, category, collection, genre, overall_rating, product, product_author,
        product_genre, rating, review,
    },
    AppState,
};

pub const ADMIN_TOKEN: &str = "test-admin-token";

/// Helper harness for spinning up the full router backed by an in-memory SQLite database.
pub struct TestApp {
    router: Router,
    pub state: AppState,
}

impl TestApp {
    /// Construct a new test application with fresh database state.
    pub async fn new() -> Self {
        let mut cfg = AppConfig::new(
            "sqlite::memory:".to_string(),
            "127.0.0.1".to_string(),
            18_080,
            "test".to_string(),
        );
        // A single connection keeps every query on the same in-memory database.
        cfg.db_max_connections = 1;
        cfg.db_min_connections = 1;
        cfg.admin_token = Some(ADMIN_TOKEN.to_string());
        cfg.site = SiteConfig {
            title: "Test Gallery".to_string(),
            header: "Test Admin".to_string(),
        };

        let pool = db::establish_connection_from_app_config(&cfg)
            .await
            .expect("failed to create test database");
        db::run_migrations(&pool)
            .await
            .expect("failed to run migrations in tests");

        let state = AppState::new(Arc::new(pool), cfg).expect("build app state");
        let router = artfusion::app_router(state.clone());

        Self { router, state }
    }

    pub fn db(&self) -> &sea_orm::DatabaseConnection {
        &self.state.db
    }

    /// Send a request against the router with an optional JSON body and bearer token.
    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> Response {
        let mut builder = Request::builder().method(method).uri(uri);

        if let Some(tok) = token {
            builder = builder.header("authorization", format!("Bearer {}", tok));
        }

        let body = if let Some(json) = body {
            builder = builder.header("content-type", "application/json");
            Body::from(serde_json::to_vec(&json).expect("failed to serialize json request body"))
        } else {
            Body::empty()
        };

        let request = builder.body(body).expect("failed to build request");
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("router error during test request")
    }

    /// Convenience helper for admin JSON requests.
    pub async fn admin(&self, method: Method, uri: &str, body: Option<Value>) -> Response {
        self.request(method, uri, body, Some(ADMIN_TOKEN)).await
    }

    pub async fn get(&self, uri: &str) -> Response {
        self.request(Method::GET, uri, None, None).await
    }

    /// Posts an urlencoded form the way a browser does.
    pub async fn post_form(&self, uri: &str, fields: &[(&str, &str)]) -> Response {
        let encoded = serde_urlencoded::to_string(fields).expect("encode form fields");
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header("content-type", "application/x-www-form-urlencoded")
            .body(Body::from(encoded))
            .expect("failed to build form request");
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("router error during form request")
    }

    pub async fn seed_category(&self, name: &str, url: &str) -> category::Model {
        category::ActiveModel {
            name: Set(name.to_string()),
            description: Set(format!("{name} works")),
            url: Set(url.to_string()),
            ..Default::default()
        }
        .insert(self.db())
        .await
        .expect("seed category")
    }

    pub async fn seed_author(&self, name: &str) -> author::Model {
        author::ActiveModel {
            name: Set(name.to_string()),
            age: Set(40),
            description: Set(format!("About {name}")),
            image: Set(String::new()),
            ..Default::default()
        }
        .insert(self.db())
        .await
        .expect("seed author")
    }

    pub async fn seed_genre(&self, name: &str) -> genre::Model {
        genre::ActiveModel {
            name: Set(name.to_string()),
            description: Set(String::new()),
            url: Set(Some(name.to_lowercase())),
            ..Default::default()
        }
        .insert(self.db())
        .await
        .expect("seed genre")
    }

    pub async fn seed_product(
        &self,
        title: &str,
        url: &str,
        draft: bool,
        category_id: Option<i32>,
    ) -> product::Model {
        product::ActiveModel {
            title: Set(title.to_string()),
            description: Set(Some(format!("{title} description"))),
            image: Set(format!("products/{url}.jpg")),
            year: Set(1889),
            country: Set(Some("France".to_string())),
            date_added: Set(NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid date")),
            category_id: Set(category_id),
            url: Set(url.to_string()),
            draft: Set(draft),
            ..Default::default()
        }
        .insert(self.db())
        .await
        .expect("seed product")
    }

    pub async fn link_author(&self, product_id: i32, author_id: i32) {
        product_author::ActiveModel {
            product_id: Set(product_id),
            author_id: Set(author_id),
        }
        .insert(self.db())
        .await
        .expect("link author");
    }

    pub async fn link_genre(&self, product_id: i32, genre_id: i32) {
        product_genre::ActiveModel {
            product_id: Set(product_id),
            genre_id: Set(genre_id),
        }
        .insert(self.db())
        .await
        .expect("link genre");
    }

    pub async fn seed_review(
        &self,
        product_id: i32,
        parent_id: Option<i32>,
        text: &str,
    ) -> review::Model {
        review::ActiveModel {
            email: Set("visitor@example.com".to_string()),
            name: Set("Visitor".to_string()),
            text: Set(text.to_string()),
            parent_id: Set(parent_id),
            product_id: Set(product_id),
            ..Default::default()
        }
        .insert(self.db())
        .await
        .expect("seed review")
    }

    pub async fn seed_star(&self, value: i32) -> overall_rating::Model {
        overall_rating::ActiveModel {
            value: Set(value),
            ..Default::default()
        }
        .insert(self.db())
        .await
        .expect("seed star")
    }

    pub async fn seed_rating(&self, product_id: i32, star_id: i32, ip: &str) -> rating::Model {
        rating::ActiveModel {
            ip: Set(ip.to_string()),
            star_id: Set(star_id),
            product_id: Set(product_id),
            ..Default::default()
        }
        .insert(self.db())
        .await
        .expect("seed rating")
    }

    pub async fn seed_collection(&self, product_id: i32, title: &str) -> collection::Model {
        collection::ActiveModel {
            title: Set(title.to_string()),
            description: Set(String::new()),
            image: Set(String::new()),
            product_id: Set(product_id),
            ..Default::default()
        }
        .insert(self.db())
        .await
        .expect("seed collection")
    }
}

pub async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read response body");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

pub async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read response body");
    serde_json::from_slice(&bytes).expect("json body")
}
