mod common;

use axum::http::{Method, StatusCode};
use common::{body_json, TestApp};
use serde_json::json;

#[tokio::test]
async fn admin_requires_bearer_token() {
    let app = TestApp::new().await;

    let missing = app.request(Method::GET, "/admin/products", None, None).await;
    assert_eq!(missing.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(missing).await;
    assert_eq!(body["error"], "Unauthorized");

    let wrong = app
        .request(Method::GET, "/admin/products", None, Some("guess"))
        .await;
    assert_eq!(wrong.status(), StatusCode::UNAUTHORIZED);

    let ok = app.admin(Method::GET, "/admin/products", None).await;
    assert_eq!(ok.status(), StatusCode::OK);
}

#[tokio::test]
async fn public_pages_need_no_token() {
    let app = TestApp::new().await;

    let response = app.get("/").await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn admin_index_uses_configured_labels() {
    let app = TestApp::new().await;

    let response = app.admin(Method::GET, "/admin/", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["site_title"], "Test Gallery");
    assert_eq!(body["site_header"], "Test Admin");
    assert_eq!(body["resources"].as_array().unwrap().len(), 8);
}

#[tokio::test]
async fn openapi_document_lists_admin_paths() {
    let app = TestApp::new().await;

    let response = app.admin(Method::GET, "/admin/openapi.json", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(body["paths"]["/admin/products"].is_object());
    assert!(body["paths"]["/admin/reviews/{id}"].is_object());
}

#[tokio::test]
async fn category_crud_round() {
    let app = TestApp::new().await;

    let created = app
        .admin(
            Method::POST,
            "/admin/categories",
            Some(json!({"name": "Painting", "description": "Oil and canvas", "url": "painting"})),
        )
        .await;
    assert_eq!(created.status(), StatusCode::CREATED);
    let category = body_json(created).await;
    let id = category["id"].as_i64().unwrap();

    let duplicate = app
        .admin(
            Method::POST,
            "/admin/categories",
            Some(json!({"name": "Painting again", "url": "painting"})),
        )
        .await;
    assert_eq!(duplicate.status(), StatusCode::CONFLICT);

    let updated = app
        .admin(
            Method::PUT,
            &format!("/admin/categories/{id}"),
            Some(json!({"name": "Paintings", "url": "painting"})),
        )
        .await;
    assert_eq!(updated.status(), StatusCode::OK);
    assert_eq!(body_json(updated).await["name"], "Paintings");

    let fetched = app
        .admin(Method::GET, &format!("/admin/categories/{id}"), None)
        .await;
    assert_eq!(fetched.status(), StatusCode::OK);

    let deleted = app
        .admin(Method::DELETE, &format!("/admin/categories/{id}"), None)
        .await;
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

    let gone = app
        .admin(Method::GET, &format!("/admin/categories/{id}"), None)
        .await;
    assert_eq!(gone.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn invalid_payload_reports_fields() {
    let app = TestApp::new().await;

    let response = app
        .admin(
            Method::POST,
            "/admin/categories",
            Some(json!({"name": "", "url": "Not A Slug"})),
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["fields"]["name"].is_array());
    assert!(body["fields"]["url"].is_array());
}

#[tokio::test]
async fn product_create_links_authors_and_genres() {
    let app = TestApp::new().await;
    let category = app.seed_category("Painting", "painting").await;
    let author = app.seed_author("Vincent").await;
    let genre = app.seed_genre("Landscape").await;

    let response = app
        .admin(
            Method::POST,
            "/admin/products",
            Some(json!({
                "title": "Starry Night",
                "url": "starry-night",
                "category_id": category.id,
                "author_ids": [author.id, author.id],
                "genre_ids": [genre.id],
            })),
        )
        .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["title"], "Starry Night");
    assert_eq!(body["year"], 2020);
    assert_eq!(body["draft"], false);
    assert_eq!(body["author_ids"], json!([author.id]));
    assert_eq!(body["genre_ids"], json!([genre.id]));

    let id = body["id"].as_i64().unwrap();
    let update = app
        .admin(
            Method::PUT,
            &format!("/admin/products/{id}"),
            Some(json!({
                "title": "Starry Night",
                "url": "starry-night",
                "author_ids": [],
                "genre_ids": [genre.id],
            })),
        )
        .await;
    assert_eq!(update.status(), StatusCode::OK);
    let body = body_json(update).await;
    assert_eq!(body["author_ids"], json!([]));
    assert!(body["category_id"].is_null());
}

#[tokio::test]
async fn product_with_unknown_reference_is_rejected() {
    let app = TestApp::new().await;

    let response = app
        .admin(
            Method::POST,
            "/admin/products",
            Some(json!({"title": "Orphan", "url": "orphan", "author_ids": [77]})),
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let listed = body_json(app.admin(Method::GET, "/admin/products", None).await).await;
    assert_eq!(listed["pagination"]["total"], 0);
}

#[tokio::test]
async fn duplicate_product_slug_conflicts() {
    let app = TestApp::new().await;
    app.seed_product("Starry Night", "starry-night", false, None).await;

    let response = app
        .admin(
            Method::POST,
            "/admin/products",
            Some(json!({"title": "Another", "url": "starry-night"})),
        )
        .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn product_slug_cannot_shadow_site_routes() {
    let app = TestApp::new().await;

    let response = app
        .admin(
            Method::POST,
            "/admin/products",
            Some(json!({"title": "Admin Portrait", "url": "admin"})),
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["fields"]["url"].is_array());
}

#[tokio::test]
async fn product_list_filters_and_paginates() {
    let app = TestApp::new().await;
    let painting = app.seed_category("Painting", "painting").await;
    app.seed_product("Starry Night", "starry-night", false, Some(painting.id))
        .await;
    app.seed_product("Night Cafe", "night-cafe", true, None).await;
    app.seed_product("Sunflowers", "sunflowers", false, None).await;

    let drafts = body_json(
        app.admin(Method::GET, "/admin/products?draft=true", None)
            .await,
    )
    .await;
    assert_eq!(drafts["pagination"]["total"], 1);
    assert_eq!(drafts["data"][0]["url"], "night-cafe");

    let search = body_json(
        app.admin(Method::GET, "/admin/products?search=Night", None)
            .await,
    )
    .await;
    assert_eq!(search["pagination"]["total"], 2);

    let by_category_name = body_json(
        app.admin(Method::GET, "/admin/products?search=Painting", None)
            .await,
    )
    .await;
    assert_eq!(by_category_name["pagination"]["total"], 1);

    let paged = body_json(
        app.admin(Method::GET, "/admin/products?page=2&per_page=2", None)
            .await,
    )
    .await;
    assert_eq!(paged["pagination"]["total"], 3);
    assert_eq!(paged["pagination"]["total_pages"], 2);
    assert_eq!(paged["data"].as_array().unwrap().len(), 1);
    assert_eq!(paged["data"][0]["url"], "sunflowers");
}

#[tokio::test]
async fn publish_and_unpublish_report_counts() {
    let app = TestApp::new().await;
    let a = app.seed_product("A", "a", true, None).await;
    let b = app.seed_product("B", "b", true, None).await;

    let published = app
        .admin(
            Method::POST,
            "/admin/products/publish",
            Some(json!({"ids": [a.id, b.id]})),
        )
        .await;
    assert_eq!(published.status(), StatusCode::OK);
    let body = body_json(published).await;
    assert_eq!(body["updated"], 2);
    assert_eq!(body["message"], "2 records were updated");
    assert_eq!(app.state.services.catalog.list_products().await.unwrap().len(), 2);

    let unpublished = app
        .admin(
            Method::POST,
            "/admin/products/unpublish",
            Some(json!({"ids": [a.id]})),
        )
        .await;
    let body = body_json(unpublished).await;
    assert_eq!(body["message"], "1 record was updated");
    assert_eq!(app.state.services.catalog.list_products().await.unwrap().len(), 1);

    let empty = app
        .admin(
            Method::POST,
            "/admin/products/publish",
            Some(json!({"ids": []})),
        )
        .await;
    assert_eq!(empty.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn author_filters_by_age_and_name() {
    let app = TestApp::new().await;
    app.seed_author("Vincent").await;
    let created = app
        .admin(
            Method::POST,
            "/admin/authors",
            Some(json!({"name": "Frida", "age": 47})),
        )
        .await;
    assert_eq!(created.status(), StatusCode::CREATED);

    let by_age = body_json(app.admin(Method::GET, "/admin/authors?age=47", None).await).await;
    assert_eq!(by_age["pagination"]["total"], 1);
    assert_eq!(by_age["data"][0]["name"], "Frida");

    let by_name = body_json(
        app.admin(Method::GET, "/admin/authors?search=Vinc", None)
            .await,
    )
    .await;
    assert_eq!(by_name["pagination"]["total"], 1);
}

#[tokio::test]
async fn genre_slug_may_be_omitted() {
    let app = TestApp::new().await;

    let response = app
        .admin(Method::POST, "/admin/genres", Some(json!({"name": "Abstract"})))
        .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert!(body_json(response).await["url"].is_null());
}

#[tokio::test]
async fn collection_requires_existing_product() {
    let app = TestApp::new().await;
    let product = app.seed_product("Starry Night", "starry-night", false, None).await;

    let missing = app
        .admin(
            Method::POST,
            "/admin/collections",
            Some(json!({"title": "Study", "product_id": 999})),
        )
        .await;
    assert_eq!(missing.status(), StatusCode::BAD_REQUEST);

    let created = app
        .admin(
            Method::POST,
            "/admin/collections",
            Some(json!({"title": "Study", "product_id": product.id})),
        )
        .await;
    assert_eq!(created.status(), StatusCode::CREATED);

    let by_product_title = body_json(
        app.admin(Method::GET, "/admin/collections?search=Starry", None)
            .await,
    )
    .await;
    assert_eq!(by_product_title["pagination"]["total"], 1);
}

#[tokio::test]
async fn ratings_are_managed_with_star_levels() {
    let app = TestApp::new().await;
    let product = app.seed_product("Starry Night", "starry-night", false, None).await;

    let star = app
        .admin(Method::POST, "/admin/overall-ratings", Some(json!({"value": 5})))
        .await;
    assert_eq!(star.status(), StatusCode::CREATED);
    let star_id = body_json(star).await["id"].as_i64().unwrap();

    let rating = app
        .admin(
            Method::POST,
            "/admin/ratings",
            Some(json!({"ip": "10.0.0.1", "star_id": star_id, "product_id": product.id})),
        )
        .await;
    assert_eq!(rating.status(), StatusCode::CREATED);

    let too_long_ip = app
        .admin(
            Method::POST,
            "/admin/ratings",
            Some(json!({"ip": "1234567890123456", "star_id": star_id, "product_id": product.id})),
        )
        .await;
    assert_eq!(too_long_ip.status(), StatusCode::BAD_REQUEST);

    let listed = body_json(
        app.admin(
            Method::GET,
            &format!("/admin/ratings?product_id={}", product.id),
            None,
        )
        .await,
    )
    .await;
    assert_eq!(listed["pagination"]["total"], 1);
}

#[tokio::test]
async fn reviews_are_listed_and_deleted() {
    let app = TestApp::new().await;
    let product = app.seed_product("Starry Night", "starry-night", false, None).await;
    let other = app.seed_product("Water Lilies", "water-lilies", false, None).await;
    let review = app.seed_review(product.id, None, "Wonderful").await;
    app.seed_review(other.id, None, "Calm").await;

    let listed = body_json(
        app.admin(
            Method::GET,
            &format!("/admin/reviews?product_id={}", product.id),
            None,
        )
        .await,
    )
    .await;
    assert_eq!(listed["pagination"]["total"], 1);

    let by_product_title = body_json(
        app.admin(Method::GET, "/admin/reviews?search=Lilies", None)
            .await,
    )
    .await;
    assert_eq!(by_product_title["pagination"]["total"], 1);

    let deleted = app
        .admin(Method::DELETE, &format!("/admin/reviews/{}", review.id), None)
        .await;
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

    let again = app
        .admin(Method::DELETE, &format!("/admin/reviews/{}", review.id), None)
        .await;
    assert_eq!(again.status(), StatusCode::NOT_FOUND);
}
