mod common;

use artfusion::entities::review;
use artfusion::errors::ServiceError;
use artfusion::forms::ReviewForm;
use assert_matches::assert_matches;
use axum::http::{header, StatusCode};
use common::{body_text, TestApp};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

async fn review_count(app: &TestApp) -> u64 {
    review::Entity::find().count(app.db()).await.unwrap()
}

#[tokio::test]
async fn valid_review_is_stored_and_redirects() {
    let app = TestApp::new().await;
    let product = app.seed_product("Starry Night", "starry-night", false, None).await;

    let response = app
        .post_form(
            &format!("/review/{}/", product.id),
            &[
                ("name", "Ada"),
                ("email", "ada@example.com"),
                ("text", "Lovely brushwork"),
                ("parent", ""),
            ],
        )
        .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/starry-night/"
    );

    let stored = review::Entity::find().all(app.db()).await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].name, "Ada");
    assert_eq!(stored[0].product_id, product.id);
    assert_eq!(stored[0].parent_id, None);
}

#[tokio::test]
async fn reply_keeps_parent_link() {
    let app = TestApp::new().await;
    let product = app.seed_product("Starry Night", "starry-night", false, None).await;
    let root = app.seed_review(product.id, None, "Wonderful").await;

    let response = app
        .post_form(
            &format!("/review/{}/", product.id),
            &[
                ("name", "Ada"),
                ("email", "ada@example.com"),
                ("text", "Agreed"),
                ("parent", &root.id.to_string()),
            ],
        )
        .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let replies = review::Entity::find()
        .filter(review::Column::ParentId.eq(root.id))
        .all(app.db())
        .await
        .unwrap();
    assert_eq!(replies.len(), 1);
    assert_eq!(replies[0].text, "Agreed");
}

#[tokio::test]
async fn text_over_limit_is_rejected_without_persisting() {
    let app = TestApp::new().await;
    let product = app.seed_product("Starry Night", "starry-night", false, None).await;
    let long_text = "a".repeat(5001);

    let response = app
        .post_form(
            &format!("/review/{}/", product.id),
            &[
                ("name", "Ada"),
                ("email", "ada@example.com"),
                ("text", long_text.as_str()),
            ],
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let html = body_text(response).await;
    assert!(html.contains("class=\"errors\""));
    assert!(html.contains("Starry Night"));
    assert_eq!(review_count(&app).await, 0);
}

#[tokio::test]
async fn text_at_limit_is_accepted() {
    let app = TestApp::new().await;
    let product = app.seed_product("Starry Night", "starry-night", false, None).await;
    let text = "a".repeat(5000);

    let response = app
        .post_form(
            &format!("/review/{}/", product.id),
            &[("name", "Ada"), ("email", "ada@example.com"), ("text", text.as_str())],
        )
        .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(review_count(&app).await, 1);
}

#[tokio::test]
async fn missing_fields_rerender_with_submitted_values() {
    let app = TestApp::new().await;
    let product = app.seed_product("Starry Night", "starry-night", false, None).await;

    let response = app
        .post_form(
            &format!("/review/{}/", product.id),
            &[("name", "Ada"), ("email", "not-an-email"), ("text", "")],
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let html = body_text(response).await;
    assert!(html.contains("value=\"Ada\""));
    assert_eq!(review_count(&app).await, 0);
}

#[tokio::test]
async fn unknown_product_is_not_found() {
    let app = TestApp::new().await;

    let response = app
        .post_form(
            "/review/999/",
            &[("name", "Ada"), ("email", "ada@example.com"), ("text", "Hello")],
        )
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .post_form(
            "/review/not-a-number/",
            &[("name", "Ada"), ("email", "ada@example.com"), ("text", "Hello")],
        )
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(review_count(&app).await, 0);
}

#[tokio::test]
async fn parent_from_another_product_is_rejected() {
    let app = TestApp::new().await;
    let product = app.seed_product("Starry Night", "starry-night", false, None).await;
    let other = app.seed_product("Water Lilies", "water-lilies", false, None).await;
    let foreign_root = app.seed_review(other.id, None, "Calm").await;

    let form = ReviewForm {
        name: "Ada".into(),
        email: "ada@example.com".into(),
        text: "Agreed".into(),
        parent: Some(foreign_root.id.to_string()),
    };
    let result = app.state.services.reviews.submit(&product, form).await;

    assert_matches!(result, Err(ServiceError::FormErrors(errors)) => {
        assert!(errors.field_errors().contains_key("parent"));
    });
    assert_eq!(review_count(&app).await, 1);
}

#[tokio::test]
async fn unknown_or_garbled_parent_is_rejected() {
    let app = TestApp::new().await;
    let product = app.seed_product("Starry Night", "starry-night", false, None).await;

    for parent in ["4242", "abc"] {
        let form = ReviewForm {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            text: "Reply".into(),
            parent: Some(parent.into()),
        };
        let result = app.state.services.reviews.submit(&product, form).await;
        assert_matches!(result, Err(ServiceError::FormErrors(_)));
    }
    assert_eq!(review_count(&app).await, 0);
}

#[tokio::test]
async fn review_is_accepted_on_draft_product() {
    let app = TestApp::new().await;
    let product = app.seed_product("Sketch", "sketch", true, None).await;

    let form = ReviewForm {
        name: " Ada ".into(),
        email: "ada@example.com".into(),
        text: "Promising".into(),
        parent: Some("   ".into()),
    };
    let saved = app.state.services.reviews.submit(&product, form).await.unwrap();

    assert_eq!(saved.name, "Ada");
    assert_eq!(saved.parent_id, None);
    assert_eq!(saved.product_id, product.id);
}

#[tokio::test]
async fn reply_to_a_reply_is_rejected() {
    let app = TestApp::new().await;
    let product = app.seed_product("Starry Night", "starry-night", false, None).await;
    let root = app.seed_review(product.id, None, "Wonderful").await;
    let reply = app.seed_review(product.id, Some(root.id), "Agreed").await;

    let response = app
        .post_form(
            &format!("/review/{}/", product.id),
            &[
                ("name", "Ada"),
                ("email", "ada@example.com"),
                ("text", "Nested answer"),
                ("parent", &reply.id.to_string()),
            ],
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let html = body_text(response).await;
    assert!(html.contains("data-field=\"parent\""));
    assert_eq!(review_count(&app).await, 2);
}
