mod common;

use artfusion::errors::ServiceError;
use assert_matches::assert_matches;
use common::TestApp;

#[tokio::test]
async fn published_listing_excludes_drafts_exactly() {
    let app = TestApp::new().await;
    let first = app.seed_product("Starry Night", "starry-night", false, None).await;
    app.seed_product("Unfinished Sketch", "sketch", true, None).await;
    let second = app.seed_product("Water Lilies", "water-lilies", false, None).await;

    let listed = app.state.services.catalog.list_products().await.unwrap();

    let ids: Vec<i32> = listed.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);
    assert!(listed.iter().all(|p| !p.draft));
}

#[tokio::test]
async fn publishing_flips_listing_membership() {
    let app = TestApp::new().await;
    let draft = app.seed_product("Sketch", "sketch", true, None).await;

    assert!(app.state.services.catalog.list_products().await.unwrap().is_empty());

    let updated = app
        .state
        .services
        .products
        .set_draft(&[draft.id], false)
        .await
        .unwrap();
    assert_eq!(updated, 1);

    let listed = app.state.services.catalog.list_products().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, draft.id);
}

#[tokio::test]
async fn top_level_reviews_have_no_parent_and_belong_to_product() {
    let app = TestApp::new().await;
    let product = app.seed_product("Starry Night", "starry-night", false, None).await;
    let other = app.seed_product("Water Lilies", "water-lilies", false, None).await;

    let root_a = app.seed_review(product.id, None, "Wonderful").await;
    let root_b = app.seed_review(product.id, None, "Too blue").await;
    app.seed_review(product.id, Some(root_a.id), "Agreed").await;
    app.seed_review(other.id, None, "Elsewhere").await;

    let roots = app
        .state
        .services
        .catalog
        .repository()
        .get_top_level_reviews(product.id)
        .await
        .unwrap();

    let ids: Vec<i32> = roots.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![root_a.id, root_b.id]);
    assert!(roots
        .iter()
        .all(|r| r.parent_id.is_none() && r.product_id == product.id));
}

#[tokio::test]
async fn detail_groups_replies_under_their_root() {
    let app = TestApp::new().await;
    let category = app.seed_category("Painting", "painting").await;
    let product = app
        .seed_product("Starry Night", "starry-night", false, Some(category.id))
        .await;
    let author = app.seed_author("Vincent").await;
    let genre = app.seed_genre("Landscape").await;
    app.link_author(product.id, author.id).await;
    app.link_genre(product.id, genre.id).await;
    app.seed_collection(product.id, "Study").await;

    let root = app.seed_review(product.id, None, "Wonderful").await;
    let reply = app.seed_review(product.id, Some(root.id), "Agreed").await;
    let lonely = app.seed_review(product.id, None, "Hmm").await;

    let detail = app
        .state
        .services
        .catalog
        .product_detail("starry-night")
        .await
        .unwrap();

    assert_eq!(detail.product.id, product.id);
    assert_eq!(detail.category.map(|c| c.id), Some(category.id));
    assert_eq!(detail.authors.len(), 1);
    assert_eq!(detail.genres.len(), 1);
    assert_eq!(detail.collections.len(), 1);

    assert_eq!(detail.reviews.len(), 2);
    assert_eq!(detail.reviews[0].review.id, root.id);
    assert_eq!(
        detail.reviews[0].replies.iter().map(|r| r.id).collect::<Vec<_>>(),
        vec![reply.id]
    );
    assert_eq!(detail.reviews[1].review.id, lonely.id);
    assert!(detail.reviews[1].replies.is_empty());
}

#[tokio::test]
async fn detail_averages_star_values() {
    let app = TestApp::new().await;
    let product = app.seed_product("Starry Night", "starry-night", false, None).await;

    let detail = app.state.services.catalog.detail_for(product.clone()).await.unwrap();
    assert_eq!(detail.average_rating, None);

    let five = app.seed_star(5).await;
    let two = app.seed_star(2).await;
    app.seed_rating(product.id, five.id, "10.0.0.1").await;
    app.seed_rating(product.id, two.id, "10.0.0.2").await;

    let detail = app.state.services.catalog.detail_for(product).await.unwrap();
    assert_eq!(detail.ratings.len(), 2);
    assert_eq!(detail.average_rating, Some(3.5));
}

#[tokio::test]
async fn unknown_slug_is_not_found() {
    let app = TestApp::new().await;

    let result = app.state.services.catalog.product_detail("missing").await;

    assert_matches!(result, Err(ServiceError::NotFound(_)));
}

#[tokio::test]
async fn author_lookup_prefers_oldest_on_shared_name() {
    let app = TestApp::new().await;
    let first = app.seed_author("Anonymous").await;
    app.seed_author("Anonymous").await;

    let published = app.seed_product("Portrait", "portrait", false, None).await;
    let hidden = app.seed_product("Draft Portrait", "draft-portrait", true, None).await;
    app.link_author(published.id, first.id).await;
    app.link_author(hidden.id, first.id).await;

    let detail = app
        .state
        .services
        .catalog
        .author_detail("Anonymous")
        .await
        .unwrap();

    assert_eq!(detail.author.id, first.id);
    assert_eq!(
        detail.products.iter().map(|p| p.id).collect::<Vec<_>>(),
        vec![published.id]
    );

    let missing = app.state.services.catalog.author_detail("Nobody").await;
    assert_matches!(missing, Err(ServiceError::NotFound(_)));
}
