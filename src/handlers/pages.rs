//! Public gallery pages.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Router,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{error, info};

use crate::errors::ServiceError;
use crate::forms::{field_errors, ReviewForm};
use crate::handlers::AppState;
use crate::services::ProductDetail;
use crate::templates::{self, Templates};

pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(product_list))
        .route("/:slug/", get(product_detail))
        .route("/review/:product_id/", post(submit_review))
        .route("/author/:slug/", get(author_detail))
}

/// A failed page request, shown as an HTML error page
pub struct PageError {
    templates: Templates,
    error: ServiceError,
}

impl PageError {
    pub fn new(templates: &Templates, error: ServiceError) -> Self {
        Self {
            templates: templates.clone(),
            error,
        }
    }
}

#[derive(Serialize)]
struct ErrorPage {
    status: u16,
    reason: &'static str,
    message: String,
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let status = self.error.status_code();
        if status.is_server_error() {
            error!(error = %self.error, "page request failed");
        }
        let page = ErrorPage {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Error"),
            message: self.error.response_message(),
        };
        match self.templates.render(templates::ERROR_PAGE, &page) {
            Ok(html) => (status, html).into_response(),
            Err(render_err) => {
                error!(error = %render_err, "error page failed to render");
                (status, page.message).into_response()
            }
        }
    }
}

/// Review form state shown under the reviews
#[derive(Debug, Default, Serialize)]
struct FormContext {
    values: ReviewForm,
    errors: BTreeMap<String, Vec<String>>,
}

#[derive(Serialize)]
struct DetailPage<'a> {
    #[serde(flatten)]
    detail: &'a ProductDetail,
    form: FormContext,
}

/// `?parent=` on the detail page, set by a review's "Reply" link
#[derive(Debug, Default, Deserialize)]
struct ReplyTarget {
    parent: Option<String>,
}

#[derive(Serialize)]
struct ListPage<'a> {
    products: &'a [crate::entities::product::Model],
}

async fn product_list(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    let fail = |e: ServiceError| PageError::new(&state.templates, e);
    let products = state.services.catalog.list_products().await.map_err(fail)?;
    state
        .templates
        .render(templates::PRODUCT_LIST, &ListPage { products: &products })
        .map_err(fail)
}

async fn product_detail(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(reply): Query<ReplyTarget>,
) -> Result<Html<String>, PageError> {
    let fail = |e: ServiceError| PageError::new(&state.templates, e);
    let detail = state
        .services
        .catalog
        .product_detail(&slug)
        .await
        .map_err(fail)?;
    // only ids of threads shown on this page are carried into the form
    let parent = reply
        .parent
        .and_then(|raw| raw.trim().parse::<i32>().ok())
        .filter(|id| detail.reviews.iter().any(|thread| thread.review.id == *id));
    let form = FormContext {
        values: ReviewForm {
            parent: parent.map(|id| id.to_string()),
            ..ReviewForm::default()
        },
        ..FormContext::default()
    };
    render_detail(&state.templates, &detail, form).map_err(fail)
}

/// Stores a review and sends the visitor back to the product page. Invalid
/// submissions re-render the page with the errors and a 400 status.
async fn submit_review(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
    Form(form): Form<ReviewForm>,
) -> Result<Response, PageError> {
    let fail = |e: ServiceError| PageError::new(&state.templates, e);

    let product_id: i32 = product_id
        .parse()
        .map_err(|_| fail(ServiceError::not_found("Product", &product_id)))?;
    let product = state
        .services
        .catalog
        .repository()
        .get_product(product_id)
        .await
        .map_err(fail)?;

    match state.services.reviews.submit(&product, form.clone()).await {
        Ok(review) => {
            info!(review_id = review.id, product = %product.url, "review submitted");
            Ok(Redirect::to(&format!("/{}/", product.url)).into_response())
        }
        Err(ServiceError::FormErrors(errors)) => {
            let detail = state
                .services
                .catalog
                .detail_for(product)
                .await
                .map_err(fail)?;
            let form = FormContext {
                values: form.normalized(),
                errors: field_errors(&errors),
            };
            let html = render_detail(&state.templates, &detail, form).map_err(fail)?;
            Ok((StatusCode::BAD_REQUEST, html).into_response())
        }
        Err(e) => Err(fail(e)),
    }
}

async fn author_detail(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Html<String>, PageError> {
    let fail = |e: ServiceError| PageError::new(&state.templates, e);
    let detail = state
        .services
        .catalog
        .author_detail(&slug)
        .await
        .map_err(fail)?;
    state
        .templates
        .render(templates::AUTHOR_DETAIL, &detail)
        .map_err(fail)
}

fn render_detail(
    engine: &Templates,
    detail: &ProductDetail,
    form: FormContext,
) -> Result<Html<String>, ServiceError> {
    engine.render(templates::PRODUCT_DETAIL, &DetailPage { detail, form })
}
