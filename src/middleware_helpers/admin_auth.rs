use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use crate::errors::ServiceError;

/// Token the admin API expects; `None` leaves the admin API open.
#[derive(Clone, Debug, Default)]
pub struct AdminToken(pub Option<Arc<str>>);

impl AdminToken {
    pub fn new(token: Option<&str>) -> Self {
        Self(token.map(Arc::from))
    }
}

/// Rejects admin requests lacking `Authorization: Bearer <token>`.
pub async fn admin_auth_middleware(
    State(expected): State<AdminToken>,
    request: Request,
    next: Next,
) -> Response {
    let Some(expected) = expected.0.as_deref() else {
        return next.run(request).await;
    };

    let presented = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim);

    match presented {
        Some(token) if constant_time_eq(token.as_bytes(), expected.as_bytes()) => {
            next.run(request).await
        }
        Some(_) => {
            tracing::warn!(uri = %request.uri(), "admin request with invalid token");
            ServiceError::Unauthorized("invalid admin token".into()).into_response()
        }
        None => ServiceError::Unauthorized("admin token required".into()).into_response(),
    }
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request as HttpRequest, StatusCode},
        routing::get,
        Router,
    };
    use tower::ServiceExt;

    fn app(token: Option<&str>) -> Router {
        Router::new()
            .route("/", get(|| async { "ok" }))
            .layer(axum::middleware::from_fn_with_state(
                AdminToken::new(token),
                admin_auth_middleware,
            ))
    }

    async fn status_for(token: Option<&str>, header: Option<&str>) -> StatusCode {
        let mut builder = HttpRequest::builder().uri("/");
        if let Some(value) = header {
            builder = builder.header(AUTHORIZATION, value);
        }
        app(token)
            .oneshot(builder.body(Body::empty()).unwrap())
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn open_when_no_token_configured() {
        assert_eq!(status_for(None, None).await, StatusCode::OK);
    }

    #[tokio::test]
    async fn requires_matching_bearer_token() {
        assert_eq!(status_for(Some("s3cret"), None).await, StatusCode::UNAUTHORIZED);
        assert_eq!(
            status_for(Some("s3cret"), Some("Bearer nope")).await,
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status_for(Some("s3cret"), Some("Bearer s3cret")).await,
            StatusCode::OK
        );
    }

    #[test]
    fn constant_time_eq_compares_content() {
        assert!(constant_time_eq(b"abc", b"abc"));
        assert!(!constant_time_eq(b"abc", b"abd"));
        assert!(!constant_time_eq(b"abc", b"abcd"));
    }
}
