//! API-key gating middleware.
//!
//! Every path is protected unless it appears in the [`PathPolicy`] whitelist,
//! either as an exact match (`/health`, `/`) or under a public prefix (the
//! documentation collaborator serves many sub-paths under one prefix).
//! Denials short-circuit before any handler runs, so an unauthenticated
//! request never triggers upstream fetch work.

use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use observability::GatewayMetrics;
use serde_json::json;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::warn;

/// Header carrying the shared secret.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Classification of request paths into public and protected.
#[derive(Debug, Clone)]
pub struct PathPolicy {
    public_paths: HashSet<String>,
    public_prefixes: Vec<String>,
}

impl PathPolicy {
    pub fn new(
        public_paths: impl IntoIterator<Item = String>,
        public_prefixes: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            public_paths: public_paths.into_iter().collect(),
            public_prefixes: public_prefixes.into_iter().collect(),
        }
    }

    /// A path is public if it matches a whitelisted path exactly or starts
    /// with a whitelisted prefix. The empty path counts as `/`.
    pub fn is_public(&self, path: &str) -> bool {
        let path = if path.is_empty() { "/" } else { path };
        self.public_paths.contains(path)
            || self.public_prefixes.iter().any(|p| path.starts_with(p.as_str()))
    }
}

/// Shared state for the auth middleware.
pub struct AuthState {
    pub api_key: String,
    pub policy: PathPolicy,
    pub metrics: GatewayMetrics,
}

/// Middleware: allow public paths through, require an exact `X-API-KEY`
/// match everywhere else.
pub async fn require_api_key(
    State(state): State<Arc<AuthState>>,
    request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_string();

    if state.policy.is_public(&path) {
        return next.run(request).await;
    }

    match request.headers().get(API_KEY_HEADER) {
        Some(key) if key.as_bytes() == state.api_key.as_bytes() => next.run(request).await,
        _ => {
            warn!(%path, "Rejected request with missing or invalid API key");
            state.metrics.record_auth_denied();
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({"error": "Unauthorized"})),
            )
                .into_response()
        }
    }
}

/// Wrap a router with the API-key layer.
pub fn with_api_key_auth(router: Router, state: Arc<AuthState>) -> Router {
    router.layer(middleware::from_fn_with_state(state, require_api_key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::routing::get;
    use tower::ServiceExt;

    fn test_state(api_key: &str) -> Arc<AuthState> {
        Arc::new(AuthState {
            api_key: api_key.to_string(),
            policy: PathPolicy::new(
                ["/health".to_string(), "/".to_string()],
                ["/apidocs".to_string()],
            ),
            metrics: GatewayMetrics::new(),
        })
    }

    fn test_app(api_key: &str) -> Router {
        let router = Router::new()
            .route("/", get(|| async { "index" }))
            .route("/health", get(|| async { "ok" }))
            .route("/apidocs/page", get(|| async { "docs" }))
            .route("/live/prices", get(|| async { "prices" }));
        with_api_key_auth(router, test_state(api_key))
    }

    async fn send(app: Router, path: &str, key: Option<&str>) -> StatusCode {
        let mut builder = axum::http::Request::builder().uri(path);
        if let Some(key) = key {
            builder = builder.header(API_KEY_HEADER, key);
        }
        let request = builder.body(Body::empty()).unwrap();
        app.oneshot(request).await.unwrap().status()
    }

    #[test]
    fn test_path_policy_exact_and_prefix() {
        let policy = PathPolicy::new(
            ["/health".to_string(), "/".to_string()],
            ["/apidocs".to_string()],
        );
        assert!(policy.is_public("/health"));
        assert!(policy.is_public("/"));
        assert!(policy.is_public(""));
        assert!(policy.is_public("/apidocs/anything/nested"));
        assert!(!policy.is_public("/live/prices"));
        assert!(!policy.is_public("/healthz"));
    }

    #[tokio::test]
    async fn test_public_paths_need_no_key() {
        assert_eq!(send(test_app("s3cret"), "/health", None).await, StatusCode::OK);
        assert_eq!(send(test_app("s3cret"), "/", None).await, StatusCode::OK);
        // Wrong key is also fine on public paths
        assert_eq!(
            send(test_app("s3cret"), "/health", Some("wrong")).await,
            StatusCode::OK
        );
    }

    #[tokio::test]
    async fn test_prefix_whitelist_exempts_subpaths() {
        assert_eq!(
            send(test_app("s3cret"), "/apidocs/page", None).await,
            StatusCode::OK
        );
    }

    #[tokio::test]
    async fn test_protected_path_requires_exact_key() {
        assert_eq!(
            send(test_app("s3cret"), "/live/prices", None).await,
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            send(test_app("s3cret"), "/live/prices", Some("wrong")).await,
            StatusCode::UNAUTHORIZED
        );
        // Case-sensitive comparison
        assert_eq!(
            send(test_app("s3cret"), "/live/prices", Some("S3CRET")).await,
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            send(test_app("s3cret"), "/live/prices", Some("s3cret")).await,
            StatusCode::OK
        );
    }
}
