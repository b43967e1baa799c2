//! Inbound side: route table of the gateway

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::config::GatewayConfig;
use crate::handlers::{
    create_task_handler, delete_task_handler, get_task_handler, health_handler,
    list_tasks_handler, login_handler, logout_handler, me_handler, refresh_handler,
    register_handler, task_result_handler, update_task_handler, GatewayState,
};
use crate::shared::constants::API_PREFIX;

/// Build the full application router, mounted under `/api`.
/// NOTE: Axum 0.8 uses {param} syntax instead of :param
pub fn build_router(state: GatewayState, max_body_bytes: usize) -> Router {
    let api = Router::new()
        // Auth
        .route("/auth/login", post(login_handler))
        .route("/auth/register", post(register_handler))
        .route("/auth/me", get(me_handler))
        .route("/auth/logout", post(logout_handler))
        .route("/auth/refresh", post(refresh_handler))
        // Tasks
        .route("/tasks", get(list_tasks_handler).post(create_task_handler))
        .route(
            "/tasks/{task_id}",
            get(get_task_handler)
                .put(update_task_handler)
                .delete(delete_task_handler),
        )
        .route("/tasks/{task_id}/result", get(task_result_handler))
        .route("/health", get(health_handler))
        .with_state(state);

    Router::new().nest(API_PREFIX, api).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(DefaultBodyLimit::max(max_body_bytes)),
    )
}

/// Router for a parsed configuration
pub fn router_from_config(config: &GatewayConfig) -> Router {
    build_router(GatewayState::new(&config.backend_url), config.max_body_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Method, Request, StatusCode},
    };
    use tower::ServiceExt;

    // Port 9 (discard) is never contacted: every request below stops at the gateway
    fn router() -> Router {
        build_router(GatewayState::new("http://127.0.0.1:9"), 1024)
    }

    async fn send(method: Method, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = router()
            .oneshot(Request::builder().method(method).uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null))
    }

    #[tokio::test]
    async fn test_protected_routes_require_cookie() {
        let routes = [
            (Method::GET, "/api/auth/me"),
            (Method::POST, "/api/auth/logout"),
            (Method::GET, "/api/tasks?status=completed"),
            (Method::POST, "/api/tasks"),
            (Method::GET, "/api/tasks/1"),
            (Method::PUT, "/api/tasks/1"),
            (Method::DELETE, "/api/tasks/1"),
            (Method::GET, "/api/tasks/1/result"),
        ];

        for (method, uri) in routes {
            let (status, body) = send(method.clone(), uri).await;
            assert_eq!(status, StatusCode::UNAUTHORIZED, "{} {}", method, uri);
            assert_eq!(body, serde_json::json!({ "detail": "Not authenticated" }));
        }
    }

    #[tokio::test]
    async fn test_refresh_has_own_rejection_text() {
        let (status, body) = send(Method::POST, "/api/auth/refresh").await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, serde_json::json!({ "detail": "No refresh token found" }));
    }

    #[tokio::test]
    async fn test_health_is_local() {
        let (status, body) = send(Method::GET, "/api/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["backend_url"], "http://127.0.0.1:9");
    }

    #[tokio::test]
    async fn test_routes_live_under_api_prefix() {
        let (status, _) = send(Method::GET, "/auth/me").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
