use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    middleware,
    routing::get,
    Extension, Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use auth_cell::router::auth_routes;
use auth_cell::{require_session, MemorySessionStore, SessionManager};
use shared_models::auth::Session;
use shared_utils::test_utils::TestConfig;

fn create_sessions() -> Arc<SessionManager> {
    Arc::new(SessionManager::from_config(
        Arc::new(MemorySessionStore::new()),
        &TestConfig::default().to_app_config(),
    ))
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_login_endpoint() {
    let sessions = create_sessions();
    let app = auth_routes(sessions.clone());

    let response = app
        .oneshot(json_request("POST", "/login", json!({
            "email": "demo@clinic.local",
            "password": "demo1234"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["signed_in"], true);
    assert_eq!(body["session"]["user"]["email"], "demo@clinic.local");
    assert!(sessions.is_signed_in().await);
}

#[tokio::test]
async fn test_login_endpoint_wrong_password() {
    let app = auth_routes(create_sessions());

    let response = app
        .oneshot(json_request("POST", "/login", json!({
            "email": "demo@clinic.local",
            "password": "nope"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Invalid email or password");
}

#[tokio::test]
async fn test_login_endpoint_missing_fields() {
    let app = auth_routes(create_sessions());

    let response = app
        .oneshot(json_request("POST", "/login", json!({
            "email": " ",
            "password": ""
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_session_and_logout_endpoints() {
    let sessions = create_sessions();
    sessions.login("demo@clinic.local", "demo1234").await.unwrap();

    let response = auth_routes(sessions.clone())
        .oneshot(Request::builder().uri("/session").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(body_json(response).await["signed_in"], true);

    let response = auth_routes(sessions.clone())
        .oneshot(json_request("POST", "/logout", json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(!sessions.is_signed_in().await);

    let response = auth_routes(sessions.clone())
        .oneshot(json_request("POST", "/logout", json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_require_session_middleware() {
    let sessions = create_sessions();

    let protected = Router::new()
        .route("/private", get(|Extension(session): Extension<Session>| async move {
            session.user.email
        }))
        .layer(middleware::from_fn_with_state(sessions.clone(), require_session));

    let response = protected
        .clone()
        .oneshot(Request::builder().uri("/private").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    sessions.login("demo@clinic.local", "demo1234").await.unwrap();

    let response = protected
        .oneshot(Request::builder().uri("/private").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&body[..], b"demo@clinic.local");
}
