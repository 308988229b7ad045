use std::sync::Arc;

use axum::{
    middleware,
    routing::get,
    Router,
};

use appointment_cell::router::appointment_routes;
use auth_cell::router::auth_routes;
use auth_cell::{require_session, SessionManager};
use dashboard_cell::router::dashboard_routes;
use scheduling_cell::router::scheduling_routes;
use shared_config::AppConfig;

pub fn create_router(config: Arc<AppConfig>, sessions: Arc<SessionManager>) -> Router {
    // Everything except sign-in needs a session
    let protected = Router::new()
        .nest("/scheduling", scheduling_routes(config.clone()))
        .nest("/appointments", appointment_routes(config.clone()))
        .nest("/dashboard", dashboard_routes(config.clone()))
        .route_layer(middleware::from_fn_with_state(sessions.clone(), require_session));

    Router::new()
        .route("/", get(|| async { "Clinic dashboard is running!" }))
        .nest("/auth", auth_routes(sessions))
        .merge(protected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use auth_cell::MemorySessionStore;
    use shared_utils::test_utils::TestConfig;

    fn app() -> (Router, Arc<SessionManager>) {
        let config = TestConfig::default().to_arc();
        let sessions = Arc::new(SessionManager::from_config(
            Arc::new(MemorySessionStore::new()),
            &config,
        ));
        (create_router(config, sessions.clone()), sessions)
    }

    async fn status_of(app: Router, uri: &str) -> StatusCode {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn test_dashboard_routes_require_sign_in() {
        let (app, _) = app();

        assert_eq!(status_of(app.clone(), "/").await, StatusCode::OK);
        assert_eq!(status_of(app.clone(), "/auth/session").await, StatusCode::OK);
        assert_eq!(status_of(app.clone(), "/scheduling/calendar").await, StatusCode::UNAUTHORIZED);
        assert_eq!(status_of(app, "/dashboard/calls").await, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_signed_in_user_reaches_scheduling() {
        let (app, sessions) = app();
        sessions.login("demo@clinic.local", "demo1234").await.unwrap();

        assert_eq!(
            status_of(app, "/scheduling/calendar?date=2026-10-19").await,
            StatusCode::OK
        );
    }
}
