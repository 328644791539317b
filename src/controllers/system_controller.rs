use axum::{extract::State, Json};

use crate::models::system::HealthStatus;
use crate::shared_state::AppState;

/// GET /health
/// Liveness check
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = HealthStatus)
    )
)]
pub async fn health(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.uptime_seconds(),
        preferences: state.preferences.load(),
    })
}

#[cfg(test)]
mod tests {
    use axum::{body::Body, http::{Request, StatusCode}};
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::routes::build_router;
    use crate::services::preferences::Preferences;
    use crate::shared_state::AppState;

    #[tokio::test]
    async fn test_health_reports_version() {
        let app = build_router(AppState::new(Preferences::in_memory()), "static", false);
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
        assert_eq!(json["preferences"]["language"], "en");
    }

    #[tokio::test]
    async fn test_openapi_ui_is_served() {
        let app = build_router(AppState::new(Preferences::in_memory()), "static", false);
        let request = Request::builder().uri("/scalar").body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
