pub mod api_routes;

use axum::{response::Html, routing::get, Router};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_scalar::Scalar;

use crate::api_docs::ApiDoc;
use crate::controllers::system_controller::health;
use crate::shared_state::AppState;
use self::api_routes::api_routes;

/// Full application router: `/api/*`, `/health`, `/scalar`, and the static
/// site as fallback.
pub fn build_router(state: AppState, static_dir: &str, cors_permissive: bool) -> Router {
    let router = Router::new()
        .nest("/api", api_routes())
        .route("/health", get(health))
        .route("/scalar", get(|| async {
            Html(Scalar::new(ApiDoc::openapi()).to_html())
        }))
        .fallback_service(ServeDir::new(static_dir))
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    if cors_permissive {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}
