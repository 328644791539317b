use axum::{extract::State, Json};

use crate::error::{ApiError, StoreError};
use crate::models::preferences::{PreferencesResponse, PreferencesUpdate, SitePreferences};
use crate::services::preferences::Preferences;
use crate::shared_state::AppState;

/// Store writes may touch the filesystem, so they run off the async workers.
async fn write_preferences<F>(prefs: Preferences, write: F) -> Result<SitePreferences, ApiError>
where
    F: FnOnce(&Preferences) -> Result<SitePreferences, StoreError> + Send + 'static,
{
    let saved = tokio::task::spawn_blocking(move || write(&prefs)).await??;
    Ok(saved)
}

/// GET /api/preferences
/// Current language and theme, plus the page attributes they imply
#[utoipa::path(
    get,
    path = "/api/preferences",
    responses(
        (status = 200, description = "Stored preferences", body = PreferencesResponse)
    )
)]
pub async fn get_preferences(State(state): State<AppState>) -> Json<PreferencesResponse> {
    Json(state.preferences.load().into())
}

/// PUT /api/preferences
/// Set language and/or theme
///
/// Omitted fields are left unchanged. Values other than `en`/`ar` and
/// `light`/`dark` are rejected by body validation.
#[utoipa::path(
    put,
    path = "/api/preferences",
    request_body = PreferencesUpdate,
    responses(
        (status = 200, description = "Updated preferences", body = PreferencesResponse),
        (status = 422, description = "Unknown language or theme"),
        (status = 500, description = "Preference store unavailable")
    )
)]
pub async fn update_preferences(
    State(state): State<AppState>,
    Json(update): Json<PreferencesUpdate>,
) -> Result<Json<PreferencesResponse>, ApiError> {
    let saved = write_preferences(state.preferences.clone(), move |prefs| {
        if let Some(language) = update.language {
            prefs.set_language(language)?;
        }
        if let Some(theme) = update.theme {
            prefs.set_theme(theme)?;
        }
        Ok(prefs.load())
    })
    .await?;
    Ok(Json(saved.into()))
}

/// POST /api/preferences/language/toggle
/// Switch between English (ltr) and Arabic (rtl)
#[utoipa::path(
    post,
    path = "/api/preferences/language/toggle",
    responses(
        (status = 200, description = "Preferences after the switch", body = PreferencesResponse),
        (status = 500, description = "Preference store unavailable")
    )
)]
pub async fn toggle_language(State(state): State<AppState>) -> Result<Json<PreferencesResponse>, ApiError> {
    let saved = write_preferences(state.preferences.clone(), Preferences::toggle_language).await?;
    Ok(Json(saved.into()))
}

/// POST /api/preferences/theme/toggle
/// Switch between light and dark
#[utoipa::path(
    post,
    path = "/api/preferences/theme/toggle",
    responses(
        (status = 200, description = "Preferences after the switch", body = PreferencesResponse),
        (status = 500, description = "Preference store unavailable")
    )
)]
pub async fn toggle_theme(State(state): State<AppState>) -> Result<Json<PreferencesResponse>, ApiError> {
    let saved = write_preferences(state.preferences.clone(), Preferences::toggle_theme).await?;
    Ok(Json(saved.into()))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        Router,
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use std::sync::Arc;

    use crate::routes::build_router;
    use crate::services::preferences::{JsonFileStore, Preferences};
    use crate::shared_state::AppState;

    async fn send(app: Router, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(b) => {
                builder = builder.header("content-type", "application/json");
                Body::from(b.to_string())
            }
            None => Body::empty(),
        };
        let response = app.oneshot(builder.body(body).unwrap()).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn test_get_preferences_defaults() {
        let app = build_router(AppState::new(Preferences::in_memory()), "static", false);
        let (status, json) = send(app, "GET", "/api/preferences", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["preferences"]["language"], "en");
        assert_eq!(json["preferences"]["theme"], "light");
        assert_eq!(json["chrome"]["dir"], "ltr");
        assert_eq!(json["chrome"]["language_toggle_label"], "العربية");
        assert_eq!(json["chrome"]["theme_icon"], "moon");
    }

    #[tokio::test]
    async fn test_toggle_endpoints_persist_between_requests() {
        let app = build_router(AppState::new(Preferences::in_memory()), "static", false);

        let (status, json) = send(app.clone(), "POST", "/api/preferences/language/toggle", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["chrome"]["dir"], "rtl");
        assert_eq!(json["chrome"]["language_toggle_label"], "English");

        let (_, json) = send(app.clone(), "POST", "/api/preferences/theme/toggle", None).await;
        assert_eq!(json["preferences"]["theme"], "dark");
        assert_eq!(json["chrome"]["theme_icon"], "sun");

        let (_, json) = send(app, "GET", "/api/preferences", None).await;
        assert_eq!(json["preferences"]["language"], "ar");
        assert_eq!(json["preferences"]["theme"], "dark");
    }

    #[tokio::test]
    async fn test_partial_update_keeps_other_field() {
        let prefs = Preferences::in_memory();
        prefs.toggle_theme().unwrap();
        let app = build_router(AppState::new(prefs), "static", false);
        let (status, json) = send(app, "PUT", "/api/preferences", Some(r#"{"language":"ar"}"#)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["preferences"]["language"], "ar");
        assert_eq!(json["preferences"]["theme"], "dark");
    }

    #[tokio::test]
    async fn test_toggle_writes_through_file_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        let store = JsonFileStore::open(&path).unwrap();
        let app = build_router(AppState::new(Preferences::new(Arc::new(store))), "static", false);

        let (status, _) = send(app, "POST", "/api/preferences/theme/toggle", None).await;
        assert_eq!(status, StatusCode::OK);
        let saved = std::fs::read_to_string(&path).unwrap();
        assert!(saved.contains("\"dark\""), "file was {saved}");
    }

    #[tokio::test]
    async fn test_failed_write_is_500_and_not_reported_as_saved() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        let store = JsonFileStore::open(&path).unwrap();
        std::fs::create_dir(&path).unwrap();
        let app = build_router(AppState::new(Preferences::new(Arc::new(store))), "static", false);

        let (status, _) = send(app.clone(), "POST", "/api/preferences/language/toggle", None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let (_, json) = send(app, "GET", "/api/preferences", None).await;
        assert_eq!(json["preferences"]["language"], "en");
    }

    #[tokio::test]
    async fn test_unknown_language_is_rejected() {
        let app = build_router(AppState::new(Preferences::in_memory()), "static", false);
        let (status, _) = send(app, "PUT", "/api/preferences", Some(r#"{"language":"fr"}"#)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }
}
