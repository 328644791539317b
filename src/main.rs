mod routes;
mod controllers;
mod services;
mod models;
mod api_docs;
mod shared_state;
mod config;
mod error;

use std::net::SocketAddr;
use std::process::ExitCode;
use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::error::StartupError;
use crate::routes::build_router;
use crate::services::preferences::{JsonFileStore, Preferences};
use crate::shared_state::AppState;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    let config_path = std::env::var("SOLAR_CALC_CONFIG").unwrap_or_else(|_| "config.json".to_string());
    match run(&config_path).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(path = %config_path, error = %e, "solar-calc stopped");
            ExitCode::FAILURE
        }
    }
}

/// Loads configuration and state, then serves until the listener fails.
async fn run(config_path: &str) -> Result<(), StartupError> {
    // 1. Load configuration
    let config = Config::load_or_default(config_path)?;

    // 2. Open the preference store
    let preferences = open_preferences(&config)?;
    let state = AppState::new(preferences);
    let prefs = state.preferences.load();
    info!(language = %prefs.language, theme = %prefs.theme, "preferences loaded");

    // 3. Start Axum HTTP server
    let app = build_router(state, &config.server.static_dir, config.server.cors_permissive);
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    info!("API Server listening on http://{}", addr);
    info!("Scalar UI: http://{}/scalar", addr);

    axum_server::bind(addr).serve(app.into_make_service()).await?;
    Ok(())
}

fn open_preferences(config: &Config) -> Result<Preferences, StartupError> {
    match &config.preferences.store_path {
        Some(path) => {
            let store = JsonFileStore::open(path)?;
            info!(path = %path, "preferences persisted to file");
            Ok(Preferences::new(Arc::new(store)))
        }
        None => {
            info!("preferences kept in memory");
            Ok(Preferences::in_memory())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ConfigError, StoreError};

    #[tokio::test]
    async fn test_malformed_config_fails_startup() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ \"server\": ").unwrap();
        let err = run(path.to_str().unwrap()).await.unwrap_err();
        assert!(matches!(err, StartupError::Config(ConfigError::Parse(_))));
    }

    #[tokio::test]
    async fn test_corrupt_preference_file_fails_startup() {
        let dir = tempfile::tempdir().unwrap();
        let prefs_path = dir.path().join("prefs.json");
        std::fs::write(&prefs_path, "not json").unwrap();
        let config_path = dir.path().join("config.json");
        let config = serde_json::json!({ "preferences": { "store_path": prefs_path } });
        std::fs::write(&config_path, config.to_string()).unwrap();

        let err = run(config_path.to_str().unwrap()).await.unwrap_err();
        assert!(matches!(err, StartupError::Store(StoreError::Serde(_))));
    }

    #[test]
    fn test_in_memory_store_without_path() {
        let prefs = open_preferences(&Config::default()).unwrap();
        assert_eq!(prefs.load(), Default::default());
    }
}
