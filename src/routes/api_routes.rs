use axum::{routing::{get, post}, Router};

use crate::controllers::calculator_controller::{calculate_battery, calculate_panels, calculate_power};
use crate::controllers::preferences_controller::{
    get_preferences, toggle_language, toggle_theme, update_preferences,
};
use crate::shared_state::AppState;

/// Build the `/api/*` sub-router. State is attached by the caller.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Calculators
        .route("/calculators/power",            post(calculate_power))
        .route("/calculators/panels",           post(calculate_panels))
        .route("/calculators/battery",          post(calculate_battery))
        // Preferences
        .route("/preferences",                  get(get_preferences).put(update_preferences))
        .route("/preferences/language/toggle",  post(toggle_language))
        .route("/preferences/theme/toggle",     post(toggle_theme))
}
