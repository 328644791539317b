use utoipa::OpenApi;

use crate::controllers::{calculator_controller, preferences_controller, system_controller};
use crate::models::{calculator, preferences, system};

#[derive(OpenApi)]
#[openapi(
    paths(
        calculator_controller::calculate_power,
        calculator_controller::calculate_panels,
        calculator_controller::calculate_battery,
        preferences_controller::get_preferences,
        preferences_controller::update_preferences,
        preferences_controller::toggle_language,
        preferences_controller::toggle_theme,
        system_controller::health
    ),
    components(
        schemas(
            calculator::PowerRequest,
            calculator::PanelRequest,
            calculator::BatteryRequest,
            calculator::BatteryChemistry,
            calculator::CalculationKind,
            calculator::CalculationResponse,
            calculator::CalculationErrorResponse,
            preferences::Locale,
            preferences::Theme,
            preferences::TextDirection,
            preferences::SitePreferences,
            preferences::PageChrome,
            preferences::PreferencesResponse,
            preferences::PreferencesUpdate,
            system::HealthStatus
        )
    ),
    tags(
        (name = "solar-calc", description = "Solar sizing calculators and site preferences")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_calculators() {
        let doc = ApiDoc::openapi();
        for path in ["/api/calculators/power", "/api/calculators/panels", "/api/calculators/battery"] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
