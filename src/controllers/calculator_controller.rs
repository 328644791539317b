use axum::{
    extract::{Query, State},
    Json,
};

use crate::error::ApiError;
use crate::models::calculator::{
    BatteryRequest, CalculationErrorResponse, CalculationResponse, PanelRequest, PowerRequest,
};
use crate::models::preferences::LocaleQuery;
use crate::services::calculator;
use crate::shared_state::AppState;

/// POST /api/calculators/power
/// Power output from voltage and current
///
/// Multiplies volts by amps and reports the wattage with two decimals.
#[utoipa::path(
    post,
    path = "/api/calculators/power",
    params(LocaleQuery),
    request_body = PowerRequest,
    responses(
        (status = 200, description = "Computed wattage", body = CalculationResponse),
        (status = 422, description = "A field is not a valid number", body = CalculationErrorResponse)
    )
)]
pub async fn calculate_power(
    State(state): State<AppState>,
    Query(query): Query<LocaleQuery>,
    Json(req): Json<PowerRequest>,
) -> Result<Json<CalculationResponse>, ApiError> {
    let ctx = state.render_context(query.lang);
    let result = calculator::compute_power(&req.volts.to_text(), &req.amps.to_text())
        .map_err(|e| ApiError::calculation(e, ctx))?;
    Ok(Json(CalculationResponse::new(&result, ctx)))
}

/// POST /api/calculators/panels
/// Number of solar panels for a daily consumption
///
/// Sizes the array for 5 peak sun hours with a 20 % loss buffer and rounds up.
#[utoipa::path(
    post,
    path = "/api/calculators/panels",
    params(LocaleQuery),
    request_body = PanelRequest,
    responses(
        (status = 200, description = "Panel count", body = CalculationResponse),
        (status = 422, description = "Invalid or non-positive input", body = CalculationErrorResponse)
    )
)]
pub async fn calculate_panels(
    State(state): State<AppState>,
    Query(query): Query<LocaleQuery>,
    Json(req): Json<PanelRequest>,
) -> Result<Json<CalculationResponse>, ApiError> {
    let ctx = state.render_context(query.lang);
    let result = calculator::compute_panel_count(
        &req.daily_usage_kwh.to_text(),
        &req.panel_watt.to_text(),
    )
    .map_err(|e| ApiError::calculation(e, ctx))?;
    Ok(Json(CalculationResponse::new(&result, ctx)))
}

/// POST /api/calculators/battery
/// Battery bank capacity in Ah
#[utoipa::path(
    post,
    path = "/api/calculators/battery",
    params(LocaleQuery),
    request_body = BatteryRequest,
    responses(
        (status = 200, description = "Recommended capacity", body = CalculationResponse),
        (status = 422, description = "Invalid or non-positive input", body = CalculationErrorResponse)
    )
)]
pub async fn calculate_battery(
    State(state): State<AppState>,
    Query(query): Query<LocaleQuery>,
    Json(req): Json<BatteryRequest>,
) -> Result<Json<CalculationResponse>, ApiError> {
    let ctx = state.render_context(query.lang);
    let result = calculator::compute_battery_capacity(
        &req.load_watts.to_text(),
        &req.hours.to_text(),
        &req.system_voltage.to_text(),
        req.chemistry,
    )
    .map_err(|e| ApiError::calculation(e, ctx))?;
    Ok(Json(CalculationResponse::new(&result, ctx)))
}
