//! Solar sizing calculators.
//!
//! All three operations take raw form text, validate every field before doing
//! any arithmetic, and are pure: the same inputs always give the same result.

use crate::error::CalcError;
use crate::models::calculator::{BatteryChemistry, CalculationKind, CalculationResult};

/// Daily peak-sun-hour equivalent used for panel sizing (northern Iraq average).
pub const SUN_HOURS: f64 = 5.0;
/// 20 % headroom for wiring, inverter and soiling losses.
pub const LOSS_FACTOR: f64 = 1.2;

/// Parse a trimmed form field into a finite `f64`.
pub fn parse_field(field: &'static str, raw: &str) -> Result<f64, CalcError> {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(CalcError::InvalidInput { field }),
    }
}

fn non_negative(field: &'static str, v: f64) -> Result<f64, CalcError> {
    if v < 0.0 { Err(CalcError::OutOfRange { field }) } else { Ok(v) }
}

fn positive(field: &'static str, v: f64) -> Result<f64, CalcError> {
    if v > 0.0 { Ok(v) } else { Err(CalcError::OutOfRange { field }) }
}

/// Rejects non-finite results and folds `-0.0` into `0.0` so nothing renders
/// as "-0".
fn finish(kind: CalculationKind, value: f64) -> Result<CalculationResult, CalcError> {
    if !value.is_finite() {
        return Err(CalcError::ResultOverflow { field: "result" });
    }
    Ok(CalculationResult {
        kind,
        value: value + 0.0,
    })
}

/// P = V × I
pub fn compute_power(volts: &str, amps: &str) -> Result<CalculationResult, CalcError> {
    let volts = parse_field("volts", volts)?;
    let amps = parse_field("amps", amps)?;

    finish(CalculationKind::Power, volts * amps)
}

/// Number of panels covering `daily_usage_kwh` at [`SUN_HOURS`] with
/// [`LOSS_FACTOR`] headroom, rounded up.
pub fn compute_panel_count(daily_usage_kwh: &str, panel_watt: &str) -> Result<CalculationResult, CalcError> {
    let usage = parse_field("daily_usage_kwh", daily_usage_kwh)?;
    let panel_watt = parse_field("panel_watt", panel_watt)?;
    let usage = non_negative("daily_usage_kwh", usage)?;
    let panel_watt = positive("panel_watt", panel_watt)?;

    let daily_wh = usage * 1000.0;
    let required_capacity_w = (daily_wh / SUN_HOURS) * LOSS_FACTOR;

    finish(CalculationKind::PanelCount, (required_capacity_w / panel_watt).ceil())
}

/// Battery bank size in Ah, derated by the chemistry's depth of discharge.
pub fn compute_battery_capacity(
    load_watts: &str,
    hours: &str,
    system_voltage: &str,
    chemistry: BatteryChemistry,
) -> Result<CalculationResult, CalcError> {
    let load = parse_field("load_watts", load_watts)?;
    let hours = parse_field("hours", hours)?;
    let voltage = parse_field("system_voltage", system_voltage)?;
    let load = non_negative("load_watts", load)?;
    let hours = non_negative("hours", hours)?;
    let voltage = positive("system_voltage", voltage)?;

    let energy_wh = load * hours;
    let capacity_ah = (energy_wh / voltage) / chemistry.depth_of_discharge();

    finish(CalculationKind::BatteryCapacity, capacity_ah.ceil())
}
