use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::CalcError;
use crate::models::preferences::{Locale, TextDirection};
use crate::services::messages::RenderContext;

// ─── Raw form input ──────────────────────────────────────────────────────────

/// A form field as submitted: usually text, but JSON clients may send numbers.
/// Parsing into `f64` happens in the calculator so that bad text becomes a
/// localized rejection instead of a body-deserialisation failure.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FormValue {
    Number(f64),
    Text(String),
}

impl Default for FormValue {
    fn default() -> Self {
        FormValue::Text(String::new())
    }
}

impl FormValue {
    pub fn to_text(&self) -> String {
        match self {
            FormValue::Number(n) => n.to_string(),
            FormValue::Text(s) => s.clone(),
        }
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct PowerRequest {
    #[serde(default)]
    #[schema(value_type = String, example = "12")]
    pub volts: FormValue,
    #[serde(default)]
    #[schema(value_type = String, example = "5")]
    pub amps: FormValue,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct PanelRequest {
    /// Daily consumption in kWh
    #[serde(default)]
    #[schema(value_type = String, example = "10")]
    pub daily_usage_kwh: FormValue,
    /// Rated output of a single panel in W
    #[serde(default)]
    #[schema(value_type = String, example = "300")]
    pub panel_watt: FormValue,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct BatteryRequest {
    #[serde(default)]
    #[schema(value_type = String, example = "100")]
    pub load_watts: FormValue,
    #[serde(default)]
    #[schema(value_type = String, example = "5")]
    pub hours: FormValue,
    #[serde(default)]
    #[schema(value_type = String, example = "12")]
    pub system_voltage: FormValue,
    #[serde(default)]
    pub chemistry: BatteryChemistry,
}

// ─── Battery chemistry ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum BatteryChemistry {
    /// 50 % usable capacity
    #[default]
    LeadAcid,
    /// 80 % usable capacity
    Lithium,
}

impl BatteryChemistry {
    pub fn depth_of_discharge(self) -> f64 {
        match self {
            BatteryChemistry::LeadAcid => 0.5,
            BatteryChemistry::Lithium => 0.8,
        }
    }
}

// ─── Results ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum CalculationKind {
    Power,
    PanelCount,
    BatteryCapacity,
}

impl CalculationKind {
    pub fn unit(self) -> &'static str {
        match self {
            CalculationKind::Power => "W",
            CalculationKind::PanelCount => "panels",
            CalculationKind::BatteryCapacity => "Ah",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculationResult {
    pub kind: CalculationKind,
    pub value: f64,
}

impl CalculationResult {
    /// Power keeps two decimals; counts and capacities are already whole.
    pub fn formatted_value(&self) -> String {
        match self.kind {
            CalculationKind::Power => format!("{:.2}", self.value),
            CalculationKind::PanelCount | CalculationKind::BatteryCapacity => {
                format!("{:.0}", self.value)
            }
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CalculationResponse {
    pub kind: CalculationKind,
    pub value: f64,
    pub formatted_value: String,
    pub unit: String,
    /// Localized sentence for the result region
    pub message: String,
    pub locale: Locale,
    pub dir: TextDirection,
}

impl CalculationResponse {
    pub fn new(result: &CalculationResult, ctx: RenderContext) -> Self {
        Self {
            kind: result.kind,
            value: result.value,
            formatted_value: result.formatted_value(),
            unit: result.kind.unit().to_string(),
            message: ctx.render_result(result),
            locale: ctx.locale,
            dir: ctx.locale.direction(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CalculationErrorResponse {
    /// `INVALID_INPUT`, `OUT_OF_RANGE` or `RESULT_OVERFLOW`
    pub error: String,
    pub field: String,
    pub message: String,
    pub locale: Locale,
    pub dir: TextDirection,
}

impl CalculationErrorResponse {
    pub fn new(error: &CalcError, ctx: RenderContext) -> Self {
        Self {
            error: error.code().to_string(),
            field: error.field().to_string(),
            message: ctx.render_error(error),
            locale: ctx.locale,
            dir: ctx.locale.direction(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_value_accepts_text_and_numbers() {
        let req: PowerRequest = serde_json::from_str(r#"{ "volts": "12.5", "amps": 4 }"#).unwrap();
        assert_eq!(req.volts, FormValue::Text("12.5".into()));
        assert_eq!(req.amps, FormValue::Number(4.0));
        assert_eq!(req.amps.to_text(), "4");
    }

    #[test]
    fn test_missing_fields_become_empty_text() {
        let req: BatteryRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.system_voltage.to_text(), "");
        assert_eq!(req.chemistry, BatteryChemistry::LeadAcid);
    }

    #[test]
    fn test_formatted_value_precision() {
        let power = CalculationResult { kind: CalculationKind::Power, value: 60.0 };
        assert_eq!(power.formatted_value(), "60.00");
        let panels = CalculationResult { kind: CalculationKind::PanelCount, value: 8.0 };
        assert_eq!(panels.formatted_value(), "8");
    }
}
