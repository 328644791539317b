//! Bilingual message table for calculator output.
//!
//! Every user-facing sentence lives in [`template`], keyed by
//! `(Locale, MessageKind)`. Templates carry a single positional `{}` slot that
//! is filled at runtime with `formatx`.

use formatx::formatx;

use crate::error::CalcError;
use crate::models::calculator::{CalculationKind, CalculationResult};
use crate::models::preferences::Locale;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    PowerResult,
    PanelResult,
    BatteryResult,
    InvalidInput,
    OutOfRange,
    ResultOverflow,
}

impl From<CalculationKind> for MessageKind {
    fn from(kind: CalculationKind) -> Self {
        match kind {
            CalculationKind::Power => MessageKind::PowerResult,
            CalculationKind::PanelCount => MessageKind::PanelResult,
            CalculationKind::BatteryCapacity => MessageKind::BatteryResult,
        }
    }
}

impl From<&CalcError> for MessageKind {
    fn from(err: &CalcError) -> Self {
        match err {
            CalcError::InvalidInput { .. } => MessageKind::InvalidInput,
            CalcError::OutOfRange { .. } => MessageKind::OutOfRange,
            CalcError::ResultOverflow { .. } => MessageKind::ResultOverflow,
        }
    }
}

pub fn template(locale: Locale, kind: MessageKind) -> &'static str {
    use Locale::{Ar, En};
    use MessageKind::*;

    match (locale, kind) {
        (En, PowerResult) => "Power Output: {} Watts",
        (Ar, PowerResult) => "القدرة الناتجة: {} واط",
        (En, PanelResult) => "You need approximately {} solar panels.",
        (Ar, PanelResult) => "تحتاج تقريباً إلى {} لوح شمسي.",
        (En, BatteryResult) => "Recommended Battery Capacity (for safe DoD): {} Ah",
        (Ar, BatteryResult) => "سعة البطارية المقترحة (لضمان تشغيل آمن): {} أمبير/ساعة",
        (En, InvalidInput) => "Please enter valid numbers.",
        (Ar, InvalidInput) => "يرجى إدخال قيم صحيحة",
        (En, OutOfRange) => "Please enter positive values.",
        (Ar, OutOfRange) => "يرجى إدخال قيم موجبة",
        (En, ResultOverflow) => "The result is too large to calculate.",
        (Ar, ResultOverflow) => "النتيجة كبيرة جداً ولا يمكن حسابها",
    }
}

/// Explicit rendering configuration; callers decide the locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderContext {
    pub locale: Locale,
}

impl RenderContext {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn render_result(&self, result: &CalculationResult) -> String {
        let tpl = template(self.locale, result.kind.into());
        let value = result.formatted_value();
        formatx!(tpl, value).unwrap_or_else(|e| {
            tracing::warn!(error = ?e, template = tpl, "message template failed to format");
            format!("{tpl} ({})", result.formatted_value())
        })
    }

    pub fn render_error(&self, err: &CalcError) -> String {
        template(self.locale, err.into()).to_string()
    }
}
