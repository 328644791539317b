use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::calculator::CalculationErrorResponse;
use crate::services::messages::RenderContext;

/// Rejection raised by the calculators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    /// The raw text did not parse to a finite number.
    #[error("field `{field}` is not a valid number")]
    InvalidInput { field: &'static str },
    /// The value parsed but lies outside the domain of the formula
    /// (zero/negative divisor, negative quantity).
    #[error("field `{field}` is out of range")]
    OutOfRange { field: &'static str },
    /// Valid inputs whose result does not fit in an `f64`.
    #[error("result of `{field}` is not a finite number")]
    ResultOverflow { field: &'static str },
}

impl CalcError {
    pub fn field(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { field }
            | CalcError::OutOfRange { field }
            | CalcError::ResultOverflow { field } => field,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::OutOfRange { .. } => "OUT_OF_RANGE",
            CalcError::ResultOverflow { .. } => "RESULT_OVERFLOW",
        }
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("preference store I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("preference file is not valid JSON: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("preference store lock poisoned")]
    Poisoned,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Reasons the process refuses to start or stops serving.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("HTTP server failed: {0}")]
    Serve(#[from] std::io::Error),
}

/// Errors surfaced by HTTP handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{error}")]
    Calculation {
        error: CalcError,
        ctx: RenderContext,
    },
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("preference task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl ApiError {
    pub fn calculation(error: CalcError, ctx: RenderContext) -> Self {
        ApiError::Calculation { error, ctx }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Calculation { error, ctx } => {
                tracing::debug!(field = error.field(), code = error.code(), "calculation rejected");
                let body = CalculationErrorResponse::new(&error, ctx);
                (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
            }
            ApiError::Store(e) => {
                tracing::error!(error = %e, "preference store failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::json!({ "error": "Preference store unavailable" })),
                )
                    .into_response()
            }
            ApiError::Task(e) => {
                tracing::error!(error = %e, "preference task panicked or was cancelled");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::json!({ "error": "Preference store unavailable" })),
                )
                    .into_response()
            }
        }
    }
}
