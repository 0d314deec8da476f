use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// The only failure mode of the calculation core: the caller handed over a
/// value outside the declared domain. Policy substitutions and caps never
/// surface here.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalculationError {
    #[error("invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },
}

impl CalculationError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    pub fn field(&self) -> &'static str {
        match self {
            CalculationError::InvalidInput { field, .. } => field,
        }
    }
}

impl IntoResponse for CalculationError {
    fn into_response(self) -> Response {
        let payload = json!({
            "error": self.to_string(),
            "field": self.field(),
        });
        (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
    }
}
