use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

use super::banks::{interest_rate_options, BANK_RATES};
use super::domain::SavingsInput;
use super::engine::SavingsEngine;
use crate::calculators::error::CalculationError;

/// Router exposing the maturity estimator and its rate presets.
pub fn savings_router(engine: Arc<SavingsEngine>) -> Router {
    Router::new()
        .route("/api/v1/savings/maturity", post(maturity_handler))
        .route("/api/v1/savings/bank-rates", get(bank_rates_handler))
        .route("/api/v1/savings/interest-rates", get(interest_rates_handler))
        .with_state(engine)
}

pub(crate) async fn maturity_handler(
    State(engine): State<Arc<SavingsEngine>>,
    payload: Result<Json<SavingsInput>, JsonRejection>,
) -> Response {
    let Json(input) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            return CalculationError::invalid("body", rejection.body_text()).into_response()
        }
    };

    match engine.compute(&input) {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(error) => {
            tracing::warn!(%error, "rejected savings maturity request");
            error.into_response()
        }
    }
}

async fn bank_rates_handler() -> Response {
    let banks: Vec<_> = BANK_RATES
        .iter()
        .map(|bank| {
            json!({
                "bank": bank.bank,
                "base_rate": bank.base_rate,
                "preferential_rate": bank.preferential_rate,
                "total_rate": bank.total_rate(),
                "benefit": bank.benefit,
                "official_link": bank.official_link,
            })
        })
        .collect();
    (StatusCode::OK, Json(json!({ "banks": banks }))).into_response()
}

async fn interest_rates_handler() -> Response {
    (StatusCode::OK, Json(json!({ "rates": interest_rate_options() }))).into_response()
}
