use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};

use super::domain::ApplicantInput;
use super::engine::ScoreEngine;
use crate::calculators::error::CalculationError;

/// Router exposing the score estimator.
pub fn recruitment_router(engine: Arc<ScoreEngine>) -> Router {
    Router::new()
        .route("/api/v1/recruitment/score", post(score_handler))
        .with_state(engine)
}

pub(crate) async fn score_handler(
    State(engine): State<Arc<ScoreEngine>>,
    payload: Result<Json<ApplicantInput>, JsonRejection>,
) -> Response {
    let Json(input) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            return CalculationError::invalid("body", rejection.body_text()).into_response()
        }
    };

    match engine.evaluate(&input) {
        Ok(outcome) => (StatusCode::OK, Json(outcome)).into_response(),
        Err(error) => {
            tracing::warn!(%error, "rejected recruitment score request");
            error.into_response()
        }
    }
}
