//! Recruitment-score and installment-savings calculators.
//!
//! Both engines follow the same shape: a typed input record is validated at
//! the boundary, run through static lookup tables, and summed into a typed
//! breakdown. Neither engine performs I/O or keeps state between calls.

pub mod calendar;
pub mod error;
pub mod format;
pub mod recruitment;
pub mod savings;

use std::sync::Arc;

use axum::Router;
use serde::de::value::StrDeserializer;
use serde::de::{DeserializeOwned, IntoDeserializer};

pub use calendar::YearMonth;
pub use error::CalculationError;
pub use recruitment::{compute_score, CutoffTable, ScoreEngine, ScoreResult};
pub use savings::{compute_savings, SavingsEngine, SavingsResult, SavingsTables};

/// Both calculator APIs under one router.
pub fn calculator_router(score: Arc<ScoreEngine>, savings: Arc<SavingsEngine>) -> Router {
    recruitment::recruitment_router(score).merge(savings::savings_router(savings))
}

/// Parse a bare enum tag (`"nationalEngineer"`) using the serde names, so the
/// CLI, CSV and JSON boundaries accept exactly the same spellings.
pub(crate) fn parse_variant<T: DeserializeOwned>(
    field: &'static str,
    raw: &str,
) -> Result<T, CalculationError> {
    let deserializer: StrDeserializer<'_, serde::de::value::Error> =
        raw.trim().into_deserializer();
    T::deserialize(deserializer).map_err(|_| {
        CalculationError::invalid(field, format!("unknown value '{}'", raw.trim()))
    })
}
