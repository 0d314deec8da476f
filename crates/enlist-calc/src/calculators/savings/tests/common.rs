use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::calculators::calendar::YearMonth;
use crate::calculators::savings::{savings_router, Branch, Contribution, SavingsEngine, SavingsInput};

pub(super) fn month(year: i32, month: u32) -> YearMonth {
    YearMonth::new(year, month).expect("valid month")
}

/// 2025-06 army enlistee saving the 55만원 maximum at 5%.
pub(super) fn army_2025_input() -> SavingsInput {
    SavingsInput::new(
        month(2025, 6),
        Branch::ArmyMarines,
        Contribution::Flat { monthly: 55 },
        5.0,
    )
}

/// 2024-06 army enlistee saving 40만원 in 2024 and 55만원 from 2025.
pub(super) fn army_2024_split_input() -> SavingsInput {
    SavingsInput::new(
        month(2024, 6),
        Branch::ArmyMarines,
        Contribution::Split {
            year_2024: 40,
            year_2025: 55,
        },
        5.0,
    )
}

pub(super) fn engine() -> SavingsEngine {
    SavingsEngine::default()
}

pub(super) fn router() -> axum::Router {
    savings_router(Arc::new(engine()))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 256 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
