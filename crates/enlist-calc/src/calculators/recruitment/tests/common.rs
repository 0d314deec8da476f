use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::calculators::calendar::YearMonth;
use crate::calculators::recruitment::{
    recruitment_router, ApplicantCategory, ApplicantInput, Attendance, BonusClaim, Certificate,
    CutoffTable, Major, ScoreEngine, Specialty,
};

pub(super) fn month(year: i32, month: u32) -> YearMonth {
    YearMonth::new(year, month).expect("valid month")
}

pub(super) fn general_applicant() -> ApplicantInput {
    ApplicantInput::new(
        ApplicantCategory::General,
        Certificate::NationalEngineer,
        Attendance::Absence0,
    )
}

pub(super) fn driving_applicant() -> ApplicantInput {
    let mut input = ApplicantInput::new(
        ApplicantCategory::Specialized,
        Certificate::LargeSpecial,
        Attendance::Absence7Plus,
    );
    input.change_specialty(Specialty::Driving);
    input
}

/// Specialized electronics applicant scoring 104 (50 + 40 + 10 + 4).
pub(super) fn electronics_applicant() -> ApplicantInput {
    let mut input = ApplicantInput::new(
        ApplicantCategory::Specialized,
        Certificate::NationalEngineer,
        Attendance::Absence0,
    );
    input.change_specialty(Specialty::Electronics);
    input.major = Major::University4YearCompleted;
    input.bonus_claims = vec![BonusClaim::NationalMerit];
    input
}

pub(super) fn engine() -> ScoreEngine {
    ScoreEngine::with_published_cutoffs()
}

pub(super) fn router() -> axum::Router {
    recruitment_router(Arc::new(engine()))
}

pub(super) fn router_with_table(table: CutoffTable) -> axum::Router {
    recruitment_router(Arc::new(ScoreEngine::new(Arc::new(table))))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
