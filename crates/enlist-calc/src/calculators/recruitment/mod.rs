//! First-round screening score estimator for technical-track army applicants.

pub mod bonus;
pub mod cutoff;
pub mod domain;
pub mod engine;
pub mod router;
pub mod tables;

#[cfg(test)]
mod tests;

pub use bonus::{korean_tests_abolished, resolve_bonus, BonusBreakdown, BonusSelection};
pub use cutoff::{
    compare_to_cutoff, Comparison, ComparisonStatus, CutoffComparison, CutoffImportError,
    CutoffLookup, CutoffReport, CutoffTable,
};
pub use domain::{
    ApplicantCategory, ApplicantInput, Attendance, BonusClaim, BonusGroup, Certificate, Major,
    Specialty,
};
pub use engine::{compute_score, ScoreEngine, ScoreOutcome, ScoreResult};
pub use router::recruitment_router;
pub use tables::{ScoreCeiling, MAX_BONUS_POINTS, MAX_SOCIAL_BONUS_POINTS};
