use std::sync::Arc;

use serde::Serialize;

use super::bonus::{korean_tests_abolished, resolve_bonus, BonusBreakdown};
use super::cutoff::{compare_to_cutoff, CutoffReport, CutoffTable};
use super::domain::{ApplicantCategory, ApplicantInput, Certificate, Specialty};
use super::tables::{attendance_points, certificate_points, major_points, ScoreCeiling};
use crate::calculators::error::CalculationError;
use crate::calculators::format::percent_of;

/// Component scores of one estimate. The total is derived at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    certificate_score: u8,
    major_score: u8,
    attendance_score: u8,
    bonus_points_score: u8,
    total_score: u8,
}

impl ScoreResult {
    pub fn from_components(certificate: u8, major: u8, attendance: u8, bonus: u8) -> Self {
        Self {
            certificate_score: certificate,
            major_score: major,
            attendance_score: attendance,
            bonus_points_score: bonus,
            total_score: certificate + major + attendance + bonus,
        }
    }

    pub fn certificate_score(&self) -> u8 {
        self.certificate_score
    }

    pub fn major_score(&self) -> u8 {
        self.major_score
    }

    pub fn attendance_score(&self) -> u8 {
        self.attendance_score
    }

    pub fn bonus_points_score(&self) -> u8 {
        self.bonus_points_score
    }

    pub fn total_score(&self) -> u8 {
        self.total_score
    }

    /// Share of the category ceiling, for progress bars.
    pub fn percent_of_ceiling(&self, ceiling: &ScoreCeiling) -> u8 {
        percent_of(u32::from(self.total_score), u32::from(ceiling.total))
    }
}

/// Score the input's selections against the point tables.
pub fn compute_score(input: &ApplicantInput) -> Result<ScoreResult, CalculationError> {
    let specialty = input.resolved_specialty()?;
    Ok(score_components(input, specialty).0)
}

fn score_components(input: &ApplicantInput, specialty: Specialty) -> (ScoreResult, BonusBreakdown) {
    let certificate = if input.certificate.is_driving_licence() && specialty != Specialty::Driving {
        Certificate::None
    } else {
        input.certificate
    };

    let bonus = resolve_bonus(&input.bonus_claims, input.recruitment_month);
    let result = ScoreResult::from_components(
        certificate_points(input.category, certificate),
        major_points(input.category, input.major),
        attendance_points(input.category, input.attendance),
        bonus.total,
    );
    (result, bonus)
}

/// Everything the score page shows for one estimate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreOutcome {
    pub category: ApplicantCategory,
    pub specialty: Specialty,
    pub result: ScoreResult,
    pub ceiling: ScoreCeiling,
    pub percent_of_ceiling: u8,
    pub bonus: BonusBreakdown,
    /// Set when the recruitment month no longer credits Korean tests.
    pub korean_tests_abolished: bool,
    pub cutoff: Option<CutoffReport>,
}

/// Score estimator bound to a cutoff dataset.
pub struct ScoreEngine {
    cutoffs: Arc<CutoffTable>,
}

impl ScoreEngine {
    pub fn new(cutoffs: Arc<CutoffTable>) -> Self {
        Self { cutoffs }
    }

    pub fn with_published_cutoffs() -> Self {
        Self::new(Arc::new(CutoffTable::published()))
    }

    pub fn cutoffs(&self) -> &CutoffTable {
        &self.cutoffs
    }

    pub fn evaluate(&self, input: &ApplicantInput) -> Result<ScoreOutcome, CalculationError> {
        let specialty = input.resolved_specialty()?;
        let (result, bonus) = score_components(input, specialty);
        let ceiling = ScoreCeiling::for_category(input.category);
        let cutoff = input
            .recruitment_month
            .map(|month| compare_to_cutoff(result.total_score(), month, specialty, &self.cutoffs));

        tracing::debug!(
            category = input.category.label(),
            specialty = specialty.display_name(),
            total = result.total_score(),
            "computed recruitment score"
        );

        Ok(ScoreOutcome {
            category: input.category,
            specialty,
            result,
            ceiling,
            percent_of_ceiling: result.percent_of_ceiling(&ceiling),
            bonus,
            korean_tests_abolished: korean_tests_abolished(input.recruitment_month),
            cutoff,
        })
    }
}

impl Default for ScoreEngine {
    fn default() -> Self {
        Self::with_published_cutoffs()
    }
}
