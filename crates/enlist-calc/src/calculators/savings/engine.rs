use std::sync::Arc;

use serde::Serialize;

use super::domain::{Branch, InterestRate, Rank, SavingsInput};
use super::schedule::ContributionSchedule;
use super::tables::SavingsTables;
use crate::calculators::calendar::YearMonth;
use crate::calculators::error::CalculationError;

/// Interest income tax waived on this product, in tenths of a percent (15.4%).
const INTEREST_TAX_PER_MILLE: u128 = 154;

const BASIS_POINTS_PER_UNIT: u128 = 10_000;

/// Divide rounding half up.
fn div_round(numerator: u128, denominator: u128) -> u128 {
    (numerator + denominator / 2) / denominator
}

fn to_won(amount: u128, field: &'static str) -> Result<u64, CalculationError> {
    u64::try_from(amount)
        .map_err(|_| CalculationError::invalid(field, "amount exceeds the won range"))
}

/// Installment-savings interest: the average balance of equal monthly
/// deposits is `deposit * (months + 1) / (2 * months)`, held for `months / 12`
/// years, which reduces to `deposit * rate * (months + 1) / 24`.
pub fn installment_interest(
    total_deposit: u64,
    rate: InterestRate,
    months: u32,
) -> Result<u64, CalculationError> {
    let numerator =
        u128::from(total_deposit) * u128::from(rate.basis_points()) * (u128::from(months) + 1);
    to_won(div_round(numerator, BASIS_POINTS_PER_UNIT * 24), "contribution")
}

/// Payout components; `total` is their exact sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsBreakdown {
    pub total_deposit: u64,
    pub base_interest: u64,
    /// Reserved for split base/preferential rates; always zero with a
    /// combined rate.
    pub additional_interest: u64,
    pub government_match: u64,
    pub remaining_savings: u64,
}

impl SavingsBreakdown {
    pub fn total(&self) -> u64 {
        self.total_deposit
            + self.base_interest
            + self.additional_interest
            + self.government_match
            + self.remaining_savings
    }
}

/// Span of consecutive months served at one rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RankPeriod {
    pub rank: Rank,
    pub start: YearMonth,
    /// Last month at this rank, inclusive.
    pub end: YearMonth,
    pub months: u32,
    pub recommended_manwon: u32,
}

/// One month of the accrual walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SavingsMonth {
    pub month: YearMonth,
    pub rank: Rank,
    pub salary: u64,
    pub contribution: u64,
    /// Salary left after the contribution, before the residual rate.
    pub remaining: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SavingsResult {
    pub total: u64,
    pub breakdown: SavingsBreakdown,
    pub branch: Branch,
    pub service_months: u32,
    pub interest_rate: InterestRate,
    pub schedule: ContributionSchedule,
    pub rank_periods: Vec<RankPeriod>,
    pub months: Vec<SavingsMonth>,
    /// Income tax the holder would otherwise owe on the base interest.
    /// Informational; not part of `total`.
    pub tax_exemption_benefit: u64,
}

/// Maturity estimator bound to a set of pay and cap tables.
pub struct SavingsEngine {
    tables: Arc<SavingsTables>,
}

impl SavingsEngine {
    pub fn new(tables: Arc<SavingsTables>) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &SavingsTables {
        &self.tables
    }

    pub fn compute(&self, input: &SavingsInput) -> Result<SavingsResult, CalculationError> {
        let tables = self.tables.as_ref();
        let enlistment = input.enlistment;
        tables.check_enlistment(enlistment, SavingsTables::service_months(input.branch))?;
        let rate = input.interest()?;
        let residual_rate = input.residual_rate_basis_points()?;
        let schedule = ContributionSchedule::build(input.contribution, enlistment.year(), tables)?;

        let mut rank_periods = Vec::with_capacity(Rank::ALL.len());
        let mut months = Vec::new();
        let mut start = enlistment;
        for (rank, length) in SavingsTables::rank_periods(input.branch) {
            rank_periods.push(RankPeriod {
                rank,
                start,
                end: start.offset(length as i32 - 1),
                months: length,
                recommended_manwon: tables.recommended_manwon(start.year(), rank).unwrap_or(0),
            });

            for month in start.walk(length) {
                let salary = tables.salary(month.year(), rank).ok_or_else(|| {
                    CalculationError::invalid(
                        "enlistment",
                        format!("no salary table covers {month}"),
                    )
                })?;
                let contribution = schedule.monthly_won(month.year());
                months.push(SavingsMonth {
                    month,
                    rank,
                    salary,
                    contribution,
                    remaining: salary.saturating_sub(contribution),
                });
            }
            start = start.offset(length as i32);
        }

        let service_months = months.len() as u32;
        let total_deposit: u64 = months.iter().map(|month| month.contribution).sum();
        let residual_base: u64 = months.iter().map(|month| month.remaining).sum();
        let base_interest = installment_interest(total_deposit, rate, service_months)?;
        let government_match = if input.government_match {
            total_deposit
        } else {
            0
        };
        let remaining_savings = to_won(
            div_round(
                u128::from(residual_base) * u128::from(residual_rate),
                BASIS_POINTS_PER_UNIT,
            ),
            "residualSavingsRate",
        )?;
        let tax_exemption_benefit = to_won(
            div_round(u128::from(base_interest) * INTEREST_TAX_PER_MILLE, 1_000),
            "interestRate",
        )?;

        let breakdown = SavingsBreakdown {
            total_deposit,
            base_interest,
            additional_interest: 0,
            government_match,
            remaining_savings,
        };
        let total = breakdown.total();

        tracing::debug!(
            branch = input.branch.label(),
            enlistment = %enlistment,
            total,
            "computed savings maturity"
        );

        Ok(SavingsResult {
            total,
            breakdown,
            branch: input.branch,
            service_months,
            interest_rate: rate,
            schedule,
            rank_periods,
            months,
            tax_exemption_benefit,
        })
    }
}

impl Default for SavingsEngine {
    fn default() -> Self {
        Self::new(Arc::new(SavingsTables::standard()))
    }
}

/// Estimate the maturity payout against the standard tables.
pub fn compute_savings(input: &SavingsInput) -> Result<SavingsResult, CalculationError> {
    SavingsEngine::default().compute(input)
}
