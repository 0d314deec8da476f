//! Maturity estimator for the soldiers' installment savings (장병내일준비적금).

pub mod banks;
pub mod domain;
pub mod engine;
pub mod router;
pub mod schedule;
pub mod tables;

#[cfg(test)]
mod tests;

pub use banks::{interest_rate_options, BankRate, InterestRateOption, BANK_RATES};
pub use domain::{Branch, Contribution, InterestRate, Rank, SavingsInput};
pub use engine::{
    compute_savings, RankPeriod, SavingsBreakdown, SavingsEngine, SavingsMonth, SavingsResult,
};
pub use router::savings_router;
pub use schedule::{ContributionSchedule, YearlyContribution};
pub use tables::{RankSalaries, SavingsTables};
