use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::calculators::calendar::YearMonth;
use crate::calculators::error::CalculationError;
use crate::calculators::parse_variant;

/// Branch of service; fixes the service length and the rank periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Branch {
    #[serde(alias = "army", alias = "marines", alias = "육군/해병대", alias = "육군", alias = "해병대")]
    ArmyMarines,
    #[serde(alias = "해군")]
    Navy,
    #[serde(alias = "공군")]
    AirForce,
}

impl Branch {
    pub const fn label(self) -> &'static str {
        match self {
            Branch::ArmyMarines => "육군/해병대",
            Branch::Navy => "해군",
            Branch::AirForce => "공군",
        }
    }
}

impl FromStr for Branch {
    type Err = CalculationError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        parse_variant("branch", raw)
    }
}

/// Enlisted ranks in promotion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Rank {
    Private,
    PrivateFirstClass,
    Corporal,
    Sergeant,
}

impl Rank {
    pub const ALL: [Rank; 4] = [
        Rank::Private,
        Rank::PrivateFirstClass,
        Rank::Corporal,
        Rank::Sergeant,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Rank::Private => "이병",
            Rank::PrivateFirstClass => "일병",
            Rank::Corporal => "상병",
            Rank::Sergeant => "병장",
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Rank::Private => 0,
            Rank::PrivateFirstClass => 1,
            Rank::Corporal => 2,
            Rank::Sergeant => 3,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Year the contribution cap rose to 55만원.
pub const SPLIT_YEAR: i32 = 2025;

/// Requested monthly contribution in 만원.
///
/// Enlistees before 2025 serve across the cap change and may choose a
/// separate amount for months before and from 2025; later enlistees choose
/// one amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Contribution {
    Flat {
        monthly: u32,
    },
    Split {
        #[serde(rename = "year2024")]
        year_2024: u32,
        #[serde(rename = "year2025")]
        year_2025: u32,
    },
}

impl Contribution {
    /// Amount requested for months in `year`.
    pub fn requested_manwon(&self, year: i32) -> u32 {
        match *self {
            Self::Flat { monthly } => monthly,
            Self::Split { year_2024, .. } if year < SPLIT_YEAR => year_2024,
            Self::Split { year_2025, .. } => year_2025,
        }
    }
}

/// Annual rate held in basis points so interest is computed exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct InterestRate(u32);

impl InterestRate {
    pub const fn from_basis_points(basis_points: u32) -> Self {
        Self(basis_points)
    }

    /// Accepts a percentage such as `5.0`; rounded to the nearest basis point.
    pub fn from_percent(percent: f64) -> Result<Self, CalculationError> {
        if !percent.is_finite() {
            return Err(CalculationError::invalid("interestRate", "must be a finite number"));
        }
        if !(0.0..=100.0).contains(&percent) {
            return Err(CalculationError::invalid(
                "interestRate",
                format!("{percent} is outside 0..=100 percent"),
            ));
        }
        Ok(Self((percent * 100.0).round() as u32))
    }

    pub const fn basis_points(self) -> u32 {
        self.0
    }
}

fn default_government_match() -> bool {
    true
}

fn default_residual_rate() -> f64 {
    100.0
}

/// Caller-supplied parameters for one maturity estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsInput {
    #[serde(alias = "enlistmentDate")]
    pub enlistment: YearMonth,
    pub branch: Branch,
    pub contribution: Contribution,
    /// Annual percent, base and preferential rate combined.
    pub interest_rate: f64,
    #[serde(default = "default_government_match")]
    pub government_match: bool,
    /// Percent of salary left after the contribution that is also saved.
    #[serde(default = "default_residual_rate")]
    pub residual_savings_rate: f64,
}

impl SavingsInput {
    pub fn new(
        enlistment: YearMonth,
        branch: Branch,
        contribution: Contribution,
        interest_rate: f64,
    ) -> Self {
        Self {
            enlistment,
            branch,
            contribution,
            interest_rate,
            government_match: true,
            residual_savings_rate: default_residual_rate(),
        }
    }

    pub fn interest(&self) -> Result<InterestRate, CalculationError> {
        InterestRate::from_percent(self.interest_rate)
    }

    /// Residual rate in basis points, clamped to 0..=100 percent.
    pub fn residual_rate_basis_points(&self) -> Result<u64, CalculationError> {
        if !self.residual_savings_rate.is_finite() {
            return Err(CalculationError::invalid(
                "residualSavingsRate",
                "must be a finite number",
            ));
        }
        let clamped = self.residual_savings_rate.clamp(0.0, 100.0);
        Ok((clamped * 100.0).round() as u64)
    }
}
