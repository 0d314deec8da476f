use std::collections::BTreeMap;

use serde::Serialize;

use super::domain::{Branch, Rank};
use crate::calculators::calendar::YearMonth;
use crate::calculators::error::CalculationError;

/// Monthly salary (won) per rank, indexed by [`Rank::index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RankSalaries(pub [u64; 4]);

impl RankSalaries {
    pub fn salary(&self, rank: Rank) -> u64 {
        self.0[rank.index()]
    }
}

/// Year-indexed pay, cap and period tables consulted by the savings engine.
///
/// Year lookups use the latest entry at or before the requested year, so a
/// month in 2026 is paid on the 2025 scale until a newer table is added.
/// Months before the first entry are paid on the first entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavingsTables {
    salaries: BTreeMap<i32, RankSalaries>,
    caps_manwon: BTreeMap<i32, u32>,
    recommended_manwon: BTreeMap<i32, [u32; 4]>,
}

impl SavingsTables {
    pub fn new(
        salaries: BTreeMap<i32, RankSalaries>,
        caps_manwon: BTreeMap<i32, u32>,
        recommended_manwon: BTreeMap<i32, [u32; 4]>,
    ) -> Self {
        Self {
            salaries,
            caps_manwon,
            recommended_manwon,
        }
    }

    /// 2024 and 2025 pay scales with the 40만원/55만원 contribution caps.
    pub fn standard() -> Self {
        Self::new(
            BTreeMap::from([
                (2024, RankSalaries([640_000, 800_000, 1_000_000, 1_250_000])),
                (2025, RankSalaries([750_000, 900_000, 1_200_000, 1_500_000])),
            ]),
            BTreeMap::from([(2024, 40), (2025, 55)]),
            BTreeMap::from([(2024, [15, 20, 25, 30]), (2025, [15, 20, 25, 35])]),
        )
    }

    /// Months spent at each rank, in promotion order.
    pub const fn rank_periods(branch: Branch) -> [(Rank, u32); 4] {
        let sergeant = match branch {
            Branch::ArmyMarines => 4,
            Branch::Navy => 6,
            Branch::AirForce => 7,
        };
        [
            (Rank::Private, 2),
            (Rank::PrivateFirstClass, 6),
            (Rank::Corporal, 6),
            (Rank::Sergeant, sergeant),
        ]
    }

    pub const fn service_months(branch: Branch) -> u32 {
        let periods = Self::rank_periods(branch);
        periods[0].1 + periods[1].1 + periods[2].1 + periods[3].1
    }

    /// Enlistments the tables can price: any whose service reaches the first
    /// salary year.
    pub fn check_enlistment(
        &self,
        enlistment: YearMonth,
        service_months: u32,
    ) -> Result<(), CalculationError> {
        let Some(first) = self.salaries.keys().next().copied() else {
            return Err(CalculationError::invalid(
                "enlistment",
                "no salary table is configured",
            ));
        };
        let discharge = enlistment.offset(service_months.saturating_sub(1) as i32);
        if discharge.year() < first {
            return Err(CalculationError::invalid(
                "enlistment",
                format!("service from {enlistment} ends before the first salary year {first}"),
            ));
        }
        Ok(())
    }

    pub fn salaries_for(&self, year: i32) -> Option<&RankSalaries> {
        table_for_year(&self.salaries, year)
    }

    pub fn salary(&self, year: i32, rank: Rank) -> Option<u64> {
        self.salaries_for(year).map(|table| table.salary(rank))
    }

    /// Contribution cap in 만원 for a calendar year.
    pub fn cap_manwon(&self, year: i32) -> Option<u32> {
        table_for_year(&self.caps_manwon, year).copied()
    }

    /// Years from which a different cap applies, in order.
    pub fn cap_years(&self) -> impl Iterator<Item = (i32, u32)> + '_ {
        self.caps_manwon.iter().map(|(year, cap)| (*year, *cap))
    }

    pub fn recommended_manwon(&self, year: i32, rank: Rank) -> Option<u32> {
        table_for_year(&self.recommended_manwon, year).map(|amounts| amounts[rank.index()])
    }
}

impl Default for SavingsTables {
    fn default() -> Self {
        Self::standard()
    }
}

fn table_for_year<V>(map: &BTreeMap<i32, V>, year: i32) -> Option<&V> {
    map.range(..=year)
        .next_back()
        .or_else(|| map.iter().next())
        .map(|(_, value)| value)
}
