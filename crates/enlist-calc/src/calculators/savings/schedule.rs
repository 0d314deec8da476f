use std::collections::BTreeSet;

use serde::Serialize;

use super::domain::{Contribution, SPLIT_YEAR};
use super::tables::SavingsTables;
use crate::calculators::error::CalculationError;
use crate::calculators::format::manwon_to_won;

/// Contribution in force from `from_year` onwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearlyContribution {
    pub from_year: i32,
    pub requested_manwon: u32,
    pub cap_manwon: u32,
    /// Requested amount after clamping to the cap.
    pub monthly_manwon: u32,
}

/// Clamped monthly contributions by calendar year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContributionSchedule {
    entries: Vec<YearlyContribution>,
}

impl ContributionSchedule {
    pub fn build(
        contribution: Contribution,
        enlistment_year: i32,
        tables: &SavingsTables,
    ) -> Result<Self, CalculationError> {
        let split = matches!(contribution, Contribution::Split { .. });
        if split && enlistment_year >= SPLIT_YEAR {
            return Err(CalculationError::invalid(
                "contribution",
                format!("per-year amounts need enlistment before {SPLIT_YEAR}, not {enlistment_year}"),
            ));
        }

        let mut from_years: BTreeSet<i32> = tables
            .cap_years()
            .map(|(year, _)| year)
            .filter(|year| *year > enlistment_year)
            .collect();
        from_years.insert(enlistment_year);
        if split {
            from_years.insert(SPLIT_YEAR);
        }

        let requested = from_years
            .into_iter()
            .map(|year| (year, contribution.requested_manwon(year)));

        let mut entries = Vec::new();
        for (from_year, requested_manwon) in requested {
            let cap_manwon = tables.cap_manwon(from_year).ok_or_else(|| {
                CalculationError::invalid(
                    "contribution",
                    format!("no contribution cap for {from_year}"),
                )
            })?;
            entries.push(YearlyContribution {
                from_year,
                requested_manwon,
                cap_manwon,
                monthly_manwon: requested_manwon.min(cap_manwon),
            });
        }

        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[YearlyContribution] {
        &self.entries
    }

    /// Clamped amount in 만원 for a month in `year`.
    pub fn monthly_manwon(&self, year: i32) -> u32 {
        self.entries
            .iter()
            .rev()
            .find(|entry| entry.from_year <= year)
            .or_else(|| self.entries.first())
            .map_or(0, |entry| entry.monthly_manwon)
    }

    pub fn monthly_won(&self, year: i32) -> u64 {
        manwon_to_won(self.monthly_manwon(year))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_amount_is_clamped_to_the_cap() {
        let tables = SavingsTables::standard();
        let schedule =
            ContributionSchedule::build(Contribution::Flat { monthly: 999 }, 2025, &tables)
                .unwrap();

        assert_eq!(schedule.monthly_manwon(2025), 55);
        assert_eq!(schedule.monthly_manwon(2026), 55);
        assert_eq!(schedule.entries()[0].requested_manwon, 999);
    }

    #[test]
    fn flat_amount_for_2024_applies_per_year_caps() {
        let tables = SavingsTables::standard();
        let schedule =
            ContributionSchedule::build(Contribution::Flat { monthly: 50 }, 2024, &tables)
                .unwrap();

        assert_eq!(schedule.monthly_manwon(2024), 40);
        assert_eq!(schedule.monthly_won(2025), 500_000);
    }

    #[test]
    fn earlier_enlistment_starts_on_the_first_cap() {
        let tables = SavingsTables::standard();
        let split = Contribution::Split {
            year_2024: 50,
            year_2025: 55,
        };

        let schedule = ContributionSchedule::build(split, 2023, &tables).unwrap();
        let years: Vec<i32> = schedule.entries().iter().map(|e| e.from_year).collect();
        assert_eq!(years, vec![2023, 2024, 2025]);
        assert_eq!(schedule.monthly_manwon(2023), 40);
        assert_eq!(schedule.monthly_manwon(2024), 40);
        assert_eq!(schedule.monthly_manwon(2025), 55);
    }

    #[test]
    fn split_amounts_require_enlistment_before_2025() {
        let tables = SavingsTables::standard();
        let split = Contribution::Split {
            year_2024: 30,
            year_2025: 45,
        };

        let schedule = ContributionSchedule::build(split, 2024, &tables).unwrap();
        assert_eq!(schedule.monthly_manwon(2024), 30);
        assert_eq!(schedule.monthly_manwon(2025), 45);

        let error = ContributionSchedule::build(split, 2025, &tables).unwrap_err();
        assert_eq!(error.field(), "contribution");
    }
}
