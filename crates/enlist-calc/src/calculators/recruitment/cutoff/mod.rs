//! Historical first-round cutoff scores and pass/fail comparison.

mod parser;
mod published;

use std::collections::BTreeMap;
use std::fs::File;
use std::path::Path;

use serde::Serialize;

use super::domain::Specialty;
use crate::calculators::calendar::YearMonth;

pub use parser::CutoffImportError;

/// Sentinel used by published tables for a round with no recruitment.
pub const NO_RECRUITMENT_SENTINEL: f32 = 99_999.0;

/// What a table knows about one (round, specialty) cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "state", content = "score", rename_all = "camelCase")]
pub enum CutoffLookup {
    Recorded(f32),
    NoRecruitment,
    NoData,
}

impl CutoffLookup {
    pub fn score(self) -> Option<f32> {
        match self {
            CutoffLookup::Recorded(score) => Some(score),
            CutoffLookup::NoRecruitment | CutoffLookup::NoData => None,
        }
    }
}

/// Read-only cutoff dataset keyed by (two-digit year, month, specialty).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CutoffTable {
    entries: BTreeMap<(u32, u32, Specialty), CutoffLookup>,
}

impl CutoffTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a cutoff. The sentinel score marks a round without recruitment.
    pub fn insert(&mut self, month: YearMonth, specialty: Specialty, score: f32) {
        let entry = if score == NO_RECRUITMENT_SENTINEL {
            CutoffLookup::NoRecruitment
        } else {
            CutoffLookup::Recorded(score)
        };
        self.entries
            .insert((month.short_year(), month.month(), specialty), entry);
    }

    pub fn mark_no_recruitment(&mut self, month: YearMonth, specialty: Specialty) {
        self.entries.insert(
            (month.short_year(), month.month(), specialty),
            CutoffLookup::NoRecruitment,
        );
    }

    pub fn lookup(&self, month: YearMonth, specialty: Specialty) -> CutoffLookup {
        self.entries
            .get(&(month.short_year(), month.month(), specialty))
            .copied()
            .unwrap_or(CutoffLookup::NoData)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CutoffImportError> {
        let file = File::open(path.as_ref()).map_err(CutoffImportError::Io)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: std::io::Read>(reader: R) -> Result<Self, CutoffImportError> {
        let mut table = Self::new();
        for row in parser::parse_rows(reader)? {
            match row.cutoff {
                Some(score) => table.insert(row.month, row.specialty, score),
                None => table.mark_no_recruitment(row.month, row.specialty),
            }
        }
        tracing::debug!(entries = table.len(), "loaded cutoff dataset");
        Ok(table)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ComparisonStatus {
    Pass,
    Fail,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Comparison {
    pub status: ComparisonStatus,
    /// Distance between the estimate and the cutoff, always non-negative.
    pub diff: f32,
}

impl Comparison {
    pub fn between(score: f32, cutoff: f32) -> Self {
        let status = if score >= cutoff {
            ComparisonStatus::Pass
        } else {
            ComparisonStatus::Fail
        };
        Self {
            status,
            diff: (score - cutoff).abs(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CutoffComparison {
    pub reference: YearMonth,
    pub cutoff: CutoffLookup,
    /// Present only when the reference round has a recorded score.
    pub result: Option<Comparison>,
}

impl CutoffComparison {
    fn against(total: u8, reference: YearMonth, specialty: Specialty, table: &CutoffTable) -> Self {
        let cutoff = table.lookup(reference, specialty);
        let result = cutoff
            .score()
            .map(|score| Comparison::between(f32::from(total), score));
        Self {
            reference,
            cutoff,
            result,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CutoffReport {
    pub previous_month: CutoffComparison,
    pub last_year_same_month: CutoffComparison,
}

/// Compare an estimated total against the round before `month` and the same
/// round one year earlier.
pub fn compare_to_cutoff(
    total: u8,
    month: YearMonth,
    specialty: Specialty,
    table: &CutoffTable,
) -> CutoffReport {
    CutoffReport {
        previous_month: CutoffComparison::against(total, month.previous(), specialty, table),
        last_year_same_month: CutoffComparison::against(
            total,
            month.same_month_last_year(),
            specialty,
            table,
        ),
    }
}
