use std::fmt;
use std::io::Read;

use serde::{Deserialize, Deserializer};

use super::NO_RECRUITMENT_SENTINEL;
use crate::calculators::calendar::YearMonth;
use crate::calculators::recruitment::domain::Specialty;

#[derive(Debug)]
pub enum CutoffImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    Row { line: u64, reason: String },
}

impl fmt::Display for CutoffImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CutoffImportError::Io(err) => write!(f, "failed to read cutoff dataset: {}", err),
            CutoffImportError::Csv(err) => write!(f, "invalid cutoff CSV data: {}", err),
            CutoffImportError::Row { line, reason } => {
                write!(f, "invalid cutoff row at line {}: {}", line, reason)
            }
        }
    }
}

impl std::error::Error for CutoffImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CutoffImportError::Io(err) => Some(err),
            CutoffImportError::Csv(err) => Some(err),
            CutoffImportError::Row { .. } => None,
        }
    }
}

impl From<csv::Error> for CutoffImportError {
    fn from(value: csv::Error) -> Self {
        Self::Csv(value)
    }
}

/// One parsed row; `cutoff` is `None` when no recruitment was held.
#[derive(Debug)]
pub(crate) struct CutoffRow {
    pub(crate) month: YearMonth,
    pub(crate) specialty: Specialty,
    pub(crate) cutoff: Option<f32>,
}

#[derive(Debug, Deserialize)]
struct RawCutoffRow {
    year: i32,
    month: u32,
    specialty: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    cutoff: Option<String>,
}

/// Parse `year,month,specialty,cutoff` rows. Years may be two or four digits;
/// specialties may be Korean display names or camelCase tags. Rows with a
/// blank cutoff are skipped so the cell reads as missing data.
pub(crate) fn parse_rows<R: Read>(reader: R) -> Result<Vec<CutoffRow>, CutoffImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = csv_reader.headers()?.clone();
    let mut rows = Vec::new();

    for record in csv_reader.records() {
        let record = record?;
        let line = record.position().map_or(0, |position| position.line());
        let raw: RawCutoffRow = record.deserialize(Some(&headers))?;
        let Some(cutoff) = raw.cutoff.as_deref() else {
            continue;
        };

        let year = if raw.year < 100 { 2000 + raw.year } else { raw.year };
        let month = YearMonth::new(year, raw.month).map_err(|err| CutoffImportError::Row {
            line,
            reason: err.to_string(),
        })?;
        let specialty = Specialty::from_display_name(&raw.specialty)
            .or_else(|| raw.specialty.parse().ok())
            .ok_or_else(|| CutoffImportError::Row {
                line,
                reason: format!("unknown specialty '{}'", raw.specialty),
            })?;
        let cutoff = parse_cutoff(cutoff).ok_or_else(|| CutoffImportError::Row {
            line,
            reason: format!("cutoff '{}' is not a score", cutoff),
        })?;

        rows.push(CutoffRow {
            month,
            specialty,
            cutoff,
        });
    }

    Ok(rows)
}

fn parse_cutoff(value: &str) -> Option<Option<f32>> {
    let trimmed = value.trim();
    if trimmed.eq_ignore_ascii_case("none") || trimmed == "모집 없음" {
        return Some(None);
    }
    let score = trimmed.parse::<f32>().ok().filter(|score| score.is_finite())?;
    if score == NO_RECRUITMENT_SENTINEL {
        Some(None)
    } else {
        Some(Some(score))
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
