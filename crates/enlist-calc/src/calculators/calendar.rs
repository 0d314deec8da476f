use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::error::CalculationError;

/// Calendar month used for recruitment rounds and enlistment dates.
///
/// Parsed once at the boundary from `2025-06`, `2025/6`, `2025.06` or the
/// Korean form `2025년 6월`; deserializes from either such a string or a
/// `{ "year": 2025, "month": 6 }` object. Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Result<Self, CalculationError> {
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(Self::from_date)
            .ok_or_else(|| {
                CalculationError::invalid("month", format!("{year}-{month} is not a calendar month"))
            })
    }

    /// Unchecked constructor for compile-time constants; `month` must be 1..=12.
    pub(crate) const fn from_parts(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub const fn year(self) -> i32 {
        self.year
    }

    pub const fn month(self) -> u32 {
        self.month
    }

    /// Two-digit year used by the historical cutoff tables (2025 -> 25).
    pub fn short_year(self) -> u32 {
        self.year.rem_euclid(100) as u32
    }

    /// Shift by a signed number of months.
    pub fn offset(self, months: i32) -> Self {
        let index = self.year * 12 + (self.month as i32 - 1) + months;
        Self {
            year: index.div_euclid(12),
            month: index.rem_euclid(12) as u32 + 1,
        }
    }

    pub fn next(self) -> Self {
        self.offset(1)
    }

    pub fn previous(self) -> Self {
        self.offset(-1)
    }

    pub fn same_month_last_year(self) -> Self {
        self.offset(-12)
    }

    /// Iterate `count` consecutive months starting at `self`.
    pub fn walk(self, count: u32) -> impl Iterator<Item = YearMonth> {
        (0..count as i32).map(move |step| self.offset(step))
    }

    pub fn korean_label(self) -> String {
        format!("{}년 {}월", self.year, self.month)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = CalculationError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        let malformed = || {
            CalculationError::invalid(
                "month",
                format!("'{raw}' is not a month (expected YYYY-MM or YYYY년 M월)"),
            )
        };

        let (year, month) = if let Some((year, rest)) = trimmed.split_once('년') {
            let month = rest.trim().strip_suffix('월').ok_or_else(malformed)?;
            (year.trim(), month.trim())
        } else {
            trimmed
                .split_once(['-', '/', '.'])
                .map(|(year, month)| (year.trim(), month.trim()))
                .ok_or_else(malformed)?
        };

        let year = year.parse::<i32>().map_err(|_| malformed())?;
        let month = month.parse::<u32>().map_err(|_| malformed())?;
        Self::new(year, month)
    }
}

impl Serialize for YearMonth {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawYearMonth {
    Text(String),
    Parts { year: i32, month: u32 },
}

impl<'de> Deserialize<'de> for YearMonth {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match RawYearMonth::deserialize(deserializer)? {
            RawYearMonth::Text(raw) => raw.parse().map_err(serde::de::Error::custom),
            RawYearMonth::Parts { year, month } => {
                YearMonth::new(year, month).map_err(serde::de::Error::custom)
            }
        }
    }
}
