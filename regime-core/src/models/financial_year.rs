use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Indian financial year, 1 April to 31 March.
///
/// Identified by the calendar year it starts in, so `FinancialYear(2025)` is
/// FY 2025-26 (assessment year 2026-27).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FinancialYear(pub i32);

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid financial year '{0}', expected the form 2025-26")]
pub struct FinancialYearParseError(pub String);

impl FinancialYear {
    /// The financial year a date falls in.
    pub fn containing(date: NaiveDate) -> Self {
        if date.month() >= 4 {
            FinancialYear(date.year())
        } else {
            FinancialYear(date.year() - 1)
        }
    }

    /// 1 April of the starting year.
    pub fn start_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.0, 4, 1)
    }

    /// 31 March of the following year.
    pub fn end_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.0 + 1, 3, 31)
    }

    /// The assessment year in which this year's income is assessed.
    pub fn assessment_year(&self) -> FinancialYear {
        FinancialYear(self.0 + 1)
    }
}

impl fmt::Display for FinancialYear {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}-{:02}", self.0, (self.0 + 1).rem_euclid(100))
    }
}

impl FromStr for FinancialYear {
    type Err = FinancialYearParseError;

    /// Accepts `2025-26`, `2025-2026` and the `FY` prefixed forms.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || FinancialYearParseError(s.to_string());
        let trimmed = s.trim();
        let trimmed = trimmed
            .strip_prefix("FY")
            .or_else(|| trimmed.strip_prefix("fy"))
            .unwrap_or(trimmed)
            .trim();

        let (start, end) = trimmed.split_once('-').ok_or_else(err)?;
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if start.len() != 4 || !all_digits(start) || !all_digits(end) {
            return Err(err());
        }
        let start: i32 = start.parse().map_err(|_| err())?;
        let end_value: i32 = end.parse().map_err(|_| err())?;

        let consecutive = match end.len() {
            2 => end_value == (start + 1).rem_euclid(100),
            4 => end_value == start + 1,
            _ => false,
        };
        if !consecutive {
            return Err(err());
        }

        Ok(FinancialYear(start))
    }
}

impl TryFrom<String> for FinancialYear {
    type Error = FinancialYearParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FinancialYear> for String {
    fn from(year: FinancialYear) -> Self {
        year.to_string()
    }
}
