use std::collections::BTreeMap;

use thiserror::Error;
use tracing::warn;

use crate::models::FinancialYear;

use super::TaxYearRules;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RuleBookError {
    #[error("no rules for financial year {requested}; available: {}", join_years(.available))]
    UnknownYear {
        requested: FinancialYear,
        available: Vec<FinancialYear>,
    },
}

fn join_years(years: &[FinancialYear]) -> String {
    if years.is_empty() {
        return "none".to_string();
    }
    years
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Registry of [`TaxYearRules`], keyed by financial year.
///
/// Typical lifetime:
/// 1. Create with [`RuleBook::with_builtin`] (or `new` for an empty book).
/// 2. Call `register` for any year loaded from outside the crate.
/// 3. Call `get` whenever a comparison for a specific year is needed.
///
/// ```
/// use regime_core::{FinancialYear, RuleBook};
///
/// let book = RuleBook::with_builtin();
///
/// assert_eq!(book.available_years(), vec![FinancialYear(2025)]);
/// assert!(book.get(FinancialYear(2019)).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct RuleBook {
    years: BTreeMap<FinancialYear, TaxYearRules>,
}

impl RuleBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// A book holding every year built into the crate.
    pub fn with_builtin() -> Self {
        let mut book = Self::new();
        book.register(TaxYearRules::fy_2025_26());
        book
    }

    /// Adds `rules` under its own financial year, replacing any rules
    /// already registered for that year.
    pub fn register(
        &mut self,
        rules: TaxYearRules,
    ) {
        let year = rules.financial_year;
        if self.years.insert(year, rules).is_some() {
            warn!(financial_year = %year, "replacing registered rules");
        }
    }

    /// Every registered year, oldest first.
    pub fn available_years(&self) -> Vec<FinancialYear> {
        self.years.keys().copied().collect()
    }

    /// # Errors
    /// * [`RuleBookError::UnknownYear`] when nothing is registered for `year`.
    pub fn get(
        &self,
        year: FinancialYear,
    ) -> Result<&TaxYearRules, RuleBookError> {
        self.years
            .get(&year)
            .ok_or_else(|| RuleBookError::UnknownYear {
                requested: year,
                available: self.available_years(),
            })
    }

    pub fn latest(&self) -> Option<&TaxYearRules> {
        self.years.values().next_back()
    }

    /// Most recent year strictly before `year`.
    pub fn latest_before(
        &self,
        year: FinancialYear,
    ) -> Option<&TaxYearRules> {
        self.years.range(..year).next_back().map(|(_, rules)| rules)
    }

    pub fn len(&self) -> usize {
        self.years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }
}
