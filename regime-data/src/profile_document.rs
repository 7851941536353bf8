//! Single taxpayer profile read from a TOML document.
//!
//! ```toml
//! name = "Asha"
//! financial_year = "2025-26"
//!
//! [income]
//! base_salary = 1200000
//! house_rent_allowance = 240000
//!
//! [deductions]
//! ppf = 150000
//!
//! [rent]
//! monthly_rent = 25000
//! city = "metro"
//! ```
//!
//! Every section is optional, but keys inside `[income]` and `[deductions]`
//! must name a known category. Amounts may also be written as strings, which
//! keeps values beyond the TOML integer range exact. When `[rent]` is given and
//! `deductions.hra_exemption` is left at zero, the exemption is worked out
//! from basic salary, HRA received and annual rent.

use std::path::Path;

use regime_core::{
    CityType, DeductionProfile, FinancialYear, HraExemptionInput, IncomeProfile, hra_exemption,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

const MONTHS_PER_YEAR: Decimal = dec!(12);

#[derive(Debug, Error)]
pub enum ProfileDocumentError {
    #[error("invalid profile document: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("could not read profile document: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RentDetails {
    pub monthly_rent: Decimal,
    #[serde(default)]
    pub city: CityType,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProfileDocument {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub financial_year: Option<FinancialYear>,
    #[serde(default)]
    pub income: IncomeProfile,
    #[serde(default)]
    pub deductions: DeductionProfile,
    #[serde(default)]
    pub rent: Option<RentDetails>,
}

impl ProfileDocument {
    /// Deductions with the HRA exemption filled in from `[rent]` when the
    /// document does not state one.
    pub fn resolved_deductions(&self) -> DeductionProfile {
        let mut deductions = self.deductions.clone();

        let Some(rent) = &self.rent else {
            return deductions;
        };

        if deductions.hra_exemption.is_zero() {
            let exemption = hra_exemption(&HraExemptionInput {
                basic_salary: self.income.base_salary,
                hra_received: self.income.house_rent_allowance,
                rent_paid: rent.monthly_rent.saturating_mul(MONTHS_PER_YEAR),
                city: rent.city,
            });
            debug!(
                exemption = %exemption.exemption,
                taxable_hra = %exemption.taxable_hra,
                city = %rent.city,
                "derived HRA exemption from rent"
            );
            deductions.hra_exemption = exemption.exemption;
        }

        deductions
    }
}

pub fn parse(input: &str) -> Result<ProfileDocument, ProfileDocumentError> {
    Ok(toml::from_str(input)?)
}

pub fn load_from_file(path: &Path) -> Result<ProfileDocument, ProfileDocumentError> {
    let contents = std::fs::read_to_string(path)?;
    parse(&contents)
}
