//! CSV loader for a batch of taxpayer profiles.
//!
//! ## CSV Format
//!
//! Headers are matched by name, so column order does not matter. Only `name`
//! is required. Every other column is an annual amount; a missing column or
//! an empty cell counts as zero. A header outside the table below is an
//! error. Amounts are parsed from their text, so values too large for a
//! machine integer stay exact.
//!
//! | Column group | Columns |
//! |--------------|---------|
//! | identity | `name` |
//! | income | `base_salary`, `house_rent_allowance`, `special_allowance`, `transport_allowance`, `medical_allowance`, `performance_bonus`, `joining_bonus`, `equity_compensation`, `other_allowances` |
//! | investment | `elss`, `ppf`, `epf`, `life_insurance`, `nps`, `home_loan_principal`, `sukanya_samriddhi`, `nsc`, `tax_saving_fd` |
//! | health | `health_insurance_self`, `health_insurance_parents`, `preventive_health_checkup` |
//! | other | `hra_exemption`, `lta`, `home_loan_interest`, `donations`, `interest_on_savings` |
//!
//! ### Example
//!
//! ```csv
//! name,base_salary,ppf,health_insurance_self
//! Asha,1200000,150000,25000
//! Ravi,900000,,
//! ```

use std::path::Path;

use regime_core::{DeductionCategory, DeductionProfile, IncomeCategory, IncomeProfile};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::slab_loader::deserialize_optional_decimal;

#[derive(Debug, Deserialize)]
struct CsvRow {
    name: String,

    #[serde(default, deserialize_with = "deserialize_optional_decimal")]
    base_salary: Option<Decimal>,
    #[serde(default, deserialize_with = "deserialize_optional_decimal")]
    house_rent_allowance: Option<Decimal>,
    #[serde(default, deserialize_with = "deserialize_optional_decimal")]
    special_allowance: Option<Decimal>,
    #[serde(default, deserialize_with = "deserialize_optional_decimal")]
    transport_allowance: Option<Decimal>,
    #[serde(default, deserialize_with = "deserialize_optional_decimal")]
    medical_allowance: Option<Decimal>,
    #[serde(default, deserialize_with = "deserialize_optional_decimal")]
    performance_bonus: Option<Decimal>,
    #[serde(default, deserialize_with = "deserialize_optional_decimal")]
    joining_bonus: Option<Decimal>,
    #[serde(default, deserialize_with = "deserialize_optional_decimal")]
    equity_compensation: Option<Decimal>,
    #[serde(default, deserialize_with = "deserialize_optional_decimal")]
    other_allowances: Option<Decimal>,

    #[serde(default, deserialize_with = "deserialize_optional_decimal")]
    elss: Option<Decimal>,
    #[serde(default, deserialize_with = "deserialize_optional_decimal")]
    ppf: Option<Decimal>,
    #[serde(default, deserialize_with = "deserialize_optional_decimal")]
    epf: Option<Decimal>,
    #[serde(default, deserialize_with = "deserialize_optional_decimal")]
    life_insurance: Option<Decimal>,
    #[serde(default, deserialize_with = "deserialize_optional_decimal")]
    nps: Option<Decimal>,
    #[serde(default, deserialize_with = "deserialize_optional_decimal")]
    home_loan_principal: Option<Decimal>,
    #[serde(default, deserialize_with = "deserialize_optional_decimal")]
    sukanya_samriddhi: Option<Decimal>,
    #[serde(default, deserialize_with = "deserialize_optional_decimal")]
    nsc: Option<Decimal>,
    #[serde(default, deserialize_with = "deserialize_optional_decimal")]
    tax_saving_fd: Option<Decimal>,
    #[serde(default, deserialize_with = "deserialize_optional_decimal")]
    health_insurance_self: Option<Decimal>,
    #[serde(default, deserialize_with = "deserialize_optional_decimal")]
    health_insurance_parents: Option<Decimal>,
    #[serde(default, deserialize_with = "deserialize_optional_decimal")]
    preventive_health_checkup: Option<Decimal>,
    #[serde(default, deserialize_with = "deserialize_optional_decimal")]
    hra_exemption: Option<Decimal>,
    #[serde(default, deserialize_with = "deserialize_optional_decimal")]
    lta: Option<Decimal>,
    #[serde(default, deserialize_with = "deserialize_optional_decimal")]
    home_loan_interest: Option<Decimal>,
    #[serde(default, deserialize_with = "deserialize_optional_decimal")]
    donations: Option<Decimal>,
    #[serde(default, deserialize_with = "deserialize_optional_decimal")]
    interest_on_savings: Option<Decimal>,
}

/// One row of the batch file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedProfile {
    pub name: String,
    pub income: IncomeProfile,
    pub deductions: DeductionProfile,
}

/// Errors that can occur while loading a profile batch.
#[derive(Debug, thiserror::Error)]
pub enum ProfileLoadError {
    /// Bad CSV structure, a missing `name` column or a non-numeric amount.
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    #[error("could not read profile batch: {0}")]
    Io(#[from] std::io::Error),

    /// `row` is 1-based (header = row 0).
    #[error("empty name on row {row}")]
    MissingName { row: usize },

    #[error("unknown column '{0}'")]
    UnknownColumn(String),
}

fn is_known_column(header: &str) -> bool {
    header == "name"
        || IncomeCategory::parse(header).is_some()
        || DeductionCategory::parse(header)
            .is_some_and(|category| category != DeductionCategory::StandardDeduction)
}

fn convert_row(
    row: CsvRow,
    row_number: usize,
) -> Result<NamedProfile, ProfileLoadError> {
    let name = row.name.trim().to_string();
    if name.is_empty() {
        return Err(ProfileLoadError::MissingName { row: row_number });
    }

    let amount = |value: Option<Decimal>| value.unwrap_or_default();

    Ok(NamedProfile {
        name,
        income: IncomeProfile {
            base_salary: amount(row.base_salary),
            house_rent_allowance: amount(row.house_rent_allowance),
            special_allowance: amount(row.special_allowance),
            transport_allowance: amount(row.transport_allowance),
            medical_allowance: amount(row.medical_allowance),
            performance_bonus: amount(row.performance_bonus),
            joining_bonus: amount(row.joining_bonus),
            equity_compensation: amount(row.equity_compensation),
            other_allowances: amount(row.other_allowances),
        },
        deductions: DeductionProfile {
            elss: amount(row.elss),
            ppf: amount(row.ppf),
            epf: amount(row.epf),
            life_insurance: amount(row.life_insurance),
            nps: amount(row.nps),
            home_loan_principal: amount(row.home_loan_principal),
            sukanya_samriddhi: amount(row.sukanya_samriddhi),
            nsc: amount(row.nsc),
            tax_saving_fd: amount(row.tax_saving_fd),
            health_insurance_self: amount(row.health_insurance_self),
            health_insurance_parents: amount(row.health_insurance_parents),
            preventive_health_checkup: amount(row.preventive_health_checkup),
            hra_exemption: amount(row.hra_exemption),
            lta: amount(row.lta),
            home_loan_interest: amount(row.home_loan_interest),
            donations: amount(row.donations),
            interest_on_savings: amount(row.interest_on_savings),
        },
    })
}

/// Parse CSV text and return the profiles in file order.
///
/// # Errors
///
/// * [`ProfileLoadError::Parse`] if the CSV is structurally invalid, has no
///   `name` column, or holds a non-numeric amount.
/// * [`ProfileLoadError::UnknownColumn`] if a header names no category.
/// * [`ProfileLoadError::MissingName`] if a row's name is blank.
pub fn load_from_str(input: &str) -> Result<Vec<NamedProfile>, ProfileLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(input.as_bytes());

    if let Some(unknown) = reader.headers()?.iter().find(|h| !is_known_column(h)) {
        return Err(ProfileLoadError::UnknownColumn(unknown.to_string()));
    }

    reader
        .deserialize::<CsvRow>()
        .enumerate()
        .map(|(idx, result)| convert_row(result?, idx + 1))
        .collect()
}

/// Read a file from disk and delegate to [`load_from_str`].
pub fn load_from_file(path: &Path) -> Result<Vec<NamedProfile>, ProfileLoadError> {
    let contents = std::fs::read_to_string(path)?;
    load_from_str(&contents)
}
