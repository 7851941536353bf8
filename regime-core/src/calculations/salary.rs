//! In-hand salary under one regime.
//!
//! Gross pay less the employee's EPF contribution, professional tax and the
//! regime's income tax. EPF and professional tax are withheld from pay under
//! both regimes, so both also reduce taxable income here; the standard
//! deduction and the HRA exemption apply only where the regime honors them.
//!
//! ```
//! use rust_decimal_macros::dec;
//! use regime_core::{IncomeProfile, RegimeKind, SalaryInput, TaxYearRules};
//!
//! let input = SalaryInput {
//!     income: IncomeProfile {
//!         base_salary: dec!(600000),
//!         house_rent_allowance: dec!(240000),
//!         special_allowance: dec!(160000),
//!         ..Default::default()
//!     },
//!     epf_contribution: dec!(72000),
//!     professional_tax: dec!(2500),
//!     hra_exemption: dec!(180000),
//! };
//!
//! let breakdown = TaxYearRules::fy_2025_26().salary_breakdown(RegimeKind::New, &input);
//!
//! assert_eq!(breakdown.taxable_income, dec!(850500));
//! assert_eq!(breakdown.monthly_in_hand, dec!(75038));
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::calculations::common::{max, non_negative, round_whole, saturating_sum};
use crate::calculations::engine::{build_result, gross_income};
use crate::models::{DeductionCategory, IncomeProfile, RegimeDefinition, RegimeKind};

const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Largest HRA, as a share of basic salary, a salary structure normally carries.
pub const HRA_BASIC_SHARE_LIMIT: Decimal = dec!(0.50);

/// Statutory employee EPF contribution as a share of basic salary.
pub const EPF_BASIC_SHARE_LIMIT: Decimal = dec!(0.12);

/// Annual salary structure plus what is withheld from it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SalaryInput {
    pub income: IncomeProfile,
    pub epf_contribution: Decimal,
    pub professional_tax: Decimal,
    /// Exempt part of the HRA, usually from [`hra_exemption`](super::hra_exemption).
    /// Ignored by regimes that do not honor the exemption.
    pub hra_exemption: Decimal,
}

/// Salary structures that compute fine but are probably mistyped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SalaryWarning {
    #[error("basic salary should be greater than zero")]
    BasicSalaryNotPositive,

    #[error("HRA of {hra} is above 50% of basic salary ({limit})")]
    HraAboveHalfOfBasic { hra: Decimal, limit: Decimal },

    #[error("EPF contribution of {epf} is above 12% of basic salary ({limit})")]
    EpfAboveTwelvePercentOfBasic { epf: Decimal, limit: Decimal },
}

impl SalaryInput {
    /// Checks the structure against the usual limits on basic salary.
    ///
    /// The share checks only run when basic salary is positive.
    pub fn validate(&self) -> Vec<SalaryWarning> {
        let basic = self.income.base_salary;
        if basic <= Decimal::ZERO {
            return vec![SalaryWarning::BasicSalaryNotPositive];
        }

        let mut warnings = Vec::new();

        let hra = self.income.house_rent_allowance;
        let hra_limit = basic * HRA_BASIC_SHARE_LIMIT;
        if hra > hra_limit {
            warnings.push(SalaryWarning::HraAboveHalfOfBasic {
                hra,
                limit: hra_limit,
            });
        }

        let epf_limit = basic * EPF_BASIC_SHARE_LIMIT;
        if self.epf_contribution > epf_limit {
            warnings.push(SalaryWarning::EpfAboveTwelvePercentOfBasic {
                epf: self.epf_contribution,
                limit: epf_limit,
            });
        }

        warnings
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryBreakdown {
    pub regime: RegimeKind,
    pub gross_salary: Decimal,
    /// Gross salary minus basic salary.
    pub total_allowances: Decimal,
    /// EPF plus professional tax.
    pub salary_deductions: Decimal,
    pub standard_deduction: Decimal,
    pub hra_exemption: Decimal,
    pub taxable_income: Decimal,
    pub tax_amount: Decimal,
    /// Gross salary minus salary deductions and tax, unrounded.
    pub net_salary: Decimal,
    pub monthly_in_hand: Decimal,
    pub yearly_in_hand: Decimal,
    pub effective_tax_rate: Decimal,
}

pub fn salary_breakdown(
    input: &SalaryInput,
    regime: &RegimeDefinition,
) -> SalaryBreakdown {
    let gross_salary = gross_income(&input.income);
    let basic = non_negative("base_salary", input.income.base_salary);
    let total_allowances = max(gross_salary - basic, Decimal::ZERO);

    let salary_deductions = saturating_sum([
        non_negative("epf_contribution", input.epf_contribution),
        non_negative("professional_tax", input.professional_tax),
    ]);
    let standard_deduction = if regime.honors(DeductionCategory::StandardDeduction) {
        regime.standard_deduction
    } else {
        Decimal::ZERO
    };
    let hra_exemption = if regime.honors(DeductionCategory::HraExemption) {
        non_negative("hra_exemption", input.hra_exemption)
    } else {
        Decimal::ZERO
    };

    let result = build_result(
        regime,
        gross_salary,
        saturating_sum([salary_deductions, standard_deduction, hra_exemption]),
    );

    // tax never exceeds gross, so this stays within range
    let net_salary = gross_salary - result.tax_amount - salary_deductions;

    debug!(
        regime = regime.kind.as_str(),
        gross = %gross_salary,
        withheld = %salary_deductions,
        tax = %result.tax_amount,
        net = %net_salary,
        "in-hand salary computed"
    );

    SalaryBreakdown {
        regime: regime.kind,
        gross_salary,
        total_allowances,
        salary_deductions,
        standard_deduction,
        hra_exemption,
        taxable_income: result.taxable_income,
        tax_amount: result.tax_amount,
        net_salary,
        monthly_in_hand: round_whole(net_salary / MONTHS_PER_YEAR),
        yearly_in_hand: round_whole(net_salary),
        effective_tax_rate: result.effective_tax_rate,
    }
}
