//! Indian personal income-tax computation under the Old and New regimes.
//!
//! The crate is a set of pure functions over plain values: callers build an
//! [`IncomeProfile`] and a [`DeductionProfile`], pick (or load) the
//! [`TaxYearRules`] for a financial year, and get back a [`TaxResult`] per
//! regime or a [`RegimeComparison`] of both.
//!
//! ```
//! use rust_decimal_macros::dec;
//! use regime_core::{DeductionProfile, IncomeProfile, RegimeKind, TaxYearRules};
//!
//! let income = IncomeProfile {
//!     base_salary: dec!(1000000),
//!     ..Default::default()
//! };
//!
//! let comparison = TaxYearRules::fy_2025_26().compare(&income, &DeductionProfile::default());
//!
//! assert_eq!(comparison.old_regime.tax_amount, dec!(52500));
//! assert_eq!(comparison.new_regime.tax_amount, dec!(32500));
//! assert_eq!(comparison.recommended_regime, RegimeKind::New);
//! assert_eq!(comparison.tax_savings, dec!(20000));
//! ```

pub mod calculations;
pub mod format;
pub mod models;
pub mod rules;

pub use calculations::{
    CityType, HraExemption, HraExemptionInput, SalaryBreakdown, SalaryInput, SalaryWarning,
    capped_total_deductions, compare_regimes, compare_results, compute_investment_cap_utilization,
    gross_income, hra_exemption, regime_result, salary_breakdown, slab_breakdown, tax_amount,
    total_deductions,
};
pub use models::*;
pub use rules::{InvestmentCapPolicy, RuleBook, RuleBookError, TaxYearRules};
