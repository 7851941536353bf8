//! Tax calculation logic for the Old and New regimes.
//!
//! Every function here is pure: the same profile and rules always produce the
//! same result, and nothing is cached between calls.

pub mod common;
pub mod engine;
pub mod hra;
pub mod investment_cap;
pub mod salary;

pub use engine::{
    capped_total_deductions, compare_regimes, compare_results, gross_income, regime_result,
    slab_breakdown, tax_amount, total_deductions,
};
pub use hra::{CityType, HraExemption, HraExemptionInput, hra_exemption};
pub use investment_cap::{
    STATUTORY_INVESTMENT_CAP, compute_investment_cap_utilization, investment_cap_utilization,
    investment_claimed,
};
pub use salary::{SalaryBreakdown, SalaryInput, SalaryWarning, salary_breakdown};
