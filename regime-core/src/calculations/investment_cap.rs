//! Utilisation report for the combined investment-linked deduction cap.
//!
//! The report is informational. [`total_deductions`](super::total_deductions)
//! never consults it; whether the cap also limits taxable income is decided by
//! [`InvestmentCapPolicy`](crate::InvestmentCapPolicy).

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::debug;

use crate::calculations::common::{max, non_negative, round_whole, saturating_sum};
use crate::models::{DeductionCategory, DeductionProfile, InvestmentCapUtilization};

/// Combined ceiling on investment-linked deductions for FY 2025-26.
pub const STATUTORY_INVESTMENT_CAP: Decimal = dec!(150000);

/// Sum of every investment-linked claim, not limited by any cap.
/// Saturates at [`Decimal::MAX`].
pub fn investment_claimed(deductions: &DeductionProfile) -> Decimal {
    saturating_sum(
        DeductionCategory::INVESTMENT
            .iter()
            .map(|category| non_negative(category.as_str(), deductions.amount(*category))),
    )
}

/// Utilisation against [`STATUTORY_INVESTMENT_CAP`].
///
/// ```
/// use rust_decimal_macros::dec;
/// use regime_core::{DeductionProfile, compute_investment_cap_utilization};
///
/// let deductions = DeductionProfile {
///     ppf: dec!(150000),
///     elss: dec!(50000),
///     ..Default::default()
/// };
///
/// let report = compute_investment_cap_utilization(&deductions);
///
/// assert_eq!(report.used, dec!(150000));
/// assert_eq!(report.remaining, dec!(0));
/// assert_eq!(report.utilization_percentage, dec!(100));
/// ```
pub fn compute_investment_cap_utilization(deductions: &DeductionProfile) -> InvestmentCapUtilization {
    investment_cap_utilization(deductions, STATUTORY_INVESTMENT_CAP)
}

/// Utilisation against an arbitrary `limit`; claims above it are clamped.
pub fn investment_cap_utilization(
    deductions: &DeductionProfile,
    limit: Decimal,
) -> InvestmentCapUtilization {
    let limit = max(limit, Decimal::ZERO);
    let claimed = investment_claimed(deductions);
    let used = claimed.min(limit);
    let remaining = max(limit - used, Decimal::ZERO);

    let utilization_percentage = if limit > Decimal::ZERO {
        round_whole(used / limit * Decimal::ONE_HUNDRED)
    } else {
        Decimal::ZERO
    };

    if claimed > limit {
        debug!(claimed = %claimed, limit = %limit, "investment claims clamped to cap in report");
    }

    InvestmentCapUtilization {
        used,
        limit,
        remaining,
        utilization_percentage,
    }
}
