use rust_decimal_macros::dec;

use crate::calculations::STATUTORY_INVESTMENT_CAP;
use crate::models::tax_slab::slabs_from_breakpoints;
use crate::models::{
    DeductionCategory, FinancialYear, RegimeDefinition, RegimeKind, TaxSlabTable,
};

use super::{InvestmentCapPolicy, TaxYearRules};

/// FY 2025-26 (AY 2026-27).
pub(super) fn fy_2025_26() -> TaxYearRules {
    let old_slabs = TaxSlabTable::from_trusted(slabs_from_breakpoints(
        &[dec!(300000), dec!(600000), dec!(900000), dec!(1200000), dec!(1500000)],
        &[dec!(0), dec!(5), dec!(10), dec!(15), dec!(20), dec!(30)],
    ));

    let new_slabs = TaxSlabTable::from_trusted(slabs_from_breakpoints(
        &[
            dec!(400000),
            dec!(800000),
            dec!(1200000),
            dec!(1600000),
            dec!(2000000),
            dec!(2400000),
        ],
        &[dec!(0), dec!(5), dec!(10), dec!(15), dec!(20), dec!(25), dec!(30)],
    ));

    TaxYearRules {
        financial_year: FinancialYear(2025),
        old_regime: RegimeDefinition::new(
            RegimeKind::Old,
            "Old Tax Regime with itemised deductions",
            old_slabs,
            dec!(50000),
            DeductionCategory::ALL,
        ),
        new_regime: RegimeDefinition::new(
            RegimeKind::New,
            "New Tax Regime with the standard deduction only",
            new_slabs,
            dec!(75000),
            [DeductionCategory::StandardDeduction],
        ),
        investment_cap: STATUTORY_INVESTMENT_CAP,
        cap_policy: InvestmentCapPolicy::ReportOnly,
    }
}
