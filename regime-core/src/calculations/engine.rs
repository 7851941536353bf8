//! Regime tax engine.
//!
//! | Step | Function | Rule |
//! |------|----------|------|
//! | 1 | [`gross_income`] | Sum of every income category |
//! | 2 | [`total_deductions`] | Sum of the categories the regime honors; standard deduction from the regime |
//! | 3 | taxable income | `max(0, gross - deductions)` |
//! | 4 | [`tax_amount`] | Marginal slab walk, rounded to whole units |
//! | 5 | [`regime_result`] | Effective rate (2 dp), yearly and monthly net pay (whole units) |
//! | 6 | [`compare_regimes`] | Lower tax wins; Old wins ties |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use regime_core::{DeductionProfile, IncomeProfile, RegimeKind, TaxYearRules, regime_result};
//!
//! let rules = TaxYearRules::fy_2025_26();
//! let income = IncomeProfile {
//!     base_salary: dec!(1000000),
//!     ..Default::default()
//! };
//!
//! let result = regime_result(&income, &DeductionProfile::default(), rules.regime(RegimeKind::Old));
//!
//! assert_eq!(result.taxable_income, dec!(950000));
//! assert_eq!(result.tax_amount, dec!(52500));
//! assert_eq!(result.effective_tax_rate, dec!(5.25));
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::{debug, trace, warn};

use crate::calculations::common::{max, non_negative, round_half_up, round_whole, saturating_sum};
use crate::format::format_currency;
use crate::models::{
    DeductionCategory, DeductionProfile, IncomeCategory, IncomeProfile, RegimeComparison,
    RegimeDefinition, RegimeKind, SlabTax, TaxResult, TaxSlabTable,
};
use crate::rules::TaxYearRules;

const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Sum of every income category. Negative amounts count as zero and the
/// total saturates at [`Decimal::MAX`].
pub fn gross_income(income: &IncomeProfile) -> Decimal {
    saturating_sum(
        IncomeCategory::ALL
            .iter()
            .map(|category| non_negative(category.as_str(), income.amount(*category))),
    )
}

/// Sum of the deductions `regime` honors.
///
/// The standard-deduction marker contributes the regime's fixed amount; every
/// other honored category contributes the profile's value. Categories the
/// regime does not list are ignored. No caps are applied.
pub fn total_deductions(
    deductions: &DeductionProfile,
    regime: &RegimeDefinition,
) -> Decimal {
    saturating_sum(
        regime
            .allowed_deductions
            .iter()
            .map(|category| honored_amount(deductions, regime, *category)),
    )
}

/// Like [`total_deductions`], but the honored investment-linked categories
/// contribute at most `cap` between them.
pub fn capped_total_deductions(
    deductions: &DeductionProfile,
    regime: &RegimeDefinition,
    cap: Decimal,
) -> Decimal {
    let is_investment = |category: &&DeductionCategory| DeductionCategory::INVESTMENT.contains(*category);
    let honored = |category: &DeductionCategory| honored_amount(deductions, regime, *category);

    let investment = saturating_sum(regime.allowed_deductions.iter().filter(is_investment).map(honored));
    let other = saturating_sum(
        regime
            .allowed_deductions
            .iter()
            .filter(|category| !is_investment(category))
            .map(honored),
    );

    let cap = max(cap, Decimal::ZERO);
    if investment > cap {
        warn!(
            regime = regime.kind.as_str(),
            claimed = %investment,
            cap = %cap,
            "investment-linked deductions exceed cap; excess disregarded"
        );
    }

    other.saturating_add(investment.min(cap))
}

fn honored_amount(
    deductions: &DeductionProfile,
    regime: &RegimeDefinition,
    category: DeductionCategory,
) -> Decimal {
    match category {
        DeductionCategory::StandardDeduction => regime.standard_deduction,
        other => non_negative(other.as_str(), deductions.amount(other)),
    }
}

/// Allocates `taxable_income` across the slabs from the bottom up.
///
/// Only slabs that receive income appear in the result.
pub fn slab_breakdown(
    taxable_income: Decimal,
    slabs: &TaxSlabTable,
) -> Vec<SlabTax> {
    let mut remaining = taxable_income;
    let mut breakdown = Vec::new();

    for slab in slabs {
        if remaining <= Decimal::ZERO {
            break;
        }

        let taxable_portion = match slab.width() {
            Some(width) => remaining.min(width),
            None => remaining,
        };
        // rate is at most 100, so the share never exceeds the portion
        let tax = taxable_portion.saturating_mul(slab.rate / Decimal::ONE_HUNDRED);
        trace!(
            min_income = %slab.min_income,
            rate = %slab.rate,
            portion = %taxable_portion,
            tax = %tax,
            "slab allocated"
        );

        breakdown.push(SlabTax {
            slab: slab.clone(),
            taxable_portion,
            tax,
        });
        remaining -= taxable_portion;
    }

    breakdown
}

/// Progressive tax on `taxable_income`, rounded to whole currency units.
///
/// Zero or negative income yields zero.
pub fn tax_amount(
    taxable_income: Decimal,
    slabs: &TaxSlabTable,
) -> Decimal {
    sum_breakdown(&slab_breakdown(taxable_income, slabs))
}

fn sum_breakdown(breakdown: &[SlabTax]) -> Decimal {
    round_whole(saturating_sum(breakdown.iter().map(|s| s.tax)))
}

/// Computes one regime with its deductions taken as-is (no investment cap).
pub fn regime_result(
    income: &IncomeProfile,
    deductions: &DeductionProfile,
    regime: &RegimeDefinition,
) -> TaxResult {
    build_result(regime, gross_income(income), total_deductions(deductions, regime))
}

pub(crate) fn build_result(
    regime: &RegimeDefinition,
    gross_income: Decimal,
    total_deductions: Decimal,
) -> TaxResult {
    let taxable_income = max(gross_income - total_deductions, Decimal::ZERO);
    let slab_breakdown = slab_breakdown(taxable_income, &regime.slabs);
    let tax_amount = sum_breakdown(&slab_breakdown);

    let effective_tax_rate = if gross_income > Decimal::ZERO {
        round_half_up(tax_amount / gross_income * Decimal::ONE_HUNDRED)
    } else {
        Decimal::ZERO
    };

    let net = gross_income - tax_amount;
    let yearly_net_income = round_whole(net);
    let monthly_net_income = round_whole(net / MONTHS_PER_YEAR);

    debug!(
        regime = regime.kind.as_str(),
        gross = %gross_income,
        deductions = %total_deductions,
        taxable = %taxable_income,
        tax = %tax_amount,
        "regime computed"
    );

    TaxResult {
        regime: regime.kind,
        gross_income,
        total_deductions,
        standard_deduction: regime.standard_deduction,
        taxable_income,
        tax_amount,
        effective_tax_rate,
        monthly_net_income,
        yearly_net_income,
        slab_breakdown,
    }
}

/// Compares both regimes under the current financial year's rules.
///
/// Both regimes see the same raw profiles; each filters deductions through
/// its own allowed list. See [`TaxYearRules::compare`] for a specific year.
pub fn compare_regimes(
    income: &IncomeProfile,
    deductions: &DeductionProfile,
) -> RegimeComparison {
    TaxYearRules::current().compare(income, deductions)
}

/// Builds the comparison from two already computed results.
///
/// The Old regime is recommended when its tax is lower than or equal to the
/// New regime's.
pub fn compare_results(
    old_regime: TaxResult,
    new_regime: TaxResult,
) -> RegimeComparison {
    let recommended_regime = if old_regime.tax_amount <= new_regime.tax_amount {
        RegimeKind::Old
    } else {
        RegimeKind::New
    };

    let tax_savings = (old_regime.tax_amount - new_regime.tax_amount).abs();
    let monthly_difference =
        round_whole((old_regime.monthly_net_income - new_regime.monthly_net_income).abs());
    let yearly_difference =
        round_whole((old_regime.yearly_net_income - new_regime.yearly_net_income).abs());

    let recommendation = recommendation_text(recommended_regime, tax_savings, &old_regime);

    debug!(
        recommended = recommended_regime.as_str(),
        savings = %tax_savings,
        "regimes compared"
    );

    RegimeComparison {
        old_regime,
        new_regime,
        recommended_regime,
        recommendation,
        tax_savings,
        monthly_difference,
        yearly_difference,
    }
}

fn recommendation_text(
    recommended: RegimeKind,
    tax_savings: Decimal,
    old_regime: &TaxResult,
) -> String {
    if tax_savings.is_zero() {
        return format!(
            "Both regimes result in the same tax of {}; the {recommended} is recommended and \
             saves {} a year compared with the {}.",
            format_currency(old_regime.tax_amount),
            format_currency(tax_savings),
            recommended.other(),
        );
    }

    match recommended {
        RegimeKind::Old => format!(
            "The {recommended} is better for you: it saves {} a year compared with the {}, \
             because your deductions of {} outweigh its higher slab rates.",
            format_currency(tax_savings),
            recommended.other(),
            format_currency(old_regime.total_deductions),
        ),
        RegimeKind::New => format!(
            "The {recommended} is better for you: it saves {} a year compared with the {}, \
             because its lower slab rates are worth more than the deductions you could claim.",
            format_currency(tax_savings),
            recommended.other(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn rules() -> TaxYearRules {
        TaxYearRules::fy_2025_26()
    }

    fn salary(amount: Decimal) -> IncomeProfile {
        IncomeProfile {
            base_salary: amount,
            ..Default::default()
        }
    }

    fn full_profile() -> IncomeProfile {
        IncomeProfile {
            base_salary: dec!(600000),
            house_rent_allowance: dec!(240000),
            special_allowance: dec!(100000),
            transport_allowance: dec!(19200),
            medical_allowance: dec!(15000),
            performance_bonus: dec!(80000),
            joining_bonus: dec!(50000),
            equity_compensation: dec!(200000),
            other_allowances: dec!(5800),
        }
    }

    fn investment_heavy() -> DeductionProfile {
        DeductionProfile {
            elss: dec!(50000),
            ppf: dec!(50000),
            epf: dec!(50000),
            life_insurance: dec!(50000),
            ..Default::default()
        }
    }

    fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_test_writer()
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    // =========================================================================
    // gross_income tests
    // =========================================================================

    #[test]
    fn gross_income_sums_every_category() {
        assert_eq!(gross_income(&full_profile()), dec!(1310000));
    }

    #[test]
    fn gross_income_of_empty_profile_is_zero() {
        assert_eq!(gross_income(&IncomeProfile::default()), dec!(0));
    }

    #[test]
    fn gross_income_ignores_negative_amounts() {
        let _guard = init_test_tracing();
        let income = IncomeProfile {
            base_salary: dec!(500000),
            joining_bonus: dec!(-100000),
            ..Default::default()
        };

        assert_eq!(gross_income(&income), dec!(500000));
    }

    #[test]
    fn gross_income_saturates_instead_of_overflowing() {
        let half = Decimal::MAX / dec!(2) + dec!(1);
        let income = IncomeProfile {
            base_salary: half,
            equity_compensation: half,
            joining_bonus: dec!(1),
            ..Default::default()
        };

        assert_eq!(gross_income(&income), Decimal::MAX);
    }

    // =========================================================================
    // total_deductions tests
    // =========================================================================

    #[test]
    fn total_deductions_old_regime_adds_standard_deduction_and_claims() {
        let deductions = DeductionProfile {
            elss: dec!(100000),
            health_insurance_self: dec!(25000),
            hra_exemption: dec!(120000),
            ..Default::default()
        };

        let result = total_deductions(&deductions, rules().regime(RegimeKind::Old));

        assert_eq!(result, dec!(295000));
    }

    #[test]
    fn total_deductions_new_regime_ignores_itemized_claims() {
        let deductions = DeductionProfile {
            elss: dec!(100000),
            home_loan_interest: dec!(200000),
            ..Default::default()
        };

        let result = total_deductions(&deductions, rules().regime(RegimeKind::New));

        assert_eq!(result, dec!(75000));
    }

    #[test]
    fn total_deductions_does_not_cap_investments() {
        let result = total_deductions(&investment_heavy(), rules().regime(RegimeKind::Old));

        assert_eq!(result, dec!(250000));
    }

    #[test]
    fn total_deductions_treats_negative_claims_as_zero() {
        let _guard = init_test_tracing();
        let deductions = DeductionProfile {
            donations: dec!(-5000),
            lta: dec!(10000),
            ..Default::default()
        };

        let result = total_deductions(&deductions, rules().regime(RegimeKind::Old));

        assert_eq!(result, dec!(60000));
    }

    #[test]
    fn total_deductions_saturates_instead_of_overflowing() {
        let deductions = DeductionProfile {
            home_loan_interest: Decimal::MAX,
            donations: Decimal::MAX,
            ..Default::default()
        };

        let result = total_deductions(&deductions, rules().regime(RegimeKind::Old));

        assert_eq!(result, Decimal::MAX);
    }

    // =========================================================================
    // capped_total_deductions tests
    // =========================================================================

    #[test]
    fn capped_total_deductions_clamps_investment_group() {
        let _guard = init_test_tracing();

        let result =
            capped_total_deductions(&investment_heavy(), rules().regime(RegimeKind::Old), dec!(150000));

        assert_eq!(result, dec!(200000));
    }

    #[test]
    fn capped_total_deductions_leaves_claims_under_cap_alone() {
        let deductions = DeductionProfile {
            ppf: dec!(100000),
            donations: dec!(10000),
            ..Default::default()
        };

        let result =
            capped_total_deductions(&deductions, rules().regime(RegimeKind::Old), dec!(150000));

        assert_eq!(result, dec!(160000));
    }

    #[test]
    fn capped_total_deductions_new_regime_unaffected() {
        let result =
            capped_total_deductions(&investment_heavy(), rules().regime(RegimeKind::New), dec!(150000));

        assert_eq!(result, dec!(75000));
    }

    #[test]
    fn capped_total_deductions_with_extreme_investments_counts_only_cap() {
        let _guard = init_test_tracing();
        let deductions = DeductionProfile {
            elss: Decimal::MAX,
            ppf: Decimal::MAX,
            ..Default::default()
        };

        let result = capped_total_deductions(&deductions, rules().regime(RegimeKind::Old), dec!(150000));

        // standard deduction + cap
        assert_eq!(result, dec!(200000));
    }

    // =========================================================================
    // tax_amount tests
    // =========================================================================

    #[test]
    fn tax_amount_is_zero_for_zero_income() {
        assert_eq!(tax_amount(dec!(0), &rules().old_regime.slabs), dec!(0));
        assert_eq!(tax_amount(dec!(0), &rules().new_regime.slabs), dec!(0));
    }

    #[test]
    fn tax_amount_is_zero_for_negative_income() {
        assert_eq!(tax_amount(dec!(-10000), &rules().old_regime.slabs), dec!(0));
    }

    #[test]
    fn tax_amount_zero_rate_band_contributes_nothing() {
        assert_eq!(tax_amount(dec!(300000), &rules().old_regime.slabs), dec!(0));
        assert_eq!(tax_amount(dec!(400000), &rules().new_regime.slabs), dec!(0));
    }

    #[test]
    fn tax_amount_old_regime_spans_four_bands() {
        // 0 + 15,000 + 30,000 + 7,500
        assert_eq!(tax_amount(dec!(950000), &rules().old_regime.slabs), dec!(52500));
    }

    #[test]
    fn tax_amount_new_regime_spans_three_bands() {
        // 0 + 20,000 + 12,500
        assert_eq!(tax_amount(dec!(925000), &rules().new_regime.slabs), dec!(32500));
    }

    #[test]
    fn tax_amount_top_band_is_unbounded() {
        // 0 + 15,000 + 30,000 + 45,000 + 60,000 + 30% of 1,000,000
        assert_eq!(tax_amount(dec!(2500000), &rules().old_regime.slabs), dec!(450000));
        // 0 + 20,000 + 40,000 + 60,000 + 80,000 + 100,000 + 30% of 600,000
        assert_eq!(tax_amount(dec!(3000000), &rules().new_regime.slabs), dec!(480000));
    }

    #[test]
    fn tax_amount_rounds_to_whole_units() {
        // 5% of 10 = 0.5, rounded away from zero
        assert_eq!(tax_amount(dec!(300010), &rules().old_regime.slabs), dec!(1));
        // 5% of 1.5 = 0.075
        assert_eq!(tax_amount(dec!(300001.5), &rules().old_regime.slabs), dec!(0));
    }

    #[test]
    fn tax_amount_is_monotonic_in_taxable_income() {
        for regime in [rules().old_regime, rules().new_regime] {
            let mut previous = Decimal::ZERO;
            let mut income = Decimal::ZERO;
            while income <= dec!(3000000) {
                let tax = tax_amount(income, &regime.slabs);
                assert!(
                    tax >= previous,
                    "{} tax fell from {previous} to {tax} at {income}",
                    regime.kind
                );
                previous = tax;
                income += dec!(12500);
            }
        }
    }

    #[test]
    fn tax_amount_is_continuous_at_band_boundaries() {
        for regime in [rules().old_regime, rules().new_regime] {
            for boundary in regime.slabs.breakpoints() {
                let below = tax_amount(boundary - dec!(1), &regime.slabs);
                let at = tax_amount(boundary, &regime.slabs);
                assert!(at >= below);
                // marginal rate is at most 30%, so one unit of income moves
                // the rounded tax by at most one unit
                assert!(at - below <= dec!(1), "jump at {boundary}: {below} -> {at}");
            }
        }
    }

    #[test]
    fn tax_amount_on_huge_income_stays_below_income() {
        let taxable = Decimal::MAX / dec!(10);

        for regime in [rules().old_regime, rules().new_regime] {
            let tax = tax_amount(taxable, &regime.slabs);

            assert!(tax > Decimal::ZERO);
            assert!(tax <= taxable, "{} tax {tax} exceeds {taxable}", regime.kind);
        }
    }

    #[test]
    fn tax_amount_is_idempotent() {
        let slabs = rules().new_regime.slabs;

        assert_eq!(tax_amount(dec!(1765432), &slabs), tax_amount(dec!(1765432), &slabs));
    }

    // =========================================================================
    // slab_breakdown tests
    // =========================================================================

    #[test]
    fn slab_breakdown_lists_only_bands_that_received_income() {
        let breakdown = slab_breakdown(dec!(950000), &rules().old_regime.slabs);

        let portions: Vec<_> = breakdown.iter().map(|s| s.taxable_portion).collect();
        let taxes: Vec<_> = breakdown.iter().map(|s| s.tax).collect();

        assert_eq!(
            portions,
            vec![dec!(300000), dec!(300000), dec!(300000), dec!(50000)]
        );
        assert_eq!(taxes, vec![dec!(0), dec!(15000), dec!(30000), dec!(7500)]);
    }

    #[test]
    fn slab_breakdown_is_empty_for_zero_income() {
        assert!(slab_breakdown(dec!(0), &rules().old_regime.slabs).is_empty());
    }

    // =========================================================================
    // regime_result tests
    // =========================================================================

    #[test]
    fn regime_result_old_regime_without_deductions() {
        let result = regime_result(
            &salary(dec!(1000000)),
            &DeductionProfile::default(),
            rules().regime(RegimeKind::Old),
        );

        assert_eq!(result.regime, RegimeKind::Old);
        assert_eq!(result.gross_income, dec!(1000000));
        assert_eq!(result.total_deductions, dec!(50000));
        assert_eq!(result.standard_deduction, dec!(50000));
        assert_eq!(result.taxable_income, dec!(950000));
        assert_eq!(result.tax_amount, dec!(52500));
        assert_eq!(result.effective_tax_rate, dec!(5.25));
        assert_eq!(result.yearly_net_income, dec!(947500));
        assert_eq!(result.monthly_net_income, dec!(78958));
    }

    #[test]
    fn regime_result_new_regime_without_deductions() {
        let result = regime_result(
            &salary(dec!(1000000)),
            &DeductionProfile::default(),
            rules().regime(RegimeKind::New),
        );

        assert_eq!(result.total_deductions, dec!(75000));
        assert_eq!(result.taxable_income, dec!(925000));
        assert_eq!(result.tax_amount, dec!(32500));
        assert_eq!(result.effective_tax_rate, dec!(3.25));
        assert_eq!(result.yearly_net_income, dec!(967500));
        assert_eq!(result.monthly_net_income, dec!(80625));
    }

    #[test]
    fn regime_result_zero_income_floors_taxable_income() {
        for kind in RegimeKind::ALL {
            let result = regime_result(
                &IncomeProfile::default(),
                &investment_heavy(),
                rules().regime(kind),
            );

            assert_eq!(result.taxable_income, dec!(0));
            assert_eq!(result.tax_amount, dec!(0));
            assert_eq!(result.effective_tax_rate, dec!(0));
            assert_eq!(result.monthly_net_income, dec!(0));
            assert_eq!(result.yearly_net_income, dec!(0));
        }
    }

    #[test]
    fn regime_result_taxable_income_matches_gross_minus_deductions() {
        let deductions = DeductionProfile {
            hra_exemption: dec!(180000),
            home_loan_interest: dec!(200000),
            ..investment_heavy()
        };

        for kind in RegimeKind::ALL {
            let result = regime_result(&full_profile(), &deductions, rules().regime(kind));

            assert_eq!(
                result.taxable_income,
                max(result.gross_income - result.total_deductions, Decimal::ZERO)
            );
            assert!(result.tax_amount >= Decimal::ZERO);
        }
    }

    #[test]
    fn regime_result_effective_rate_rounds_to_two_places() {
        // taxable 1,155,000 -> 15,000 + 30,000 + 38,250 = 83,250 on 1,205,000
        let result = regime_result(
            &salary(dec!(1205000)),
            &DeductionProfile::default(),
            rules().regime(RegimeKind::Old),
        );

        assert_eq!(result.tax_amount, dec!(83250));
        assert_eq!(result.effective_tax_rate, dec!(6.91));
    }

    // =========================================================================
    // compare_results / compare_regimes tests
    // =========================================================================

    #[test]
    fn compare_regimes_recommends_new_regime_without_deductions() {
        let comparison = compare_regimes(&salary(dec!(1000000)), &DeductionProfile::default());

        assert_eq!(comparison.recommended_regime, RegimeKind::New);
        assert_eq!(comparison.tax_savings, dec!(20000));
        assert_eq!(comparison.yearly_difference, dec!(20000));
        assert_eq!(comparison.monthly_difference, dec!(1667));
        assert!(comparison.recommendation.contains("New Tax Regime is better"));
        assert!(comparison.recommendation.contains("₹20,000"));
    }

    #[test]
    fn compare_regimes_recommends_old_regime_with_large_deductions() {
        let deductions = DeductionProfile {
            elss: dec!(150000),
            health_insurance_self: dec!(25000),
            health_insurance_parents: dec!(50000),
            hra_exemption: dec!(240000),
            home_loan_interest: dec!(200000),
            ..Default::default()
        };

        let comparison = compare_regimes(&salary(dec!(1500000)), &deductions);

        // old: taxable 785,000 -> 15,000 + 18,500 = 33,500
        // new: taxable 1,425,000 -> 20,000 + 40,000 + 33,750 = 93,750
        assert_eq!(comparison.old_regime.tax_amount, dec!(33500));
        assert_eq!(comparison.new_regime.tax_amount, dec!(93750));
        assert_eq!(comparison.recommended_regime, RegimeKind::Old);
        assert_eq!(comparison.tax_savings, dec!(60250));
        assert!(comparison.recommendation.contains("Old Tax Regime is better"));
        assert!(comparison.recommendation.contains("₹60,250"));
        assert!(comparison.recommendation.contains("₹7,15,000"));
    }

    #[test]
    fn compare_regimes_tie_recommends_old_regime() {
        let comparison = compare_regimes(&salary(dec!(300000)), &DeductionProfile::default());

        assert_eq!(comparison.old_regime.tax_amount, dec!(0));
        assert_eq!(comparison.new_regime.tax_amount, dec!(0));
        assert_eq!(comparison.recommended_regime, RegimeKind::Old);
        assert_eq!(comparison.tax_savings, dec!(0));
        assert!(comparison.recommendation.contains("same tax"));
        assert!(comparison.recommendation.contains("saves ₹0"));
        assert!(comparison.recommendation.contains("compared with the New Tax Regime"));
    }

    #[test]
    fn compare_results_tie_on_equal_nonzero_tax_recommends_old() {
        let old = regime_result(
            &salary(dec!(1000000)),
            &DeductionProfile::default(),
            rules().regime(RegimeKind::Old),
        );
        let new = TaxResult {
            regime: RegimeKind::New,
            ..old.clone()
        };

        let comparison = compare_results(old, new);

        assert_eq!(comparison.recommended_regime, RegimeKind::Old);
        assert_eq!(comparison.recommended().tax_amount, dec!(52500));
    }

    #[test]
    fn compare_regimes_zero_income() {
        let comparison = compare_regimes(&IncomeProfile::default(), &DeductionProfile::default());

        for result in [&comparison.old_regime, &comparison.new_regime] {
            assert_eq!(result.taxable_income, dec!(0));
            assert_eq!(result.tax_amount, dec!(0));
            assert_eq!(result.effective_tax_rate, dec!(0));
        }
        assert_eq!(comparison.recommended_regime, RegimeKind::Old);
    }

    #[test]
    fn compare_regimes_at_decimal_max_income_completes() {
        let _guard = init_test_tracing();
        let income = IncomeProfile {
            base_salary: Decimal::MAX,
            performance_bonus: Decimal::MAX,
            ..Default::default()
        };
        let deductions = DeductionProfile {
            elss: Decimal::MAX,
            ppf: Decimal::MAX,
            ..Default::default()
        };

        let comparison = compare_regimes(&income, &deductions);

        assert_eq!(comparison.old_regime.gross_income, Decimal::MAX);
        assert_eq!(comparison.old_regime.total_deductions, Decimal::MAX);
        assert_eq!(comparison.old_regime.tax_amount, dec!(0));
        assert_eq!(comparison.new_regime.effective_tax_rate, dec!(30.00));
        assert_eq!(comparison.recommended_regime, RegimeKind::Old);
    }

    #[test]
    fn compare_regimes_is_idempotent() {
        let deductions = investment_heavy();

        let first = compare_regimes(&full_profile(), &deductions);
        let second = compare_regimes(&full_profile(), &deductions);

        assert_eq!(first, second);
    }
}
