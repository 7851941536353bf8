use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::engine::build_result;
use crate::calculations::{
    SalaryBreakdown, SalaryInput, capped_total_deductions, compare_results, gross_income,
    investment_cap_utilization, salary_breakdown, total_deductions,
};
use crate::models::{
    DeductionProfile, FinancialYear, IncomeProfile, InvestmentCapUtilization, RegimeComparison,
    RegimeDefinition, RegimeKind, TaxResult, TaxSlabTable,
};

use super::builtin;

/// Whether the investment cap limits taxable income or is only reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvestmentCapPolicy {
    /// Investment claims reduce taxable income in full; the cap shows up only
    /// in [`TaxYearRules::investment_cap_utilization`].
    #[default]
    ReportOnly,
    /// Honored investment claims contribute at most the cap.
    Enforce,
}

/// Everything that varies between financial years.
///
/// Built in code or from a slab CSV through `regime-data`; never deserialized
/// whole, so `old_regime` and `new_regime` always carry their own kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaxYearRules {
    pub financial_year: FinancialYear,
    pub old_regime: RegimeDefinition,
    pub new_regime: RegimeDefinition,
    pub investment_cap: Decimal,
    pub cap_policy: InvestmentCapPolicy,
}

impl TaxYearRules {
    /// Rules for FY 2025-26.
    pub fn fy_2025_26() -> Self {
        builtin::fy_2025_26()
    }

    /// Rules for the most recent financial year built into the crate.
    pub fn current() -> Self {
        Self::fy_2025_26()
    }

    pub fn regime(
        &self,
        kind: RegimeKind,
    ) -> &RegimeDefinition {
        match kind {
            RegimeKind::Old => &self.old_regime,
            RegimeKind::New => &self.new_regime,
        }
    }

    pub fn regime_mut(
        &mut self,
        kind: RegimeKind,
    ) -> &mut RegimeDefinition {
        match kind {
            RegimeKind::Old => &mut self.old_regime,
            RegimeKind::New => &mut self.new_regime,
        }
    }

    pub fn with_cap_policy(
        mut self,
        cap_policy: InvestmentCapPolicy,
    ) -> Self {
        self.cap_policy = cap_policy;
        self
    }

    /// Same regimes and cap, relabelled for another year.
    pub fn carried_forward(
        &self,
        financial_year: FinancialYear,
    ) -> Self {
        Self {
            financial_year,
            ..self.clone()
        }
    }

    /// Deductions `kind` honors, with the investment cap applied when the
    /// policy is [`InvestmentCapPolicy::Enforce`].
    pub fn total_deductions(
        &self,
        kind: RegimeKind,
        deductions: &DeductionProfile,
    ) -> Decimal {
        let regime = self.regime(kind);
        match self.cap_policy {
            InvestmentCapPolicy::ReportOnly => total_deductions(deductions, regime),
            InvestmentCapPolicy::Enforce => {
                capped_total_deductions(deductions, regime, self.investment_cap)
            }
        }
    }

    pub fn regime_result(
        &self,
        kind: RegimeKind,
        income: &IncomeProfile,
        deductions: &DeductionProfile,
    ) -> TaxResult {
        build_result(
            self.regime(kind),
            gross_income(income),
            self.total_deductions(kind, deductions),
        )
    }

    /// Computes both regimes for the same profile and recommends one.
    pub fn compare(
        &self,
        income: &IncomeProfile,
        deductions: &DeductionProfile,
    ) -> RegimeComparison {
        compare_results(
            self.regime_result(RegimeKind::Old, income, deductions),
            self.regime_result(RegimeKind::New, income, deductions),
        )
    }

    pub fn investment_cap_utilization(
        &self,
        deductions: &DeductionProfile,
    ) -> InvestmentCapUtilization {
        investment_cap_utilization(deductions, self.investment_cap)
    }

    /// In-hand salary under `kind`. The investment cap policy does not apply:
    /// the only investment-linked amount is EPF, which is always withheld.
    pub fn salary_breakdown(
        &self,
        kind: RegimeKind,
        input: &SalaryInput,
    ) -> SalaryBreakdown {
        salary_breakdown(input, self.regime(kind))
    }

    /// Replaces the slab table of one regime, leaving everything else as is.
    pub fn set_slabs(
        &mut self,
        kind: RegimeKind,
        slabs: TaxSlabTable,
    ) {
        self.regime_mut(kind).slabs = slabs;
    }
}
