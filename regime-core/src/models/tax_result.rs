use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{RegimeKind, TaxSlab};

/// Income allocated to one slab and the tax it attracts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlabTax {
    pub slab: TaxSlab,
    pub taxable_portion: Decimal,
    /// Unrounded; the rounded total lives on [`TaxResult::tax_amount`].
    pub tax: Decimal,
}

/// Outcome of computing one regime for one income / deduction pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxResult {
    pub regime: RegimeKind,
    pub gross_income: Decimal,
    /// Every deduction the regime honored, standard deduction included.
    pub total_deductions: Decimal,
    pub standard_deduction: Decimal,
    /// `max(0, gross_income - total_deductions)`.
    pub taxable_income: Decimal,
    /// Whole currency units.
    pub tax_amount: Decimal,
    /// Percent of gross income, two decimal places.
    pub effective_tax_rate: Decimal,
    pub monthly_net_income: Decimal,
    pub yearly_net_income: Decimal,
    pub slab_breakdown: Vec<SlabTax>,
}

/// Both regimes side by side, with the cheaper one recommended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegimeComparison {
    pub old_regime: TaxResult,
    pub new_regime: TaxResult,
    /// Old wins ties.
    pub recommended_regime: RegimeKind,
    pub recommendation: String,
    pub tax_savings: Decimal,
    pub monthly_difference: Decimal,
    pub yearly_difference: Decimal,
}

impl RegimeComparison {
    pub fn result(
        &self,
        kind: RegimeKind,
    ) -> &TaxResult {
        match kind {
            RegimeKind::Old => &self.old_regime,
            RegimeKind::New => &self.new_regime,
        }
    }

    pub fn recommended(&self) -> &TaxResult {
        self.result(self.recommended_regime)
    }
}

/// How much of the combined investment-linked cap a profile uses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvestmentCapUtilization {
    /// Claimed total, clamped at `limit`.
    pub used: Decimal,
    pub limit: Decimal,
    pub remaining: Decimal,
    /// Whole percent, 0..=100.
    pub utilization_percentage: Decimal,
}
