use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The salary components that make up gross income.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncomeCategory {
    BaseSalary,
    HouseRentAllowance,
    SpecialAllowance,
    TransportAllowance,
    MedicalAllowance,
    PerformanceBonus,
    JoiningBonus,
    EquityCompensation,
    OtherAllowances,
}

impl IncomeCategory {
    pub const ALL: [IncomeCategory; 9] = [
        Self::BaseSalary,
        Self::HouseRentAllowance,
        Self::SpecialAllowance,
        Self::TransportAllowance,
        Self::MedicalAllowance,
        Self::PerformanceBonus,
        Self::JoiningBonus,
        Self::EquityCompensation,
        Self::OtherAllowances,
    ];

    /// Column / field name used in CSV and TOML input.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BaseSalary => "base_salary",
            Self::HouseRentAllowance => "house_rent_allowance",
            Self::SpecialAllowance => "special_allowance",
            Self::TransportAllowance => "transport_allowance",
            Self::MedicalAllowance => "medical_allowance",
            Self::PerformanceBonus => "performance_bonus",
            Self::JoiningBonus => "joining_bonus",
            Self::EquityCompensation => "equity_compensation",
            Self::OtherAllowances => "other_allowances",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == s)
    }
}

/// Annual amounts per income category.
///
/// Every field defaults to zero, so partially filled input (a TOML table with
/// only `base_salary`, a CSV row with empty cells) deserializes cleanly.
/// Keys that name no category are rejected rather than dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IncomeProfile {
    pub base_salary: Decimal,
    pub house_rent_allowance: Decimal,
    pub special_allowance: Decimal,
    pub transport_allowance: Decimal,
    pub medical_allowance: Decimal,
    pub performance_bonus: Decimal,
    pub joining_bonus: Decimal,
    /// Vested RSUs and other equity grants.
    pub equity_compensation: Decimal,
    pub other_allowances: Decimal,
}

impl IncomeProfile {
    pub fn amount(&self, category: IncomeCategory) -> Decimal {
        match category {
            IncomeCategory::BaseSalary => self.base_salary,
            IncomeCategory::HouseRentAllowance => self.house_rent_allowance,
            IncomeCategory::SpecialAllowance => self.special_allowance,
            IncomeCategory::TransportAllowance => self.transport_allowance,
            IncomeCategory::MedicalAllowance => self.medical_allowance,
            IncomeCategory::PerformanceBonus => self.performance_bonus,
            IncomeCategory::JoiningBonus => self.joining_bonus,
            IncomeCategory::EquityCompensation => self.equity_compensation,
            IncomeCategory::OtherAllowances => self.other_allowances,
        }
    }
}
