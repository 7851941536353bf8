use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Informal grouping of deduction categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeductionGroup {
    /// Investment-linked deductions sharing one combined statutory cap.
    Investment,
    /// Health-insurance premiums and checkups, each individually capped.
    HealthInsurance,
    /// Exemptions and other deductions.
    Exemption,
}

/// One deduction a regime may honor.
///
/// `StandardDeduction` is a marker: the amount comes from the regime, never
/// from the [`DeductionProfile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeductionCategory {
    Elss,
    Ppf,
    Epf,
    LifeInsurance,
    Nps,
    HomeLoanPrincipal,
    SukanyaSamriddhi,
    Nsc,
    TaxSavingFd,
    HealthInsuranceSelf,
    HealthInsuranceParents,
    PreventiveHealthCheckup,
    HraExemption,
    Lta,
    HomeLoanInterest,
    Donations,
    InterestOnSavings,
    StandardDeduction,
}

impl DeductionCategory {
    /// Every category, marker included.
    pub const ALL: [DeductionCategory; 18] = [
        Self::Elss,
        Self::Ppf,
        Self::Epf,
        Self::LifeInsurance,
        Self::Nps,
        Self::HomeLoanPrincipal,
        Self::SukanyaSamriddhi,
        Self::Nsc,
        Self::TaxSavingFd,
        Self::HealthInsuranceSelf,
        Self::HealthInsuranceParents,
        Self::PreventiveHealthCheckup,
        Self::HraExemption,
        Self::Lta,
        Self::HomeLoanInterest,
        Self::Donations,
        Self::InterestOnSavings,
        Self::StandardDeduction,
    ];

    /// The categories subject to the combined investment cap.
    pub const INVESTMENT: [DeductionCategory; 9] = [
        Self::Elss,
        Self::Ppf,
        Self::Epf,
        Self::LifeInsurance,
        Self::Nps,
        Self::HomeLoanPrincipal,
        Self::SukanyaSamriddhi,
        Self::Nsc,
        Self::TaxSavingFd,
    ];

    pub fn group(&self) -> DeductionGroup {
        match self {
            Self::Elss
            | Self::Ppf
            | Self::Epf
            | Self::LifeInsurance
            | Self::Nps
            | Self::HomeLoanPrincipal
            | Self::SukanyaSamriddhi
            | Self::Nsc
            | Self::TaxSavingFd => DeductionGroup::Investment,
            Self::HealthInsuranceSelf | Self::HealthInsuranceParents | Self::PreventiveHealthCheckup => {
                DeductionGroup::HealthInsurance
            }
            Self::HraExemption
            | Self::Lta
            | Self::HomeLoanInterest
            | Self::Donations
            | Self::InterestOnSavings
            | Self::StandardDeduction => DeductionGroup::Exemption,
        }
    }

    /// Column / field name used in CSV and TOML input.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Elss => "elss",
            Self::Ppf => "ppf",
            Self::Epf => "epf",
            Self::LifeInsurance => "life_insurance",
            Self::Nps => "nps",
            Self::HomeLoanPrincipal => "home_loan_principal",
            Self::SukanyaSamriddhi => "sukanya_samriddhi",
            Self::Nsc => "nsc",
            Self::TaxSavingFd => "tax_saving_fd",
            Self::HealthInsuranceSelf => "health_insurance_self",
            Self::HealthInsuranceParents => "health_insurance_parents",
            Self::PreventiveHealthCheckup => "preventive_health_checkup",
            Self::HraExemption => "hra_exemption",
            Self::Lta => "lta",
            Self::HomeLoanInterest => "home_loan_interest",
            Self::Donations => "donations",
            Self::InterestOnSavings => "interest_on_savings",
            Self::StandardDeduction => "standard_deduction",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == s)
    }
}

/// Annual deduction amounts claimed by the taxpayer.
///
/// Caps are not applied here; see
/// [`compute_investment_cap_utilization`](crate::compute_investment_cap_utilization)
/// and [`InvestmentCapPolicy`](crate::InvestmentCapPolicy).
///
/// Missing keys default to zero; unknown keys, `standard_deduction` included,
/// are rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DeductionProfile {
    // Investment-linked
    pub elss: Decimal,
    pub ppf: Decimal,
    pub epf: Decimal,
    pub life_insurance: Decimal,
    pub nps: Decimal,
    pub home_loan_principal: Decimal,
    pub sukanya_samriddhi: Decimal,
    pub nsc: Decimal,
    pub tax_saving_fd: Decimal,

    // Health insurance
    pub health_insurance_self: Decimal,
    pub health_insurance_parents: Decimal,
    pub preventive_health_checkup: Decimal,

    // Other exemptions
    pub hra_exemption: Decimal,
    pub lta: Decimal,
    pub home_loan_interest: Decimal,
    pub donations: Decimal,
    pub interest_on_savings: Decimal,
}

impl DeductionProfile {
    /// Amount claimed for `category`. The standard-deduction marker reads zero.
    pub fn amount(&self, category: DeductionCategory) -> Decimal {
        match category {
            DeductionCategory::Elss => self.elss,
            DeductionCategory::Ppf => self.ppf,
            DeductionCategory::Epf => self.epf,
            DeductionCategory::LifeInsurance => self.life_insurance,
            DeductionCategory::Nps => self.nps,
            DeductionCategory::HomeLoanPrincipal => self.home_loan_principal,
            DeductionCategory::SukanyaSamriddhi => self.sukanya_samriddhi,
            DeductionCategory::Nsc => self.nsc,
            DeductionCategory::TaxSavingFd => self.tax_saving_fd,
            DeductionCategory::HealthInsuranceSelf => self.health_insurance_self,
            DeductionCategory::HealthInsuranceParents => self.health_insurance_parents,
            DeductionCategory::PreventiveHealthCheckup => self.preventive_health_checkup,
            DeductionCategory::HraExemption => self.hra_exemption,
            DeductionCategory::Lta => self.lta,
            DeductionCategory::HomeLoanInterest => self.home_loan_interest,
            DeductionCategory::Donations => self.donations,
            DeductionCategory::InterestOnSavings => self.interest_on_savings,
            DeductionCategory::StandardDeduction => Decimal::ZERO,
        }
    }
}
