use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{DeductionCategory, TaxSlabTable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegimeKind {
    Old,
    New,
}

impl RegimeKind {
    pub const ALL: [RegimeKind; 2] = [Self::Old, Self::New];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Old => "old",
            Self::New => "new",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Old => "Old Tax Regime",
            Self::New => "New Tax Regime",
        }
    }

    /// Case-insensitive; accepts `old` / `new`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "old" => Some(Self::Old),
            "new" => Some(Self::New),
            _ => None,
        }
    }

    pub fn other(&self) -> Self {
        match self {
            Self::Old => Self::New,
            Self::New => Self::Old,
        }
    }
}

impl fmt::Display for RegimeKind {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The rule set one regime applies in one financial year.
///
/// Serialize-only: instances come from [`RegimeDefinition::new`], which keeps
/// `allowed_deductions` sorted and free of duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegimeDefinition {
    pub kind: RegimeKind,
    pub description: String,
    pub slabs: TaxSlabTable,
    /// Flat amount applied when `allowed_deductions` contains
    /// [`DeductionCategory::StandardDeduction`].
    pub standard_deduction: Decimal,
    pub allowed_deductions: Vec<DeductionCategory>,
}

impl RegimeDefinition {
    pub fn new(
        kind: RegimeKind,
        description: impl Into<String>,
        slabs: TaxSlabTable,
        standard_deduction: Decimal,
        allowed_deductions: impl IntoIterator<Item = DeductionCategory>,
    ) -> Self {
        let mut allowed_deductions: Vec<_> = allowed_deductions.into_iter().collect();
        allowed_deductions.sort_unstable();
        allowed_deductions.dedup();

        Self {
            kind,
            description: description.into(),
            slabs,
            standard_deduction,
            allowed_deductions,
        }
    }

    pub fn honors(
        &self,
        category: DeductionCategory,
    ) -> bool {
        self.allowed_deductions.contains(&category)
    }
}
