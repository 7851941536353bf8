mod deduction_profile;
mod financial_year;
mod income_profile;
mod regime;
mod tax_result;
pub(crate) mod tax_slab;

pub use deduction_profile::{DeductionCategory, DeductionGroup, DeductionProfile};
pub use financial_year::{FinancialYear, FinancialYearParseError};
pub use income_profile::{IncomeCategory, IncomeProfile};
pub use regime::{RegimeDefinition, RegimeKind};
pub use tax_result::{InvestmentCapUtilization, RegimeComparison, SlabTax, TaxResult};
pub use tax_slab::{SlabTableError, TaxSlab, TaxSlabTable};
