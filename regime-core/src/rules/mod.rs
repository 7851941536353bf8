//! Versioned regime rules.
//!
//! Slab tables, standard deductions and the investment cap change with each
//! budget. They live here as data keyed by [`FinancialYear`](crate::FinancialYear),
//! so adding a year never touches the calculation code.

mod builtin;
mod rule_book;
mod year_rules;

pub use rule_book::{RuleBook, RuleBookError};
pub use year_rules::{InvestmentCapPolicy, TaxYearRules};
