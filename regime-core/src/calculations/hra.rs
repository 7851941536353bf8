//! House-rent-allowance exemption.
//!
//! The exempt part of HRA is the smallest of:
//!
//! | # | Limit |
//! |---|-------|
//! | 1 | HRA actually received |
//! | 2 | Rent paid minus 10% of basic salary |
//! | 3 | 50% of basic salary in a metro city, 40% elsewhere |
//!
//! All amounts are annual. The result feeds
//! [`DeductionProfile::hra_exemption`](crate::DeductionProfile::hra_exemption),
//! which only the Old regime honors.

use std::fmt;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::calculations::common::{max, non_negative, round_whole};

const RENT_OFFSET_SHARE: Decimal = dec!(0.10);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CityType {
    #[default]
    Metro,
    NonMetro,
}

impl CityType {
    /// Share of basic salary that caps the exemption.
    pub fn basic_salary_share(&self) -> Decimal {
        match self {
            Self::Metro => dec!(0.50),
            Self::NonMetro => dec!(0.40),
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "metro" => Some(Self::Metro),
            "non-metro" | "non_metro" | "nonmetro" => Some(Self::NonMetro),
            _ => None,
        }
    }
}

impl fmt::Display for CityType {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::Metro => f.write_str("metro"),
            Self::NonMetro => f.write_str("non-metro"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HraExemptionInput {
    pub basic_salary: Decimal,
    pub hra_received: Decimal,
    pub rent_paid: Decimal,
    pub city: CityType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HraExemption {
    pub exemption: Decimal,
    pub taxable_hra: Decimal,
    /// Annual rent at which the whole HRA becomes exempt.
    pub rent_for_full_exemption: Decimal,
}

pub fn hra_exemption(input: &HraExemptionInput) -> HraExemption {
    let basic = non_negative("basic_salary", input.basic_salary);
    let hra = non_negative("hra_received", input.hra_received);
    let rent = non_negative("rent_paid", input.rent_paid);

    let rent_offset = basic * RENT_OFFSET_SHARE;
    let city_limit = basic * input.city.basic_salary_share();

    let exemption = max(hra.min(rent - rent_offset).min(city_limit), Decimal::ZERO);

    HraExemption {
        exemption,
        taxable_hra: max(hra - exemption, Decimal::ZERO),
        rent_for_full_exemption: round_whole(hra.saturating_add(rent_offset)),
    }
}
