//! Display helpers for Indian currency amounts.
//!
//! Amounts are grouped the Indian way: the last three digits, then pairs
//! (`12,34,56,789`). Nothing in the tax arithmetic depends on this module.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::calculations::common::round_whole;
use crate::models::TaxSlab;

const THOUSAND: Decimal = dec!(1000);
const LAKH: Decimal = dec!(100000);
const CRORE: Decimal = dec!(10000000);

/// Whole-unit amount with lakh/crore digit grouping, no currency symbol.
///
/// ```
/// use rust_decimal_macros::dec;
/// use regime_core::format::group_indian;
///
/// assert_eq!(group_indian(dec!(1000000)), "10,00,000");
/// assert_eq!(group_indian(dec!(950000.4)), "9,50,000");
/// assert_eq!(group_indian(dec!(999)), "999");
/// ```
pub fn group_indian(amount: Decimal) -> String {
    let rounded = round_whole(amount);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let digits = rounded.abs().trunc().normalize().to_string();

    let (head, tail) = if digits.len() > 3 {
        digits.split_at(digits.len() - 3)
    } else {
        ("", digits.as_str())
    };

    let mut groups = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (front, pair) = rest.split_at(rest.len() - 2);
        groups.push(pair);
        rest = front;
    }
    if !rest.is_empty() {
        groups.push(rest);
    }
    groups.reverse();
    groups.push(tail);

    let grouped = groups.join(",");
    if negative { format!("-{grouped}") } else { grouped }
}

/// `₹` followed by the grouped whole-unit amount.
pub fn format_currency(amount: Decimal) -> String {
    let grouped = group_indian(amount);
    match grouped.strip_prefix('-') {
        Some(positive) => format!("-₹{positive}"),
        None => format!("₹{grouped}"),
    }
}

/// Percentage with two decimal places, e.g. `5.25%`.
pub fn format_percentage(value: Decimal) -> String {
    format!("{}%", fixed(value, 2))
}

/// Short form with `K`, `L` (lakh) or `Cr` (crore) suffix and one decimal.
///
/// ```
/// use rust_decimal_macros::dec;
/// use regime_core::format::format_compact;
///
/// assert_eq!(format_compact(dec!(12000000)), "1.2 Cr");
/// assert_eq!(format_compact(dec!(950000)), "9.5 L");
/// assert_eq!(format_compact(dec!(750)), "750");
/// ```
pub fn format_compact(amount: Decimal) -> String {
    let (divisor, suffix) = if amount >= CRORE {
        (CRORE, " Cr")
    } else if amount >= LAKH {
        (LAKH, " L")
    } else if amount >= THOUSAND {
        (THOUSAND, " K")
    } else {
        return amount.normalize().to_string();
    };
    format!("{}{suffix}", fixed(amount / divisor, 1))
}

fn fixed(
    value: Decimal,
    decimal_places: u32,
) -> String {
    let mut rounded =
        value.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(decimal_places);
    rounded.to_string()
}

/// One slab as `₹3,00,000 - ₹6,00,000 @ 5%`.
pub fn format_slab(slab: &TaxSlab) -> String {
    let max = slab
        .max_income
        .map(format_currency)
        .unwrap_or_else(|| "∞".to_string());
    format!(
        "{} - {} @ {}%",
        format_currency(slab.min_income),
        max,
        slab.rate.normalize()
    )
}
