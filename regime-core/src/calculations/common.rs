//! Rounding and input-coercion helpers shared by the regime calculations.

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::warn;

/// Rounds to the nearest whole currency unit, midpoint away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use regime_core::calculations::common::round_whole;
///
/// assert_eq!(round_whole(dec!(78958.33)), dec!(78958));
/// assert_eq!(round_whole(dec!(12.5)), dec!(13));
/// ```
pub fn round_whole(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 are rounded away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use regime_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(3.254)), dec!(3.25));
/// assert_eq!(round_half_up(dec!(3.255)), dec!(3.26));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the maximum of two decimal values.
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}

/// Adds `values`, clamping at [`Decimal::MAX`] instead of overflowing.
///
/// ```
/// use rust_decimal::Decimal;
/// use rust_decimal_macros::dec;
/// use regime_core::calculations::common::saturating_sum;
///
/// assert_eq!(saturating_sum([dec!(1200), dec!(34.5)]), dec!(1234.5));
/// assert_eq!(saturating_sum([Decimal::MAX, dec!(1)]), Decimal::MAX);
/// ```
pub fn saturating_sum(values: impl IntoIterator<Item = Decimal>) -> Decimal {
    values
        .into_iter()
        .fold(Decimal::ZERO, Decimal::saturating_add)
}

/// Coerces a negative input amount to zero.
///
/// Input profiles are expected to be non-negative already; a negative value
/// is logged and contributes nothing instead of failing the calculation.
pub fn non_negative(
    field: &'static str,
    value: Decimal,
) -> Decimal {
    if value.is_sign_negative() && !value.is_zero() {
        warn!(field, value = %value, "negative amount treated as zero");
        Decimal::ZERO
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // round_whole tests
    // =========================================================================

    #[test]
    fn round_whole_rounds_down_below_midpoint() {
        assert_eq!(round_whole(dec!(78958.333)), dec!(78958));
    }

    #[test]
    fn round_whole_rounds_up_at_midpoint() {
        assert_eq!(round_whole(dec!(1032.5)), dec!(1033));
    }

    #[test]
    fn round_whole_preserves_whole_values() {
        assert_eq!(round_whole(dec!(52500)), dec!(52500));
    }

    // =========================================================================
    // round_half_up tests
    // =========================================================================

    #[test]
    fn round_half_up_rounds_down_below_midpoint() {
        assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
    }

    #[test]
    fn round_half_up_rounds_up_at_midpoint() {
        assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
    }

    #[test]
    fn round_half_up_handles_zero() {
        assert_eq!(round_half_up(dec!(0.00)), dec!(0.00));
    }

    // =========================================================================
    // max tests
    // =========================================================================

    #[test]
    fn max_returns_larger_value() {
        assert_eq!(max(dec!(100.00), dec!(200.00)), dec!(200.00));
        assert_eq!(max(dec!(200.00), dec!(100.00)), dec!(200.00));
    }

    #[test]
    fn max_handles_negative_and_zero() {
        assert_eq!(max(dec!(-50000), Decimal::ZERO), Decimal::ZERO);
    }

    // =========================================================================
    // saturating_sum tests
    // =========================================================================

    #[test]
    fn saturating_sum_of_nothing_is_zero() {
        assert_eq!(saturating_sum(Vec::new()), Decimal::ZERO);
    }

    #[test]
    fn saturating_sum_adds_ordinary_amounts_exactly() {
        assert_eq!(saturating_sum([dec!(600000), dec!(240000.50), dec!(0.25)]), dec!(840000.75));
    }

    #[test]
    fn saturating_sum_clamps_at_max() {
        let half = Decimal::MAX / dec!(2) + dec!(1);

        assert_eq!(saturating_sum([half, half, dec!(5)]), Decimal::MAX);
    }

    // =========================================================================
    // non_negative tests
    // =========================================================================

    #[test]
    fn non_negative_passes_positive_values_through() {
        assert_eq!(non_negative("base_salary", dec!(1200.50)), dec!(1200.50));
    }

    #[test]
    fn non_negative_zeroes_negative_values() {
        assert_eq!(non_negative("base_salary", dec!(-1)), Decimal::ZERO);
    }

    #[test]
    fn non_negative_keeps_zero() {
        assert_eq!(non_negative("elss", Decimal::ZERO), Decimal::ZERO);
    }
}
