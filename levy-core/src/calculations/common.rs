//! Common utility functions for levy and payroll calculations.
//!
//! This module provides the shared rounding rule and the input and rate checks
//! every calculator runs before doing any arithmetic.

use rust_decimal::Decimal;
use tracing::debug;

use crate::{CalculationError, ConfigurationError, InputError};

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// This follows standard financial rounding conventions where values at exactly
/// 0.005 are rounded up to 0.01 (away from zero).
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use levy_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Fails with [`InputError::Negative`] when `value` is below zero.
pub fn ensure_non_negative(
    field: &'static str,
    value: Decimal,
) -> Result<Decimal, CalculationError> {
    if value < Decimal::ZERO {
        debug!(field, value = %value, "rejected negative amount");
        return Err(InputError::Negative { field, value }.into());
    }
    Ok(value)
}

/// Fails with [`ConfigurationError::RateOutOfRange`] unless `rate` is in `[0, 1]`.
pub fn ensure_rate(
    name: &str,
    rate: Decimal,
) -> Result<(), CalculationError> {
    if rate < Decimal::ZERO || rate > Decimal::ONE {
        debug!(name, rate = %rate, "rejected rate outside [0, 1]");
        return Err(ConfigurationError::RateOutOfRange {
            name: name.to_string(),
            rate,
        }
        .into());
    }
    Ok(())
}

/// Parses a monetary amount supplied as text.
///
/// Text that is not a decimal number (including `NaN` and `inf`) is reported
/// as [`InputError::NotANumber`]; negative amounts as [`InputError::Negative`].
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use levy_core::calculations::common::parse_amount;
///
/// assert_eq!(parse_amount("subtotal", " 1000.50 "), Ok(dec!(1000.50)));
/// assert!(parse_amount("subtotal", "NaN").unwrap_err().is_invalid_input());
/// ```
pub fn parse_amount(
    field: &'static str,
    raw: &str,
) -> Result<Decimal, CalculationError> {
    let value = raw
        .trim()
        .parse::<Decimal>()
        .map_err(|_| InputError::NotANumber {
            field,
            raw: raw.to_string(),
        })?;
    ensure_non_negative(field, value)
}

/// Converts a floating-point amount from a loosely typed source.
///
/// NaN and infinities are [`InputError::NotANumber`]; values beyond the
/// decimal range are [`InputError::OutOfRange`].
pub fn amount_from_f64(
    field: &'static str,
    value: f64,
) -> Result<Decimal, CalculationError> {
    if !value.is_finite() {
        return Err(InputError::NotANumber {
            field,
            raw: value.to_string(),
        }
        .into());
    }
    let value = Decimal::try_from(value).map_err(|_| InputError::OutOfRange { field })?;
    ensure_non_negative(field, value)
}

/// Multiplies an amount by a rate, reporting overflow instead of panicking.
pub(crate) fn apply_rate(
    field: &'static str,
    amount: Decimal,
    rate: Decimal,
) -> Result<Decimal, CalculationError> {
    amount
        .checked_mul(rate)
        .ok_or_else(|| InputError::OutOfRange { field }.into())
}

/// Adds amounts, reporting overflow instead of panicking.
pub(crate) fn checked_sum<I>(
    field: &'static str,
    amounts: I,
) -> Result<Decimal, CalculationError>
where
    I: IntoIterator<Item = Decimal>,
{
    amounts
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, amount| acc.checked_add(amount))
        .ok_or_else(|| InputError::OutOfRange { field }.into())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // round_half_up tests
    // =========================================================================

    #[test]
    fn round_half_up_rounds_down_below_midpoint() {
        let result = round_half_up(dec!(123.454));

        assert_eq!(result, dec!(123.45));
    }

    #[test]
    fn round_half_up_rounds_up_at_midpoint() {
        let result = round_half_up(dec!(0.125));

        assert_eq!(result, dec!(0.13));
    }

    #[test]
    fn round_half_up_handles_negative_values() {
        let result = round_half_up(dec!(-123.455));

        assert_eq!(result, dec!(-123.46)); // Away from zero
    }

    #[test]
    fn round_half_up_handles_small_values() {
        let result = round_half_up(dec!(0.004));

        assert_eq!(result, dec!(0.00));
    }

    #[test]
    fn round_half_up_handles_large_values() {
        let result = round_half_up(dec!(999999.995));

        assert_eq!(result, dec!(1000000.00));
    }

    // =========================================================================
    // validation tests
    // =========================================================================

    #[test]
    fn ensure_non_negative_accepts_zero() {
        assert_eq!(ensure_non_negative("gross_pay", dec!(0)), Ok(dec!(0)));
    }

    #[test]
    fn ensure_non_negative_rejects_negative() {
        let result = ensure_non_negative("gross_pay", dec!(-0.01));

        assert_eq!(
            result,
            Err(CalculationError::InvalidInput(InputError::Negative {
                field: "gross_pay",
                value: dec!(-0.01),
            }))
        );
    }

    #[test]
    fn ensure_rate_accepts_bounds() {
        assert_eq!(ensure_rate("VAT", dec!(0)), Ok(()));
        assert_eq!(ensure_rate("VAT", dec!(1)), Ok(()));
    }

    #[test]
    fn ensure_rate_rejects_percentages_given_as_whole_numbers() {
        let result = ensure_rate("VAT", dec!(15));

        assert!(result.unwrap_err().is_invalid_configuration());
    }

    // =========================================================================
    // parsing tests
    // =========================================================================

    #[test]
    fn parse_amount_rejects_garbage() {
        let result = parse_amount("subtotal", "12,50");

        assert_eq!(
            result,
            Err(CalculationError::InvalidInput(InputError::NotANumber {
                field: "subtotal",
                raw: "12,50".to_string(),
            }))
        );
    }

    #[test]
    fn parse_amount_rejects_negative() {
        let result = parse_amount("subtotal", "-5");

        assert!(matches!(
            result,
            Err(CalculationError::InvalidInput(InputError::Negative { .. }))
        ));
    }

    #[test]
    fn amount_from_f64_rejects_nan_and_infinity() {
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let result = amount_from_f64("gross_pay", value);

            assert!(matches!(
                result,
                Err(CalculationError::InvalidInput(InputError::NotANumber { .. }))
            ));
        }
    }

    #[test]
    fn amount_from_f64_converts_finite_values() {
        assert_eq!(amount_from_f64("gross_pay", 1250.5), Ok(dec!(1250.5)));
    }

    #[test]
    fn checked_sum_reports_overflow() {
        let result = checked_sum("total", [Decimal::MAX, Decimal::ONE]);

        assert_eq!(
            result,
            Err(CalculationError::InvalidInput(InputError::OutOfRange {
                field: "total"
            }))
        );
    }
}
