//! Flat-rate social-security contributions on gross pay.
//!
//! The employee and employer shares are two independent percentages of the
//! same gross pay, each rounded to the cent. They have no bearing on income
//! tax unless the caller chooses to deduct the employee share first.

use rust_decimal::Decimal;

use crate::calculations::common::{apply_rate, ensure_non_negative, round_half_up};
use crate::{CalculationError, SocialSecurityContributions, SocialSecurityRates};

/// Splits social-security contributions for `gross_pay`.
///
/// # Errors
///
/// - [`CalculationError::InvalidInput`] if `gross_pay` is negative
/// - [`CalculationError::InvalidConfiguration`] if either rate is outside `[0, 1]`
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use levy_core::SocialSecurityRates;
/// use levy_core::calculations::split_social_security;
///
/// let rates = SocialSecurityRates {
///     employee_rate: dec!(0.055),
///     employer_rate: dec!(0.13),
/// };
///
/// let split = split_social_security(dec!(1000), &rates).unwrap();
///
/// assert_eq!(split.employee_contribution, dec!(55.00));
/// assert_eq!(split.employer_contribution, dec!(130.00));
/// ```
pub fn split_social_security(
    gross_pay: Decimal,
    rates: &SocialSecurityRates,
) -> Result<SocialSecurityContributions, CalculationError> {
    rates.validate()?;
    let gross_pay = ensure_non_negative("gross_pay", gross_pay)?;

    Ok(SocialSecurityContributions {
        employee_contribution: round_half_up(apply_rate(
            "gross_pay",
            gross_pay,
            rates.employee_rate,
        )?),
        employer_contribution: round_half_up(apply_rate(
            "gross_pay",
            gross_pay,
            rates.employer_rate,
        )?),
    })
}
