//! Progressive (PAYE-style) income tax over a bracket table.
//!
//! Income is sliced into the table's bands from the bottom up and each slice
//! is taxed at its own band's rate only. Moving into a higher band never
//! changes the tax on income already counted in the lower bands, so tax is
//! non-decreasing in income.
//!
//! # Example
//!
//! With the bands `0–490 @ 0%`, `490–600 @ 5%`, `600–730 @ 10%`,
//! `730–3730 @ 17.5%`, ... an income of 1000 is taxed
//! `0 + 110 × 5% + 130 × 10% + 270 × 17.5% = 0 + 5.50 + 13.00 + 47.25 = 65.75`.
//!
//! ```
//! use rust_decimal_macros::dec;
//! use levy_core::{BracketTable, IncomeTaxBracket};
//! use levy_core::calculations::compute_income_tax;
//!
//! let table = BracketTable::new(vec![
//!     IncomeTaxBracket::new(dec!(0), Some(dec!(490)), dec!(0)),
//!     IncomeTaxBracket::new(dec!(490), Some(dec!(600)), dec!(0.05)),
//!     IncomeTaxBracket::new(dec!(600), Some(dec!(730)), dec!(0.10)),
//!     IncomeTaxBracket::new(dec!(730), Some(dec!(3730)), dec!(0.175)),
//!     IncomeTaxBracket::new(dec!(3730), None, dec!(0.25)),
//! ])
//! .unwrap();
//!
//! assert_eq!(compute_income_tax(dec!(1000), &table).unwrap(), dec!(65.75));
//! ```

use rust_decimal::Decimal;
use tracing::trace;

use crate::calculations::common::{apply_rate, ensure_non_negative, round_half_up};
use crate::{BracketTable, CalculationError, InputError};

/// Computes income tax on `taxable_income` using band taxation.
///
/// `taxable_income` must already be net of anything the business deducts
/// before withholding; this function performs no deduction of its own.
///
/// The result is rounded to the cent.
///
/// # Errors
///
/// Returns [`CalculationError::InvalidInput`] if `taxable_income` is negative.
/// The table itself was validated when it was built.
pub fn compute_income_tax(
    taxable_income: Decimal,
    table: &BracketTable,
) -> Result<Decimal, CalculationError> {
    let taxable_income = ensure_non_negative("taxable_income", taxable_income)?;

    let mut previous_limit = Decimal::ZERO;
    let mut remaining = taxable_income;
    let mut tax = Decimal::ZERO;

    for (index, bracket) in table.iter().enumerate() {
        if remaining <= Decimal::ZERO {
            break;
        }

        let band_width = match bracket.upper_bound {
            Some(upper_bound) => upper_bound - previous_limit,
            None => remaining,
        };
        let taxable_in_band = remaining.min(band_width);
        let band_tax = apply_rate("taxable_income", taxable_in_band, bracket.rate)?;

        trace!(
            band = index,
            taxable_in_band = %taxable_in_band,
            rate = %bracket.rate,
            band_tax = %band_tax,
            "taxed income band"
        );

        tax = tax
            .checked_add(band_tax)
            .ok_or(InputError::OutOfRange {
                field: "taxable_income",
            })?;
        remaining -= taxable_in_band;
        previous_limit = bracket
            .upper_bound
            .unwrap_or(previous_limit + band_width);
    }

    Ok(round_half_up(tax))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::IncomeTaxBracket;

    fn seven_band_table() -> BracketTable {
        BracketTable::new(vec![
            IncomeTaxBracket::new(dec!(0), Some(dec!(490)), dec!(0)),
            IncomeTaxBracket::new(dec!(490), Some(dec!(600)), dec!(0.05)),
            IncomeTaxBracket::new(dec!(600), Some(dec!(730)), dec!(0.10)),
            IncomeTaxBracket::new(dec!(730), Some(dec!(3730)), dec!(0.175)),
            IncomeTaxBracket::new(dec!(3730), Some(dec!(20730)), dec!(0.25)),
            IncomeTaxBracket::new(dec!(20730), Some(dec!(50730)), dec!(0.30)),
            IncomeTaxBracket::new(dec!(50730), None, dec!(0.35)),
        ])
        .unwrap()
    }

    #[test]
    fn zero_income_is_untaxed() {
        let result = compute_income_tax(Decimal::ZERO, &seven_band_table()).unwrap();

        assert_eq!(result, Decimal::ZERO);
    }

    #[test]
    fn income_within_zero_rated_band_is_untaxed() {
        let result = compute_income_tax(dec!(490), &seven_band_table()).unwrap();

        assert_eq!(result, Decimal::ZERO);
    }

    #[test]
    fn income_spanning_four_bands() {
        let result = compute_income_tax(dec!(1000), &seven_band_table()).unwrap();

        assert_eq!(result, dec!(65.75));
    }

    #[test]
    fn income_at_band_boundary() {
        // 5.50 + 13.00 + 3000 × 17.5% = 543.50
        let result = compute_income_tax(dec!(3730), &seven_band_table()).unwrap();

        assert_eq!(result, dec!(543.50));
    }

    #[test]
    fn income_in_open_ended_top_band() {
        // Bands below 50730: 5.50 + 13.00 + 525.00 + 4250.00 + 9000.00 = 13793.50
        // Top band: 9270 × 35% = 3244.50
        let result = compute_income_tax(dec!(60000), &seven_band_table()).unwrap();

        assert_eq!(result, dec!(17038.00));
    }

    #[test]
    fn result_is_rounded_to_the_cent() {
        // 490.10: 0.10 × 5% = 0.005 → 0.01
        let result = compute_income_tax(dec!(490.10), &seven_band_table()).unwrap();

        assert_eq!(result, dec!(0.01));
    }

    #[test]
    fn first_band_is_taxed_from_zero() {
        let table = BracketTable::new(vec![
            IncomeTaxBracket::new(dec!(0), Some(dec!(200)), dec!(0.10)),
            IncomeTaxBracket::new(dec!(200), None, dec!(0.20)),
        ])
        .unwrap();

        assert_eq!(compute_income_tax(dec!(50), &table).unwrap(), dec!(5.00));
        // 200 × 10% + 50 × 20%
        assert_eq!(compute_income_tax(dec!(250), &table).unwrap(), dec!(30.00));
    }

    #[test]
    fn table_starting_above_zero_is_rejected() {
        let result = BracketTable::new(vec![
            IncomeTaxBracket::new(dec!(100), Some(dec!(200)), dec!(0.10)),
            IncomeTaxBracket::new(dec!(200), None, dec!(0.20)),
        ]);

        assert!(result.unwrap_err().is_invalid_configuration());
    }

    #[test]
    fn zero_width_band_contributes_nothing() {
        let table = BracketTable::new(vec![
            IncomeTaxBracket::new(dec!(0), Some(dec!(0)), dec!(0.50)),
            IncomeTaxBracket::new(dec!(0), None, dec!(0.10)),
        ])
        .unwrap();

        assert_eq!(compute_income_tax(dec!(100), &table).unwrap(), dec!(10.00));
    }

    #[test]
    fn rejects_negative_income() {
        let result = compute_income_tax(dec!(-1), &seven_band_table());

        assert_eq!(
            result,
            Err(CalculationError::InvalidInput(InputError::Negative {
                field: "taxable_income",
                value: dec!(-1),
            }))
        );
    }
}
