//! Levies charged on a sale or invoice subtotal.
//!
//! VAT, NHIL, GETFund and any custom levies are all percentages of the same
//! pre-tax subtotal. They are computed side by side and summed; no levy is
//! charged on another levy.
//!
//! | Line | Description |
//! |------|-------------|
//! | 1    | Subtotal |
//! | 2    | VAT: Line 1 × VAT rate |
//! | 3    | NHIL: Line 1 × NHIL rate |
//! | 4    | GETFund: Line 1 × GETFund rate |
//! | 5    | Custom levies: Line 1 × each custom rate |
//! | 6    | Total levies: Lines 2 through 5 |
//! | 7    | Total amount: Line 1 + Line 6 |
//!
//! Each of lines 2 to 5 is rounded to the cent on its own; lines 6 and 7 are
//! sums of rounded figures, so the totals always add up on the printed
//! document.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use levy_core::TaxConfiguration;
//! use levy_core::calculations::TaxCascadeCalculator;
//!
//! let config = TaxConfiguration {
//!     vat_rate: dec!(0.15),
//!     nhil_rate: dec!(0.025),
//!     getfund_rate: dec!(0.025),
//!     custom_levies: Vec::new(),
//! };
//!
//! let breakdown = TaxCascadeCalculator::new(&config).compute(dec!(1000)).unwrap();
//!
//! assert_eq!(breakdown.vat_amount, dec!(150.00));
//! assert_eq!(breakdown.total_levies, dec!(200.00));
//! assert_eq!(breakdown.total_amount, dec!(1200.00));
//! ```

use rust_decimal::Decimal;
use tracing::trace;

use crate::calculations::common::{apply_rate, checked_sum, ensure_non_negative, round_half_up};
use crate::{CalculationError, LevyAmount, TaxBreakdown, TaxConfiguration};

/// Computes itemized levies for a subtotal.
///
/// The calculator borrows its configuration, so one configuration can back any
/// number of calculators across threads.
#[derive(Debug, Clone, Copy)]
pub struct TaxCascadeCalculator<'a> {
    config: &'a TaxConfiguration,
}

impl<'a> TaxCascadeCalculator<'a> {
    pub fn new(config: &'a TaxConfiguration) -> Self {
        Self { config }
    }

    /// Computes the levy breakdown for `subtotal`.
    ///
    /// # Errors
    ///
    /// - [`CalculationError::InvalidConfiguration`] if any rate is outside `[0, 1]`
    /// - [`CalculationError::InvalidInput`] if `subtotal` is negative or the
    ///   totals overflow
    pub fn compute(
        &self,
        subtotal: Decimal,
    ) -> Result<TaxBreakdown, CalculationError> {
        self.config.validate()?;
        let subtotal = ensure_non_negative("subtotal", subtotal)?;

        let vat_amount = self.levy(subtotal, self.config.vat_rate)?;
        let nhil_amount = self.levy(subtotal, self.config.nhil_rate)?;
        let getfund_amount = self.levy(subtotal, self.config.getfund_rate)?;

        let custom_levy_amounts = self
            .config
            .custom_levies
            .iter()
            .map(|levy| -> Result<LevyAmount, CalculationError> {
                Ok(LevyAmount {
                    name: levy.name.clone(),
                    amount: self.levy(subtotal, levy.rate)?,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let total_levies = checked_sum(
            "total_levies",
            [vat_amount, nhil_amount, getfund_amount]
                .into_iter()
                .chain(custom_levy_amounts.iter().map(|levy| levy.amount)),
        )?;
        let total_amount = checked_sum("total_amount", [subtotal, total_levies])?;

        trace!(
            subtotal = %subtotal,
            total_levies = %total_levies,
            total_amount = %total_amount,
            "computed tax cascade"
        );

        Ok(TaxBreakdown {
            subtotal,
            vat_amount,
            nhil_amount,
            getfund_amount,
            custom_levy_amounts,
            total_levies,
            total_amount,
        })
    }

    /// One levy line: the subtotal times the rate, rounded to the cent.
    fn levy(
        &self,
        subtotal: Decimal,
        rate: Decimal,
    ) -> Result<Decimal, CalculationError> {
        Ok(round_half_up(apply_rate("subtotal", subtotal, rate)?))
    }
}

/// Shorthand for `TaxCascadeCalculator::new(config).compute(subtotal)`.
pub fn compute_tax_cascade(
    subtotal: Decimal,
    config: &TaxConfiguration,
) -> Result<TaxBreakdown, CalculationError> {
    TaxCascadeCalculator::new(config).compute(subtotal)
}
