use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::CalculationError;
use crate::calculations::common::ensure_rate;

/// Display names for the statutory levies, in print order.
pub const VAT: &str = "VAT";
pub const NHIL: &str = "NHIL";
pub const GETFUND: &str = "GETFund";

/// An additional, named levy charged on the same base as VAT.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomLevy {
    pub name: String,
    pub rate: Decimal,
}

impl CustomLevy {
    pub fn new(
        name: impl Into<String>,
        rate: Decimal,
    ) -> Self {
        Self {
            name: name.into(),
            rate,
        }
    }
}

/// Levy rates applied to a sale or invoice subtotal.
///
/// Every rate is a fraction in `[0, 1]` (so 15% is `0.15`). The configuration
/// is supplied by the caller for each calculation and never modified by it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxConfiguration {
    pub vat_rate: Decimal,
    pub nhil_rate: Decimal,
    pub getfund_rate: Decimal,
    #[serde(default)]
    pub custom_levies: Vec<CustomLevy>,
}

impl TaxConfiguration {
    /// Checks that every rate, statutory and custom, lies in `[0, 1]`.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use levy_core::{CustomLevy, TaxConfiguration};
    ///
    /// let config = TaxConfiguration {
    ///     vat_rate: dec!(0.15),
    ///     nhil_rate: dec!(0.025),
    ///     getfund_rate: dec!(0.025),
    ///     custom_levies: vec![CustomLevy::new("Tourism", dec!(1.5))],
    /// };
    ///
    /// assert!(config.validate().unwrap_err().is_invalid_configuration());
    /// ```
    pub fn validate(&self) -> Result<(), CalculationError> {
        for (name, rate) in self.rates() {
            ensure_rate(name, rate)?;
        }
        Ok(())
    }

    /// All levies as `(name, rate)` pairs, statutory levies first.
    pub fn rates(&self) -> impl Iterator<Item = (&str, Decimal)> + '_ {
        let statutory: [(&str, Decimal); 3] = [
            (VAT, self.vat_rate),
            (NHIL, self.nhil_rate),
            (GETFUND, self.getfund_rate),
        ];

        statutory.into_iter().chain(
            self.custom_levies
                .iter()
                .map(|levy| (levy.name.as_str(), levy.rate)),
        )
    }
}
