use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::tax_configuration::{GETFUND, NHIL, VAT};

/// A single named levy amount, as printed on an invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevyAmount {
    pub name: String,
    pub amount: Decimal,
}

/// Itemized levies charged on a subtotal.
///
/// Every amount is already rounded to two decimal places, and the totals are
/// sums of those rounded amounts, so:
///
/// - `total_levies == vat_amount + nhil_amount + getfund_amount + Σ custom_levy_amounts`
/// - `total_amount == subtotal + total_levies`
///
/// hold exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBreakdown {
    pub subtotal: Decimal,
    pub vat_amount: Decimal,
    pub nhil_amount: Decimal,
    pub getfund_amount: Decimal,
    pub custom_levy_amounts: Vec<LevyAmount>,
    pub total_levies: Decimal,
    pub total_amount: Decimal,
}

impl TaxBreakdown {
    /// Every levy in print order: VAT, NHIL, GETFund, then custom levies in
    /// the order they were configured.
    pub fn line_items(&self) -> Vec<LevyAmount> {
        let statutory = [
            (VAT, self.vat_amount),
            (NHIL, self.nhil_amount),
            (GETFUND, self.getfund_amount),
        ]
        .into_iter()
        .map(|(name, amount)| LevyAmount {
            name: name.to_string(),
            amount,
        });

        statutory
            .chain(self.custom_levy_amounts.iter().cloned())
            .collect()
    }
}
