//! Payroll withholding for one employee's gross pay.
//!
//! [`PayrollCalculator`] bundles the social-security split and the
//! progressive income tax behind one value that borrows the configuration for
//! a payroll run. It is `Copy` and `Sync`, so a run can fan out one
//! calculation per employee across threads against a single validated table.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use levy_core::{BracketTable, IncomeTaxBracket, SocialSecurityRates, TaxableIncomeBasis};
//! use levy_core::calculations::PayrollCalculator;
//!
//! let rates = SocialSecurityRates {
//!     employee_rate: dec!(0.055),
//!     employer_rate: dec!(0.13),
//! };
//! let table = BracketTable::new(vec![
//!     IncomeTaxBracket::new(dec!(0), Some(dec!(490)), dec!(0)),
//!     IncomeTaxBracket::new(dec!(490), None, dec!(0.10)),
//! ])
//! .unwrap();
//!
//! let payroll = PayrollCalculator::new(&rates, &table);
//! let breakdown = payroll.calculate(dec!(1000), TaxableIncomeBasis::GrossPay).unwrap();
//!
//! assert_eq!(breakdown.employee_contribution, dec!(55.00));
//! assert_eq!(breakdown.income_tax, dec!(51.00));
//! assert_eq!(breakdown.net_pay, dec!(894.00));
//! ```

use rust_decimal::Decimal;
use tracing::trace;

use crate::calculations::common::{checked_sum, ensure_non_negative};
use crate::calculations::{compute_income_tax, split_social_security};
use crate::{
    BracketTable, CalculationError, InputError, PayrollBreakdown, PayrollSnapshot, SocialSecurityContributions,
    SocialSecurityRates, TaxableIncomeBasis,
};

/// Computes withholding against one set of rates and one bracket table.
#[derive(Debug, Clone, Copy)]
pub struct PayrollCalculator<'a> {
    rates: &'a SocialSecurityRates,
    brackets: &'a BracketTable,
}

impl<'a> PayrollCalculator<'a> {
    pub fn new(
        rates: &'a SocialSecurityRates,
        brackets: &'a BracketTable,
    ) -> Self {
        Self { rates, brackets }
    }

    /// See [`split_social_security`].
    pub fn split_social_security(
        &self,
        gross_pay: Decimal,
    ) -> Result<SocialSecurityContributions, CalculationError> {
        split_social_security(gross_pay, self.rates)
    }

    /// See [`compute_income_tax`].
    pub fn compute_income_tax(
        &self,
        taxable_income: Decimal,
    ) -> Result<Decimal, CalculationError> {
        compute_income_tax(taxable_income, self.brackets)
    }

    /// Computes the full withholding for `gross_pay`.
    ///
    /// `basis` decides whether income tax is charged on the gross pay or on
    /// the gross pay less the employee's social-security contribution.
    ///
    /// # Errors
    ///
    /// - [`CalculationError::InvalidInput`] if `gross_pay` is negative, or if
    ///   the employee contribution plus income tax exceeds it
    /// - [`CalculationError::InvalidConfiguration`] if a rate is out of range
    pub fn calculate(
        &self,
        gross_pay: Decimal,
        basis: TaxableIncomeBasis,
    ) -> Result<PayrollBreakdown, CalculationError> {
        let gross_pay = ensure_non_negative("gross_pay", gross_pay)?;
        let contributions = self.split_social_security(gross_pay)?;

        let taxable_income = match basis {
            TaxableIncomeBasis::GrossPay => gross_pay,
            TaxableIncomeBasis::GrossLessEmployeeContribution => {
                (gross_pay - contributions.employee_contribution).max(Decimal::ZERO)
            }
        };
        let income_tax = self.compute_income_tax(taxable_income)?;
        let withholding = checked_sum(
            "withholding",
            [contributions.employee_contribution, income_tax],
        )?;
        if withholding > gross_pay {
            return Err(InputError::WithholdingExceedsGrossPay {
                gross_pay,
                withholding,
            }
            .into());
        }
        let net_pay = gross_pay - withholding;

        trace!(
            gross_pay = %gross_pay,
            ?basis,
            taxable_income = %taxable_income,
            income_tax = %income_tax,
            "computed payroll withholding"
        );

        Ok(PayrollBreakdown {
            gross_pay,
            employee_contribution: contributions.employee_contribution,
            employer_contribution: contributions.employer_contribution,
            taxable_income,
            income_tax,
            net_pay,
        })
    }

    /// Like [`PayrollCalculator::calculate`], but keeps a copy of the
    /// configuration used so the result can be stored with the payroll record.
    pub fn snapshot(
        &self,
        gross_pay: Decimal,
        basis: TaxableIncomeBasis,
    ) -> Result<PayrollSnapshot, CalculationError> {
        let breakdown = self.calculate(gross_pay, basis)?;
        Ok(PayrollSnapshot {
            breakdown,
            rates: *self.rates,
            brackets: self.brackets.clone(),
            basis,
        })
    }
}
