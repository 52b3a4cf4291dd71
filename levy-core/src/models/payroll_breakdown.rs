use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{BracketTable, SocialSecurityRates};

/// Employee and employer social-security contributions on one gross pay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialSecurityContributions {
    pub employee_contribution: Decimal,
    pub employer_contribution: Decimal,
}

impl SocialSecurityContributions {
    pub fn total(&self) -> Decimal {
        self.employee_contribution + self.employer_contribution
    }
}

/// How taxable income is derived from gross pay.
///
/// Whether the employee's social-security contribution is deductible before
/// income tax depends on the jurisdiction, so callers must pick one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxableIncomeBasis {
    /// Income tax is charged on the full gross pay.
    GrossPay,
    /// Income tax is charged on gross pay minus the employee contribution.
    GrossLessEmployeeContribution,
}

/// Withholding computed for one employee's gross pay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollBreakdown {
    pub gross_pay: Decimal,
    pub employee_contribution: Decimal,
    pub employer_contribution: Decimal,
    pub taxable_income: Decimal,
    pub income_tax: Decimal,
    /// `gross_pay - employee_contribution - income_tax`
    pub net_pay: Decimal,
}

/// A payroll breakdown together with the configuration that produced it.
///
/// Persist this alongside the payroll record so later changes to the rates or
/// the bracket table do not alter historical runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollSnapshot {
    pub breakdown: PayrollBreakdown,
    pub rates: SocialSecurityRates,
    pub brackets: BracketTable,
    pub basis: TaxableIncomeBasis,
}
