mod income_tax_bracket;
mod payroll_breakdown;
mod social_security_rates;
mod tax_breakdown;
mod tax_configuration;

pub use income_tax_bracket::{BracketTable, IncomeTaxBracket};
pub use payroll_breakdown::{
    PayrollBreakdown, PayrollSnapshot, SocialSecurityContributions, TaxableIncomeBasis,
};
pub use social_security_rates::SocialSecurityRates;
pub use tax_breakdown::{LevyAmount, TaxBreakdown};
pub use tax_configuration::{CustomLevy, GETFUND, NHIL, TaxConfiguration, VAT};
