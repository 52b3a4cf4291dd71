use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::CalculationError;
use crate::calculations::common::ensure_rate;

/// Flat employee and employer social-security contribution rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialSecurityRates {
    pub employee_rate: Decimal,
    pub employer_rate: Decimal,
}

impl SocialSecurityRates {
    /// Checks that both rates lie in `[0, 1]`.
    pub fn validate(&self) -> Result<(), CalculationError> {
        ensure_rate("employee social security", self.employee_rate)?;
        ensure_rate("employer social security", self.employer_rate)?;
        Ok(())
    }

    pub fn combined_rate(&self) -> Decimal {
        self.employee_rate + self.employer_rate
    }
}
