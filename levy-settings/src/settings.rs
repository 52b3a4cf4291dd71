use std::fs;
use std::path::Path;

use levy_core::calculations::{PayrollCalculator, TaxCascadeCalculator};
use levy_core::{BracketTable, SocialSecurityRates, TaxConfiguration};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{SettingsError, defaults};

/// Business-wide levy and payroll configuration.
///
/// Sections missing from a settings file fall back to the built-in defaults
/// in [`crate::defaults`].
///
/// ```toml
/// [tax]
/// vat_rate = "0.15"
/// nhil_rate = "0.025"
/// getfund_rate = "0.025"
///
/// [[tax.custom_levies]]
/// name = "COVID-19 Levy"
/// rate = "0.01"
///
/// [social_security]
/// employee_rate = "0.055"
/// employer_rate = "0.13"
///
/// [[income_tax_brackets]]
/// lower_bound = "0"
/// upper_bound = "490"
/// rate = "0"
///
/// [[income_tax_brackets]]
/// lower_bound = "490"
/// rate = "0.05"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub tax: TaxConfiguration,
    pub social_security: SocialSecurityRates,
    pub income_tax_brackets: BracketTable,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tax: defaults::tax_configuration(),
            social_security: defaults::social_security_rates(),
            income_tax_brackets: defaults::income_tax_brackets(),
        }
    }
}

impl Settings {
    /// Parses settings from TOML text and validates every rate.
    ///
    /// The bracket table is validated while it is deserialized.
    pub fn from_toml_str(text: &str) -> Result<Self, SettingsError> {
        let settings: Settings = toml::from_str(text)?;
        settings.validate()?;
        debug!(
            custom_levies = settings.tax.custom_levies.len(),
            brackets = settings.income_tax_brackets.brackets().len(),
            "parsed settings"
        );
        Ok(settings)
    }

    /// Reads and validates a TOML settings file.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        info!(path = %path.display(), "loading settings");
        let text = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn to_toml_string(&self) -> Result<String, SettingsError> {
        Ok(toml::to_string(self)?)
    }

    /// Checks every levy and contribution rate.
    pub fn validate(&self) -> Result<(), SettingsError> {
        self.tax.validate()?;
        self.social_security.validate()?;
        Ok(())
    }

    /// Replaces the bracket table, e.g. with one loaded from CSV.
    pub fn with_income_tax_brackets(
        mut self,
        brackets: BracketTable,
    ) -> Self {
        self.income_tax_brackets = brackets;
        self
    }

    pub fn tax_calculator(&self) -> TaxCascadeCalculator<'_> {
        TaxCascadeCalculator::new(&self.tax)
    }

    pub fn payroll_calculator(&self) -> PayrollCalculator<'_> {
        PayrollCalculator::new(&self.social_security, &self.income_tax_brackets)
    }
}
