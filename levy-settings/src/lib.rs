//! Settings collaborator for the levy calculators.
//!
//! Owns the built-in default configuration, reads configuration from TOML
//! files and income-tax bracket tables from CSV, and hands validated values to
//! the calculators in `levy-core`.

use std::path::PathBuf;

use levy_core::CalculationError;
use thiserror::Error;

pub mod defaults;
pub mod loader;
pub mod settings;

pub use loader::{BracketRecord, BracketTableLoader};
pub use settings::Settings;

/// Errors that can occur while loading settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML write error: {0}")]
    TomlWrite(#[from] toml::ser::Error),

    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error(transparent)]
    Invalid(#[from] CalculationError),
}

impl From<csv::Error> for SettingsError {
    fn from(err: csv::Error) -> Self {
        SettingsError::CsvParse(err.to_string())
    }
}
