use std::fs::File;
use std::io::Read;
use std::path::Path;

use levy_core::{BracketTable, IncomeTaxBracket};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{debug, info};

use crate::SettingsError;

/// A single record from an income-tax brackets CSV file.
///
/// The CSV format has one row per band:
/// - `lower_bound`: income at which the band starts
/// - `upper_bound`: income at which the band ends (empty for the open-ended top band)
/// - `rate`: the marginal rate as a decimal (e.g., 0.175 for 17.5%)
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct BracketRecord {
    pub lower_bound: Decimal,
    #[serde(deserialize_with = "deserialize_optional_decimal")]
    pub upper_bound: Option<Decimal>,
    pub rate: Decimal,
}

impl From<BracketRecord> for IncomeTaxBracket {
    fn from(record: BracketRecord) -> Self {
        IncomeTaxBracket::new(record.lower_bound, record.upper_bound, record.rate)
    }
}

fn deserialize_optional_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => s
            .trim()
            .parse::<Decimal>()
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

/// Loader for income-tax bracket tables from CSV files.
///
/// Rows must already be in ascending order; the loader does not sort them,
/// so an out-of-order file is rejected rather than silently reinterpreted.
pub struct BracketTableLoader;

impl BracketTableLoader {
    /// Parse bracket records from a CSV reader.
    ///
    /// The reader can be any type that implements `Read`, such as a file or a
    /// byte slice.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<BracketRecord>, SettingsError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut records = Vec::new();

        for result in csv_reader.deserialize() {
            let record: BracketRecord = result?;
            records.push(record);
        }

        debug!(records = records.len(), "parsed income tax bracket records");
        Ok(records)
    }

    /// Parse and validate a complete bracket table.
    pub fn load<R: Read>(reader: R) -> Result<BracketTable, SettingsError> {
        let records = Self::parse(reader)?;
        let table = BracketTable::new(records.into_iter().map(IncomeTaxBracket::from).collect())?;
        Ok(table)
    }

    /// Load a bracket table from a CSV file on disk.
    pub fn load_file(path: &Path) -> Result<BracketTable, SettingsError> {
        info!(path = %path.display(), "loading income tax brackets");
        let file = File::open(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::load(file)
    }
}
