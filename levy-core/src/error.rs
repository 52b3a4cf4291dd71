//! Error types shared by every calculator.
//!
//! Failures fall into two groups: a monetary input the caller passed in was
//! unusable ([`CalculationError::InvalidInput`]), or the configuration the
//! settings layer supplied breaks one of its invariants
//! ([`CalculationError::InvalidConfiguration`]). Both are deterministic, so
//! retrying a failed calculation with the same arguments fails the same way.

use rust_decimal::Decimal;
use thiserror::Error;

/// Top-level error returned by all calculations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CalculationError {
    /// A monetary input was negative, unparsable or out of range.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),

    /// A rate or bracket table violated its invariants.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigurationError),
}

impl CalculationError {
    /// Returns `true` for [`CalculationError::InvalidInput`].
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }

    /// Returns `true` for [`CalculationError::InvalidConfiguration`].
    pub fn is_invalid_configuration(&self) -> bool {
        matches!(self, Self::InvalidConfiguration(_))
    }
}

/// Problems with a monetary input value.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: Decimal },

    #[error("{field} is not a number: {raw:?}")]
    NotANumber { field: &'static str, raw: String },

    /// The amount is too large to be represented once levies are applied.
    #[error("{field} is out of the representable range")]
    OutOfRange { field: &'static str },

    /// Employee contribution plus income tax would leave a negative net pay.
    #[error("withholding of {withholding} exceeds gross pay of {gross_pay}")]
    WithholdingExceedsGrossPay {
        gross_pay: Decimal,
        withholding: Decimal,
    },
}

/// Problems with rates or bracket tables.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("rate for {name} must be between 0 and 1, got {rate}")]
    RateOutOfRange { name: String, rate: Decimal },

    #[error("bracket table is empty")]
    EmptyBracketTable,

    #[error("the first bracket starts at {lower_bound}, leaving a gap after 0")]
    FirstBracketAboveZero { lower_bound: Decimal },

    #[error("bracket {index} has a negative lower bound {lower_bound}")]
    NegativeLowerBound { index: usize, lower_bound: Decimal },

    #[error("bracket {index} has upper bound {upper_bound} below lower bound {lower_bound}")]
    InvertedBracket {
        index: usize,
        lower_bound: Decimal,
        upper_bound: Decimal,
    },

    #[error("bracket {index} is not sorted by lower bound")]
    Unsorted { index: usize },

    #[error("bracket {index} starts at {lower_bound}, overlapping the previous bracket ending at {previous_upper}")]
    Overlap {
        index: usize,
        lower_bound: Decimal,
        previous_upper: Decimal,
    },

    #[error("bracket {index} starts at {lower_bound}, leaving a gap after the previous bracket ending at {previous_upper}")]
    Gap {
        index: usize,
        lower_bound: Decimal,
        previous_upper: Decimal,
    },

    #[error("bracket {index} is open-ended but is not the last bracket")]
    OpenEndedNotLast { index: usize },

    #[error("the last bracket must be open-ended")]
    MissingOpenEndedBracket,
}
