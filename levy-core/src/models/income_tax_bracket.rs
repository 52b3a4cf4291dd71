use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::common::ensure_rate;
use crate::{CalculationError, ConfigurationError};

/// One band of a progressive income-tax schedule.
///
/// `upper_bound` is `None` for the open-ended top band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeTaxBracket {
    pub lower_bound: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upper_bound: Option<Decimal>,
    pub rate: Decimal,
}

impl IncomeTaxBracket {
    pub fn new(
        lower_bound: Decimal,
        upper_bound: Option<Decimal>,
        rate: Decimal,
    ) -> Self {
        Self {
            lower_bound,
            upper_bound,
            rate,
        }
    }

    pub fn is_open_ended(&self) -> bool {
        self.upper_bound.is_none()
    }

    fn validate(
        &self,
        index: usize,
    ) -> Result<(), CalculationError> {
        if self.lower_bound < Decimal::ZERO {
            return Err(ConfigurationError::NegativeLowerBound {
                index,
                lower_bound: self.lower_bound,
            }
            .into());
        }
        if let Some(upper_bound) = self.upper_bound {
            if upper_bound < self.lower_bound {
                return Err(ConfigurationError::InvertedBracket {
                    index,
                    lower_bound: self.lower_bound,
                    upper_bound,
                }
                .into());
            }
        }
        ensure_rate(&format!("income tax bracket {index}"), self.rate)
    }
}

/// A validated progressive income-tax schedule.
///
/// The only way to obtain a `BracketTable` is through [`BracketTable::new`]
/// (which `TryFrom` and deserialization both go through), so a value of this
/// type always satisfies the schedule invariants:
///
/// - at least one bracket;
/// - the first bracket starts at 0;
/// - brackets sorted ascending by `lower_bound`;
/// - each `lower_bound` equal to the previous bracket's `upper_bound`;
/// - exactly one open-ended bracket, in last position.
///
/// Validate a table once and share it across a whole payroll run.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use levy_core::{BracketTable, CalculationError, ConfigurationError, IncomeTaxBracket};
///
/// let table = BracketTable::new(vec![
///     IncomeTaxBracket::new(dec!(0), Some(dec!(490)), dec!(0)),
///     IncomeTaxBracket::new(dec!(490), Some(dec!(600)), dec!(0.05)),
///     IncomeTaxBracket::new(dec!(650), None, dec!(0.10)),
/// ]);
///
/// assert_eq!(
///     table.unwrap_err(),
///     CalculationError::from(ConfigurationError::Gap {
///         index: 2,
///         lower_bound: dec!(650),
///         previous_upper: dec!(600),
///     })
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "Vec<IncomeTaxBracket>",
    into = "Vec<IncomeTaxBracket>"
)]
pub struct BracketTable {
    brackets: Vec<IncomeTaxBracket>,
}

impl BracketTable {
    /// Validates `brackets` and wraps them in a table.
    ///
    /// # Errors
    ///
    /// Returns [`CalculationError::InvalidConfiguration`] if the table is
    /// empty, does not start at 0, a bracket is malformed, brackets are
    /// unsorted, overlap or leave a gap, or the open-ended bracket is missing
    /// or not last.
    pub fn new(brackets: Vec<IncomeTaxBracket>) -> Result<Self, CalculationError> {
        Self::check(&brackets).inspect_err(|err| {
            debug!(error = %err, brackets = brackets.len(), "rejected income tax bracket table");
        })?;
        Ok(Self { brackets })
    }

    fn check(brackets: &[IncomeTaxBracket]) -> Result<(), CalculationError> {
        let Some(last) = brackets.last() else {
            return Err(ConfigurationError::EmptyBracketTable.into());
        };

        for (index, bracket) in brackets.iter().enumerate() {
            bracket.validate(index)?;

            let Some(previous) = index.checked_sub(1).map(|i| &brackets[i]) else {
                if bracket.lower_bound != Decimal::ZERO {
                    return Err(ConfigurationError::FirstBracketAboveZero {
                        lower_bound: bracket.lower_bound,
                    }
                    .into());
                }
                continue;
            };
            let Some(previous_upper) = previous.upper_bound else {
                return Err(ConfigurationError::OpenEndedNotLast { index: index - 1 }.into());
            };

            if bracket.lower_bound < previous.lower_bound {
                return Err(ConfigurationError::Unsorted { index }.into());
            }
            if bracket.lower_bound < previous_upper {
                return Err(ConfigurationError::Overlap {
                    index,
                    lower_bound: bracket.lower_bound,
                    previous_upper,
                }
                .into());
            }
            if bracket.lower_bound > previous_upper {
                return Err(ConfigurationError::Gap {
                    index,
                    lower_bound: bracket.lower_bound,
                    previous_upper,
                }
                .into());
            }
        }

        if !last.is_open_ended() {
            return Err(ConfigurationError::MissingOpenEndedBracket.into());
        }
        Ok(())
    }

    pub fn brackets(&self) -> &[IncomeTaxBracket] {
        &self.brackets
    }

    pub fn iter(&self) -> std::slice::Iter<'_, IncomeTaxBracket> {
        self.brackets.iter()
    }

    /// Rate of the open-ended top band.
    pub fn top_rate(&self) -> Decimal {
        // A validated table is never empty.
        self.brackets
            .last()
            .map_or(Decimal::ZERO, |bracket| bracket.rate)
    }
}

impl TryFrom<Vec<IncomeTaxBracket>> for BracketTable {
    type Error = CalculationError;

    fn try_from(brackets: Vec<IncomeTaxBracket>) -> Result<Self, Self::Error> {
        Self::new(brackets)
    }
}

impl From<BracketTable> for Vec<IncomeTaxBracket> {
    fn from(table: BracketTable) -> Self {
        table.brackets
    }
}

impl<'a> IntoIterator for &'a BracketTable {
    type Item = &'a IncomeTaxBracket;
    type IntoIter = std::slice::Iter<'a, IncomeTaxBracket>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
