//! Statutory levy and payroll withholding calculators.
//!
//! - [`calculations::TaxCascadeCalculator`] itemizes VAT, NHIL, GETFund and
//!   custom levies on a subtotal.
//! - [`calculations::PayrollCalculator`] splits social-security contributions
//!   and computes progressive income tax on gross pay.

pub mod calculations;
pub mod error;
pub mod models;

pub use error::{CalculationError, ConfigurationError, InputError};
pub use models::*;
