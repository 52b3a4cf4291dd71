//! Levy and payroll withholding calculations.
//!
//! Every calculation here is a pure function of its inputs: no I/O, no shared
//! mutable state, and no built-in default rates. Configuration comes from the
//! caller (usually the settings layer) and is only ever borrowed.

pub mod common;
pub mod income_tax;
pub mod payroll;
pub mod social_security;
pub mod tax_cascade;

pub use income_tax::compute_income_tax;
pub use payroll::PayrollCalculator;
pub use social_security::split_social_security;
pub use tax_cascade::{TaxCascadeCalculator, compute_tax_cascade};
