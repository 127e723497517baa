//! Statutory tables and policy constants

mod divisor;
mod rules;

pub use divisor::RetirementDivisorTable;
pub use rules::{PensionRules, DEFAULT_ACCRUAL_RATE, DEFAULT_INDEX_CAP, DEFAULT_INDEX_FLOOR};
