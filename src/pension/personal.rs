//! Personal account pension

use crate::assumptions::RetirementDivisorTable;
use crate::error::{ensure_amount, PensionResult};

/// Calculator annuitizing the personal account over the statutory months
#[derive(Debug, Clone, Copy, Default)]
pub struct PersonalPensionCalculator {
    table: RetirementDivisorTable,
}

impl PersonalPensionCalculator {
    pub fn new(table: RetirementDivisorTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &RetirementDivisorTable {
        &self.table
    }

    /// Monthly personal pension = balance / months divisor for the retirement age
    ///
    /// # Errors
    /// `InvalidInput` for a negative balance, `OutOfRange` when the age is
    /// not tabulated.
    pub fn compute(&self, account_balance: f64, retirement_age: u8) -> PensionResult<f64> {
        ensure_amount("account_balance", account_balance)?;
        let months = self.table.divisor_for(retirement_age)?;
        Ok(account_balance / months as f64)
    }
}
