//! Fundamental (social pool) pension
//!
//! Monthly amount = social salary × (1 + index) / 2 × years × accrual rate,
//! with the index bounded to the counted band of [`PensionRules`].

use crate::assumptions::PensionRules;
use crate::error::{ensure_amount, ensure_index, PensionResult};

/// Calculator for the pooled component of the pension
#[derive(Debug, Clone, Copy, Default)]
pub struct FundamentalPensionCalculator {
    rules: PensionRules,
}

impl FundamentalPensionCalculator {
    pub fn new(rules: PensionRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &PensionRules {
        &self.rules
    }

    /// Compute the monthly fundamental pension
    ///
    /// # Arguments
    /// * `average_social_salary` - Average social salary in the retirement year
    /// * `contribution_index` - Contributor's wage relative to the social average
    /// * `years_contributed` - Whole years of contribution
    ///
    /// # Errors
    /// `InvalidInput` for a negative salary or a non-positive index.
    pub fn compute(
        &self,
        average_social_salary: f64,
        contribution_index: f64,
        years_contributed: u32,
    ) -> PensionResult<f64> {
        ensure_amount("average_social_salary", average_social_salary)?;
        ensure_index("contribution_index", contribution_index)?;

        let counted_index = self.rules.bounded_index(contribution_index);
        if counted_index != contribution_index {
            log::debug!(
                "Contribution index {} counted as {}",
                contribution_index,
                counted_index
            );
        }

        Ok(average_social_salary * (1.0 + counted_index) / 2.0
            * years_contributed as f64
            * self.rules.accrual_rate)
    }
}
