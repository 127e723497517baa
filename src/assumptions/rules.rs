//! Policy constants shared by every pension calculation

use serde::{Deserialize, Serialize};

use crate::error::{PensionError, PensionResult};

/// Fundamental pension accrual per contributed year
pub const DEFAULT_ACCRUAL_RATE: f64 = 0.01;

/// Lowest contribution index counted for pension purposes
pub const DEFAULT_INDEX_FLOOR: f64 = 0.6;

/// Highest contribution index counted for pension purposes
pub const DEFAULT_INDEX_CAP: f64 = 3.0;

/// Pension policy parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PensionRules {
    /// Annual accrual rate of the fundamental pension (0.01 = 1% per year)
    pub accrual_rate: f64,

    /// Contribution indices below this are counted at this value
    pub index_floor: f64,

    /// Contribution indices above this are counted at this value
    pub index_cap: f64,
}

impl PensionRules {
    /// Bound a contribution index into the counted band
    pub fn bounded_index(&self, index: f64) -> f64 {
        index.max(self.index_floor).min(self.index_cap)
    }

    /// Reject rules that could produce a negative or undefined pension
    pub fn validate(&self) -> PensionResult<()> {
        if !self.accrual_rate.is_finite() || self.accrual_rate <= 0.0 {
            return Err(PensionError::invalid_input(
                "accrual_rate",
                self.accrual_rate,
                "Accrual rate must be positive",
            ));
        }
        if !self.index_floor.is_finite() || self.index_floor <= 0.0 {
            return Err(PensionError::invalid_input(
                "index_floor",
                self.index_floor,
                "Index floor must be positive",
            ));
        }
        if !self.index_cap.is_finite() || self.index_cap < self.index_floor {
            return Err(PensionError::invalid_input(
                "index_cap",
                self.index_cap,
                format!("Index cap must not be below the floor {}", self.index_floor),
            ));
        }
        Ok(())
    }
}

impl Default for PensionRules {
    fn default() -> Self {
        Self {
            accrual_rate: DEFAULT_ACCRUAL_RATE,
            index_floor: DEFAULT_INDEX_FLOOR,
            index_cap: DEFAULT_INDEX_CAP,
        }
    }
}
