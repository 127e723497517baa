//! Pension Forecast - social pension estimator with multi-year projection
//!
//! This library provides:
//! - Fundamental (social pool) pension from social salary, contribution index and years
//! - Personal account pension from the statutory months divisor schedule
//! - Forward projection of salary, contribution base and account balance to retirement
//! - Batch forecasting across many members

pub mod assumptions;
pub mod error;
pub mod member;
pub mod operations;
pub mod pension;
pub mod projection;
pub mod scenario;

// Re-export commonly used types
pub use assumptions::{PensionRules, RetirementDivisorTable};
pub use error::{LoadError, PensionError, PensionResult};
pub use member::Member;
pub use operations::{forecast_pension, fundamental_pension, personal_pension};
pub use pension::{FundamentalPensionCalculator, PersonalPensionCalculator};
pub use projection::{
    ContributionIndexPolicy, ForecastConfig, GrowthProjector, PensionForecastEngine,
    PensionForecastInput, PensionForecastResult,
};
pub use scenario::{BatchSummary, ForecastRunner, MemberForecast};
