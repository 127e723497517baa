//! Forward projection of a member to retirement

mod config;
mod engine;
mod growth;
mod input;
mod result;
mod state;

pub use config::{
    weighted_contribution_index, ContributionIndexPolicy, ForecastConfig, DEFAULT_CONFIG_PATH,
    DEFAULT_INDEX_POLICY,
};
pub use engine::PensionForecastEngine;
pub use growth::{GrowthProjector, IN_YEAR_INTEREST_WEIGHT};
pub use input::{
    AccountContributions, PensionForecastInput, PensionForecastInputBuilder, MAX_AGE, MIN_AGE,
};
pub use result::{ForecastYearRow, PensionForecastResult};
pub use state::ForecastState;
