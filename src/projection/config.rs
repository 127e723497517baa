//! Forecast run configuration

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::assumptions::PensionRules;
use crate::error::{ensure_index, LoadError, PensionError, PensionResult};

/// Default location of the JSON configuration file
pub const DEFAULT_CONFIG_PATH: &str = "data/forecast_config.json";

/// Index policy used unless configured otherwise
pub const DEFAULT_INDEX_POLICY: ContributionIndexPolicy = ContributionIndexPolicy::YearWeighted;

/// How the contribution index at retirement is derived
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContributionIndexPolicy {
    /// The index so far is used unchanged
    HeldConstant,
    /// Projected contribution base / projected social salary at retirement
    ProjectedRatio,
    /// Years-weighted average of the index so far and each projected year's ratio
    YearWeighted,
}

impl ContributionIndexPolicy {
    /// Whether the policy needs per-year base/salary ratios
    pub fn uses_ratios(&self) -> bool {
        !matches!(self, ContributionIndexPolicy::HeldConstant)
    }

    /// Contribution index at retirement
    ///
    /// # Arguments
    /// * `current_index` - Average index over the years contributed so far
    /// * `current_years` - Years contributed so far
    /// * `future_ratios` - Base/salary ratio for each projected year, in order
    pub fn index_at_retirement(
        &self,
        current_index: f64,
        current_years: u32,
        future_ratios: &[f64],
    ) -> PensionResult<f64> {
        match self {
            ContributionIndexPolicy::HeldConstant => Ok(current_index),
            ContributionIndexPolicy::ProjectedRatio => {
                Ok(future_ratios.last().copied().unwrap_or(current_index))
            }
            ContributionIndexPolicy::YearWeighted => {
                weighted_contribution_index(current_index, current_years, future_ratios)
            }
        }
    }
}

impl Default for ContributionIndexPolicy {
    fn default() -> Self {
        DEFAULT_INDEX_POLICY
    }
}

/// Average contribution index over past and future years, weighted by years
///
/// (index × past years + mean(future ratios) × future years) / total years
pub fn weighted_contribution_index(
    current_index: f64,
    current_years: u32,
    future_ratios: &[f64],
) -> PensionResult<f64> {
    ensure_index("contribution_index", current_index)?;

    let future_years = future_ratios.len();
    let total_years = current_years as usize + future_years;
    if total_years == 0 {
        return Err(PensionError::invalid_input(
            "years_contributed",
            0,
            "Weighted index needs at least one contributed year",
        ));
    }
    if future_years == 0 {
        return Ok(current_index);
    }

    let mean_ratio = future_ratios.iter().sum::<f64>() / future_years as f64;
    Ok((current_index * current_years as f64 + mean_ratio * future_years as f64)
        / total_years as f64)
}

/// Configuration for a forecast run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastConfig {
    pub index_policy: ContributionIndexPolicy,

    pub rules: PensionRules,

    /// Keep the year-by-year trace in the result
    pub detailed_output: bool,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            index_policy: DEFAULT_INDEX_POLICY,
            rules: PensionRules::default(),
            detailed_output: false,
        }
    }
}

impl ForecastConfig {
    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        let config: Self = serde_json::from_str(json)?;
        config.rules.validate()?;
        Ok(config)
    }

    pub fn from_json_path(path: &Path) -> Result<Self, LoadError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Load from `DEFAULT_CONFIG_PATH`, or use defaults if the file is absent
    pub fn load_or_default() -> Result<Self, LoadError> {
        let path = Path::new(DEFAULT_CONFIG_PATH);
        if !path.exists() {
            log::info!("No config at {}, using defaults", DEFAULT_CONFIG_PATH);
            return Ok(Self::default());
        }

        let config = Self::from_json_path(path)?;
        log::info!("Loaded forecast config from {}", DEFAULT_CONFIG_PATH);
        Ok(config)
    }
}
