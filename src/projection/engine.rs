//! Pension forecast engine: rolls a member forward to retirement and
//! prices both pension components there

use super::config::ForecastConfig;
use super::growth::GrowthProjector;
use super::input::PensionForecastInput;
use super::result::PensionForecastResult;
use super::state::ForecastState;
use crate::assumptions::RetirementDivisorTable;
use crate::error::{ensure_index, PensionError, PensionResult};
use crate::pension::{FundamentalPensionCalculator, PersonalPensionCalculator};

/// Main forecast engine
#[derive(Debug, Clone)]
pub struct PensionForecastEngine {
    config: ForecastConfig,
    fundamental: FundamentalPensionCalculator,
    personal: PersonalPensionCalculator,
}

impl PensionForecastEngine {
    /// Create an engine using the statutory divisor table
    pub fn new(config: ForecastConfig) -> Self {
        Self {
            fundamental: FundamentalPensionCalculator::new(config.rules),
            personal: PersonalPensionCalculator::new(RetirementDivisorTable::statutory()),
            config,
        }
    }

    pub fn config(&self) -> &ForecastConfig {
        &self.config
    }

    /// Forecast the monthly pension at retirement
    ///
    /// Any failure aborts the whole forecast; the originating error is
    /// returned unchanged.
    pub fn forecast(&self, input: &PensionForecastInput) -> PensionResult<PensionForecastResult> {
        self.config.rules.validate()?;

        let span = input.years_to_retirement();
        if span <= 0 {
            return Err(PensionError::invalid_input(
                "retirement_age",
                input.retirement_age,
                format!("Must be greater than current age {}", input.current_age),
            ));
        }
        let years = span as u32;

        let social_salary =
            GrowthProjector::project(input.social_salary, input.salary_growth_rate, years)?;
        let contribution_base = GrowthProjector::project(
            input.contribution_base,
            input.contribution_base_growth_rate,
            years,
        )?;

        ensure_index("contribution_index", input.contribution_index)?;
        let uses_ratios = self.config.index_policy.uses_ratios();
        if uses_ratios && input.social_salary <= 0.0 {
            return Err(PensionError::invalid_input(
                "social_salary",
                input.social_salary,
                "Must be positive to derive a contribution index",
            ));
        }

        // Roll forward year by year for the ratios, contributions and trace
        let mut state = ForecastState::from_input(input);
        let mut ratios = Vec::with_capacity(years as usize);
        let mut yearly = Vec::new();
        for _ in 0..years {
            state.advance_year(input)?;
            if uses_ratios && state.social_salary <= 0.0 {
                return Err(PensionError::invalid_input(
                    "salary_growth_rate",
                    input.salary_growth_rate,
                    format!("Projected social salary reaches zero at age {}", state.age),
                ));
            }
            ratios.push(state.contribution_ratio());
            if self.config.detailed_output {
                yearly.push(state.to_row());
            }
        }

        let mut contribution_index = self.config.index_policy.index_at_retirement(
            input.contribution_index,
            input.years_contributed,
            &ratios,
        )?;
        // A projected base of zero gives a zero ratio; derived indices count within the band
        if uses_ratios {
            contribution_index = self.config.rules.bounded_index(contribution_index);
        }
        let years_contributed = input.years_contributed.checked_add(years).ok_or_else(|| {
            PensionError::invalid_input(
                "years_contributed",
                input.years_contributed,
                "Too many contributed years",
            )
        })?;
        let account_balance = state.account_balance;

        let fundamental_pension =
            self.fundamental
                .compute(social_salary, contribution_index, years_contributed)?;
        let personal_pension = self.personal.compute(account_balance, input.retirement_age)?;
        let months_divisor = self.personal.table().divisor_for(input.retirement_age)?;

        log::debug!(
            "Forecast age {} -> {}: index {:.4}, fundamental {:.2}, personal {:.2}",
            input.current_age,
            input.retirement_age,
            contribution_index,
            fundamental_pension,
            personal_pension
        );

        Ok(PensionForecastResult {
            retirement_age: input.retirement_age,
            years_to_retirement: years,
            projected_social_salary: social_salary,
            projected_contribution_base: contribution_base,
            contribution_index,
            years_contributed,
            projected_account_balance: account_balance,
            months_divisor,
            fundamental_pension,
            personal_pension,
            total_pension: fundamental_pension + personal_pension,
            yearly,
        })
    }

    /// Fundamental pension for current (non-projected) values
    pub fn fundamental_pension(
        &self,
        average_social_salary: f64,
        contribution_index: f64,
        years_contributed: u32,
    ) -> PensionResult<f64> {
        self.fundamental
            .compute(average_social_salary, contribution_index, years_contributed)
    }

    /// Personal pension for a current balance
    pub fn personal_pension(&self, account_balance: f64, retirement_age: u8) -> PensionResult<f64> {
        self.personal.compute(account_balance, retirement_age)
    }
}

impl Default for PensionForecastEngine {
    fn default() -> Self {
        Self::new(ForecastConfig::default())
    }
}
