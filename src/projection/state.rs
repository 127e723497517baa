//! Year-by-year state of a member between now and retirement

use super::growth::GrowthProjector;
use super::input::PensionForecastInput;
use super::result::ForecastYearRow;
use crate::error::{PensionError, PensionResult};

/// Projected position of a member at the end of a future year
#[derive(Debug, Clone)]
pub struct ForecastState {
    /// Years elapsed since the forecast start (0 before the first advance)
    pub year: u32,

    pub age: u8,

    /// Projected average social salary
    pub social_salary: f64,

    /// Projected contribution base
    pub contribution_base: f64,

    /// Personal account balance at year end
    pub account_balance: f64,

    /// Payment made into the account during the latest year
    pub account_payment: f64,

    pub years_contributed: u32,
}

impl ForecastState {
    /// State as at the end of the last completed year
    pub fn from_input(input: &PensionForecastInput) -> Self {
        Self {
            year: 0,
            age: input.current_age,
            social_salary: input.social_salary,
            contribution_base: input.contribution_base,
            account_balance: input.account_balance,
            account_payment: 0.0,
            years_contributed: input.years_contributed,
        }
    }

    /// Advance one year
    ///
    /// Salary and base are always grown from the starting values so that
    /// year `k` equals a direct `k`-year projection. Without contributions
    /// the balance is projected the same way; with contributions it is
    /// rolled forward from the prior year.
    pub fn advance_year(&mut self, input: &PensionForecastInput) -> PensionResult<()> {
        self.year += 1;
        self.age = self.age.saturating_add(1);
        self.years_contributed = self.years_contributed.checked_add(1).ok_or_else(|| {
            PensionError::invalid_input(
                "years_contributed",
                self.years_contributed,
                "Too many contributed years",
            )
        })?;

        self.social_salary =
            GrowthProjector::project(input.social_salary, input.salary_growth_rate, self.year)?;
        self.contribution_base = GrowthProjector::project(
            input.contribution_base,
            input.contribution_base_growth_rate,
            self.year,
        )?;

        self.account_payment = input.account_contributions.payment_for(self.contribution_base);
        self.account_balance = if input.account_contributions.is_none() {
            GrowthProjector::project(input.account_balance, input.account_interest_rate, self.year)?
        } else {
            GrowthProjector::accumulate_account(
                self.account_balance,
                &[self.account_payment],
                &[input.account_interest_rate],
            )?
        };

        Ok(())
    }

    /// Contribution base relative to social salary
    ///
    /// 0 when salary is 0. That value is only fit for the trace; the engine
    /// rejects a zero salary before a ratio reaches an index policy.
    pub fn contribution_ratio(&self) -> f64 {
        if self.social_salary <= 0.0 {
            0.0
        } else {
            self.contribution_base / self.social_salary
        }
    }

    pub fn to_row(&self) -> ForecastYearRow {
        ForecastYearRow {
            year: self.year,
            age: self.age,
            social_salary: self.social_salary,
            contribution_base: self.contribution_base,
            contribution_ratio: self.contribution_ratio(),
            account_payment: self.account_payment,
            account_balance: self.account_balance,
            years_contributed: self.years_contributed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::AccountContributions;
    use approx::assert_relative_eq;

    fn input(contributions: AccountContributions) -> PensionForecastInput {
        PensionForecastInput {
            current_age: 58,
            retirement_age: 60,
            social_salary: 1000.0,
            contribution_base: 2000.0,
            contribution_index: 1.0,
            years_contributed: 30,
            account_balance: 1000.0,
            salary_growth_rate: 0.0,
            contribution_base_growth_rate: 0.0,
            account_interest_rate: 0.5,
            account_contributions: contributions,
        }
    }

    #[test]
    fn test_advance_without_contributions() {
        let input = input(AccountContributions::None);
        let mut state = ForecastState::from_input(&input);

        state.advance_year(&input).unwrap();
        state.advance_year(&input).unwrap();

        assert_eq!(state.year, 2);
        assert_eq!(state.age, 60);
        assert_eq!(state.years_contributed, 32);
        assert_eq!(state.account_payment, 0.0);
        assert_eq!(
            state.account_balance,
            GrowthProjector::project(1000.0, 0.5, 2).unwrap()
        );
        assert_eq!(state.contribution_ratio(), 2.0);
    }

    #[test]
    fn test_advance_with_level_payments() {
        let input = input(AccountContributions::Level { annual_payment: 1000.0 });
        let mut state = ForecastState::from_input(&input);

        state.advance_year(&input).unwrap();
        state.advance_year(&input).unwrap();

        assert_relative_eq!(state.account_balance, 5427.083333333333, epsilon = 1e-9);
        assert_eq!(state.to_row().account_payment, 1000.0);
    }

    #[test]
    fn test_ratio_with_zero_salary() {
        let mut input = input(AccountContributions::None);
        input.social_salary = 0.0;
        let state = ForecastState::from_input(&input);
        assert_eq!(state.contribution_ratio(), 0.0);
    }

    #[test]
    fn test_years_contributed_overflow() {
        let mut input = input(AccountContributions::None);
        input.years_contributed = u32::MAX;
        let mut state = ForecastState::from_input(&input);

        let err = state.advance_year(&input).unwrap_err();
        assert_eq!(err.field(), Some("years_contributed"));
    }
}
