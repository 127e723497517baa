//! Forecast input record and its builder

use serde::{Deserialize, Serialize};

use crate::error::{ensure_amount, ensure_index, ensure_rate, PensionError, PensionResult};

/// Youngest age accepted as a current or retirement age
pub const MIN_AGE: u8 = 16;

/// Oldest age accepted as a current or retirement age
pub const MAX_AGE: u8 = 100;

/// Future contributions paid into the personal account
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AccountContributions {
    /// Existing balance only compounds; no further payments are projected
    #[default]
    None,
    /// Same payment every year
    Level { annual_payment: f64 },
    /// Share of the projected contribution base paid each year
    ShareOfBase { rate: f64 },
}

impl AccountContributions {
    /// Payment for a year given that year's projected contribution base
    pub fn payment_for(&self, contribution_base: f64) -> f64 {
        match *self {
            AccountContributions::None => 0.0,
            AccountContributions::Level { annual_payment } => annual_payment,
            AccountContributions::ShareOfBase { rate } => contribution_base * rate,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, AccountContributions::None)
    }

    fn validate(&self) -> PensionResult<()> {
        match *self {
            AccountContributions::None => Ok(()),
            AccountContributions::Level { annual_payment } => {
                ensure_amount("annual_payment", annual_payment)
            }
            AccountContributions::ShareOfBase { rate } => ensure_amount("contribution_share", rate),
        }
    }
}

/// Everything the engine needs to forecast one member's pension
///
/// Values are as at the end of the last completed year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PensionForecastInput {
    pub current_age: u8,
    pub retirement_age: u8,

    /// Current average social salary
    pub social_salary: f64,

    /// Current contribution base of the member
    pub contribution_base: f64,

    /// Average contribution index over the years contributed so far
    pub contribution_index: f64,

    pub years_contributed: u32,

    /// Personal account balance
    pub account_balance: f64,

    pub salary_growth_rate: f64,
    pub contribution_base_growth_rate: f64,

    /// Annual interest credited to the personal account
    pub account_interest_rate: f64,

    #[serde(default)]
    pub account_contributions: AccountContributions,
}

impl PensionForecastInput {
    pub fn builder() -> PensionForecastInputBuilder {
        PensionForecastInputBuilder::default()
    }

    /// Years between now and retirement (negative if already past it)
    pub fn years_to_retirement(&self) -> i32 {
        self.retirement_age as i32 - self.current_age as i32
    }

    /// Check every field against its domain
    pub fn validate(&self) -> PensionResult<()> {
        ensure_age("current_age", self.current_age)?;
        ensure_age("retirement_age", self.retirement_age)?;
        if self.retirement_age <= self.current_age {
            return Err(PensionError::invalid_input(
                "retirement_age",
                self.retirement_age,
                format!("Must be greater than current age {}", self.current_age),
            ));
        }

        let working_years = u32::from(self.current_age - MIN_AGE);
        if self.years_contributed > working_years {
            return Err(PensionError::invalid_input(
                "years_contributed",
                self.years_contributed,
                format!("Cannot exceed {} years worked since age {}", working_years, MIN_AGE),
            ));
        }

        ensure_amount("social_salary", self.social_salary)?;
        ensure_amount("contribution_base", self.contribution_base)?;
        ensure_index("contribution_index", self.contribution_index)?;
        ensure_amount("account_balance", self.account_balance)?;
        ensure_rate("salary_growth_rate", self.salary_growth_rate)?;
        ensure_rate("contribution_base_growth_rate", self.contribution_base_growth_rate)?;
        ensure_rate("account_interest_rate", self.account_interest_rate)?;
        self.account_contributions.validate()
    }
}

fn ensure_age(field: &str, age: u8) -> PensionResult<()> {
    if !(MIN_AGE..=MAX_AGE).contains(&age) {
        return Err(PensionError::invalid_input(
            field,
            age,
            format!("Age must be between {} and {}", MIN_AGE, MAX_AGE),
        ));
    }
    Ok(())
}

/// Accumulates input fields from any source and validates them together
#[derive(Debug, Clone, Default)]
pub struct PensionForecastInputBuilder {
    current_age: Option<u8>,
    retirement_age: Option<u8>,
    social_salary: Option<f64>,
    contribution_base: Option<f64>,
    contribution_index: Option<f64>,
    years_contributed: Option<u32>,
    account_balance: Option<f64>,
    salary_growth_rate: Option<f64>,
    contribution_base_growth_rate: Option<f64>,
    account_interest_rate: Option<f64>,
    account_contributions: AccountContributions,
}

impl PensionForecastInputBuilder {
    pub fn current_age(mut self, age: u8) -> Self {
        self.current_age = Some(age);
        self
    }

    pub fn retirement_age(mut self, age: u8) -> Self {
        self.retirement_age = Some(age);
        self
    }

    pub fn social_salary(mut self, amount: f64) -> Self {
        self.social_salary = Some(amount);
        self
    }

    pub fn contribution_base(mut self, amount: f64) -> Self {
        self.contribution_base = Some(amount);
        self
    }

    pub fn contribution_index(mut self, index: f64) -> Self {
        self.contribution_index = Some(index);
        self
    }

    pub fn years_contributed(mut self, years: u32) -> Self {
        self.years_contributed = Some(years);
        self
    }

    pub fn account_balance(mut self, amount: f64) -> Self {
        self.account_balance = Some(amount);
        self
    }

    pub fn salary_growth_rate(mut self, rate: f64) -> Self {
        self.salary_growth_rate = Some(rate);
        self
    }

    pub fn contribution_base_growth_rate(mut self, rate: f64) -> Self {
        self.contribution_base_growth_rate = Some(rate);
        self
    }

    pub fn account_interest_rate(mut self, rate: f64) -> Self {
        self.account_interest_rate = Some(rate);
        self
    }

    pub fn account_contributions(mut self, contributions: AccountContributions) -> Self {
        self.account_contributions = contributions;
        self
    }

    /// Names of required fields that are still unset
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.current_age.is_none() {
            missing.push("current_age");
        }
        if self.retirement_age.is_none() {
            missing.push("retirement_age");
        }
        if self.social_salary.is_none() {
            missing.push("social_salary");
        }
        if self.contribution_base.is_none() {
            missing.push("contribution_base");
        }
        if self.contribution_index.is_none() {
            missing.push("contribution_index");
        }
        if self.years_contributed.is_none() {
            missing.push("years_contributed");
        }
        if self.account_balance.is_none() {
            missing.push("account_balance");
        }
        if self.salary_growth_rate.is_none() {
            missing.push("salary_growth_rate");
        }
        if self.contribution_base_growth_rate.is_none() {
            missing.push("contribution_base_growth_rate");
        }
        if self.account_interest_rate.is_none() {
            missing.push("account_interest_rate");
        }
        missing
    }

    /// Produce a validated input
    ///
    /// Fails with `MissingField` naming the first unset field, or with
    /// `InvalidInput` for the first field outside its domain.
    pub fn build(self) -> PensionResult<PensionForecastInput> {
        if let Some(field) = self.missing_fields().first() {
            return Err(PensionError::missing_field(*field));
        }

        let input = PensionForecastInput {
            current_age: required(self.current_age, "current_age")?,
            retirement_age: required(self.retirement_age, "retirement_age")?,
            social_salary: required(self.social_salary, "social_salary")?,
            contribution_base: required(self.contribution_base, "contribution_base")?,
            contribution_index: required(self.contribution_index, "contribution_index")?,
            years_contributed: required(self.years_contributed, "years_contributed")?,
            account_balance: required(self.account_balance, "account_balance")?,
            salary_growth_rate: required(self.salary_growth_rate, "salary_growth_rate")?,
            contribution_base_growth_rate: required(
                self.contribution_base_growth_rate,
                "contribution_base_growth_rate",
            )?,
            account_interest_rate: required(self.account_interest_rate, "account_interest_rate")?,
            account_contributions: self.account_contributions,
        };

        input.validate()?;
        Ok(input)
    }
}

fn required<T>(value: Option<T>, field: &str) -> PensionResult<T> {
    value.ok_or_else(|| PensionError::missing_field(field))
}
