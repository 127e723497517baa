//! Load members from CSV (batch) or JSON (single input)

use std::fs;
use std::path::Path;

use csv::Reader;

use super::Member;
use crate::error::{LoadError, PensionResult};
use crate::projection::{AccountContributions, PensionForecastInput};

/// Default location of the member batch file
pub const DEFAULT_MEMBERS_PATH: &str = "data/members.csv";

/// Raw CSV row
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "MemberID")]
    member_id: u32,
    #[serde(rename = "CurrentAge")]
    current_age: u8,
    #[serde(rename = "RetirementAge")]
    retirement_age: u8,
    #[serde(rename = "SocialSalary")]
    social_salary: f64,
    #[serde(rename = "ContributionBase")]
    contribution_base: f64,
    #[serde(rename = "ContributionIndex")]
    contribution_index: f64,
    #[serde(rename = "YearsContributed")]
    years_contributed: u32,
    #[serde(rename = "AccountBalance")]
    account_balance: f64,
    #[serde(rename = "SalaryGrowth")]
    salary_growth: f64,
    #[serde(rename = "BaseGrowth")]
    base_growth: f64,
    #[serde(rename = "AccountInterest")]
    account_interest: f64,
    #[serde(rename = "AnnualPayment", default)]
    annual_payment: Option<f64>,
}

impl CsvRow {
    fn to_member(self) -> PensionResult<Member> {
        let contributions = match self.annual_payment {
            Some(annual_payment) if annual_payment != 0.0 => {
                AccountContributions::Level { annual_payment }
            }
            _ => AccountContributions::None,
        };

        let input = PensionForecastInput::builder()
            .current_age(self.current_age)
            .retirement_age(self.retirement_age)
            .social_salary(self.social_salary)
            .contribution_base(self.contribution_base)
            .contribution_index(self.contribution_index)
            .years_contributed(self.years_contributed)
            .account_balance(self.account_balance)
            .salary_growth_rate(self.salary_growth)
            .contribution_base_growth_rate(self.base_growth)
            .account_interest_rate(self.account_interest)
            .account_contributions(contributions)
            .build()?;

        Ok(Member {
            member_id: self.member_id,
            input,
        })
    }
}

/// Load all members from a CSV file
pub fn load_members<P: AsRef<Path>>(path: P) -> Result<Vec<Member>, LoadError> {
    let file = fs::File::open(path)?;
    load_members_from_reader(file)
}

/// Load members from any reader
///
/// Stops at the first invalid row, reporting its line number.
pub fn load_members_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<Member>, LoadError> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut members = Vec::new();

    for (idx, result) in csv_reader.deserialize().enumerate() {
        let row: CsvRow = result?;
        // Header is line 1
        let line = idx as u64 + 2;
        let member = row
            .to_member()
            .map_err(|source| LoadError::Record { line, source })?;
        members.push(member);
    }

    log::info!("Loaded {} members", members.len());
    Ok(members)
}

/// Load members from `DEFAULT_MEMBERS_PATH`
pub fn load_default_members() -> Result<Vec<Member>, LoadError> {
    load_members(DEFAULT_MEMBERS_PATH)
}

/// Load and validate a single forecast input from JSON
pub fn load_member_json<P: AsRef<Path>>(path: P) -> Result<PensionForecastInput, LoadError> {
    let contents = fs::read_to_string(path)?;
    let input: PensionForecastInput = serde_json::from_str(&contents)?;
    input.validate()?;
    Ok(input)
}
