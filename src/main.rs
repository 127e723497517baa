//! Pension Forecast CLI
//!
//! Runs a forecast for a sample member and writes the year-by-year trace

use anyhow::{Context, Result};
use pension_forecast::{
    projection::AccountContributions, ForecastConfig, PensionForecastEngine, PensionForecastInput,
};

fn main() -> Result<()> {
    env_logger::init();

    println!("Pension Forecast v0.1.0");
    println!("=======================\n");

    // Sample member: age 35, 12 years contributed, retiring at 60
    let input = PensionForecastInput::builder()
        .current_age(35)
        .retirement_age(60)
        .social_salary(8_000.0)
        .contribution_base(9_600.0)
        .contribution_index(1.15)
        .years_contributed(12)
        .account_balance(65_000.0)
        .salary_growth_rate(0.04)
        .contribution_base_growth_rate(0.04)
        .account_interest_rate(0.035)
        .account_contributions(AccountContributions::ShareOfBase { rate: 0.08 })
        .build()
        .context("Invalid sample member")?;

    let mut config = ForecastConfig::load_or_default().context("Unable to load config")?;
    config.detailed_output = true;

    println!("Member:");
    println!("  Age: {} -> {}", input.current_age, input.retirement_age);
    println!("  Social salary: {:.2}", input.social_salary);
    println!("  Contribution base: {:.2}", input.contribution_base);
    println!("  Account balance: {:.2}", input.account_balance);
    println!("  Index policy: {:?}", config.index_policy);
    println!();

    let engine = PensionForecastEngine::new(config);
    let result = engine.forecast(&input).context("Forecast failed")?;

    println!(
        "{:>4} {:>4} {:>14} {:>14} {:>8} {:>12} {:>14}",
        "Year", "Age", "SocialSalary", "ContribBase", "Ratio", "Payment", "Balance"
    );
    println!("{}", "-".repeat(76));
    for row in &result.yearly {
        println!(
            "{:>4} {:>4} {:>14.2} {:>14.2} {:>8.4} {:>12.2} {:>14.2}",
            row.year,
            row.age,
            row.social_salary,
            row.contribution_base,
            row.contribution_ratio,
            row.account_payment,
            row.account_balance,
        );
    }

    let csv_path = "forecast_output.csv";
    let mut writer = csv::Writer::from_path(csv_path)
        .with_context(|| format!("Unable to create {}", csv_path))?;
    for row in &result.yearly {
        writer.serialize(row)?;
    }
    writer.flush()?;
    println!("\nFull trace written to: {}", csv_path);

    println!("\nForecast at {}:", result.retirement_age);
    println!("  Years contributed: {}", result.years_contributed);
    println!("  Contribution index: {:.4}", result.contribution_index);
    println!("  Months divisor: {}", result.months_divisor);
    println!("  Fundamental pension: {:.2}", result.fundamental_pension);
    println!("  Personal pension: {:.2}", result.personal_pension);
    println!("  Total pension: {:.2}", result.total_pension);
    println!("  Personal share: {:.1}%", result.personal_share() * 100.0);
    println!("  Account payments to retirement: {:.2}", result.total_account_payments());

    Ok(())
}
