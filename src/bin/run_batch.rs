//! Forecast every member in data/members.csv
//!
//! Outputs one row per member to batch_forecast_output.csv

use anyhow::{Context, Result};
use pension_forecast::member::{load_default_members, loader::DEFAULT_MEMBERS_PATH};
use pension_forecast::{BatchSummary, ForecastConfig, ForecastRunner};
use serde::Serialize;
use std::time::Instant;

#[derive(Debug, Serialize)]
struct OutputRow {
    #[serde(rename = "MemberID")]
    member_id: u32,
    #[serde(rename = "RetirementAge")]
    retirement_age: Option<u8>,
    #[serde(rename = "ContributionIndex")]
    contribution_index: Option<f64>,
    #[serde(rename = "Fundamental")]
    fundamental: Option<String>,
    #[serde(rename = "Personal")]
    personal: Option<String>,
    #[serde(rename = "Total")]
    total: Option<String>,
    #[serde(rename = "Error")]
    error: Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();

    let start = Instant::now();
    println!("Loading members from {}...", DEFAULT_MEMBERS_PATH);
    let members = load_default_members().context("Failed to load members")?;
    println!("Loaded {} members in {:?}", members.len(), start.elapsed());

    let config = ForecastConfig::load_or_default().context("Failed to load config")?;
    let runner = ForecastRunner::new(config);

    let proj_start = Instant::now();
    let forecasts = runner.run_batch(&members);
    println!("Forecasts complete in {:?}", proj_start.elapsed());

    let output_path = "batch_forecast_output.csv";
    let mut writer = csv::Writer::from_path(output_path)
        .with_context(|| format!("Failed to create {}", output_path))?;

    for forecast in &forecasts {
        let row = match &forecast.result {
            Ok(result) => OutputRow {
                member_id: forecast.member_id,
                retirement_age: Some(result.retirement_age),
                contribution_index: Some(result.contribution_index),
                fundamental: Some(format!("{:.2}", result.fundamental_pension)),
                personal: Some(format!("{:.2}", result.personal_pension)),
                total: Some(format!("{:.2}", result.total_pension)),
                error: None,
            },
            Err(err) => OutputRow {
                member_id: forecast.member_id,
                retirement_age: None,
                contribution_index: None,
                fundamental: None,
                personal: None,
                total: None,
                error: Some(err.to_string()),
            },
        };
        writer.serialize(row)?;
    }
    writer.flush()?;
    println!("Output written to {}", output_path);

    let summary = BatchSummary::from_forecasts(&forecasts);
    println!("\nBatch Summary:");
    println!("  Members: {} ({} failed)", summary.members, summary.failed);
    println!("  Mean fundamental: {:.2}", summary.mean_fundamental);
    println!("  Mean personal: {:.2}", summary.mean_personal);
    println!("  Mean total: {:.2}", summary.mean_total);

    println!("\nTotal time: {:?}", start.elapsed());
    Ok(())
}
