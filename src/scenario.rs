//! Batch runner for forecasting many members or many configurations
//!
//! Forecasts are independent pure computations, so batches run in parallel
//! with no shared state beyond the read-only engine.

use rayon::prelude::*;
use serde::Serialize;

use crate::error::PensionResult;
use crate::member::Member;
use crate::projection::{ForecastConfig, PensionForecastEngine, PensionForecastInput, PensionForecastResult};

/// Forecast outcome for one member of a batch
#[derive(Debug, Clone)]
pub struct MemberForecast {
    pub member_id: u32,
    pub result: PensionResult<PensionForecastResult>,
}

/// Runner holding a configured engine
#[derive(Debug, Clone, Default)]
pub struct ForecastRunner {
    engine: PensionForecastEngine,
}

impl ForecastRunner {
    pub fn new(config: ForecastConfig) -> Self {
        Self {
            engine: PensionForecastEngine::new(config),
        }
    }

    pub fn engine(&self) -> &PensionForecastEngine {
        &self.engine
    }

    /// Forecast one input
    pub fn run(&self, input: &PensionForecastInput) -> PensionResult<PensionForecastResult> {
        self.engine.forecast(input)
    }

    /// Forecast every member in parallel, preserving input order
    ///
    /// A failing member does not stop the batch; its error is kept in place.
    pub fn run_batch(&self, members: &[Member]) -> Vec<MemberForecast> {
        log::info!("Forecasting {} members", members.len());

        let forecasts: Vec<MemberForecast> = members
            .par_iter()
            .map(|member| MemberForecast {
                member_id: member.member_id,
                result: self.engine.forecast(&member.input),
            })
            .collect();

        for forecast in &forecasts {
            if let Err(err) = &forecast.result {
                log::warn!("Member {} skipped: {}", forecast.member_id, err);
            }
        }

        forecasts
    }

    /// Forecast one input under several configurations
    pub fn run_scenarios(
        input: &PensionForecastInput,
        configs: &[ForecastConfig],
    ) -> Vec<PensionResult<PensionForecastResult>> {
        configs
            .iter()
            .map(|config| PensionForecastEngine::new(config.clone()).forecast(input))
            .collect()
    }
}

/// Summary statistics for a batch
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BatchSummary {
    pub members: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub mean_fundamental: f64,
    pub mean_personal: f64,
    pub mean_total: f64,
}

impl BatchSummary {
    pub fn from_forecasts(forecasts: &[MemberForecast]) -> Self {
        let ok: Vec<&PensionForecastResult> =
            forecasts.iter().filter_map(|f| f.result.as_ref().ok()).collect();

        let mean = |value: fn(&PensionForecastResult) -> f64| {
            if ok.is_empty() {
                0.0
            } else {
                ok.iter().map(|r| value(r)).sum::<f64>() / ok.len() as f64
            }
        };

        Self {
            members: forecasts.len(),
            succeeded: ok.len(),
            failed: forecasts.len() - ok.len(),
            mean_fundamental: mean(|r| r.fundamental_pension),
            mean_personal: mean(|r| r.personal_pension),
            mean_total: mean(|r| r.total_pension),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PensionError;
    use crate::projection::{AccountContributions, ContributionIndexPolicy};
    use approx::assert_relative_eq;

    fn member(member_id: u32, current_age: u8, retirement_age: u8) -> Member {
        Member {
            member_id,
            input: PensionForecastInput {
                current_age,
                retirement_age,
                social_salary: 6000.0,
                contribution_base: 7200.0,
                contribution_index: 1.1,
                years_contributed: 10,
                account_balance: 40_000.0,
                salary_growth_rate: 0.03,
                contribution_base_growth_rate: 0.03,
                account_interest_rate: 0.04,
                account_contributions: AccountContributions::ShareOfBase { rate: 0.08 },
            },
        }
    }

    #[test]
    fn test_batch_matches_single_runs() {
        let runner = ForecastRunner::default();
        let members: Vec<Member> = (0..20).map(|i| member(i, 30 + i as u8, 60)).collect();

        let forecasts = runner.run_batch(&members);
        assert_eq!(forecasts.len(), 20);

        for (member, forecast) in members.iter().zip(&forecasts) {
            assert_eq!(forecast.member_id, member.member_id);
            assert_eq!(forecast.result, runner.run(&member.input));
        }
    }

    #[test]
    fn test_batch_keeps_failures_in_place() {
        let runner = ForecastRunner::default();
        let members = vec![member(1, 40, 60), member(2, 40, 72), member(3, 40, 65)];

        let forecasts = runner.run_batch(&members);
        assert!(forecasts[0].result.is_ok());
        assert!(matches!(forecasts[1].result, Err(PensionError::OutOfRange { age: 72, .. })));
        assert!(forecasts[2].result.is_ok());

        let summary = BatchSummary::from_forecasts(&forecasts);
        assert_eq!(summary.members, 3);
        assert_eq!(summary.succeeded, 2);
        assert_eq!(summary.failed, 1);

        let total_0 = forecasts[0].result.as_ref().unwrap().total_pension;
        let total_2 = forecasts[2].result.as_ref().unwrap().total_pension;
        assert_relative_eq!(summary.mean_total, (total_0 + total_2) / 2.0, epsilon = 1e-9);
    }

    #[test]
    fn test_empty_batch_summary() {
        let summary = BatchSummary::from_forecasts(&[]);
        assert_eq!(summary.succeeded, 0);
        assert_eq!(summary.mean_total, 0.0);
    }

    #[test]
    fn test_scenarios() {
        let input = member(1, 40, 60).input;
        let configs: Vec<ForecastConfig> = [
            ContributionIndexPolicy::HeldConstant,
            ContributionIndexPolicy::ProjectedRatio,
            ContributionIndexPolicy::YearWeighted,
        ]
        .iter()
        .map(|&index_policy| ForecastConfig {
            index_policy,
            ..Default::default()
        })
        .collect();

        let results = ForecastRunner::run_scenarios(&input, &configs);
        assert_eq!(results.len(), 3);

        // Base/salary ratio is 1.2 every year, so both ratio policies land above 1.1
        let held = results[0].as_ref().unwrap();
        let ratio = results[1].as_ref().unwrap();
        let weighted = results[2].as_ref().unwrap();
        assert_eq!(held.contribution_index, 1.1);
        assert_relative_eq!(ratio.contribution_index, 1.2, epsilon = 1e-12);
        assert!(weighted.contribution_index > 1.1 && weighted.contribution_index < 1.2);
        assert_eq!(held.personal_pension, weighted.personal_pension);
    }
}
