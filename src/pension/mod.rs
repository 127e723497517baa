//! Current-state pension calculators

mod fundamental;
mod personal;

pub use fundamental::FundamentalPensionCalculator;
pub use personal::PersonalPensionCalculator;
