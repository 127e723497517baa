//! Scheme members and their loaders

pub mod loader;

pub use loader::{load_default_members, load_member_json, load_members, load_members_from_reader};

use serde::{Deserialize, Serialize};

use crate::projection::PensionForecastInput;

/// A scheme member with a validated forecast input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub member_id: u32,
    pub input: PensionForecastInput,
}
