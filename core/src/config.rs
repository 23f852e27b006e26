//! Seeding configuration.
//!
//! Loaded from a JSON file when one is given, otherwise `Default`.
//! Fields missing from the file keep their default values.

use crate::error::TrackerResult;
use anyhow::Context;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    /// Master seed; the same seed always yields the same rows.
    pub seed: u64,
    pub users: usize,
    pub workouts_per_user: usize,
    pub nutrition_per_user: usize,
    pub sleep_per_user: usize,
    pub metrics_per_user: usize,
    /// Generated dates fall within this many days before the seeding date.
    pub history_days: u32,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            users: 10,
            workouts_per_user: 50,
            nutrition_per_user: 150,
            sleep_per_user: 100,
            metrics_per_user: 50,
            history_days: 365,
        }
    }
}

impl SeedConfig {
    pub fn load(path: &str) -> TrackerResult<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading seed config {path}"))?;
        let config: SeedConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Small fixture for tests: a handful of users with a few rows each.
    pub fn default_test() -> Self {
        Self {
            seed: 7,
            users: 3,
            workouts_per_user: 12,
            nutrition_per_user: 20,
            sleep_per_user: 10,
            metrics_per_user: 6,
            history_days: 365,
        }
    }
}
