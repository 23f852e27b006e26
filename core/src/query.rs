//! Read-only aggregate queries over the store.
//!
//! Every function takes an explicit store handle and returns structured
//! data. An empty window is a normal outcome: callers get an empty `Vec`,
//! an empty distribution, or `None`, never an error. Presentation lives in
//! `report`.

use crate::{
    error::TrackerResult,
    records::{HealthMetric, Workout},
    store::TrackerStore,
    types::{SleepQuality, UserId},
    window::Window,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fmt, str::FromStr};

/// Total calories logged on one date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyCalories {
    pub date: NaiveDate,
    pub total_calories: i64,
}

/// One date present in both the nutrition and workout logs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CorrelationPoint {
    pub date: NaiveDate,
    pub avg_protein_g: f64,
    pub avg_duration_min: f64,
}

/// Count of sleep records per quality label, ordered Poor → Excellent.
pub type SleepQualityDistribution = BTreeMap<SleepQuality, u64>;

/// Health metric fields that can be charted over time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetricKind {
    Weight,
    Bmi,
    HeartRate,
}

impl MetricKind {
    pub const ALL: &'static [MetricKind] =
        &[MetricKind::Weight, MetricKind::Bmi, MetricKind::HeartRate];

    /// The value this metric reads from a stored reading. `None` when the
    /// reading did not record it.
    pub fn value_of(&self, m: &HealthMetric) -> Option<f64> {
        match self {
            MetricKind::Weight => Some(m.weight_kg),
            MetricKind::Bmi => Some(m.bmi),
            MetricKind::HeartRate => m.heart_rate.map(f64::from),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MetricKind::Weight => "weight",
            MetricKind::Bmi => "bmi",
            MetricKind::HeartRate => "heart_rate",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            MetricKind::Weight => "kg",
            MetricKind::Bmi => "",
            MetricKind::HeartRate => "bpm",
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MetricKind {
    type Err = crate::error::TrackerError;

    fn from_str(s: &str) -> TrackerResult<Self> {
        match s {
            "weight" => Ok(MetricKind::Weight),
            "bmi" => Ok(MetricKind::Bmi),
            "heart_rate" => Ok(MetricKind::HeartRate),
            other => Err(crate::error::TrackerError::invalid_value("metric", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub value: f64,
}

/// Workouts inside the window, oldest first.
pub fn workout_history(
    store: &TrackerStore,
    user_id: UserId,
    window: &Window,
) -> TrackerResult<Vec<Workout>> {
    store.workouts_for_user(user_id, Some(window))
}

pub fn daily_calorie_totals(
    store: &TrackerStore,
    user_id: UserId,
    window: &Window,
) -> TrackerResult<Vec<DailyCalories>> {
    store.daily_calorie_totals(user_id, Some(window))
}

/// Mean of per-date calorie sums. `None` when nothing was logged.
pub fn mean_daily_calories(days: &[DailyCalories]) -> Option<f64> {
    if days.is_empty() {
        return None;
    }
    let total: i64 = days.iter().map(|d| d.total_calories).sum();
    Some(total as f64 / days.len() as f64)
}

pub fn average_daily_calories(
    store: &TrackerStore,
    user_id: UserId,
    window: &Window,
) -> TrackerResult<Option<f64>> {
    let days = daily_calorie_totals(store, user_id, window)?;
    Ok(mean_daily_calories(&days))
}

pub fn sleep_quality_distribution(
    store: &TrackerStore,
    user_id: UserId,
    window: &Window,
) -> TrackerResult<SleepQualityDistribution> {
    let counts = store.sleep_quality_counts(user_id, Some(window))?;
    Ok(counts.into_iter().collect())
}

/// Average protein against average workout duration for each date that
/// has both. `None` covers the user's full history.
pub fn nutrition_workout_correlation(
    store: &TrackerStore,
    user_id: UserId,
    window: Option<&Window>,
) -> TrackerResult<Vec<CorrelationPoint>> {
    store.protein_vs_workout_duration(user_id, window)
}

/// `(date, value)` pairs for one metric, oldest first. Readings that did
/// not record the metric are skipped.
pub fn health_metric_trend(
    store: &TrackerStore,
    user_id: UserId,
    metric: MetricKind,
    window: Option<&Window>,
) -> TrackerResult<Vec<TrendPoint>> {
    let readings = store.health_metrics_for_user(user_id, window)?;
    Ok(readings
        .iter()
        .filter_map(|m| {
            metric
                .value_of(m)
                .map(|value| TrendPoint { date: m.date, value })
        })
        .collect())
}
