//! Plain-text rendering of query results for the CLI.
//!
//! Every function here is a pure formatter; none touch the store.

use crate::{
    query::{CorrelationPoint, MetricKind, SleepQualityDistribution, TrendPoint},
    records::Workout,
    types::UserId,
    window::Window,
};
use std::fmt::Write;

pub fn workout_history(user_id: UserId, window: &Window, workouts: &[Workout]) -> String {
    if workouts.is_empty() {
        return format!(
            "No workouts found for user {user_id} in the last {} days.\n",
            window.days()
        );
    }
    let mut out = String::new();
    for w in workouts {
        let _ = writeln!(
            out,
            "Date: {}, Type: {}, Duration: {} minutes, Intensity: {}",
            w.date, w.workout_type, w.duration_min, w.intensity
        );
    }
    out
}

pub fn average_daily_calories(user_id: UserId, window: &Window, average: Option<f64>) -> String {
    match average {
        Some(avg) => format!(
            "Average daily calories over the last {} days: {avg:.1}\n",
            window.days()
        ),
        None => format!(
            "No nutrition data found for user {user_id} in the last {} days.\n",
            window.days()
        ),
    }
}

pub fn sleep_quality(user_id: UserId, window: &Window, dist: &SleepQualityDistribution) -> String {
    if dist.is_empty() {
        return format!(
            "No sleep data found for user {user_id} in the last {} days.\n",
            window.days()
        );
    }
    let mut out = String::new();
    for (quality, count) in dist {
        let _ = writeln!(out, "Quality: {quality}, Count: {count}");
    }
    out
}

pub fn correlation(user_id: UserId, points: &[CorrelationPoint]) -> String {
    if points.is_empty() {
        return format!("No days with both meals and workouts logged for user {user_id}.\n");
    }
    let mut out = String::new();
    for p in points {
        let _ = writeln!(
            out,
            "Date: {}, Avg Protein Intake: {:.2}g, Avg Workout Duration: {:.1} mins",
            p.date, p.avg_protein_g, p.avg_duration_min
        );
    }
    out
}

pub fn metric_trend(metric: MetricKind, points: &[TrendPoint]) -> String {
    let mut out = format!("Trends for {metric}:\n");
    if points.is_empty() {
        out.push_str("  (no readings)\n");
        return out;
    }
    for p in points {
        let _ = writeln!(out, "Date: {}, {}: {:.2}{}", p.date, label(metric), p.value, suffix(metric));
    }
    out
}

fn label(metric: MetricKind) -> &'static str {
    match metric {
        MetricKind::Weight => "Weight",
        MetricKind::Bmi => "BMI",
        MetricKind::HeartRate => "Heart rate",
    }
}

fn suffix(metric: MetricKind) -> String {
    match metric.unit() {
        "" => String::new(),
        unit => format!(" {unit}"),
    }
}
