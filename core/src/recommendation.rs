//! Rule-based advice over recent workouts and calorie intake.
//!
//! The decision functions are pure; the `*_recommendation` wrappers only
//! fetch the trailing window they need. Rules are checked in order and the
//! first match wins.

use crate::{
    error::TrackerResult,
    query::{self, DailyCalories},
    records::Workout,
    store::TrackerStore,
    types::{Intensity, UserId},
    window::Window,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, fmt};

pub const FITNESS_LOOKBACK_DAYS: u32 = 30;
pub const NUTRITION_LOOKBACK_DAYS: u32 = 7;

/// Fewer distinct workout days than this in the lookback means "train more often".
pub const MIN_WORKOUT_DAYS: usize = 8;
pub const LOW_CALORIE_THRESHOLD: f64 = 1500.0;
pub const HIGH_CALORIE_THRESHOLD: f64 = 2500.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FitnessAdvice {
    StartLightCardio,
    IncreaseFrequency,
    AddHighIntensity,
    VaryWorkoutTypes,
}

impl FitnessAdvice {
    pub fn message(&self) -> &'static str {
        match self {
            FitnessAdvice::StartLightCardio => {
                "We recommend starting with light cardio sessions, 15-30 minutes a day, three times a week."
            }
            FitnessAdvice::IncreaseFrequency => {
                "To achieve your goals faster, try to increase your workout frequency to at least twice a week."
            }
            FitnessAdvice::AddHighIntensity => {
                "Consider incorporating more high-intensity workouts into your routine to maximize your fitness gains."
            }
            FitnessAdvice::VaryWorkoutTypes => {
                "Great job maintaining a consistent workout routine! Try challenging yourself with varied workout types to improve all aspects of fitness."
            }
        }
    }
}

impl fmt::Display for FitnessAdvice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NutritionAdvice {
    StartTracking,
    TooLow,
    TooHigh,
    HealthyRange,
}

impl NutritionAdvice {
    pub fn message(&self) -> &'static str {
        match self {
            NutritionAdvice::StartTracking => {
                "Start tracking your daily nutrition to receive personalized dietary advice."
            }
            NutritionAdvice::TooLow => {
                "Your calorie intake might be too low for optimal health. Consider consulting a dietitian for a personalized meal plan."
            }
            NutritionAdvice::TooHigh => {
                "You might be consuming more calories than necessary. Focus on nutrient-dense foods and monitor portion sizes."
            }
            NutritionAdvice::HealthyRange => {
                "Your average calorie intake is within a healthy range. Keep up the good work and ensure you're getting a balanced mix of nutrients."
            }
        }
    }
}

impl fmt::Display for NutritionAdvice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Pick fitness advice from the workouts in the lookback window.
pub fn fitness_advice(recent: &[Workout]) -> FitnessAdvice {
    if recent.is_empty() {
        return FitnessAdvice::StartLightCardio;
    }
    let workout_days: HashSet<NaiveDate> = recent.iter().map(|w| w.date).collect();
    let high_intensity = recent
        .iter()
        .filter(|w| w.intensity == Intensity::High)
        .count();

    if workout_days.len() < MIN_WORKOUT_DAYS {
        FitnessAdvice::IncreaseFrequency
    } else if (high_intensity as f64) < recent.len() as f64 / 2.0 {
        FitnessAdvice::AddHighIntensity
    } else {
        FitnessAdvice::VaryWorkoutTypes
    }
}

/// Pick nutrition advice from per-date calorie totals.
pub fn nutrition_advice(days: &[DailyCalories]) -> NutritionAdvice {
    match query::mean_daily_calories(days) {
        None => NutritionAdvice::StartTracking,
        Some(mean) if mean < LOW_CALORIE_THRESHOLD => NutritionAdvice::TooLow,
        Some(mean) if mean > HIGH_CALORIE_THRESHOLD => NutritionAdvice::TooHigh,
        Some(_) => NutritionAdvice::HealthyRange,
    }
}

pub fn fitness_recommendation(
    store: &TrackerStore,
    user_id: UserId,
    today: NaiveDate,
) -> TrackerResult<FitnessAdvice> {
    let window = Window::trailing(today, FITNESS_LOOKBACK_DAYS);
    let recent = query::workout_history(store, user_id, &window)?;
    Ok(fitness_advice(&recent))
}

pub fn nutrition_recommendation(
    store: &TrackerStore,
    user_id: UserId,
    today: NaiveDate,
) -> TrackerResult<NutritionAdvice> {
    let window = Window::trailing(today, NUTRITION_LOOKBACK_DAYS);
    let days = query::daily_calorie_totals(store, user_id, &window)?;
    Ok(nutrition_advice(&days))
}
