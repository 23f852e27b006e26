//! Record types for the five tables.
//!
//! `New*` structs are what callers hand to the store; they carry no id
//! and are validated before any SQL runs. The id-bearing structs are what
//! the store returns.

use crate::{
    error::{TrackerError, TrackerResult},
    types::{BloodPressure, Gender, Intensity, MealType, RecordId, SleepQuality, UserId},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const MAX_SLEEP_HOURS: f64 = 24.0;

/// Body-mass index from weight (kg) and height (cm), rounded to 2 decimals.
pub fn bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    round2(weight_kg / (height_m * height_m))
}

pub(crate) fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

fn require_positive(field: &'static str, v: f64) -> TrackerResult<()> {
    if v.is_finite() && v > 0.0 {
        Ok(())
    } else {
        Err(TrackerError::validation(field, format!("must be > 0, got {v}")))
    }
}

fn require_non_negative(field: &'static str, v: f64) -> TrackerResult<()> {
    if v.is_finite() && v >= 0.0 {
        Ok(())
    } else {
        Err(TrackerError::validation(field, format!("must be >= 0, got {v}")))
    }
}

fn require_text(field: &'static str, v: &str) -> TrackerResult<()> {
    if v.trim().is_empty() {
        Err(TrackerError::validation(field, "must not be empty"))
    } else {
        Ok(())
    }
}

// ── User ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub age: u32,
    pub gender: Gender,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub goal: String,
}

impl NewUser {
    pub fn validate(&self) -> TrackerResult<()> {
        require_text("name", &self.name)?;
        if self.age == 0 {
            return Err(TrackerError::validation("age", "must be > 0"));
        }
        require_positive("height", self.height_cm)?;
        require_positive("weight", self.weight_kg)?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub user_id: UserId,
    pub name: String,
    pub age: u32,
    pub gender: Gender,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub goal: String,
}

// ── Workout ───────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewWorkout {
    pub user_id: UserId,
    pub date: NaiveDate,
    pub workout_type: String,
    pub duration_min: u32,
    pub intensity: Intensity,
}

impl NewWorkout {
    pub fn validate(&self) -> TrackerResult<()> {
        require_text("workout type", &self.workout_type)?;
        if self.duration_min == 0 {
            return Err(TrackerError::validation("duration", "must be > 0 minutes"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    pub workout_id: RecordId,
    pub user_id: UserId,
    pub date: NaiveDate,
    pub workout_type: String,
    pub duration_min: u32,
    pub intensity: Intensity,
}

// ── Nutrition ─────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewNutritionLog {
    pub user_id: UserId,
    pub date: NaiveDate,
    pub meal_type: MealType,
    pub calories: u32,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fats_g: f64,
}

impl NewNutritionLog {
    pub fn validate(&self) -> TrackerResult<()> {
        require_non_negative("protein", self.protein_g)?;
        require_non_negative("carbs", self.carbs_g)?;
        require_non_negative("fats", self.fats_g)?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionLog {
    pub meal_id: RecordId,
    pub user_id: UserId,
    pub date: NaiveDate,
    pub meal_type: MealType,
    pub calories: u32,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fats_g: f64,
}

// ── Sleep ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSleepRecord {
    pub user_id: UserId,
    pub date: NaiveDate,
    pub duration_hours: f64,
    pub quality: SleepQuality,
}

impl NewSleepRecord {
    pub fn validate(&self) -> TrackerResult<()> {
        let h = self.duration_hours;
        if !(h.is_finite() && (0.0..=MAX_SLEEP_HOURS).contains(&h)) {
            return Err(TrackerError::validation(
                "sleep duration",
                format!("must be within 0..=24 hours, got {h}"),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SleepRecord {
    pub sleep_id: RecordId,
    pub user_id: UserId,
    pub date: NaiveDate,
    pub duration_hours: f64,
    pub quality: SleepQuality,
}

// ── Health metrics ────────────────────────────────────────────────

/// A health reading before insert. BMI is not supplied by the caller:
/// the store derives it from the owning user's height.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewHealthMetric {
    pub user_id: UserId,
    pub date: NaiveDate,
    pub weight_kg: f64,
    pub heart_rate: Option<u32>,
    pub blood_pressure: Option<BloodPressure>,
}

impl NewHealthMetric {
    pub fn validate(&self) -> TrackerResult<()> {
        require_positive("weight", self.weight_kg)?;
        if self.heart_rate == Some(0) {
            return Err(TrackerError::validation("heart rate", "must be > 0 bpm"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthMetric {
    pub metric_id: RecordId,
    pub user_id: UserId,
    pub date: NaiveDate,
    pub weight_kg: f64,
    pub bmi: f64,
    pub heart_rate: Option<u32>,
    pub blood_pressure: Option<BloodPressure>,
}
