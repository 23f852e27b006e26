//! Synthetic sample data for demos and manual testing.
//!
//! Users are generated first; every other record type is generated per
//! user with dates spread uniformly over the trailing history window.
//! Each record type is written in its own transaction.

use crate::{
    config::SeedConfig,
    error::TrackerResult,
    name_generator::NameGenerator,
    records::{NewHealthMetric, NewNutritionLog, NewSleepRecord, NewUser, NewWorkout, User},
    rng::{RngBank, SeedRng, SeedStream},
    store::TrackerStore,
    types::{BloodPressure, Gender, Intensity, MealType, SleepQuality},
};
use chrono::{Days, NaiveDate};
use log::info;
use serde::Serialize;

pub const GOALS: &[&str] = &["Weight Loss", "Muscle Gain", "Improve Fitness"];
pub const WORKOUT_TYPES: &[&str] = &["Cardio", "Strength", "Flexibility", "Balance"];

/// Rows written by one seeding run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeedSummary {
    pub users: usize,
    pub workouts: usize,
    pub nutrition: usize,
    pub sleep: usize,
    pub health_metrics: usize,
}

pub struct SeedGenerator<'a> {
    store: &'a TrackerStore,
    config: SeedConfig,
    today: NaiveDate,
    rng_bank: RngBank,
}

impl<'a> SeedGenerator<'a> {
    pub fn new(store: &'a TrackerStore, config: SeedConfig, today: NaiveDate) -> Self {
        let rng_bank = RngBank::new(config.seed);
        Self {
            store,
            config,
            today,
            rng_bank,
        }
    }

    /// Generate and insert every record type. Returns what was written.
    pub fn run(&self) -> TrackerResult<SeedSummary> {
        let users = self.generate_users()?;
        let summary = SeedSummary {
            users: users.len(),
            workouts: self.generate_workouts(&users)?,
            nutrition: self.generate_nutrition(&users)?,
            sleep: self.generate_sleep(&users)?,
            health_metrics: self.generate_health_metrics(&users)?,
        };
        info!(
            "seeded {} users, {} workouts, {} meals, {} sleep records, {} health metrics",
            summary.users, summary.workouts, summary.nutrition, summary.sleep, summary.health_metrics
        );
        Ok(summary)
    }

    /// Uniform date in `(today - history_days, today]`.
    fn random_date(&self, rng: &mut SeedRng) -> NaiveDate {
        let span = u64::from(self.config.history_days.max(1));
        let back = rng.next_u64_below(span);
        self.today
            .checked_sub_days(Days::new(back))
            .unwrap_or(self.today)
    }

    fn generate_users(&self) -> TrackerResult<Vec<User>> {
        let mut rng = self.rng_bank.for_stream(SeedStream::Users);
        self.store.in_transaction(|store| {
            let mut users = Vec::with_capacity(self.config.users);
            for _ in 0..self.config.users {
                let user = NewUser {
                    name: NameGenerator::generate_full_name(&mut rng),
                    age: rng.int_between(18, 65),
                    gender: *rng.pick(Gender::ALL),
                    height_cm: rng.uniform_2dp(150.0, 200.0),
                    weight_kg: rng.uniform_2dp(50.0, 120.0),
                    goal: rng.pick(GOALS).to_string(),
                };
                users.push(store.insert_user(&user)?);
            }
            Ok(users)
        })
    }

    fn generate_workouts(&self, users: &[User]) -> TrackerResult<usize> {
        let mut rng = self.rng_bank.for_stream(SeedStream::Workouts);
        self.store.in_transaction(|store| {
            let mut written = 0;
            for user in users {
                for _ in 0..self.config.workouts_per_user {
                    let workout = NewWorkout {
                        user_id: user.user_id,
                        date: self.random_date(&mut rng),
                        workout_type: rng.pick(WORKOUT_TYPES).to_string(),
                        duration_min: rng.int_between(15, 120),
                        intensity: *rng.pick(Intensity::ALL),
                    };
                    store.insert_workout(&workout)?;
                    written += 1;
                }
            }
            Ok(written)
        })
    }

    fn generate_nutrition(&self, users: &[User]) -> TrackerResult<usize> {
        let mut rng = self.rng_bank.for_stream(SeedStream::Nutrition);
        self.store.in_transaction(|store| {
            let mut written = 0;
            for user in users {
                for _ in 0..self.config.nutrition_per_user {
                    let meal = NewNutritionLog {
                        user_id: user.user_id,
                        date: self.random_date(&mut rng),
                        meal_type: *rng.pick(MealType::ALL),
                        calories: rng.int_between(100, 800),
                        protein_g: rng.uniform_2dp(0.0, 50.0),
                        carbs_g: rng.uniform_2dp(0.0, 100.0),
                        fats_g: rng.uniform_2dp(0.0, 50.0),
                    };
                    store.insert_nutrition(&meal)?;
                    written += 1;
                }
            }
            Ok(written)
        })
    }

    fn generate_sleep(&self, users: &[User]) -> TrackerResult<usize> {
        let mut rng = self.rng_bank.for_stream(SeedStream::Sleep);
        self.store.in_transaction(|store| {
            let mut written = 0;
            for user in users {
                for _ in 0..self.config.sleep_per_user {
                    let night = NewSleepRecord {
                        user_id: user.user_id,
                        date: self.random_date(&mut rng),
                        duration_hours: rng.uniform_2dp(4.0, 12.0),
                        quality: *rng.pick(SleepQuality::ALL),
                    };
                    store.insert_sleep(&night)?;
                    written += 1;
                }
            }
            Ok(written)
        })
    }

    fn generate_health_metrics(&self, users: &[User]) -> TrackerResult<usize> {
        let mut rng = self.rng_bank.for_stream(SeedStream::HealthMetrics);
        self.store.in_transaction(|store| {
            let mut written = 0;
            for user in users {
                for _ in 0..self.config.metrics_per_user {
                    let reading = NewHealthMetric {
                        user_id: user.user_id,
                        date: self.random_date(&mut rng),
                        weight_kg: rng.uniform_2dp(50.0, 120.0),
                        heart_rate: Some(rng.int_between(60, 100)),
                        blood_pressure: Some(BloodPressure::new(
                            rng.int_between(100, 140) as u16,
                            rng.int_between(60, 90) as u16,
                        )),
                    };
                    store.insert_health_metric(&reading)?;
                    written += 1;
                }
            }
            Ok(written)
        })
    }
}
