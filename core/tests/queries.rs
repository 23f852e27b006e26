//! Aggregate query tests over hand-built fixtures.

use chrono::{Days, NaiveDate};
use fitness_core::{
    query::{self, MetricKind},
    records::{NewHealthMetric, NewNutritionLog, NewSleepRecord, NewUser, NewWorkout},
    store::TrackerStore,
    types::{Gender, Intensity, MealType, SleepQuality, UserId},
    window::{self, Window},
};

fn setup() -> (TrackerStore, UserId) {
    let _ = env_logger::builder().is_test(true).try_init();
    let store = TrackerStore::in_memory().expect("open in-memory store");
    store.migrate().expect("migrate");
    let user = store
        .insert_user(&NewUser {
            name: "Query Tester".into(),
            age: 41,
            gender: Gender::Other,
            height_cm: 180.0,
            weight_kg: 81.0,
            goal: "Improve Fitness".into(),
        })
        .unwrap();
    (store, user.user_id)
}

fn date(m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, m, d).unwrap()
}

fn meal(store: &TrackerStore, user_id: UserId, date: NaiveDate, calories: u32, protein_g: f64) {
    store
        .insert_nutrition(&NewNutritionLog {
            user_id,
            date,
            meal_type: MealType::Dinner,
            calories,
            protein_g,
            carbs_g: 50.0,
            fats_g: 10.0,
        })
        .unwrap();
}

fn workout(store: &TrackerStore, user_id: UserId, date: NaiveDate, duration_min: u32) {
    store
        .insert_workout(&NewWorkout {
            user_id,
            date,
            workout_type: "Strength".into(),
            duration_min,
            intensity: Intensity::Medium,
        })
        .unwrap();
}

fn sleep(store: &TrackerStore, user_id: UserId, date: NaiveDate, quality: SleepQuality) {
    store
        .insert_sleep(&NewSleepRecord {
            user_id,
            date,
            duration_hours: 7.5,
            quality,
        })
        .unwrap();
}

#[test]
fn single_meal_today_sets_one_day_average() {
    let (store, user_id) = setup();
    let today = window::today();
    meal(&store, user_id, today, 700, 30.0);

    let avg = query::average_daily_calories(&store, user_id, &Window::ending_today(1))
        .unwrap()
        .expect("one row in window");
    assert!(avg >= 700.0, "average {avg} should be at least 700");
    assert_eq!(avg, 700.0);
}

#[test]
fn average_calories_without_data_is_none() {
    let (store, user_id) = setup();
    // A row outside the window must not count.
    meal(&store, user_id, date(1, 1), 900, 20.0);

    let w = Window::trailing(date(6, 30), 7);
    assert_eq!(query::average_daily_calories(&store, user_id, &w).unwrap(), None);
    assert!(query::daily_calorie_totals(&store, user_id, &w).unwrap().is_empty());
}

#[test]
fn average_calories_is_mean_of_daily_sums() {
    let (store, user_id) = setup();
    meal(&store, user_id, date(6, 28), 500, 20.0);
    meal(&store, user_id, date(6, 28), 1000, 20.0);
    meal(&store, user_id, date(6, 29), 2500, 20.0);

    let w = Window::trailing(date(6, 30), 7);
    let totals = query::daily_calorie_totals(&store, user_id, &w).unwrap();
    assert_eq!(totals.len(), 2);
    assert_eq!(totals[0].total_calories, 1500);
    assert_eq!(totals[1].total_calories, 2500);
    assert_eq!(query::average_daily_calories(&store, user_id, &w).unwrap(), Some(2000.0));
}

#[test]
fn sleep_distribution_counts_by_quality() {
    let (store, user_id) = setup();
    let today = window::today();
    sleep(&store, user_id, today, SleepQuality::Good);

    let dist = query::sleep_quality_distribution(&store, user_id, &Window::ending_today(1)).unwrap();
    assert!(dist.get(&SleepQuality::Good).copied().unwrap_or(0) >= 1);

    let earlier = today.checked_sub_days(Days::new(3)).unwrap();
    sleep(&store, user_id, earlier, SleepQuality::Good);
    sleep(&store, user_id, earlier, SleepQuality::Poor);
    let dist = query::sleep_quality_distribution(&store, user_id, &Window::ending_today(30)).unwrap();
    assert_eq!(dist.get(&SleepQuality::Good), Some(&2));
    assert_eq!(dist.get(&SleepQuality::Poor), Some(&1));
    assert_eq!(dist.get(&SleepQuality::Excellent), None);
}

#[test]
fn empty_sleep_window_is_an_empty_distribution() {
    let (store, user_id) = setup();
    let dist = query::sleep_quality_distribution(&store, user_id, &Window::ending_today(30)).unwrap();
    assert!(dist.is_empty());
}

#[test]
fn workout_history_is_windowed_and_ordered() {
    let (store, user_id) = setup();
    workout(&store, user_id, date(6, 20), 30);
    workout(&store, user_id, date(6, 5), 45);
    workout(&store, user_id, date(4, 1), 60);

    let w = Window::trailing(date(6, 30), 30);
    let history = query::workout_history(&store, user_id, &w).unwrap();
    let dates: Vec<_> = history.iter().map(|w| w.date).collect();
    assert_eq!(dates, vec![date(6, 5), date(6, 20)]);

    let quiet = Window::trailing(date(12, 31), 30);
    assert!(query::workout_history(&store, user_id, &quiet).unwrap().is_empty());
}

#[test]
fn correlation_keeps_only_dates_on_both_sides() {
    let (store, user_id) = setup();
    // Both logged.
    meal(&store, user_id, date(5, 1), 600, 20.0);
    meal(&store, user_id, date(5, 1), 600, 40.0);
    workout(&store, user_id, date(5, 1), 30);
    workout(&store, user_id, date(5, 1), 60);
    // Workout only.
    workout(&store, user_id, date(5, 2), 90);
    // Meal only.
    meal(&store, user_id, date(5, 3), 400, 10.0);
    // Both logged, later.
    meal(&store, user_id, date(5, 4), 500, 25.0);
    workout(&store, user_id, date(5, 4), 20);

    let points = query::nutrition_workout_correlation(&store, user_id, None).unwrap();
    let dates: Vec<_> = points.iter().map(|p| p.date).collect();
    assert_eq!(dates, vec![date(5, 1), date(5, 4)]);
    assert_eq!(points[0].avg_protein_g, 30.0);
    assert_eq!(points[0].avg_duration_min, 45.0);
    assert_eq!(points[1].avg_protein_g, 25.0);
    assert_eq!(points[1].avg_duration_min, 20.0);

    let w = Window::trailing(date(5, 3), 2);
    let windowed = query::nutrition_workout_correlation(&store, user_id, Some(&w)).unwrap();
    assert_eq!(windowed.len(), 1);
    assert_eq!(windowed[0].date, date(5, 1));
}

#[test]
fn metric_trend_is_ascending_with_stored_values() {
    let (store, user_id) = setup();
    let readings = [
        (date(3, 10), 79.5, Some(70)),
        (date(1, 5), 82.25, Some(74)),
        (date(2, 7), 80.0, None),
    ];
    for (date, weight_kg, heart_rate) in readings {
        store
            .insert_health_metric(&NewHealthMetric {
                user_id,
                date,
                weight_kg,
                heart_rate,
                blood_pressure: None,
            })
            .unwrap();
    }

    let weight = query::health_metric_trend(&store, user_id, MetricKind::Weight, None).unwrap();
    let pairs: Vec<_> = weight.iter().map(|p| (p.date, p.value)).collect();
    assert_eq!(
        pairs,
        vec![(date(1, 5), 82.25), (date(2, 7), 80.0), (date(3, 10), 79.5)]
    );

    let bmi = query::health_metric_trend(&store, user_id, MetricKind::Bmi, None).unwrap();
    // 80 / 1.8^2 = 24.69
    assert_eq!(bmi[1].value, 24.69);

    let heart = query::health_metric_trend(&store, user_id, MetricKind::HeartRate, None).unwrap();
    let pairs: Vec<_> = heart.iter().map(|p| (p.date, p.value)).collect();
    assert_eq!(pairs, vec![(date(1, 5), 74.0), (date(3, 10), 70.0)]);
}
