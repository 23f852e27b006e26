//! Sample data generation tests.

use chrono::{Days, NaiveDate};
use fitness_core::{
    config::SeedConfig,
    records::bmi,
    seed::{SeedGenerator, GOALS, WORKOUT_TYPES},
    store::TrackerStore,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 15).unwrap()
}

fn seeded(config: SeedConfig) -> TrackerStore {
    let _ = env_logger::builder().is_test(true).try_init();
    let store = TrackerStore::in_memory().expect("open in-memory store");
    store.migrate().expect("migrate");
    SeedGenerator::new(&store, config, today())
        .run()
        .expect("seed");
    store
}

#[test]
fn seeding_writes_configured_counts() {
    let config = SeedConfig::default_test();
    let store = seeded(config.clone());

    let counts = store.table_counts().unwrap();
    assert_eq!(counts.users, config.users as i64);
    assert_eq!(counts.workouts, (config.users * config.workouts_per_user) as i64);
    assert_eq!(counts.nutrition, (config.users * config.nutrition_per_user) as i64);
    assert_eq!(counts.sleep, (config.users * config.sleep_per_user) as i64);
    assert_eq!(counts.health_metrics, (config.users * config.metrics_per_user) as i64);
}

#[test]
fn summary_matches_table_counts() {
    let store = TrackerStore::in_memory().unwrap();
    store.migrate().unwrap();
    let summary = SeedGenerator::new(&store, SeedConfig::default_test(), today())
        .run()
        .unwrap();
    let counts = store.table_counts().unwrap();
    assert_eq!(summary.users as i64, counts.users);
    assert_eq!(summary.workouts as i64, counts.workouts);
    assert_eq!(summary.health_metrics as i64, counts.health_metrics);
}

#[test]
fn same_seed_produces_same_rows() {
    let a = seeded(SeedConfig::default_test());
    let b = seeded(SeedConfig::default_test());

    assert_eq!(a.users().unwrap(), b.users().unwrap());
    for user in a.users().unwrap() {
        assert_eq!(
            a.workouts_for_user(user.user_id, None).unwrap(),
            b.workouts_for_user(user.user_id, None).unwrap()
        );
        assert_eq!(
            a.health_metrics_for_user(user.user_id, None).unwrap(),
            b.health_metrics_for_user(user.user_id, None).unwrap()
        );
    }

    let c = seeded(SeedConfig { seed: 8, ..SeedConfig::default_test() });
    assert_ne!(a.users().unwrap(), c.users().unwrap());
}

#[test]
fn generated_values_stay_in_range() {
    let store = seeded(SeedConfig::default_test());
    let earliest = today().checked_sub_days(Days::new(365)).unwrap();
    let in_history = |d: NaiveDate| earliest <= d && d <= today();

    for user in store.users().unwrap() {
        assert!((18..=65).contains(&user.age));
        assert!((150.0..=200.0).contains(&user.height_cm));
        assert!((50.0..=120.0).contains(&user.weight_kg));
        assert!(GOALS.contains(&user.goal.as_str()));

        for w in store.workouts_for_user(user.user_id, None).unwrap() {
            assert!(in_history(w.date));
            assert!((15..=120).contains(&w.duration_min));
            assert!(WORKOUT_TYPES.contains(&w.workout_type.as_str()));
        }
        for n in store.nutrition_for_user(user.user_id, None).unwrap() {
            assert!(in_history(n.date));
            assert!((100..=800).contains(&n.calories));
            assert!((0.0..=50.0).contains(&n.protein_g));
            assert!((0.0..=100.0).contains(&n.carbs_g));
            assert!((0.0..=50.0).contains(&n.fats_g));
        }
        for s in store.sleep_for_user(user.user_id, None).unwrap() {
            assert!(in_history(s.date));
            assert!((4.0..=12.0).contains(&s.duration_hours));
        }
        for m in store.health_metrics_for_user(user.user_id, None).unwrap() {
            assert!(in_history(m.date));
            assert_eq!(m.bmi, bmi(m.weight_kg, user.height_cm));
            let hr = m.heart_rate.expect("seeded metrics record heart rate");
            assert!((60..=100).contains(&hr));
            let bp = m.blood_pressure.expect("seeded metrics record blood pressure");
            assert!((100..=140).contains(&bp.systolic));
            assert!((60..=90).contains(&bp.diastolic));
        }
    }
}

#[test]
fn zero_users_seeds_nothing() {
    let store = seeded(SeedConfig { users: 0, ..SeedConfig::default_test() });
    assert_eq!(store.table_counts().unwrap().users, 0);
    assert_eq!(store.table_counts().unwrap().workouts, 0);
}
