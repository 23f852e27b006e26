//! health-cli: schema setup, sample data and reports for the tracker.
//!
//! Usage:
//!   health-cli create [--db health_fitness_app.db]
//!   health-cli seed   [--db PATH] [--config seed.json] [--seed 42] [--users 10]
//!                     [--workouts 50] [--nutrition 150] [--sleep 100] [--metrics 50]
//!   health-cli report [--db PATH] [--user 1] [--days 30] [--calorie-days 7]

use anyhow::{bail, Result};
use fitness_core::{
    config::SeedConfig,
    query::{self, MetricKind},
    recommendation, report,
    seed::SeedGenerator,
    store::{TrackerStore, DEFAULT_DB_PATH},
    types::UserId,
    window::{self, Window, CALORIE_AVERAGE_DAYS, SLEEP_QUALITY_DAYS, WORKOUT_HISTORY_DAYS},
};
use std::env;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let db = args
        .windows(2)
        .find(|w| w[0] == "--db")
        .map(|w| w[1].as_str())
        .unwrap_or(DEFAULT_DB_PATH);

    match args.get(1).map(String::as_str) {
        Some("create") => create(db),
        Some("seed") => seed(db, &args),
        Some("report") => run_report(db, &args),
        Some(other) => bail!("unknown command '{other}' (expected create, seed or report)"),
        None => bail!("usage: health-cli <create|seed|report> [options]"),
    }
}

fn open(db: &str) -> Result<TrackerStore> {
    let store = TrackerStore::open(db)?;
    store.migrate()?;
    Ok(store)
}

fn create(db: &str) -> Result<()> {
    let store = open(db)?;
    let counts = store.table_counts()?;
    println!("Schema ready at {db}");
    println!("  users:          {}", counts.users);
    println!("  workouts:       {}", counts.workouts);
    println!("  nutrition:      {}", counts.nutrition);
    println!("  sleep:          {}", counts.sleep);
    println!("  health metrics: {}", counts.health_metrics);
    Ok(())
}

fn seed(db: &str, args: &[String]) -> Result<()> {
    let mut config = match args.windows(2).find(|w| w[0] == "--config") {
        Some(w) => SeedConfig::load(&w[1])?,
        None => SeedConfig::default(),
    };
    config.seed = parse_arg(args, "--seed", config.seed);
    config.users = parse_arg(args, "--users", config.users);
    config.workouts_per_user = parse_arg(args, "--workouts", config.workouts_per_user);
    config.nutrition_per_user = parse_arg(args, "--nutrition", config.nutrition_per_user);
    config.sleep_per_user = parse_arg(args, "--sleep", config.sleep_per_user);
    config.metrics_per_user = parse_arg(args, "--metrics", config.metrics_per_user);

    let store = open(db)?;
    let summary = SeedGenerator::new(&store, config.clone(), window::today()).run()?;

    println!("=== SEED SUMMARY ===");
    println!("  db:             {db}");
    println!("  seed:           {}", config.seed);
    println!("  users:          {}", summary.users);
    println!("  workouts:       {}", summary.workouts);
    println!("  nutrition:      {}", summary.nutrition);
    println!("  sleep:          {}", summary.sleep);
    println!("  health metrics: {}", summary.health_metrics);
    Ok(())
}

fn run_report(db: &str, args: &[String]) -> Result<()> {
    let user_id: UserId = parse_arg(args, "--user", 1);
    let days = parse_arg(args, "--days", WORKOUT_HISTORY_DAYS);
    let sleep_days = parse_arg(args, "--days", SLEEP_QUALITY_DAYS);
    let calorie_days = parse_arg(args, "--calorie-days", CALORIE_AVERAGE_DAYS);

    let store = open(db)?;
    if store.user(user_id)?.is_none() {
        log::warn!("user {user_id} does not exist; every report will be empty");
    }
    let today = window::today();

    println!("--- Workout History for User {user_id} ---");
    let w = Window::trailing(today, days);
    let workouts = query::workout_history(&store, user_id, &w)?;
    print!("{}", report::workout_history(user_id, &w, &workouts));

    println!("\n--- Average Daily Calories for User {user_id} ---");
    let w = Window::trailing(today, calorie_days);
    let average = query::average_daily_calories(&store, user_id, &w)?;
    print!("{}", report::average_daily_calories(user_id, &w, average));

    println!("\n--- Sleep Quality Analysis for User {user_id} ---");
    let w = Window::trailing(today, sleep_days);
    let dist = query::sleep_quality_distribution(&store, user_id, &w)?;
    print!("{}", report::sleep_quality(user_id, &w, &dist));

    println!("\n--- Correlation between Nutrition and Workout for User {user_id} ---");
    let points = query::nutrition_workout_correlation(&store, user_id, None)?;
    print!("{}", report::correlation(user_id, &points));

    for metric in MetricKind::ALL {
        println!("\n--- Trend Analysis for Health Metrics ({metric}) for User {user_id} ---");
        let trend = query::health_metric_trend(&store, user_id, *metric, None)?;
        print!("{}", report::metric_trend(*metric, &trend));
    }

    println!("\n--- Fitness Recommendation for User {user_id} ---");
    println!("{}", recommendation::fitness_recommendation(&store, user_id, today)?);

    println!("\n--- Nutrition Recommendation for User {user_id} ---");
    println!("{}", recommendation::nutrition_recommendation(&store, user_id, today)?);
    Ok(())
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
