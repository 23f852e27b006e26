//! SQLite persistence layer.
//!
//! RULE: Only the store talks to the database.
//! Queries and recommendations call store methods; they never execute SQL
//! directly. A `TrackerStore` owns exactly one connection, which is closed
//! when the store is dropped.

use crate::{
    error::{TrackerError, TrackerResult},
    types::{BloodPressure, Gender, Intensity, MealType, SleepQuality, UserId},
    window::Window,
};
use chrono::NaiveDate;
use log::{debug, info};
use rusqlite::{
    types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef},
    Connection,
};
use serde::Serialize;

mod health_metric;
mod nutrition;
mod sleep;
mod user;
mod workout;

pub const DEFAULT_DB_PATH: &str = "health_fitness_app.db";

pub struct TrackerStore {
    conn: Connection,
    path: Option<String>, // None for :memory:, Some(path) for file
}

/// Row counts for every table, used by the CLI summary and tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TableCounts {
    pub users: i64,
    pub workouts: i64,
    pub nutrition: i64,
    pub sleep: i64,
    pub health_metrics: i64,
}

impl TrackerStore {
    /// Open (or create) the tracker database at `path`.
    pub fn open(path: &str) -> TrackerResult<Self> {
        let conn = Connection::open(path)?;
        // WAL only matters for real files; in-memory databases ignore it.
        let _ = conn.execute_batch("PRAGMA journal_mode=WAL;");
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        debug!("opened store at {path}");
        Ok(Self {
            conn,
            path: Some(path.to_string()),
        })
    }

    /// Open an in-memory database (used in tests).
    pub fn in_memory() -> TrackerResult<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        Ok(Self { conn, path: None })
    }

    /// Path of the backing file, `None` for in-memory stores.
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Apply all schema migrations in order. Safe to run repeatedly.
    pub fn migrate(&self) -> TrackerResult<()> {
        self.conn
            .execute_batch(include_str!("../../../migrations/001_schema.sql"))?;
        info!(
            "schema ready ({})",
            self.path.as_deref().unwrap_or(":memory:")
        );
        Ok(())
    }

    /// Run `f` inside a single transaction. Any error rolls the whole
    /// batch back.
    pub fn in_transaction<T>(
        &self,
        f: impl FnOnce(&Self) -> TrackerResult<T>,
    ) -> TrackerResult<T> {
        let tx = self.conn.unchecked_transaction()?;
        let out = f(self)?;
        tx.commit()?;
        Ok(out)
    }

    pub fn table_counts(&self) -> TrackerResult<TableCounts> {
        let count = |table: &str| -> TrackerResult<i64> {
            let n: i64 = self
                .conn
                .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| row.get(0))?;
            Ok(n)
        };
        Ok(TableCounts {
            users: count("users")?,
            workouts: count("workouts")?,
            nutrition: count("nutrition")?,
            sleep: count("sleep")?,
            health_metrics: count("health_metrics")?,
        })
    }
}

/// Inclusive date bounds for an optional window, as SQL parameters.
/// `None` on either side disables that bound.
fn window_bounds(window: Option<&Window>) -> (Option<NaiveDate>, Option<NaiveDate>) {
    match window {
        Some(w) => (Some(w.start()), Some(w.end())),
        None => (None, None),
    }
}

/// Turn a foreign-key failure on insert into `UnknownUser`.
fn map_insert_err(err: rusqlite::Error, user_id: UserId) -> TrackerError {
    match &err {
        rusqlite::Error::SqliteFailure(e, _)
            if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY =>
        {
            TrackerError::UnknownUser(user_id)
        }
        _ => err.into(),
    }
}

// ── Column mappings ───────────────────────────────────────────────
//
// Enumerated columns are stored as their labels and parsed back on read.

macro_rules! sql_text {
    ($($ty:ty),+) => {
        $(
            impl ToSql for $ty {
                fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
                    Ok(ToSqlOutput::from(self.to_string()))
                }
            }

            impl FromSql for $ty {
                fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
                    value
                        .as_str()?
                        .parse()
                        .map_err(|e: TrackerError| FromSqlError::Other(Box::new(e)))
                }
            }
        )+
    };
}

sql_text!(Gender, Intensity, MealType, SleepQuality, BloodPressure);
