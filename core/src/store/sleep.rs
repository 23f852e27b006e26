use super::{map_insert_err, window_bounds, TrackerStore};
use crate::{
    error::TrackerResult,
    records::{NewSleepRecord, SleepRecord},
    types::{RecordId, SleepQuality, UserId},
    window::Window,
};
use rusqlite::params;

impl TrackerStore {
    // ── Sleep ─────────────────────────────────────────────────────────

    pub fn insert_sleep(&self, s: &NewSleepRecord) -> TrackerResult<RecordId> {
        s.validate()?;
        self.conn
            .execute(
                "INSERT INTO sleep (user_id, date, duration, quality)
                 VALUES (?1, ?2, ?3, ?4)",
                params![s.user_id, s.date, s.duration_hours, s.quality],
            )
            .map_err(|e| map_insert_err(e, s.user_id))?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn sleep_for_user(
        &self,
        user_id: UserId,
        window: Option<&Window>,
    ) -> TrackerResult<Vec<SleepRecord>> {
        let (start, end) = window_bounds(window);
        let mut stmt = self.conn.prepare(
            "SELECT sleep_id, user_id, date, duration, quality
             FROM sleep
             WHERE user_id = ?1
               AND (?2 IS NULL OR date >= ?2)
               AND (?3 IS NULL OR date <= ?3)
             ORDER BY date ASC, sleep_id ASC",
        )?;
        let rows = stmt.query_map(params![user_id, start, end], |row| {
            Ok(SleepRecord {
                sleep_id: row.get(0)?,
                user_id: row.get(1)?,
                date: row.get(2)?,
                duration_hours: row.get(3)?,
                quality: row.get(4)?,
            })
        })?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Number of sleep records per quality label. Labels with no records
    /// are absent.
    pub fn sleep_quality_counts(
        &self,
        user_id: UserId,
        window: Option<&Window>,
    ) -> TrackerResult<Vec<(SleepQuality, u64)>> {
        let (start, end) = window_bounds(window);
        let mut stmt = self.conn.prepare(
            "SELECT quality, COUNT(*)
             FROM sleep
             WHERE user_id = ?1
               AND (?2 IS NULL OR date >= ?2)
               AND (?3 IS NULL OR date <= ?3)
             GROUP BY quality",
        )?;
        let rows = stmt.query_map(params![user_id, start, end], |row| {
            Ok((row.get::<_, SleepQuality>(0)?, row.get::<_, i64>(1)? as u64))
        })?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }
}
