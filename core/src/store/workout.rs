use super::{map_insert_err, window_bounds, TrackerStore};
use crate::{
    error::TrackerResult,
    records::{NewWorkout, Workout},
    types::{RecordId, UserId},
    window::Window,
};
use rusqlite::params;

impl TrackerStore {
    // ── Workout ───────────────────────────────────────────────────────

    pub fn insert_workout(&self, w: &NewWorkout) -> TrackerResult<RecordId> {
        w.validate()?;
        self.conn
            .execute(
                "INSERT INTO workouts (user_id, date, type, duration, intensity)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![w.user_id, w.date, &w.workout_type, w.duration_min, w.intensity],
            )
            .map_err(|e| map_insert_err(e, w.user_id))?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Workouts for a user, oldest first. `None` returns all history.
    pub fn workouts_for_user(
        &self,
        user_id: UserId,
        window: Option<&Window>,
    ) -> TrackerResult<Vec<Workout>> {
        let (start, end) = window_bounds(window);
        let mut stmt = self.conn.prepare(
            "SELECT workout_id, user_id, date, type, duration, intensity
             FROM workouts
             WHERE user_id = ?1
               AND (?2 IS NULL OR date >= ?2)
               AND (?3 IS NULL OR date <= ?3)
             ORDER BY date ASC, workout_id ASC",
        )?;
        let rows = stmt.query_map(params![user_id, start, end], |row| {
            Ok(Workout {
                workout_id: row.get(0)?,
                user_id: row.get(1)?,
                date: row.get(2)?,
                workout_type: row.get(3)?,
                duration_min: row.get(4)?,
                intensity: row.get(5)?,
            })
        })?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }
}
