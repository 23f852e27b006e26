use super::{map_insert_err, window_bounds, TrackerStore};
use crate::{
    error::{TrackerError, TrackerResult},
    records::{bmi, HealthMetric, NewHealthMetric},
    types::UserId,
    window::Window,
};
use rusqlite::params;

impl TrackerStore {
    // ── Health metrics ────────────────────────────────────────────────

    /// Insert a reading. BMI is derived here from the owner's height so
    /// the stored value always matches weight / height_m².
    pub fn insert_health_metric(&self, m: &NewHealthMetric) -> TrackerResult<HealthMetric> {
        m.validate()?;
        let height_cm = self
            .user_height(m.user_id)?
            .ok_or(TrackerError::UnknownUser(m.user_id))?;
        let bmi = bmi(m.weight_kg, height_cm);
        self.conn
            .execute(
                "INSERT INTO health_metrics
                    (user_id, date, weight, bmi, heart_rate, blood_pressure)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![m.user_id, m.date, m.weight_kg, bmi, m.heart_rate, m.blood_pressure],
            )
            .map_err(|e| map_insert_err(e, m.user_id))?;
        Ok(HealthMetric {
            metric_id: self.conn.last_insert_rowid(),
            user_id: m.user_id,
            date: m.date,
            weight_kg: m.weight_kg,
            bmi,
            heart_rate: m.heart_rate,
            blood_pressure: m.blood_pressure,
        })
    }

    /// Health readings for a user, oldest first.
    pub fn health_metrics_for_user(
        &self,
        user_id: UserId,
        window: Option<&Window>,
    ) -> TrackerResult<Vec<HealthMetric>> {
        let (start, end) = window_bounds(window);
        let mut stmt = self.conn.prepare(
            "SELECT metric_id, user_id, date, weight, bmi, heart_rate, blood_pressure
             FROM health_metrics
             WHERE user_id = ?1
               AND (?2 IS NULL OR date >= ?2)
               AND (?3 IS NULL OR date <= ?3)
             ORDER BY date ASC, metric_id ASC",
        )?;
        let rows = stmt.query_map(params![user_id, start, end], |row| {
            Ok(HealthMetric {
                metric_id: row.get(0)?,
                user_id: row.get(1)?,
                date: row.get(2)?,
                weight_kg: row.get(3)?,
                bmi: row.get(4)?,
                heart_rate: row.get(5)?,
                blood_pressure: row.get(6)?,
            })
        })?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }
}
