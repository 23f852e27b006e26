use super::{map_insert_err, window_bounds, TrackerStore};
use crate::{
    error::TrackerResult,
    query::{CorrelationPoint, DailyCalories},
    records::{NewNutritionLog, NutritionLog},
    types::{RecordId, UserId},
    window::Window,
};
use rusqlite::params;

impl TrackerStore {
    // ── Nutrition ─────────────────────────────────────────────────────

    pub fn insert_nutrition(&self, n: &NewNutritionLog) -> TrackerResult<RecordId> {
        n.validate()?;
        self.conn
            .execute(
                "INSERT INTO nutrition (user_id, date, type, calories, protein, carbs, fats)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    n.user_id,
                    n.date,
                    n.meal_type,
                    n.calories,
                    n.protein_g,
                    n.carbs_g,
                    n.fats_g
                ],
            )
            .map_err(|e| map_insert_err(e, n.user_id))?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn nutrition_for_user(
        &self,
        user_id: UserId,
        window: Option<&Window>,
    ) -> TrackerResult<Vec<NutritionLog>> {
        let (start, end) = window_bounds(window);
        let mut stmt = self.conn.prepare(
            "SELECT meal_id, user_id, date, type, calories, protein, carbs, fats
             FROM nutrition
             WHERE user_id = ?1
               AND (?2 IS NULL OR date >= ?2)
               AND (?3 IS NULL OR date <= ?3)
             ORDER BY date ASC, meal_id ASC",
        )?;
        let rows = stmt.query_map(params![user_id, start, end], |row| {
            Ok(NutritionLog {
                meal_id: row.get(0)?,
                user_id: row.get(1)?,
                date: row.get(2)?,
                meal_type: row.get(3)?,
                calories: row.get(4)?,
                protein_g: row.get(5)?,
                carbs_g: row.get(6)?,
                fats_g: row.get(7)?,
            })
        })?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Calories summed per logged date, oldest first.
    pub fn daily_calorie_totals(
        &self,
        user_id: UserId,
        window: Option<&Window>,
    ) -> TrackerResult<Vec<DailyCalories>> {
        let (start, end) = window_bounds(window);
        let mut stmt = self.conn.prepare(
            "SELECT date, SUM(calories)
             FROM nutrition
             WHERE user_id = ?1
               AND (?2 IS NULL OR date >= ?2)
               AND (?3 IS NULL OR date <= ?3)
             GROUP BY date
             ORDER BY date ASC",
        )?;
        let rows = stmt.query_map(params![user_id, start, end], |row| {
            Ok(DailyCalories {
                date: row.get(0)?,
                total_calories: row.get(1)?,
            })
        })?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Per-date average protein joined to per-date average workout
    /// duration. Dates missing from either side are dropped.
    pub fn protein_vs_workout_duration(
        &self,
        user_id: UserId,
        window: Option<&Window>,
    ) -> TrackerResult<Vec<CorrelationPoint>> {
        let (start, end) = window_bounds(window);
        let mut stmt = self.conn.prepare(
            "SELECT p.date, p.avg_protein, w.avg_duration
             FROM (
                 SELECT date, AVG(protein) AS avg_protein
                 FROM nutrition
                 WHERE user_id = ?1
                   AND (?2 IS NULL OR date >= ?2)
                   AND (?3 IS NULL OR date <= ?3)
                 GROUP BY date
             ) AS p
             INNER JOIN (
                 SELECT date, AVG(duration) AS avg_duration
                 FROM workouts
                 WHERE user_id = ?1
                   AND (?2 IS NULL OR date >= ?2)
                   AND (?3 IS NULL OR date <= ?3)
                 GROUP BY date
             ) AS w ON w.date = p.date
             ORDER BY p.date ASC",
        )?;
        let rows = stmt.query_map(params![user_id, start, end], |row| {
            Ok(CorrelationPoint {
                date: row.get(0)?,
                avg_protein_g: row.get(1)?,
                avg_duration_min: row.get(2)?,
            })
        })?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }
}
