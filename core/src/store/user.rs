use super::TrackerStore;
use crate::{
    error::TrackerResult,
    records::{NewUser, User},
    types::UserId,
};
use log::{debug, info};
use rusqlite::{params, OptionalExtension, Row};

const USER_COLUMNS: &str = "user_id, name, age, gender, height, weight, goal";

fn user_from_row(row: &Row<'_>) -> rusqlite::Result<User> {
    Ok(User {
        user_id: row.get(0)?,
        name: row.get(1)?,
        age: row.get(2)?,
        gender: row.get(3)?,
        height_cm: row.get(4)?,
        weight_kg: row.get(5)?,
        goal: row.get(6)?,
    })
}

impl TrackerStore {
    // ── User ──────────────────────────────────────────────────────────

    /// Validate and insert a user, returning the stored row.
    pub fn insert_user(&self, u: &NewUser) -> TrackerResult<User> {
        u.validate()?;
        self.conn.execute(
            "INSERT INTO users (name, age, gender, height, weight, goal)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![&u.name, u.age, u.gender, u.height_cm, u.weight_kg, &u.goal],
        )?;
        let user_id = self.conn.last_insert_rowid();
        debug!("inserted user {user_id} ({})", u.name);
        Ok(User {
            user_id,
            name: u.name.clone(),
            age: u.age,
            gender: u.gender,
            height_cm: u.height_cm,
            weight_kg: u.weight_kg,
            goal: u.goal.clone(),
        })
    }

    pub fn user(&self, user_id: UserId) -> TrackerResult<Option<User>> {
        let user = self
            .conn
            .query_row(
                &format!("SELECT {USER_COLUMNS} FROM users WHERE user_id = ?1"),
                params![user_id],
                user_from_row,
            )
            .optional()?;
        Ok(user)
    }

    /// First user (lowest id) with exactly this name.
    pub fn user_by_name(&self, name: &str) -> TrackerResult<Option<User>> {
        let user = self
            .conn
            .query_row(
                &format!(
                    "SELECT {USER_COLUMNS} FROM users WHERE name = ?1
                     ORDER BY user_id ASC LIMIT 1"
                ),
                params![name],
                user_from_row,
            )
            .optional()?;
        Ok(user)
    }

    pub fn users(&self) -> TrackerResult<Vec<User>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {USER_COLUMNS} FROM users ORDER BY user_id ASC"
        ))?;
        let rows = stmt.query_map([], user_from_row)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Delete a user and, through the foreign keys, every record they own.
    /// Returns false if no such user existed.
    pub fn delete_user(&self, user_id: UserId) -> TrackerResult<bool> {
        let removed = self
            .conn
            .execute("DELETE FROM users WHERE user_id = ?1", params![user_id])?;
        if removed > 0 {
            info!("deleted user {user_id} and their records");
        }
        Ok(removed > 0)
    }

    pub(crate) fn user_height(&self, user_id: UserId) -> TrackerResult<Option<f64>> {
        let height = self
            .conn
            .query_row(
                "SELECT height FROM users WHERE user_id = ?1",
                params![user_id],
                |row| row.get(0),
            )
            .optional()?;
        Ok(height)
    }
}
