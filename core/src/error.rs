use thiserror::Error;

use crate::types::UserId;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    #[error("Invalid {kind} value '{value}'")]
    InvalidValue { kind: &'static str, value: String },

    #[error("User {0} not found")]
    UnknownUser(UserId),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TrackerError {
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation { field, reason: reason.into() }
    }

    pub fn invalid_value(kind: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidValue { kind, value: value.into() }
    }
}

pub type TrackerResult<T> = Result<T, TrackerError>;
