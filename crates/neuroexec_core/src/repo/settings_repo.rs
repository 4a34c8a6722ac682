//! Settings repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist the theme preference across restarts.
//! - Map stored text values to the closed `ThemeMode` enum, rejecting
//!   invalid persisted state instead of masking it.
//!
//! # Invariants
//! - A missing row decodes to the default theme, never an error.
//! - Writes upsert by key; the table holds at most one row per setting.

use crate::db::DbError;
use rusqlite::{params, Connection, OptionalExtension};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

const THEME_KEY: &str = "theme";

pub type SettingsResult<T> = Result<T, SettingsError>;

/// Error for settings persistence and decoding.
#[derive(Debug)]
pub enum SettingsError {
    Db(DbError),
    /// Persisted value does not decode to a known setting value.
    InvalidValue { key: &'static str, value: String },
}

impl Display for SettingsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidValue { key, value } => {
                write!(f, "invalid persisted value `{value}` for setting `{key}`")
            }
        }
    }
}

impl Error for SettingsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidValue { .. } => None,
        }
    }
}

impl From<DbError> for SettingsError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for SettingsError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Color scheme preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    /// The other mode; used by the theme toggle.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

fn theme_to_db(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Light => "light",
        ThemeMode::Dark => "dark",
    }
}

fn parse_theme(value: &str) -> Option<ThemeMode> {
    match value {
        "light" => Some(ThemeMode::Light),
        "dark" => Some(ThemeMode::Dark),
        _ => None,
    }
}

/// Read/write access to durable app settings.
pub trait SettingsRepository {
    /// Returns the stored theme, or the default when never written.
    fn theme(&self) -> SettingsResult<ThemeMode>;

    /// Persists the theme. Called on every change.
    fn set_theme(&self, mode: ThemeMode) -> SettingsResult<()>;
}

/// SQLite-backed settings repository.
pub struct SqliteSettingsRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSettingsRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl SettingsRepository for SqliteSettingsRepository<'_> {
    fn theme(&self) -> SettingsResult<ThemeMode> {
        let stored: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM settings WHERE key = ?1;",
                [THEME_KEY],
                |row| row.get(0),
            )
            .optional()?;

        match stored {
            None => Ok(ThemeMode::default()),
            Some(value) => parse_theme(&value).ok_or(SettingsError::InvalidValue {
                key: THEME_KEY,
                value,
            }),
        }
    }

    fn set_theme(&self, mode: ThemeMode) -> SettingsResult<()> {
        self.conn.execute(
            "INSERT INTO settings (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![THEME_KEY, theme_to_db(mode)],
        )?;
        Ok(())
    }
}
