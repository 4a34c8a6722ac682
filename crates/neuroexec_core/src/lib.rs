//! Core state and rules for the NeuroExec productivity app.
//! This crate is the single source of truth for business invariants.

pub mod app;
pub mod assist;
pub mod db;
pub mod logging;
pub mod matrix;
pub mod model;
pub mod repo;
pub mod score;
pub mod service;
pub mod store;
pub mod timer;

pub use app::{AppState, Enrichment, RescuePanel};
pub use assist::http::{AssistConfig, HttpAssistGateway};
pub use assist::{AssistError, AssistGateway, AssistResult, CategorizeItem, MAX_DECOMPOSE_STEPS};
pub use logging::{default_log_level, init_logging, logging_status};
pub use matrix::{MatrixView, QuadrantDrop};
pub use model::assist::{CategorySuggestion, IdentityBoost, PanicSolution};
pub use model::day::{DayStamp, DayStampError};
pub use model::habit::{Habit, HabitId};
pub use model::recurring::{Frequency, RecurringId, RecurringTask};
pub use model::task::{Energy, Priority, Task, TaskId};
pub use repo::settings_repo::{
    SettingsError, SettingsRepository, SettingsResult, SqliteSettingsRepository, ThemeMode,
};
pub use score::{
    habit_repeat_points, level_for, progress_to_next, Level, ScoreBoard,
    HABIT_REPEAT_BASE_POINTS, HABIT_STREAK_BONUS_POINTS, RECURRING_CHECK_IN_POINTS,
    TASK_COMPLETION_POINTS,
};
pub use service::theme_service::ThemeService;
pub use store::task_store::{TaskStore, ToggleOutcome};
pub use store::tracker::{CheckInOutcome, Tracker};
pub use timer::{FocusTimer, TimerState, FOCUS_CYCLE_SECS};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
