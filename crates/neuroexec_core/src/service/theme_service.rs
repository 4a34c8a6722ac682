//! Theme use-case service.
//!
//! # Responsibility
//! - Provide the shell's read-once-at-startup / write-on-every-change theme
//!   API over a settings repository.
//!
//! # Invariants
//! - `toggle` persists before reporting the new mode.

use crate::repo::settings_repo::{SettingsRepository, SettingsResult, ThemeMode};
use log::info;

/// Theme service facade over a settings repository.
pub struct ThemeService<R: SettingsRepository> {
    repo: R,
}

impl<R: SettingsRepository> ThemeService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// The persisted theme, or the default when never written.
    pub fn current(&self) -> SettingsResult<ThemeMode> {
        self.repo.theme()
    }

    /// Persists an explicit theme choice.
    pub fn set(&self, mode: ThemeMode) -> SettingsResult<()> {
        self.repo.set_theme(mode)?;
        info!("event=theme_set module=service status=ok mode={mode:?}");
        Ok(())
    }

    /// Flips between light and dark, persists, and returns the new mode.
    pub fn toggle(&self) -> SettingsResult<ThemeMode> {
        let next = self.repo.theme()?.toggled();
        self.set(next)?;
        Ok(next)
    }
}
