//! Points and leveling engine.
//!
//! # Responsibility
//! - Track the session-wide execution score.
//! - Map score totals to level tiers through a fixed threshold table.
//!
//! # Invariants
//! - The score never goes negative; deduction clamps at zero here, not in
//!   callers.
//! - Tier thresholds ascend strictly and cover `[0, ∞)` without gaps.

use serde::Serialize;

/// Points for completing a task; revoked when the task is reopened.
pub const TASK_COMPLETION_POINTS: u32 = 15;
/// Points for the first recurring check-in on a given day.
pub const RECURRING_CHECK_IN_POINTS: u32 = 20;
/// Base points for one habit repetition.
pub const HABIT_REPEAT_BASE_POINTS: u32 = 25;
/// Extra points per streak step already established before a repetition.
pub const HABIT_STREAK_BONUS_POINTS: u32 = 2;

/// Reward for one habit repetition, given the streak before the increment.
pub fn habit_repeat_points(streak_before: u32) -> u32 {
    HABIT_REPEAT_BASE_POINTS + HABIT_STREAK_BONUS_POINTS * streak_before
}

/// Level tier derived from a score total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Level {
    pub title: &'static str,
    /// Score required for the next tier; `None` at the top tier.
    pub next_threshold: Option<u32>,
    /// Display color class used by the shell.
    pub color: &'static str,
}

/// Maps a score to its tier. Total over all `points >= 0`; the lowest tier
/// whose upper threshold exceeds `points` wins.
pub fn level_for(points: u32) -> Level {
    if points < 100 {
        Level {
            title: "Neural Novice",
            next_threshold: Some(100),
            color: "slate",
        }
    } else if points < 500 {
        Level {
            title: "Habit Architect",
            next_threshold: Some(500),
            color: "sky",
        }
    } else if points < 1500 {
        Level {
            title: "Execution Master",
            next_threshold: Some(1500),
            color: "indigo",
        }
    } else {
        Level {
            title: "Neuroplasticity Ninja",
            next_threshold: None,
            color: "orange",
        }
    }
}

/// Fraction of the next tier threshold already earned; `1.0` at the top
/// tier. Intended for progress-bar display.
pub fn progress_to_next(points: u32) -> f32 {
    match level_for(points).next_threshold {
        Some(next) => (points as f32 / next as f32).min(1.0),
        None => 1.0,
    }
}

/// Session-wide execution score.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScoreBoard {
    points: u32,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    /// Tier for the current total.
    pub fn level(&self) -> Level {
        level_for(self.points)
    }

    /// Adds `amount` to the total. No upper bound.
    pub fn award(&mut self, amount: u32) {
        self.points = self.points.saturating_add(amount);
    }

    /// Subtracts `amount`, clamped at zero regardless of the prior total.
    pub fn revoke(&mut self, amount: u32) {
        self.points = self.points.saturating_sub(amount);
    }
}
