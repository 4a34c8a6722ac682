//! Atomic habit model.
//!
//! # Responsibility
//! - Define the habit record: behavior, triggering cue and minimal first
//!   step, plus the repetition streak.
//!
//! # Invariants
//! - `streak` starts at zero and only the explicit repeat operation
//!   increases it; no decay or reset rule exists in this core.
//! - `last_completed` is recorded on repeat but never read to gate
//!   repetition.

use crate::model::day::DayStamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for an atomic habit.
pub type HabitId = Uuid;

/// Atomic habit built from behavior, anchor and tiny action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    pub id: HabitId,
    /// The behavior being built.
    pub text: String,
    /// Triggering cue ("after the morning coffee...").
    pub anchor: String,
    /// Minimal first step that keeps friction low.
    pub tiny_action: String,
    /// Consecutive repetition counter.
    pub streak: u32,
    /// Day of the most recent repeat, when any.
    pub last_completed: Option<DayStamp>,
}

impl Habit {
    /// Creates a habit with a zero streak and no recorded repeat.
    pub fn new(
        text: impl Into<String>,
        anchor: impl Into<String>,
        tiny_action: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            anchor: anchor.into(),
            tiny_action: tiny_action.into(),
            streak: 0,
            last_completed: None,
        }
    }
}
