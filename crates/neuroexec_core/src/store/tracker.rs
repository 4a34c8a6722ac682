//! Recurring routine and atomic habit tracker.
//!
//! # Responsibility
//! - Own the session's fixed routines and habits.
//! - Keep the per-day check-in ledger and the repetition streaks honest.
//!
//! # Invariants
//! - A routine records at most one check-in per calendar day; callers award
//!   points only when `Recorded` is reported.
//! - Habit streaks only move through `repeat`; there is no decay rule.

use crate::model::day::DayStamp;
use crate::model::habit::{Habit, HabitId};
use crate::model::recurring::{Frequency, RecurringId, RecurringTask};
use crate::model::task::Priority;
use log::{debug, info};

/// Result of one recurring check-in attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckInOutcome {
    /// The day was absent from the ledger and is now recorded.
    Recorded,
    /// The day was already recorded; nothing changed.
    AlreadyRecorded,
}

/// In-memory tracker for routines and habits, insertion ordered.
#[derive(Debug, Default)]
pub struct Tracker {
    recurring: Vec<RecurringTask>,
    habits: Vec<Habit>,
}

impl Tracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a fixed routine. Blank text is a silent no-op.
    pub fn create_recurring(
        &mut self,
        text: &str,
        frequency: Frequency,
        priority: Priority,
    ) -> Option<RecurringId> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            debug!("event=recurring_create module=tracker status=skipped reason=blank_text");
            return None;
        }

        let routine = RecurringTask::new(trimmed, frequency, priority);
        let id = routine.id;
        self.recurring.push(routine);
        info!("event=recurring_create module=tracker status=ok routine={id}");
        Some(id)
    }

    /// Records a check-in for `day` exactly once.
    ///
    /// Re-checking in on the same day reports `AlreadyRecorded` so callers
    /// must not award points again. Unknown ids return `None`.
    pub fn check_in(&mut self, id: RecurringId, day: &DayStamp) -> Option<CheckInOutcome> {
        let routine = self.recurring.iter_mut().find(|routine| routine.id == id)?;
        if routine.completed_days.contains(day) {
            return Some(CheckInOutcome::AlreadyRecorded);
        }

        routine.completed_days.push(day.clone());
        info!("event=recurring_check_in module=tracker status=ok routine={id} day={day}");
        Some(CheckInOutcome::Recorded)
    }

    /// Creates an atomic habit. Blank behavior text is a silent no-op.
    pub fn create_habit(
        &mut self,
        text: &str,
        anchor: &str,
        tiny_action: &str,
    ) -> Option<HabitId> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            debug!("event=habit_create module=tracker status=skipped reason=blank_text");
            return None;
        }

        let habit = Habit::new(trimmed, anchor.trim(), tiny_action.trim());
        let id = habit.id;
        self.habits.push(habit);
        info!("event=habit_create module=tracker status=ok habit={id}");
        Some(id)
    }

    /// Repeats a habit circuit: increments the streak, records the day, and
    /// returns the streak value from before the increment so callers can
    /// compute the reward. Unknown ids return `None`.
    pub fn repeat(&mut self, id: HabitId, day: &DayStamp) -> Option<u32> {
        let habit = self.habits.iter_mut().find(|habit| habit.id == id)?;
        let before = habit.streak;
        habit.streak = habit.streak.saturating_add(1);
        habit.last_completed = Some(day.clone());
        info!(
            "event=habit_repeat module=tracker status=ok habit={id} streak={}",
            habit.streak
        );
        Some(before)
    }

    /// Removes a routine. No point side effects.
    pub fn remove_recurring(&mut self, id: RecurringId) -> bool {
        let before = self.recurring.len();
        self.recurring.retain(|routine| routine.id != id);
        self.recurring.len() != before
    }

    /// Removes a habit. No point side effects.
    pub fn remove_habit(&mut self, id: HabitId) -> bool {
        let before = self.habits.len();
        self.habits.retain(|habit| habit.id != id);
        self.habits.len() != before
    }

    /// All routines in creation order.
    pub fn recurring(&self) -> &[RecurringTask] {
        &self.recurring
    }

    /// All habits in creation order.
    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    pub fn recurring_task(&self, id: RecurringId) -> Option<&RecurringTask> {
        self.recurring.iter().find(|routine| routine.id == id)
    }

    pub fn habit(&self, id: HabitId) -> Option<&Habit> {
        self.habits.iter().find(|habit| habit.id == id)
    }
}
