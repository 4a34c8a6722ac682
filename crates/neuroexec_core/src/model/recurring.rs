//! Recurring routine model.
//!
//! # Responsibility
//! - Define fixed routine tasks with a per-day check-in ledger.
//!
//! # Invariants
//! - A day appears at most once in `completed_days`; check-ins are
//!   idempotent per calendar day.
//! - Routines never auto-expire; only explicit removal deletes them.

use crate::model::day::DayStamp;
use crate::model::task::{Energy, Priority};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a fixed routine.
pub type RecurringId = Uuid;

/// Cadence of a fixed routine.
///
/// Carried for display and serialization; this core derives no scheduling
/// from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
}

/// Fixed routine task with its check-in ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurringTask {
    pub id: RecurringId,
    pub text: String,
    pub frequency: Frequency,
    pub priority: Priority,
    pub energy: Energy,
    /// Days with a recorded check-in, oldest first.
    pub completed_days: Vec<DayStamp>,
}

impl RecurringTask {
    /// Creates a routine with medium energy and an empty ledger.
    pub fn new(text: impl Into<String>, frequency: Frequency, priority: Priority) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            frequency,
            priority,
            energy: Energy::Medium,
            completed_days: Vec::new(),
        }
    }

    /// Whether a check-in is already recorded for `day`.
    pub fn checked_in_on(&self, day: &DayStamp) -> bool {
        self.completed_days.contains(day)
    }
}
