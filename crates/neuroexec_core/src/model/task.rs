//! Task domain model.
//!
//! # Responsibility
//! - Define the captured-task record and its priority/energy enumerations.
//!
//! # Invariants
//! - `id` is unique across all tasks ever created in a session.
//! - `day` never changes after creation; there is no reschedule operation.
//! - After creation only `priority`, `completed` and (once, via a successful
//!   decomposition) `subtasks` are mutated.

use crate::model::day::DayStamp;
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Stable identifier for every captured task.
pub type TaskId = Uuid;

/// Eisenhower quadrant assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    /// Urgent and important: do now.
    Q1,
    /// Important but not urgent: strategic work.
    Q2,
    /// Urgent but trivial: delegate.
    Q3,
    /// Neither: eliminate.
    Q4,
}

impl Priority {
    /// All quadrants in display order.
    pub const ALL: [Priority; 4] = [Priority::Q1, Priority::Q2, Priority::Q3, Priority::Q4];
}

/// Estimated energy demand of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Energy {
    Low,
    Medium,
    High,
}

/// Captured unit of work scoped to a single day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub priority: Priority,
    pub energy: Energy,
    pub completed: bool,
    /// Decomposition steps; empty until a decompose request succeeds.
    pub subtasks: Vec<String>,
    /// Day this task belongs to.
    pub day: DayStamp,
    /// Unix epoch milliseconds at creation. Informational only; no ordering
    /// guarantee is derived from it.
    pub created_at_ms: i64,
}

impl Task {
    /// Creates a task with capture defaults: `Q2`, medium energy, open, no
    /// subtasks.
    pub fn new(text: impl Into<String>, day: DayStamp) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            priority: Priority::Q2,
            energy: Energy::Medium,
            completed: false,
            subtasks: Vec::new(),
            day,
            created_at_ms: epoch_ms_now(),
        }
    }
}

pub(crate) fn epoch_ms_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}
