//! Transient payloads produced by the assist gateway.
//!
//! These are display state with a "shown, then dismissed" lifecycle; none of
//! them is persisted or load-bearing for points, tasks or streaks.

use crate::model::task::{Energy, Priority, TaskId};
use serde::{Deserialize, Serialize};

/// Short congratulatory message shown after completing a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityBoost {
    pub text: String,
    /// Title of the task that triggered the boost.
    pub task_title: String,
}

/// Unblocking protocol returned by the rescue operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanicSolution {
    /// Named executive barrier ("analysis paralysis", ...).
    pub diagnosis: String,
    /// Ordered unblocking steps.
    pub steps: Vec<String>,
    pub encouragement: String,
}

/// Quadrant/energy suggestion for one task from batch categorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySuggestion {
    pub id: TaskId,
    pub priority: Priority,
    pub energy: Energy,
}
