//! Day-scoped in-memory task collection.
//!
//! # Responsibility
//! - Own every captured task for the session and serve day-scoped queries.
//! - Apply the per-task mutations: completion toggle, quadrant reassignment,
//!   decomposition writes, removal.
//!
//! # Invariants
//! - Insertion order is the only ordering; queries never re-sort.
//! - Removal has no side effects beyond the collection itself (points are a
//!   caller concern).

use crate::model::day::DayStamp;
use crate::model::task::{Energy, Priority, Task, TaskId};
use log::{debug, info};

/// Direction of a completion toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The task transitioned from open to completed.
    NowCompleted,
    /// The task transitioned from completed back to open.
    NowReopened,
}

/// In-memory task collection preserving insertion order.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Captures a new task for `day` with capture defaults.
    ///
    /// Blank or whitespace-only text is a silent no-op returning `None`.
    pub fn capture(&mut self, text: &str, day: DayStamp) -> Option<TaskId> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            debug!("event=task_capture module=store status=skipped reason=blank_text");
            return None;
        }

        let task = Task::new(trimmed, day);
        let id = task.id;
        self.tasks.push(task);
        info!("event=task_capture module=store status=ok task={id}");
        Some(id)
    }

    /// Flips the completion state and reports the transition direction.
    ///
    /// Unknown ids return `None` and change nothing.
    pub fn toggle_completed(&mut self, id: TaskId) -> Option<ToggleOutcome> {
        let task = self.tasks.iter_mut().find(|task| task.id == id)?;
        task.completed = !task.completed;
        Some(if task.completed {
            ToggleOutcome::NowCompleted
        } else {
            ToggleOutcome::NowReopened
        })
    }

    /// Reassigns the Eisenhower quadrant. Unknown ids are no-ops; assigning
    /// the current quadrant is a harmless idempotent write.
    pub fn set_priority(&mut self, id: TaskId, priority: Priority) {
        if let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) {
            task.priority = priority;
        }
    }

    /// Applies a categorization suggestion to both priority and energy.
    ///
    /// Returns whether the task still existed.
    pub fn recategorize(&mut self, id: TaskId, priority: Priority, energy: Energy) -> bool {
        match self.tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => {
                task.priority = priority;
                task.energy = energy;
                true
            }
            None => false,
        }
    }

    /// Replaces the decomposition steps wholesale.
    ///
    /// Returns whether the task still existed; a late enrichment for a
    /// deleted task is discarded by the `false` path.
    pub fn set_subtasks(&mut self, id: TaskId, steps: Vec<String>) -> bool {
        match self.tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => {
                task.subtasks = steps;
                true
            }
            None => false,
        }
    }

    /// Removes the task. Returns whether anything was deleted.
    pub fn remove(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        let removed = self.tasks.len() != before;
        if removed {
            info!("event=task_remove module=store status=ok task={id}");
        }
        removed
    }

    /// All tasks captured for `day`, in insertion order.
    pub fn tasks_on(&self, day: &DayStamp) -> Vec<&Task> {
        self.tasks.iter().filter(|task| &task.day == day).collect()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
