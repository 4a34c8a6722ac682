//! Eisenhower matrix view and drop reassignment.
//!
//! # Responsibility
//! - Partition one day's open tasks into the four quadrants.
//! - Translate drag-and-drop drops into priority reassignment commands.
//!
//! # Invariants
//! - The view borrows store data; it never owns or mutates tasks.
//! - Dropping a task onto its current quadrant changes nothing.

use crate::model::day::DayStamp;
use crate::model::task::{Priority, Task, TaskId};
use crate::store::task_store::TaskStore;

/// Borrowed four-quadrant view over one day's open tasks.
#[derive(Debug)]
pub struct MatrixView<'a> {
    quadrants: [Vec<&'a Task>; 4],
}

impl<'a> MatrixView<'a> {
    /// Builds the view for `day` from that day's incomplete tasks, keeping
    /// store insertion order within each quadrant.
    pub fn for_day(store: &'a TaskStore, day: &DayStamp) -> Self {
        let mut quadrants: [Vec<&'a Task>; 4] = Default::default();
        for task in store.tasks_on(day) {
            if task.completed {
                continue;
            }
            quadrants[slot(task.priority)].push(task);
        }
        Self { quadrants }
    }

    /// Tasks currently assigned to `priority`.
    pub fn quadrant(&self, priority: Priority) -> &[&'a Task] {
        &self.quadrants[slot(priority)]
    }

    /// Total number of open tasks across all quadrants.
    pub fn open_task_count(&self) -> usize {
        self.quadrants.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.open_task_count() == 0
    }
}

fn slot(priority: Priority) -> usize {
    match priority {
        Priority::Q1 => 0,
        Priority::Q2 => 1,
        Priority::Q3 => 2,
        Priority::Q4 => 3,
    }
}

/// One drag-and-drop gesture: a source task dropped on a target quadrant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuadrantDrop {
    pub task: TaskId,
    pub target: Priority,
}

impl QuadrantDrop {
    /// Applies the reassignment. Unknown ids and same-quadrant drops are
    /// harmless no-ops.
    pub fn apply(self, store: &mut TaskStore) {
        store.set_priority(self.task, self.target);
    }
}
