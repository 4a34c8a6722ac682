//! Application state coordinator.
//!
//! # Responsibility
//! - Own every in-memory store and apply all mutations on one thread.
//! - Dispatch assist requests fire-and-forget and fold their results back in
//!   as best-effort enrichments.
//!
//! # Invariants
//! - Core mutations (points, completion, streaks) commit before any gateway
//!   request is dispatched and never depend on its outcome.
//! - Enrichments targeting entities that no longer exist are discarded.
//! - At most one decomposition request is in flight per task, and at most
//!   one rescue request per panel.

use crate::assist::{AssistGateway, CategorizeItem};
use crate::matrix::{MatrixView, QuadrantDrop};
use crate::model::assist::{CategorySuggestion, IdentityBoost, PanicSolution};
use crate::model::day::DayStamp;
use crate::model::habit::HabitId;
use crate::model::recurring::{Frequency, RecurringId};
use crate::model::task::{Priority, Task, TaskId};
use crate::score::{
    habit_repeat_points, Level, ScoreBoard, RECURRING_CHECK_IN_POINTS, TASK_COMPLETION_POINTS,
};
use crate::store::task_store::{TaskStore, ToggleOutcome};
use crate::store::tracker::{CheckInOutcome, Tracker};
use crate::timer::FocusTimer;
use log::{info, warn};
use std::collections::HashSet;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;
use std::thread;

/// Result of one gateway round trip, applied on the owning thread.
///
/// `None` outcomes mean the request failed; applying them only clears
/// in-flight state, never core data.
#[derive(Debug)]
pub enum Enrichment {
    /// Identity boost for a completed task; `None` suppresses the
    /// notification.
    Boost {
        task_title: String,
        outcome: Option<String>,
    },
    /// Decomposition steps; `None` leaves the subtasks empty for retry.
    Subtasks {
        task: TaskId,
        outcome: Option<Vec<String>>,
    },
    /// Rescue protocol; `None` returns the panel to its input state.
    Rescue {
        task: TaskId,
        outcome: Option<PanicSolution>,
    },
    /// Batch categorization suggestions.
    Categories {
        outcome: Option<Vec<CategorySuggestion>>,
    },
}

/// Rescue-flow lifecycle owned by the coordinator.
#[derive(Debug, Default)]
pub struct RescuePanel {
    target: Option<TaskId>,
    in_flight: bool,
    solution: Option<PanicSolution>,
}

impl RescuePanel {
    /// Task the panel is open for, when any.
    pub fn target(&self) -> Option<TaskId> {
        self.target
    }

    pub fn is_open(&self) -> bool {
        self.target.is_some()
    }

    /// Whether a rescue request is outstanding.
    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn solution(&self) -> Option<&PanicSolution> {
        self.solution.as_ref()
    }
}

/// Single owner of all session state and the only mutation entry point.
pub struct AppState {
    tasks: TaskStore,
    tracker: Tracker,
    score: ScoreBoard,
    timer: FocusTimer,
    gateway: Arc<dyn AssistGateway>,
    enrichment_tx: Sender<Enrichment>,
    enrichment_rx: Receiver<Enrichment>,
    decomposing: HashSet<TaskId>,
    boost: Option<IdentityBoost>,
    rescue: RescuePanel,
}

impl AppState {
    pub fn new(gateway: Arc<dyn AssistGateway>) -> Self {
        let (enrichment_tx, enrichment_rx) = channel();
        Self {
            tasks: TaskStore::new(),
            tracker: Tracker::new(),
            score: ScoreBoard::new(),
            timer: FocusTimer::new(),
            gateway,
            enrichment_tx,
            enrichment_rx,
            decomposing: HashSet::new(),
            boost: None,
            rescue: RescuePanel::default(),
        }
    }

    // --- tasks ---

    /// Captures a thought as a task for `day`. Blank text is a silent no-op.
    pub fn capture_task(&mut self, text: &str, day: DayStamp) -> Option<TaskId> {
        self.tasks.capture(text, day)
    }

    /// Flips completion state.
    ///
    /// Completing awards points and requests an identity boost; the toggle
    /// and the award commit before the request is dispatched. Reopening
    /// revokes the award (clamped at zero) and never retracts a boost
    /// already shown.
    pub fn toggle_task(&mut self, id: TaskId) {
        let Some(outcome) = self.tasks.toggle_completed(id) else {
            return;
        };

        match outcome {
            ToggleOutcome::NowCompleted => {
                self.score.award(TASK_COMPLETION_POINTS);
                info!(
                    "event=task_complete module=app status=ok task={id} points={}",
                    self.score.points()
                );

                if let Some(task) = self.tasks.get(id) {
                    let title = task.text.clone();
                    self.dispatch(move |gateway| {
                        let outcome = match gateway.identity_boost(&title) {
                            Ok(text) => Some(text),
                            Err(err) => {
                                warn!("event=assist_boost module=app status=error error={err}");
                                None
                            }
                        };
                        Enrichment::Boost {
                            task_title: title,
                            outcome,
                        }
                    });
                }
            }
            ToggleOutcome::NowReopened => {
                self.score.revoke(TASK_COMPLETION_POINTS);
                info!(
                    "event=task_reopen module=app status=ok task={id} points={}",
                    self.score.points()
                );
            }
        }
    }

    /// Applies a matrix drag-and-drop reassignment.
    pub fn move_task(&mut self, drop: QuadrantDrop) {
        drop.apply(&mut self.tasks);
    }

    /// Deletes a task. Points earned from it stay untouched; only explicit
    /// un-completion revokes them.
    pub fn remove_task(&mut self, id: TaskId) {
        if self.tasks.remove(id) {
            self.decomposing.remove(&id);
        }
    }

    /// Requests a decomposition into micro-steps.
    ///
    /// Single-flight per task: triggers while a request is outstanding are
    /// no-ops, as are unknown ids.
    pub fn decompose_task(&mut self, id: TaskId) {
        if self.decomposing.contains(&id) {
            return;
        }
        let Some(task) = self.tasks.get(id) else {
            return;
        };

        let text = task.text.clone();
        self.decomposing.insert(id);
        info!("event=assist_decompose module=app status=start task={id}");
        self.dispatch(move |gateway| {
            let outcome = match gateway.decompose(&text) {
                Ok(steps) => Some(steps),
                Err(err) => {
                    warn!("event=assist_decompose module=app status=error error={err}");
                    None
                }
            };
            Enrichment::Subtasks { task: id, outcome }
        });
    }

    /// Whether a decomposition request is outstanding for `id`.
    pub fn is_decomposing(&self, id: TaskId) -> bool {
        self.decomposing.contains(&id)
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.get(id)
    }

    /// Tasks captured for `day`, insertion ordered.
    pub fn tasks_on(&self, day: &DayStamp) -> Vec<&Task> {
        self.tasks.tasks_on(day)
    }

    /// Four-quadrant view over `day`'s open tasks.
    pub fn matrix_on(&self, day: &DayStamp) -> MatrixView<'_> {
        MatrixView::for_day(&self.tasks, day)
    }

    /// Best-effort batch categorization of `day`'s open tasks.
    pub fn categorize_day(&mut self, day: &DayStamp) {
        let items: Vec<CategorizeItem> = self
            .tasks
            .tasks_on(day)
            .into_iter()
            .filter(|task| !task.completed)
            .map(|task| CategorizeItem {
                id: task.id,
                text: task.text.clone(),
            })
            .collect();
        if items.is_empty() {
            return;
        }

        self.dispatch(move |gateway| {
            let outcome = match gateway.categorize(&items) {
                Ok(suggestions) => Some(suggestions),
                Err(err) => {
                    warn!("event=assist_categorize module=app status=error error={err}");
                    None
                }
            };
            Enrichment::Categories { outcome }
        });
    }

    // --- routines and habits ---

    pub fn create_recurring(
        &mut self,
        text: &str,
        frequency: Frequency,
        priority: Priority,
    ) -> Option<RecurringId> {
        self.tracker.create_recurring(text, frequency, priority)
    }

    /// Records a routine check-in; the award lands at most once per day.
    pub fn check_in(&mut self, id: RecurringId, day: &DayStamp) {
        match self.tracker.check_in(id, day) {
            Some(CheckInOutcome::Recorded) => {
                self.score.award(RECURRING_CHECK_IN_POINTS);
                info!(
                    "event=recurring_award module=app status=ok routine={id} points={}",
                    self.score.points()
                );
            }
            Some(CheckInOutcome::AlreadyRecorded) | None => {}
        }
    }

    pub fn create_habit(&mut self, text: &str, anchor: &str, tiny_action: &str) -> Option<HabitId> {
        self.tracker.create_habit(text, anchor, tiny_action)
    }

    /// Repeats a habit circuit. The reward grows linearly with the streak
    /// established before this repetition.
    pub fn repeat_habit(&mut self, id: HabitId, day: &DayStamp) {
        if let Some(before) = self.tracker.repeat(id, day) {
            self.score.award(habit_repeat_points(before));
        }
    }

    pub fn remove_recurring(&mut self, id: RecurringId) {
        self.tracker.remove_recurring(id);
    }

    pub fn remove_habit(&mut self, id: HabitId) {
        self.tracker.remove_habit(id);
    }

    pub fn tracker(&self) -> &Tracker {
        &self.tracker
    }

    // --- rescue flow ---

    /// Opens the rescue panel for a stuck task. Unknown ids are no-ops.
    pub fn open_rescue(&mut self, id: TaskId) {
        if self.tasks.get(id).is_none() {
            return;
        }
        self.rescue = RescuePanel {
            target: Some(id),
            in_flight: false,
            solution: None,
        };
    }

    /// Sends the described obstacle for diagnosis.
    ///
    /// Blank obstacles, a closed panel and repeated submissions while a
    /// request is outstanding are all no-ops.
    pub fn submit_obstacle(&mut self, obstacle: &str) {
        let obstacle = obstacle.trim();
        if obstacle.is_empty() || self.rescue.in_flight {
            return;
        }
        let Some(target) = self.rescue.target else {
            return;
        };
        let Some(task) = self.tasks.get(target) else {
            return;
        };

        let text = task.text.clone();
        let obstacle = obstacle.to_string();
        self.rescue.in_flight = true;
        info!("event=assist_rescue module=app status=start task={target}");
        self.dispatch(move |gateway| {
            let outcome = match gateway.rescue(&text, &obstacle) {
                Ok(solution) => Some(solution),
                Err(err) => {
                    warn!("event=assist_rescue module=app status=error error={err}");
                    None
                }
            };
            Enrichment::Rescue {
                task: target,
                outcome,
            }
        });
    }

    pub fn close_rescue(&mut self) {
        self.rescue = RescuePanel::default();
    }

    pub fn rescue(&self) -> &RescuePanel {
        &self.rescue
    }

    // --- boost notification ---

    pub fn boost(&self) -> Option<&IdentityBoost> {
        self.boost.as_ref()
    }

    pub fn dismiss_boost(&mut self) {
        self.boost = None;
    }

    // --- score and timer ---

    pub fn points(&self) -> u32 {
        self.score.points()
    }

    pub fn level(&self) -> Level {
        self.score.level()
    }

    pub fn timer(&self) -> &FocusTimer {
        &self.timer
    }

    pub fn timer_mut(&mut self) -> &mut FocusTimer {
        &mut self.timer
    }

    // --- assist plumbing ---

    /// Runs one gateway call on a worker thread and queues its result. The
    /// caller's mutation has already committed by the time this runs.
    fn dispatch<F>(&self, job: F)
    where
        F: FnOnce(&dyn AssistGateway) -> Enrichment + Send + 'static,
    {
        let gateway = Arc::clone(&self.gateway);
        let tx = self.enrichment_tx.clone();
        thread::spawn(move || {
            let enrichment = job(gateway.as_ref());
            // A dropped receiver means the app is gone; nothing to deliver.
            let _ = tx.send(enrichment);
        });
    }

    /// Drains pending enrichments and applies them. Call from the thread
    /// that owns this state. Returns how many were applied.
    pub fn pump_assist(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(enrichment) = self.enrichment_rx.try_recv() {
            self.apply_enrichment(enrichment);
            applied += 1;
        }
        applied
    }

    /// Applies one gateway result as a best-effort patch.
    ///
    /// Targets that no longer exist are discarded; failed outcomes only
    /// clear in-flight state.
    pub fn apply_enrichment(&mut self, enrichment: Enrichment) {
        match enrichment {
            Enrichment::Boost {
                task_title,
                outcome,
            } => {
                if let Some(text) = outcome {
                    self.boost = Some(IdentityBoost { text, task_title });
                }
            }
            Enrichment::Subtasks { task, outcome } => {
                self.decomposing.remove(&task);
                if let Some(steps) = outcome {
                    if !self.tasks.set_subtasks(task, steps) {
                        info!("event=assist_decompose module=app status=discarded task={task}");
                    }
                }
            }
            Enrichment::Rescue { task, outcome } => {
                if self.rescue.target != Some(task) {
                    // The panel moved on; a late solution has no home.
                    return;
                }
                self.rescue.in_flight = false;
                self.rescue.solution = outcome;
            }
            Enrichment::Categories { outcome } => {
                let Some(suggestions) = outcome else {
                    return;
                };
                for suggestion in suggestions {
                    self.tasks
                        .recategorize(suggestion.id, suggestion.priority, suggestion.energy);
                }
            }
        }
    }
}
