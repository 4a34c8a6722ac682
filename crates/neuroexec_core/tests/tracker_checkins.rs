use neuroexec_core::{
    AppState, AssistError, AssistGateway, AssistResult, CategorizeItem, CategorySuggestion,
    DayStamp, Frequency, PanicSolution, Priority,
};
use std::sync::Arc;

struct OfflineGateway;

impl AssistGateway for OfflineGateway {
    fn categorize(&self, _items: &[CategorizeItem]) -> AssistResult<Vec<CategorySuggestion>> {
        Err(AssistError::Transport("offline".into()))
    }

    fn decompose(&self, _task_text: &str) -> AssistResult<Vec<String>> {
        Err(AssistError::Transport("offline".into()))
    }

    fn rescue(&self, _task_text: &str, _obstacle: &str) -> AssistResult<PanicSolution> {
        Err(AssistError::Transport("offline".into()))
    }

    fn identity_boost(&self, _task_text: &str) -> AssistResult<String> {
        Err(AssistError::Transport("offline".into()))
    }
}

fn app() -> AppState {
    AppState::new(Arc::new(OfflineGateway))
}

fn day(stamp: &str) -> DayStamp {
    DayStamp::parse(stamp).unwrap()
}

#[test]
fn double_check_in_awards_exactly_once() {
    let mut app = app();
    let id = app
        .create_recurring("weekly review", Frequency::Weekly, Priority::Q2)
        .unwrap();

    app.check_in(id, &day("2024-06-01"));
    assert_eq!(app.points(), 20);

    app.check_in(id, &day("2024-06-01"));
    assert_eq!(app.points(), 20);

    app.check_in(id, &day("2024-06-02"));
    assert_eq!(app.points(), 40);

    let routine = app.tracker().recurring_task(id).unwrap();
    assert!(routine.checked_in_on(&day("2024-06-01")));
    assert!(routine.checked_in_on(&day("2024-06-02")));
    assert_eq!(routine.completed_days.len(), 2);
}

#[test]
fn habit_rewards_accumulate_with_the_streak() {
    let mut app = app();
    let id = app
        .create_habit("meditate", "after coffee", "breathe three times")
        .unwrap();

    // 25 + 27 + 29 = 81 over three repetitions.
    app.repeat_habit(id, &day("2024-06-01"));
    app.repeat_habit(id, &day("2024-06-02"));
    app.repeat_habit(id, &day("2024-06-03"));

    assert_eq!(app.points(), 81);
    let habit = app.tracker().habit(id).unwrap();
    assert_eq!(habit.streak, 3);
    assert_eq!(habit.last_completed, Some(day("2024-06-03")));
}

#[test]
fn a_missed_day_never_resets_a_streak() {
    let mut app = app();
    let id = app.create_habit("journal", "before bed", "one line").unwrap();

    app.repeat_habit(id, &day("2024-06-01"));
    app.repeat_habit(id, &day("2024-06-10"));

    assert_eq!(app.tracker().habit(id).unwrap().streak, 2);
}

#[test]
fn blank_creations_are_silent_noops() {
    let mut app = app();
    assert!(app
        .create_recurring("  ", Frequency::Daily, Priority::Q1)
        .is_none());
    assert!(app.create_habit("\t", "anchor", "action").is_none());
    assert!(app.tracker().recurring().is_empty());
    assert!(app.tracker().habits().is_empty());
}

#[test]
fn removals_have_no_point_side_effects() {
    let mut app = app();
    let routine = app
        .create_recurring("stretch", Frequency::Daily, Priority::Q3)
        .unwrap();
    let habit = app.create_habit("read", "after lunch", "one page").unwrap();

    app.check_in(routine, &day("2024-06-01"));
    app.repeat_habit(habit, &day("2024-06-01"));
    let earned = app.points();

    app.remove_recurring(routine);
    app.remove_habit(habit);

    assert!(app.tracker().recurring().is_empty());
    assert!(app.tracker().habits().is_empty());
    assert_eq!(app.points(), earned);
}
