use neuroexec_core::{
    AppState, AssistError, AssistGateway, AssistResult, CategorizeItem, CategorySuggestion,
    DayStamp, Energy, Enrichment, PanicSolution, Priority,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Gateway answering every operation with canned content.
struct ScriptedGateway;

impl AssistGateway for ScriptedGateway {
    fn categorize(&self, items: &[CategorizeItem]) -> AssistResult<Vec<CategorySuggestion>> {
        Ok(items
            .iter()
            .map(|item| CategorySuggestion {
                id: item.id,
                priority: Priority::Q1,
                energy: Energy::High,
            })
            .collect())
    }

    fn decompose(&self, _task_text: &str) -> AssistResult<Vec<String>> {
        Ok(vec![
            "open the document".into(),
            "write one sentence".into(),
            "save the draft".into(),
        ])
    }

    fn rescue(&self, _task_text: &str, _obstacle: &str) -> AssistResult<PanicSolution> {
        Ok(PanicSolution {
            diagnosis: "analysis paralysis".into(),
            steps: vec!["shrink the scope".into(), "start a two-minute burst".into()],
            encouragement: "momentum beats perfection".into(),
        })
    }

    fn identity_boost(&self, task_text: &str) -> AssistResult<String> {
        Ok(format!("finishing \"{task_text}\" is who you are now"))
    }
}

/// Gateway that always fails, for the recovery paths.
struct FailingGateway;

impl AssistGateway for FailingGateway {
    fn categorize(&self, _items: &[CategorizeItem]) -> AssistResult<Vec<CategorySuggestion>> {
        Err(AssistError::Status(500))
    }

    fn decompose(&self, _task_text: &str) -> AssistResult<Vec<String>> {
        Err(AssistError::Schema("not json".into()))
    }

    fn rescue(&self, _task_text: &str, _obstacle: &str) -> AssistResult<PanicSolution> {
        Err(AssistError::Transport("connection refused".into()))
    }

    fn identity_boost(&self, _task_text: &str) -> AssistResult<String> {
        Err(AssistError::Transport("connection refused".into()))
    }
}

/// Slow gateway counting decompose calls, for the single-flight policy.
struct SlowDecomposeGateway {
    calls: Arc<AtomicUsize>,
}

impl AssistGateway for SlowDecomposeGateway {
    fn categorize(&self, _items: &[CategorizeItem]) -> AssistResult<Vec<CategorySuggestion>> {
        Err(AssistError::Transport("unused".into()))
    }

    fn decompose(&self, _task_text: &str) -> AssistResult<Vec<String>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        std::thread::sleep(Duration::from_millis(150));
        Ok(vec!["only step".into()])
    }

    fn rescue(&self, _task_text: &str, _obstacle: &str) -> AssistResult<PanicSolution> {
        Err(AssistError::Transport("unused".into()))
    }

    fn identity_boost(&self, _task_text: &str) -> AssistResult<String> {
        Err(AssistError::Transport("unused".into()))
    }
}

fn day(stamp: &str) -> DayStamp {
    DayStamp::parse(stamp).unwrap()
}

fn pump_until(app: &mut AppState, ready: impl Fn(&AppState) -> bool) {
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        app.pump_assist();
        if ready(app) {
            return;
        }
        assert!(
            Instant::now() < deadline,
            "enrichment did not arrive in time"
        );
        std::thread::sleep(Duration::from_millis(10));
    }
}

#[test]
fn completion_commits_before_the_boost_arrives() {
    let mut app = AppState::new(Arc::new(ScriptedGateway));
    let id = app.capture_task("ship the report", day("2024-06-01")).unwrap();

    app.toggle_task(id);
    // The award is already committed, boost or not.
    assert_eq!(app.points(), 15);
    assert!(app.boost().is_none());

    pump_until(&mut app, |app| app.boost().is_some());
    let boost = app.boost().unwrap();
    assert_eq!(boost.task_title, "ship the report");
    assert!(boost.text.contains("ship the report"));

    app.dismiss_boost();
    assert!(app.boost().is_none());
    assert_eq!(app.points(), 15);
}

#[test]
fn successful_decomposition_replaces_subtasks() {
    let mut app = AppState::new(Arc::new(ScriptedGateway));
    let id = app.capture_task("write essay", day("2024-06-01")).unwrap();

    app.decompose_task(id);
    assert!(app.is_decomposing(id));

    pump_until(&mut app, |app| !app.is_decomposing(id));
    let task = app.task(id).unwrap();
    assert_eq!(task.subtasks.len(), 3);
    assert_eq!(task.subtasks[0], "open the document");
}

#[test]
fn decomposition_is_single_flight_per_task() {
    let calls = Arc::new(AtomicUsize::new(0));
    let mut app = AppState::new(Arc::new(SlowDecomposeGateway {
        calls: Arc::clone(&calls),
    }));
    let id = app.capture_task("busy task", day("2024-06-01")).unwrap();

    app.decompose_task(id);
    app.decompose_task(id);
    app.decompose_task(id);

    pump_until(&mut app, |app| !app.is_decomposing(id));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(app.task(id).unwrap().subtasks, ["only step"]);
}

#[test]
fn late_decomposition_for_a_deleted_task_is_discarded() {
    let mut app = AppState::new(Arc::new(ScriptedGateway));
    let id = app.capture_task("short lived", day("2024-06-01")).unwrap();
    app.remove_task(id);

    app.apply_enrichment(Enrichment::Subtasks {
        task: id,
        outcome: Some(vec!["too late".into()]),
    });

    assert!(app.task(id).is_none());
    assert!(app.tasks_on(&day("2024-06-01")).is_empty());
}

#[test]
fn rescue_failure_returns_the_panel_to_its_input_state() {
    let mut app = AppState::new(Arc::new(FailingGateway));
    let id = app.capture_task("stuck task", day("2024-06-01")).unwrap();

    app.open_rescue(id);
    assert!(app.rescue().is_open());

    // Blank obstacles never leave the input state.
    app.submit_obstacle("   ");
    assert!(!app.rescue().in_flight());

    app.submit_obstacle("it feels too big");
    assert!(app.rescue().in_flight());

    pump_until(&mut app, |app| !app.rescue().in_flight());
    assert!(app.rescue().is_open());
    assert!(app.rescue().solution().is_none());
}

#[test]
fn rescue_success_delivers_the_protocol_and_retry_works() {
    let mut app = AppState::new(Arc::new(ScriptedGateway));
    let id = app.capture_task("stuck task", day("2024-06-01")).unwrap();

    app.open_rescue(id);
    app.submit_obstacle("afraid of getting it wrong");

    pump_until(&mut app, |app| app.rescue().solution().is_some());
    let solution = app.rescue().solution().unwrap();
    assert_eq!(solution.diagnosis, "analysis paralysis");
    assert_eq!(solution.steps.len(), 2);

    app.close_rescue();
    assert!(!app.rescue().is_open());
    assert!(app.rescue().solution().is_none());
}

#[test]
fn late_rescue_for_a_closed_panel_is_discarded() {
    let mut app = AppState::new(Arc::new(ScriptedGateway));
    let id = app.capture_task("was stuck", day("2024-06-01")).unwrap();

    app.apply_enrichment(Enrichment::Rescue {
        task: id,
        outcome: Some(PanicSolution {
            diagnosis: "stale".into(),
            steps: vec![],
            encouragement: "stale".into(),
        }),
    });

    assert!(!app.rescue().is_open());
    assert!(app.rescue().solution().is_none());
}

#[test]
fn categorization_patches_only_tasks_that_still_exist() {
    let mut app = AppState::new(Arc::new(ScriptedGateway));
    let kept = app.capture_task("keep me", day("2024-06-01")).unwrap();
    let removed = app.capture_task("remove me", day("2024-06-01")).unwrap();
    app.remove_task(removed);

    app.apply_enrichment(Enrichment::Categories {
        outcome: Some(vec![
            CategorySuggestion {
                id: kept,
                priority: Priority::Q1,
                energy: Energy::High,
            },
            CategorySuggestion {
                id: removed,
                priority: Priority::Q4,
                energy: Energy::Low,
            },
        ]),
    });

    let task = app.task(kept).unwrap();
    assert_eq!(task.priority, Priority::Q1);
    assert_eq!(task.energy, Energy::High);
    assert!(app.task(removed).is_none());
}

#[test]
fn categorize_day_round_trips_through_the_gateway() {
    let mut app = AppState::new(Arc::new(ScriptedGateway));
    let id = app.capture_task("triage me", day("2024-06-01")).unwrap();

    app.categorize_day(&day("2024-06-01"));
    pump_until(&mut app, |app| {
        app.task(id).map(|task| task.priority) == Some(Priority::Q1)
    });

    assert_eq!(app.task(id).unwrap().energy, Energy::High);
}
