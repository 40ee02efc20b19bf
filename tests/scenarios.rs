//! Multiple scenarios that check the client state is correctly reconciled with a (mocked) store
#![cfg(feature = "integration_tests")]

use std::sync::{Arc, Mutex};

use weekly_todos::mock_behaviour::MockBehaviour;
use weekly_todos::mock_store::MockStore;
use weekly_todos::{Day, Task, TaskId, TodoSyncController};

/// Something a user does
pub enum Action {
    SelectDay(Day),
    Type(&'static str),
    Submit,
    Toggle(&'static str),
    Delete(&'static str),
    /// The next `n` calls of every kind will fail
    BreakStore(u32),
    /// Scripted failures are held back until `ReleaseFailures`
    HoldFailures,
    ReleaseFailures,
}

/// What is expected to be displayed after a scenario
pub struct ExpectedState {
    day: Day,
    /// Text and completion of every displayed task, in order
    tasks: Vec<(&'static str, bool)>,
    pending_input: &'static str,
}

pub struct Scenario {
    name: &'static str,
    store_content: Vec<Task>,
    actions: Vec<Action>,
    expected: ExpectedState,
}

fn task(id: &str, text: &str, day: Day, completed: bool) -> Task {
    Task::new(TaskId::from(id), text, day, completed)
}

pub fn scenarii() -> Vec<Scenario> {
    let week = vec![
        task("1", "laundry", Day::Mon, false),
        task("2", "groceries", Day::Mon, true),
        task("7", "x", Day::Tue, false),
        task("9", "gym", Day::Fri, false),
    ];

    vec![
        Scenario {
            name: "switch to tuesday",
            store_content: vec![task("7", "x", Day::Tue, false)],
            actions: vec![Action::SelectDay(Day::Tue)],
            expected: ExpectedState { day: Day::Tue, tasks: vec![("x", false)], pending_input: "" },
        },
        Scenario {
            name: "same listing twice",
            store_content: week.clone(),
            actions: vec![Action::SelectDay(Day::Mon), Action::SelectDay(Day::Mon)],
            expected: ExpectedState { day: Day::Mon, tasks: vec![("laundry", false), ("groceries", true)], pending_input: "" },
        },
        Scenario {
            name: "add, toggle and delete",
            store_content: week.clone(),
            actions: vec![
                Action::SelectDay(Day::Fri),
                Action::Type("buy milk"),
                Action::Submit,
                Action::Toggle("9"),
                Action::Type("call the plumber"),
                Action::Submit,
                Action::Delete("9"),
            ],
            expected: ExpectedState { day: Day::Fri, tasks: vec![("buy milk", false), ("call the plumber", false)], pending_input: "" },
        },
        Scenario {
            name: "store is down",
            store_content: week.clone(),
            actions: vec![
                Action::BreakStore(1),
                Action::SelectDay(Day::Tue),
                Action::Type("buy milk"),
                Action::Submit,
                Action::Toggle("1"),
                Action::Delete("2"),
            ],
            expected: ExpectedState { day: Day::Tue, tasks: vec![("laundry", false), ("groceries", true)], pending_input: "buy milk" },
        },
        Scenario {
            name: "failures held back",
            store_content: week.clone(),
            actions: vec![
                Action::BreakStore(1),
                Action::HoldFailures,
                Action::Type("buy milk"),
                Action::Submit,
                Action::ReleaseFailures,
                Action::Toggle("1"),
                Action::Type("walk the dog"),
                Action::Submit,
            ],
            expected: ExpectedState { day: Day::Mon, tasks: vec![("laundry", false), ("groceries", true), ("buy milk", false)], pending_input: "walk the dog" },
        },
        Scenario {
            name: "store comes back",
            store_content: week,
            actions: vec![
                Action::BreakStore(1),
                Action::Type("buy milk"),
                Action::Submit,
                Action::Submit,
                Action::Toggle("2"),
                Action::Toggle("2"),
            ],
            expected: ExpectedState { day: Day::Mon, tasks: vec![("laundry", false), ("groceries", false), ("buy milk", false)], pending_input: "" },
        },
    ]
}

async fn run(scenario: &Scenario) {
    println!("Running scenario {:?}", scenario.name);

    let behaviour = Arc::new(Mutex::new(MockBehaviour::new()));
    let store = MockStore::with_behaviour(behaviour.clone());
    for task in &scenario.store_content {
        store.insert(task.clone());
    }

    let controller = TodoSyncController::new(store);
    assert!(controller.initialize().await);

    for action in &scenario.actions {
        match action {
            Action::SelectDay(day) => { controller.load_day(*day).await; },
            Action::Type(text) => controller.set_pending_input(*text),
            Action::Submit => { controller.submit().await; },
            Action::Toggle(id) => { controller.toggle(&TaskId::from(*id)).await; },
            Action::Delete(id) => { controller.delete_task(&TaskId::from(*id)).await; },
            Action::BreakStore(n) => *behaviour.lock().unwrap() = MockBehaviour::fail_now(*n),
            Action::HoldFailures => behaviour.lock().unwrap().suspend(),
            Action::ReleaseFailures => behaviour.lock().unwrap().resume(),
        }
        assert!(controller.state().is_loading() == false);
    }

    let state = controller.state();
    let displayed: Vec<(&str, bool)> = state.tasks().iter()
        .map(|task| (task.text(), task.completed()))
        .collect();
    assert_eq!(state.selected_day(), scenario.expected.day, "in scenario {:?}", scenario.name);
    assert_eq!(displayed, scenario.expected.tasks, "in scenario {:?}", scenario.name);
    assert_eq!(state.pending_input(), scenario.expected.pending_input, "in scenario {:?}", scenario.name);
}

#[tokio::test]
async fn test_scenarii() {
    let _ = env_logger::builder().is_test(true).try_init();

    for scenario in scenarii() {
        run(&scenario).await;
    }
}

#[tokio::test]
async fn concurrent_operations_apply_to_the_latest_state() {
    let _ = env_logger::builder().is_test(true).try_init();

    let store = MockStore::new();
    store.insert(task("1", "laundry", Day::Mon, false));
    store.insert(task("2", "groceries", Day::Mon, false));
    let controller = TodoSyncController::new(store);
    controller.initialize().await;

    let id1 = TaskId::from("1");
    let id2 = TaskId::from("2");
    let (toggled, deleted) = tokio::join!(
        controller.toggle(&id1),
        controller.delete_task(&id2),
    );
    assert!(toggled && deleted);

    let state = controller.state();
    assert_eq!(state.tasks(), &[task("1", "laundry", Day::Mon, true)][..]);
    assert_eq!(controller.store().tasks_of(Day::Mon), state.tasks());
}
