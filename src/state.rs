//! The client-side state, and how it is reconciled from the remote store responses
//!
//! The `apply_*` functions are pure: they map a prior state and a successful response to the new state.
//! Failed calls are never applied, the prior state simply stays as is.

use chrono::{DateTime, Utc};

use crate::day::Day;
use crate::task::{Task, TaskId};

/// What the view renders
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClientState {
    selected_day: Day,
    tasks: Vec<Task>,
    pending_input: String,
    is_loading: bool,
    last_loaded: Option<DateTime<Utc>>,
    /// Incremented on every listing, so that the responses of superseded listings can be told apart
    load_generation: u64,
}

impl ClientState {
    /// The initial state: the first day is selected, and nothing is loaded yet
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_day(&self) -> Day            { self.selected_day }
    pub fn tasks(&self) -> &[Task]               { &self.tasks }
    pub fn pending_input(&self) -> &str          { &self.pending_input }
    pub fn is_loading(&self) -> bool             { self.is_loading }
    /// The last time a listing has been successfully reconciled (or None if it never happened)
    pub fn last_loaded(&self) -> Option<&DateTime<Utc>> { self.last_loaded.as_ref() }

    pub fn get_task(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    pub fn set_pending_input<S: Into<String>>(&mut self, text: S) {
        self.pending_input = text.into();
    }

    /// Switch to another day and mark a listing as in flight.
    /// The selection changes right away, the task list is replaced only once the listing comes back.
    ///
    /// Returns the generation of this listing, see [`Self::is_latest_load`]
    pub fn begin_load(&mut self, day: Day) -> u64 {
        self.selected_day = day;
        self.is_loading = true;
        self.load_generation += 1;
        self.load_generation
    }

    /// Whether no other listing has been started after the one of this generation
    pub fn is_latest_load(&self, generation: u64) -> bool {
        self.load_generation == generation
    }

    /// Mark the listing as settled, whatever its result
    pub fn end_load(&mut self) {
        self.is_loading = false;
    }

    /// Whether some text is worth sending to the store
    pub fn accepts_input(text: &str) -> bool {
        text.trim().is_empty() == false
    }
}

/// Replace the task list with a fresh listing of `day`.
///
/// This is a full replacement: the listing is kept as is, in the same order.
pub fn apply_load_result(prior: &ClientState, day: Day, tasks: Vec<Task>) -> ClientState {
    ClientState {
        selected_day: day,
        tasks,
        last_loaded: Some(Utc::now()),
        ..prior.clone()
    }
}

/// Append a task that the store has just created, and clear the input field.
///
/// A task that belongs to another day than the one currently displayed is not appended
/// (this happens when the day has been switched while the creation was in flight).
pub fn apply_create_result(prior: &ClientState, created: Task) -> ClientState {
    let mut new_state = ClientState {
        pending_input: String::new(),
        ..prior.clone()
    };
    if created.day() != prior.selected_day {
        log::debug!("Task {} belongs to {}, not to the displayed {}. Not showing it", created.id(), created.day(), prior.selected_day);
        return new_state;
    }
    if new_state.get_task(created.id()).is_some() {
        log::warn!("Task {} is already displayed. Ignoring the duplicate", created.id());
        return new_state;
    }
    new_state.tasks.push(created);
    new_state
}

/// Set the completion flag of a task to the value that has been sent to the store.
///
/// Other tasks are left untouched. This is a no-op if the task is not displayed.
pub fn apply_toggle_result(prior: &ClientState, id: &TaskId, completed: bool) -> ClientState {
    let mut new_state = prior.clone();
    for task in new_state.tasks.iter_mut().filter(|task| task.id() == id) {
        task.set_completed(completed);
    }
    new_state
}

/// Remove a task that the store has just deleted. The other tasks keep their order
pub fn apply_delete_result(prior: &ClientState, id: &TaskId) -> ClientState {
    let mut new_state = prior.clone();
    new_state.tasks.retain(|task| task.id() != id);
    new_state
}
