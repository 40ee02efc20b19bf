//! This module keeps the client state in line with the remote store
//!
//! Every operation issues exactly one call to the store, waits for it, and only then reconciles the local state from the response.
//! Nothing is applied speculatively: a failed call leaves the state as it was.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::day::Day;
use crate::state::{self, ClientState};
use crate::task::TaskId;
use crate::traits::TodoStore;

pub mod feedback;
use feedback::{Feedback, FeedbackReceiver, Operation};


/// Mirrors the tasks of the selected day, and mediates every change through a [`TodoStore`].
///
/// Cloning a controller gives another handle to the same state, so that several operations can be in flight at the same time
/// (e.g. toggling a task while a listing is still loading). Each operation applies its result to the state that is current when
/// its response comes back, so the last one to complete wins.
pub struct TodoSyncController<S>
where
    S: TodoStore,
{
    store: Arc<S>,
    state: Arc<Mutex<ClientState>>,
    feedback: Arc<Feedback>,
}

impl<S> Clone for TodoSyncController<S>
where
    S: TodoStore,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            state: Arc::clone(&self.state),
            feedback: Arc::clone(&self.feedback),
        }
    }
}

impl<S> TodoSyncController<S>
where
    S: TodoStore,
{
    /// Create a controller. This does not contact the store, see [`Self::initialize`]
    pub fn new(store: S) -> Self {
        Self::with_shared_store(Arc::new(store))
    }

    /// Create a controller over a store that the caller keeps a handle to
    pub fn with_shared_store(store: Arc<S>) -> Self {
        Self {
            store,
            state: Arc::new(Mutex::new(ClientState::new())),
            feedback: Arc::new(Feedback::new()),
        }
    }

    /// Returns the store this controller talks to
    pub fn store(&self) -> &S {
        &self.store
    }

    /// A snapshot of the current state, to be rendered
    pub fn state(&self) -> ClientState {
        self.lock_state().clone()
    }

    /// Get notified whenever the state changes or a call fails
    pub fn subscribe(&self) -> FeedbackReceiver {
        self.feedback.subscribe()
    }

    /// Load the tasks of the first day.
    /// This is meant to be called once, before any user interaction
    pub async fn initialize(&self) -> bool {
        log::info!("Initializing the task list");
        self.load_day(Day::default()).await
    }

    /// Select a day, and replace the task list with the tasks the store has for it.
    ///
    /// The selection switches at once, and `is_loading` stays true until the listing comes back.
    /// In case the listing fails, the previous task list is kept.
    /// If another day is selected before the listing comes back, its response is discarded.
    ///
    /// Returns whether the call to the store succeeded.
    pub async fn load_day(&self, day: Day) -> bool {
        let mut generation = 0;
        self.update(|prior| {
            let mut new_state = prior.clone();
            generation = new_state.begin_load(day);
            new_state
        });

        log::debug!("Loading tasks of {} (listing #{})", day, generation);
        match self.store.load_day(day).await {
            Ok(tasks) => {
                let n_tasks = tasks.len();
                let applied = self.update_listing(generation, |prior| {
                    let mut new_state = state::apply_load_result(prior, day, tasks);
                    new_state.end_load();
                    new_state
                });
                match applied {
                    true => log::info!("Loaded {} tasks for {}", n_tasks, day),
                    false => log::debug!("Discarding {} tasks of {}: another day has been selected since", n_tasks, day),
                }
                true
            },
            Err(err) => {
                let applied = self.update_listing(generation, |prior| {
                    let mut new_state = prior.clone();
                    new_state.end_load();
                    new_state
                });
                match applied {
                    true => self.feedback.failed(Operation::LoadDay(day), &err),
                    false => log::debug!("Ignoring a failed listing of {} ({}): another day has been selected since", day, err),
                }
                false
            },
        }
    }

    /// Load the tasks of the currently selected day again
    pub async fn refresh(&self) -> bool {
        let day = self.lock_state().selected_day();
        self.load_day(day).await
    }

    /// Change the content of the add-task field
    pub fn set_pending_input<T: Into<String>>(&self, text: T) {
        let text = text.into();
        self.update(|prior| {
            let mut new_state = prior.clone();
            new_state.set_pending_input(text);
            new_state
        });
    }

    /// Create a task out of the content of the add-task field
    pub async fn submit(&self) -> bool {
        let text = self.lock_state().pending_input().to_string();
        self.create_task(&text).await
    }

    /// Create a task for the selected day.
    ///
    /// Blank text is rejected without contacting the store.
    /// Once the store has created it, the task is appended to the list and the add-task field is cleared.
    /// In case of failure, the add-task field is kept, so that the user can try again.
    pub async fn create_task(&self, text: &str) -> bool {
        if ClientState::accepts_input(text) == false {
            log::debug!("Not creating a task with a blank text");
            return false;
        }
        let day = self.lock_state().selected_day();

        match self.store.create_task(text, day).await {
            Ok(task) => {
                log::info!("Created task {} for {}", task.id(), day);
                self.update(|prior| state::apply_create_result(prior, task));
                true
            },
            Err(err) => {
                self.feedback.failed(Operation::CreateTask, &err);
                false
            },
        }
    }

    /// Toggle the completion of a task, given the completion status that is currently displayed.
    ///
    /// The store is told about the negated status, and the displayed task gets this very value once the store has accepted it.
    pub async fn toggle_task(&self, id: &TaskId, current_completed: bool) -> bool {
        let completed = !current_completed;

        match self.store.set_completed(id, completed).await {
            Ok(()) => {
                log::debug!("Task {} is now {}", id, if completed { "completed" } else { "uncompleted" });
                self.update(|prior| state::apply_toggle_result(prior, id, completed));
                true
            },
            Err(err) => {
                self.feedback.failed(Operation::ToggleTask(id.clone()), &err);
                false
            },
        }
    }

    /// Toggle the completion of a displayed task.
    ///
    /// This does nothing (and returns `false`) if no such task is displayed
    pub async fn toggle(&self, id: &TaskId) -> bool {
        let current_completed = match self.lock_state().get_task(id) {
            None => {
                log::warn!("No task {} is displayed, not toggling it", id);
                return false;
            },
            Some(task) => task.completed(),
        };
        self.toggle_task(id, current_completed).await
    }

    /// Delete a task, and remove it from the list once the store has deleted it
    pub async fn delete_task(&self, id: &TaskId) -> bool {
        match self.store.delete_task(id).await {
            Ok(()) => {
                log::info!("Deleted task {}", id);
                self.update(|prior| state::apply_delete_result(prior, id));
                true
            },
            Err(err) => {
                self.feedback.failed(Operation::DeleteTask(id.clone()), &err);
                false
            },
        }
    }


    fn lock_state(&self) -> MutexGuard<'_, ClientState> {
        // The state is always left consistent, even if a panic happened while it was locked
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Replace the state with the result of `f`, and publish it
    fn update<F>(&self, f: F)
    where
        F: FnOnce(&ClientState) -> ClientState,
    {
        let snapshot = {
            let mut state = self.lock_state();
            let new_state = f(&*state);
            *state = new_state;
            state.clone()
        };
        self.feedback.state_changed(snapshot);
    }

    /// Same as [`Self::update`], unless a newer listing than `generation` has been started.
    /// The check and the replacement happen under the same lock.
    ///
    /// Returns whether the state has been replaced
    fn update_listing<F>(&self, generation: u64, f: F) -> bool
    where
        F: FnOnce(&ClientState) -> ClientState,
    {
        let snapshot = {
            let mut state = self.lock_state();
            if state.is_latest_load(generation) == false {
                return false;
            }
            let new_state = f(&*state);
            *state = new_state;
            state.clone()
        };
        self.feedback.state_changed(snapshot);
        true
    }
}
