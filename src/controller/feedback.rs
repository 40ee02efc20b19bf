//! Utilities to let a view follow what the controller does

use std::fmt::{Display, Error, Formatter};

use crate::day::Day;
use crate::state::ClientState;
use crate::task::TaskId;

/// One of the operations that round-trip to the remote store
#[derive(Clone, Debug, PartialEq)]
pub enum Operation {
    LoadDay(Day),
    CreateTask,
    ToggleTask(TaskId),
    DeleteTask(TaskId),
}

impl Display for Operation {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        match self {
            Operation::LoadDay(day) => write!(f, "load the tasks of {}", day),
            Operation::CreateTask => write!(f, "create a task"),
            Operation::ToggleTask(id) => write!(f, "toggle task {}", id),
            Operation::DeleteTask(id) => write!(f, "delete task {}", id),
        }
    }
}

/// An event that a controller publishes
#[derive(Clone, Debug, PartialEq)]
pub enum ControllerEvent {
    /// Nothing has happened yet
    NotStarted,
    /// The client state has changed, and should be rendered again
    StateChanged(ClientState),
    /// A call to the remote store has failed. The client state has been left as it was
    OperationFailed{ operation: Operation, reason: String },
}

impl Display for ControllerEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        match self {
            ControllerEvent::NotStarted => write!(f, "Not started"),
            ControllerEvent::StateChanged(state) => match state.is_loading() {
                true => write!(f, "[{}] loading...", state.selected_day()),
                false => write!(f, "[{}] {} tasks", state.selected_day(), state.tasks().len()),
            },
            ControllerEvent::OperationFailed{operation, reason} => write!(f, "Unable to {}: {}", operation, reason),
        }
    }
}

impl Default for ControllerEvent {
    fn default() -> Self {
        Self::NotStarted
    }
}



/// See [`feedback_channel`]
pub type FeedbackSender = tokio::sync::watch::Sender<ControllerEvent>;
/// See [`feedback_channel`]
pub type FeedbackReceiver = tokio::sync::watch::Receiver<ControllerEvent>;

/// Create a feedback channel, that can be used to follow the state of a controller
pub fn feedback_channel() -> (FeedbackSender, FeedbackReceiver) {
    tokio::sync::watch::channel(ControllerEvent::default())
}



/// Logs what happens to a controller, and forwards it to the listeners (if any)
pub struct Feedback {
    channel: FeedbackSender,
}

impl Feedback {
    pub fn new() -> Self {
        let (channel, _) = feedback_channel();
        Self { channel }
    }

    /// Get a new listener
    pub fn subscribe(&self) -> FeedbackReceiver {
        self.channel.subscribe()
    }

    /// Publish a new state
    pub fn state_changed(&self, state: ClientState) {
        log::trace!("State is now {:?}", state);
        self.send(ControllerEvent::StateChanged(state));
    }

    /// Log a failed call, and publish it
    pub fn failed<E: Display + ?Sized>(&self, operation: Operation, reason: &E) {
        log::warn!("Unable to {}: {}", operation, reason);
        self.send(ControllerEvent::OperationFailed{ operation, reason: reason.to_string() });
    }

    fn send(&self, event: ControllerEvent) {
        // The value is kept even when nobody is listening yet
        self.channel.send_replace(event);
    }
}

impl Default for Feedback {
    fn default() -> Self {
        Self::new()
    }
}
