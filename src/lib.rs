//! This crate mirrors a weekday-scoped to-do list that lives in a remote REST store.
//!
//! Tasks belong to one of the seven [`Day`]s. A client only ever displays the tasks of one day at a time.
//!
//! The remote store is abstracted by the [`TodoStore`](traits::TodoStore) trait. This crate provides an HTTP implementation of it in the [`client`] module.
//!
//! A [`TodoSyncController`] owns the [`ClientState`] that a view renders (selected day, tasks of this day, content of the add-task field, loading flag).
//! Every change goes through the store first: the local state is only updated from the store responses, never speculatively. \
//! The reconciliation itself is made of pure functions, in the [`state`] module.

pub mod traits;

mod day;
pub use day::Day;
mod task;
pub use task::{Task, TaskId};
pub mod state;
pub use state::ClientState;
pub mod controller;
pub use controller::TodoSyncController;

pub mod client;
pub mod config;
pub use config::Config;

pub mod utils;

pub mod mock_behaviour;
pub mod mock_store;
