use std::error::Error;

use async_trait::async_trait;

use crate::day::Day;
use crate::task::{Task, TaskId};

/// A remote to-do store, which is the authoritative source of truth for tasks.
///
/// Every call is a single round trip. Implementors must not retry on their own, and must report
/// any failure (network error, non-success status, malformed payload) as an `Err`.
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// Returns the tasks of a given day, in the order the store lists them
    async fn load_day(&self, day: Day) -> Result<Vec<Task>, Box<dyn Error + Send + Sync>>;

    /// Creates a task, and returns it as stored (i.e. with its newly assigned ID)
    async fn create_task(&self, text: &str, day: Day) -> Result<Task, Box<dyn Error + Send + Sync>>;

    /// Sets the completion flag of a task
    async fn set_completed(&self, id: &TaskId, completed: bool) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Deletes a task
    async fn delete_task(&self, id: &TaskId) -> Result<(), Box<dyn Error + Send + Sync>>;
}
