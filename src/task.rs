//! To-do tasks, as owned by the remote store and cached by the client

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::day::Day;

/// The identifier of a task.
///
/// It is assigned by the remote store and is opaque to this crate.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId {
    content: String,
}

impl TaskId {
    pub fn as_str(&self) -> &str {
        &self.content
    }

    /// Generate a random TaskId, the way a store would assign one
    #[cfg(any(test, feature = "mock_store"))]
    pub fn random() -> Self {
        let random = uuid::Uuid::new_v4().to_hyphenated().to_string();
        Self { content: random }
    }
}

impl From<String> for TaskId {
    fn from(content: String) -> Self {
        Self { content }
    }
}
impl From<&str> for TaskId {
    fn from(content: &str) -> Self {
        Self { content: content.to_string() }
    }
}

impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.content)
    }
}


/// A to-do task
///
/// Some stores are backed by a document database and name the identifier `_id`: both spellings are accepted when deserializing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(alias = "_id")]
    id: TaskId,
    text: String,
    day: Day,
    #[serde(default)]
    completed: bool,
}

impl Task {
    /// Build a task the way the remote store describes it
    pub fn new<T: ToString>(id: TaskId, text: T, day: Day, completed: bool) -> Self {
        Self { id, text: text.to_string(), day, completed }
    }

    pub fn id(&self) -> &TaskId   { &self.id        }
    pub fn text(&self) -> &str    { &self.text      }
    pub fn day(&self) -> Day      { self.day        }
    pub fn completed(&self) -> bool { self.completed }

    /// Set the completion flag.
    /// This only changes the local copy, the remote store is not contacted
    pub fn set_completed(&mut self, completed: bool) {
        self.completed = completed;
    }
}


/// The body of a create request
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewTask<'a> {
    pub text: &'a str,
    pub day: Day,
}

/// The body of a toggle request
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CompletionUpdate {
    pub completed: bool,
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn deserialize_task() {
        let task: Task = serde_json::from_str(r#"{"id":"7","text":"x","day":"tue","completed":false}"#).unwrap();
        assert_eq!(task, Task::new(TaskId::from("7"), "x", Day::Tue, false));

        // Document-store flavoured payload, with extra fields
        let task: Task = serde_json::from_str(r#"{"_id":"61f0","text":"buy milk","day":"fri","completed":true,"__v":0}"#).unwrap();
        assert_eq!(task.id().as_str(), "61f0");
        assert_eq!(task.day(), Day::Fri);
        assert!(task.completed());
    }

    #[test]
    fn serialize_task() {
        let task = Task::new(TaskId::from("1"), "buy milk", Day::Mon, false);
        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(value, serde_json::json!({"id": "1", "text": "buy milk", "day": "mon", "completed": false}));
    }

    #[test]
    fn request_bodies() {
        let body = serde_json::to_value(&NewTask{ text: "buy milk", day: Day::Wed }).unwrap();
        assert_eq!(body, serde_json::json!({"text": "buy milk", "day": "wed"}));

        let body = serde_json::to_value(&CompletionUpdate{ completed: true }).unwrap();
        assert_eq!(body, serde_json::json!({"completed": true}));
    }
}
