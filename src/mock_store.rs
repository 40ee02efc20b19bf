//! An in-memory [`TodoStore`], that mocks a remote store in tests
#![cfg(any(test, feature = "mock_store"))]

use std::collections::HashMap;
use std::error::Error;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::day::Day;
use crate::mock_behaviour::MockBehaviour;
use crate::task::{Task, TaskId};
use crate::traits::TodoStore;

/// A call that has been made to a [`MockStore`]
#[derive(Clone, Debug, PartialEq)]
pub enum StoreCall {
    LoadDay(Day),
    CreateTask{ text: String, day: Day },
    SetCompleted{ id: TaskId, completed: bool },
    DeleteTask(TaskId),
}

/// A store that keeps its tasks in memory.
///
/// It records every call it receives, can be told to fail some of them (see [`MockBehaviour`]),
/// and can delay some listings or creations, to simulate slow responses.
#[derive(Default)]
pub struct MockStore {
    tasks: Mutex<Vec<Task>>,
    calls: Mutex<Vec<StoreCall>>,
    load_latencies: Mutex<HashMap<Day, Duration>>,
    create_latency: Mutex<Option<Duration>>,
    mock_behaviour: Option<Arc<Mutex<MockBehaviour>>>,
}

impl MockStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_behaviour(mock_behaviour: Arc<Mutex<MockBehaviour>>) -> Self {
        Self {
            mock_behaviour: Some(mock_behaviour),
            ..Self::default()
        }
    }

    /// Put a task into the store, as if someone else had created it
    pub fn insert(&self, task: Task) {
        self.tasks.lock().unwrap().push(task);
    }

    /// The tasks of a day, as currently stored
    pub fn tasks_of(&self, day: Day) -> Vec<Task> {
        self.tasks.lock().unwrap().iter()
            .filter(|task| task.day() == day)
            .cloned()
            .collect()
    }

    /// Every call received so far, in the order they have been issued
    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Delay every listing of `day` by `latency`
    pub fn set_load_latency(&self, day: Day, latency: Duration) {
        self.load_latencies.lock().unwrap().insert(day, latency);
    }

    /// Delay every creation by `latency`
    pub fn set_create_latency(&self, latency: Duration) {
        *self.create_latency.lock().unwrap() = Some(latency);
    }

    fn record(&self, call: StoreCall) {
        log::trace!("Mock store received {:?}", call);
        self.calls.lock().unwrap().push(call);
    }

    fn behaviour<F>(&self, check: F) -> Result<(), Box<dyn Error + Send + Sync>>
    where
        F: FnOnce(&mut MockBehaviour) -> Result<(), Box<dyn Error + Send + Sync>>,
    {
        match &self.mock_behaviour {
            None => Ok(()),
            Some(behaviour) => check(&mut *behaviour.lock().unwrap()),
        }
    }
}

#[async_trait]
impl TodoStore for MockStore {
    async fn load_day(&self, day: Day) -> Result<Vec<Task>, Box<dyn Error + Send + Sync>> {
        self.record(StoreCall::LoadDay(day));
        let latency = self.load_latencies.lock().unwrap().get(&day).copied();
        if let Some(latency) = latency {
            tokio::time::sleep(latency).await;
        }
        self.behaviour(MockBehaviour::can_load_day)?;
        Ok(self.tasks_of(day))
    }

    async fn create_task(&self, text: &str, day: Day) -> Result<Task, Box<dyn Error + Send + Sync>> {
        self.record(StoreCall::CreateTask{ text: text.to_string(), day });
        let latency = *self.create_latency.lock().unwrap();
        if let Some(latency) = latency {
            tokio::time::sleep(latency).await;
        }
        self.behaviour(MockBehaviour::can_create_task)?;
        let task = Task::new(TaskId::random(), text, day, false);
        self.insert(task.clone());
        Ok(task)
    }

    async fn set_completed(&self, id: &TaskId, completed: bool) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.record(StoreCall::SetCompleted{ id: id.clone(), completed });
        self.behaviour(MockBehaviour::can_update_task)?;
        let mut tasks = self.tasks.lock().unwrap();
        match tasks.iter_mut().find(|task| task.id() == id) {
            None => Err(format!("No task with ID {}", id).into()),
            Some(task) => {
                task.set_completed(completed);
                Ok(())
            },
        }
    }

    async fn delete_task(&self, id: &TaskId) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.record(StoreCall::DeleteTask(id.clone()));
        self.behaviour(MockBehaviour::can_delete_task)?;
        let mut tasks = self.tasks.lock().unwrap();
        let n_before = tasks.len();
        tasks.retain(|task| task.id() != id);
        if tasks.len() == n_before {
            return Err(format!("No task with ID {}", id).into());
        }
        Ok(())
    }
}
