//! This module provides a client to connect to the remote to-do store over HTTP

use std::error::Error;

use async_trait::async_trait;
use reqwest::Response;
use url::Url;

use crate::config::Config;
use crate::day::Day;
use crate::task::{CompletionUpdate, NewTask, Task, TaskId};
use crate::traits::TodoStore;


/// A [`TodoStore`] that talks to a REST server
pub struct Client {
    base_url: Url,
    http: reqwest::Client,
}

impl Client {
    /// Create a client. This does not start a connection
    pub fn new(config: &Config) -> Self {
        Self {
            base_url: config.api_url().clone(),
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build the URL of an endpoint, e.g. `["todos", "mon"]` gives `<base>/todos/mon`
    fn endpoint(&self, segments: &[&str]) -> Result<Url, Box<dyn Error + Send + Sync>> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| format!("{} cannot be used as a base URL", self.base_url))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

fn check_status(response: Response) -> Result<Response, Box<dyn Error + Send + Sync>> {
    if response.status().is_success() == false {
        return Err(format!("Unexpected HTTP status code {:?} (request was {})", response.status(), response.url()).into());
    }
    Ok(response)
}

#[async_trait]
impl TodoStore for Client {
    async fn load_day(&self, day: Day) -> Result<Vec<Task>, Box<dyn Error + Send + Sync>> {
        let url = self.endpoint(&["todos", day.as_str()])?;
        let response = self.http.get(url).send().await?;
        let tasks: Vec<Task> = check_status(response)?.json().await?;
        log::debug!("Store returned {} tasks for {}", tasks.len(), day);
        Ok(tasks)
    }

    async fn create_task(&self, text: &str, day: Day) -> Result<Task, Box<dyn Error + Send + Sync>> {
        let url = self.endpoint(&["todos"])?;
        let response = self.http.post(url)
            .json(&NewTask{ text, day })
            .send()
            .await?;
        let task: Task = check_status(response)?.json().await?;
        log::debug!("Store created task {}", task.id());
        Ok(task)
    }

    async fn set_completed(&self, id: &TaskId, completed: bool) -> Result<(), Box<dyn Error + Send + Sync>> {
        let url = self.endpoint(&["todos", id.as_str()])?;
        let response = self.http.put(url)
            .json(&CompletionUpdate{ completed })
            .send()
            .await?;
        // The response body is not used
        check_status(response)?;
        Ok(())
    }

    async fn delete_task(&self, id: &TaskId) -> Result<(), Box<dyn Error + Send + Sync>> {
        let url = self.endpoint(&["todos", id.as_str()])?;
        let response = self.http.delete(url).send().await?;
        check_status(response)?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn endpoints() {
        let client = Client::new(&Config::new("http://localhost:5000").unwrap());
        assert_eq!(client.endpoint(&["todos", "mon"]).unwrap().as_str(), "http://localhost:5000/todos/mon");

        let client = Client::new(&Config::new("https://example.com/api/").unwrap());
        assert_eq!(client.endpoint(&["todos"]).unwrap().as_str(), "https://example.com/api/todos");

        // IDs are percent-encoded as a single segment
        let client = Client::new(&Config::new("https://example.com/api").unwrap());
        assert_eq!(client.endpoint(&["todos", "a/b"]).unwrap().as_str(), "https://example.com/api/todos/a%2Fb");
    }
}
