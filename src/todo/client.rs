//! HTTP implementation of the todo API client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, StatusCode};

use crate::config::UpstreamConfig;
use crate::todo::types::{Todo, TodoClientError, TodoDraft};

/// Operations offered by the upstream todo service.
#[async_trait]
pub trait TodoService: Send + Sync {
    /// Fetch todos whose description matches the keyword.
    async fn search(&self, keyword: &str) -> Result<Vec<Todo>, TodoClientError>;

    /// Fetch a single todo. A missing todo is `None`, not an error.
    async fn fetch(&self, id: u32) -> Result<Option<Todo>, TodoClientError>;

    /// Register a new todo and return its Location.
    async fn create(&self, draft: &TodoDraft) -> Result<String, TodoClientError>;

    /// Replace an existing todo. A missing todo is an error.
    async fn update(&self, id: u32, draft: &TodoDraft) -> Result<(), TodoClientError>;

    /// Delete an existing todo. A missing todo is an error.
    async fn remove(&self, id: u32) -> Result<(), TodoClientError>;
}

/// Todo client talking to the real upstream over HTTP.
pub struct HttpTodoClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTodoClient {
    /// Build a client against a base URL with explicit timeouts.
    pub fn new(
        base_url: impl Into<String>,
        connect_timeout: Duration,
        read_timeout: Duration,
    ) -> Result<Self, TodoClientError> {
        let client = reqwest::Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(read_timeout)
            .build()?;

        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Ok(Self { client, base_url })
    }

    /// Build a client from the relay's upstream configuration.
    pub fn from_config(config: &UpstreamConfig) -> Result<Self, TodoClientError> {
        Self::new(
            &config.base_url,
            Duration::from_millis(config.connect_timeout_ms),
            Duration::from_millis(config.read_timeout_ms),
        )
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl TodoService for HttpTodoClient {
    async fn search(&self, keyword: &str) -> Result<Vec<Todo>, TodoClientError> {
        let response = self
            .client
            .get(self.url("/api/todos"))
            .query(&[("keyword", keyword)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TodoClientError::UnexpectedStatus(status));
        }
        Ok(response.json().await?)
    }

    async fn fetch(&self, id: u32) -> Result<Option<Todo>, TodoClientError> {
        let response = self
            .client
            .get(self.url(&format!("/api/todos/{}", id)))
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(TodoClientError::UnexpectedStatus(status));
        }
        Ok(Some(response.json().await?))
    }

    async fn create(&self, draft: &TodoDraft) -> Result<String, TodoClientError> {
        let response = self
            .client
            .post(self.url("/api/todos"))
            .json(draft)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TodoClientError::UnexpectedStatus(status));
        }
        response
            .headers()
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned)
            .ok_or(TodoClientError::MissingLocation)
    }

    async fn update(&self, id: u32, draft: &TodoDraft) -> Result<(), TodoClientError> {
        let response = self
            .client
            .put(self.url(&format!("/api/todos/{}", id)))
            .json(draft)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(TodoClientError::NotFound(id));
        }
        if !status.is_success() {
            return Err(TodoClientError::UnexpectedStatus(status));
        }
        Ok(())
    }

    async fn remove(&self, id: u32) -> Result<(), TodoClientError> {
        let response = self
            .client
            .delete(self.url(&format!("/api/todos/{}", id)))
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(TodoClientError::NotFound(id));
        }
        if !status.is_success() {
            return Err(TodoClientError::UnexpectedStatus(status));
        }
        Ok(())
    }
}
