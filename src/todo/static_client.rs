//! Fixed-data implementation of the todo API client.

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};

use crate::todo::client::TodoService;
use crate::todo::types::{Todo, TodoClientError, TodoDraft};

/// Todo client for local runs without an upstream.
///
/// Every operation succeeds with fixed data; mutations are dropped.
pub struct StaticTodoClient;

fn fixture_datetime(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(12, 0, 0))
        .expect("fixture datetime is valid")
}

fn example_one() -> Todo {
    Todo {
        id: 1,
        description: "Example 1".into(),
        completed: true,
        deadline: fixture_datetime(2025, 10, 1),
        created_at: fixture_datetime(2025, 9, 1),
    }
}

fn example_two() -> Todo {
    Todo {
        id: 2,
        description: "Example 2".into(),
        completed: false,
        deadline: fixture_datetime(2025, 10, 2),
        created_at: fixture_datetime(2025, 9, 2),
    }
}

#[async_trait]
impl TodoService for StaticTodoClient {
    async fn search(&self, _keyword: &str) -> Result<Vec<Todo>, TodoClientError> {
        Ok(vec![example_two(), example_one()])
    }

    async fn fetch(&self, _id: u32) -> Result<Option<Todo>, TodoClientError> {
        Ok(Some(example_one()))
    }

    async fn create(&self, _draft: &TodoDraft) -> Result<String, TodoClientError> {
        Ok("/api/todos/4".to_string())
    }

    async fn update(&self, _id: u32, _draft: &TodoDraft) -> Result<(), TodoClientError> {
        Ok(())
    }

    async fn remove(&self, _id: u32) -> Result<(), TodoClientError> {
        Ok(())
    }
}
