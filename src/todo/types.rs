//! Todo API wire types and error definitions.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A todo item as returned by the upstream service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: u32,
    pub description: String,
    pub completed: bool,
    pub deadline: NaiveDateTime,
    pub created_at: NaiveDateTime,
}

/// Payload for creating or updating a todo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoDraft {
    pub description: String,

    /// Omitted from the JSON body when unset, per the upstream contract.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,

    pub deadline: NaiveDateTime,
}

/// Errors that can occur talking to the todo API.
#[derive(Debug, Error)]
pub enum TodoClientError {
    /// The referenced todo does not exist upstream.
    #[error("todo {0} does not exist")]
    NotFound(u32),

    /// Transport-level failure (connect, timeout, decode).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The upstream answered with a status the client does not handle.
    #[error("unexpected status {0}")]
    UnexpectedStatus(reqwest::StatusCode),

    /// A created resource came back without a Location header.
    #[error("missing Location header in create response")]
    MissingLocation,
}
