use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single entry of the `errors` array in a GraphQL response.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct GraphQLError {
    /// Human readable error message produced by the server.
    pub message: String,
    /// Path of the field that failed, when the server reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<serde_json::Value>>,
}

impl GraphQLError {
    /// Creates an error carrying only a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            path: None,
        }
    }
}

impl std::fmt::Display for GraphQLError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Failure to turn a GraphQL response envelope into operation data.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ResponseError {
    /// The server answered with one or more entries in `errors`.
    #[error("{}", join_messages(.0))]
    GraphQL(Vec<GraphQLError>),
    /// The server answered without `data` and without `errors`.
    #[error("response contained no data")]
    MissingData,
}

fn join_messages(errors: &[GraphQLError]) -> String {
    errors
        .iter()
        .map(|error| error.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
