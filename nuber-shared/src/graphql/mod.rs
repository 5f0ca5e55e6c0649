//! GraphQL transport envelopes and the typed operation seam.
//!
//! Every query or mutation the client sends is a type implementing
//! [`Operation`]. The transport only ever sees a [`GraphQLRequest`] going out
//! and a [`GraphQLResponse`] coming back.

pub mod operations;

use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::models::{GraphQLError, ResponseError};

/// A named GraphQL document with typed variables and response data.
pub trait Operation {
    /// Variables sent alongside the document.
    type Variables: Serialize;
    /// Shape of the `data` member of a successful response.
    type Data: DeserializeOwned;

    /// Operation name declared in [`Operation::DOCUMENT`].
    const NAME: &'static str;
    /// Full document text, fragments included.
    const DOCUMENT: &'static str;
}

/// Wraps a single input object as `{ "input": ... }`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Input<T> {
    /// The operation's input object.
    pub input: T,
}

impl<T> Input<T> {
    /// Wrap `input`.
    pub fn new(input: T) -> Self {
        Self { input }
    }
}

/// Variables for operations that take none; serializes as `{}`.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct NoVariables {}

/// HTTP body posted to the GraphQL endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQLRequest<V> {
    /// Operation to execute within `query`.
    pub operation_name: &'static str,
    /// Document text.
    pub query: &'static str,
    /// Operation variables.
    pub variables: V,
}

impl<V: Serialize> GraphQLRequest<V> {
    /// Build the request body for operation `O`.
    pub fn new<O>(variables: V) -> Self
    where
        O: Operation<Variables = V>,
    {
        Self {
            operation_name: O::NAME,
            query: O::DOCUMENT,
            variables,
        }
    }
}

/// HTTP body returned by the GraphQL endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQLResponse<D> {
    /// Operation data; absent when execution failed entirely.
    #[serde(default = "Option::default")]
    pub data: Option<D>,
    /// Field or request errors.
    #[serde(default)]
    pub errors: Vec<GraphQLError>,
}

impl<D> GraphQLResponse<D> {
    /// Reduce the envelope to its data.
    ///
    /// Any reported error fails the whole operation, even when partial data
    /// came back with it.
    ///
    /// # Errors
    ///
    /// [`ResponseError::GraphQL`] when `errors` is non-empty and
    /// [`ResponseError::MissingData`] when `data` is absent.
    pub fn into_result(self) -> Result<D, ResponseError> {
        if !self.errors.is_empty() {
            return Err(ResponseError::GraphQL(self.errors));
        }
        self.data.ok_or(ResponseError::MissingData)
    }
}
