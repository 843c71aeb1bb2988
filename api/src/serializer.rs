//! API for serializing RDF syntaxes.
//!
//! As for [parsers](crate::parser), serializer backends come in three native styles:
//! [`SyncSerializer`], [`CallbackSerializer`] and [`AsyncSerializer`].
//! They all turn a [`Graph`] into a string, or fail with a [`SerializeError`].
use crate::graph::Graph;
use futures_util::future::BoxFuture;
use thiserror::Error;

/// A serializer backend returning its result synchronously.
pub trait SyncSerializer: Send + Sync {
    /// Serialize `graph` into a string.
    fn serialize(&self, graph: &Graph) -> Result<String, SerializeError>;
}

/// The one-shot completion callback of a [`CallbackSerializer`].
pub type SerializeCallback = Box<dyn FnOnce(Result<String, SerializeError>) + Send>;

/// A serializer backend reporting its result through a completion callback.
pub trait CallbackSerializer: Send + Sync {
    /// Serialize `graph` into a string, and call `done` with the result.
    ///
    /// Implementations are expected to call `done` exactly once, from any thread.
    fn serialize_with(&self, graph: Graph, done: SerializeCallback);
}

/// A serializer backend returning a future.
pub trait AsyncSerializer: Send + Sync {
    /// Serialize `graph` into a string.
    fn serialize<'a>(&'a self, graph: &'a Graph) -> BoxFuture<'a, Result<String, SerializeError>>;
}

/// The error raised by serializer backends.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct SerializeError {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
}

impl SerializeError {
    /// Build a serialization error with the given message.
    pub fn new<M: Into<String>>(message: M) -> Self {
        SerializeError {
            message: message.into(),
            source: None,
        }
    }

    /// Build a serialization error from an underlying error, reusing its message.
    pub fn with_source<E>(source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        SerializeError {
            message: source.to_string(),
            source: Some(Box::new(source)),
        }
    }

    /// The message of this error, as reported by the backend.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<std::io::Error> for SerializeError {
    fn from(other: std::io::Error) -> Self {
        SerializeError::with_source(other)
    }
}
