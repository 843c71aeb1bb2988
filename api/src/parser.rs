//! API for parsing RDF syntaxes.
//!
//! Parser backends come in three native styles,
//! each captured by a capability trait:
//! * [`SyncParser`] returns its result directly;
//! * [`CallbackParser`] hands its result to a one-shot completion callback,
//!   possibly from another thread;
//! * [`AsyncParser`] returns a future.
//!
//! All three styles take the text to parse and an optional base IRI,
//! and produce either a [`Graph`] or a [`ParseError`].
//! `rdfkit_adapter::ParserAdapter` drives any of them through a single async method.
use crate::graph::Graph;
use crate::term::InvalidTermError;
use futures_util::future::BoxFuture;
use thiserror::Error;

/// A parser backend returning its result synchronously.
pub trait SyncParser: Send + Sync {
    /// Parse `text` into a graph, resolving relative IRIs against `base` if provided.
    fn parse(&self, text: &str, base: Option<&str>) -> Result<Graph, ParseError>;
}

/// The one-shot completion callback of a [`CallbackParser`].
pub type ParseCallback = Box<dyn FnOnce(Result<Graph, ParseError>) + Send>;

/// A parser backend reporting its result through a completion callback.
pub trait CallbackParser: Send + Sync {
    /// Parse `text` into a graph, resolving relative IRIs against `base` if provided,
    /// and call `done` with the result.
    ///
    /// Implementations are expected to call `done` exactly once,
    /// from any thread, either before or after returning.
    fn parse_with(&self, text: String, base: Option<String>, done: ParseCallback);
}

/// A parser backend returning a future.
pub trait AsyncParser: Send + Sync {
    /// Parse `text` into a graph, resolving relative IRIs against `base` if provided.
    fn parse<'a>(
        &'a self,
        text: &'a str,
        base: Option<&'a str>,
    ) -> BoxFuture<'a, Result<Graph, ParseError>>;
}

/// The error raised by parser backends.
///
/// It carries the message of the backend intact,
/// and optionally the backend's own error value.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ParseError {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
}

impl ParseError {
    /// Build a parse error with the given message.
    pub fn new<M: Into<String>>(message: M) -> Self {
        ParseError {
            message: message.into(),
            source: None,
        }
    }

    /// Build a parse error from an underlying error, reusing its message.
    pub fn with_source<E>(source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        ParseError {
            message: source.to_string(),
            source: Some(Box::new(source)),
        }
    }

    /// The message of this error, as reported by the backend.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<InvalidTermError> for ParseError {
    fn from(other: InvalidTermError) -> Self {
        ParseError::with_source(other)
    }
}
