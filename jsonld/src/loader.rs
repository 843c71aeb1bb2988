//! Document loaders, used to retrieve remote JSON-LD contexts.
//!
//! This crate performs no network or file access by itself:
//! a parser only sees the remote contexts that its [`ContextLoader`] provides.
use std::collections::HashMap;

use futures_util::future::{BoxFuture, FutureExt};
use serde_json::Value;

use crate::error::JsonLdError;

/// A context loader retrieves the JSON document identified by an IRI.
pub trait ContextLoader: Send + Sync {
    /// Retrieve the document identified by `iri`.
    fn load<'a>(&'a self, iri: &'a str) -> BoxFuture<'a, Result<Value, JsonLdError>>;
}

/// A loader that fails on every IRI.
///
/// This is the default loader of [`JsonLdOptions`](crate::JsonLdOptions).
#[derive(Clone, Copy, Debug, Default)]
pub struct NoLoader;

impl ContextLoader for NoLoader {
    fn load<'a>(&'a self, iri: &'a str) -> BoxFuture<'a, Result<Value, JsonLdError>> {
        futures_util::future::ready(Err(JsonLdError::LoadingDocumentFailed {
            iri: iri.to_string(),
            message: "no document loader configured".into(),
        }))
        .boxed()
    }
}

/// A loader serving a fixed set of documents from memory.
#[derive(Clone, Debug, Default)]
pub struct StaticLoader {
    docs: HashMap<String, Value>,
}

impl StaticLoader {
    /// Build an empty static loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `doc` for `iri`.
    pub fn with<T: Into<String>>(mut self, iri: T, doc: Value) -> Self {
        self.docs.insert(iri.into(), doc);
        self
    }

    /// Serve the JSON text `doc` for `iri`.
    pub fn with_str<T: Into<String>>(self, iri: T, doc: &str) -> Result<Self, JsonLdError> {
        let doc = serde_json::from_str(doc)?;
        Ok(self.with(iri, doc))
    }
}

impl ContextLoader for StaticLoader {
    fn load<'a>(&'a self, iri: &'a str) -> BoxFuture<'a, Result<Value, JsonLdError>> {
        let res = self
            .docs
            .get(iri)
            .cloned()
            .ok_or_else(|| JsonLdError::LoadingDocumentFailed {
                iri: iri.to_string(),
                message: "unknown document".into(),
            });
        futures_util::future::ready(res).boxed()
    }
}

/// A loader delegating to an async function returning the text of the document.
///
/// This is how a network or file loader is plugged into the parser.
pub struct ClosureLoader<F> {
    f: F,
}

impl<F> ClosureLoader<F>
where
    F: Fn(String) -> BoxFuture<'static, Result<String, String>> + Send + Sync,
{
    /// Build a loader from `f`, which receives the IRI of the document to load,
    /// and resolves to either its text or an error message.
    pub fn new(f: F) -> Self {
        ClosureLoader { f }
    }
}

impl<F> ContextLoader for ClosureLoader<F>
where
    F: Fn(String) -> BoxFuture<'static, Result<String, String>> + Send + Sync,
{
    fn load<'a>(&'a self, iri: &'a str) -> BoxFuture<'a, Result<Value, JsonLdError>> {
        let fut = (self.f)(iri.to_string());
        async move {
            let text = fut
                .await
                .map_err(|message| JsonLdError::LoadingDocumentFailed {
                    iri: iri.to_string(),
                    message,
                })?;
            Ok(serde_json::from_str(&text)?)
        }
        .boxed()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn no_loader_fails() {
        let err = NoLoader.load("urn:test").await.unwrap_err();
        assert!(matches!(err, JsonLdError::LoadingDocumentFailed { .. }));
        assert!(err.to_string().contains("urn:test"));
    }

    #[tokio::test]
    async fn static_loader() -> Result<(), JsonLdError> {
        let loader = StaticLoader::new()
            .with("urn:a", json!({"@context": {}}))
            .with_str("urn:b", r#"{"@context": {"x": "tag:x"}}"#)?;
        assert_eq!(loader.load("urn:a").await?, json!({"@context": {}}));
        assert_eq!(loader.load("urn:b").await?["@context"]["x"], "tag:x");
        assert!(loader.load("urn:c").await.is_err());
        Ok(())
    }

    #[tokio::test]
    async fn closure_loader() {
        let loader = ClosureLoader::new(|iri: String| {
            async move {
                if iri == "urn:ok" {
                    Ok(r#"{"@context": {}}"#.to_string())
                } else {
                    Err(format!("cannot fetch {iri}"))
                }
            }
            .boxed()
        });
        assert!(loader.load("urn:ok").await.is_ok());
        let err = loader.load("urn:ko").await.unwrap_err();
        assert!(err.to_string().contains("cannot fetch urn:ko"));
    }
}
