//! Uniform async wrapper around parser backends.
use std::fmt;
use std::sync::Arc;

use log::debug;
use rdfkit_api::graph::Graph;
use rdfkit_api::parser::{AsyncParser, CallbackParser, ParseError, SyncParser};
use tokio::sync::oneshot;

use crate::AdapterConfig;

#[derive(Clone)]
enum Backend {
    Sync(Arc<dyn SyncParser>),
    Callback(Arc<dyn CallbackParser>),
    Async(Arc<dyn AsyncParser>),
}

impl Backend {
    fn style(&self) -> &'static str {
        match self {
            Backend::Sync(_) => "sync",
            Backend::Callback(_) => "callback",
            Backend::Async(_) => "async",
        }
    }
}

/// Drives a parser backend of any style through a single async method.
///
/// Cloning an adapter is cheap, and clones share the same backend.
#[derive(Clone)]
pub struct ParserAdapter {
    backend: Backend,
    config: AdapterConfig,
    label: Arc<str>,
}

impl ParserAdapter {
    fn new(backend: Backend) -> Self {
        ParserAdapter {
            backend,
            config: AdapterConfig::default(),
            label: Arc::from("parser"),
        }
    }

    /// Wrap a synchronous parser backend.
    pub fn from_sync<P: SyncParser + 'static>(parser: P) -> Self {
        Self::new(Backend::Sync(Arc::new(parser)))
    }

    /// Wrap a callback-based parser backend.
    pub fn from_callback<P: CallbackParser + 'static>(parser: P) -> Self {
        Self::new(Backend::Callback(Arc::new(parser)))
    }

    /// Wrap an asynchronous parser backend.
    pub fn from_async<P: AsyncParser + 'static>(parser: P) -> Self {
        Self::new(Backend::Async(Arc::new(parser)))
    }

    /// Change the configuration of this adapter.
    pub fn with_config(mut self, config: AdapterConfig) -> Self {
        self.config = config;
        self
    }

    /// Change the label identifying this adapter in logs (typically, the name of the format).
    pub fn with_label<L: Into<Arc<str>>>(mut self, label: L) -> Self {
        self.label = label.into();
        self
    }

    /// Borrow the configuration of this adapter.
    pub fn config(&self) -> &AdapterConfig {
        &self.config
    }

    /// The label identifying this adapter in logs.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Parse `text` into a graph, resolving relative IRIs against `base` if provided.
    ///
    /// Errors of the backend are returned with their message intact.
    /// If the backend is callback-based and drops its callback without calling it,
    /// the returned future never completes.
    pub async fn parse(&self, text: &str, base: Option<&str>) -> Result<Graph, ParseError> {
        debug!(
            "{}: parsing {} byte(s) with {} backend",
            self.label,
            text.len(),
            self.backend.style()
        );
        let res = match &self.backend {
            Backend::Sync(parser) if self.config.offload => {
                let parser = Arc::clone(parser);
                let text = text.to_string();
                let base = base.map(str::to_string);
                tokio::task::spawn_blocking(move || parser.parse(&text, base.as_deref()))
                    .await
                    .unwrap_or_else(|err| {
                        Err(ParseError::new(format!("{} backend failed: {err}", self.label)))
                    })
            }
            Backend::Sync(parser) => parser.parse(text, base),
            Backend::Callback(parser) => {
                let (tx, rx) = oneshot::channel();
                parser.parse_with(
                    text.to_string(),
                    base.map(str::to_string),
                    Box::new(move |res| {
                        // the receiver is gone only if the caller dropped the future
                        let _ = tx.send(res);
                    }),
                );
                match rx.await {
                    Ok(res) => res,
                    Err(_) => {
                        debug!("{}: backend dropped its callback", self.label);
                        std::future::pending().await
                    }
                }
            }
            Backend::Async(parser) => parser.parse(text, base).await,
        };
        if let Ok(graph) = &res {
            debug!("{}: parsed {} triple(s)", self.label, graph.len());
        }
        res
    }
}

impl fmt::Debug for ParserAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParserAdapter")
            .field("label", &self.label)
            .field("backend", &self.backend.style())
            .field("config", &self.config)
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use futures_util::future::{BoxFuture, FutureExt};
    use rdfkit_api::parser::ParseCallback;
    use rdfkit_turtle::parser::nt::NTriplesParser;
    use rdfkit_turtle::parser::turtle::TurtleParser;
    use std::time::Duration;

    const TTL: &str = r#"
        @prefix : <http://example.org/>.
        :s :p :o1, :o2.
    "#;

    /// Calls back from another thread.
    struct ThreadedTurtle;

    impl CallbackParser for ThreadedTurtle {
        fn parse_with(&self, text: String, base: Option<String>, done: ParseCallback) {
            std::thread::spawn(move || {
                done(TurtleParser::default().parse(&text, base.as_deref()));
            });
        }
    }

    /// Calls back before returning, with a fixed error.
    struct Failing;

    impl CallbackParser for Failing {
        fn parse_with(&self, _text: String, _base: Option<String>, done: ParseCallback) {
            done(Err(ParseError::new("line 1: boom")));
        }
    }

    /// Never calls back.
    struct Forgetful;

    impl CallbackParser for Forgetful {
        fn parse_with(&self, _text: String, _base: Option<String>, done: ParseCallback) {
            drop(done);
        }
    }

    /// Yields to the runtime before parsing N-Triples.
    struct Deferred;

    impl AsyncParser for Deferred {
        fn parse<'a>(
            &'a self,
            text: &'a str,
            _base: Option<&'a str>,
        ) -> BoxFuture<'a, Result<Graph, ParseError>> {
            async move {
                tokio::task::yield_now().await;
                NTriplesParser {}.parse(text, None)
            }
            .boxed()
        }
    }

    struct Panicking;

    impl SyncParser for Panicking {
        fn parse(&self, _text: &str, _base: Option<&str>) -> Result<Graph, ParseError> {
            panic!("this parser always panics")
        }
    }

    #[tokio::test]
    async fn sync_backend() -> Result<(), ParseError> {
        crate::test_setup();
        let p = ParserAdapter::from_sync(TurtleParser::default()).with_label("turtle");
        assert_eq!(p.label(), "turtle");
        assert_eq!(p.parse(TTL, None).await?.len(), 2);
        let err = p.parse("not turtle", None).await.unwrap_err();
        assert!(!err.message().is_empty());
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn offloaded_sync_backend() -> Result<(), ParseError> {
        crate::test_setup();
        let p = ParserAdapter::from_sync(TurtleParser::default())
            .with_config(AdapterConfig::new().with_offload(true));
        assert!(p.config().offload);
        assert_eq!(p.parse(TTL, None).await?.len(), 2);
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn offloaded_panic_is_an_error() {
        crate::test_setup();
        let p = ParserAdapter::from_sync(Panicking)
            .with_config(AdapterConfig::new().with_offload(true));
        let err = p.parse(TTL, None).await.unwrap_err();
        assert!(err.message().contains("panic"), "{}", err.message());
    }

    #[tokio::test]
    async fn callback_backend() -> Result<(), ParseError> {
        crate::test_setup();
        let p = ParserAdapter::from_callback(ThreadedTurtle);
        assert_eq!(p.parse(TTL, None).await?.len(), 2);
        let g = p.parse("<a> <b> <c>.", Some("http://example.org/")).await?;
        assert_eq!(g.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn callback_error_is_forwarded_intact() {
        crate::test_setup();
        let err = ParserAdapter::from_callback(Failing)
            .parse(TTL, None)
            .await
            .unwrap_err();
        assert_eq!(err.message(), "line 1: boom");
    }

    #[tokio::test]
    async fn dropped_callback_hangs() {
        crate::test_setup();
        let p = ParserAdapter::from_callback(Forgetful);
        let res = tokio::time::timeout(Duration::from_millis(50), p.parse(TTL, None)).await;
        assert!(res.is_err());
    }

    #[tokio::test]
    async fn async_backend() -> Result<(), ParseError> {
        crate::test_setup();
        let p = ParserAdapter::from_async(Deferred);
        let g = p.parse("<x:s> <x:p> <x:o>.", None).await?;
        assert_eq!(g.len(), 1);
        assert!(p.parse("<x:s> <x:p>", None).await.is_err());
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn concurrent_calls() -> Result<(), ParseError> {
        crate::test_setup();
        let p = ParserAdapter::from_callback(ThreadedTurtle);
        let texts: Vec<String> = (0..16)
            .map(|i| format!("<http://example.org/s{i}> <http://example.org/p> {i} ."))
            .collect();
        let graphs = futures_util::future::join_all(texts.iter().map(|t| p.parse(t, None))).await;
        for g in graphs {
            assert_eq!(g?.len(), 1);
        }
        Ok(())
    }
}
