//! Uniform async wrapper around serializer backends.
use std::fmt;
use std::sync::Arc;

use log::debug;
use rdfkit_api::graph::Graph;
use rdfkit_api::serializer::{AsyncSerializer, CallbackSerializer, SerializeError, SyncSerializer};
use tokio::sync::oneshot;

use crate::AdapterConfig;

#[derive(Clone)]
enum Backend {
    Sync(Arc<dyn SyncSerializer>),
    Callback(Arc<dyn CallbackSerializer>),
    Async(Arc<dyn AsyncSerializer>),
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

/// Drives a serializer backend of any style through a single async method.
///
/// Cloning an adapter is cheap, and clones share the same backend.
#[derive(Clone)]
pub struct SerializerAdapter {
    backend: Backend,
    config: AdapterConfig,
    label: Arc<str>,
}

impl SerializerAdapter {
    fn new(backend: Backend) -> Self {
        SerializerAdapter {
            backend,
            config: AdapterConfig::default(),
            label: Arc::from("serializer"),
        }
    }

    /// Wrap a synchronous serializer backend.
    pub fn from_sync<S: SyncSerializer + 'static>(serializer: S) -> Self {
        Self::new(Backend::Sync(Arc::new(serializer)))
    }

    /// Wrap a callback-based serializer backend.
    pub fn from_callback<S: CallbackSerializer + 'static>(serializer: S) -> Self {
        Self::new(Backend::Callback(Arc::new(serializer)))
    }

    /// Wrap an asynchronous serializer backend.
    pub fn from_async<S: AsyncSerializer + 'static>(serializer: S) -> Self {
        Self::new(Backend::Async(Arc::new(serializer)))
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

    /// Serialize `graph` into text.
    ///
    /// Errors of the backend are returned with their message intact.
    /// If the backend is callback-based and drops its callback without calling it,
    /// the returned future never completes.
    pub async fn serialize(&self, graph: &Graph) -> Result<String, SerializeError> {
        debug!(
            "{}: serializing {} triple(s) with {} backend",
            self.label,
            graph.len(),
            self.backend.style()
        );
        let res = match &self.backend {
            Backend::Sync(serializer) if self.config.offload => {
                let serializer = Arc::clone(serializer);
                let graph = graph.clone();
                tokio::task::spawn_blocking(move || serializer.serialize(&graph))
                    .await
                    .unwrap_or_else(|err| {
                        Err(SerializeError::new(format!("{} backend failed: {err}", self.label)))
                    })
            }
            Backend::Sync(serializer) => serializer.serialize(graph),
            Backend::Callback(serializer) => {
                let (tx, rx) = oneshot::channel();
                serializer.serialize_with(
                    graph.clone(),
                    Box::new(move |res| {
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
            Backend::Async(serializer) => serializer.serialize(graph).await,
        };
        if let Ok(txt) = &res {
            debug!("{}: serialized into {} byte(s)", self.label, txt.len());
        }
        res
    }
}

impl fmt::Debug for SerializerAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SerializerAdapter")
            .field("label", &self.label)
            .field("backend", &self.backend.style())
            .field("config", &self.config)
            .finish()
    }
}
