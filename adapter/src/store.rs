//! Async wrapper sharing a [`Store`] between tasks.
use std::fmt;
use std::sync::Arc;

use log::debug;
use rdfkit_api::graph::Graph;
use rdfkit_api::store::{GraphName, Store, StoreError};
use rdfkit_api::term::{NamedNode, Term};
use tokio::sync::RwLock;

/// Exposes the operations of a [`Store`] as async methods.
///
/// Clones share the same underlying store.
/// Writes are serialized, while reads may proceed concurrently.
pub struct StoreAdapter<S> {
    store: Arc<RwLock<S>>,
}

impl<S: Store> StoreAdapter<S> {
    /// Wrap `store`.
    pub fn new(store: S) -> Self {
        StoreAdapter {
            store: Arc::new(RwLock::new(store)),
        }
    }

    /// Merge `graph` into the graph named `name`.
    pub async fn add(&self, name: &GraphName, graph: &Graph) -> Result<(), StoreError> {
        debug!("adding {} triple(s) to {name}", graph.len());
        self.store.write().await.add(name, graph)
    }

    /// A snapshot of the graph named `name`, or of the union of all graphs.
    ///
    /// Later changes to the store do not affect the returned graph.
    pub async fn graph(&self, name: Option<&GraphName>) -> Result<Graph, StoreError> {
        self.store.read().await.graph(name)
    }

    /// The triples matching the given pattern in the graph named `name`,
    /// or in the union of all graphs.
    pub async fn match_triples(
        &self,
        subject: Option<&Term>,
        predicate: Option<&NamedNode>,
        object: Option<&Term>,
        name: Option<&GraphName>,
    ) -> Result<Graph, StoreError> {
        self.store
            .read()
            .await
            .match_triples(subject, predicate, object, name)
    }

    /// Remove the graph named `name`.
    pub async fn delete(&self, name: &GraphName) -> Result<(), StoreError> {
        debug!("deleting {name}");
        self.store.write().await.delete(name)
    }

    /// The names of the graphs in the store.
    pub async fn graph_names(&self) -> Result<Vec<GraphName>, StoreError> {
        self.store.read().await.graph_names()
    }

    /// Remove all graphs from the store.
    pub async fn clear(&self) -> Result<(), StoreError> {
        debug!("clearing store");
        self.store.write().await.clear()
    }

    /// Recover the wrapped store, if this adapter has no live clone.
    pub fn try_into_inner(self) -> Result<S, Self> {
        match Arc::try_unwrap(self.store) {
            Ok(lock) => Ok(lock.into_inner()),
            Err(store) => Err(StoreAdapter { store }),
        }
    }
}

impl<S> Clone for StoreAdapter<S> {
    fn clone(&self) -> Self {
        StoreAdapter {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: Store + Default> Default for StoreAdapter<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<S> fmt::Debug for StoreAdapter<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreAdapter").finish_non_exhaustive()
    }
}
