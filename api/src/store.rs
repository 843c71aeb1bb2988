//! API for stores: collections of graphs, each identified by a [`GraphName`].
//!
//! A store maps every graph name to at most one [`Graph`].
//! Adding a graph under an existing name merges it into the stored graph.
//! Each operation is atomic in isolation;
//! there are no transactions spanning several operations.
use crate::graph::Graph;
use crate::term::{InvalidTermError, NamedNode, Term};
use std::fmt;
use thiserror::Error;


/// The name of a graph in a [`Store`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GraphName {
    /// The default graph of the store
    Default,
    /// A graph named by an IRI
    Named(NamedNode),
}

impl GraphName {
    /// Build the name of a graph from an IRI.
    pub fn named(iri: &str) -> Result<Self, InvalidTermError> {
        Ok(GraphName::Named(NamedNode::new(iri)?))
    }

    /// The IRI of this graph name, if it is not the default graph.
    pub fn as_named_node(&self) -> Option<&NamedNode> {
        match self {
            GraphName::Default => None,
            GraphName::Named(n) => Some(n),
        }
    }
}

impl From<NamedNode> for GraphName {
    fn from(other: NamedNode) -> Self {
        GraphName::Named(other)
    }
}

impl fmt::Display for GraphName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphName::Default => f.write_str("DEFAULT"),
            GraphName::Named(n) => n.fmt(f),
        }
    }
}

/// A store backend.
///
/// Methods accepting an `Option<&GraphName>` operate on the named graph if one is given,
/// or on the union of all the graphs of the store otherwise.
/// An unknown graph name is treated as an empty graph.
pub trait Store: Send + Sync {
    /// Merge `graph` into the graph named `name`, creating it if needed.
    ///
    /// If this method fails, the graph named `name` must be left unchanged.
    fn add(&mut self, name: &GraphName, graph: &Graph) -> Result<(), StoreError>;

    /// A snapshot of the graph named `name`,
    /// or of the union of all graphs if `name` is `None`.
    fn graph(&self, name: Option<&GraphName>) -> Result<Graph, StoreError>;

    /// The triples matching the given pattern in the graph named `name`,
    /// or in the union of all graphs if `name` is `None`.
    /// `None` components of the pattern match any term.
    fn match_triples(
        &self,
        subject: Option<&Term>,
        predicate: Option<&NamedNode>,
        object: Option<&Term>,
        name: Option<&GraphName>,
    ) -> Result<Graph, StoreError> {
        Ok(self.graph(name)?.match_triples(subject, predicate, object))
    }

    /// Remove the graph named `name`. Removing an unknown graph is a no-op.
    fn delete(&mut self, name: &GraphName) -> Result<(), StoreError>;

    /// The names of the graphs in this store.
    fn graph_names(&self) -> Result<Vec<GraphName>, StoreError>;

    /// Remove all graphs from this store.
    fn clear(&mut self) -> Result<(), StoreError>;
}

/// The error raised by store backends.
///
/// When an operation fails, the store is left in a consistent state.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The storage layer failed with an I/O error.
    #[error("I/O error in store: {0}")]
    Io(#[from] std::io::Error),
    /// The storage layer failed for another reason.
    #[error("store backend error: {0}")]
    Backend(String),
}
