//! An RDF graph, the central notion of the RDF data model,
//! is a collection of triples.
//!
//! This module provides the [`Graph`] type,
//! the [isomorphism](graphs_equal) check used to compare graphs,
//! and [diagnostic helpers](check_graph_eq) for tests comparing graphs.


mod _diff;
pub use self::_diff::*;
mod _graph;
pub use self::_graph::*;
mod _isomorphism;
pub use self::_isomorphism::*;
