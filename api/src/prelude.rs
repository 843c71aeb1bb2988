//! Prelude exporting the most commonly used types and traits.

pub use crate::graph::{check_graph_eq, graphs_equal, Graph, GraphMismatch};
pub use crate::parser::{AsyncParser, CallbackParser, ParseError, SyncParser};
pub use crate::serializer::{AsyncSerializer, CallbackSerializer, SerializeError, SyncSerializer};
pub use crate::store::{GraphName, Store, StoreError};
pub use crate::term::{BlankNode, InvalidTermError, Literal, NamedNode, Term};
pub use crate::triple::Triple;
