//! Serializer and parser for the [JSON-LD] concrete syntax of RDF.
//!
//! The parser converts a JSON-LD document to RDF directly
//! (without producing the expanded form of the document first).
//! It supports inline and remote [contexts](context),
//! the latter being retrieved through a [`ContextLoader`](loader::ContextLoader)
//! before the conversion starts; this is why the parser is natively asynchronous.
//! Named graphs (`@graph` in a node with an `@id`) are merged into the produced graph.
//!
//! The serializer produces the [expanded document form] of JSON-LD.
//!
//! [JSON-LD]: https://www.w3.org/TR/json-ld11/
//! [expanded document form]: https://www.w3.org/TR/json-ld11/#expanded-document-form

pub mod config;
pub use config::*;
pub mod context;
pub mod error;
pub use error::*;
pub mod loader;
pub mod options;
pub use options::*;
pub mod parser;
pub use parser::*;
pub mod serializer;
pub use serializer::*;
mod to_rdf;
