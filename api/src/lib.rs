//! This crate is part of [rdfkit],
//! an [RDF] and [Linked Data] toolkit in Rust.
//!
//! It defines the core data model ([terms](term), [triples](triple) and [graphs](graph)),
//! and the capability traits that [parser](parser), [serializer](serializer)
//! and [store](store) backends implement.
//!
//! [rdfkit]: https://docs.rs/rdfkit/latest/rdfkit/
//! [RDF]: https://www.w3.org/TR/rdf-primer/
//! [Linked Data]: http://linkeddata.org/

pub mod graph;
pub mod ns;
pub mod parser;
pub mod prelude;
pub mod serializer;
pub mod store;
pub mod term;
pub mod triple;

pub use futures_util::future::BoxFuture;
