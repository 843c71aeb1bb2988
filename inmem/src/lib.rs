//! This crate is part of rdfkit,
//! an [RDF] and [Linked Data] toolkit in Rust.
//!
//! It provides an in-memory implementation of [`Store`](rdfkit_api::store::Store).
//!
//! [RDF]: https://www.w3.org/TR/rdf-primer/
//! [Linked Data]: http://linkeddata.org/

pub mod store;
pub use store::InMemoryStore;
