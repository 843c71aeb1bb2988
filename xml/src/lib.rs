//! This crate is part of [rdfkit],
//! an [RDF] and [Linked Data] toolkit in Rust.
//!
//! Parser and serializer for the [RDF/XML] concrete syntax,
//! based on [`rio_xml`].
//!
//! [rdfkit]: https://docs.rs/rdfkit/latest/rdfkit/
//! [RDF]: https://www.w3.org/TR/rdf-primer/
//! [Linked Data]: http://linkeddata.org/
//! [RDF/XML]: https://www.w3.org/TR/rdf11-xml/
#![deny(missing_docs)]

pub mod parser;
pub mod serializer;
