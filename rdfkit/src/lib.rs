//! This crate aims to provide a comprehensive toolkit
//! for working with [RDF] and [Linked Data] in Rust.
//!
//! RDF is a data model
//! designed to exchange knowledge on the Web
//! in an interoperable way.
//! Each piece of knowledge in RDF (a *statement*)
//! is represented by a [triple](api::triple), made of three [terms](api::term).
//! A set of triples forms an RDF [graph](api::graph),
//! and graphs can be grouped in a [store](api::store),
//! where each graph is identified by a unique name.
//!
//! Parsers and serializers come in different native styles
//! (synchronous, callback-based or asynchronous);
//! the [adapters](adapter) drive all of them through the same async methods,
//! and [`Format`] gives access to the bundled ones.
//!
//! # Getting Started
//!
//! ```
//! use rdfkit::api::prelude::*;
//! use rdfkit::inmem::InMemoryStore;
//! use rdfkit::adapter::StoreAdapter;
//! use rdfkit::Format;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let example = r#"
//!     @prefix foaf: <http://xmlns.com/foaf/0.1/>.
//!     <http://example.org/alice> foaf:name "Alice".
//!     <http://example.org/bob> foaf:name "Bob"; foaf:knows <http://example.org/alice>.
//! "#;
//! let graph = Format::Turtle.parser().parse(example, None).await?;
//!
//! let store = StoreAdapter::new(InMemoryStore::new());
//! store.add(&GraphName::named("http://example.org/people")?, &graph).await?;
//!
//! let knows = NamedNode::new("http://xmlns.com/foaf/0.1/knows")?;
//! let matches = store.match_triples(None, Some(&knows), None, None).await?;
//! println!("{}", Format::NTriples.serializer().serialize(&matches).await?);
//! # Ok(())
//! # }
//! ```
//!
//! [RDF]: https://www.w3.org/TR/rdf-primer/
//! [Linked Data]: http://linkeddata.org/
#![deny(missing_docs)]

pub use rdfkit_adapter as adapter;
pub use rdfkit_api as api;
pub use rdfkit_inmem as inmem;
pub use rdfkit_jsonld as jsonld;
pub use rdfkit_rio as rio;
pub use rdfkit_turtle as turtle;
pub use rdfkit_xml as xml;

pub mod format;
pub use format::Format;
