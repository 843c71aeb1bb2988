//! This crate is part of rdfkit,
//! an [RDF] and [Linked Data] toolkit in Rust.
//!
//! It drives parser, serializer and store backends through a single asynchronous contract,
//! whatever the native style of the backend:
//! * [`ParserAdapter`] wraps any [`SyncParser`], [`CallbackParser`] or [`AsyncParser`];
//! * [`SerializerAdapter`] wraps any [`SyncSerializer`], [`CallbackSerializer`] or [`AsyncSerializer`];
//! * [`StoreAdapter`] shares a [`Store`] between concurrent tasks.
//!
//! Every call invokes the backend exactly once, and yields exactly one result,
//! except when a callback backend drops its callback without calling it:
//! the call then never completes, and it is up to the caller to set a timeout.
//!
//! [RDF]: https://www.w3.org/TR/rdf-primer/
//! [Linked Data]: http://linkeddata.org/
//! [`SyncParser`]: rdfkit_api::parser::SyncParser
//! [`CallbackParser`]: rdfkit_api::parser::CallbackParser
//! [`AsyncParser`]: rdfkit_api::parser::AsyncParser
//! [`SyncSerializer`]: rdfkit_api::serializer::SyncSerializer
//! [`CallbackSerializer`]: rdfkit_api::serializer::CallbackSerializer
//! [`AsyncSerializer`]: rdfkit_api::serializer::AsyncSerializer
//! [`Store`]: rdfkit_api::store::Store
#![deny(missing_docs)]

mod config;
pub use config::*;
pub mod parser;
pub use parser::ParserAdapter;
pub mod serializer;
pub use serializer::SerializerAdapter;
pub mod store;
pub use store::StoreAdapter;

#[cfg(test)]
fn test_setup() {
    TEST_SETUP.call_once(|| {
        env_logger::builder().is_test(true).init();
    });
}

#[cfg(test)]
static TEST_SETUP: std::sync::Once = std::sync::Once::new();
