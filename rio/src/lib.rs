//! This crate is not usable alone,
//! but contains common code required by
//! [`rdfkit_turtle`](https://docs.rs/rdfkit_turtle/)
//! and
//! [`rdfkit_xml`](https://docs.rs/rdfkit_xml/).

pub mod model;

pub mod parser;

pub mod serializer;
