//! Parsers for the Turtle-family of RDF concrete syntaxes,
//! based on [`rio_turtle`](https://docs.rs/rio_turtle/).

pub mod nt;
pub mod turtle;
