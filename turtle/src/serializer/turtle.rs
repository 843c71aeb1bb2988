//! Serializer for the [Turtle] concrete syntax of RDF,
//! based on the streaming formatter of [RIO](https://docs.rs/rio_turtle/).
//!
//! Since graphs are iterated in the order of their triples,
//! all triples sharing a subject are written together,
//! and the formatter factorizes them with `;` and `,`.
//!
//! [Turtle]: https://www.w3.org/TR/turtle/
use rdfkit_api::graph::Graph;
use rdfkit_api::serializer::{SerializeError, SyncSerializer};
use rdfkit_rio::serializer::format_rio;
use rio_turtle::TurtleFormatter;

/// Turtle serializer.
#[derive(Clone, Debug, Default)]
pub struct TurtleSerializer {}

impl SyncSerializer for TurtleSerializer {
    fn serialize(&self, graph: &Graph) -> Result<String, SerializeError> {
        let mut buf = Vec::new();
        let mut tf = TurtleFormatter::new(&mut buf);
        format_rio(&mut tf, graph)?;
        tf.finish()?;
        String::from_utf8(buf).map_err(SerializeError::with_source)
    }
}

// ---------------------------------------------------------------------------------
//                                      tests
// ---------------------------------------------------------------------------------
