//! Serializer for the [N-Triples] concrete syntax of RDF.
//!
//! [N-Triples]: https://www.w3.org/TR/n-triples/
use rdfkit_api::graph::Graph;
use rdfkit_api::serializer::{SerializeError, SyncSerializer};
use rdfkit_rio::serializer::format_rio;
use rio_turtle::NTriplesFormatter;

/// N-Triples serializer, writing one triple per line.
#[derive(Clone, Debug, Default)]
pub struct NTriplesSerializer {}

impl SyncSerializer for NTriplesSerializer {
    fn serialize(&self, graph: &Graph) -> Result<String, SerializeError> {
        let mut buf = Vec::new();
        let mut tf = NTriplesFormatter::new(&mut buf);
        format_rio(&mut tf, graph)?;
        tf.finish()?;
        String::from_utf8(buf).map_err(SerializeError::with_source)
    }
}

// ---------------------------------------------------------------------------------
//                                      tests
// ---------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use rdfkit_api::term::{BlankNode, Literal, NamedNode};
    use rdfkit_api::triple::Triple;

    #[test]
    fn one_line_per_triple() -> Result<(), Box<dyn std::error::Error>> {
        let p = NamedNode::new("http://example.org/p")?;
        let mut g = Graph::new();
        g.add(Triple::new(
            BlankNode::new("x")?,
            p.clone(),
            Literal::simple("multi\nline"),
        )?);
        g.add(Triple::new(
            NamedNode::new("http://example.org/s")?,
            p,
            Literal::lang("chat", "fr")?,
        )?);
        let nt = NTriplesSerializer {}.serialize(&g)?;
        assert_eq!(
            nt,
            "<http://example.org/s> <http://example.org/p> \"chat\"@fr .\n\
             _:x <http://example.org/p> \"multi\\nline\" .\n"
        );
        Ok(())
    }
}
