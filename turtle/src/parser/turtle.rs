//! Adapter for the Turtle parser from [RIO](https://github.com/Tpt/rio/blob/master/turtle/src/turtle.rs)
use rdfkit_api::graph::Graph;
use rdfkit_api::parser::{ParseError, SyncParser};
use rdfkit_rio::parser::{parse_base, parse_rio};
use rio_turtle::TurtleParser as RioTurtleParser;

/// Turtle parser based on RIO.
#[derive(Clone, Debug, Default)]
pub struct TurtleParser {
    /// The base IRI used by this parser to resolve relative IRI-references,
    /// when none is given to [`parse`](SyncParser::parse).
    pub base: Option<String>,
}

impl SyncParser for TurtleParser {
    fn parse(&self, text: &str, base: Option<&str>) -> Result<Graph, ParseError> {
        let base = parse_base(base.or(self.base.as_deref()))?;
        parse_rio(RioTurtleParser::new(text.as_bytes(), base))
    }
}

// ---------------------------------------------------------------------------------
//                                      tests
// ---------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use rdfkit_api::ns::rdf;
    use rdfkit_api::term::{Literal, NamedNode, Term};

    fn iri(txt: &str) -> NamedNode {
        NamedNode::new(txt).unwrap()
    }

    #[test]
    fn test_simple_turtle_string() -> Result<(), Box<dyn std::error::Error>> {
        let turtle = r#"
            @prefix : <http://example.org/ns/> .

            <#me> :knows [ a :Person ; :name "Alice" ] .
        "#;

        let p = TurtleParser {
            base: Some("http://localhost/ex".to_string()),
        };
        let g = p.parse(turtle, None)?;
        assert_eq!(g.len(), 3);
        let me = Term::from(iri("http://localhost/ex#me"));
        let knows = g.match_triples(Some(&me), Some(&iri("http://example.org/ns/knows")), None);
        assert_eq!(knows.len(), 1);
        let alice = knows.iter().next().unwrap().object().clone();
        assert!(alice.is_blank_node());
        assert_eq!(
            g.match_triples(
                Some(&alice),
                Some(&*rdf::type_),
                Some(&Term::from(iri("http://example.org/ns/Person")))
            )
            .len(),
            1
        );
        assert_eq!(
            g.match_triples(
                Some(&alice),
                Some(&iri("http://example.org/ns/name")),
                Some(&Term::from(Literal::simple("Alice")))
            )
            .len(),
            1
        );
        assert_eq!(g.blank_nodes().len(), 1);
        Ok(())
    }

    #[test]
    fn base_argument_overrides_default_base() -> Result<(), Box<dyn std::error::Error>> {
        let p = TurtleParser {
            base: Some("http://localhost/ex".to_string()),
        };
        let g = p.parse("<a> <b> <c> .", Some("http://example.org/"))?;
        let t = g.iter().next().unwrap();
        assert_eq!(t.subject().value(), "http://example.org/a");
        Ok(())
    }

    #[test]
    fn relative_iri_without_base() {
        let err = TurtleParser::default()
            .parse("<a> <b> <c> .", None)
            .unwrap_err();
        assert!(!err.message().is_empty());
    }

    #[test]
    fn quoted_triples_are_rejected() {
        let turtle = r#"
            @prefix : <http://example.org/ns/> .
            << :a :b :c >> :d :e .
        "#;
        let err = TurtleParser::default().parse(turtle, None).unwrap_err();
        assert!(err.message().contains("RDF-star"));
    }
}
