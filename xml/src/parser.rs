//! Parser for the [RDF/XML] concrete syntax of RDF,
//! based on [`rio_xml`].
//!
//! [RDF/XML]: https://www.w3.org/TR/rdf-syntax-grammar/
use rdfkit_api::graph::Graph;
use rdfkit_api::parser::{ParseError, SyncParser};
use rdfkit_rio::parser::{parse_base, parse_rio};
use rio_xml::RdfXmlParser as RioRdfXmlParser;

/// RDF/XML parser based on RIO.
#[derive(Clone, Debug, Default)]
pub struct RdfXmlParser {
    /// The base IRI used by this parser to resolve relative IRI-references,
    /// when none is given to [`parse`](SyncParser::parse).
    pub base: Option<String>,
}

impl SyncParser for RdfXmlParser {
    fn parse(&self, text: &str, base: Option<&str>) -> Result<Graph, ParseError> {
        let base = parse_base(base.or(self.base.as_deref()))?;
        parse_rio(RioRdfXmlParser::new(text.as_bytes(), base))
    }
}

// ---------------------------------------------------------------------------------
//                                      tests
// ---------------------------------------------------------------------------------
