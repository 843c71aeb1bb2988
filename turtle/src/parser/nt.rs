//! Adapter for the [N-Triples] parser from [RIO](https://github.com/Tpt/rio/blob/master/turtle/src/ntriples.rs)
//!
//! [N-Triples]: https://www.w3.org/TR/n-triples/
use rdfkit_api::graph::Graph;
use rdfkit_api::parser::{ParseError, SyncParser};
use rdfkit_rio::parser::parse_rio;
use rio_turtle::NTriplesParser as RioNTParser;

/// N-Triples parser based on RIO.
///
/// N-Triples only contains absolute IRIs, so the base IRI is ignored.
#[derive(Clone, Debug, Default)]
pub struct NTriplesParser {}

impl SyncParser for NTriplesParser {
    fn parse(&self, text: &str, _base: Option<&str>) -> Result<Graph, ParseError> {
        parse_rio(RioNTParser::new(text.as_bytes()))
    }
}

// ---------------------------------------------------------------------------------
//                                      tests
// ---------------------------------------------------------------------------------
