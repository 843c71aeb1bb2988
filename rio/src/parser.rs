//! Common implementations for adapting
//! [RIO](https://docs.rs/rio_api/) parsers.
use crate::model::BlankNodeScope;
use rdfkit_api::graph::Graph;
use rdfkit_api::parser::ParseError;
use rio_api::parser::TriplesParser;
use std::error::Error;

/// Parse the `base` IRI passed to a parser, if any.
///
/// # Errors
/// Fails if `base` is not a valid absolute IRI.
pub fn parse_base(base: Option<&str>) -> Result<Option<oxiri::Iri<String>>, ParseError> {
    base.map(|b| {
        oxiri::Iri::parse(b.to_string())
            .map_err(|e| ParseError::new(format!("invalid base IRI <{b}>: {e}")))
    })
    .transpose()
}

/// Run a Rio [`TriplesParser`] to completion, collecting its triples into a [`Graph`].
///
/// Blank nodes of the document are replaced by fresh blank nodes
/// (see [`BlankNodeScope`]).
/// The message of the Rio error, if any, is forwarded intact.
pub fn parse_rio<P>(mut parser: P) -> Result<Graph, ParseError>
where
    P: TriplesParser,
    P::Error: Error,
{
    let mut scope = BlankNodeScope::new();
    let mut graph = Graph::new();
    parser
        .parse_all(&mut |t| -> Result<(), RioParseError<P::Error>> {
            graph.add(scope.triple(t).map_err(RioParseError::Sink)?);
            Ok(())
            // NB: RioParseError::Source is produced implicitly by parse_all,
            // using the fact that RioParseError<E> implements From<E>
        })
        .map_err(ParseError::from)?;
    log::trace!(
        "parsed {} triple(s) with {} blank node label(s)",
        graph.len(),
        scope.len()
    );
    Ok(graph)
}

/// This intermediate type is required,
/// because Rio requires that the error type of the triple handler
/// implement From<TurtleError> (or whatever Rio-specific error returned by the parser).
enum RioParseError<E> {
    /// Raised by the Rio parser
    Source(E),
    /// Raised when converting a Rio triple
    Sink(ParseError),
}

impl<E: Error> From<E> for RioParseError<E> {
    fn from(other: E) -> Self {
        RioParseError::Source(other)
    }
}

impl<E: Error> From<RioParseError<E>> for ParseError {
    fn from(other: RioParseError<E>) -> Self {
        match other {
            RioParseError::Source(err) => ParseError::new(err.to_string()),
            RioParseError::Sink(err) => err,
        }
    }
}
