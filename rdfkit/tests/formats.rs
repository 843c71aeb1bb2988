//! End-to-end tests of the bundled formats, driven through their adapters.
use rdfkit::api::graph::Graph;
use rdfkit::api::parser::ParseError;
use rdfkit::api::assert_graph_eq;
use rdfkit::Format;
use test_case::test_case;

mod common;
use common::*;

const BASE: &str = "https://www.example.com/john/card";

type TestResult = Result<(), Box<dyn std::error::Error>>;

async fn parse_fixture(format: Format, filename: &str) -> Result<Graph, ParseError> {
    format.parser().parse(&data(filename), Some(BASE)).await
}

#[test_case(Format::Turtle, "card.ttl" ; "turtle")]
#[test_case(Format::RdfXml, "card.xml" ; "rdf xml")]
#[test_case(Format::JsonLd, "card.json" ; "json-ld")]
#[tokio::test]
async fn card_fixture(format: Format, filename: &str) -> TestResult {
    setup();
    let parsed = parse_fixture(format, filename).await?;
    assert_graph_eq!(parsed, build_card_graph()?);
    Ok(())
}

#[tokio::test]
async fn cross_format_equivalence() -> TestResult {
    setup();
    let ttl = parse_fixture(Format::Turtle, "card.ttl").await?;
    let xml = parse_fixture(Format::RdfXml, "card.xml").await?;
    let json = parse_fixture(Format::JsonLd, "card.json").await?;
    assert_graph_eq!(ttl, xml);
    assert_graph_eq!(xml, json);
    assert_graph_eq!(json, ttl);
    Ok(())
}

#[tokio::test]
async fn list_equivalence() -> TestResult {
    setup();
    let nt = parse_fixture(Format::NTriples, "list.nt").await?;
    let json = parse_fixture(Format::JsonLd, "list.json").await?;
    assert_eq!(nt.len(), 7);
    assert_graph_eq!(nt, json);
    Ok(())
}

#[test_case(Format::Turtle ; "turtle")]
#[test_case(Format::NTriples ; "ntriples")]
#[test_case(Format::RdfXml ; "rdf xml")]
#[test_case(Format::JsonLd ; "json-ld")]
#[tokio::test]
async fn round_trip(format: Format) -> TestResult {
    setup();
    let card = build_card_graph()?;
    let text = format.serializer().serialize(&card).await?;
    let parsed = format.parser().parse(&text, None).await?;
    assert_graph_eq!(parsed, card);
    Ok(())
}

#[test_case(Format::Turtle ; "turtle")]
#[test_case(Format::NTriples ; "ntriples")]
#[test_case(Format::RdfXml ; "rdf xml")]
#[test_case(Format::JsonLd ; "json-ld")]
#[tokio::test]
async fn round_trip_empty_graph(format: Format) -> TestResult {
    setup();
    let text = format.serializer().serialize(&Graph::new()).await?;
    assert!(format.parser().parse(&text, None).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn separate_parses_do_not_share_blank_nodes() -> TestResult {
    setup();
    let g1 = parse_fixture(Format::Turtle, "card.ttl").await?;
    let g2 = parse_fixture(Format::Turtle, "card.ttl").await?;
    assert_graph_eq!(g1, g2);
    let mut merged = g1.clone();
    merged.merge(&g2);
    // 2 shared ground triples, and 4 triples per key description
    assert_eq!(merged.len(), 10);
    assert_eq!(g1.blank_nodes().len(), 1);
    assert_eq!(g2.blank_nodes().len(), 1);
    assert_eq!(merged.blank_nodes().len(), 2);
    Ok(())
}

#[test_case(Format::Turtle, "<#me> a" ; "truncated turtle")]
#[test_case(Format::NTriples, "<http://example.org/s> <http://example.org/p> ." ; "missing object")]
#[test_case(Format::RdfXml, "<rdf:RDF xmlns:rdf=\"http://www.w3.org/1999/02/22-rdf-syntax-ns#\"></rdf:Description>" ; "mismatched xml tags")]
#[test_case(Format::JsonLd, "{\"@id\": " ; "truncated json")]
#[test_case(Format::JsonLd, "{\"@context\": \"urn:test\"}" ; "unresolvable remote context")]
#[tokio::test]
async fn errors_are_forwarded(format: Format, text: &str) {
    setup();
    let err = format.parser().parse(text, Some(BASE)).await.unwrap_err();
    assert!(!err.message().is_empty());
}

#[tokio::test]
async fn remote_context_error_names_the_context() {
    setup();
    let err = Format::JsonLd
        .parser()
        .parse("{\"@context\": \"urn:test\"}", None)
        .await
        .unwrap_err();
    assert!(err.message().contains("urn:test"), "{}", err.message());
}

#[tokio::test(flavor = "multi_thread")]
async fn concurrent_conversions() -> TestResult {
    setup();
    let card = build_card_graph()?;
    let conversions = Format::ALL.into_iter().map(|format| {
        let card = &card;
        async move {
            let text = format.serializer().serialize(card).await?;
            let parsed = format.parser().parse(&text, None).await?;
            Ok::<_, Box<dyn std::error::Error>>(parsed)
        }
    });
    for parsed in futures_util::future::join_all(conversions).await {
        assert_graph_eq!(parsed?, card);
    }
    Ok(())
}
