//! End-to-end tests of the in-memory store, driven through its adapter.
use rdfkit::adapter::StoreAdapter;
use rdfkit::api::graph::Graph;
use rdfkit::api::ns::rdf;
use rdfkit::api::store::GraphName;
use rdfkit::api::term::{NamedNode, Term};
use rdfkit::api::triple::Triple;
use rdfkit::api::assert_graph_eq;
use rdfkit::inmem::InMemoryStore;
use rdfkit::Format;

mod common;
use common::*;

type TestResult = Result<(), Box<dyn std::error::Error>>;

const NS: &str = "http://example.org/";

fn iri(suffix: &str) -> NamedNode {
    NamedNode::new_unchecked(format!("{NS}{suffix}"))
}

fn one_triple(subject: &str) -> Result<Graph, Box<dyn std::error::Error>> {
    let mut g = Graph::new();
    g.add(Triple::new(iri(subject), iri("p"), iri("o"))?);
    Ok(g)
}

async fn populated() -> Result<StoreAdapter<InMemoryStore>, Box<dyn std::error::Error>> {
    let store = StoreAdapter::new(InMemoryStore::new());
    store.add(&GraphName::named(&format!("{NS}A"))?, &one_triple("a")?).await?;
    store.add(&GraphName::named(&format!("{NS}B"))?, &one_triple("b")?).await?;
    Ok(store)
}

#[tokio::test]
async fn isolation() -> TestResult {
    setup();
    let store = populated().await?;
    let b = store.graph(Some(&GraphName::named(&format!("{NS}B"))?)).await?;
    assert_eq!(b.len(), 1);
    let b_subject: Term = iri("b").into();
    assert!(b.iter().all(|t| t.subject() == &b_subject));
    assert_eq!(store.graph(None).await?.len(), 2);
    Ok(())
}

#[tokio::test]
async fn match_across_graphs() -> TestResult {
    setup();
    let store = populated().await?;
    let matches = store.match_triples(None, Some(&iri("p")), None, None).await?;
    assert_eq!(matches.len(), 2);
    let mut expected = one_triple("a")?;
    expected.merge(&one_triple("b")?);
    assert_graph_eq!(matches, expected);
    Ok(())
}

#[tokio::test]
async fn idempotent_add() -> TestResult {
    setup();
    let store = populated().await?;
    let a = GraphName::named(&format!("{NS}A"))?;
    store.add(&a, &one_triple("a")?).await?;
    assert_eq!(store.graph(Some(&a)).await?.len(), 1);
    assert_eq!(store.graph(None).await?.len(), 2);
    Ok(())
}

#[tokio::test]
async fn parsed_graphs_in_store() -> TestResult {
    setup();
    let store = StoreAdapter::<InMemoryStore>::default();
    let card = Format::Turtle
        .parser()
        .parse(&data("card.ttl"), Some("https://www.example.com/john/card"))
        .await?;
    let name = GraphName::named("https://www.example.com/john/card")?;
    store.add(&name, &card).await?;
    store.add(&GraphName::Default, &one_triple("a")?).await?;

    assert_graph_eq!(store.graph(Some(&name)).await?, build_card_graph()?);
    let persons = store
        .match_triples(None, Some(&*rdf::type_), Some(&foaf("Person").into()), None)
        .await?;
    assert_eq!(persons.len(), 1);
    assert_eq!(store.graph_names().await?, vec![GraphName::Default, name]);
    Ok(())
}
