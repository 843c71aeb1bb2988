//! Helpers shared by the end-to-end tests.
#![allow(dead_code)]

use rdfkit::api::graph::Graph;
use rdfkit::api::ns::{rdf, xsd};
use rdfkit::api::term::{BlankNode, InvalidTermError, Literal, NamedNode};
use rdfkit::api::triple::Triple;

pub const CARD: &str = "https://www.example.com/john/card#me";
pub const FOAF: &str = "http://xmlns.com/foaf/0.1/";
pub const CERT: &str = "http://www.w3.org/ns/auth/cert#";

pub fn foaf(suffix: &str) -> NamedNode {
    NamedNode::new_unchecked(format!("{FOAF}{suffix}"))
}

pub fn cert(suffix: &str) -> NamedNode {
    NamedNode::new_unchecked(format!("{CERT}{suffix}"))
}

/// John's profile card: a person with a name and an RSA public key.
pub fn build_card_graph() -> Result<Graph, InvalidTermError> {
    let me = NamedNode::new(CARD)?;
    let key = BlankNode::fresh();
    let mut g = Graph::new();
    g.add(Triple::new(me.clone(), rdf::type_.clone(), foaf("Person"))?);
    g.add(Triple::new(me.clone(), foaf("name"), Literal::lang("John Smith", "en")?)?);
    g.add(Triple::new(me, cert("key"), key.clone())?);
    g.add(Triple::new(key.clone(), rdf::type_.clone(), cert("RSAPublicKey"))?);
    g.add(Triple::new(
        key.clone(),
        cert("exponent"),
        Literal::typed("65537", xsd::integer.clone()),
    )?);
    g.add(Triple::new(
        key,
        cert("modulus"),
        Literal::typed("abcdef", xsd::hexBinary.clone()),
    )?);
    Ok(g)
}

/// Initialize the logger once for all tests of a test binary.
pub fn setup() {
    static SETUP: std::sync::Once = std::sync::Once::new();
    SETUP.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// Load a test fixture from `tests/data`.
pub fn data(filename: &str) -> String {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(filename);
    std::fs::read_to_string(&path).unwrap_or_else(|err| panic!("{}: {err}", path.display()))
}
