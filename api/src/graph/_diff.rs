//! Diagnostic comparison of graphs, for tests.
use super::{blank_node_mapping, Graph, MatchingError};
use crate::triple::Triple;
use std::fmt::Write;
use thiserror::Error;

/// Describes why two graphs are not [equal](super::graphs_equal).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GraphMismatch {
    /// Some triples without blank nodes are missing from, or unexpected in, the actual graph.
    #[error("{}", describe_triples(.missing, .extra))]
    Triples {
        /// Expected triples not found in the actual graph
        missing: Vec<Triple>,
        /// Triples of the actual graph that were not expected
        extra: Vec<Triple>,
    },
    /// The graphs agree on triples without blank nodes,
    /// but have a different number of triples involving blank nodes.
    #[error("expected {expected} triple(s) involving blank nodes, found {actual}")]
    BlankTripleCount {
        /// Number of triples with blank nodes in the actual graph
        actual: usize,
        /// Number of triples with blank nodes in the expected graph
        expected: usize,
    },
    /// No bijection between blank nodes makes the graphs identical.
    #[error("no valid blank-node mapping between the graphs ({0} triple(s) involving blank nodes)")]
    NoBlankNodeMapping(usize),
}

/// Compare two graphs, and explain how they differ if they are not [equal](super::graphs_equal).
///
/// ```
/// # use rdfkit_api::graph::{check_graph_eq, Graph, GraphMismatch};
/// # use rdfkit_api::term::{NamedNode, Literal};
/// # use rdfkit_api::triple::Triple;
/// let s = NamedNode::new("http://example.org/s").unwrap();
/// let p = NamedNode::new("http://example.org/p").unwrap();
/// let mut expected = Graph::new();
/// expected.add(Triple::new(s, p, Literal::simple("o")).unwrap());
///
/// let res = check_graph_eq(&Graph::new(), &expected);
/// assert!(matches!(res, Err(GraphMismatch::Triples { missing, .. }) if missing.len() == 1));
/// ```
pub fn check_graph_eq(actual: &Graph, expected: &Graph) -> Result<(), GraphMismatch> {
    match blank_node_mapping(actual, expected) {
        Ok(_) => Ok(()),
        Err(MatchingError::Exhausted) => Err(GraphMismatch::NoBlankNodeMapping(
            actual.iter().filter(|t| !t.is_ground()).count(),
        )),
        Err(MatchingError::Size) | Err(MatchingError::Ground) => {
            let missing = ground_difference(expected, actual);
            let extra = ground_difference(actual, expected);
            if !missing.is_empty() || !extra.is_empty() {
                return Err(GraphMismatch::Triples { missing, extra });
            }
            Err(GraphMismatch::BlankTripleCount {
                actual: actual.iter().filter(|t| !t.is_ground()).count(),
                expected: expected.iter().filter(|t| !t.is_ground()).count(),
            })
        }
    }
}

/// Assert that two graphs are [equal](crate::graph::graphs_equal),
/// panicking with a description of their differences otherwise.
///
/// ```
/// # use rdfkit_api::{assert_graph_eq, graph::Graph};
/// assert_graph_eq!(Graph::new(), Graph::new());
/// ```
#[macro_export]
macro_rules! assert_graph_eq {
    ($actual:expr, $expected:expr $(,)?) => {
        if let Err(mismatch) = $crate::graph::check_graph_eq(&$actual, &$expected) {
            panic!("graphs are not equal: {}", mismatch);
        }
    };
}

fn ground_difference(g1: &Graph, g2: &Graph) -> Vec<Triple> {
    g1.iter()
        .filter(|t| t.is_ground() && !g2.contains(t))
        .cloned()
        .collect()
}

fn describe_triples(missing: &[Triple], extra: &[Triple]) -> String {
    let mut txt = String::new();
    for (label, triples) in [("missing", missing), ("extra", extra)] {
        if triples.is_empty() {
            continue;
        }
        let _ = writeln!(txt, "{} {label} triple(s):", triples.len());
        for t in triples {
            let _ = writeln!(txt, "  {t}");
        }
    }
    txt
}
