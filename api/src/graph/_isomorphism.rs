//! This module implements the check for isomorphic blank node equivalence of RDF
//! graphs.
//!
//! It is publicly exported to `rdfkit_api::graph`.

use super::Graph;
use crate::term::{BlankNode, NamedNode, Term};
use crate::triple::Triple;
use std::collections::{HashMap, HashSet};

/// Checks if both graphs are isomorphic blank node equal.
///
/// According to the [RDF specs](https://www.w3.org/TR/2014/REC-rdf11-concepts-20140225/#graph-isomorphism)
/// this means that a bijection between the blank nodes of `g1` and the blank nodes of `g2` exists,
/// such that applying it to `g1` yields exactly `g2`.
/// Named nodes and literals are never renamed.
///
/// Triples without blank nodes (*ground* triples) are compared directly;
/// a blank node mapping is then searched by backtracking,
/// trying for each blank node of `g1` the blank nodes of `g2` having the same local signature.
///
/// # Performance
///
/// Gets quickly very expensive on large graphs
/// made of blank nodes that are locally indistinguishable from each other.
pub fn graphs_equal(g1: &Graph, g2: &Graph) -> bool {
    blank_node_mapping(g1, g2).is_ok()
}

/// Why [`blank_node_mapping`] failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum MatchingError {
    /// The graphs have a different number of triples
    Size,
    /// The graphs have different ground triples
    Ground,
    /// No bijection between blank nodes makes the remaining triples identical
    Exhausted,
}

type BnodeMapping<'a, 'b> = HashMap<&'a BlankNode, &'b BlankNode>;

/// Search a blank node bijection from `g1` to `g2` proving their isomorphism.
pub(crate) fn blank_node_mapping<'a, 'b>(
    g1: &'a Graph,
    g2: &'b Graph,
) -> Result<BnodeMapping<'a, 'b>, MatchingError> {
    if g1.len() != g2.len() {
        return Err(MatchingError::Size);
    }
    let (ground1, non_ground1): (Vec<_>, Vec<_>) = g1.iter().partition(|t| t.is_ground());
    let ground2 = g2.iter().filter(|t| t.is_ground()).count();
    // g1 and g2 have the same size, and all ground triples of g1 are in g2,
    // so the ground parts are equal iff they have the same size.
    if ground1.len() != ground2 || !ground1.iter().all(|t| g2.contains(t)) {
        return Err(MatchingError::Ground);
    }
    if non_ground1.is_empty() {
        return Ok(HashMap::new());
    }
    let non_ground2: Vec<_> = g2.iter().filter(|t| !t.is_ground()).collect();

    let side1 = Side::new(&non_ground1);
    let side2 = Side::new(&non_ground2);
    if side1.signatures.len() != side2.signatures.len() {
        return Err(MatchingError::Exhausted);
    }

    let mut steps: Vec<(&'a BlankNode, Vec<&'b BlankNode>)> = side1
        .signatures
        .iter()
        .map(|(bn1, sig1)| {
            let candidates = side2
                .signatures
                .iter()
                .filter(|(_, sig2)| sig1 == *sig2)
                .map(|(bn2, _)| *bn2)
                .collect();
            (*bn1, candidates)
        })
        .collect();
    if steps.iter().any(|(_, candidates)| candidates.is_empty()) {
        return Err(MatchingError::Exhausted);
    }
    // most constrained blank nodes first, then the most connected ones
    steps.sort_by(|(bn_x, cand_x), (bn_y, cand_y)| {
        cand_x
            .len()
            .cmp(&cand_y.len())
            .then_with(|| {
                let occ_x = side1.occurrences[bn_x].len();
                side1.occurrences[bn_y].len().cmp(&occ_x)
            })
            .then_with(|| bn_x.cmp(bn_y))
    });

    let mut search = Search {
        steps,
        occurrences: side1.occurrences,
        target: g2,
        mapping: HashMap::new(),
        used: HashSet::new(),
    };
    if search.run(0) {
        Ok(search.mapping)
    } else {
        Err(MatchingError::Exhausted)
    }
}

/// What a blank node is connected to, in one of the triples where it occurs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Neighbour<'a> {
    /// Another term, which is not a blank node
    Ground(&'a Term),
    /// Another blank node
    Blank,
    /// The blank node itself
    Itself,
}

/// The position of a blank node in a triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Position {
    Subject,
    Object,
}

/// The local signature of a blank node: a sorted description of all its occurrences.
/// Two blank nodes mapped to each other by an isomorphism must have the same signature.
type Signature<'a> = Vec<(Position, &'a NamedNode, Neighbour<'a>)>;

/// The non-ground triples of one graph, indexed by blank node.
struct Side<'a> {
    signatures: HashMap<&'a BlankNode, Signature<'a>>,
    occurrences: HashMap<&'a BlankNode, Vec<&'a Triple>>,
}

impl<'a> Side<'a> {
    fn new(triples: &[&'a Triple]) -> Self {
        let mut signatures: HashMap<&'a BlankNode, Signature<'a>> = HashMap::new();
        let mut occurrences: HashMap<&'a BlankNode, Vec<&'a Triple>> = HashMap::new();
        for t in triples {
            let (s, o) = (t.subject(), t.object());
            if let Some(bn) = s.as_blank_node() {
                let neighbour = neighbour(bn, o);
                signatures
                    .entry(bn)
                    .or_default()
                    .push((Position::Subject, t.predicate(), neighbour));
                occurrences.entry(bn).or_default().push(t);
            }
            if let Some(bn) = o.as_blank_node() {
                let neighbour = neighbour(bn, s);
                signatures
                    .entry(bn)
                    .or_default()
                    .push((Position::Object, t.predicate(), neighbour));
                if s.as_blank_node() != Some(bn) {
                    occurrences.entry(bn).or_default().push(t);
                }
            }
        }
        for sig in signatures.values_mut() {
            sig.sort();
        }
        Side {
            signatures,
            occurrences,
        }
    }
}

fn neighbour<'a>(bn: &BlankNode, other: &'a Term) -> Neighbour<'a> {
    match other.as_blank_node() {
        Some(other_bn) if other_bn == bn => Neighbour::Itself,
        Some(_) => Neighbour::Blank,
        None => Neighbour::Ground(other),
    }
}

/// State of the backtracking search of a blank node mapping.
struct Search<'a, 'b> {
    steps: Vec<(&'a BlankNode, Vec<&'b BlankNode>)>,
    occurrences: HashMap<&'a BlankNode, Vec<&'a Triple>>,
    target: &'b Graph,
    mapping: BnodeMapping<'a, 'b>,
    used: HashSet<&'b BlankNode>,
}

impl<'a, 'b> Search<'a, 'b> {
    fn run(&mut self, depth: usize) -> bool {
        if depth == self.steps.len() {
            return true;
        }
        let bn1 = self.steps[depth].0;
        for i in 0..self.steps[depth].1.len() {
            let bn2 = self.steps[depth].1[i];
            if self.used.contains(bn2) {
                continue;
            }
            self.mapping.insert(bn1, bn2);
            if self.consistent(bn1) {
                self.used.insert(bn2);
                if self.run(depth + 1) {
                    return true;
                }
                self.used.remove(bn2);
            }
            self.mapping.remove(bn1);
        }
        false
    }

    /// Check that every triple involving `bn1`, whose blank nodes are all mapped,
    /// is mapped to a triple of the target graph.
    fn consistent(&self, bn1: &BlankNode) -> bool {
        self.occurrences[bn1].iter().all(|t| match self.map_triple(t) {
            Some(mapped) => self.target.contains(&mapped),
            None => true,
        })
    }

    fn map_term(&self, term: &Term) -> Option<Term> {
        match term {
            Term::BlankNode(bn) => self.mapping.get(bn).map(|bn2| Term::BlankNode((*bn2).clone())),
            _ => Some(term.clone()),
        }
    }

    fn map_triple(&self, t: &Triple) -> Option<Triple> {
        Some(Triple::new_unchecked(
            self.map_term(t.subject())?,
            t.predicate().clone(),
            self.map_term(t.object())?,
        ))
    }
}
