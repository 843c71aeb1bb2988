use super::graphs_equal;
use crate::term::{BlankNode, NamedNode, Term};
use crate::triple::Triple;
use std::collections::{btree_set, BTreeSet};
use std::fmt;

/// An in-memory RDF graph: a set of [triples](Triple).
///
/// A graph never contains two equal triples;
/// adding a triple that is already present leaves the graph unchanged.
/// Triples are iterated in their natural order (subject, predicate, object),
/// which makes serializations of a graph deterministic.
///
/// Two graphs compare equal (with `==`) iff they are isomorphic,
/// i.e. identical up to a renaming of their blank nodes.
/// See [`graphs_equal`].
#[derive(Clone, Debug, Default)]
pub struct Graph {
    triples: BTreeSet<Triple>,
}

impl Graph {
    /// Build an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of triples in this graph.
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// Whether this graph contains no triple.
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Add a triple to this graph.
    ///
    /// Return `true` iff the triple was not already present.
    pub fn add(&mut self, triple: Triple) -> bool {
        self.triples.insert(triple)
    }

    /// Add all the given triples to this graph.
    ///
    /// Return the number of triples that were not already present.
    pub fn add_all<I>(&mut self, triples: I) -> usize
    where
        I: IntoIterator<Item = Triple>,
    {
        triples
            .into_iter()
            .map(|t| self.add(t))
            .filter(|added| *added)
            .count()
    }

    /// Add all the triples of `other` to this graph (set union).
    ///
    /// Return the number of triples that were not already present.
    pub fn merge(&mut self, other: &Graph) -> usize {
        self.add_all(other.iter().cloned())
    }

    /// Remove a triple from this graph.
    ///
    /// Return `true` iff the triple was present.
    pub fn remove(&mut self, triple: &Triple) -> bool {
        self.triples.remove(triple)
    }

    /// Remove all triples from this graph.
    pub fn clear(&mut self) {
        self.triples.clear()
    }

    /// Whether this graph contains the given triple.
    pub fn contains(&self, triple: &Triple) -> bool {
        self.triples.contains(triple)
    }

    /// Iterate over the triples of this graph.
    pub fn iter(&self) -> btree_set::Iter<'_, Triple> {
        self.triples.iter()
    }

    /// Iterate over the triples matching the given pattern,
    /// where `None` matches any term.
    pub fn triples_matching<'s>(
        &'s self,
        subject: Option<&'s Term>,
        predicate: Option<&'s NamedNode>,
        object: Option<&'s Term>,
    ) -> impl Iterator<Item = &'s Triple> + 's {
        self.triples
            .iter()
            .filter(move |t| t.matches(subject, predicate, object))
    }

    /// Build a new graph containing the triples matching the given pattern,
    /// where `None` matches any term.
    pub fn match_triples(
        &self,
        subject: Option<&Term>,
        predicate: Option<&NamedNode>,
        object: Option<&Term>,
    ) -> Graph {
        self.triples_matching(subject, predicate, object)
            .cloned()
            .collect()
    }

    /// The set of blank nodes occurring in this graph.
    pub fn blank_nodes(&self) -> BTreeSet<&BlankNode> {
        self.triples.iter().flat_map(Triple::blank_nodes).collect()
    }
}

impl PartialEq for Graph {
    fn eq(&self, other: &Graph) -> bool {
        graphs_equal(self, other)
    }
}

impl Eq for Graph {}

impl FromIterator<Triple> for Graph {
    fn from_iter<I: IntoIterator<Item = Triple>>(iter: I) -> Self {
        Graph {
            triples: iter.into_iter().collect(),
        }
    }
}

impl Extend<Triple> for Graph {
    fn extend<I: IntoIterator<Item = Triple>>(&mut self, iter: I) {
        self.triples.extend(iter)
    }
}

impl IntoIterator for Graph {
    type Item = Triple;
    type IntoIter = btree_set::IntoIter<Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.into_iter()
    }
}

impl<'a> IntoIterator for &'a Graph {
    type Item = &'a Triple;
    type IntoIter = btree_set::Iter<'a, Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.iter()
    }
}

/// Displays the graph in N-Triples, one triple per line.
impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for t in &self.triples {
            writeln!(f, "{t}")?;
        }
        Ok(())
    }
}
