//! An in-memory store, keeping one [`Graph`] per graph name.
use std::collections::BTreeMap;

use log::debug;
use rdfkit_api::graph::Graph;
use rdfkit_api::store::{GraphName, Store, StoreError};
use rdfkit_api::term::{NamedNode, Term};

/// A store keeping all its graphs in memory.
///
/// Graph names are kept sorted, the default graph first.
/// No operation of this store can fail.
#[derive(Clone, Debug, Default)]
pub struct InMemoryStore {
    graphs: BTreeMap<GraphName, Graph>,
}

impl InMemoryStore {
    /// Build an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// The total number of triples in this store,
    /// counting a triple once per graph containing it.
    pub fn len(&self) -> usize {
        self.graphs.values().map(Graph::len).sum()
    }

    /// Whether this store contains no triple.
    pub fn is_empty(&self) -> bool {
        self.graphs.values().all(Graph::is_empty)
    }

    /// Borrow the graph named `name`, if any.
    pub fn get(&self, name: &GraphName) -> Option<&Graph> {
        self.graphs.get(name)
    }
}

impl Store for InMemoryStore {
    fn add(&mut self, name: &GraphName, graph: &Graph) -> Result<(), StoreError> {
        let stored = self.graphs.entry(name.clone()).or_default();
        let added = stored.merge(graph);
        debug!("added {added} new triple(s) to {name} ({} in total)", stored.len());
        Ok(())
    }

    fn graph(&self, name: Option<&GraphName>) -> Result<Graph, StoreError> {
        Ok(match name {
            Some(name) => self.graphs.get(name).cloned().unwrap_or_default(),
            None => {
                let mut union = Graph::new();
                for graph in self.graphs.values() {
                    union.merge(graph);
                }
                union
            }
        })
    }

    fn match_triples(
        &self,
        subject: Option<&Term>,
        predicate: Option<&NamedNode>,
        object: Option<&Term>,
        name: Option<&GraphName>,
    ) -> Result<Graph, StoreError> {
        let graphs: Vec<&Graph> = match name {
            Some(name) => self.graphs.get(name).into_iter().collect(),
            None => self.graphs.values().collect(),
        };
        Ok(graphs
            .into_iter()
            .flat_map(|g| g.triples_matching(subject, predicate, object))
            .cloned()
            .collect())
    }

    fn delete(&mut self, name: &GraphName) -> Result<(), StoreError> {
        if self.graphs.remove(name).is_some() {
            debug!("deleted graph {name}");
        }
        Ok(())
    }

    fn graph_names(&self) -> Result<Vec<GraphName>, StoreError> {
        Ok(self.graphs.keys().cloned().collect())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        self.graphs.clear();
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rdfkit_api::store::test::*;

    rdfkit_api::test_store_impl!(store_suite, InMemoryStore);
    rdfkit_api::test_store_impl!(store_suite_new, InMemoryStore, InMemoryStore::new);

    #[test]
    fn len_counts_per_graph() -> Result<(), StoreError> {
        let mut store = InMemoryStore::new();
        let g = single(&S_A, &P, O.clone());
        store.add(&GraphName::Default, &g)?;
        store.add(&GraphName::named("http://example.org/g").unwrap(), &g)?;
        assert_eq!(store.len(), 2);
        assert_eq!(store.graph(None)?.len(), 1);
        assert!(store.get(&GraphName::Default).is_some());
        store.clear()?;
        assert!(store.is_empty());
        Ok(())
    }
}
