use hashbrown::HashMap;
use petgraph::graph::{NodeIndex, UnGraph};

use crate::cooccurrence::CoOccurrence;

/// Undirected weighted graph, nodes in first-seen order.
#[derive(Debug, Default, Clone)]
pub struct CountryGraph {
    pub inner: UnGraph<String, u64>,
    index: HashMap<String, NodeIndex>,
}

impl CountryGraph {
    pub fn from_co_occurrences(table: &[CoOccurrence]) -> Self {
        let mut graph = Self::default();
        for row in table.iter().filter(|r| r.size > 0) {
            graph.add_edge(&row.node_a, &row.node_b, row.size);
        }
        graph
    }

    /// Re-adding an existing pair overwrites its weight.
    pub fn add_edge(&mut self, a: &str, b: &str, weight: u64) {
        let ia = self.node_id(a);
        let ib = self.node_id(b);
        self.inner.update_edge(ia, ib, weight);
    }

    fn node_id(&mut self, name: &str) -> NodeIndex {
        if let Some(i) = self.index.get(name) {
            return *i;
        }
        let i = self.inner.add_node(name.to_string());
        self.index.insert(name.to_string(), i);
        i
    }

    pub fn name(&self, node: NodeIndex) -> &str {
        &self.inner[node]
    }

    pub fn len(&self) -> usize {
        self.inner.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.node_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use petgraph::visit::EdgeRef;

    use super::*;

    fn edge_list(graph: &CountryGraph) -> Vec<(usize, usize, u64)> {
        graph
            .inner
            .edge_references()
            .map(|e| (e.source().index(), e.target().index(), *e.weight()))
            .collect()
    }

    #[test]
    fn nodes_from_edges() {
        let table = vec![
            CoOccurrence::new("Peru", "Chile", 2),
            CoOccurrence::new("Spain", "Chile", 3),
            CoOccurrence::new("Spain", "Peru", 0),
        ];
        let graph = CountryGraph::from_co_occurrences(&table);
        let names: Vec<&str> = graph.inner.node_indices().map(|i| graph.name(i)).collect();
        assert_eq!(names, vec!["Peru", "Chile", "Spain"]);
        assert_eq!(edge_list(&graph), vec![(0, 1, 2), (2, 1, 3)]);
    }

    #[test]
    fn re_adding_edge_overwrites_weight() {
        let mut graph = CountryGraph::default();
        graph.add_edge("USA", "France", 1);
        graph.add_edge("France", "USA", 4);
        assert_eq!(graph.len(), 2);
        assert_eq!(graph.inner.edge_count(), 1);
        assert_eq!(edge_list(&graph)[0].2, 4);
    }
}
