//! The flavor stacking graph.
//!
//! Owns the set of known flavors and the directed "may be stacked atop"
//! rules between them. Queries never fail: asking about a flavor the graph
//! has never seen yields empty results.
//!
//! # Graph Representation and Edge Direction Convention
//!
//! The graph uses petgraph's `DiGraph` with nodes carrying flavor names and
//! unweighted edges. An edge `a -> b` means flavor `b` may be placed
//! directly after flavor `a`. A `HashMap` locates a flavor's node index;
//! every flavor referenced by a rule has an entry.
//!
//! Parallel edges are kept: inserting the same rule twice leaves two edges
//! in the graph. Reachability tracks visited flavors, so duplicates only
//! show up in [`FlavorGraph::rule_count`] and rule listings.

use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};

use crate::domain::{Flavor, MenuStats};
use parfait_edgelist::EdgeList;

/// Directed graph of flavor stacking rules.
#[derive(Debug, Clone, Default)]
pub struct FlavorGraph {
    /// Stacking rules. Node weights are flavor names; node indices are
    /// allocated in registration order.
    graph: DiGraph<Flavor, ()>,

    /// Mapping from flavor to graph node index.
    node_map: HashMap<Flavor, NodeIndex>,
}

impl FlavorGraph {
    /// Create an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from parsed edge-list records.
    ///
    /// All listed flavors are registered first, in first-seen order, so
    /// node order matches the input; rules are then inserted in file order.
    #[must_use]
    pub fn from_edge_list(list: &EdgeList) -> Self {
        let mut graph = Self::new();
        for flavor in &list.flavors {
            graph.register(Flavor::from(flavor.as_str()));
        }
        for (source, destination) in &list.edges {
            graph.add_rule(
                Flavor::from(source.as_str()),
                Flavor::from(destination.as_str()),
            );
        }

        tracing::debug!(
            flavors = graph.flavor_count(),
            rules = graph.rule_count(),
            "Stacking graph built"
        );

        graph
    }

    /// Node index for `flavor`, registering it if unseen.
    fn register(&mut self, flavor: Flavor) -> NodeIndex {
        if let Some(&index) = self.node_map.get(&flavor) {
            return index;
        }
        let index = self.graph.add_node(flavor.clone());
        self.node_map.insert(flavor, index);
        index
    }

    /// Insert a directed stacking rule: `to` may be placed after `from`.
    ///
    /// Unseen endpoints are registered as flavors. Duplicate rules are kept
    /// as parallel edges.
    pub fn add_rule(&mut self, from: Flavor, to: Flavor) {
        let source = self.register(from);
        let destination = self.register(to);
        self.graph.add_edge(source, destination, ());
    }

    /// Outgoing toppings of `flavor`, in rule-insertion order.
    ///
    /// Empty for a flavor with no outgoing rules - or one the graph has
    /// never seen. Lookups never fail.
    #[must_use]
    pub fn toppings_for(&self, flavor: &Flavor) -> Vec<&Flavor> {
        let Some(&index) = self.node_map.get(flavor) else {
            return Vec::new();
        };
        let mut toppings: Vec<&Flavor> = self
            .graph
            .neighbors(index)
            .map(|neighbor| &self.graph[neighbor])
            .collect();
        // petgraph walks out-edges most-recent-first; restore insertion order
        toppings.reverse();
        toppings
    }

    /// Flavors with at least one outgoing rule, in registration order.
    ///
    /// This is the iteration domain of the combination counts: a flavor
    /// that only ever appears as a destination is excluded.
    #[must_use]
    pub fn source_flavors(&self) -> Vec<&Flavor> {
        self.source_indices()
            .into_iter()
            .map(|index| &self.graph[index])
            .collect()
    }

    /// All registered flavors, in registration order.
    pub fn flavors(&self) -> impl Iterator<Item = &Flavor> {
        self.graph.node_indices().map(|index| &self.graph[index])
    }

    /// Number of registered flavors.
    #[must_use]
    pub fn flavor_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of stacking rules, duplicates included.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Summary counts for reporting.
    #[must_use]
    pub fn stats(&self) -> MenuStats {
        MenuStats {
            flavors: self.flavor_count(),
            rules: self.rule_count(),
            sources: self.source_indices().len(),
        }
    }

    /// Node indices of flavors with at least one outgoing rule, in
    /// registration order.
    pub(crate) fn source_indices(&self) -> Vec<NodeIndex> {
        self.graph
            .node_indices()
            .filter(|&index| self.graph.neighbors(index).next().is_some())
            .collect()
    }

    /// Node index for `flavor`, if it has ever been registered.
    pub(crate) fn index_of(&self, flavor: &Flavor) -> Option<NodeIndex> {
        self.node_map.get(flavor).copied()
    }

    /// The flavor at a node index.
    pub(crate) fn flavor_at(&self, index: NodeIndex) -> &Flavor {
        &self.graph[index]
    }

    /// Outgoing neighbor indices of a node, duplicates included.
    pub(crate) fn neighbor_indices(
        &self,
        index: NodeIndex,
    ) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.neighbors(index)
    }
}
