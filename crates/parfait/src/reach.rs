//! Reachability queries and combination counting.
//!
//! [`is_reachable`] is the breadth-first primitive: visited set plus FIFO
//! queue, target tested on dequeue. The combination counts layer on
//! per-source reachability closures so each source's BFS runs once rather
//! than once per candidate target.
//!
//! Everything here is a pure function of an already-built
//! [`FlavorGraph`] - no I/O, no hidden state, so repeated counting on an
//! unchanged graph yields identical results.

use std::collections::{HashMap, HashSet, VecDeque};

use petgraph::graph::NodeIndex;

use crate::domain::{Flavor, PairCombination, TripleCombination};
use crate::graph::FlavorGraph;

/// Whether `target` can be reached from `origin` along stacking rules.
///
/// Every flavor reaches itself - the zero-length path always exists, even
/// for names the graph has never seen. Cycles are safe: visited flavors
/// are never re-enqueued, so the search always terminates.
#[must_use]
pub fn is_reachable(graph: &FlavorGraph, origin: &Flavor, target: &Flavor) -> bool {
    let (Some(origin_index), Some(target_index)) =
        (graph.index_of(origin), graph.index_of(target))
    else {
        // An unknown endpoint admits only the trivial self-path.
        return origin == target;
    };

    let mut visited: HashSet<NodeIndex> = HashSet::new();
    let mut queue: VecDeque<NodeIndex> = VecDeque::new();
    visited.insert(origin_index);
    queue.push_back(origin_index);

    while let Some(index) = queue.pop_front() {
        // The first dequeue is the origin itself, so origin == target
        // answers true here.
        if index == target_index {
            return true;
        }
        for neighbor in graph.neighbor_indices(index) {
            if visited.insert(neighbor) {
                queue.push_back(neighbor);
            }
        }
    }

    false
}

/// All flavors reachable from `origin`, itself included.
#[must_use]
pub fn reachable_from(graph: &FlavorGraph, origin: &Flavor) -> HashSet<Flavor> {
    let Some(origin_index) = graph.index_of(origin) else {
        return HashSet::from([origin.clone()]);
    };
    closure(graph, origin_index)
        .into_iter()
        .map(|index| graph.flavor_at(index).clone())
        .collect()
}

/// BFS closure of one node, the node itself included.
fn closure(graph: &FlavorGraph, origin: NodeIndex) -> HashSet<NodeIndex> {
    let mut visited: HashSet<NodeIndex> = HashSet::new();
    let mut queue: VecDeque<NodeIndex> = VecDeque::new();
    visited.insert(origin);
    queue.push_back(origin);

    while let Some(index) = queue.pop_front() {
        for neighbor in graph.neighbor_indices(index) {
            if visited.insert(neighbor) {
                queue.push_back(neighbor);
            }
        }
    }

    visited
}

/// Every ordered two-flavor combination `(first, second)` where both are
/// source flavors and `second` is reachable from `first`.
///
/// The iteration domain is [`FlavorGraph::source_flavors`]: a flavor that
/// only ever appears as a destination heads no combination and is not
/// drawn as a partner either. Emission is in discovery order - sources
/// outer, partners inner, both in registration order.
#[must_use]
pub fn pair_combinations(graph: &FlavorGraph) -> Vec<PairCombination> {
    let sources = graph.source_indices();
    let mut combinations = Vec::new();

    for &first in &sources {
        let reachable = closure(graph, first);
        for &second in &sources {
            if second != first && reachable.contains(&second) {
                combinations.push(PairCombination {
                    first: graph.flavor_at(first).clone(),
                    second: graph.flavor_at(second).clone(),
                });
            }
        }
    }

    tracing::debug!(
        sources = sources.len(),
        combinations = combinations.len(),
        "Pair counting complete"
    );

    combinations
}

/// Every ordered three-flavor combination `(first, second, third)` where
/// all three are source flavors, `second` is reachable from `first`, and
/// `third` is reachable from `second`.
///
/// A combination never repeats a flavor: candidates for `third` equal to
/// `first` or `second` are excluded before the second reachability hop is
/// tested. (The permissive variant that admits repeated flavors and
/// degenerate self-chains is deliberately not implemented.)
#[must_use]
pub fn triple_combinations(graph: &FlavorGraph) -> Vec<TripleCombination> {
    let sources = graph.source_indices();
    // One closure per source, computed up front and shared by both hops.
    let closures: HashMap<NodeIndex, HashSet<NodeIndex>> = sources
        .iter()
        .map(|&source| (source, closure(graph, source)))
        .collect();

    let mut combinations = Vec::new();

    for &first in &sources {
        for &second in &sources {
            if second == first || !closures[&first].contains(&second) {
                continue;
            }
            for &third in &sources {
                if third == first || third == second {
                    continue;
                }
                if closures[&second].contains(&third) {
                    combinations.push(TripleCombination {
                        first: graph.flavor_at(first).clone(),
                        second: graph.flavor_at(second).clone(),
                        third: graph.flavor_at(third).clone(),
                    });
                }
            }
        }
    }

    tracing::debug!(
        sources = sources.len(),
        combinations = combinations.len(),
        "Triple counting complete"
    );

    combinations
}
