//! Integration tests for the stacking graph and the combination counts.
//!
//! These tests pin the counting semantics through the public API: BFS
//! reachability, source-flavor iteration, the distinct-flavors triple
//! policy, and determinism of discovery order.

use parfait::{
    is_reachable, pair_combinations, triple_combinations, Flavor, FlavorGraph, PairCombination,
};
use parfait_edgelist::parse_edge_list;

fn graph_of(rules: &[(&str, &str)]) -> FlavorGraph {
    let mut graph = FlavorGraph::new();
    for &(from, to) in rules {
        graph.add_rule(Flavor::from(from), Flavor::from(to));
    }
    graph
}

fn pair(first: &str, second: &str) -> PairCombination {
    PairCombination {
        first: Flavor::from(first),
        second: Flavor::from(second),
    }
}

fn pair_names(combinations: &[PairCombination]) -> Vec<(String, String)> {
    combinations
        .iter()
        .map(|c| (c.first.to_string(), c.second.to_string()))
        .collect()
}

// ========== Reachability ==========

#[test]
fn direct_neighbors_are_reachable() {
    let graph = graph_of(&[("chocolate", "vanilla")]);
    assert!(is_reachable(
        &graph,
        &Flavor::from("chocolate"),
        &Flavor::from("vanilla")
    ));
    assert!(!is_reachable(
        &graph,
        &Flavor::from("vanilla"),
        &Flavor::from("chocolate")
    ));
}

#[test]
fn reachability_follows_multi_hop_paths() {
    let graph = graph_of(&[("a", "b"), ("b", "c"), ("c", "d")]);
    assert!(is_reachable(&graph, &Flavor::from("a"), &Flavor::from("d")));
    assert!(!is_reachable(&graph, &Flavor::from("d"), &Flavor::from("a")));
}

#[test]
fn self_reachability_holds_for_every_source_flavor() {
    let graph = graph_of(&[("a", "b"), ("b", "c"), ("c", "a")]);
    for flavor in graph.source_flavors() {
        assert!(is_reachable(&graph, flavor, flavor));
    }
}

#[test]
fn bfs_terminates_on_a_two_cycle() {
    let graph = graph_of(&[("a", "b"), ("b", "a")]);
    assert!(is_reachable(&graph, &Flavor::from("a"), &Flavor::from("b")));
    assert!(is_reachable(&graph, &Flavor::from("b"), &Flavor::from("a")));
}

// ========== Pair Combinations ==========

#[test]
fn line_graph_has_one_pair() {
    // b and c are reachable from a, but c has no outgoing rules and is
    // therefore not in the counting domain.
    let graph = graph_of(&[("a", "b"), ("b", "c")]);
    assert_eq!(pair_combinations(&graph), vec![pair("a", "b")]);
}

#[test]
fn two_cycle_has_two_pairs() {
    let graph = graph_of(&[("a", "b"), ("b", "a")]);
    assert_eq!(
        pair_combinations(&graph),
        vec![pair("a", "b"), pair("b", "a")]
    );
}

#[test]
fn three_cycle_has_all_six_ordered_pairs() {
    let graph = graph_of(&[("a", "b"), ("b", "c"), ("c", "a")]);
    assert_eq!(
        pair_names(&pair_combinations(&graph)),
        vec![
            ("a".to_string(), "b".to_string()),
            ("a".to_string(), "c".to_string()),
            ("b".to_string(), "a".to_string()),
            ("b".to_string(), "c".to_string()),
            ("c".to_string(), "a".to_string()),
            ("c".to_string(), "b".to_string()),
        ]
    );
}

#[test]
fn destination_only_flavors_join_no_pair() {
    // b and c only ever appear as destinations
    let graph = graph_of(&[("a", "b"), ("a", "c")]);
    assert!(pair_combinations(&graph).is_empty());
}

#[test]
fn duplicate_rules_do_not_double_count() {
    let graph = graph_of(&[("a", "b"), ("a", "b"), ("b", "c")]);
    assert_eq!(graph.rule_count(), 3);
    assert_eq!(pair_combinations(&graph), vec![pair("a", "b")]);
}

#[test]
fn pair_count_matches_naive_reachability_scan() {
    let graph = graph_of(&[("a", "b"), ("b", "c"), ("c", "a"), ("c", "d"), ("e", "a")]);

    let sources = graph.source_flavors();
    let mut expected = 0;
    for &first in &sources {
        for &second in &sources {
            if first != second && is_reachable(&graph, first, second) {
                expected += 1;
            }
        }
    }

    assert_eq!(pair_combinations(&graph).len(), expected);
}

// ========== Triple Combinations ==========

#[test]
fn line_graph_has_no_triples() {
    // The only reachable source pair is (a, b); the sole remaining source
    // flavor distinct from both is unreachable from b.
    let graph = graph_of(&[("a", "b"), ("b", "c")]);
    assert!(triple_combinations(&graph).is_empty());
}

#[test]
fn longer_line_graph_has_one_triple() {
    let graph = graph_of(&[("a", "b"), ("b", "c"), ("c", "d")]);
    let triples = triple_combinations(&graph);

    assert_eq!(triples.len(), 1);
    assert_eq!(triples[0].to_string(), "a -> b -> c");
}

#[test]
fn three_cycle_has_all_six_ordered_triples() {
    // Every ordered pair is reachable and the remaining third flavor is
    // always reachable from the middle one.
    let graph = graph_of(&[("a", "b"), ("b", "c"), ("c", "a")]);
    assert_eq!(triple_combinations(&graph).len(), 6);
}

#[test]
fn triples_never_repeat_a_flavor() {
    let graph = graph_of(&[("a", "b"), ("b", "a"), ("b", "c"), ("c", "b")]);
    for triple in triple_combinations(&graph) {
        assert_ne!(triple.first, triple.second, "{triple}");
        assert_ne!(triple.first, triple.third, "{triple}");
        assert_ne!(triple.second, triple.third, "{triple}");
    }
}

// ========== Determinism ==========

#[test]
fn counting_twice_yields_identical_results() {
    let graph = graph_of(&[("a", "b"), ("b", "c"), ("c", "a"), ("a", "d")]);

    assert_eq!(pair_combinations(&graph), pair_combinations(&graph));
    assert_eq!(triple_combinations(&graph), triple_combinations(&graph));
}

// ========== Building from Edge Lists ==========

#[test]
fn graph_from_parsed_menu_matches_hand_built_graph() {
    let list = parse_edge_list("a -> b\nb -> c\nc -> a\n".as_bytes()).unwrap();
    let from_menu = FlavorGraph::from_edge_list(&list);
    let by_hand = graph_of(&[("a", "b"), ("b", "c"), ("c", "a")]);

    assert_eq!(
        pair_combinations(&from_menu),
        pair_combinations(&by_hand)
    );
    assert_eq!(
        triple_combinations(&from_menu),
        triple_combinations(&by_hand)
    );
}
