//! # Parfait: flavor stacking analysis
//!
//! Parfait reads a menu of directed stacking rules ("this flavor may be
//! placed atop that one"), builds a directed graph, and answers
//! reachability questions over it - most importantly, how many ordered
//! two- and three-flavor combinations the rules admit.
//!
//! ## Design
//!
//! - [`FlavorGraph`] owns the node set and the adjacency; it is built once
//!   from parsed edge-list records and queried read-only afterwards.
//! - The reachability engine ([`is_reachable`], [`pair_combinations`],
//!   [`triple_combinations`]) is a pure function of the built graph: BFS
//!   with a visited set is the single primitive, and the counting routines
//!   iterate the source-flavor set (flavors with at least one outgoing
//!   rule) - a flavor that only ever appears as a destination takes no part
//!   in the counts.
//! - Lookups never fail: unknown flavors have no toppings and reach only
//!   themselves.
//!
//! ## Quick Start
//!
//! ```
//! use parfait::{pair_combinations, triple_combinations, FlavorGraph};
//! use parfait_edgelist::parse_edge_list;
//!
//! let menu = "chocolate -> vanilla\nvanilla -> mint\n";
//! let list = parse_edge_list(menu.as_bytes())?;
//! let graph = FlavorGraph::from_edge_list(&list);
//!
//! // vanilla is the only source flavor reachable from another source
//! assert_eq!(pair_combinations(&graph).len(), 1);
//! assert_eq!(triple_combinations(&graph).len(), 0);
//! # Ok::<(), parfait_edgelist::Error>(())
//! ```

mod domain;
mod error;
mod graph;
pub mod output;
mod reach;

pub use domain::{Flavor, MenuStats, PairCombination, TripleCombination};
pub use error::{Error, Result};
pub use graph::FlavorGraph;
pub use output::OutputConfig;
pub use reach::{is_reachable, pair_combinations, reachable_from, triple_combinations};
