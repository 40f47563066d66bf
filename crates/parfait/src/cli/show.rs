//! `parfait show` command implementation.

use std::path::Path;

use parfait::output::{self, OutputConfig};
use parfait::FlavorGraph;
use parfait_edgelist::read_edge_list;

/// Run the show command.
///
/// Prints one line per flavor with outgoing rules: the base flavor and its
/// toppings in rule order. Destination-only flavors head no line.
pub fn run(menu: &Path) -> Result<(), parfait::Error> {
    let list = read_edge_list(menu)?;
    let graph = FlavorGraph::from_edge_list(&list);
    let config = OutputConfig::from_env();

    for base in graph.source_flavors() {
        let toppings = graph
            .toppings_for(base)
            .iter()
            .map(|flavor| flavor.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        println!("{}: {toppings}", output::info(base.as_str(), &config));
    }

    Ok(())
}
