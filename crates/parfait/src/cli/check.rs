//! `parfait check` command implementation.

use std::path::Path;

use parfait::output::{self, OutputConfig};
use parfait::{is_reachable, Flavor, FlavorGraph};
use parfait_edgelist::read_edge_list;

/// Run the check command.
pub fn run(menu: &Path, from: &str, to: &str) -> Result<(), parfait::Error> {
    let list = read_edge_list(menu)?;
    let graph = FlavorGraph::from_edge_list(&list);

    let from = Flavor::from(from);
    let to = Flavor::from(to);
    let config = OutputConfig::from_env();

    if is_reachable(&graph, &from, &to) {
        println!(
            "{} {} {}",
            output::info(to.as_str(), &config),
            output::success("can follow", &config),
            output::info(from.as_str(), &config)
        );
    } else {
        println!(
            "{} {} {}",
            output::info(to.as_str(), &config),
            output::error("cannot follow", &config),
            output::info(from.as_str(), &config)
        );
    }

    Ok(())
}
