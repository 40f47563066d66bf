//! `parfait stats` command implementation.

use std::path::Path;

use parfait::output::{self, OutputConfig};
use parfait::FlavorGraph;
use parfait_edgelist::read_edge_list;

/// Run the stats command.
pub fn run(menu: &Path, json: bool) -> Result<(), parfait::Error> {
    let list = read_edge_list(menu)?;
    let graph = FlavorGraph::from_edge_list(&list);
    let stats = graph.stats();

    if json {
        println!("{}", output::to_json(&stats)?);
        return Ok(());
    }

    let config = OutputConfig::from_env();
    println!("{}", output::emphasis("Menu statistics", &config));
    println!(
        "  Flavors: {}",
        output::success(&stats.flavors.to_string(), &config)
    );
    println!(
        "  Stacking rules: {}",
        output::success(&stats.rules.to_string(), &config)
    );
    println!(
        "  Source flavors: {}",
        output::success(&stats.sources.to_string(), &config)
    );

    Ok(())
}
