//! `parfait pairs` command implementation.

use std::path::Path;

use parfait::output::{self, OutputConfig, PairReport};
use parfait::{pair_combinations, FlavorGraph};
use parfait_edgelist::read_edge_list;

/// Run the pairs command.
pub fn run(menu: &Path, quiet: bool, json: bool) -> Result<(), parfait::Error> {
    let list = read_edge_list(menu)?;
    let graph = FlavorGraph::from_edge_list(&list);
    let combinations = pair_combinations(&graph);

    if json {
        println!("{}", output::to_json(&PairReport::new(&combinations))?);
        return Ok(());
    }

    let config = OutputConfig::from_env();
    if !quiet {
        for combination in &combinations {
            println!(
                "  {} {} {}",
                output::info(combination.first.as_str(), &config),
                output::muted("->", &config),
                output::info(combination.second.as_str(), &config),
            );
        }
    }
    println!(
        "{}: {}",
        output::emphasis("Two-flavor combinations", &config),
        output::success(&combinations.len().to_string(), &config)
    );

    Ok(())
}
