//! `parfait triples` command implementation.

use std::path::Path;

use parfait::output::{self, OutputConfig, TripleReport};
use parfait::{triple_combinations, FlavorGraph};
use parfait_edgelist::read_edge_list;

/// Run the triples command.
pub fn run(menu: &Path, quiet: bool, json: bool) -> Result<(), parfait::Error> {
    let list = read_edge_list(menu)?;
    let graph = FlavorGraph::from_edge_list(&list);
    let combinations = triple_combinations(&graph);

    if json {
        println!("{}", output::to_json(&TripleReport::new(&combinations))?);
        return Ok(());
    }

    let config = OutputConfig::from_env();
    if !quiet {
        for combination in &combinations {
            println!(
                "  {} {} {} {} {}",
                output::info(combination.first.as_str(), &config),
                output::muted("->", &config),
                output::info(combination.second.as_str(), &config),
                output::muted("->", &config),
                output::info(combination.third.as_str(), &config),
            );
        }
    }
    println!(
        "{}: {}",
        output::emphasis("Three-flavor combinations", &config),
        output::success(&combinations.len().to_string(), &config)
    );

    Ok(())
}
