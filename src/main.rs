//! Puzzlers - Command Line Interface
//!
//! Runs one of the solvers on an input file and prints the answer.
//! Run with `--help` to see all available options.

use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::level_filters::LevelFilter;

use puzzlers::{
    allocation::solve_planets,
    data::{load_machines, load_planets},
    display::{display_allocations, display_selection, format_json},
    gain::GainModel,
    graph::build_graph,
    models::TieBreak,
    paths::enumerate_paths,
    search::find_cheapest_combination,
};

/// Command-line arguments for Puzzlers.
#[derive(Parser, Debug)]
#[command(name = "puzzlers")]
#[command(author, version, about = "Batch solvers for the facebull and zergrush puzzles", long_about = None)]
struct Cli {
    /// How to choose between equally good solutions
    ///
    /// `keep-first` keeps the first solution found. The classic zergrush
    /// solver kept the last of equally good planet allocations; pass
    /// `keep-last` to reproduce its output.
    #[arg(long, value_enum, default_value_t = TieBreak::KeepFirst, global = true)]
    tie_break: TieBreak,

    /// Print the result as JSON instead of the puzzle format
    #[arg(long, global = true)]
    json: bool,

    /// Log progress to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Cheapest set of machines converting every chemical into every other
    Facebull {
        /// Machine list, one "name source target price" per line
        input: PathBuf,
    },

    /// Best zerg allocation across the bases of each planet
    Zergrush {
        /// Planet list
        input: PathBuf,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Facebull { input } => {
            let edges = load_machines(&input)?;
            let graph = build_graph(&edges);
            let table = enumerate_paths(&graph);
            let selection = find_cheapest_combination(&graph, &table, cli.tie_break);

            if cli.json {
                println!("{}", format_json(&selection)?);
            } else {
                display_selection(&selection);
            }
        }
        Commands::Zergrush { input } => {
            let planets = load_planets(&input)?;
            let allocations = solve_planets(&GainModel::default(), &planets, cli.tie_break);

            if cli.json {
                println!("{}", format_json(&allocations)?);
            } else {
                display_allocations(&allocations);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_tie_break_help_mentions_zergrush_default() {
        let help = Cli::command().render_long_help().to_string();
        let help = help.split_whitespace().collect::<Vec<_>>().join(" ");
        assert!(help.contains("keep-last"), "{help}");
        assert!(help.contains("zergrush solver kept the last"), "{help}");
    }

    #[test]
    fn test_tie_break_defaults_to_keep_first() {
        let cli = Cli::parse_from(["puzzlers", "zergrush", "planets.txt"]);
        assert_eq!(cli.tie_break, TieBreak::KeepFirst);

        let cli = Cli::parse_from(["puzzlers", "zergrush", "planets.txt", "--tie-break", "keep-last"]);
        assert_eq!(cli.tie_break, TieBreak::KeepLast);
    }
}
