use clap::{Parser, Subcommand};
use isomatch::signature::Method;
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "iso", version, about = "Exact graph isomorphism testing over small graphs")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decide whether two graphs are isomorphic and print a witness mapping
    Check {
        /// First graph file (edge-list or adjacency-matrix encoding)
        first: PathBuf,
        /// Second graph file
        second: PathBuf,
        /// Treat the inputs as directed graphs
        #[arg(long)]
        directed: bool,
        /// Pruning method for candidate node pairs
        #[arg(long, value_enum, default_value_t)]
        method: Method,
        /// Emit machine-readable JSON instead of the human report
        #[arg(long)]
        json: bool,
    },
    /// Parse a graph file and print its adjacency structure
    Show {
        /// Graph file (edge-list or adjacency-matrix encoding)
        graph: PathBuf,
        /// Treat the input as a directed graph
        #[arg(long)]
        directed: bool,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check {
            first,
            second,
            directed,
            method,
            json,
        } => commands::check::run(&first, &second, directed, method, json),
        Commands::Show { graph, directed } => commands::show::run(&graph, directed),
    };

    if let Err(err) = result {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
