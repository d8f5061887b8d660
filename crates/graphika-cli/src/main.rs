//! Graphika CLI - demo and benchmark driver for the algorithm suite.
//!
//! The library API is for building applications; the CLI is for showcasing
//! the algorithms on sample or user-supplied graphs and for timing them on
//! generated ones.

mod commands;
mod generate;
mod load;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Graphika graph-algorithms driver.
///
/// A command-line interface for running the algorithm suite on showcase
/// graphs, user-supplied edge lists, and generated benchmark graphs.
#[derive(Parser)]
#[command(name = "graphika")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, global = true, default_value = "table")]
    format: OutputFormat,

    /// Suppress progress and info messages
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Enable verbose debug logging
    #[arg(long, short, global = true)]
    verbose: bool,
}

/// Output format options.
#[derive(Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    /// Human-readable table format (default for TTY)
    #[default]
    Table,
    /// Machine-readable JSON format
    Json,
}

/// Available commands.
#[derive(Subcommand)]
enum Commands {
    /// Run every algorithm on the built-in showcase graphs
    Demo {
        /// Edge-list file (whitespace-separated `from to weight` lines)
        /// to analyze instead of the built-in graphs
        #[arg(long)]
        graph: Option<PathBuf>,

        /// Number of centers for the k-centers heuristic
        #[arg(long, default_value_t = 2)]
        centers: usize,
    },

    /// Time the algorithms on generated graphs
    Bench {
        /// Restrict to one algorithm family
        #[arg(long)]
        family: Option<BenchFamily>,

        /// Seed for the random graph generator
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },
}

/// Benchmark family selection.
#[derive(Clone, Copy, ValueEnum)]
enum BenchFamily {
    /// Dijkstra and BFS shortest paths
    ShortestPath,
    /// Kruskal and Prim spanning trees
    Mst,
    /// Connected-component search
    Connectivity,
    /// Greedy and Welsh-Powell coloring
    Coloring,
    /// TSP exact and heuristic solvers
    Tsp,
}

fn main() {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    } else if !cli.quiet {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .init();
    }

    let result = match cli.command {
        Commands::Demo { graph, centers } => {
            commands::demo::run(graph.as_deref(), centers, cli.format, cli.quiet)
        }
        Commands::Bench { family, seed } => {
            commands::bench::run(family, seed, cli.format, cli.quiet)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
