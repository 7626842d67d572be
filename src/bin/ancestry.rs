//! CLI entry point for the `ancestry` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use ancestry::cli::commands;
use ancestry::GraphError;

#[derive(Parser)]
#[command(
    name = "ancestry",
    about = "Directed-graph traversals and the earliest-ancestor query"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the seven-vertex sample graph and print every traversal
    Demo,
    /// Find the earliest ancestor of an individual
    Ancestor {
        /// Relationship pairs as CHILD,PARENT (or a bare CHILD with no parent)
        pairs: Vec<String>,
        /// The individual to start from
        #[arg(long)]
        start: i64,
        /// Read pairs from a JSON file: [[child, parent], ...]
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// List every maximal ancestor chain from an individual
    Paths {
        /// Relationship pairs as CHILD,PARENT (or a bare CHILD with no parent)
        pairs: Vec<String>,
        /// The individual to start from
        #[arg(long)]
        start: i64,
        /// Read pairs from a JSON file: [[child, parent], ...]
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

fn collect_pairs(
    inline: &[String],
    file: Option<&PathBuf>,
) -> Result<Vec<(i64, Option<i64>)>, GraphError<i64>> {
    let mut pairs = Vec::new();
    if let Some(path) = file {
        pairs.extend(commands::read_pairs_file(path)?);
    }
    for arg in inline {
        pairs.push(commands::parse_pair(arg)?);
    }
    Ok(pairs)
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    if cli.verbose {
        // env_logger is only available in dev/test builds
        eprintln!("Verbose mode enabled");
    }

    let result = match cli.command {
        Commands::Demo => commands::cmd_demo(json),
        Commands::Ancestor { pairs, start, file } => collect_pairs(&pairs, file.as_ref())
            .and_then(|pairs| commands::cmd_ancestor(&pairs, start, json)),
        Commands::Paths { pairs, start, file } => collect_pairs(&pairs, file.as_ref())
            .and_then(|pairs| commands::cmd_paths(&pairs, start, json)),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) => 1,
            GraphError::Json(_) => 2,
            GraphError::InvalidPair(_) => 3,
            GraphError::VertexNotFound(_) => 4,
        };
        process::exit(code);
    }
}
