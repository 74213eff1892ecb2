//! Read a cost matrix from stdin or a file, run one algorithm, print the result.

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use flexi_logger::Logger;
use log::{debug, error};
use thiserror::Error;

use relaxation::{dijkstra, input, kruskal, prim, render, CostMatrix, LabelingError, DEFAULT_NO_EDGE};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Algorithm {
    /// Shortest paths from the source
    Dijkstra,
    /// Minimum spanning tree grown from the source
    Prim,
    /// Minimum spanning tree by sorted edges (no source)
    Kruskal,
}

/// Input: vertex count, the n x n matrix row by row, then the source vertex
/// (omitted for kruskal), all whitespace separated.
#[derive(Debug, Parser)]
#[command(name = "relax", version, about)]
struct Cli {
    #[arg(value_enum)]
    algorithm: Algorithm,

    /// Matrix entry meaning "no edge"
    #[arg(long, default_value_t = i64::from(DEFAULT_NO_EDGE), env = "RELAX_NO_EDGE")]
    no_edge: i64,

    /// Read from this file instead of stdin
    #[arg(long, short)]
    input: Option<PathBuf>,

    /// Log at debug level (RUST_LOG overrides)
    #[arg(long, short)]
    verbose: bool,
}

/// Failures of one invocation: reading the input, or anything the library rejects
#[derive(Debug, Error)]
enum CliError {
    #[error("cannot read {name}: {source}")]
    Io { name: String, source: std::io::Error },

    #[error(transparent)]
    Labeling(#[from] LabelingError),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    let _logger = match Logger::try_with_env_or_str(level).and_then(|logger| logger.start()) {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("Warning: Failed to initialize logging: {e}");
            None
        }
    };

    match run(&cli) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<String, CliError> {
    let text = read_input(cli)?;
    let needs_source = !matches!(cli.algorithm, Algorithm::Kruskal);
    let problem = input::parse_problem(&text, needs_source)?;
    debug!("read {} vertices, source {:?}", problem.rows.len(), problem.source);

    let graph = CostMatrix::new(problem.rows, cli.no_edge)?;
    let source = problem.source.unwrap_or_default();

    let output = match cli.algorithm {
        Algorithm::Dijkstra => {
            let paths = dijkstra(&graph, source)?;
            format!(
                "The shortest paths from source {source} to all other vertices:\n{}",
                render::shortest_paths(&paths)
            )
        }
        Algorithm::Prim => {
            let tree = prim(&graph, source)?;
            format!("Minimum Spanning Tree:\n{}", render::prim_tree(&tree))
        }
        Algorithm::Kruskal => render::kruskal_tree(&kruskal(&graph)),
    };
    Ok(output)
}

fn read_input(cli: &Cli) -> Result<String, CliError> {
    match &cli.input {
        Some(path) => std::fs::read_to_string(path).map_err(|source| CliError::Io {
            name: path.display().to_string(),
            source,
        }),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(|source| CliError::Io { name: "stdin".to_string(), source })?;
            Ok(text)
        }
    }
}
