use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use toposort::{
    drawing::{cycle_candidates, render_sorted},
    edgelist::parse_topology,
    Frontier, SortOptions,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        for cause in err.chain().skip(1) {
            eprintln!("  caused by: {cause}");
        }
        std::process::exit(1);
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "topoviz",
    about = "Topologically sort an `a -> b` edge list and draw the result as a Graphviz digraph."
)]
struct Cli {
    /// Topology file with one `<id> -> <id>` edge per line, or `-` for stdin.
    #[arg(short = 'T', long = "topo", value_name = "FILE")]
    topo: PathBuf,
    /// Which ready node the sort takes next.
    #[arg(long, value_enum, default_value_t = FrontierArg::Lexicographic)]
    frontier: FrontierArg,
    /// Iteration bound for the sort (defaults to twice the number of nodes and edges).
    #[arg(long, value_name = "N")]
    max_iterations: Option<usize>,
    /// Log more (-v for debug, -vv for trace). RUST_LOG overrides this.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum FrontierArg {
    /// Smallest id first.
    Lexicographic,
    /// In the order nodes become ready.
    Fifo,
}

impl From<FrontierArg> for Frontier {
    fn from(arg: FrontierArg) -> Self {
        match arg {
            FrontierArg::Lexicographic => Frontier::Lexicographic,
            FrontierArg::Fifo => Frontier::Fifo,
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let (source, input) = read_input(&cli.topo)?;
    let list =
        parse_topology(&input).with_context(|| format!("failed to parse topology {source}"))?;
    info!(
        %source,
        nodes = list.topology.nodes().len(),
        edges = list.topology.edges().count(),
        "parsed topology"
    );

    let options = SortOptions {
        frontier: cli.frontier.into(),
        max_iterations: cli.max_iterations,
    };
    let order = match list.topology.sort_with(&options) {
        Ok(order) => order,
        Err(err) => {
            if let Some(diagnostic) = err.cycle() {
                info!("finding candidate cycles...");
                let candidates = cycle_candidates(diagnostic);
                for (from, to) in &candidates.mutual {
                    warn!("possible cycle: {from} -> {to} -> {from}");
                }
                for (from, to) in &candidates.residual {
                    warn!(%from, %to, "edge left over after sorting");
                }
            }
            return Err(err).with_context(|| format!("failed to sort topology {source}"));
        }
    };

    println!("{}", render_sorted(&order, &list.edges));
    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Reads the whole topology, returning a name for it along with its text.
fn read_input(path: &Path) -> Result<(String, String)> {
    let mut input = String::new();
    if path == Path::new("-") {
        io::stdin()
            .read_to_string(&mut input)
            .context("error reading from STDIN")?;
        return Ok(("STDIN".to_string(), input));
    }

    input = fs::read_to_string(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    Ok((path.display().to_string(), input))
}

#[cfg(test)]
mod test {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_flags() {
        let cli = Cli::try_parse_from(["topoviz", "-T", "-", "--frontier", "fifo", "-vv"]).unwrap();
        assert_eq!(cli.topo, PathBuf::from("-"));
        assert_eq!(cli.frontier, FrontierArg::Fifo);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.max_iterations, None);
        assert_eq!(Frontier::from(cli.frontier), Frontier::Fifo);
    }

    #[test]
    fn topo_is_required() {
        assert!(Cli::try_parse_from(["topoviz"]).is_err());
    }

    #[test]
    fn missing_file_is_reported() {
        let err = read_input(Path::new("/definitely/not/here.topo")).unwrap_err();
        assert!(err.to_string().starts_with("failed to open"));
    }
}
