use clap::{Parser, Subcommand};
use pvsvg::config::{Config, Overrides};
use pvsvg::{Dimension, Network, PhysicsOptions};
use pvsvg_graph::{AttrGraph, JsonId};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[clap(author = "Simon Zeng", version, about = "Interactive graph visualization pages")]
struct Args {
    /// Enable verbose output
    #[arg(short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a node-link JSON graph into an HTML page
    Render {
        /// Graph file: {"nodes": [{"id": ..}], "edges": [{"from": .., "to": ..}]}
        #[arg()]
        graph: PathBuf,

        /// Output HTML file (overwritten if it exists)
        #[arg(long, short = 'o')]
        output: PathBuf,

        /// TOML configuration file
        #[arg(long, short = 'c')]
        config: Option<PathBuf>,

        /// Canvas width: pixels (800), ratio (0.5), or "800px"/"100%"
        #[arg(long, allow_hyphen_values = true)]
        width: Option<Dimension>,

        /// Canvas height: pixels (800), ratio (0.5), or "800px"/"100%"
        #[arg(long, allow_hyphen_values = true)]
        height: Option<Dimension>,

        /// Background color
        #[arg(long)]
        bgcolor: Option<String>,

        /// JSON object shallow-merged over the physics options
        #[arg(long)]
        physics: Option<String>,

        /// Directory holding templates/, styles/ and scripts/
        #[arg(long)]
        assets: Option<PathBuf>,
    },
    /// Print the default physics options
    Defaults,
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "info" }));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(args.verbose);
    debug!(?args, "parsed arguments");

    match args.command {
        Command::Render {
            graph,
            output,
            config,
            width,
            height,
            bgcolor,
            physics,
            assets,
        } => {
            // Built-in defaults, then the config file, then command-line flags
            let config = match config {
                Some(path) => Config::load(&path)?,
                None => Config::default(),
            };
            let overrides = Overrides {
                width,
                height,
                bgcolor,
                physics,
                assets,
            };
            let options = overrides.apply(config.into_options())?;

            let content = std::fs::read_to_string(&graph)
                .map_err(|e| format!("Failed to read graph file {}: {}", graph.display(), e))?;
            let graph = AttrGraph::<JsonId>::from_json_str(&content)?;
            debug!(
                nodes = graph.node_count(),
                edges = graph.edge_count(),
                "loaded graph"
            );

            let network = Network::new(&graph, options)?;
            network.draw(&output)?;
        }
        Command::Defaults => {
            let defaults = PhysicsOptions::default();
            println!("{}", serde_json::to_string_pretty(defaults.as_map())?);
        }
    }

    Ok(())
}
