//! Random instance generator: `mpaths-gen <NODES> <EDGES> <PATHS> <STARTS> <BASENAME>`.
//!
//! Writes `<BASENAME>-graph.txt` and `<BASENAME>-nodes.txt`, ready to be passed to `mpaths`.
#![forbid(unsafe_code)]

use std::{error::Error, io, path::PathBuf};

use clap::Parser;
use mpaths::{
    config::DEFAULT_LABEL_WIDTH,
    edge::NumEdges,
    gens::{LabelledGraphGen, NumEdgesGen, NumNodesGen},
    io::{EdgeListWriter, StartNodesWriter},
    node::NumNodes,
};
use rand::{SeedableRng, rngs::StdRng};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser, Debug)]
#[command(
    name = "mpaths-gen",
    version,
    about = "Writes a random graph file and a matching start-node file"
)]
struct Cli {
    #[arg(value_name = "NODES", help = "Number of distinct node labels")]
    nodes: NumNodes,

    #[arg(value_name = "EDGES", help = "Number of distinct edges (capped at n(n-1)/2)")]
    edges: NumEdges,

    #[arg(value_name = "PATHS", help = "Number of paths to print per start node")]
    paths: u64,

    #[arg(value_name = "STARTS", help = "Number of distinct start labels")]
    starts: usize,

    #[arg(value_name = "BASENAME", help = "Prefix of the two output files")]
    basename: String,

    #[arg(long, help = "Seed for reproducible instances")]
    seed: Option<u64>,

    #[arg(long, default_value_t = DEFAULT_LABEL_WIDTH as u32, help = "Letters per node label")]
    label_width: u32,

    #[arg(
        long,
        env = "MPATHS_LOG",
        default_value = "warn",
        help = "Log filter, e.g. `info`"
    )]
    log_level: String,
}

fn init_logging(level: &str) -> Result<(), Box<dyn Error>> {
    fmt()
        .with_env_filter(EnvFilter::try_new(level).map_err(|e| format!("invalid log level: {e}"))?)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|_| "logging already initialized".into())
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    init_logging(&cli.log_level)?;

    if cli.label_width == 0 {
        return Err("label width must be positive".into());
    }
    if cli.starts > cli.nodes as usize {
        return Err(format!(
            "cannot pick {} distinct start nodes from {} nodes",
            cli.starts, cli.nodes
        )
        .into());
    }
    if (cli.nodes as usize) > 26usize.saturating_pow(cli.label_width) {
        return Err(format!(
            "{} nodes do not fit into labels of {} letters",
            cli.nodes, cli.label_width
        )
        .into());
    }

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let (edges, workload) = LabelledGraphGen::new()
        .nodes(cli.nodes)
        .edges(cli.edges)
        .label_width(cli.label_width)
        .budget(cli.paths)
        .starts(cli.starts)
        .instance(&mut rng);

    let graph_path = PathBuf::from(format!("{}-graph.txt", cli.basename));
    let nodes_path = PathBuf::from(format!("{}-nodes.txt", cli.basename));

    EdgeListWriter::new().try_write_edges_file(&edges, &graph_path)?;
    StartNodesWriter::new().try_write_workload_file(&workload, &nodes_path)?;

    info!(
        graph = %graph_path.display(),
        nodes = %nodes_path.display(),
        edges = edges.len(),
        starts = workload.start_labels.len(),
        "instance written"
    );

    Ok(())
}
