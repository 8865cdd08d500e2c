//! Command line front end: `mpaths <GRAPH> <NODES>`.
#![forbid(unsafe_code)]

use std::{
    error::Error,
    io::{self, BufWriter},
    path::PathBuf,
    time::Instant,
};

use clap::Parser;
use mpaths::{
    config::{DEFAULT_FRONTIER_FACTOR, DEFAULT_LABEL_WIDTH, SearchConfig},
    io::{
        DotColor, DotWriter, GraphWriter, ListingWriter, read_graph_file, read_workload_file,
    },
    report::Report,
};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser, Debug)]
#[command(
    name = "mpaths",
    version,
    about = "Prints the lexicographically first maximal paths and counts all maximal paths from a list of start nodes"
)]
struct Cli {
    #[arg(value_name = "GRAPH", help = "Edge list: two fixed-width labels per line")]
    graph: PathBuf,

    #[arg(
        value_name = "NODES",
        help = "Number of paths to print on the first line, then one start label per line"
    )]
    nodes: PathBuf,

    #[arg(
        long,
        short = 'j',
        default_value_t = 0,
        help = "Worker threads (0 uses all available cores)"
    )]
    threads: usize,

    #[arg(
        long,
        default_value_t = DEFAULT_FRONTIER_FACTOR,
        help = "Frontier prefixes created per worker thread"
    )]
    frontier_factor: usize,

    #[arg(long, default_value_t = DEFAULT_LABEL_WIDTH, help = "Characters per node label")]
    label_width: usize,

    #[arg(
        long,
        env = "MPATHS_LOG",
        default_value = "warn",
        help = "Log filter, e.g. `info` or `mpaths=debug`"
    )]
    log_level: String,

    #[arg(long, help = "Print statistics of the loaded graph to stderr")]
    stats: bool,

    #[arg(long, help = "Print the adjacency list of every node before the report")]
    dump_graph: bool,

    #[arg(long, value_name = "FILE", help = "Write the graph in GraphViz DOT format")]
    dot: Option<PathBuf>,
}

impl Cli {
    fn search_config(&self) -> SearchConfig {
        SearchConfig::default()
            .threads(self.threads)
            .frontier_factor(self.frontier_factor)
            .label_width(self.label_width)
    }
}

fn init_logging(level: &str) -> Result<(), Box<dyn Error>> {
    fmt()
        .with_env_filter(EnvFilter::try_new(level).map_err(|e| format!("invalid log level: {e}"))?)
        .with_writer(io::stderr)
        .with_target(true)
        .with_thread_ids(true)
        .try_init()
        .map_err(|_| "logging already initialized".into())
}

fn main() {
    let cli = Cli::parse();
    let start_time = Instant::now();

    if let Err(err) = run(&cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }

    eprintln!(
        "\nExecution completed in {:.4} seconds.",
        start_time.elapsed().as_secs_f64()
    );
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    init_logging(&cli.log_level)?;
    let config = cli.search_config();

    let graph = read_graph_file(&cli.graph, &config)?;
    let workload = read_workload_file(&cli.nodes, &config)?;

    if cli.stats {
        eprintln!("{}", graph.stats());
    }

    if cli.dump_graph {
        ListingWriter::new().try_write_graph(&graph, io::stdout().lock())?;
    }

    if let Some(path) = &cli.dot {
        let starts = workload
            .start_labels
            .iter()
            .filter_map(|label| graph.node_index(label).ok());
        DotWriter::new()
            .highlight(starts, DotColor::Red)
            .try_write_graph_file(&graph, path)
            .map_err(mpaths::Error::Output)?;
        info!(path = %path.display(), "graph written in DOT format");
    }

    let report = Report::new(&graph, &config)?;
    info!(
        threads = report.threads(),
        starts = workload.start_labels.len(),
        budget = workload.print_budget,
        "starting run"
    );

    let summary = report.run(
        &workload,
        BufWriter::new(io::stdout().lock()),
        io::stderr().lock(),
    )?;
    info!(
        reported = summary.reported,
        skipped = summary.skipped,
        "run finished"
    );

    Ok(())
}
