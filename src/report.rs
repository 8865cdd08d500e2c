/*!
# Report

[`Report`] drives a whole run. For every start label of a [`Workload`], in file order, it
prints the lexicographically first `K` maximal paths and the total number of maximal paths:

```text
First 5 lexicographic paths from AAA:
AAAAABAAC
AAAAABAAD
Total maximal paths starting from AAA: 2

```

The counter of one start node is spawned on the report's thread pool while the printer runs on the
calling thread and streams its paths to the output as they are found. The header is written
before the printer starts, and the total after both have finished, so report blocks of different
start nodes never interleave and no path is held in memory.

Unknown start labels are reported on the diagnostics stream and skipped.
*/

use std::io::Write;

use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::{info, warn};

use crate::{
    algo::{LexicographicPaths, ParallelCounter},
    config::SearchConfig,
    error::{Error, Result},
    io::Workload,
    prelude::*,
};

/// Number of start labels handled by [`Report::run`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Start labels with a written report block
    pub reported: usize,
    /// Start labels that were not found in the graph
    pub skipped: usize,
}

/// A run over one graph with a dedicated worker pool
pub struct Report<'a> {
    graph: &'a LabelledGraph,
    pool: ThreadPool,
    counter: ParallelCounter,
}

impl<'a> Report<'a> {
    /// Creates the worker pool described by `config`.
    ///
    /// # Errors
    /// Returns [`Error::ThreadPool`] if the pool cannot be spawned.
    pub fn new(graph: &'a LabelledGraph, config: &SearchConfig) -> Result<Self> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(config.worker_threads())
            .thread_name(|i| format!("mpaths-worker-{i}"))
            .build()?;

        Ok(Self {
            graph,
            pool,
            counter: ParallelCounter::from_config(config),
        })
    }

    /// Returns the number of threads in the worker pool
    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Writes the report block for the start node `label` to `out`: the header, the first
    /// `budget` paths in lexicographic order, the total and a blank line. Returns the total.
    ///
    /// # Errors
    /// Returns [`Error::LabelNotFound`] if `label` is not a node of the graph (nothing is written
    /// then), or [`Error::Output`] if writing fails.
    pub fn write_start_node<W>(&self, label: &str, budget: u64, mut out: W) -> Result<u64>
    where
        W: Write,
    {
        let start = self.graph.node_index(label)?;
        let printer = LexicographicPaths::new(self.graph, budget);

        writeln!(out, "First {} lexicographic paths from {label}:", printer.budget())?;

        let mut total = 0;
        let mut printed = 0u64;
        let mut written = Ok(());
        self.pool.in_place_scope(|scope| {
            scope.spawn(|_| total = self.counter.count(self.graph, start));

            printer.for_each_path(start, |path| {
                if written.is_ok() {
                    written = write_path(self.graph, path, &mut out);
                    printed += 1;
                }
            });
        });
        written?;

        writeln!(out, "Total maximal paths starting from {label}: {total}")?;
        writeln!(out)?;

        info!(label, printed, total, "start node done");
        Ok(total)
    }

    /// Processes all start labels of `workload` in order, writing report blocks to `out` and
    /// diagnostics for unknown labels to `diagnostics`.
    ///
    /// # Errors
    /// Returns [`Error::Output`] if writing to either stream fails.
    pub fn run<W, E>(
        &self,
        workload: &Workload,
        mut out: W,
        mut diagnostics: E,
    ) -> Result<RunSummary>
    where
        W: Write,
        E: Write,
    {
        let mut summary = RunSummary::default();

        for label in &workload.start_labels {
            match self.write_start_node(label, workload.print_budget, &mut out) {
                Ok(_) => summary.reported += 1,
                Err(err @ Error::LabelNotFound { .. }) => {
                    warn!(label = %label, "skipping unknown start node");
                    writeln!(diagnostics, "Error: {err}")?;
                    summary.skipped += 1;
                }
                Err(err) => return Err(err),
            }
        }

        out.flush()?;
        Ok(summary)
    }
}

/// Writes the labels of `path` without separators, followed by a newline
fn write_path<W: Write>(graph: &LabelledGraph, path: &[Node], mut out: W) -> std::io::Result<()> {
    for &u in path {
        out.write_all(graph.label_of(u).as_bytes())?;
    }
    out.write_all(b"\n")
}
