/*!
# IO

Utilities for reading the two input files of a run and for writing graphs.

## Input Formats

- **EdgeList** ([`EdgeListReader`]): one undirected edge per line, given as two fixed-width labels
  (`AAABBB` with the default width of `3`).
- **StartNodes** ([`StartNodesReader`]): the number of paths to print per start node on the first
  line, followed by one start label per line.

## Output Formats

- **Dot** ([`DotWriter`]): the [DOT language](https://graphviz.org/doc/info/lang.html) of GraphViz.
- **Listing** ([`ListingWriter`]): one line per node with its sorted neighbors.

## Errors

Readers and writers report `std::io::Error`s; malformed content is reported with
`ErrorKind::InvalidData`. [`read_graph_file`] and [`read_workload_file`] are the library-boundary
wrappers that attach the path and classify errors into [`crate::Error`].
*/

pub mod dot;
pub mod edge_list;
pub mod listing;
pub mod start_nodes;

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, ErrorKind, Result, Write},
    path::Path,
};

use tracing::debug;

use crate::{config::SearchConfig, prelude::*};

pub use dot::*;
pub use edge_list::*;
pub use listing::*;
pub use start_nodes::*;

/// Trait for types that can read graphs in a specific format.
pub trait GraphReader<G> {
    /// Reads a graph from the given reader according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if the input is not a valid representation
    /// of a graph in the expected format.
    fn try_read_graph<R>(&self, reader: R) -> Result<G>
    where
        R: BufRead;

    /// Reads a graph from a file according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or if its contents
    /// are not a valid representation of a graph in the expected format.
    fn try_read_graph_file<P>(&self, path: P) -> Result<G>
    where
        P: AsRef<Path>,
    {
        self.try_read_graph(BufReader::new(File::open(path)?))
    }
}

/// Trait for types that can write graphs in a specific format.
pub trait GraphWriter<G> {
    /// Writes the given graph to the provided writer according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    fn try_write_graph<W>(&self, graph: &G, writer: W) -> Result<()>
    where
        W: Write;

    /// Writes the given graph to a file according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or if writing fails.
    fn try_write_graph_file<P>(&self, graph: &G, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        let mut writer = BufWriter::new(File::create(path)?);
        self.try_write_graph(graph, &mut writer)?;
        writer.flush()
    }
}

/// Reads the graph file at `path` using the label width of `config`.
///
/// # Errors
/// [`crate::Error::InputUnavailable`] if the file cannot be read,
/// [`crate::Error::MalformedInput`] if a line does not hold two labels.
pub fn read_graph_file<P>(path: P, config: &SearchConfig) -> crate::Result<LabelledGraph>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let graph: LabelledGraph = EdgeListReader::new()
        .label_width(config.width_of_labels())
        .try_read_graph_file(path)
        .map_err(|e| crate::Error::from_input(path, e))?;

    debug!(
        path = %path.display(),
        nodes = graph.number_of_nodes(),
        edges = graph.number_of_edges(),
        "graph loaded"
    );
    Ok(graph)
}

/// Reads the start-node file at `path` using the label width of `config`.
///
/// # Errors
/// [`crate::Error::InputUnavailable`] if the file cannot be read,
/// [`crate::Error::MalformedInput`] if the budget line is missing or not a number.
pub fn read_workload_file<P>(path: P, config: &SearchConfig) -> crate::Result<Workload>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let workload = StartNodesReader::new()
        .label_width(config.width_of_labels())
        .try_read_workload_file(path)
        .map_err(|e| crate::Error::from_input(path, e))?;

    debug!(
        path = %path.display(),
        budget = workload.print_budget,
        starts = workload.start_labels.len(),
        "start nodes loaded"
    );
    Ok(workload)
}

/// Returns the substring of `width` characters starting at character `offset`,
/// or `None` if the line is too short.
fn label_at(line: &str, offset: usize, width: usize) -> Option<&str> {
    let mut bounds = line
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(line.len()));

    let begin = bounds.nth(offset)?;
    let end = if width == 0 {
        begin
    } else {
        bounds.nth(width - 1)?
    };
    Some(&line[begin..end])
}

/// Removes a trailing carriage return left over from CRLF line endings
fn strip_cr(line: &str) -> &str {
    line.strip_suffix('\r').unwrap_or(line)
}

/// Shorthand for creating a new IO-error
macro_rules! io_error {
    ($kind: expr, $info: expr) => {
        std::io::Error::new($kind, $info)
    };
}

/// Shorthand for returning `Err(std::io::Error)` early when a condition fails
macro_rules! raise_error_unless {
    ($cond : expr, $kind : expr, $info : expr) => {
        if !($cond) {
            return Err(io_error!($kind, $info));
        }
    };
}

use io_error;
use raise_error_unless;
