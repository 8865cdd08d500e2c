//! # EdgeList
//!
//! Each non-empty line holds one undirected edge as two fixed-width labels: the first `width`
//! characters name one endpoint and the `width` characters starting at `offset` name the other.
//! With the defaults (`width = offset = 3`) the line `AAABBB` is the edge `{AAA, BBB}`.
//!
//! Characters after the second label are ignored, a trailing `\r` is removed, and blank lines are
//! skipped. Optionally, lines starting with a comment identifier are skipped as well.
//!
//! [`EdgeListWriter`] produces the same format, so generated graphs can be fed back to the reader.

use std::io::Lines;

use super::*;
use crate::config::DEFAULT_LABEL_WIDTH;

/// A GraphReader for fixed-width label edge lists
#[derive(Debug, Clone)]
pub struct EdgeListReader {
    /// Number of characters per label
    width: usize,
    /// Character position of the second label
    offset: usize,
    /// Lines starting with `comment_identifier` are skipped when reading
    comment_identifier: Option<String>,
}

impl Default for EdgeListReader {
    fn default() -> Self {
        Self {
            width: DEFAULT_LABEL_WIDTH,
            offset: DEFAULT_LABEL_WIDTH,
            comment_identifier: None,
        }
    }
}

impl EdgeListReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the label width; the second label directly follows the first
    pub fn label_width(mut self, width: usize) -> EdgeListReader {
        self.width = width.max(1);
        self.offset = self.width;
        self
    }

    /// Updates the position of the second label (e.g. `4` for `AAA BBB`)
    pub fn offset(mut self, offset: usize) -> EdgeListReader {
        self.offset = offset;
        self
    }

    /// Updates the comment identifier
    pub fn comment_identifier<S: Into<String>>(mut self, c: S) -> EdgeListReader {
        self.comment_identifier = Some(c.into());
        self
    }

    /// Reads all edges in file order
    pub fn try_read_edges<R: BufRead>(&self, reader: R) -> Result<Vec<LabelEdge>> {
        LabelEdgesReader::new(reader, self).collect()
    }
}

impl GraphReader<LabelledGraph> for EdgeListReader {
    fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<LabelledGraph> {
        Ok(LabelledGraph::from_label_edges(self.try_read_edges(reader)?))
    }
}

/// Trait for creating labelled graphs with default EdgeListReader settings
pub trait EdgeListRead: Sized {
    /// Tries to read the graph from a given reader
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self>;

    /// Tries to read the graph from a given file
    fn try_read_edge_list_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::try_read_edge_list(BufReader::new(File::open(path)?))
    }
}

impl EdgeListRead for LabelledGraph {
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self> {
        EdgeListReader::default().try_read_graph(reader)
    }
}

/// Iterator over the edges of an edge list; stops at the first error
pub struct LabelEdgesReader<'a, R> {
    lines: Lines<R>,
    settings: &'a EdgeListReader,
    line_number: usize,
}

impl<'a, R: BufRead> LabelEdgesReader<'a, R> {
    /// Creates a new reader over the lines of `reader`
    pub fn new(reader: R, settings: &'a EdgeListReader) -> Self {
        Self {
            lines: reader.lines(),
            settings,
            line_number: 0,
        }
    }

    fn parse_edge_line(&self, line: &str) -> Result<LabelEdge> {
        let width = self.settings.width;
        let from = label_at(line, 0, width);
        let to = label_at(line, self.settings.offset, width);

        match (from, to) {
            (Some(from), Some(to)) => Ok(LabelEdge(from.to_string(), to.to_string())),
            _ => Err(io_error!(
                ErrorKind::InvalidData,
                format!(
                    "line {}: expected two labels of {width} characters, found {line:?}",
                    self.line_number
                )
            )),
        }
    }
}

impl<R: BufRead> Iterator for LabelEdgesReader<'_, R> {
    type Item = Result<LabelEdge>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(e)),
            };
            self.line_number += 1;

            let line = strip_cr(&line);
            if line.trim().is_empty() {
                continue;
            }
            if let Some(c) = &self.settings.comment_identifier
                && line.starts_with(c.as_str())
            {
                continue;
            }

            return Some(self.parse_edge_line(line));
        }
    }
}

/// A GraphWriter for fixed-width label edge lists
#[derive(Debug, Clone, Default)]
pub struct EdgeListWriter {
    /// Written between the two labels of a line
    separator: String,
}

impl EdgeListWriter {
    /// Creates a new (default) writer
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the separator between both labels (empty by default)
    pub fn separator<S: Into<String>>(mut self, sep: S) -> EdgeListWriter {
        self.separator = sep.into();
        self
    }

    /// Writes one line per edge in the given order
    pub fn try_write_edges<'a, W, I>(&self, edges: I, mut writer: W) -> Result<()>
    where
        W: Write,
        I: IntoIterator<Item = &'a LabelEdge>,
    {
        for LabelEdge(from, to) in edges {
            writeln!(writer, "{from}{}{to}", self.separator)?;
        }
        Ok(())
    }

    /// Writes the edges to a newly created file at `path`
    pub fn try_write_edges_file<'a, P, I>(&self, edges: I, path: P) -> Result<()>
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = &'a LabelEdge>,
    {
        let mut writer = BufWriter::new(File::create(path)?);
        self.try_write_edges(edges, &mut writer)?;
        writer.flush()
    }
}

impl<G> GraphWriter<G> for EdgeListWriter
where
    G: AdjacencyList + Labelled,
{
    /// Writes every edge once as `(u, v)` with `u < v`. Nodes without neighbors are written as
    /// self-loops, which the reader turns back into isolated nodes.
    fn try_write_graph<W>(&self, graph: &G, mut writer: W) -> Result<()>
    where
        W: Write,
    {
        for u in graph.vertices() {
            let label = graph.label_of(u);
            if graph.degree_of(u) == 0 {
                writeln!(writer, "{label}{}{label}", self.separator)?;
                continue;
            }
            for Edge(_, v) in graph.edges_of(u, true) {
                writeln!(writer, "{label}{}{}", self.separator, graph.label_of(v))?;
            }
        }
        Ok(())
    }
}
