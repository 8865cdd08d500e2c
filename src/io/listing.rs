//! # Listing
//!
//! A human-readable dump of the adjacency structure, one node per line in id order:
//! `AAB: AAA, AAC, AAD`. Nodes whose list contains themselves are flagged with `dodgy!`; a correctly
//! built graph never has such a line.

use super::*;

/// Writes one line per node with its label and its neighbors' labels
#[derive(Debug, Clone, Copy, Default)]
pub struct ListingWriter {
    skip_isolated: bool,
}

impl ListingWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// If *true*, nodes without neighbors are omitted
    pub fn skip_isolated(mut self, skip: bool) -> Self {
        self.skip_isolated = skip;
        self
    }
}

impl<G> GraphWriter<G> for ListingWriter
where
    G: AdjacencyList + Labelled,
{
    fn try_write_graph<W>(&self, graph: &G, mut writer: W) -> Result<()>
    where
        W: Write,
    {
        for u in graph.vertices() {
            let nbs = graph.neighbors_of(u);
            if self.skip_isolated && nbs.is_empty() {
                continue;
            }

            write!(writer, "{}:", graph.label_of(u))?;
            for (i, &v) in nbs.iter().enumerate() {
                let sep = if i == 0 { " " } else { ", " };
                write!(writer, "{sep}{}", graph.label_of(v))?;
            }
            if nbs.contains(&u) {
                write!(writer, " dodgy!")?;
            }
            writeln!(writer)?;
        }
        Ok(())
    }
}
