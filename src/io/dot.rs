//! # Dot
//!
//! The Dot-Format is used by [GraphViz](https://graphviz.org/) for visualizations. Nodes are
//! written under their (quoted) labels, so a drawing can be compared with the input file directly.
//!
//! Drawing a graph where the start nodes of a run are colored red:
//! ```ignore
//! let dot_writer = DotWriter::default();
//! dot_writer.start_graph(&mut writer)?;
//! dot_writer.write_edges(&mut writer, &graph, graph.edges(true), None)?;
//! dot_writer.color_nodes(&mut writer, &graph, starts, DotColor::Red)?;
//! dot_writer.finish_graph(&mut writer)?;
//! ```
//!
//! For nodes, the latest coloring is the one applied by a visualizer, whereas each colored edge
//! adds another edge to the drawing.

use std::fmt::{self, Display};

use super::*;

/// A writer for the Dot-Format
#[derive(Debug, Clone, Default)]
pub struct DotWriter {
    /// Nodes whose label is drawn filled
    highlighted: Vec<(Node, DotColor)>,
}

impl DotWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Colors `nodes` when writing a whole graph via [`GraphWriter`]
    pub fn highlight<I>(mut self, nodes: I, color: DotColor) -> Self
    where
        I: IntoIterator<Item = Node>,
    {
        self.highlighted.extend(nodes.into_iter().map(|u| (u, color)));
        self
    }

    /// Writes the opening brackets of the (undirected) graph
    pub fn start_graph<W>(&self, writer: &mut W) -> Result<()>
    where
        W: Write,
    {
        writeln!(writer, "graph {{")
    }

    /// Writes an iterator of edges to `writer`, optionally colored
    pub fn write_edges<W, G, I>(
        &self,
        writer: &mut W,
        graph: &G,
        edges: I,
        color: Option<DotColor>,
    ) -> Result<()>
    where
        W: Write,
        G: Labelled,
        I: IntoIterator<Item = Edge>,
    {
        let edge_color = match color {
            Some(c) => format!("[color={c}]"),
            None => String::new(),
        };

        for Edge(u, v) in edges {
            writeln!(
                writer,
                "  {:?} -- {:?}{edge_color};",
                graph.label_of(u),
                graph.label_of(v)
            )?;
        }
        Ok(())
    }

    /// Writes a list of colored nodes to `writer`
    pub fn color_nodes<W, G, I>(
        &self,
        writer: &mut W,
        graph: &G,
        nodes: I,
        color: DotColor,
    ) -> Result<()>
    where
        W: Write,
        G: Labelled,
        I: IntoIterator<Item = Node>,
    {
        for u in nodes {
            writeln!(
                writer,
                "  {:?} [style=filled, color={color}];",
                graph.label_of(u)
            )?;
        }
        Ok(())
    }

    /// Closes the Dot-Graph
    pub fn finish_graph<W>(&self, writer: &mut W) -> Result<()>
    where
        W: Write,
    {
        writeln!(writer, "}}")
    }
}

impl<G> GraphWriter<G> for DotWriter
where
    G: AdjacencyList + Labelled,
{
    fn try_write_graph<W>(&self, graph: &G, mut writer: W) -> Result<()>
    where
        W: Write,
    {
        self.start_graph(&mut writer)?;
        // isolated nodes never appear in an edge statement
        for u in graph.vertices().filter(|&u| graph.degree_of(u) == 0) {
            writeln!(writer, "  {:?};", graph.label_of(u))?;
        }
        self.write_edges(&mut writer, graph, graph.edges(true), None)?;
        for &(u, color) in &self.highlighted {
            self.color_nodes(&mut writer, graph, [u], color)?;
        }
        self.finish_graph(&mut writer)
    }
}

/// A small palette of named GraphViz colors
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DotColor {
    Black,
    Blue,
    Gray,
    Green,
    Orange,
    Red,
}

impl Display for DotColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format!("{self:?}").to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_star() {
        let graph =
            LabelledGraph::from_label_edges([("AAA", "AAB"), ("AAB", "AAC"), ("AAB", "AAD")]);
        let start = graph.node_index("AAA").unwrap();

        let mut out = Vec::new();
        DotWriter::new()
            .highlight([start], DotColor::Red)
            .try_write_graph(&graph, &mut out)
            .unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "graph {\n  \"AAA\" -- \"AAB\";\n  \"AAB\" -- \"AAC\";\n  \"AAB\" -- \"AAD\";\n  \"AAA\" [style=filled, color=red];\n}\n"
        );
    }

    #[test]
    fn isolated_nodes_are_listed() {
        let graph = LabelledGraph::from_label_edges([("AAA", "BBB"), ("CCC", "CCC")]);
        let mut out = Vec::new();
        DotWriter::new().try_write_graph(&graph, &mut out).unwrap();

        let dot = String::from_utf8(out).unwrap();
        assert!(dot.contains("  \"CCC\";\n"));
        assert!(dot.contains("  \"AAA\" -- \"BBB\";\n"));
    }
}
