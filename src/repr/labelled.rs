/*!
# Labelled Graphs

[`LabelledGraph`] is the immutable store every search runs against. It is built once from a list
of label pairs and then shared read-only between the printing traversal and all counting workers.

Ids are assigned in ascending order of the labels: if label `a` sorts before label `b`, then
`node_index(a) < node_index(b)`. Since adjacency lists are sorted by id, walking them in order is
the same as walking the neighbors in lexicographic label order.
*/

use std::fmt;

use fxhash::FxHashMap;
use itertools::Itertools;
use tracing::{debug, warn};

use super::*;
use crate::error::{Error, Result};

/// Summary of a graph build, mirroring what one wants to know about a freshly read input file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    /// Number of distinct labels
    pub nodes: NumNodes,
    /// Number of edge lines offered to the build
    pub edges_read: u64,
    /// Number of distinct undirected edges kept
    pub edges: NumEdges,
    /// Edges dropped because they (or their reverse) were already present
    pub duplicate_edges: u64,
    /// Edges dropped because both endpoints are the same node
    pub self_loops: u64,
    /// Smallest degree of any node
    pub min_degree: NumNodes,
    /// Largest degree of any node
    pub max_degree: NumNodes,
}

impl fmt::Display for BuildStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} nodes", self.nodes)?;
        writeln!(f, "{} edges", self.edges)?;
        writeln!(
            f,
            "{} to {} edges per node",
            self.min_degree, self.max_degree
        )?;
        writeln!(f, "{} self edges", self.self_loops)?;
        write!(f, "{} duplicate edges", self.duplicate_edges)
    }
}

/// Undirected graph whose nodes are identified by string labels
#[derive(Debug, Clone, Default)]
pub struct LabelledGraph {
    labels: Vec<String>,
    index: FxHashMap<String, Node>,
    graph: CsrGraphUndir,
    stats: BuildStats,
}

impl LabelledGraph {
    /// Builds the graph from label pairs.
    ///
    /// Labels are taken literally (no case folding or trimming). Duplicate edges are merged and
    /// self-loops are dropped with a warning.
    pub fn from_label_edges<I>(edges: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<LabelEdge>,
    {
        let edges = edges.into_iter().map(Into::into).collect_vec();

        let labels = edges
            .iter()
            .flat_map(|LabelEdge(a, b)| [a, b])
            .sorted_unstable()
            .dedup()
            .cloned()
            .collect_vec();

        assert!(labels.len() < INVALID_NODE as usize);

        let index: FxHashMap<String, Node> = labels
            .iter()
            .enumerate()
            .map(|(id, label)| (label.clone(), id as Node))
            .collect();

        let mut builder = AdjacencyBuilder::new(labels.len() as NumNodes);
        for edge in &edges {
            if edge.is_loop() {
                warn!(label = %edge.0, "ignoring degenerate edge from a node to itself");
            }
            builder.try_add_edge(index[&edge.0], index[&edge.1]);
        }

        let inserted = builder.stats();
        let graph = CsrGraphUndir::from_builder(builder);

        let stats = BuildStats {
            nodes: graph.number_of_nodes(),
            edges_read: inserted.edges_read,
            edges: graph.number_of_edges(),
            duplicate_edges: inserted.duplicate_edges,
            self_loops: inserted.self_loops,
            min_degree: graph.min_degree(),
            max_degree: graph.max_degree(),
        };
        debug!(?stats, "built labelled graph");

        Self {
            labels,
            index,
            graph,
            stats,
        }
    }

    /// Returns the id of a label
    ///
    /// # Errors
    /// Returns [`Error::LabelNotFound`] if the label never appeared in any edge.
    pub fn node_index(&self, label: &str) -> Result<Node> {
        self.index
            .get(label)
            .copied()
            .ok_or_else(|| Error::LabelNotFound {
                label: label.to_string(),
            })
    }

    /// Returns all labels in id order (which is ascending label order)
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Returns the counters collected while building
    pub fn stats(&self) -> BuildStats {
        self.stats
    }
}

impl GraphNodeOrder for LabelledGraph {
    fn number_of_nodes(&self) -> NumNodes {
        self.labels.len() as NumNodes
    }
}

impl GraphEdgeOrder for LabelledGraph {
    fn number_of_edges(&self) -> NumEdges {
        self.graph.number_of_edges()
    }
}

impl AdjacencyList for LabelledGraph {
    #[inline]
    fn neighbors_of(&self, u: Node) -> &[Node] {
        self.graph.neighbors_of(u)
    }
}

impl Labelled for LabelledGraph {
    #[inline]
    fn label_of(&self, u: Node) -> &str {
        &self.labels[u as usize]
    }
}
