use std::ops::Range;

use itertools::Itertools;

use crate::{edge::*, node::*};

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns an iterator over V.
    fn vertices(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns empty bitset with one entry per node
    fn vertex_bitset_unset(&self) -> NodeBitSet {
        NodeBitSet::for_nodes(self.number_of_nodes())
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of (undirected) edges of the graph
    fn number_of_edges(&self) -> NumEdges;
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Returns the (open) neighborhood of a given vertex in ascending order.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> &[Node];

    /// Returns the number of neighbors of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes {
        self.neighbors_of(u).len() as NumNodes
    }

    /// Returns an iterator over all degrees
    fn degrees(&self) -> impl Iterator<Item = NumNodes> + '_ {
        self.vertices().map(|u| self.degree_of(u))
    }

    /// Returns the maximum degree in the graph
    fn max_degree(&self) -> NumNodes {
        self.degrees().max().unwrap_or(0)
    }

    /// Returns the minimum degree in the graph
    fn min_degree(&self) -> NumNodes {
        self.degrees().min().unwrap_or(0)
    }

    /// Returns an iterator over outgoing edges of a given vertex.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    /// ** Panics if `u >= n` **
    fn edges_of(&self, u: Node, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.neighbors_of(u)
            .iter()
            .map(move |&v| Edge(u, v))
            .filter(move |e| !only_normalized || e.is_normalized())
    }

    /// Returns an iterator over all edges in the graph in sorted order (adjacency lists are sorted).
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    fn edges(&self, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.vertices()
            .flat_map(move |u| self.edges_of(u, only_normalized))
    }
}

/// Trait to test existence of certain structures in a graph.
pub trait AdjacencyTest: AdjacencyList {
    /// Returns *true* if the egde (u,v) exists in the graph.
    /// ** Panics if `u >= n` **
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.neighbors_of(u).binary_search(&v).is_ok()
    }
}

impl<G: AdjacencyList> AdjacencyTest for G {}

/// Graphs whose nodes carry a string label
pub trait Labelled: GraphNodeOrder {
    /// Returns the label of node `u`
    /// ** Panics if `u >= n` **
    fn label_of(&self, u: Node) -> &str;

    /// Concatenates the labels of the given nodes without separators
    fn concat_labels<I: IntoIterator<Item = Node>>(&self, nodes: I) -> String {
        nodes.into_iter().map(|u| self.label_of(u)).join("")
    }
}

/// A super trait for creating a graph from scratch from a set of edges and a number of nodes
pub trait GraphFromScratch {
    /// Create a graph from a number of nodes and an iterator over Edges
    fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Self;
}
