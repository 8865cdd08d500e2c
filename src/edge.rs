use std::fmt::{Debug, Display};

use crate::node::Node;

/// An edge is defined by two nodes/endpoints.
/// All graphs in this crate are undirected, so `Edge(u, v)` and `Edge(v, u)` describe the same edge.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub Node, pub Node);

/// We limit the number of (directed) adjacency entries to `2^32 - 1`.
pub type NumEdges = u32;

/// An edge as it appears in an input file: a pair of raw labels
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct LabelEdge(pub String, pub String);

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Edge {
    /// Normalizes the edge such that the endpoint with smaller value comes first
    pub fn normalized(&self) -> Self {
        Edge(self.0.min(self.1), self.0.max(self.1))
    }

    /// Returns true if the endpoint with smaller index comes first
    pub fn is_normalized(&self) -> bool {
        self.0 <= self.1
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }
}

impl LabelEdge {
    /// Returns true if both labels are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }
}

impl From<(Node, Node)> for Edge {
    fn from(value: (Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl<A: Into<String>, B: Into<String>> From<(A, B)> for LabelEdge {
    fn from(value: (A, B)) -> Self {
        LabelEdge(value.0.into(), value.1.into())
    }
}
