/*!
`mpaths` enumerates and counts **maximal simple paths** in small undirected graphs whose nodes are
named by short fixed-width labels (`AAA`, `AAB`, ...).

A maximal path is a simple path that cannot be extended at its end: every neighbor of its last
node already lies on the path. For each requested start node we report
- the first `K` maximal paths in lexicographic order of their label sequence, and
- the total number of maximal paths starting there, counted on all cores.

# Representation

Nodes are `u32` ids in the range `0..n`, assigned in ascending label order, so that walking the
sorted adjacency lists of a [`LabelledGraph`](crate::repr::LabelledGraph) visits neighbors in
lexicographic label order. Edges are simple tuple-structs `Edge(Node, Node)`; on the input side
[`LabelEdge`](crate::edge::LabelEdge) holds the two labels of a line. Graphs are built once and
never modified.

# Design

All searches are configurable structs following the *Builder* / *Setter* pattern, and the common
queries are additionally implemented as traits on the graph itself:

```rust
use mpaths::{prelude::*, algo::*};

let graph = LabelledGraph::from_label_edges([("AAA", "AAB"), ("AAB", "AAC"), ("AAB", "AAD")]);
let center = graph.node_index("AAB").unwrap();

assert_eq!(graph.count_maximal_paths(center), 3);
assert_eq!(ParallelCounter::new().frontier_width(1).count(&graph, center), 3);
```

# Usage

- [`prelude`] includes definitions for nodes, edges, basic graph operations and the graph representations,
- [`algo`] includes the counting rule, the frontier split, the parallel counter and the lexicographic printer,
- [`io`] includes readers and writers for graph and start-node files, and writers for DOT and adjacency listings,
- [`report`] drives a whole run over a list of start nodes,
- [`gens`] includes random and deterministic graph generators, and random run instances.

In most use-cases, `use mpaths::{prelude::*, algo::*};` suffices for your needs.
*/

pub mod algo;
pub mod config;
pub mod edge;
pub mod error;
pub mod gens;
pub mod io;
pub mod node;
pub mod ops;
pub mod report;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;

pub use error::{Error, Result};

/// `mpaths::prelude` includes definitions for nodes and edges, all basic graph operation traits as well as all implemented representations.
pub mod prelude {
    pub use super::{edge::*, node::*, ops::*, repr::*};
}
