/*!
# Compressed Sparse Row (CSR) Graph Representation

The graphs searched in this crate are built once and never edited afterwards, so all adjacency
lists are stored in a single flattened array with offset indices marking the start of each
vertex's neighbor list. This gives compact storage and good cache locality during the
backtracking searches, which scan neighbor lists millions of times.

Construction goes through an [`AdjacencyBuilder`] that
- inserts every edge symmetrically,
- skips an edge if it is already present (duplicates and reversed duplicates),
- skips self-loops (a node is never its own neighbor for traversal purposes),
- sorts all lists ascending before freezing them.
*/

use std::ops::Index;

use super::*;

/// CSR-like structure storing one sorted neighbor slice per node.
///
/// - `buffer`: all neighbors contiguously
/// - `offsets`: slice `u` is `buffer[offsets[u]..offsets[u + 1]]`
#[derive(Debug, Clone)]
pub struct Adjacency {
    buffer: Vec<Node>,
    offsets: Vec<NumEdges>,
}

impl Default for Adjacency {
    fn default() -> Self {
        Self {
            buffer: Vec::new(),
            offsets: vec![0],
        }
    }
}

impl Adjacency {
    /// Constructs a new `Adjacency`.
    ///
    /// # Panics
    /// Panics if:
    /// - `offsets` is empty
    /// - `offsets` is not sorted
    /// - `offsets` exceed `buffer` length
    pub fn new(buffer: Vec<Node>, offsets: Vec<NumEdges>) -> Self {
        assert!(!offsets.is_empty());
        assert!(offsets.is_sorted());
        assert_eq!(*offsets.last().unwrap() as usize, buffer.len());

        Self { buffer, offsets }
    }

    /// Returns the number of slices (i.e. nodes)
    #[inline]
    pub fn number_of_slices(&self) -> NumNodes {
        (self.offsets.len() - 1) as NumNodes
    }

    /// Returns the total number of entries in the buffer
    #[inline]
    pub fn number_of_entries(&self) -> NumEdges {
        self.buffer.len() as NumEdges
    }
}

impl Index<Node> for Adjacency {
    type Output = [Node];

    #[inline]
    fn index(&self, u: Node) -> &Self::Output {
        let u = u as usize;
        &self.buffer[self.offsets[u] as usize..self.offsets[u + 1] as usize]
    }
}

/// Counters collected while inserting edges into an [`AdjacencyBuilder`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InsertStats {
    /// Number of edges offered to the builder
    pub edges_read: u64,
    /// Number of edges that were already present (in either direction)
    pub duplicate_edges: u64,
    /// Number of edges `(u, u)` that were dropped
    pub self_loops: u64,
}

/// Collects undirected edges into per-node lists before freezing them into an [`Adjacency`]
#[derive(Debug, Clone)]
pub struct AdjacencyBuilder {
    lists: Vec<Vec<Node>>,
    num_edges: NumEdges,
    stats: InsertStats,
}

impl AdjacencyBuilder {
    /// Creates a builder for `n` nodes without edges
    pub fn new(n: NumNodes) -> Self {
        Self {
            lists: vec![Vec::new(); n as usize],
            num_edges: 0,
            stats: InsertStats::default(),
        }
    }

    /// Inserts the undirected edge `{u, v}`.
    /// Returns *true* exactly if the edge was not present previously.
    /// ** Panics if `u >= n || v >= n` **
    pub fn try_add_edge(&mut self, u: Node, v: Node) -> bool {
        self.stats.edges_read += 1;
        if u == v {
            assert!((u as usize) < self.lists.len());
            self.stats.self_loops += 1;
            return false;
        }

        // Degrees are small in practice; a linear scan beats hashing here
        if self.lists[v as usize].contains(&u) {
            self.stats.duplicate_edges += 1;
            return false;
        }

        self.lists[u as usize].push(v);
        self.lists[v as usize].push(u);
        self.num_edges += 1;
        true
    }

    /// Returns the counters collected so far
    pub fn stats(&self) -> InsertStats {
        self.stats
    }

    /// Sorts all lists and flattens them
    pub fn finish(self) -> (Adjacency, NumEdges) {
        let mut offsets = Vec::with_capacity(self.lists.len() + 1);
        let mut buffer = Vec::with_capacity(2 * self.num_edges as usize);

        offsets.push(0);
        for mut list in self.lists {
            list.sort_unstable();
            buffer.extend_from_slice(&list);
            offsets.push(buffer.len() as NumEdges);
        }

        (Adjacency::new(buffer, offsets), self.num_edges)
    }
}

/// Undirected **CSR graph** without labels.
///
/// - Stores symmetric, sorted adjacency lists.
/// - Each edge is stored twice (once per endpoint); self-loops are never stored.
#[derive(Debug, Clone, Default)]
pub struct CsrGraphUndir {
    nbs: Adjacency,
    num_edges: NumEdges,
}

impl CsrGraphUndir {
    /// Freezes the given builder into a graph
    pub fn from_builder(builder: AdjacencyBuilder) -> Self {
        let (nbs, num_edges) = builder.finish();
        debug_assert_eq!(nbs.number_of_entries(), 2 * num_edges);
        Self { nbs, num_edges }
    }
}

impl GraphFromScratch for CsrGraphUndir {
    fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Self {
        let mut builder = AdjacencyBuilder::new(n);
        for Edge(u, v) in edges.into_iter().map(|e| e.into()) {
            builder.try_add_edge(u, v);
        }
        Self::from_builder(builder)
    }
}

impl GraphNodeOrder for CsrGraphUndir {
    fn number_of_nodes(&self) -> NumNodes {
        self.nbs.number_of_slices()
    }
}

impl GraphEdgeOrder for CsrGraphUndir {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl AdjacencyList for CsrGraphUndir {
    #[inline]
    fn neighbors_of(&self, u: Node) -> &[Node] {
        &self.nbs[u]
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn symmetric_sorted_dedup() {
        let graph = CsrGraphUndir::from_edges(4, [(2, 0), (0, 2), (0, 1), (3, 0), (1, 0)]);

        assert_eq!(graph.number_of_nodes(), 4);
        assert_eq!(graph.number_of_edges(), 3);
        assert_eq!(graph.neighbors_of(0), &[1, 2, 3]);
        assert_eq!(graph.neighbors_of(1), &[0]);
        assert_eq!(graph.neighbors_of(2), &[0]);
        assert_eq!(graph.neighbors_of(3), &[0]);
    }

    #[test]
    fn self_loops_are_dropped() {
        let mut builder = AdjacencyBuilder::new(3);
        assert!(!builder.try_add_edge(1, 1));
        assert!(builder.try_add_edge(1, 2));
        assert!(!builder.try_add_edge(2, 1));

        assert_eq!(
            builder.stats(),
            InsertStats {
                edges_read: 3,
                duplicate_edges: 1,
                self_loops: 1
            }
        );

        let graph = CsrGraphUndir::from_builder(builder);
        assert_eq!(graph.neighbors_of(1), &[2]);
        assert!(graph.neighbors_of(0).is_empty());
    }

    #[test]
    fn randomized_against_matrix() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for n in [5 as NumNodes, 20, 50] {
            for _ in 0..20 {
                let edges = (0..3 * n)
                    .map(|_| (rng.random_range(0..n), rng.random_range(0..n)))
                    .collect_vec();

                let mut matrix = vec![vec![false; n as usize]; n as usize];
                for &(u, v) in &edges {
                    if u != v {
                        matrix[u as usize][v as usize] = true;
                        matrix[v as usize][u as usize] = true;
                    }
                }

                let graph = CsrGraphUndir::from_edges(n, edges);
                let mut m = 0;
                for u in 0..n {
                    let expected = (0..n).filter(|&v| matrix[u as usize][v as usize]).collect_vec();
                    assert_eq!(graph.neighbors_of(u), expected.as_slice());
                    m += expected.len();
                }
                assert_eq!(graph.number_of_edges() as usize, m / 2);
                assert_eq!(graph.edges(true).count(), m / 2);
            }
        }
    }
}
