/*!
# Maximal Path Counting

A *maximal path* is a simple path whose last node has no neighbor outside the path. The number of
maximal paths starting with a partial path `p` ending in `u` is defined recursively:

```text
count(u, visited):
    mark u visited
    total = sum of count(v, visited) for every unvisited neighbor v (ascending)
    unmark u
    return total if total > 0 else 1
```

If every neighbor of `u` is already on the path, `u` is a dead end and the path ending there is
itself one maximal path. This rule is the single source of truth for totals; the frontier split in
[`super::frontier`] and the parallel evaluation in [`super::parallel`] only evaluate it faster.

The recursion depth is bounded by the number of nodes, so [`MaximalPathCounter`] evaluates it with an
explicit stack of frames instead of the call stack.
*/

use super::*;

/// One level of the explicit search stack
#[derive(Debug, Clone, Copy)]
struct Frame {
    /// Node at this depth
    node: Node,
    /// Position of the next neighbor of `node` to try
    next: usize,
    /// Maximal paths found below this node so far
    found: u64,
}

impl Frame {
    fn new(node: Node) -> Self {
        Self {
            node,
            next: 0,
            found: 0,
        }
    }
}

/// Sequential evaluator of the maximal path rule.
///
/// Owns its stack so that repeated calls (as done by a worker processing many prefixes) do not
/// allocate. The visited set is supplied by the caller and handed back unchanged.
pub struct MaximalPathCounter<'a, G>
where
    G: AdjacencyList,
{
    graph: &'a G,
    stack: Vec<Frame>,
}

impl<'a, G> MaximalPathCounter<'a, G>
where
    G: AdjacencyList,
{
    /// Creates a counter for the given graph
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            stack: Vec::new(),
        }
    }

    /// Returns the number of maximal paths that extend the path `visited + start`.
    ///
    /// `visited` must contain exactly the nodes of the path before `start` and is restored
    /// before returning.
    /// ** Panics if `start >= n` or `visited` is not sized to the graph **
    pub fn count_from(&mut self, start: Node, visited: &mut NodeBitSet) -> u64 {
        debug_assert!(!visited.get_bit(start));
        debug_assert!(self.stack.is_empty());

        visited.set_bit(start);
        self.stack.push(Frame::new(start));

        while let Some(frame) = self.stack.last_mut() {
            let nbs = self.graph.neighbors_of(frame.node);

            if let Some(pos) = nbs[frame.next..].iter().position(|&v| !visited.get_bit(v)) {
                let v = nbs[frame.next + pos];
                frame.next += pos + 1;

                visited.set_bit(v);
                self.stack.push(Frame::new(v));
                continue;
            }

            // all neighbors exhausted: close this level
            let Frame { node, found, .. } = *frame;
            self.stack.pop();
            visited.clear_bit(node);

            let paths = found.max(1);
            match self.stack.last_mut() {
                Some(parent) => parent.found += paths,
                None => return paths,
            }
        }

        unreachable!("the root frame always returns")
    }
}

/// Sequential maximal path queries implemented directly on graphs
pub trait MaximalPaths: AdjacencyList {
    /// Counts the maximal paths starting at `start` with a single-threaded search.
    /// ** Panics if `start >= n` **
    fn count_maximal_paths_sequential(&self, start: Node) -> u64 {
        let mut visited = self.vertex_bitset_unset();
        MaximalPathCounter::new(self).count_from(start, &mut visited)
    }

    /// Returns *true* if `path` is a non-empty simple path along edges of the graph whose last
    /// node has no neighbor outside of the path.
    fn is_maximal_path(&self, path: &[Node]) -> bool {
        let Some(&last) = path.last() else {
            return false;
        };

        let mut on_path = self.vertex_bitset_unset();
        for &u in path {
            if u >= self.number_of_nodes() || on_path.set_bit(u) {
                return false;
            }
        }

        path.windows(2)
            .all(|w| self.neighbors_of(w[0]).binary_search(&w[1]).is_ok())
            && self.neighbors_of(last).iter().all(|&v| on_path.get_bit(v))
    }
}

impl<G: AdjacencyList> MaximalPaths for G {}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::{gens::*, testing::*};

    #[test]
    fn isolated_node() {
        let graph = CsrGraphUndir::from_edges(3, [(0, 1)]);
        assert_eq!(graph.count_maximal_paths_sequential(2), 1);
        assert!(graph.is_maximal_path(&[2]));
    }

    #[test]
    fn star_from_leaf() {
        // 1 is the center; 0, 2, 3 are leaves
        let graph = CsrGraphUndir::from_edges(4, [(0, 1), (1, 2), (1, 3)]);
        assert_eq!(graph.count_maximal_paths_sequential(0), 2);
        assert_eq!(graph.count_maximal_paths_sequential(1), 3);

        assert!(graph.is_maximal_path(&[0, 1, 2]));
        assert!(!graph.is_maximal_path(&[0, 1]));
        assert!(!graph.is_maximal_path(&[0, 2]));
        assert!(!graph.is_maximal_path(&[0, 1, 0]));
        assert!(!graph.is_maximal_path(&[]));
    }

    #[test]
    fn path_and_cycle() {
        let path = CsrGraphUndir::path(6);
        assert_eq!(path.count_maximal_paths_sequential(0), 1);
        assert_eq!(path.count_maximal_paths_sequential(2), 2);

        // every start node of a cycle has two directions to walk around
        let cycle = CsrGraphUndir::cycle(7);
        for u in 0..7 {
            assert_eq!(cycle.count_maximal_paths_sequential(u), 2);
        }
    }

    #[test]
    fn clique_counts_permutations() {
        // in K_n every maximal path from a fixed start is a permutation of the remaining nodes
        let mut factorial = 1u64;
        for n in 1..8 {
            let graph = CsrGraphUndir::clique(n);
            assert_eq!(graph.count_maximal_paths_sequential(0), factorial);
            factorial *= n as u64;
        }
    }

    #[test]
    fn visited_is_restored() {
        let graph = CsrGraphUndir::clique(5);
        let mut visited = graph.vertex_bitset_unset();
        visited.set_bit(4);

        let mut counter = MaximalPathCounter::new(&graph);
        assert_eq!(counter.count_from(0, &mut visited), 6);
        assert_eq!(counter.count_from(0, &mut visited), 6);

        assert!(visited.get_bit(4));
        assert_eq!(visited.count_ones(..), 1);
    }

    #[test]
    fn randomized_against_enumeration() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1234);
        for _ in 0..200 {
            let n = rng.random_range(1..9);
            let graph = random_topology(rng, n, 0.4);
            let start = rng.random_range(0..n);

            let paths = enumerate_maximal_paths(&graph, start);
            assert_eq!(
                graph.count_maximal_paths_sequential(start),
                paths.len() as u64
            );
            assert!(paths.iter().all(|p| graph.is_maximal_path(p)));
        }
    }
}
