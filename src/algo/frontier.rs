/*!
# Prefix Frontier

Splits the search tree below a start node into independent subtrees.

Starting from the root prefix (just the start node), prefixes are taken from a FIFO worklist and
replaced by one child prefix per neighbor that is not yet on the prefix. A prefix without such a
neighbor is itself a maximal path and is added to the `baseline` instead of being re-queued. The
widening stops as soon as the worklist holds `width` prefixes (or runs empty).

Since the counting rule is a plain sum over disjoint neighbor branches, the result is exact:
```text
count(start) == baseline + sum(count(p) for p in prefixes)
```

Prefixes are stored in a [`PrefixArena`]: every record only knows its node and the index of its
parent, so many prefixes share one ancestor chain and no record is ever mutated after creation.
*/

use std::collections::VecDeque;

use tracing::debug;

use super::*;

/// Index of a prefix record within its [`PrefixArena`]
pub type PrefixIndex = u32;

/// A partial path: its last node plus the prefix it extends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefixRecord {
    /// Last node of the partial path
    pub node: Node,
    /// The prefix this one extends, `None` for the root
    pub parent: Option<PrefixIndex>,
}

/// Append-only storage of structurally shared prefixes.
///
/// A record always points to a record created before it, so chains are acyclic and finite.
#[derive(Debug, Clone, Default)]
pub struct PrefixArena {
    records: Vec<PrefixRecord>,
}

impl PrefixArena {
    /// Creates an empty arena
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a root prefix consisting of `node` only
    pub fn push_root(&mut self, node: Node) -> PrefixIndex {
        self.push(PrefixRecord { node, parent: None })
    }

    /// Adds a prefix extending `parent` by `node`.
    /// ** Panics if `parent` is not in the arena **
    pub fn push_child(&mut self, parent: PrefixIndex, node: Node) -> PrefixIndex {
        assert!((parent as usize) < self.records.len());
        self.push(PrefixRecord {
            node,
            parent: Some(parent),
        })
    }

    fn push(&mut self, record: PrefixRecord) -> PrefixIndex {
        let index = self.records.len() as PrefixIndex;
        self.records.push(record);
        index
    }

    /// Returns the record of a prefix.
    /// ** Panics if `prefix` is not in the arena **
    pub fn get(&self, prefix: PrefixIndex) -> PrefixRecord {
        self.records[prefix as usize]
    }

    /// Returns the number of stored records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns *true* if no record was created yet
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates over the nodes of a prefix from its last node back to the root
    pub fn chain(&self, prefix: PrefixIndex) -> impl Iterator<Item = Node> + '_ {
        std::iter::successors(Some(self.get(prefix)), |record| {
            record.parent.map(|p| self.get(p))
        })
        .map(|record| record.node)
    }

    /// Returns *true* if `node` lies on the prefix. Costs time linear in the prefix length.
    pub fn contains(&self, prefix: PrefixIndex, node: Node) -> bool {
        self.chain(prefix).any(|u| u == node)
    }

    /// Returns the nodes of a prefix in path order (root first)
    pub fn path(&self, prefix: PrefixIndex) -> Vec<Node> {
        let mut path: Vec<Node> = self.chain(prefix).collect();
        path.reverse();
        path
    }
}

/// The result of widening the search tree below a start node
#[derive(Debug, Clone)]
pub struct Frontier {
    arena: PrefixArena,
    prefixes: Vec<PrefixIndex>,
    baseline: u64,
}

impl Frontier {
    /// Widens the search tree below `start` until `width` independent prefixes exist
    /// or the tree is exhausted.
    /// ** Panics if `start >= n` **
    pub fn build<G: AdjacencyList>(graph: &G, start: Node, width: usize) -> Self {
        assert!(start < graph.number_of_nodes());

        let mut arena = PrefixArena::new();
        let mut worklist = VecDeque::from([arena.push_root(start)]);
        let mut baseline = 0u64;

        while !worklist.is_empty() && worklist.len() < width {
            let Some(prefix) = worklist.pop_front() else {
                break;
            };
            let node = arena.get(prefix).node;

            let mut extended = false;
            for &v in graph.neighbors_of(node) {
                if arena.contains(prefix, v) {
                    continue;
                }
                extended = true;
                worklist.push_back(arena.push_child(prefix, v));
            }

            if !extended {
                baseline += 1;
            }
        }

        debug!(
            start,
            width,
            prefixes = worklist.len(),
            baseline,
            records = arena.len(),
            "frontier built"
        );

        Self {
            arena,
            prefixes: worklist.into(),
            baseline,
        }
    }

    /// Returns the prefixes still to be counted, in creation order
    pub fn prefixes(&self) -> &[PrefixIndex] {
        &self.prefixes
    }

    /// Returns the arena the prefixes live in
    pub fn arena(&self) -> &PrefixArena {
        &self.arena
    }

    /// Returns the number of maximal paths completed while widening
    pub fn baseline(&self) -> u64 {
        self.baseline
    }

    /// Marks every node of `prefix` except its last one in `visited`, which is the state
    /// [`MaximalPathCounter::count_from`] expects when continuing from the prefix.
    pub fn seed_visited(&self, prefix: PrefixIndex, visited: &mut NodeBitSet) {
        visited.set_bits(self.arena.chain(prefix).skip(1));
    }

    /// Counts all maximal paths below the frontier on the current thread.
    pub fn count_sequential<G: AdjacencyList>(&self, graph: &G) -> u64 {
        let mut counter = MaximalPathCounter::new(graph);
        let mut visited = graph.vertex_bitset_unset();

        self.baseline
            + self
                .prefixes
                .iter()
                .map(|&prefix| {
                    visited.clear();
                    self.seed_visited(prefix, &mut visited);
                    counter.count_from(self.arena.get(prefix).node, &mut visited)
                })
                .sum::<u64>()
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::{gens::*, testing::*};

    #[test]
    fn arena_chains() {
        let mut arena = PrefixArena::new();
        let root = arena.push_root(4);
        let a = arena.push_child(root, 2);
        let b = arena.push_child(a, 7);
        let c = arena.push_child(a, 1);

        assert_eq!(arena.path(b), vec![4, 2, 7]);
        assert_eq!(arena.path(c), vec![4, 2, 1]);
        assert!(arena.contains(b, 4));
        assert!(!arena.contains(c, 7));
        assert_eq!(arena.get(root).parent, None);
        assert_eq!(arena.len(), 4);
    }

    #[test]
    fn width_one_keeps_root() {
        let graph = CsrGraphUndir::clique(4);
        let frontier = Frontier::build(&graph, 0, 1);
        assert_eq!(frontier.prefixes().len(), 1);
        assert_eq!(frontier.baseline(), 0);
        assert_eq!(frontier.arena().path(frontier.prefixes()[0]), vec![0]);
    }

    #[test]
    fn small_graph_is_exhausted() {
        // star from a leaf: the whole tree has 2 leaves and never reaches width 100
        let graph = CsrGraphUndir::from_edges(4, [(0, 1), (1, 2), (1, 3)]);
        let frontier = Frontier::build(&graph, 0, 100);
        assert!(frontier.prefixes().is_empty());
        assert_eq!(frontier.baseline(), 2);
    }

    #[test]
    fn isolated_start() {
        let graph = CsrGraphUndir::from_edges(2, Vec::<(Node, Node)>::new());
        let frontier = Frontier::build(&graph, 1, 8);
        assert!(frontier.prefixes().is_empty());
        assert_eq!(frontier.baseline(), 1);
        assert_eq!(frontier.count_sequential(&graph), 1);
    }

    #[test]
    fn prefixes_are_disjoint_simple_paths() {
        let graph = CsrGraphUndir::clique(6);
        let frontier = Frontier::build(&graph, 0, 16);

        assert!(frontier.prefixes().len() >= 16);
        let paths = frontier
            .prefixes()
            .iter()
            .map(|&p| frontier.arena().path(p))
            .collect_vec();

        for path in &paths {
            assert_eq!(path[0], 0);
            assert!(path.iter().all_unique());
            assert!(path.windows(2).all(|w| graph.has_edge(w[0], w[1])));
        }
        // no prefix extends another one
        for (a, b) in paths.iter().tuple_combinations() {
            assert!(!a.starts_with(b) && !b.starts_with(a));
        }
    }

    #[test]
    fn split_never_changes_total() {
        let rng = &mut Pcg64Mcg::seed_from_u64(42);
        for _ in 0..100 {
            let n = rng.random_range(1..12);
            let graph = random_topology(rng, n, 0.35);
            let start = rng.random_range(0..n);
            let expected = graph.count_maximal_paths_sequential(start);

            for width in 1..=64 {
                let frontier = Frontier::build(&graph, start, width);
                assert_eq!(frontier.count_sequential(&graph), expected, "width {width}");
            }
        }
    }
}
