/*!
# Parallel Counting

[`ParallelCounter`] evaluates the maximal path rule for every prefix of a [`Frontier`] on a rayon
thread pool. Workers share the graph and the frontier read-only; each worker split owns a private
visited bitset (sized to the graph) and a private [`MaximalPathCounter`] stack. Partial sums are
combined by rayon's tree reduction, so the total does not depend on scheduling.
*/

use rayon::prelude::*;
use tracing::debug;

use super::*;
use crate::config::SearchConfig;

/// Configurable parallel evaluation of maximal path totals.
///
/// Counting runs on the rayon pool the caller is currently installed in (the global pool by
/// default); see [`crate::report::Report`] for a run with a dedicated pool.
#[derive(Debug, Clone, Copy)]
pub struct ParallelCounter {
    width: usize,
}

impl Default for ParallelCounter {
    fn default() -> Self {
        Self::from_config(&SearchConfig::default())
    }
}

impl ParallelCounter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses the frontier width derived from the given configuration
    pub fn from_config(config: &SearchConfig) -> Self {
        Self {
            width: config.frontier_width(),
        }
    }

    /// Sets the number of prefixes the frontier is widened to (at least `1`)
    pub fn frontier_width(mut self, width: usize) -> Self {
        self.width = width.max(1);
        self
    }

    /// Returns the number of maximal paths starting at `start`.
    /// ** Panics if `start >= n` **
    pub fn count<G>(&self, graph: &G, start: Node) -> u64
    where
        G: AdjacencyList + Sync,
    {
        let frontier = Frontier::build(graph, start, self.width);
        self.count_frontier(graph, &frontier)
    }

    /// Counts all maximal paths below an already built frontier
    pub fn count_frontier<G>(&self, graph: &G, frontier: &Frontier) -> u64
    where
        G: AdjacencyList + Sync,
    {
        let below = frontier
            .prefixes()
            .par_iter()
            .map_init(
                || (MaximalPathCounter::new(graph), graph.vertex_bitset_unset()),
                |(counter, visited), &prefix| {
                    visited.clear();
                    frontier.seed_visited(prefix, visited);
                    counter.count_from(frontier.arena().get(prefix).node, visited)
                },
            )
            .sum::<u64>();

        debug!(
            prefixes = frontier.prefixes().len(),
            baseline = frontier.baseline(),
            below,
            "frontier counted"
        );

        frontier.baseline() + below
    }
}

/// Parallel maximal path queries implemented directly on graphs
pub trait ParallelMaximalPaths: AdjacencyList + Sync {
    /// Counts the maximal paths starting at `start` using the default [`ParallelCounter`].
    /// ** Panics if `start >= n` **
    fn count_maximal_paths(&self, start: Node) -> u64 {
        ParallelCounter::default().count(self, start)
    }
}

impl<G: AdjacencyList + Sync> ParallelMaximalPaths for G {}
