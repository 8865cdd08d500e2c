/*!
# Graph Generators

Builders for random inputs and constructors for small deterministic graphs, used to exercise the
searches with graphs whose path counts are known or can be brute-forced.

The builders follow a setter pattern:

1. Create a generator instance (e.g., `Gnp::new()`).
2. Set parameters using trait methods (e.g., `.nodes(n).prob(p)`).
3. Generate edges via `generate()` or `stream()`.

Supported models:
- G(n,p): every node pair is connected independently with probability `p`,
- [`LabelledGraphGen`]: random edge lists over fixed-width uppercase labels, as found in input files,
- [`Substructures`]: paths, cycles, cliques and stars on nodes `0..n`.
*/

use rand::Rng;

use crate::prelude::*;

mod gnp;
mod labels;
mod substructures;

pub use gnp::*;
pub use labels::*;
pub use substructures::*;

/// Trait for generators that allow setting the number of nodes.
pub trait NumNodesGen {
    /// Sets the number of nodes in the graph generator.
    fn nodes(self, n: NumNodes) -> Self;
}

/// Trait for generators that allow setting the number of edges.
pub trait NumEdgesGen {
    /// Sets the number of edges in the graph generator.
    fn edges(self, m: NumEdges) -> Self;
}

/// General trait for a configurable random edge generator.
pub trait GraphGenerator {
    /// The edge type produced by the generator
    type Item;

    /// Generates a list of random edges.
    ///
    /// This collects the full result from `stream()` into a `Vec` as default.
    fn generate<R>(&self, rng: &mut R) -> Vec<Self::Item>
    where
        R: Rng,
    {
        self.stream(rng).collect()
    }

    /// Creates a lazy iterator (stream) over generated edges.
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = Self::Item>
    where
        R: Rng;
}

/// Trait for building full graph instances from random models.
pub trait RandomGraph: Sized {
    /// Creates a random undirected `G(n,p)` graph without self-loops.
    fn gnp<R>(rng: &mut R, n: NumNodes, p: f64) -> Self
    where
        R: Rng;
}

impl<G> RandomGraph for G
where
    G: GraphFromScratch,
{
    fn gnp<R>(rng: &mut R, n: NumNodes, p: f64) -> Self
    where
        R: Rng,
    {
        Self::from_edges(n, Gnp::new().nodes(n).prob(p).stream(rng))
    }
}
