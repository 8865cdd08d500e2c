/*!
# Substructures

Deterministic graphs on nodes `0..n` with well-known numbers of maximal paths.

```rust
use mpaths::{prelude::*, gens::*};

let g = CsrGraphUndir::cycle(4);
assert_eq!(g.edges(true).collect::<Vec<Edge>>(), vec![Edge(0, 1), Edge(0, 3), Edge(1, 2), Edge(2, 3)]);
```
*/

use itertools::Itertools;

use super::*;

/// Constructors for paths, cycles, cliques and stars.
///
/// Implemented for all graphs that can be built from an edge list.
pub trait Substructures: GraphFromScratch + Sized {
    /// The path `0 - 1 - ... - (n-1)`
    fn path(n: NumNodes) -> Self {
        Self::from_edges(n, (1..n).map(|v| Edge(v - 1, v)))
    }

    /// The path on `n` nodes closed by the edge `{n-1, 0}`.
    /// For `n < 3` this is the path on `n` nodes.
    fn cycle(n: NumNodes) -> Self {
        let closing = (n > 2).then(|| Edge(n - 1, 0));
        Self::from_edges(n, (1..n).map(|v| Edge(v - 1, v)).chain(closing))
    }

    /// The complete graph on `n` nodes
    fn clique(n: NumNodes) -> Self {
        Self::from_edges(n, (0..n).tuple_combinations().map(|(u, v)| Edge(u, v)))
    }

    /// The star with center `0` and `n - 1` leaves
    fn star(n: NumNodes) -> Self {
        Self::from_edges(n, (1..n).map(|v| Edge(0, v)))
    }
}

impl<G: GraphFromScratch + Sized> Substructures for G {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_counts() {
        for n in 0..10u32 {
            let m = n.saturating_sub(1);
            assert_eq!(CsrGraphUndir::path(n).number_of_edges(), m);
            assert_eq!(CsrGraphUndir::star(n).number_of_edges(), m);
            assert_eq!(
                CsrGraphUndir::cycle(n).number_of_edges(),
                if n > 2 { n } else { m }
            );
            assert_eq!(
                CsrGraphUndir::clique(n).number_of_edges(),
                n * m / 2
            );
        }
    }

    #[test]
    fn star_degrees() {
        let g = CsrGraphUndir::star(6);
        assert_eq!(g.degree_of(0), 5);
        assert!((1..6).all(|u| g.degree_of(u) == 1));
    }
}
