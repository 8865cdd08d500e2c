//! Helpers shared by the in-crate tests: random topologies and a brute-force enumeration of
//! maximal paths to compare the searches against.

use rand::Rng;

use crate::{gens::*, prelude::*};

/// Random undirected `G(n,p)` topology without self-loops
pub fn random_topology<R: Rng>(rng: &mut R, n: NumNodes, p: f64) -> CsrGraphUndir {
    CsrGraphUndir::gnp(rng, n, p)
}

/// All maximal paths starting at `start`, in the order of a recursive search over ascending
/// neighbors
pub fn enumerate_maximal_paths<G: AdjacencyList>(graph: &G, start: Node) -> Vec<Vec<Node>> {
    fn recurse<G: AdjacencyList>(
        graph: &G,
        path: &mut Vec<Node>,
        visited: &mut NodeBitSet,
        out: &mut Vec<Vec<Node>>,
    ) {
        let u = *path.last().unwrap();
        let mut extended = false;
        for &v in graph.neighbors_of(u) {
            if visited.set_bit(v) {
                continue;
            }
            extended = true;
            path.push(v);
            recurse(graph, path, visited, out);
            path.pop();
            visited.clear_bit(v);
        }

        if !extended {
            out.push(path.clone());
        }
    }

    let mut visited = graph.vertex_bitset_unset();
    visited.set_bit(start);
    let mut out = Vec::new();
    recurse(graph, &mut vec![start], &mut visited, &mut out);
    out
}

/// Places `right` next to `left`; nodes of `right` are shifted by `left.number_of_nodes()`
pub fn disjoint_union(left: &CsrGraphUndir, right: &CsrGraphUndir) -> CsrGraphUndir {
    let shift = left.number_of_nodes();
    CsrGraphUndir::from_edges(
        shift + right.number_of_nodes(),
        left.edges(true)
            .chain(right.edges(true).map(|Edge(u, v)| Edge(u + shift, v + shift))),
    )
}
