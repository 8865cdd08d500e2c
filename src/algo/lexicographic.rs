/*!
# Lexicographically First Maximal Paths

[`LexicographicPaths`] emits the first `K` maximal paths starting at a node, in ascending order of
their label sequence. Since ids follow label order and adjacency lists are sorted, a depth-first
search that tries neighbors in ascending order discovers maximal paths in exactly that order.

The search carries the number of paths found so far. Before descending into the next sibling it
checks this number against the budget `K` and prunes all remaining siblings once it is reached;
later siblings only lead to larger paths. The count returned by the search is bookkeeping for the
pruning and not the total number of maximal paths (see [`super::parallel`] for that).
*/

use super::*;

/// One level of the printing search
#[derive(Debug, Clone, Copy)]
struct PrintFrame {
    node: Node,
    next: usize,
    /// Paths found before this subtree was entered
    base: u64,
    /// Paths found within this subtree
    found: u64,
}

impl PrintFrame {
    fn new(node: Node, base: u64) -> Self {
        Self {
            node,
            next: 0,
            base,
            found: 0,
        }
    }
}

/// Budget-bounded enumeration of maximal paths in lexicographic order
pub struct LexicographicPaths<'a, G>
where
    G: AdjacencyList,
{
    graph: &'a G,
    budget: u64,
}

impl<'a, G> LexicographicPaths<'a, G>
where
    G: AdjacencyList,
{
    /// Creates an enumeration emitting at most `budget` paths per start node
    pub fn new(graph: &'a G, budget: u64) -> Self {
        Self { graph, budget }
    }

    /// Returns the budget
    pub fn budget(&self) -> u64 {
        self.budget
    }

    /// Calls `emit` for each of the first `budget` maximal paths starting at `start`, in order.
    /// Returns the number of paths accounted for by the search.
    /// ** Panics if `start >= n` **
    pub fn for_each_path<F>(&self, start: Node, mut emit: F) -> u64
    where
        F: FnMut(&[Node]),
    {
        let mut visited = self.graph.vertex_bitset_unset();
        let mut path = vec![start];
        let mut stack = vec![PrintFrame::new(start, 0)];
        visited.set_bit(start);

        while let Some(frame) = stack.last_mut() {
            if frame.base + frame.found < self.budget {
                let nbs = self.graph.neighbors_of(frame.node);
                if let Some(pos) = nbs[frame.next..].iter().position(|&v| !visited.get_bit(v)) {
                    let v = nbs[frame.next + pos];
                    frame.next += pos + 1;
                    let base = frame.base + frame.found;

                    visited.set_bit(v);
                    path.push(v);
                    stack.push(PrintFrame::new(v, base));
                    continue;
                }
            }

            let PrintFrame {
                node,
                base,
                mut found,
                ..
            } = *frame;
            stack.pop();

            // dead end: the path ending here is maximal
            if found == 0 && base < self.budget {
                emit(&path);
                found = 1;
            }

            visited.clear_bit(node);
            path.pop();

            match stack.last_mut() {
                Some(parent) => parent.found += found,
                None => return found,
            }
        }

        unreachable!("the root frame always returns")
    }

    /// Returns the first `budget` maximal paths starting at `start` as node sequences
    pub fn first_paths_as_nodes(&self, start: Node) -> Vec<Vec<Node>> {
        let mut paths = Vec::new();
        self.for_each_path(start, |path| paths.push(path.to_vec()));
        paths
    }
}

impl<G> LexicographicPaths<'_, G>
where
    G: AdjacencyList + Labelled,
{
    /// Returns the first `budget` maximal paths starting at `start`, each rendered as the
    /// concatenation of its labels
    pub fn first_paths(&self, start: Node) -> Vec<String> {
        let mut paths = Vec::new();
        self.for_each_path(start, |path| {
            paths.push(self.graph.concat_labels(path.iter().copied()))
        });
        paths
    }
}
