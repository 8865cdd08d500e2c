/*!
# Maximal Path Algorithms

All searches are re-exported at the top level of this module:
```rust
use mpaths::{prelude::*, algo::*};

let graph = LabelledGraph::from_label_edges([("AAA", "AAB"), ("AAB", "AAC"), ("AAB", "AAD")]);
let start = graph.node_index("AAA").unwrap();

assert_eq!(graph.count_maximal_paths_sequential(start), 2);
assert_eq!(graph.count_maximal_paths(start), 2);
assert_eq!(
    LexicographicPaths::new(&graph, 5).first_paths(start),
    vec!["AAAAABAAC", "AAAAABAAD"]
);
```

- [`maximal`](MaximalPaths): the sequential counting rule, also used by every parallel worker,
- [`frontier`](Frontier): widening of the search tree into disjoint prefixes,
- [`parallel`](ParallelCounter): evaluation of a frontier on a rayon pool,
- [`lexicographic`](LexicographicPaths): the first `K` maximal paths in label order.
*/

mod frontier;
mod lexicographic;
mod maximal;
mod parallel;

use crate::prelude::*;

pub use frontier::*;
pub use lexicographic::*;
pub use maximal::*;
pub use parallel::*;
