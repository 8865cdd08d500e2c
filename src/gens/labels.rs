use fxhash::FxHashSet;
use rand::seq::{IndexedRandom, index::sample};

use super::*;
use crate::io::Workload;

/// Generates random edge lists over fixed-width labels of uppercase ASCII letters, in the shape
/// of graph input files.
///
/// `n` distinct labels are drawn first; then `m` distinct undirected edges between them (no
/// self-loops) are drawn and emitted in random orientation. `m` is capped at `n(n-1)/2`, so fewer
/// than two nodes yield an empty list.
///
/// [`LabelledGraphGen::instance`] additionally draws a [`Workload`] of distinct start labels, giving
/// the contents of a graph file and a start-node file for one run.
#[derive(Debug, Copy, Clone)]
pub struct LabelledGraphGen {
    n: NumNodes,
    m: NumEdges,
    width: u32,
    budget: u64,
    starts: usize,
}

impl Default for LabelledGraphGen {
    fn default() -> Self {
        Self {
            n: 0,
            m: 0,
            width: 3,
            budget: 0,
            starts: 0,
        }
    }
}

impl LabelledGraphGen {
    /// Creates a generator for 3-letter labels
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of letters per label
    /// ** Panics if `width == 0` **
    pub fn label_width(mut self, width: u32) -> Self {
        assert!(width > 0);
        self.width = width;
        self
    }

    /// Sets the number of paths to print per start node in generated workloads
    pub fn budget(mut self, budget: u64) -> Self {
        self.budget = budget;
        self
    }

    /// Sets the number of distinct start labels in generated workloads
    pub fn starts(mut self, starts: usize) -> Self {
        self.starts = starts;
        self
    }

    /// Draws `n` distinct labels
    /// ** Panics if there are fewer than `n` labels of the configured width **
    pub fn labels<R>(&self, rng: &mut R) -> Vec<String>
    where
        R: Rng,
    {
        let space = 26usize.saturating_pow(self.width);
        assert!(self.n as usize <= space, "not enough distinct labels");

        sample(rng, space, self.n as usize)
            .into_iter()
            .map(|mut x| {
                let mut label = vec![b'A'; self.width as usize];
                for letter in label.iter_mut().rev() {
                    *letter += (x % 26) as u8;
                    x /= 26;
                }
                String::from_utf8_lossy(&label).into_owned()
            })
            .collect()
    }
}

impl NumNodesGen for LabelledGraphGen {
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }
}

impl NumEdgesGen for LabelledGraphGen {
    fn edges(mut self, m: NumEdges) -> Self {
        self.m = m;
        self
    }
}

impl GraphGenerator for LabelledGraphGen {
    type Item = LabelEdge;

    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = LabelEdge>
    where
        R: Rng,
    {
        let labels = self.labels(rng);
        self.edges_between(rng, &labels).into_iter()
    }
}

impl LabelledGraphGen {
    /// Draws the edges between the given `n` labels
    fn edges_between<R>(&self, rng: &mut R, labels: &[String]) -> Vec<LabelEdge>
    where
        R: Rng,
    {
        let n = self.n as u64;
        let m = (self.m as u64).min(n * n.saturating_sub(1) / 2);

        let mut seen = FxHashSet::default();
        let mut edges = Vec::with_capacity(m as usize);
        while (edges.len() as u64) < m {
            let u = rng.random_range(0..self.n);
            let v = rng.random_range(0..self.n);
            if u == v || !seen.insert(Edge(u, v).normalized()) {
                continue;
            }
            edges.push(LabelEdge(
                labels[u as usize].clone(),
                labels[v as usize].clone(),
            ));
        }

        edges
    }

    /// Draws a graph together with a workload of `starts` distinct start labels.
    ///
    /// Start labels are drawn from all `n` labels, so a label without any edge can be a start
    /// label that the graph file does not know.
    /// ** Panics if `starts > n` **
    pub fn instance<R>(&self, rng: &mut R) -> (Vec<LabelEdge>, Workload)
    where
        R: Rng,
    {
        assert!(
            self.starts <= self.n as usize,
            "cannot draw {} distinct start labels from {} nodes",
            self.starts,
            self.n
        );

        let labels = self.labels(rng);
        let edges = self.edges_between(rng, &labels);
        let start_labels = labels
            .choose_multiple(rng, self.starts)
            .cloned()
            .collect();

        (
            edges,
            Workload {
                print_budget: self.budget,
                start_labels,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn labels_are_distinct_uppercase() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);
        let labels = LabelledGraphGen::new().nodes(200).labels(rng);
        assert_eq!(labels.len(), 200);
        assert!(labels.iter().all_unique());
        assert!(
            labels
                .iter()
                .all(|l| l.len() == 3 && l.bytes().all(|b| b.is_ascii_uppercase()))
        );
    }

    #[test]
    fn edge_count_is_capped() {
        let rng = &mut Pcg64Mcg::seed_from_u64(6);
        let edges = LabelledGraphGen::new().nodes(5).edges(100).generate(rng);
        assert_eq!(edges.len(), 10);
        assert!(edges.iter().all(|e| !e.is_loop()));

        let graph = LabelledGraph::from_label_edges(edges);
        assert_eq!(graph.number_of_nodes(), 5);
        assert_eq!(graph.number_of_edges(), 10);

        assert!(LabelledGraphGen::new().nodes(1).edges(3).generate(rng).is_empty());
    }

    #[test]
    fn instance_workload() {
        let rng = &mut Pcg64Mcg::seed_from_u64(8);
        let (edges, workload) = LabelledGraphGen::new()
            .nodes(12)
            .edges(20)
            .budget(4)
            .starts(5)
            .instance(rng);

        assert_eq!(edges.len(), 20);
        assert_eq!(workload.print_budget, 4);
        assert_eq!(workload.start_labels.len(), 5);
        assert!(workload.start_labels.iter().all_unique());
    }

    #[test]
    #[should_panic]
    fn too_many_starts() {
        let rng = &mut Pcg64Mcg::seed_from_u64(9);
        LabelledGraphGen::new().nodes(3).starts(4).instance(rng);
    }
}
