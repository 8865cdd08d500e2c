use super::*;

/// `G(n,p)` graphs contain every possible undirected edge `{u, v}` with `u < v` independently
/// with probability `p`. Self-loops are never produced.
#[derive(Debug, Copy, Clone, Default)]
pub struct Gnp {
    n: NumNodes,
    p: Option<f64>,
}

impl Gnp {
    /// Creates a new empty `G(n,p)` generator
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates `p` directly
    /// ** Panics if `p` is not in `[0, 1]` **
    pub fn prob(mut self, prob: f64) -> Self {
        assert!((0.0..=1.0).contains(&prob), "{prob} is not a probability");
        self.p = Some(prob);
        self
    }
}

impl NumNodesGen for Gnp {
    /// Updates `n`
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }
}

impl GraphGenerator for Gnp {
    type Item = Edge;

    /// Creates a streaming generator over random normalized `G(n,p)` edges
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = Edge>
    where
        R: Rng,
    {
        let p = self.p.expect("Probability of Gnp was not set!");
        let n = self.n;

        (0..n)
            .flat_map(move |u| (u + 1..n).map(move |v| Edge(u, v)))
            .filter(move |_| rng.random_bool(p))
    }
}
