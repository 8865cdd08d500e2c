/*!
# Configuration

[`SearchConfig`] collects the knobs of a run. It follows the builder/setter pattern used by the
algorithm structs: start from `SearchConfig::default()` and override what you need.

```
use mpaths::config::SearchConfig;

let config = SearchConfig::default().threads(4).frontier_factor(6);
assert_eq!(config.worker_threads(), 4);
assert_eq!(config.frontier_width(), 24);
```
*/

/// Number of frontier prefixes created per worker thread by default
pub const DEFAULT_FRONTIER_FACTOR: usize = 8;

/// Width of a node label in the input files
pub const DEFAULT_LABEL_WIDTH: usize = 3;

/// Settings shared by all searches of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    threads: Option<usize>,
    frontier_factor: usize,
    label_width: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            threads: None,
            frontier_factor: DEFAULT_FRONTIER_FACTOR,
            label_width: DEFAULT_LABEL_WIDTH,
        }
    }
}

impl SearchConfig {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Fixes the number of worker threads (`0` means: use available parallelism)
    pub fn threads(mut self, threads: usize) -> Self {
        self.threads = (threads > 0).then_some(threads);
        self
    }

    /// Sets how many frontier prefixes are created per worker thread (at least `1`)
    pub fn frontier_factor(mut self, factor: usize) -> Self {
        self.frontier_factor = factor.max(1);
        self
    }

    /// Sets the width of a node label in the input files (at least `1`)
    pub fn label_width(mut self, width: usize) -> Self {
        self.label_width = width.max(1);
        self
    }

    /// Returns the number of worker threads to use
    pub fn worker_threads(&self) -> usize {
        self.threads.unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1)
        })
    }

    /// Returns the number of prefixes the frontier is widened to before counting in parallel
    pub fn frontier_width(&self) -> usize {
        self.frontier_factor.saturating_mul(self.worker_threads())
    }

    /// Returns the width of a node label
    pub fn width_of_labels(&self) -> usize {
        self.label_width
    }
}
