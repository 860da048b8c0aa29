/// Strategy used to bound the value a single agent can still obtain.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// Open the heaviest valve in the graph every other minute.
    #[default]
    Uniform,
    /// Open valves in descending weight order, one every other minute.
    Greedy,
}

/// Search configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct Options {
    /// Minutes available.
    pub horizon: u32,
    /// Bound used by single agent searches. Two agents always use the greedy
    /// bound.
    pub bound: Bound,
    /// Prune branches which can't beat the best total found so far.
    pub pruning: bool,
    /// Fail after visiting this many states.
    pub budget: Option<u64>,
}

impl Options {
    /// Default options for the given horizon.
    pub fn new(horizon: u32) -> Self {
        Self {
            horizon,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_bound(self, bound: Bound) -> Self {
        Self { bound, ..self }
    }

    #[must_use]
    pub fn with_pruning(self, pruning: bool) -> Self {
        Self { pruning, ..self }
    }

    #[must_use]
    pub fn with_budget(self, budget: u64) -> Self {
        Self {
            budget: Some(budget),
            ..self
        }
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            horizon: 30,
            bound: Bound::Uniform,
            pruning: true,
            budget: None,
        }
    }
}
