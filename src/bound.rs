use crate::error::SearchError;
use crate::graph::Graph;

/// Provable upper bound on the total obtainable from a search state.
///
/// Both variants ignore movement, so they always overestimate. Pruning with
/// them never discards an optimal branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PruneBound {
    /// Opens the heaviest node of the graph every other minute.
    Uniform { max_weight: u32 },
    /// Precomputed limit per minute remaining, opening the heaviest
    /// remaining nodes `agents` at a time every other minute.
    Table { limits: Vec<u64> },
}

impl PruneBound {
    /// Bound which repeatedly opens the heaviest node in `graph`.
    pub fn uniform(graph: &Graph) -> Self {
        Self::Uniform {
            max_weight: graph.max_weight(),
        }
    }

    /// Bound table covering `0..=horizon` minutes for the given number of
    /// simultaneously acting agents.
    pub fn greedy(graph: &Graph, horizon: u32, agents: usize) -> Self {
        let weights = graph.weights_descending();
        let mut weights = weights.iter().copied();

        let mut limits = vec![0u64; horizon as usize + 1];
        let mut flow = 0u64;

        for t in 1..limits.len() {
            limits[t] = limits[t - 1].saturating_add(flow);

            // The openings at `t` only start flowing from `t + 1` onwards.
            if t % 2 == 1 {
                flow = weights
                    .by_ref()
                    .take(agents)
                    .fold(flow, |flow, w| flow.saturating_add(u64::from(w)));
            }
        }

        Self::Table { limits }
    }

    /// The most `accumulated` can grow to with `time` minutes remaining.
    pub fn upper_bound(&self, accumulated: u64, time: u32) -> Result<u64, SearchError> {
        let additional = match self {
            PruneBound::Uniform { max_weight } => {
                // (t - 1) + (t - 3) + (t - 5) + ...
                let time = u64::from(time);
                let minutes = (time / 2) * ((time + 1) / 2);
                u64::from(*max_weight).saturating_mul(minutes)
            }
            PruneBound::Table { limits } => {
                let Some(&limit) = limits.get(time as usize) else {
                    return Err(SearchError::MissingLimit {
                        time,
                        max: limits.len().saturating_sub(1),
                    });
                };

                limit
            }
        };

        Ok(accumulated.saturating_add(additional))
    }
}
