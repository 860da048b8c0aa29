use std::collections::HashMap;

use crate::bound::PruneBound;
use crate::error::SearchError;
use crate::graph::{Graph, NodeId};
use crate::opened::Opened;
use crate::options::Options;
use crate::search::{Outcome, Progress, Visit};

#[cfg(test)]
mod tests;

/// Number of agents acting at once.
const AGENTS: usize = 2;

/// Cache key for two interchangeable agents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct PairKey {
    a: NodeId,
    b: NodeId,
    time: u32,
    opened: Opened,
}

impl PairKey {
    /// Construct a canonical key, merging "a at X, b at Y" with "a at Y, b
    /// at X".
    #[inline]
    pub(crate) fn new(a: NodeId, b: NodeId, time: u32, opened: Opened) -> Self {
        Self {
            a,
            b,
            time,
            opened,
        }
        .canonical()
    }

    #[inline]
    pub(crate) fn canonical(self) -> Self {
        if self.a <= self.b {
            self
        } else {
            Self {
                a: self.b,
                b: self.a,
                ..self
            }
        }
    }
}

/// Search for the best total two agents sharing one clock can release.
///
/// Every minute each agent either moves along an edge or opens the valve it
/// stands on. Two agents on the same node can't both open it.
pub struct Duo<'g> {
    graph: &'g Graph,
    horizon: u32,
    progress: Progress,
    cache: HashMap<PairKey, Visit>,
}

impl<'g> Duo<'g> {
    /// Prepare a search over `graph`. The single agent bound in `options` is
    /// ignored, the pair always uses the greedy bound.
    pub fn new(graph: &'g Graph, options: Options) -> Self {
        let bound = PruneBound::greedy(graph, options.horizon, AGENTS);

        Self {
            graph,
            horizon: options.horizon,
            progress: Progress::new(bound, &options),
            cache: HashMap::new(),
        }
    }

    /// Run the search with both agents starting at the node named `start`.
    pub fn run(mut self, start: &str) -> Result<Outcome, SearchError> {
        if self.horizon <= 1 {
            return Ok(Outcome::default());
        }

        let Some(id) = self.graph.lookup(start) else {
            return Err(SearchError::UnknownStart(start.into()));
        };

        log::debug!(
            "searching with {AGENTS} agents from {start} over {} minutes, {} valves",
            self.horizon,
            self.graph.len()
        );

        let root = self.visit(id, id, self.horizon, Opened::EMPTY, 0)?;
        Ok(self.progress.finish(root))
    }

    fn visit(
        &mut self,
        a: NodeId,
        b: NodeId,
        time: u32,
        opened: Opened,
        accumulated: u64,
    ) -> Result<Visit, SearchError> {
        if time <= 1 {
            return Ok(Visit::NOTHING);
        }

        self.progress.enter()?;

        if let Some(visit) = self.progress.prune(accumulated, time)? {
            return Ok(visit);
        }

        let key = PairKey::new(a, b, time, opened);

        if let Some(visit) = self.progress.cached(self.cache.get(&key), accumulated) {
            return Ok(visit);
        }

        let graph = self.graph;
        let na = graph.node(a).ok_or(SearchError::UnknownNode(a))?;
        let nb = graph.node(b).ok_or(SearchError::UnknownNode(b))?;

        let (stay_a, stay_b) = ([a], [b]);

        let moves_a = match na.edges() {
            [] => &stay_a[..],
            edges => edges,
        };

        let moves_b = match nb.edges() {
            [] => &stay_b[..],
            edges => edges,
        };

        let open_a = na.valve().filter(|&bit| !opened.contains(bit));
        let open_b = nb.valve().filter(|&bit| !opened.contains(bit));

        let rest = time - 1;
        let mut best = Visit::NOTHING;

        for &x in moves_a {
            for &y in moves_b {
                best = best.merge(self.visit(x, y, rest, opened, accumulated)?);
            }
        }

        if let Some(bit) = open_a {
            let gain = na.gain(time);
            let opened = opened.with(bit);

            for &y in moves_b {
                let visit = self.visit(a, y, rest, opened, accumulated.saturating_add(gain))?;
                best = best.merge(visit.plus(gain));
            }
        }

        if let Some(bit) = open_b {
            let gain = nb.gain(time);
            let opened = opened.with(bit);

            for &x in moves_a {
                let visit = self.visit(x, b, rest, opened, accumulated.saturating_add(gain))?;
                best = best.merge(visit.plus(gain));
            }
        }

        if let (Some(bit_a), Some(bit_b)) = (open_a, open_b) {
            if a != b {
                let gain = na.gain(time).saturating_add(nb.gain(time));
                let opened = opened.with(bit_a).with(bit_b);
                let visit = self.visit(a, b, rest, opened, accumulated.saturating_add(gain))?;
                best = best.merge(visit.plus(gain));
            }
        }

        let best = best.settle();
        self.progress.offer(accumulated.saturating_add(best.value));
        self.cache.insert(key, best);
        Ok(best)
    }
}

/// Find the best total two agents starting together at `start` can release.
pub fn search_pair(graph: &Graph, start: &str, options: Options) -> Result<Outcome, SearchError> {
    Duo::new(graph, options).run(start)
}
