use std::collections::HashMap;

use serde::Serialize;

use crate::bound::PruneBound;
use crate::error::SearchError;
use crate::graph::{Graph, NodeId};
use crate::opened::Opened;
use crate::options::{Bound, Options};


/// Counters collected over one search.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stats {
    /// States visited past the terminal check.
    pub visited: u64,
    /// Visits answered from the cache.
    pub cache_hits: u64,
    /// Visits cut off by the bound.
    pub pruned: u64,
    /// Times the best total improved.
    pub improvements: u64,
}

/// The result of a top-level search.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    /// The best total found.
    pub best: u64,
    pub stats: Stats,
}

/// Best total found anywhere in the search so far. Never decreases.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct Best(u64);

impl Best {
    #[inline]
    pub(crate) fn get(&self) -> u64 {
        self.0
    }

    /// Offer a total, returns `true` if it improved on the best one.
    #[inline]
    pub(crate) fn offer(&mut self, total: u64) -> bool {
        if total > self.0 {
            self.0 = total;
            true
        } else {
            false
        }
    }
}

/// Additional value obtainable from a state.
///
/// `value` is always achievable. If some branch below was pruned, `ceiling`
/// holds the most any pruned branch could have added, so the true optimum is
/// at most the larger of the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Visit {
    pub(crate) value: u64,
    pub(crate) ceiling: Option<u64>,
}

impl Visit {
    pub(crate) const NOTHING: Self = Self {
        value: 0,
        ceiling: None,
    };

    /// A branch cut off with at most `ceiling` left to gain.
    #[inline]
    pub(crate) fn pruned(ceiling: u64) -> Self {
        Self {
            value: 0,
            ceiling: Some(ceiling),
        }
    }

    /// Best of two alternatives.
    #[inline]
    pub(crate) fn merge(self, other: Self) -> Self {
        Self {
            value: self.value.max(other.value),
            ceiling: self.ceiling.max(other.ceiling),
        }
    }

    #[inline]
    pub(crate) fn plus(self, gain: u64) -> Self {
        Self {
            value: self.value.saturating_add(gain),
            ceiling: self.ceiling.map(|c| c.saturating_add(gain)),
        }
    }

    /// Drop a ceiling the value already reaches.
    #[inline]
    pub(crate) fn settle(self) -> Self {
        match self.ceiling {
            Some(ceiling) if ceiling <= self.value => Self {
                ceiling: None,
                ..self
            },
            _ => self,
        }
    }

    /// Test if the visit can stand in for a fresh one bringing `accumulated`
    /// while the best total is `best`.
    ///
    /// Whatever was pruned below must still be unable to beat `best`.
    #[inline]
    pub(crate) fn reusable(&self, accumulated: u64, best: u64) -> bool {
        match self.ceiling {
            None => true,
            Some(ceiling) => accumulated.saturating_add(ceiling) <= best,
        }
    }
}

/// Bookkeeping shared by every state of one search: the best total, the
/// statistics, and the pruning and budget policy.
#[derive(Debug)]
pub(crate) struct Progress {
    bound: PruneBound,
    pruning: bool,
    budget: Option<u64>,
    best: Best,
    stats: Stats,
}

impl Progress {
    pub(crate) fn new(bound: PruneBound, options: &Options) -> Self {
        Self {
            bound,
            pruning: options.pruning,
            budget: options.budget,
            best: Best::default(),
            stats: Stats::default(),
        }
    }

    /// Count a visited state, failing once the budget is spent.
    #[inline]
    pub(crate) fn enter(&mut self) -> Result<(), SearchError> {
        self.stats.visited += 1;

        if let Some(steps) = self.budget {
            if self.stats.visited > steps {
                return Err(SearchError::BudgetExhausted { steps });
            }
        }

        Ok(())
    }

    /// Cut off a state holding `accumulated` with `time` remaining if it
    /// can't beat the best total.
    #[inline]
    pub(crate) fn prune(
        &mut self,
        accumulated: u64,
        time: u32,
    ) -> Result<Option<Visit>, SearchError> {
        if !self.pruning {
            return Ok(None);
        }

        let bound = self.bound.upper_bound(accumulated, time)?;

        if bound > self.best.get() {
            return Ok(None);
        }

        self.stats.pruned += 1;
        Ok(Some(Visit::pruned(bound.saturating_sub(accumulated))))
    }

    /// Answer a state holding `accumulated` from its cache entry, if any.
    #[inline]
    pub(crate) fn cached(&mut self, entry: Option<&Visit>, accumulated: u64) -> Option<Visit> {
        let visit = *entry?;

        if !visit.reusable(accumulated, self.best.get()) {
            return None;
        }

        self.stats.cache_hits += 1;
        self.offer(accumulated.saturating_add(visit.value));
        Some(visit)
    }

    #[inline]
    pub(crate) fn offer(&mut self, total: u64) {
        if self.best.offer(total) {
            self.stats.improvements += 1;
            log::trace!("best total improved to {total}");
        }
    }

    pub(crate) fn finish(mut self, root: Visit) -> Outcome {
        self.offer(root.value);

        if let Some(ceiling) = root.ceiling {
            log::trace!("pruned branches bounded by {ceiling}");
        }

        log::debug!(
            "best {best}: visited {visited}, cache hits {cache_hits}, pruned {pruned}",
            best = self.best.get(),
            visited = self.stats.visited,
            cache_hits = self.stats.cache_hits,
            pruned = self.stats.pruned,
        );

        Outcome {
            best: self.best.get(),
            stats: self.stats,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Key {
    node: NodeId,
    time: u32,
    opened: Opened,
}

/// Search for the best total a single agent can release.
pub struct Search<'g> {
    graph: &'g Graph,
    horizon: u32,
    progress: Progress,
    cache: HashMap<Key, Visit>,
}

impl<'g> Search<'g> {
    /// Prepare a search over `graph`.
    pub fn new(graph: &'g Graph, options: Options) -> Self {
        let bound = match options.bound {
            Bound::Uniform => PruneBound::uniform(graph),
            Bound::Greedy => PruneBound::greedy(graph, options.horizon, 1),
        };

        Self {
            graph,
            horizon: options.horizon,
            progress: Progress::new(bound, &options),
            cache: HashMap::new(),
        }
    }

    /// Run the search from the node named `start`.
    pub fn run(mut self, start: &str) -> Result<Outcome, SearchError> {
        // Nothing can be gained, so don't even look at the graph.
        if self.horizon <= 1 {
            return Ok(Outcome::default());
        }

        let Some(id) = self.graph.lookup(start) else {
            return Err(SearchError::UnknownStart(start.into()));
        };

        log::debug!(
            "searching from {start} over {} minutes, {} valves",
            self.horizon,
            self.graph.len()
        );

        let root = self.visit(id, self.horizon, Opened::EMPTY, 0)?;
        Ok(self.progress.finish(root))
    }

    fn visit(
        &mut self,
        id: NodeId,
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

        let key = Key {
            node: id,
            time,
            opened,
        };

        if let Some(visit) = self.progress.cached(self.cache.get(&key), accumulated) {
            return Ok(visit);
        }

        let graph = self.graph;
        let node = graph.node(id).ok_or(SearchError::UnknownNode(id))?;

        let stay = [id];

        let moves = match node.edges() {
            [] => &stay[..],
            edges => edges,
        };

        let mut best = Visit::NOTHING;

        for &next in moves {
            best = best.merge(self.visit(next, time - 1, opened, accumulated)?);
        }

        if let Some(bit) = node.valve().filter(|&bit| !opened.contains(bit)) {
            let gain = node.gain(time);
            let opened = opened.with(bit);
            let accumulated = accumulated.saturating_add(gain);
            let mut after = Visit::NOTHING;

            for &next in moves {
                after = after.merge(self.visit(next, time - 2, opened, accumulated)?);
            }

            best = best.merge(after.plus(gain));
        }

        let best = best.settle();
        self.progress.offer(accumulated.saturating_add(best.value));
        self.cache.insert(key, best);
        Ok(best)
    }
}

/// Find the best total a single agent starting at `start` can release.
pub fn search(graph: &Graph, start: &str, options: Options) -> Result<Outcome, SearchError> {
    Search::new(graph, options).run(start)
}
