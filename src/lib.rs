//! Bounded backtracking search for the best total pressure release in a
//! network of valves.
//!
//! The network is parsed once into a [Graph]. [search] then explores the
//! moves of a single agent and [search_pair] the joint moves of two agents
//! sharing one clock, both memoizing per state and pruning branches which
//! cannot beat the best total found so far.
//!
//! ```
//! let text = "\
//! Valve A has flow rate=0; tunnel leads to valve B
//! Valve B has flow rate=13; tunnel leads to valve C
//! Valve C has flow rate=0; tunnel leads to valve B
//! ";
//!
//! assert_eq!(valves::solve(text, "A", 4)?, 26);
//! # Ok::<_, valves::Error>(())
//! ```

mod bound;
mod duo;
mod error;
mod graph;
mod opened;
mod options;
mod search;

#[cfg(test)]
mod testing;

pub use self::bound::PruneBound;
pub use self::duo::{search_pair, Duo};
pub use self::error::{Error, ParseError, SearchError};
pub use self::graph::{Graph, Node, NodeId};
pub use self::opened::Opened;
pub use self::options::{Bound, Options};
pub use self::search::{search, Outcome, Search, Stats};

/// Parse `text` and find the best total a single agent starting at `start`
/// can release within `horizon` minutes.
pub fn solve(text: &str, start: &str, horizon: u32) -> Result<u64, Error> {
    let graph = Graph::parse(text)?;
    Ok(search(&graph, start, Options::new(horizon))?.best)
}

/// Parse `text` and find the best total two agents starting together at
/// `start` can release within `horizon` minutes.
pub fn solve_pair(text: &str, start: &str, horizon: u32) -> Result<u64, Error> {
    let graph = Graph::parse(text)?;
    Ok(search_pair(&graph, start, Options::new(horizon))?.best)
}
