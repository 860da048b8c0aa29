use lib::input::{ErrorKind, IStrError};
use lib::LineCol;
use thiserror::Error;

use crate::graph::NodeId;

/// Errors raised while parsing a valve network.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ParseError {
    #[error("{pos}: {kind}")]
    Input { pos: LineCol, kind: ErrorKind },
    #[error("{pos}: valve `{name}` leads to unknown valve `{neighbor}`")]
    UnknownNeighbor {
        pos: LineCol,
        name: Box<str>,
        neighbor: Box<str>,
    },
    #[error("{pos}: valve `{name}` is defined more than once")]
    DuplicateNode { pos: LineCol, name: Box<str> },
    #[error("{count} valves defined, at most {max} are supported")]
    TooManyNodes { count: usize, max: usize },
    #[error("{count} valves have a positive flow rate, at most {max} are supported")]
    TooManyWeighted { count: usize, max: usize },
    #[error("no valves defined")]
    Empty,
}

impl ParseError {
    /// Translate a tokenizer error into a positioned parse error.
    pub(crate) fn input(text: &str, error: IStrError) -> Self {
        Self::Input {
            pos: lib::pos_from(text.as_bytes(), error.span()),
            kind: error.into_kind(),
        }
    }
}

/// Errors raised during a search.
///
/// All but [SearchError::UnknownStart] and [SearchError::BudgetExhausted]
/// indicate a broken invariant rather than bad input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SearchError {
    #[error("unknown start valve `{0}`")]
    UnknownStart(Box<str>),
    #[error("valve {0} is not part of the graph")]
    UnknownNode(NodeId),
    #[error("no prune limit for {time} minutes remaining, limits cover up to {max}")]
    MissingLimit { time: u32, max: usize },
    #[error("search budget of {steps} steps exhausted")]
    BudgetExhausted { steps: u64 },
}

/// Any error raised by the convenience entrypoints.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Search(#[from] SearchError),
}
