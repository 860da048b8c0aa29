//! Support library for the solvers: input tokenizing, source positions and
//! command line plumbing.

pub mod cli;
pub mod input;
mod pos;

pub use self::pos::{pos_from, LineCol};

pub mod prelude {
    //! Helper prelude with useful imports.
    pub use crate::input::{FromInput, IStr, IStrError, Sep, Skip, Split, W};
    pub use crate::LineCol;
    pub use anyhow::{anyhow, bail, Context, Result};
}
