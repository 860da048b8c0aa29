use core::fmt;

use anyhow::{bail, Context, Result};

use crate::input::{IStr, Split};

/// Answers a run is expected to produce for both parts, given on the command
/// line as `<a>,<b>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expect(pub u64, pub u64);

impl Expect {
    /// Parse an expectation like `1651,1707`.
    pub fn parse(text: &str) -> Result<Self> {
        let mut input = IStr::new(text);

        let Split((a, b)) = input
            .next::<Split<',', (u64, u64)>>()
            .with_context(|| format!("bad expectation `{text}`"))?;

        Ok(Self(a, b))
    }

    /// Compare actual answers against the expected ones.
    pub fn check(&self, a: u64, b: u64) -> Result<()> {
        let value = Self(a, b);

        if value != *self {
            bail!("{value} (value) != {self} (expected)");
        }

        Ok(())
    }
}

impl fmt::Display for Expect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.0, self.1)
    }
}
