//! CLI helpers.

mod expect;
mod output;
mod stdout_logger;

#[cfg(test)]
mod tests;

use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};

pub use self::expect::Expect;
pub use self::output::{Output, OutputKind};

static STDOUT_LOGGER: stdout_logger::StdoutLogger = stdout_logger::StdoutLogger;

/// Input options shared by all binaries.
#[derive(Debug, Default)]
pub struct Opts {
    /// Run in verbose mode.
    pub verbose: bool,
    /// Output JSON lines instead of text.
    pub json: bool,
    /// Override the input path.
    pub input: Option<PathBuf>,
    /// Answers to check the run against.
    pub expect: Option<Expect>,
    /// Arguments which are left for the binary to interpret.
    pub args: Vec<String>,
}

impl Opts {
    /// Parse CLI options from the environment and install the logger.
    pub fn parse() -> Result<Self> {
        let opts = Self::parse_from(std::env::args_os().skip(1))?;

        if !opts.json {
            let level = if opts.verbose {
                log::LevelFilter::Debug
            } else {
                log::LevelFilter::Info
            };

            log::set_max_level(level);
            log::set_logger(&STDOUT_LOGGER)
                .map_err(|error| anyhow!("failed to set log: {error}"))?;
        }

        Ok(opts)
    }

    /// Parse CLI options from the given arguments.
    pub fn parse_from<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut opts = Self::default();
        let mut it = args.into_iter();

        while let Some(arg) = it.next() {
            let Ok(arg) = arg.into_string() else {
                bail!("non-utf8 argument");
            };

            match arg.as_str() {
                "--verbose" | "-V" => {
                    opts.verbose = true;
                }
                "--json" => {
                    opts.json = true;
                }
                "--input" => {
                    let input = it.next().context("missing argument to `--input`")?;
                    opts.input = Some(PathBuf::from(input));
                }
                "--expect" => {
                    let expect = it.next().context("missing argument to `--expect`")?;
                    let Ok(expect) = expect.into_string() else {
                        bail!("non-utf8 argument to `--expect`");
                    };
                    opts.expect = Some(Expect::parse(&expect)?);
                }
                "--" => {
                    break;
                }
                _ => {
                    opts.args.push(arg);
                }
            }
        }

        for arg in it {
            let Ok(arg) = arg.into_string() else {
                bail!("non-utf8 argument");
            };

            opts.args.push(arg);
        }

        Ok(opts)
    }

    /// The kind of output requested.
    pub fn output_kind(&self) -> OutputKind {
        if self.json {
            OutputKind::Json
        } else {
            OutputKind::Normal
        }
    }
}
