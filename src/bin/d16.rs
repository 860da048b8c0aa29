use core::fmt;
use std::path::PathBuf;
use std::process::ExitCode;

use lib::cli::{Opts, Output};
use lib::prelude::*;
use serde::Serialize;
use valves::{Graph, Options, Outcome, Stats};

const DEFAULT_INPUT: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/inputs/d16.txt");

/// Options specific to this binary.
struct Params {
    start: String,
    horizon: u32,
    pair_horizon: u32,
}

impl Params {
    fn parse(args: &[String]) -> Result<Self> {
        let mut params = Self {
            start: String::from("AA"),
            horizon: 30,
            pair_horizon: 26,
        };

        let mut it = args.iter();

        while let Some(arg) = it.next() {
            match arg.as_str() {
                "--start" => {
                    let start = it.next().context("missing argument to `--start`")?;
                    params.start = start.clone();
                }
                "--horizon" => {
                    let horizon = it.next().context("missing argument to `--horizon`")?;
                    params.horizon = horizon.parse().context("bad argument to `--horizon`")?;
                }
                "--pair-horizon" => {
                    let horizon = it.next().context("missing argument to `--pair-horizon`")?;
                    params.pair_horizon = horizon
                        .parse()
                        .context("bad argument to `--pair-horizon`")?;
                }
                other => {
                    bail!("unsupported argument: {other}");
                }
            }
        }

        Ok(params)
    }
}

#[derive(Serialize)]
struct Answer {
    agents: u32,
    horizon: u32,
    best: u64,
    stats: Stats,
}

impl Answer {
    fn new(agents: u32, horizon: u32, outcome: Outcome) -> Self {
        Self {
            agents,
            horizon,
            best: outcome.best,
            stats: outcome.stats,
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "The maximum pressure release is: {}", self.best)
    }
}

fn run<O>(opts: &Opts, o: &mut Output<O>) -> Result<()>
where
    O: std::io::Write,
{
    let params = Params::parse(&opts.args)?;

    let path = opts
        .input
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT));

    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("reading {}", path.display()))?;
    let graph = Graph::parse(&text).with_context(|| path.display().to_string())?;

    log::debug!("loaded {} valves from {}", graph.len(), path.display());

    let one = valves::search(&graph, &params.start, Options::new(params.horizon))?;
    o.report(&Answer::new(1, params.horizon, one))?;

    let two = valves::search_pair(&graph, &params.start, Options::new(params.pair_horizon))?;
    o.report(&Answer::new(2, params.pair_horizon, two))?;

    if let Some(expect) = &opts.expect {
        expect.check(one.best, two.best)?;
        o.info(format_args!("answers match {expect}"))?;
    }

    Ok(())
}

fn main() -> ExitCode {
    let opts = match Opts::parse() {
        Ok(opts) => opts,
        Err(error) => {
            eprintln!("error: {error:#}");
            return ExitCode::FAILURE;
        }
    };

    let stdout = std::io::stdout();
    let mut o = Output::new(stdout.lock(), opts.output_kind());

    if let Err(error) = run(&opts, &mut o) {
        if let Err(e) = o.error(format_args!("{error:#}")) {
            eprintln!("error: {error:#}: {e}");
        }

        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
