use std::ffi::OsString;
use std::fmt;
use std::path::Path;

use serde::Serialize;

use super::{Expect, Opts, Output, OutputKind};

fn args(args: &[&str]) -> Vec<OsString> {
    args.iter().map(OsString::from).collect()
}

#[test]
fn test_parse_known_and_leftover() {
    let opts = Opts::parse_from(args(&[
        "--json", "--start", "AA", "--input", "d16.txt", "--", "--verbose",
    ]))
    .unwrap();

    assert!(opts.json);
    assert!(!opts.verbose);
    assert_eq!(opts.input.as_deref(), Some(Path::new("d16.txt")));
    assert_eq!(opts.args, ["--start", "AA", "--verbose"]);
    assert_eq!(opts.output_kind(), OutputKind::Json);
}

#[test]
fn test_parse_missing_input() {
    assert!(Opts::parse_from(args(&["--input"])).is_err());
}

#[test]
fn test_parse_expect() {
    let opts = Opts::parse_from(args(&["--expect", "1651,1707"])).unwrap();
    assert_eq!(opts.expect, Some(Expect(1651, 1707)));
    assert!(opts.args.is_empty());

    assert!(Opts::parse_from(args(&["--expect"])).is_err());
    assert!(Opts::parse_from(args(&["--expect", "1651"])).is_err());
    assert!(Opts::parse_from(args(&["--expect", "1651,x"])).is_err());
}

#[test]
fn test_expect_check() {
    let expect = Expect::parse("1651, 1707").unwrap();
    assert!(expect.check(1651, 1707).is_ok());

    let error = expect.check(1651, 1706).unwrap_err();
    assert_eq!(
        error.to_string(),
        "1651,1706 (value) != 1651,1707 (expected)"
    );
}

#[derive(Serialize)]
struct Answer {
    value: u32,
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "answer: {}", self.value)
    }
}

#[test]
fn test_output() {
    let mut out = Vec::new();
    let mut o = Output::new(&mut out, OutputKind::Normal);
    o.info("hello").unwrap();
    o.report(&Answer { value: 42 }).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "info: hello\nanswer: 42\n");

    let mut out = Vec::new();
    let mut o = Output::new(&mut out, OutputKind::Json);
    o.error("bad").unwrap();
    o.report(&Answer { value: 42 }).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert_eq!(
        text,
        "{\"type\":\"message\",\"data\":{\"kind\":\"error\",\"output\":\"bad\"}}\n\
         {\"type\":\"report\",\"data\":{\"value\":42}}\n"
    );
}
