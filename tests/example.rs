use valves::{search, search_pair, Bound, Error, Graph, Options, ParseError, SearchError};

const EXAMPLE: &str = include_str!("../inputs/d16.txt");

#[test]
fn test_solve() {
    assert_eq!(valves::solve(EXAMPLE, "AA", 30).unwrap(), 1651);
    assert_eq!(valves::solve_pair(EXAMPLE, "AA", 26).unwrap(), 1707);
}

#[test]
fn test_reuse_graph() {
    let graph = Graph::parse(EXAMPLE).unwrap();

    let greedy = search(&graph, "AA", Options::new(30).with_bound(Bound::Greedy)).unwrap();
    let uniform = search(&graph, "AA", Options::new(30)).unwrap();
    assert_eq!(greedy.best, uniform.best);

    let pair = search_pair(&graph, "AA", Options::new(26)).unwrap();
    assert_eq!(pair.best, 1707);
    assert!(pair.stats.visited > 0);
}

#[test]
fn test_errors() {
    let error = valves::solve("Valve AA has flow rate=1; tunnels lead to valves BB", "AA", 30)
        .unwrap_err();

    assert!(matches!(
        error,
        Error::Parse(ParseError::UnknownNeighbor { .. })
    ));
    assert_eq!(
        error.to_string(),
        "1:1-51: valve `AA` leads to unknown valve `BB`"
    );

    let error = valves::solve_pair(EXAMPLE, "ZZ", 26).unwrap_err();
    assert!(matches!(error, Error::Search(SearchError::UnknownStart(..))));
    assert_eq!(error.to_string(), "unknown start valve `ZZ`");
}

#[test]
fn test_expected_answers() {
    let expect = lib::cli::Expect::parse("1651,1707").unwrap();
    let one = valves::solve(EXAMPLE, "AA", 30).unwrap();
    let two = valves::solve_pair(EXAMPLE, "AA", 26).unwrap();
    assert!(expect.check(one, two).is_ok());
    assert!(expect.check(two, one).is_err());
}
