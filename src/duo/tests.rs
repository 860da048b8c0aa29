use super::{search_pair, Duo, PairKey};
use crate::error::SearchError;
use crate::graph::Graph;
use crate::opened::Opened;
use crate::options::Options;
use crate::search::search;
use crate::testing::{synthetic, EXAMPLE};

#[test]
fn test_example() {
    let graph = Graph::parse(EXAMPLE).unwrap();
    let outcome = search_pair(&graph, "AA", Options::new(26)).unwrap();
    assert_eq!(outcome.best, 1707);
    assert!(outcome.stats.pruned > 0);
}

#[test]
fn test_canonical_key() {
    let graph = Graph::parse(EXAMPLE).unwrap();
    let x = graph.lookup("BB").unwrap();
    let y = graph.lookup("JJ").unwrap();
    let opened = Opened::EMPTY.with(2).with(0);

    let key = PairKey::new(y, x, 10, opened);
    assert_eq!(key, PairKey::new(x, y, 10, opened));
    assert_eq!(key.canonical(), key);
    assert_eq!(key.a, x);
    assert_eq!(key.b, y);

    let same = PairKey::new(x, x, 10, opened);
    assert_eq!(same.canonical(), same);

    assert_ne!(key, PairKey::new(x, y, 9, opened));
    assert_ne!(key, PairKey::new(x, y, 10, opened.with(1)));
}

#[test]
fn test_single_valve_not_counted_twice() {
    let graph = Graph::parse(
        "Valve A has flow rate=0; tunnel leads to valve B\n\
         Valve B has flow rate=13; tunnel leads to valve A\n",
    )
    .unwrap();

    for horizon in 0..=8 {
        let one = search(&graph, "A", Options::new(horizon)).unwrap().best;
        let two = search_pair(&graph, "A", Options::new(horizon)).unwrap().best;
        assert_eq!(one, two, "horizon={horizon}");
    }

    assert_eq!(search_pair(&graph, "A", Options::new(5)).unwrap().best, 39);
}

#[test]
fn test_both_open_at_once() {
    let graph = Graph::parse(
        "Valve A has flow rate=0; tunnels lead to valves B, C\n\
         Valve B has flow rate=10; tunnel leads to valve A\n\
         Valve C has flow rate=20; tunnel leads to valve A\n",
    )
    .unwrap();

    assert_eq!(search(&graph, "A", Options::new(3)).unwrap().best, 20);
    assert_eq!(search_pair(&graph, "A", Options::new(3)).unwrap().best, 30);
}

#[test]
fn test_short_horizon_skips_lookup() {
    let graph = Graph::parse(EXAMPLE).unwrap();

    for horizon in [0, 1] {
        let outcome = search_pair(&graph, "missing", Options::new(horizon)).unwrap();
        assert_eq!(outcome.best, 0);
        assert_eq!(outcome.stats.visited, 0);
    }

    assert_eq!(
        Duo::new(&graph, Options::new(26)).run("missing"),
        Err(SearchError::UnknownStart("missing".into()))
    );
}

#[test]
fn test_pruned_matches_unpruned() {
    for n in 2..=6 {
        for seed in 0..3 {
            let graph = Graph::parse(&synthetic(n, seed)).unwrap();

            for horizon in 0..=8 {
                let full = search_pair(&graph, "N0", Options::new(horizon).with_pruning(false))
                    .unwrap()
                    .best;
                let pruned = search_pair(&graph, "N0", Options::new(horizon))
                    .unwrap()
                    .best;
                let single = search(&graph, "N0", Options::new(horizon)).unwrap().best;

                assert_eq!(pruned, full, "n={n}, seed={seed}, horizon={horizon}");
                assert!(pruned >= single, "n={n}, seed={seed}, horizon={horizon}");
            }
        }
    }
}

#[test]
fn test_pruning_reduces_work() {
    let graph = Graph::parse(EXAMPLE).unwrap();
    let pruned = search_pair(&graph, "AA", Options::new(26)).unwrap();
    let full = search_pair(&graph, "AA", Options::new(26).with_pruning(false)).unwrap();

    assert_eq!(pruned.best, 1707);
    assert_eq!(full.best, 1707);
    assert_eq!(full.stats.pruned, 0);
    assert!(pruned.stats.cache_hits > 0);
    assert!(
        pruned.stats.visited < full.stats.visited,
        "{} >= {}",
        pruned.stats.visited,
        full.stats.visited
    );
}

#[test]
fn test_budget() {
    let graph = Graph::parse(EXAMPLE).unwrap();
    let result = search_pair(&graph, "AA", Options::new(26).with_budget(100));
    assert_eq!(result, Err(SearchError::BudgetExhausted { steps: 100 }));
}
