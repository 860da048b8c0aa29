//! Graphs shared by tests.

/// The well-known ten valve example.
pub(crate) const EXAMPLE: &str = "\
Valve AA has flow rate=0; tunnels lead to valves DD, II, BB
Valve BB has flow rate=13; tunnels lead to valves CC, AA
Valve CC has flow rate=2; tunnels lead to valves DD, BB
Valve DD has flow rate=20; tunnels lead to valves CC, AA, EE
Valve EE has flow rate=3; tunnels lead to valves FF, DD
Valve FF has flow rate=0; tunnels lead to valves EE, GG
Valve GG has flow rate=0; tunnels lead to valves FF, HH
Valve HH has flow rate=22; tunnel leads to valve GG
Valve II has flow rate=0; tunnels lead to valves AA, JJ
Valve JJ has flow rate=21; tunnel leads to valve II
";

/// A small deterministic graph with `n` nodes named `N0` and onwards.
///
/// `seed` varies both weights and edges.
pub(crate) fn synthetic(n: usize, seed: usize) -> String {
    let mut text = String::new();

    for i in 0..n {
        let weight = (i * 7 + seed * 3 + n) % 11;
        let weight = if weight < 4 { 0 } else { weight };

        let mut edges = Vec::new();

        for to in [(i + 1) % n, (i * 3 + seed) % n, (i + seed + 2) % n] {
            if to != i && !edges.contains(&to) {
                edges.push(to);
            }
        }

        let edges = edges
            .iter()
            .map(|to| format!("N{to}"))
            .collect::<Vec<_>>()
            .join(", ");

        text.push_str(&format!(
            "Valve N{i} has flow rate={weight}; tunnels lead to valves {edges}\n"
        ));
    }

    text
}
