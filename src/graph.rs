use core::fmt;

use lib::input::{IStr, IStrError, Sep, Skip, Split, W};
use lib::LineCol;

use crate::error::ParseError;
use crate::opened::Opened;


/// Identifier of a node in a [Graph].
///
/// Identifiers are handed out in the lexicographic order of node names, so
/// comparing two identifiers compares the names they stand for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u16);

impl NodeId {
    #[inline]
    fn index(self) -> usize {
        usize::from(self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single valve.
#[derive(Debug)]
pub struct Node {
    name: Box<str>,
    weight: u32,
    edges: Vec<NodeId>,
    /// Bit in [Opened], only assigned if the weight is positive.
    valve: Option<u32>,
}

impl Node {
    /// The name of the node.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The value per minute of opening this node.
    #[inline]
    pub fn weight(&self) -> u32 {
        self.weight
    }

    /// Outgoing edges, in input order.
    #[inline]
    pub fn edges(&self) -> &[NodeId] {
        &self.edges
    }

    /// The bit this node occupies in an [Opened] set, if it can be opened at
    /// all.
    #[inline]
    pub fn valve(&self) -> Option<u32> {
        self.valve
    }

    /// Value of opening this node with `time` minutes remaining. It starts
    /// flowing the minute after.
    #[inline]
    pub(crate) fn gain(&self, time: u32) -> u64 {
        u64::from(self.weight) * u64::from(time.saturating_sub(1))
    }
}

/// An immutable network of valves.
#[derive(Debug)]
pub struct Graph {
    nodes: Vec<Node>,
}

/// A node as it appears in the input, before names are resolved.
struct Raw<'a> {
    name: &'a str,
    weight: u32,
    neighbors: Vec<&'a str>,
    pos: LineCol,
}

impl Graph {
    /// Parse a graph from lines of the form:
    ///
    /// ```text
    /// Valve AA has flow rate=0; tunnels lead to valves DD, II, BB
    /// ```
    ///
    /// Blank lines are ignored.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let mut input = IStr::new(text);
        let mut raw = Vec::new();

        while let Some(line) = input.next_line() {
            if line.is_blank() {
                continue;
            }

            let pos = lib::pos_from(text.as_bytes(), line.span());
            let node = parse_line(line, pos).map_err(|e| ParseError::input(text, e))?;
            raw.push(node);
        }

        if raw.is_empty() {
            return Err(ParseError::Empty);
        }

        if raw.len() > usize::from(u16::MAX) {
            return Err(ParseError::TooManyNodes {
                count: raw.len(),
                max: usize::from(u16::MAX),
            });
        }

        raw.sort_by(|a, b| a.name.cmp(b.name));

        if let Some(w) = raw.windows(2).find(|w| w[0].name == w[1].name) {
            return Err(ParseError::DuplicateNode {
                pos: w[1].pos,
                name: w[1].name.into(),
            });
        }

        let weighted = raw.iter().filter(|node| node.weight > 0).count();

        if weighted > Opened::CAPACITY {
            return Err(ParseError::TooManyWeighted {
                count: weighted,
                max: Opened::CAPACITY,
            });
        }

        let mut nodes = Vec::with_capacity(raw.len());
        let mut next_valve = 0u32;

        for node in &raw {
            let mut edges = Vec::with_capacity(node.neighbors.len());

            for &neighbor in &node.neighbors {
                let Ok(index) = raw.binary_search_by(|n| n.name.cmp(neighbor)) else {
                    return Err(ParseError::UnknownNeighbor {
                        pos: node.pos,
                        name: node.name.into(),
                        neighbor: neighbor.into(),
                    });
                };

                edges.push(id(index));
            }

            let valve = (node.weight > 0).then(|| {
                let bit = next_valve;
                next_valve += 1;
                bit
            });

            nodes.push(Node {
                name: node.name.into(),
                weight: node.weight,
                edges,
                valve,
            });
        }

        log::trace!("parsed {} valves, {weighted} with flow", nodes.len());
        Ok(Self { nodes })
    }

    /// Number of nodes in the graph.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Look up a node by name.
    pub fn lookup(&self, name: &str) -> Option<NodeId> {
        let index = self
            .nodes
            .binary_search_by(|n| n.name().cmp(name))
            .ok()?;
        Some(id(index))
    }

    /// Access a node.
    #[inline]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Iterate over all nodes and their identifiers in name order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().enumerate().map(|(i, n)| (id(i), n))
    }

    /// The largest weight of any node.
    pub fn max_weight(&self) -> u32 {
        self.nodes.iter().map(|n| n.weight).max().unwrap_or_default()
    }

    /// All positive weights, heaviest first.
    pub fn weights_descending(&self) -> Vec<u32> {
        let mut weights = self
            .nodes
            .iter()
            .map(|n| n.weight)
            .filter(|&w| w > 0)
            .collect::<Vec<_>>();

        weights.sort_unstable_by(|a, b| b.cmp(a));
        weights
    }
}

/// Identifiers are bounds checked against `u16` during parsing.
#[inline]
fn id(index: usize) -> NodeId {
    NodeId(index as u16)
}

fn parse_line(mut line: IStr<'_>, pos: LineCol) -> Result<Raw<'_>, IStrError> {
    let Split((mut head, mut tail)) = line.next::<Split<';', (IStr, IStr)>>()?;

    let [W(_), W(name)] = head.next::<[W<&str>; 2]>()?;
    let Split((_, weight)) = head.next::<Split<'=', (Skip, u32)>>()?;

    tail.skip_past("to")?;
    tail.eat_any(&["valve", "valves"])?;
    let Sep(neighbors) = tail.next::<Sep<',', W<&str>>>()?;

    Ok(Raw {
        name,
        weight,
        neighbors: neighbors.into_iter().map(|W(n)| n).collect(),
        pos,
    })
}
