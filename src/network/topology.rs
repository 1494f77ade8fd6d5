use hashbrown::HashMap;
use crate::utils::error::Error;
use super::{DEFAULT_BANDWIDTH, DEFAULT_LINK_DELAY, DEFAULT_LINK_RELIABILITY};
use super::{DEFAULT_NODE_RELIABILITY, DEFAULT_PROCESSING_DELAY};

/// Undirected edges are stored once, under the ordered pair of their ends.
pub type EdgeKey = (usize, usize);

pub fn edge_key(u: usize, v: usize) -> EdgeKey {
    if u <= v { (u, v) } else { (v, u) }
}

#[derive(Clone, Debug)]
pub struct Node {
    pub processing_delay: f64,
    pub reliability: f64,
    neighbors: Vec<usize>,
}

#[derive(Clone, Debug)]
pub struct Edge {
    pub bandwidth: i64,
    pub link_delay: f64,
    pub reliability: f64,
}

impl Node {
    pub fn new(processing_delay: f64, reliability: f64) -> Self {
        Node { processing_delay, reliability, neighbors: vec![] }
    }
}

impl Default for Node {
    fn default() -> Self {
        Node::new(DEFAULT_PROCESSING_DELAY, DEFAULT_NODE_RELIABILITY)
    }
}

impl Edge {
    pub fn new(bandwidth: i64, link_delay: f64, reliability: f64) -> Self {
        Edge { bandwidth, link_delay, reliability }
    }
}

impl Default for Edge {
    fn default() -> Self {
        Edge::new(DEFAULT_BANDWIDTH, DEFAULT_LINK_DELAY, DEFAULT_LINK_RELIABILITY)
    }
}

/// Read-only once built; every engine sharing it only queries.
#[derive(Clone, Debug, Default)]
pub struct Network {
    nodes: HashMap<usize, Node>,
    edges: HashMap<EdgeKey, Edge>,
}

impl Network {
    pub fn new() -> Self {
        Self { ..Default::default() }
    }
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
    pub fn node(&self, id: usize) -> Option<&Node> {
        self.nodes.get(&id)
    }
    pub fn contains(&self, id: usize) -> bool {
        self.nodes.contains_key(&id)
    }
    pub fn edge(&self, u: usize, v: usize) -> Option<&Edge> {
        self.edges.get(&edge_key(u, v))
    }
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.edges.contains_key(&edge_key(u, v))
    }
    /// Edge keys in no particular order.
    pub fn edge_keys(&self) -> impl Iterator<Item=EdgeKey> + '_ {
        self.edges.keys().cloned()
    }
    /// Neighbors in the order their edges were added; unknown ids have none.
    pub fn neighbors(&self, id: usize) -> impl Iterator<Item=usize> + '_ {
        self.nodes.get(&id)
            .into_iter()
            .flat_map(|node| node.neighbors.iter().cloned())
    }
    /// Inserts a node, or overwrites the attributes of an existing one.
    pub fn add_node(&mut self, id: usize, processing_delay: f64, reliability: f64) {
        match self.nodes.get_mut(&id) {
            Some(node) => {
                node.processing_delay = processing_delay;
                node.reliability = reliability;
            }
            None => {
                self.nodes.insert(id, Node::new(processing_delay, reliability));
            }
        }
    }
    /// Adds an undirected edge. Missing end nodes are created with defaults,
    /// and a repeated edge only has its attributes replaced.
    pub fn add_edge(&mut self, ends: (usize, usize), edge: Edge) -> Result<(), Error> {
        let (u, v) = ends;
        if u == v {
            return Err(Error::SelfLoop(ends));
        }
        for &id in [u, v].iter() {
            if !self.nodes.contains_key(&id) {
                self.nodes.insert(id, Node::default());
            }
        }
        if self.edges.insert(edge_key(u, v), edge).is_none() {
            if let Some(node) = self.nodes.get_mut(&u) {
                node.neighbors.push(v);
            }
            if let Some(node) = self.nodes.get_mut(&v) {
                node.neighbors.push(u);
            }
        }
        Ok(())
    }
    pub fn add_edges(&mut self, edges: Vec<((usize, usize), Edge)>) -> Result<(), Error> {
        for (ends, edge) in edges {
            self.add_edge(ends, edge)?;
        }
        Ok(())
    }
}
