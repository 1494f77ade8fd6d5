use std::sync::Arc;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use crate::algorithm::{HopRouter, ShortestPath};
use crate::network::{Network, Path};


/// Cost charged in place of a logarithm or division that has no meaning
/// (reliability or bandwidth at or below zero).
pub const PENALTY: f64 = 100.0;
/// Resource cost of a link is this over its bandwidth.
pub const RESOURCE_SCALE: f64 = 1000.0;


#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Weights {
    pub delay: f64,
    pub reliability: f64,
    pub resource: f64,
}

impl Weights {
    pub fn new(delay: f64, reliability: f64, resource: f64) -> Self {
        Weights { delay, reliability, resource }
    }
    pub fn combine(&self, delay: f64, reliability_cost: f64, resource_cost: f64) -> f64 {
        self.delay * delay
            + self.reliability * reliability_cost
            + self.resource * resource_cost
    }
}

impl Default for Weights {
    fn default() -> Self {
        Weights::new(0.33, 0.33, 0.34)
    }
}

impl From<[f64; 3]> for Weights {
    fn from(w: [f64; 3]) -> Self {
        Weights::new(w[0], w[1], w[2])
    }
}


/// Weighted cost of a whole path plus the metrics it is made of.
/// An infinite `cost` marks an invalid path or no path at all.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Fitness {
    pub cost: f64,
    pub delay: f64,
    pub reliability_cost: f64,
    /// Probability the path delivers, `exp(-reliability_cost)`.
    pub reliability: f64,
    pub resource: f64,
}

impl Fitness {
    pub fn invalid() -> Self {
        Fitness {
            cost: f64::INFINITY,
            delay: f64::INFINITY,
            reliability_cost: f64::INFINITY,
            reliability: 0.0,
            resource: f64::INFINITY,
        }
    }
    pub fn trivial() -> Self {
        Fitness { cost: 0.0, delay: 0.0, reliability_cost: 0.0, reliability: 1.0, resource: 0.0 }
    }
    pub fn is_valid(&self) -> bool {
        self.cost.is_finite()
    }
}

pub fn reliability_cost(reliability: f64) -> f64 {
    if reliability > 0.0 { -reliability.ln() } else { PENALTY }
}

pub fn resource_cost(bandwidth: i64) -> f64 {
    if bandwidth > 0 { RESOURCE_SCALE / bandwidth as f64 } else { PENALTY }
}


/// Scores candidate paths over a read-only network.
pub struct CostModel {
    network: Arc<Network>,
    router: Arc<dyn ShortestPath + Send + Sync>,
}

impl CostModel {
    pub fn new(network: Network) -> Self {
        let network = Arc::new(network);
        let router = Arc::new(HopRouter::new(Arc::clone(&network)));
        CostModel { network, router }
    }
    pub fn with_router(network: Arc<Network>, router: Arc<dyn ShortestPath + Send + Sync>) -> Self {
        CostModel { network, router }
    }
    pub fn network(&self) -> &Network {
        &self.network
    }
    pub fn router(&self) -> &dyn ShortestPath {
        self.router.as_ref()
    }
    /// A one-node path costs nothing; an empty one, or one stepping over
    /// a missing edge, is invalid.
    pub fn evaluate(&self, path: &[usize], weights: &Weights) -> Fitness {
        match path.len() {
            0 => return Fitness::invalid(),
            1 => return Fitness::trivial(),
            _ => (),
        }
        let mut delay = 0.0;
        let mut rel_cost = 0.0;
        let mut res_cost = 0.0;

        for &id in &path[1..path.len() - 1] {
            let node = match self.network.node(id) {
                Some(node) => node,
                None => return Fitness::invalid(),
            };
            delay += node.processing_delay;
            rel_cost += reliability_cost(node.reliability);
        }
        for (u, v) in path.iter().cloned().tuple_windows() {
            let edge = match self.network.edge(u, v) {
                Some(edge) => edge,
                None => return Fitness::invalid(),
            };
            delay += edge.link_delay;
            rel_cost += reliability_cost(edge.reliability);
            res_cost += resource_cost(edge.bandwidth);
        }

        Fitness {
            cost: weights.combine(delay, rel_cost, res_cost),
            delay,
            reliability_cost: rel_cost,
            reliability: (-rel_cost).exp(),
            resource: res_cost,
        }
    }
    /// Both ends exist and the router knows a way between them.
    pub fn connects(&self, src: usize, dst: usize) -> bool {
        self.network.contains(src) && self.network.contains(dst)
            && self.router.shortest_path(src, dst).is_some()
    }
    /// Up to `limit` simple paths, fewest hops first; empty when disconnected.
    pub fn k_shortest_paths(&self, src: usize, dst: usize, limit: usize) -> Vec<Path> {
        self.router.k_shortest_paths(src, dst, limit)
    }
}
