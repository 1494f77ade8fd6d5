use hashbrown::HashMap;
use itertools::Itertools;
use crate::component::Fitness;
use crate::network::{edge_key, EdgeKey, Network, Path};


#[derive(Clone, Debug)]
pub struct Ant {
    pub path: Path,
    pub fitness: Fitness,
}

impl Ant {
    pub fn new(path: Path, fitness: Fitness) -> Self {
        Ant { path, fitness }
    }
}

/// Pheromone kept apart from the topology, keyed by edge.
#[derive(Clone, Debug)]
pub struct Pheromone {
    trail: HashMap<EdgeKey, f64>,
    pub tao0: f64,
    pub rho: f64,
    pub min_ph: f64,
}

impl Pheromone {
    pub fn new(network: &Network, tao0: f64, rho: f64, min_ph: f64) -> Self {
        debug_assert!(tao0 > 0.0);
        let trail = network.edge_keys()
            .map(|key| (key, tao0))
            .collect();
        Pheromone { trail, tao0, rho, min_ph }
    }
    pub fn get(&self, u: usize, v: usize) -> f64 {
        self.trail.get(&edge_key(u, v))
            .cloned()
            .unwrap_or(self.tao0)
    }
    pub fn min(&self) -> f64 {
        self.trail.values().cloned().fold(f64::INFINITY, f64::min)
    }
    pub fn evaporate(&mut self) {
        debug_assert!(self.rho < 1.0);
        let (rho, min_ph) = (self.rho, self.min_ph);
        for pheromone in self.trail.values_mut() {
            *pheromone = f64::max((1.0 - rho) * *pheromone, min_ph);
        }
    }
    /// Deposits `q / cost` on every edge of the ant's path. Ants without
    /// a finite positive cost leave nothing behind.
    pub fn deposit(&mut self, ant: &Ant, q: f64) {
        let cost = ant.fitness.cost;
        if !(cost > 0.0 && cost.is_finite()) { return }
        let amount = q / cost;
        for (u, v) in ant.path.iter().cloned().tuple_windows() {
            *self.trail.entry(edge_key(u, v)).or_insert(self.tao0) += amount;
        }
    }
}
