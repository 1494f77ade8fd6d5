use std::sync::Arc;
use hashbrown::HashSet;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;
use tracing::{debug, info, warn};
use crate::component::{reliability_cost, resource_cost, CostModel, Solution, Weights};
use crate::network::Path;
use crate::utils::config::AcoParams;
use super::algorithm::{Algorithm, Halt};
use super::base::ants::{Ant, Pheromone};
use super::base::fan_out;
use super::base::roulette::Roulette;

/// Visibility granted to a hop whose local cost is not positive.
const MIN_VISIBILITY: f64 = 0.0001;


pub struct ACO {
    model: Arc<CostModel>,
    weights: Weights,
    params: AcoParams,
    pheromone: Pheromone,
    rng: ChaChaRng,
}


impl ACO {
    pub fn new(model: Arc<CostModel>, weights: Weights, params: AcoParams, seed: u64) -> Self {
        let pheromone = Pheromone::new(
            model.network(),
            params.initial_pheromone,
            params.evaporation,
            params.min_pheromone,
        );
        let rng = ChaChaRng::seed_from_u64(seed);
        ACO { model, weights, params, pheromone, rng }
    }
    pub fn pheromone(&self) -> &Pheromone {
        &self.pheromone
    }
    fn max_steps(&self) -> usize {
        self.params.max_steps
            .unwrap_or(2 * self.model.network().node_count())
    }
    /// Greedy one-hop desirability of moving from `u` onto `v`.
    pub fn visibility(&self, u: usize, v: usize) -> f64 {
        let network = self.model.network();
        let (edge, node) = match (network.edge(u, v), network.node(v)) {
            (Some(edge), Some(node)) => (edge, node),
            _ => return MIN_VISIBILITY,
        };
        let delay = edge.link_delay + node.processing_delay;
        let rel_cost = reliability_cost(edge.reliability * node.reliability);
        let res_cost = resource_cost(edge.bandwidth);
        let cost = self.weights.combine(delay, rel_cost, res_cost);
        if cost > 0.0 { 1.0 / cost } else { MIN_VISIBILITY }
    }
    fn attraction(&self, u: usize, v: usize) -> f64 {
        let tau = self.pheromone.get(u, v).powf(self.params.alpha);
        let eta = self.visibility(u, v).powf(self.params.beta);
        tau * eta
    }
    /// Walks one ant from `src`. `None` when it gets stuck or runs out of steps.
    pub fn construct<R: Rng + ?Sized>(&self, src: usize, dst: usize, rng: &mut R) -> Option<Path> {
        let network = self.model.network();
        let mut path = vec![src];
        let mut visited: HashSet<usize> = path.iter().cloned().collect();
        let mut cur = src;
        for _ in 0..self.max_steps() {
            if cur == dst { return Some(path) }
            let unvisited: Vec<usize> = network.neighbors(cur)
                .filter(|node| !visited.contains(node))
                .collect();
            if unvisited.is_empty() { return None }
            cur = self.select_next(cur, &unvisited, rng);
            visited.insert(cur);
            path.push(cur);
        }
        if cur == dst { Some(path) } else { None }
    }
    fn select_next<R: Rng + ?Sized>(&self, cur: usize, candidates: &[usize], rng: &mut R) -> usize {
        let weights = candidates.iter().map(|&next| self.attraction(cur, next));
        match Roulette::new(weights) {
            Some(roulette) => candidates[roulette.spin(rng)],
            // degenerate distribution, fall back to a uniform pick
            None => candidates[rng.gen_range(0..candidates.len())],
        }
    }
    /// One iteration: every ant walks against the same pheromone, then the
    /// trail evaporates and successful ants deposit. Returns those ants.
    pub fn step(&mut self, src: usize, dst: usize) -> Vec<Ant> {
        let seeds: Vec<u64> = (0..self.params.ants)
            .map(|_| self.rng.gen())
            .collect();
        let colony = &*self;
        let ants: Vec<Ant> = fan_out(&seeds, |&seed| {
            let mut rng = ChaChaRng::seed_from_u64(seed);
            colony.construct(src, dst, &mut rng).map(|path| {
                let fitness = colony.model.evaluate(&path, &colony.weights);
                Ant::new(path, fitness)
            })
        }).into_iter().flatten().collect();

        self.pheromone.evaporate();
        for ant in ants.iter() {
            self.pheromone.deposit(ant, self.params.q);
        }
        ants
    }
}

impl Algorithm for ACO {
    fn name(&self) -> &'static str {
        "aco"
    }
    fn search(&mut self, src: usize, dst: usize, halt: &Halt) -> Solution {
        let mut solution = Solution::new(self.name());
        if !self.model.connects(src, dst) {
            warn!(src, dst, "aco: destination unreachable from source");
            return solution;
        }
        for iteration in 0..self.params.iterations {
            if halt.is_raised() {
                solution.cancelled = true;
                break;
            }
            let ants = self.step(src, dst);
            for ant in ants.iter() {
                solution.offer(&ant.path, ant.fitness);
            }
            solution.record();
            debug!(iteration, succeeded = ants.len(), best = solution.cost(), "aco iteration");
        }
        info!(iterations = solution.iterations, best = solution.cost(),
              route = %solution.route(), "aco finished");
        solution
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicBool;
    use crate::network::{Edge, Network};

    fn diamond() -> Arc<CostModel> {
        let mut network = Network::new();
        network.add_edges(vec![
            ((0, 1), Edge::new(100, 5.0, 0.99)),
            ((1, 2), Edge::new(50, 10.0, 0.95)),
            ((1, 3), Edge::new(100, 2.0, 0.99)),
            ((3, 2), Edge::new(100, 3.0, 0.99)),
        ]).unwrap();
        network.add_node(99, 1.0, 0.99);
        Arc::new(CostModel::new(network))
    }
    fn fan() -> Arc<CostModel> {
        // three unequal branches from 0 to 4
        let mut network = Network::new();
        network.add_edges(vec![
            ((0, 1), Edge::new(1000, 1.0, 0.999)),
            ((0, 2), Edge::new(10, 50.0, 0.5)),
            ((0, 3), Edge::new(100, 10.0, 0.9)),
            ((1, 4), Edge::default()),
            ((2, 4), Edge::default()),
            ((3, 4), Edge::default()),
        ]).unwrap();
        Arc::new(CostModel::new(network))
    }
    fn params(ants: usize, iterations: usize) -> AcoParams {
        AcoParams { ants, iterations, ..AcoParams::default() }
    }
    fn weights() -> Weights {
        Weights::new(0.5, 0.3, 0.2)
    }

    #[test]
    fn it_prefers_the_cheaper_detour() {
        let mut aco = ACO::new(diamond(), weights(), params(10, 30), 42);
        let solution = aco.search(0, 2, &Halt::never());
        assert_eq!(solution.path, Some(vec![0, 1, 3, 2]));
        assert_eq!(solution.iterations, 30);
        let trail = aco.pheromone();
        assert!(trail.get(1, 3) > trail.min_ph);
        assert!(trail.get(3, 2) > trail.min_ph);
    }
    #[test]
    fn it_reports_unreachable_destination() {
        let mut aco = ACO::new(diamond(), weights(), params(5, 5), 42);
        let solution = aco.search(0, 99, &Halt::never());
        assert!(!solution.is_found());
        assert!(solution.fitness.cost.is_infinite());
        assert_eq!(solution.iterations, 0);
    }
    #[test]
    fn it_rejects_endpoints_outside_network() {
        let mut aco = ACO::new(diamond(), weights(), params(3, 2), 42);
        let solution = aco.search(500, 500, &Halt::never());
        assert!(!solution.is_found());
        assert!(solution.cost().is_infinite());
        assert!(!aco.search(0, 500, &Halt::never()).is_found());
    }
    #[test]
    fn it_returns_trivial_path_for_same_node() {
        let mut aco = ACO::new(diamond(), weights(), params(3, 2), 42);
        let solution = aco.search(1, 1, &Halt::never());
        assert_eq!(solution.path, Some(vec![1]));
        assert_eq!(solution.cost(), 0.0);
    }
    #[test]
    fn it_keeps_best_cost_non_increasing() {
        let mut aco = ACO::new(fan(), weights(), params(4, 25), 3);
        let solution = aco.search(0, 4, &Halt::never());
        assert_eq!(solution.history.len(), 25);
        assert!(solution.history.windows(2).all(|w| w[1] <= w[0]));
    }
    #[test]
    fn it_keeps_pheromone_above_floor() {
        let params = AcoParams { evaporation: 0.9, ..params(2, 40) };
        let mut aco = ACO::new(fan(), weights(), params, 5);
        for _ in 0..40 {
            aco.step(0, 4);
            assert!(aco.pheromone().min() >= 0.01);
        }
    }
    #[test]
    fn it_walks_uniformly_without_bias() {
        let params = AcoParams { alpha: 0.0, beta: 0.0, ..params(1, 1) };
        let aco = ACO::new(fan(), weights(), params, 0);
        let mut rng = ChaChaRng::seed_from_u64(17);
        let mut hits = [0usize; 3];
        let trials = 6000;
        for _ in 0..trials {
            let path = aco.construct(0, 4, &mut rng).unwrap();
            hits[path[1] - 1] += 1;
        }
        for &hit in hits.iter() {
            let ratio = hit as f64 / trials as f64;
            assert!((ratio - 1.0 / 3.0).abs() < 0.03, "ratio = {}", ratio);
        }
    }
    #[test]
    fn it_biases_towards_visible_hops() {
        let aco = ACO::new(fan(), weights(), params(1, 1), 0);
        let mut rng = ChaChaRng::seed_from_u64(17);
        let mut cheap = 0;
        for _ in 0..1000 {
            if aco.construct(0, 4, &mut rng).unwrap()[1] == 1 {
                cheap += 1;
            }
        }
        assert!(cheap > 600);
        assert!(aco.visibility(0, 1) > aco.visibility(0, 3));
        assert!(aco.visibility(0, 3) > aco.visibility(0, 2));
    }
    #[test]
    fn it_reproduces_runs_from_seed() {
        let mut first = ACO::new(fan(), weights(), params(3, 5), 11);
        let mut second = ACO::new(fan(), weights(), params(3, 5), 11);
        let a = first.search(0, 4, &Halt::never());
        let b = second.search(0, 4, &Halt::never());
        assert_eq!(a.path, b.path);
        assert_eq!(a.history, b.history);
    }
    #[test]
    fn it_stops_when_cancelled() {
        let flag = Arc::new(AtomicBool::new(true));
        let halt = Halt::never().with_flag(flag);
        let mut aco = ACO::new(diamond(), weights(), params(3, 10), 1);
        let solution = aco.search(0, 2, &halt);
        assert!(solution.cancelled);
        assert_eq!(solution.iterations, 0);
        assert!(!solution.is_found());
    }
}
