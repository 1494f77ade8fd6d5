use std::sync::Arc;
use ordered_float::OrderedFloat;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use tracing::{debug, info, warn};
use crate::component::{CostModel, Fitness, Solution, Weights};
use crate::network::Path;
use crate::utils::config::GaParams;
use super::algorithm::{Algorithm, Halt};
use super::base::fan_out;
use super::base::genes::{crossover, mutate, random_walk, tournament};


pub struct GA {
    model: Arc<CostModel>,
    weights: Weights,
    params: GaParams,
    rng: ChaChaRng,
}


impl GA {
    pub fn new(model: Arc<CostModel>, weights: Weights, params: GaParams, seed: u64) -> Self {
        let rng = ChaChaRng::seed_from_u64(seed);
        GA { model, weights, params, rng }
    }
    /// Random walks until the population is full or the attempt budget is
    /// spent; leftover slots cycle through the k shortest paths.
    pub fn seed_population(&mut self, src: usize, dst: usize) -> Vec<Path> {
        let model = Arc::clone(&self.model);
        let size = self.params.population;
        let budget = size.saturating_mul(self.params.attempt_factor);
        let mut population = Vec::with_capacity(size);
        let mut attempts = 0;
        while population.len() < size && attempts < budget {
            attempts += 1;
            let walk = random_walk(model.network(), src, dst, self.params.walk_steps, &mut self.rng);
            if let Some(path) = walk {
                population.push(path);
            }
        }
        if population.len() < size {
            let missing = size - population.len();
            warn!(missing, attempts, "ga: random walks fell short, seeding from shortest paths");
            let fallback = model.k_shortest_paths(src, dst, size);
            population.extend(fallback.iter().cloned().cycle().take(missing));
        }
        population
    }
    fn evaluate(&self, population: &[Path]) -> Vec<Fitness> {
        let model = &self.model;
        let weights = &self.weights;
        fan_out(population, |path| model.evaluate(path, weights))
    }
    /// Next generation: the elite `pool[0]` unchanged, then tournament
    /// offspring until the population is full.
    fn breed(&mut self, pool: &[(Path, f64)], dst: usize) -> Vec<Path> {
        let model = Arc::clone(&self.model);
        let size = self.params.population;
        let mut next = Vec::with_capacity(size);
        next.push(pool[0].0.clone());
        while next.len() < size {
            let p1 = tournament(pool, self.params.tournament, &mut self.rng);
            let p2 = tournament(pool, self.params.tournament, &mut self.rng);
            let child = crossover(p1, p2, &mut self.rng);
            let child = mutate(child, dst, self.params.mutation, model.router(), &mut self.rng);
            next.push(child);
        }
        next
    }
}

impl Algorithm for GA {
    fn name(&self) -> &'static str {
        "ga"
    }
    fn search(&mut self, src: usize, dst: usize, halt: &Halt) -> Solution {
        let mut solution = Solution::new(self.name());
        if !self.model.connects(src, dst) {
            warn!(src, dst, "ga: destination unreachable from source");
            return solution;
        }
        let mut population = self.seed_population(src, dst);
        for generation in 0..self.params.generations {
            if halt.is_raised() {
                solution.cancelled = true;
                break;
            }
            let fitness = self.evaluate(&population);
            let mut ranked: Vec<(Path, Fitness)> = population.into_iter()
                .zip(fitness.into_iter())
                .filter(|(_, fitness)| fitness.is_valid())
                .collect();
            if ranked.is_empty() {
                warn!(generation, "ga: no valid individual left, reseeding");
                population = self.seed_population(src, dst);
                solution.record();
                continue;
            }
            ranked.sort_by_key(|(_, fitness)| OrderedFloat(fitness.cost));
            solution.offer(&ranked[0].0, ranked[0].1);

            let pool: Vec<(Path, f64)> = ranked.into_iter()
                .map(|(path, fitness)| (path, fitness.cost))
                .collect();
            population = self.breed(&pool, dst);
            solution.record();
            debug!(generation, valid = pool.len(), best = solution.cost(), "ga generation");
        }
        info!(generations = solution.iterations, best = solution.cost(),
              route = %solution.route(), "ga finished");
        solution
    }
}
