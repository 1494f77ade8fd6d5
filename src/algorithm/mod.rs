mod base;
mod aco;
mod ga;
mod algorithm;

pub use algorithm::{Algorithm, AlgorithmEnum, Halt};
pub use aco::ACO;
pub use ga::GA;
pub use base::ants::{Ant, Pheromone};
pub use base::genes::{crossover, mutate, prune_loops, random_walk, tournament};
pub use base::roulette::Roulette;
pub use base::router::{HopRouter, ShortestPath};
