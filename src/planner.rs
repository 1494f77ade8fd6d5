use std::fmt::{self, Write};
use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::time::{Duration, Instant};
use tracing::{info, warn};
use crate::algorithm::{Algorithm, AlgorithmEnum, Halt, ACO, GA};
use crate::component::{CostModel, Solution};
use crate::network::Network;
use crate::utils::config::Config;
use crate::utils::error::Error;


pub struct Planner {
    pub algorithms: Vec<AlgorithmEnum>,
    pub model: Arc<CostModel>,
    pub config: Config,
    stop: Arc<AtomicBool>,
}


impl Planner {
    pub fn new(network: Network, config: Config) -> Result<Self, Error> {
        config.validate()?;
        let model = Arc::new(CostModel::new(network));
        let weights = config.weights();
        let aco = || -> AlgorithmEnum {
            ACO::new(Arc::clone(&model), weights, config.aco.clone(), config.seed).into()
        };
        let ga = || -> AlgorithmEnum {
            GA::new(Arc::clone(&model), weights, config.ga.clone(), config.seed).into()
        };
        let algorithms = match config.algorithm.as_str() {
            "aco" => vec![aco()],
            "ga"  => vec![ga()],
            "all" => vec![aco(), ga()],
            other => return Err(Error::UnknownAlgorithm(other.to_owned())),
        };
        let stop = Arc::new(AtomicBool::new(false));
        Ok(Planner { algorithms, model, config, stop })
    }
    /// Raising the returned flag stops every running engine at its next
    /// iteration boundary.
    pub fn stop_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.stop)
    }
    /// Runs each configured engine in turn against the same endpoints.
    /// Every engine gets its own `timeout` budget, measured in microseconds.
    pub fn plan(&mut self) -> Vec<(Solution, u128)> {
        let (src, dst) = (self.config.source, self.config.destination);
        let network = self.model.network();
        for &(role, id) in [("source", src), ("destination", dst)].iter() {
            if !network.contains(id) {
                warn!(role, id, "endpoint is not part of the network");
            }
        }
        let timeout = self.config.timeout;
        let stop = &self.stop;
        self.algorithms.iter_mut()
            .map(|algorithm| {
                let start = Instant::now();
                let halt = match timeout {
                    0 => Halt::never(),
                    micros => Halt::at(start + Duration::from_micros(micros)),
                }.with_flag(Arc::clone(stop));
                let solution = algorithm.search(src, dst, &halt);
                let elapsed = start.elapsed().as_micros();
                info!(algorithm = algorithm.name(), elapsed = elapsed as u64, "computing time in μs");
                (solution, elapsed)
            })
            .collect()
    }
    pub fn show_results(&self, results: &[(Solution, u128)]) -> String {
        let mut msg = String::new();
        match self.render(results, &mut msg) {
            Ok(()) => msg,
            Err(_) => String::new(),
        }
    }
    fn render(&self, results: &[(Solution, u128)], msg: &mut String) -> fmt::Result {
        writeln!(msg, "{}: route from {} to {}",
                 self.config.name, self.config.source, self.config.destination)?;
        for (solution, elapsed) in results {
            let outcome = if solution.is_found() { "found" } else { "failed" };
            let cancelled = if solution.cancelled { " (stopped early)" } else { "" };
            writeln!(msg, "- {} {} after {} iterations in {} μs{}",
                     solution.algorithm, outcome, solution.iterations, elapsed, cancelled)?;
            writeln!(msg, "  route {}", solution.route())?;
            if solution.is_found() {
                let fitness = &solution.fitness;
                writeln!(msg, "  cost {:.4} with delay {:.2}, reliability {:.4} and resource {:.2}",
                         fitness.cost, fitness.delay, fitness.reliability, fitness.resource)?;
            }
        }
        Ok(())
    }
}
