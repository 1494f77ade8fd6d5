use serde::Serialize;
use crate::network::Path;
use super::Fitness;


/// Outcome of one search: the best path seen and how the run went.
#[derive(Clone, Debug, Serialize)]
pub struct Solution {
    pub algorithm: String,
    pub path: Option<Path>,
    pub fitness: Fitness,
    /// Best cost so far, recorded after each iteration or generation.
    pub history: Vec<f64>,
    pub iterations: usize,
    pub cancelled: bool,
}

impl Solution {
    pub fn new(algorithm: &str) -> Self {
        Solution {
            algorithm: algorithm.to_owned(),
            path: None,
            fitness: Fitness::invalid(),
            history: vec![],
            iterations: 0,
            cancelled: false,
        }
    }
    pub fn is_found(&self) -> bool {
        self.path.is_some() && self.fitness.is_valid()
    }
    pub fn cost(&self) -> f64 {
        self.fitness.cost
    }
    /// Keeps the candidate only if strictly cheaper, so the earliest of
    /// equally good paths wins.
    pub fn offer(&mut self, path: &[usize], fitness: Fitness) -> bool {
        if fitness.cost < self.fitness.cost {
            self.path = Some(path.to_vec());
            self.fitness = fitness;
            true
        } else {
            false
        }
    }
    /// Closes an iteration: bumps the counter and logs the running best.
    pub fn record(&mut self) {
        self.iterations += 1;
        self.history.push(self.fitness.cost);
    }
    pub fn route(&self) -> String {
        match &self.path {
            Some(path) => path.iter()
                .map(|node| node.to_string())
                .collect::<Vec<_>>()
                .join(" → "),
            None => String::from("not found"),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn fitness(cost: f64) -> Fitness {
        Fitness { cost, ..Fitness::trivial() }
    }

    #[test]
    fn it_keeps_earliest_of_ties() {
        let mut solution = Solution::new("test");
        assert!(!solution.is_found());
        assert!(solution.offer(&[0, 1], fitness(3.0)));
        assert!(!solution.offer(&[0, 2, 1], fitness(3.0)));
        assert!(!solution.offer(&[0, 3, 1], fitness(f64::INFINITY)));
        assert_eq!(solution.path, Some(vec![0, 1]));
        assert!(solution.offer(&[0, 4, 1], fitness(2.5)));
        assert_eq!(solution.route(), "0 → 4 → 1");
    }
    #[test]
    fn it_ignores_invalid_offers() {
        let mut solution = Solution::new("test");
        assert!(!solution.offer(&[0, 1], Fitness::invalid()));
        solution.record();
        assert_eq!(solution.route(), "not found");
        assert_eq!(solution.iterations, 1);
        assert!(solution.history[0].is_infinite());
    }
}
