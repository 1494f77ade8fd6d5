mod cost;
mod solution;

pub use cost::{reliability_cost, resource_cost, CostModel, Fitness, Weights};
pub use cost::{PENALTY, RESOURCE_SCALE};
pub use solution::Solution;
