pub mod algorithm;
pub mod component;
pub mod network;
pub mod planner;
pub mod utils;
