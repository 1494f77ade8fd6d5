use std::sync::Arc;
use crate::network::{Network, Path};
use super::yens::Yens;


/// Anything that can hand out simple paths between two nodes, or say none exist.
pub trait ShortestPath {
    fn shortest_path(&self, src: usize, dst: usize) -> Option<Path>;
    fn k_shortest_paths(&self, src: usize, dst: usize, limit: usize) -> Vec<Path>;
}


/// Structural router: ranks routes by hop count, ignoring link attributes.
pub struct HopRouter {
    network: Arc<Network>,
}

impl HopRouter {
    pub fn new(network: Arc<Network>) -> Self {
        HopRouter { network }
    }
}

impl ShortestPath for HopRouter {
    fn shortest_path(&self, src: usize, dst: usize) -> Option<Path> {
        Yens::new(&self.network).shortest_path(src, dst)
    }
    fn k_shortest_paths(&self, src: usize, dst: usize, limit: usize) -> Vec<Path> {
        Yens::new(&self.network).k_shortest_paths(src, dst, limit)
    }
}
