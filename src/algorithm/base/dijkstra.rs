use hashbrown::{HashMap, HashSet};
use std::f64::INFINITY as INF;

use super::heap::{pop_nearest, MinHeap};
use crate::network::{Network, Path};

/// Every hop weighs the same, so distances are hop counts.
const HOP: f64 = 1.0;


#[derive(Default)]
pub struct Dijkstra {
    dist: HashMap<(usize, usize), f64>,
    pred: HashMap<(usize, usize), usize>,
    ignore_nodes: HashSet<usize>,
    ignore_edges: HashSet<(usize, usize)>,
}


impl Dijkstra {
    pub fn compute_once(&mut self, graph: &Network, r: usize) {
        // an unknown root reaches nothing, not even itself
        if self.dist.contains_key(&(r, r)) || !graph.contains(r) { return }
        let mut heap = MinHeap::new();
        let mut seen = HashMap::new();

        seen.insert(r, 0.0);
        heap.push(r, 0.0.into());

        // settle the nearest node, then relax its edges
        while let Some((v, rv_dist)) = pop_nearest(&mut heap) {
            if self.dist.contains_key(&(r, v)) { continue; }
            self.dist.insert((r, v), rv_dist);
            for u in graph.neighbors(v) {
                if self.ignore_nodes.contains(&u)
                    || self.ignore_edges.contains(&(v, u)) { continue; }

                let ru_dist = rv_dist + HOP;
                if self.dist.contains_key(&(r, u))
                    || ru_dist >= *seen.get(&u).unwrap_or(&INF) { continue; }

                self.pred.insert((r, u), v);
                seen.insert(u, ru_dist);
                heap.push(u, ru_dist.into());
            }
        }
    }
    pub fn shortest_path(&self, src: usize, dst: usize) -> Option<Path> {
        if !self.dist.contains_key(&(src, dst)) {
            return None;
        }
        let mut path = vec![dst];
        let mut cur = dst;
        while cur != src {
            cur = *self.pred.get(&(src, cur))?;
            path.push(cur);
        }
        path.reverse();
        Some(path)
    }
    pub fn ignore(&mut self, nodes: HashSet<usize>, edges: HashSet<(usize, usize)>) {
        self.ignore_nodes = nodes;
        self.ignore_edges = edges;
    }
}
