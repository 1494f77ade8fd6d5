use crate::network::{Network, Path};
use hashbrown::HashSet;
use super::dijkstra::Dijkstra;
use super::heap::{pop_nearest, MinHeap};


/// Yen's algorithm over hop counts; yields simple paths, shortest first.
pub struct Yens<'a> {
    graph: &'a Network,
}

impl<'a> Yens<'a> {
    pub fn new(graph: &'a Network) -> Self {
        Yens { graph }
    }
    pub fn shortest_path(&self, src: usize, dst: usize) -> Option<Path> {
        let mut dijkstra = Dijkstra::default();
        dijkstra.compute_once(self.graph, src);
        dijkstra.shortest_path(src, dst)
    }
    pub fn k_shortest_paths(&self, src: usize, dst: usize, k: usize) -> Vec<Path> {
        if k == 0 { return vec![] }
        let shortest = match self.shortest_path(src, dst) {
            Some(path) => path,
            None => return vec![],  // src and dst are disconnected
        };
        let mut list_a = vec![shortest];
        let mut heap_b = MinHeap::new();

        while list_a.len() < k {
            let prev = list_a[list_a.len() - 1].clone();
            for i in 0..prev.len().saturating_sub(1) {
                let spur_node = prev[i];
                let mut root_path = prev[..=i].to_vec();

                // For example, if search for 4th shortest path with spur-node (2)
                // We should ignore edges (2)───(3), (2)───(5) and node (1)
                //
                // (1)───(2)───(3)───(4)  1st
                //  │     └────(5)───(4)  2nd
                //  └────(7)───(8)───(4)  3rd

                let ignored_edges: HashSet<_> = list_a.iter()
                    .filter(|path| path.len() > i + 1 && path[..=i] == prev[..=i])
                    .map(|path| (path[i], path[i+1]))
                    .collect();
                let ignored_nodes: HashSet<_> = prev[..i].iter()
                    .cloned()
                    .collect();

                let mut dijkstra = Dijkstra::default();
                dijkstra.ignore(ignored_nodes, ignored_edges);
                dijkstra.compute_once(self.graph, spur_node);

                if let Some(spur_path) = dijkstra.shortest_path(spur_node, dst) {
                    root_path.pop();
                    root_path.extend(spur_path);
                    if list_a.contains(&root_path) { continue; }
                    let hops = (root_path.len() - 1) as f64;
                    heap_b.push(root_path, hops.into());
                }
            }
            match pop_nearest(&mut heap_b) {
                Some((path, _)) => list_a.push(path),
                None => break,  // src-dst exists no more paths
            }
        }
        list_a
    }
}



#[cfg(test)]
mod tests {
    use crate::network::{Edge, Network};
    use itertools::Itertools;
    use super::Yens;

    fn network(ends: Vec<(usize, usize)>) -> Network {
        let mut graph = Network::new();
        for end in ends {
            graph.add_edge(end, Edge::default()).unwrap();
        }
        graph
    }

    #[test]
    fn it_lists_paths_by_hop_count() {
        let graph = network(vec![(0, 1), (1, 2), (1, 3), (3, 2)]);
        let yens = Yens::new(&graph);
        let paths = yens.k_shortest_paths(0, 2, 5);
        assert_eq!(paths, vec![vec![0, 1, 2], vec![0, 1, 3, 2]]);
    }
    #[test]
    fn it_yields_distinct_simple_paths() {
        let mut graph = network(vec![(0, 1), (1, 2), (0, 2), (1, 4), (1, 3), (2, 3), (2, 4)]);
        let more_edges = (4..12).tuple_combinations()
            .map(|(src, dst)| ((src, dst), Edge::default()))
            .collect();
        graph.add_edges(more_edges).unwrap();

        let yens = Yens::new(&graph);
        let paths = yens.k_shortest_paths(0, 5, 10);
        assert_eq!(paths.len(), 10);
        assert_eq!(paths[0].len(), 4);
        for (prev, next) in paths.iter().tuple_windows() {
            assert!(prev.len() <= next.len());
        }
        for path in paths.iter() {
            assert_eq!(path.iter().unique().count(), path.len());
            assert!(path.windows(2).all(|ends| graph.has_edge(ends[0], ends[1])));
        }
        assert_eq!(paths.iter().unique().count(), paths.len());
    }
    #[test]
    fn it_handles_degenerate_pairs() {
        let mut graph = network(vec![(0, 1)]);
        graph.add_node(99, 1.0, 0.99);
        let yens = Yens::new(&graph);
        assert!(yens.k_shortest_paths(0, 99, 5).is_empty());
        assert!(yens.k_shortest_paths(0, 1, 0).is_empty());
        assert_eq!(yens.k_shortest_paths(1, 1, 3), vec![vec![1]]);
    }
}
