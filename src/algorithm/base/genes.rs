use hashbrown::HashSet;
use itertools::Itertools;
use rand::Rng;
use rand::seq::{index, SliceRandom};
use crate::network::{Network, Path};
use super::router::ShortestPath;


/// Uniform random walk over unvisited neighbors. Fails on a dead end or
/// when the step ceiling runs out before reaching `dst`.
pub fn random_walk<R: Rng + ?Sized>(network: &Network, src: usize, dst: usize,
                                    max_steps: usize, rng: &mut R) -> Option<Path> {
    let mut path = vec![src];
    let mut visited: HashSet<usize> = path.iter().cloned().collect();
    let mut cur = src;
    for _ in 0..max_steps {
        if cur == dst { return Some(path) }
        let unvisited: Vec<usize> = network.neighbors(cur)
            .filter(|node| !visited.contains(node))
            .collect();
        cur = *unvisited.choose(rng)?;
        visited.insert(cur);
        path.push(cur);
    }
    if cur == dst { Some(path) } else { None }
}

/// Best of `k` distinct individuals drawn uniformly; ties go to the first drawn.
pub fn tournament<'a, R: Rng + ?Sized>(pool: &'a [(Path, f64)], k: usize,
                                       rng: &mut R) -> &'a Path {
    debug_assert!(!pool.is_empty());
    let amount = k.max(1).min(pool.len());
    let picks = index::sample(rng, pool.len(), amount);
    let mut best = picks.index(0);
    for pick in picks.iter().skip(1) {
        if pool[pick].1 < pool[best].1 {
            best = pick;
        }
    }
    &pool[best].0
}

/// Splices `p1`'s prefix onto `p2`'s suffix at a random shared interior node.
/// Without a shared node the child is a copy of `p1`.
pub fn crossover<R: Rng + ?Sized>(p1: &[usize], p2: &[usize], rng: &mut R) -> Path {
    let inner2: HashSet<usize> = interior(p2).iter().cloned().collect();
    let shared: Vec<usize> = interior(p1).iter()
        .cloned()
        .filter(|node| inner2.contains(node))
        .unique()
        .collect();
    let node = match shared.choose(rng) {
        Some(&node) => node,
        None => return p1.to_vec(),
    };
    let (cut1, cut2) = match (position(p1, node), position(p2, node)) {
        (Some(cut1), Some(cut2)) => (cut1, cut2),
        _ => return p1.to_vec(),
    };
    let mut child = p1[..cut1].to_vec();
    child.extend_from_slice(&p2[cut2..]);
    prune_loops(child)
}

/// Replaces the tail after a random interior node with a fresh route to
/// `dst`. Applied with probability `rate` on paths of three nodes or more;
/// if no route exists the path comes back untouched.
pub fn mutate<R: Rng + ?Sized>(path: Path, dst: usize, rate: f64,
                               router: &dyn ShortestPath, rng: &mut R) -> Path {
    if rng.gen_range(0.0..1.0) >= rate || path.len() < 3 {
        return path;
    }
    let idx = rng.gen_range(1..path.len() - 1);
    match router.shortest_path(path[idx], dst) {
        Some(tail) => {
            let mut child = path[..idx].to_vec();
            child.extend(tail);
            prune_loops(child)
        }
        None => path,
    }
}

/// Cuts out every cycle, keeping the path connected and simple.
pub fn prune_loops(path: Path) -> Path {
    let mut pruned: Path = Vec::with_capacity(path.len());
    for node in path {
        match pruned.iter().position(|&seen| seen == node) {
            Some(pos) => pruned.truncate(pos + 1),
            None => pruned.push(node),
        }
    }
    pruned
}

fn interior(path: &[usize]) -> &[usize] {
    if path.len() < 2 { &[] } else { &path[1..path.len() - 1] }
}

fn position(path: &[usize], node: usize) -> Option<usize> {
    path.iter().position(|&n| n == node)
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use rand::SeedableRng;
    use rand_chacha::ChaChaRng;
    use crate::algorithm::HopRouter;
    use crate::network::Edge;

    fn ladder() -> Network {
        // 0 - 1 - 2 - 3
        //     |   |   |
        //     4 - 5 - 6
        let mut network = Network::new();
        let ends = vec![(0, 1), (1, 2), (2, 3), (1, 4), (2, 5), (3, 6), (4, 5), (5, 6)];
        for end in ends {
            network.add_edge(end, Edge::default()).unwrap();
        }
        network
    }
    fn connected(network: &Network, path: &[usize]) -> bool {
        path.windows(2).all(|ends| network.has_edge(ends[0], ends[1]))
    }

    #[test]
    fn it_walks_to_destination() {
        let network = ladder();
        let mut rng = ChaChaRng::seed_from_u64(1);
        for _ in 0..50 {
            if let Some(path) = random_walk(&network, 0, 6, 300, &mut rng) {
                assert_eq!(path[0], 0);
                assert_eq!(path[path.len() - 1], 6);
                assert!(connected(&network, &path));
                assert_eq!(path.iter().unique().count(), path.len());
            }
        }
        assert_eq!(random_walk(&network, 4, 4, 300, &mut rng), Some(vec![4]));
        assert_eq!(random_walk(&network, 0, 6, 0, &mut rng), None);
    }
    #[test]
    fn it_picks_lowest_fitness_in_tournament() {
        let pool = vec![(vec![0], 3.0), (vec![1], 1.0), (vec![2], 2.0)];
        let mut rng = ChaChaRng::seed_from_u64(3);
        assert_eq!(tournament(&pool, 3, &mut rng), &vec![1]);
        assert_eq!(tournament(&pool[..1], 3, &mut rng), &vec![0]);
    }
    #[test]
    fn it_breaks_tournament_ties_by_draw_order() {
        let pool: Vec<(Path, f64)> = (0..6).map(|id| (vec![id], 1.0)).collect();
        for seed in 0..20 {
            let first = index::sample(&mut ChaChaRng::seed_from_u64(seed), pool.len(), 3).index(0);
            let winner = tournament(&pool, 3, &mut ChaChaRng::seed_from_u64(seed));
            assert_eq!(winner, &pool[first].0);
        }
    }
    #[test]
    fn it_draws_whole_pool_when_smaller_than_tournament() {
        let pool = vec![(vec![0], 2.0), (vec![1], 0.5)];
        let mut rng = ChaChaRng::seed_from_u64(9);
        for _ in 0..20 {
            assert_eq!(tournament(&pool, 5, &mut rng), &vec![1]);
        }
    }
    #[test]
    fn it_splices_at_shared_node() {
        let network = ladder();
        let mut rng = ChaChaRng::seed_from_u64(5);
        let p1 = vec![0, 1, 4, 5, 6];
        let p2 = vec![0, 1, 2, 5, 6];
        for _ in 0..20 {
            let child = crossover(&p1, &p2, &mut rng);
            assert!(connected(&network, &child));
            assert_eq!(child[0], 0);
            assert_eq!(child[child.len() - 1], 6);
        }
        let p3 = vec![0, 1, 2, 3, 6];
        assert_eq!(crossover(&vec![0, 1, 4, 5, 6], &vec![0, 6], &mut rng), vec![0, 1, 4, 5, 6]);
        let child = crossover(&p3, &vec![0, 1, 4, 5, 6], &mut rng);
        assert_eq!(child, vec![0, 1, 4, 5, 6]);
    }
    #[test]
    fn it_prunes_loops() {
        assert_eq!(prune_loops(vec![0, 1, 2, 1, 4]), vec![0, 1, 4]);
        assert_eq!(prune_loops(vec![0, 1, 2, 0, 3]), vec![0, 3]);
        assert_eq!(prune_loops(vec![7]), vec![7]);
    }
    #[test]
    fn it_repairs_tail_on_mutation() {
        let network = Arc::new(ladder());
        let router = HopRouter::new(Arc::clone(&network));
        let mut rng = ChaChaRng::seed_from_u64(11);
        let path = vec![0, 1, 4, 5, 6];
        for _ in 0..20 {
            let child = mutate(path.clone(), 6, 1.0, &router, &mut rng);
            assert!(connected(&network, &child));
            assert_eq!(child[child.len() - 1], 6);
            assert!(child.len() <= path.len());
        }
        assert_eq!(mutate(path.clone(), 6, 0.0, &router, &mut rng), path);
        assert_eq!(mutate(vec![0, 1], 1, 1.0, &router, &mut rng), vec![0, 1]);
    }
}
