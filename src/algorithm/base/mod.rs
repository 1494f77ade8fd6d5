pub mod ants;
pub mod dijkstra;
pub mod genes;
pub mod heap;
pub mod roulette;
pub mod router;
pub mod yens;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Maps independent work items, on the rayon pool when `parallel` is on.
/// Output order always follows input order.
#[cfg(feature = "parallel")]
pub fn fan_out<I, T, F>(items: &[I], f: F) -> Vec<T>
where I: Sync, T: Send, F: Fn(&I) -> T + Sync + Send {
    items.par_iter().map(f).collect()
}

#[cfg(not(feature = "parallel"))]
pub fn fan_out<I, T, F>(items: &[I], f: F) -> Vec<T>
where I: Sync, T: Send, F: Fn(&I) -> T + Sync + Send {
    items.iter().map(f).collect()
}
