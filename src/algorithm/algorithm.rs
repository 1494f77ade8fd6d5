use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;
use enum_dispatch::enum_dispatch;
use super::aco::ACO;
use super::ga::GA;
use crate::component::Solution;


#[enum_dispatch]
pub enum AlgorithmEnum {
    ACO,
    GA,
}

#[enum_dispatch(AlgorithmEnum)]
pub trait Algorithm {
    fn name(&self) -> &'static str;
    /// Runs the whole iteration budget, or until `halt` is raised, and
    /// returns the best path found from `src` to `dst`.
    fn search(&mut self, src: usize, dst: usize, halt: &Halt) -> Solution;
}


/// Stop signal checked between iterations: a deadline, a shared flag, both or neither.
#[derive(Clone, Debug, Default)]
pub struct Halt {
    deadline: Option<Instant>,
    flag: Option<Arc<AtomicBool>>,
}

impl Halt {
    pub fn never() -> Self {
        Halt::default()
    }
    pub fn at(deadline: Instant) -> Self {
        Halt { deadline: Some(deadline), flag: None }
    }
    pub fn with_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.flag = Some(flag);
        self
    }
    pub fn is_raised(&self) -> bool {
        let expired = self.deadline
            .map_or(false, |deadline| Instant::now() >= deadline);
        let flagged = self.flag.as_ref()
            .map_or(false, |flag| flag.load(Ordering::Relaxed));
        expired || flagged
    }
}
