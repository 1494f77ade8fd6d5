use rand::Rng;


/// Cumulative-distribution table: one uniform draw selects one slot.
#[derive(Clone, Debug)]
pub struct Roulette {
    cumulative: Vec<f64>,
}

impl Roulette {
    /// Negative or NaN weights count as zero. Infinite weights share the
    /// whole draw evenly, and a total that overflows is rescaled by the
    /// largest weight. Returns `None` when no weight is positive.
    pub fn new<I: IntoIterator<Item=f64>>(weights: I) -> Option<Self> {
        let mut weights: Vec<f64> = weights.into_iter()
            .map(|weight| if weight > 0.0 { weight } else { 0.0 })
            .collect();
        if weights.iter().any(|weight| weight.is_infinite()) {
            for weight in weights.iter_mut() {
                *weight = if weight.is_infinite() { 1.0 } else { 0.0 };
            }
        } else if weights.iter().sum::<f64>().is_infinite() {
            let max = weights.iter().cloned().fold(0.0, f64::max);
            for weight in weights.iter_mut() {
                *weight /= max;
            }
        }
        let mut sum = 0.0;
        let cumulative: Vec<f64> = weights.iter()
            .map(|weight| {
                sum += weight;
                sum
            })
            .collect();
        if sum > 0.0 { Some(Roulette { cumulative }) } else { None }
    }
    pub fn total(&self) -> f64 {
        self.cumulative.last().cloned().unwrap_or(0.0)
    }
    /// Maps a draw from `[0, 1)` onto a slot; zero-weight slots are never hit.
    pub fn pick(&self, draw: f64) -> usize {
        let target = draw * self.total();
        let slot = self.cumulative.partition_point(|&acc| acc <= target);
        if slot < self.cumulative.len() {
            slot
        } else {
            // rounding pushed the draw onto the total, take the last live slot
            let total = self.total();
            self.cumulative.partition_point(|&acc| acc < total)
        }
    }
    pub fn spin<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        self.pick(rng.gen_range(0.0..1.0))
    }
}
