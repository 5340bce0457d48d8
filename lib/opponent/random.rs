use derive_more::DebugCustom;
use rand::{rngs::StdRng, Rng, RngCore, SeedableRng};
use std::ops::Range;

/// A dynamically dispatched wrapper for any type that implements [`rand::RngCore`].
#[derive(DebugCustom)]
#[debug(fmt = "Random")]
pub struct Random(Box<dyn RngCore + Send + 'static>);

impl Random {
    /// Constructs [`Random`] from any type that implements [`rand::RngCore`].
    pub fn new<R: RngCore + Send + 'static>(rng: R) -> Self {
        Random(Box::new(rng))
    }

    /// Initializes a [`rand::rngs::StdRng`] from a seed, for reproducible games.
    pub fn seeded(seed: u64) -> Self {
        Random::new(StdRng::seed_from_u64(seed))
    }

    /// Samples uniformly from a half-open range.
    pub fn sample(&mut self, range: Range<f64>) -> f64 {
        self.0.gen_range(range)
    }
}

/// Initializes a [`rand::rngs::StdRng`] seeded by [system entropy].
///
/// [system entropy]: rand::rngs::StdRng::from_entropy
impl Default for Random {
    fn default() -> Self {
        Random::new(StdRng::from_entropy())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use test_strategy::proptest;

    #[proptest]
    fn samples_fall_within_range(seed: u64, #[strategy(1.0..1e6)] hi: f64) {
        let mut random = Random::seeded(seed);
        for _ in 0..16 {
            assert!((0.0..hi).contains(&random.sample(0.0..hi)));
        }
    }

    #[proptest]
    fn same_seed_draws_same_samples(seed: u64) {
        let mut a = Random::seeded(seed);
        let mut b = Random::seeded(seed);
        assert_eq!(a.sample(0.0..10.0), b.sample(0.0..10.0));
    }

    #[test]
    fn zeroed_generator_samples_lower_bound() {
        let mut random = Random::new(StepRng::new(0, 0));
        assert_eq!(random.sample(0.0..10.0), 0.0);
    }
}
