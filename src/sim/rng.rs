//! Per-entity random source
//!
//! The ball and each paddle own one of these. There is no shared generator.

use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use rand_pcg::Pcg32;

/// Seedable generator with the three distributions the simulation draws from
#[derive(Debug, Clone)]
pub struct RandomSource {
    rng: Pcg32,
}

impl RandomSource {
    /// Deterministic source for a given seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Source seeded from operating system entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: Pcg32::from_os_rng(),
        }
    }

    /// Seeded if a seed is given, otherwise from entropy
    pub fn new(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::seeded)
    }

    /// Uniform sample in [low, high); returns `low` for an empty range
    pub fn uniform(&mut self, low: f32, high: f32) -> f32 {
        if high > low {
            self.rng.random_range(low..high)
        } else {
            low
        }
    }

    /// Normal sample with the given mean and standard deviation
    pub fn normal(&mut self, mean: f32, std_dev: f32) -> f32 {
        let z: f32 = self.rng.sample(StandardNormal);
        mean + std_dev * z
    }

    /// Fair coin flip
    pub fn coin(&mut self) -> bool {
        self.rng.random_bool(0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_is_reproducible() {
        let mut a = RandomSource::seeded(12345);
        let mut b = RandomSource::seeded(12345);
        for _ in 0..32 {
            assert_eq!(a.uniform(0.0, 1.0), b.uniform(0.0, 1.0));
            assert_eq!(a.normal(0.0, 1.0), b.normal(0.0, 1.0));
            assert_eq!(a.coin(), b.coin());
        }
    }

    #[test]
    fn test_uniform_range() {
        let mut rng = RandomSource::seeded(1);
        for _ in 0..1000 {
            let x = rng.uniform(-3.0, 4.0);
            assert!((-3.0..4.0).contains(&x));
        }
        assert_eq!(rng.uniform(2.0, 2.0), 2.0);
    }

    #[test]
    fn test_normal_statistics() {
        let mut rng = RandomSource::seeded(7);
        let n = 10_000;
        let samples: Vec<f32> = (0..n).map(|_| rng.normal(1.0, 0.5)).collect();
        let mean = samples.iter().sum::<f32>() / n as f32;
        let var = samples.iter().map(|x| (x - mean).powi(2)).sum::<f32>() / n as f32;
        assert!((mean - 1.0).abs() < 0.05);
        assert!((var.sqrt() - 0.5).abs() < 0.05);
    }

    #[test]
    fn test_coin_lands_both_ways() {
        let mut rng = RandomSource::seeded(99);
        let heads = (0..1000).filter(|_| rng.coin()).count();
        assert!(heads > 350 && heads < 650);
    }
}
