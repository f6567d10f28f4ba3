//! Sampling decisions
//!
//! An interval `n` keeps one call out of `n`. Intervals of 0 and 1 keep everything.

use rand::Rng;

/// Yes/no sampling decision
pub trait Sampler: Send + Sync {
    /// Whether a call sampled at 1-in-`interval` should be kept
    fn sample(&self, interval: u32) -> bool;
}

/// Uniformly random 1-in-N sampler
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomSampler;

impl Sampler for RandomSampler {
    fn sample(&self, interval: u32) -> bool {
        if interval <= 1 {
            return true;
        }
        rand::thread_rng().gen_range(0..interval) == 0
    }
}

/// Sampler with a constant answer
#[derive(Debug, Clone, Copy)]
pub struct FixedSampler(pub bool);

impl Sampler for FixedSampler {
    fn sample(&self, _interval: u32) -> bool {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_intervals_always_sample() {
        let sampler = RandomSampler;
        for _ in 0..100 {
            assert!(sampler.sample(0));
            assert!(sampler.sample(1));
        }
    }

    #[test]
    fn test_large_interval_drops_most_calls() {
        let sampler = RandomSampler;
        let kept = (0..10_000).filter(|_| sampler.sample(1_000)).count();
        assert!(kept < 100, "kept {} of 10000 at 1/1000", kept);
    }

    #[test]
    fn test_fixed_sampler() {
        assert!(FixedSampler(true).sample(1_000_000));
        assert!(!FixedSampler(false).sample(1));
    }
}
