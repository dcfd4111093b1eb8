use crate::domain::ports::RandomSource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

/// Draws from the calling thread's own generator, so concurrent routers never
/// contend on a shared RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn draw(&self, upper: u32) -> u32 {
        rand::thread_rng().gen_range(1..=upper)
    }
}

/// Reproducible draws from a fixed seed.
#[derive(Debug)]
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn draw(&self, upper: u32) -> u32 {
        let mut rng = match self.rng.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        rng.gen_range(1..=upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thread_random_stays_in_range() {
        let source = ThreadRandom;
        for _ in 0..10_000 {
            let r = source.draw(100);
            assert!((1..=100).contains(&r));
        }
    }

    #[test]
    fn test_thread_random_covers_bounds() {
        let source = ThreadRandom;
        let draws: Vec<u32> = (0..10_000).map(|_| source.draw(3)).collect();
        assert!(draws.contains(&1));
        assert!(draws.contains(&3));
    }

    #[test]
    fn test_seeded_random_is_reproducible() {
        let a = SeededRandom::new(42);
        let b = SeededRandom::new(42);
        let first: Vec<u32> = (0..100).map(|_| a.draw(100)).collect();
        let second: Vec<u32> = (0..100).map(|_| b.draw(100)).collect();
        assert_eq!(first, second);
        assert!(first.iter().all(|r| (1..=100).contains(r)));
    }

    #[test]
    fn test_upper_of_one_always_draws_one() {
        let source = SeededRandom::new(7);
        assert!((0..100).all(|_| source.draw(1) == 1));
    }
}
