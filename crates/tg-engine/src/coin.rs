use rand::Rng;

/// A 50/50 branch source for combat resolution.
///
/// ATTACK resolves each hostile character with one flip. The trait exists
/// so tests can force either branch; production code hands the engine a
/// seeded [`rand::rngs::StdRng`].
pub trait CoinFlip {
    /// One fair flip. `true` means the blow lands on the enemy,
    /// `false` means the player takes the hit.
    fn flip(&mut self) -> bool;
}

impl<R: Rng> CoinFlip for R {
    fn flip(&mut self) -> bool {
        self.random_bool(0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn seeded_rng_is_reproducible() {
        let flips = |seed: u64| -> Vec<bool> {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..32).map(|_| rng.flip()).collect()
        };
        assert_eq!(flips(7), flips(7));
    }

    #[test]
    fn seeded_rng_produces_both_sides() {
        let mut rng = StdRng::seed_from_u64(1);
        let flips: Vec<bool> = (0..64).map(|_| rng.flip()).collect();
        assert!(flips.iter().any(|&f| f));
        assert!(flips.iter().any(|&f| !f));
    }
}
