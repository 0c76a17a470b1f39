//! Emission kinds and the caller-side random roller
//!
//! The emitter itself never rolls dice: the host picks an `Emission` for
//! every update. `EmissionRoller` reproduces the classic flickering look
//! from a seeded RNG for hosts that don't want to script emission by hand.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

/// Where (and whether) a particle spawns on an accepted step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Emission {
    /// No spawn this step
    #[default]
    None,
    /// Spawn half a base-width to the left
    Left,
    /// Spawn half a base-width to the right
    Right,
    /// Spawn exactly at the base
    Middle,
}

impl Emission {
    /// Horizontal offset applied to the base rect for a spawn
    #[inline]
    pub fn x_offset(self, base_width: f32) -> f32 {
        match self {
            Emission::Left => -base_width / 2.0,
            Emission::Right => base_width / 2.0,
            Emission::None | Emission::Middle => 0.0,
        }
    }

    /// Whether this kind requests a spawn at all
    #[inline]
    pub fn spawns(self) -> bool {
        self != Emission::None
    }
}

/// Seeded source of `Emission` values
#[derive(Debug, Clone)]
pub struct EmissionRoller {
    frequency: u32,
    rng: Pcg32,
}

impl EmissionRoller {
    /// `frequency` controls sparsity: a spawn happens when two draws in
    /// `0..frequency` coincide, so roughly once every `frequency` rolls.
    pub fn new(frequency: u32, seed: u64) -> Self {
        Self {
            frequency,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn frequency(&self) -> u32 {
        self.frequency
    }

    /// Pick the emission for the next update call
    pub fn roll(&mut self) -> Emission {
        if self.frequency > 1 {
            let a = self.rng.random_range(0..self.frequency);
            let b = self.rng.random_range(0..self.frequency);
            if a != b {
                return Emission::None;
            }
        }

        match self.rng.random_range(0..3u8) {
            0 => Emission::Right,
            1 => Emission::Left,
            _ => Emission::Middle,
        }
    }
}

impl Iterator for EmissionRoller {
    type Item = Emission;

    fn next(&mut self) -> Option<Emission> {
        Some(self.roll())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets() {
        assert_eq!(Emission::Left.x_offset(16.0), -8.0);
        assert_eq!(Emission::Right.x_offset(16.0), 8.0);
        assert_eq!(Emission::Middle.x_offset(16.0), 0.0);
        assert_eq!(Emission::None.x_offset(16.0), 0.0);
        assert!(!Emission::None.spawns());
        assert!(Emission::Middle.spawns());
    }

    #[test]
    fn test_roller_determinism() {
        let a: Vec<Emission> = EmissionRoller::new(20, 42).take(500).collect();
        let b: Vec<Emission> = EmissionRoller::new(20, 42).take(500).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_roller_frequency_one_always_emits() {
        let mut roller = EmissionRoller::new(1, 7);
        for _ in 0..100 {
            assert!(roller.roll().spawns());
        }

        let mut roller = EmissionRoller::new(0, 7);
        assert!(roller.roll().spawns());
    }

    #[test]
    fn test_roller_is_sparse() {
        let spawns = EmissionRoller::new(20, 1234)
            .take(10_000)
            .filter(|e| e.spawns())
            .count();
        // Expected ~500 (1 in 20)
        assert!(spawns > 250 && spawns < 1000, "spawns = {spawns}");
    }

    #[test]
    fn test_roller_uses_every_side() {
        let kinds: Vec<Emission> = EmissionRoller::new(1, 99).take(300).collect();
        assert!(kinds.contains(&Emission::Left));
        assert!(kinds.contains(&Emission::Right));
        assert!(kinds.contains(&Emission::Middle));
    }
}
