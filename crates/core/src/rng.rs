//! Seeded randomness for piece selection.
//!
//! Kinds are drawn uniformly and independently on every spawn, with
//! replacement (no bag shuffling), so any kind can repeat back to back. The
//! generator is a small seeded LCG: deterministic for tests, and more than
//! random enough for picking one of seven shapes.

use blockfall_types::PieceKind;

/// Linear congruential generator using the Numerical Recipes constants.
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a generator from a seed. A zero seed is remapped to avoid the
    /// all-zero fixed point.
    pub fn new(seed: u32) -> Self {
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    pub fn next_u32(&mut self) -> u32 {
        // state = (a * state + c) mod 2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Random value in `[0, max)`.
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

/// Draws the kind for each spawn.
#[derive(Debug, Clone)]
pub struct PiecePicker {
    rng: SimpleRng,
}

impl PiecePicker {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Uniform independent draw over the seven kinds.
    pub fn next(&mut self) -> PieceKind {
        let idx = self.rng.next_range(PieceKind::ALL.len() as u32);
        PieceKind::ALL[idx as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SimpleRng::new(12345);
        let mut b = SimpleRng::new(12345);
        for _ in 0..100 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = SimpleRng::new(12345);
        let mut b = SimpleRng::new(54321);
        assert_ne!(a.next_u32(), b.next_u32());
    }

    #[test]
    fn next_range_stays_in_range() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            assert!(rng.next_range(7) < 7);
        }
    }

    #[test]
    fn picker_reaches_every_kind() {
        // With replacement there is no bag guarantee, but 500 draws missing
        // a kind would mean the generator is broken, not unlucky.
        let mut picker = PiecePicker::new(42);
        let mut seen = [false; 7];
        for _ in 0..500 {
            let kind = picker.next();
            let idx = PieceKind::ALL.iter().position(|&k| k == kind).unwrap();
            seen[idx] = true;
        }
        assert!(seen.iter().all(|&s| s), "some kind never drawn: {:?}", seen);
    }

    #[test]
    fn picker_repeats_kinds() {
        // Draws are independent, so a long run contains immediate repeats.
        let mut picker = PiecePicker::new(9);
        let draws: Vec<_> = (0..200).map(|_| picker.next()).collect();
        assert!(draws.windows(2).any(|w| w[0] == w[1]));
    }
}
