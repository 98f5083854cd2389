//! Seeded pseudo-random number generator and the stochastic reference policy
//!
//! Deterministic PRNG for reproducible matches. Each player draws from its
//! own stream so one player's randomness never shifts the other's.

use crate::classifier::{Classifier, MemoryDepth};
use crate::error::StrategyError;
use crate::strategy::{Classified, HistoryView, Move, Strategy};

/// Seeded random number generator
///
/// Deterministic: same seed + index = same sequence
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    /// Create a new RNG from a 32-byte seed and match index
    pub fn new(seed: &[u8; 32], match_index: u32) -> Self {
        let mut state = 0u64;
        for (i, chunk) in seed.chunks(8).enumerate() {
            let mut bytes = [0u8; 8];
            bytes[..chunk.len()].copy_from_slice(chunk);
            state ^= u64::from_le_bytes(bytes).wrapping_add(i as u64);
        }

        state ^= (match_index as u64).wrapping_mul(0x517cc1b727220a95);

        // xorshift never leaves zero
        if state == 0 {
            state = 0x9e3779b97f4a7c15;
        }

        let mut rng = Self { state };
        for _ in 0..8 {
            rng.next_u64();
        }
        rng
    }

    /// Independent sub-stream, e.g. one per player slot.
    pub fn fork(&self, stream: u32) -> Self {
        let mut state = self.state ^ (stream as u64 + 1).wrapping_mul(0x9e3779b97f4a7c15);
        if state == 0 {
            state = 0x517cc1b727220a95;
        }
        let mut rng = Self { state };
        rng.next_u64();
        rng
    }

    /// Generate next u64
    pub fn next_u64(&mut self) -> u64 {
        // xorshift64*
        self.state ^= self.state >> 12;
        self.state ^= self.state << 25;
        self.state ^= self.state >> 27;
        self.state.wrapping_mul(0x2545f4914f6cdd1d)
    }

    /// Value in 0..100, taken from the high half of the next output.
    pub fn next_percent(&mut self) -> u8 {
        ((self.next_u64() >> 32) % 100) as u8
    }
}

// ── Random ───────────────────────────────────────────────────────────

/// Cooperates with probability `cooperate_bias`% each round.
///
/// The opening move is drawn when the strategy is built or reset, so
/// `initial_move` stays a pure read. Reset rewinds to the original stream.
#[derive(Clone, Debug)]
pub struct Random {
    cooperate_bias: u8,
    origin: SeededRng,
    rng: SeededRng,
    opening: Move,
}

impl Random {
    pub fn new(cooperate_bias: u8, rng: SeededRng) -> Self {
        let cooperate_bias = cooperate_bias.min(100);
        let mut current = rng.clone();
        let opening = draw(cooperate_bias, &mut current);
        Self {
            cooperate_bias,
            origin: rng,
            rng: current,
            opening,
        }
    }

    pub fn cooperate_bias(&self) -> u8 {
        self.cooperate_bias
    }
}

fn draw(cooperate_bias: u8, rng: &mut SeededRng) -> Move {
    if rng.next_percent() < cooperate_bias {
        Move::Cooperate
    } else {
        Move::Defect
    }
}

impl Classified for Random {
    const NAME: &'static str = "Random";
    const CLASSIFIER: Classifier = Classifier::stochastic(MemoryDepth::Bounded(0));
}

impl Strategy for Random {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn classifier(&self) -> Classifier {
        Self::CLASSIFIER
    }

    fn initial_move(&self) -> Move {
        self.opening
    }

    fn respond(&mut self, _view: HistoryView<'_>) -> Result<Move, StrategyError> {
        Ok(draw(self.cooperate_bias, &mut self.rng))
    }

    fn reset(&mut self) {
        let mut rng = self.origin.clone();
        self.opening = draw(self.cooperate_bias, &mut rng);
        self.rng = rng;
    }
}
