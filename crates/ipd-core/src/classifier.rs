//! Static classifier profiles describing each strategy

use serde::Serialize;

/// How many past rounds a decision may consult.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum MemoryDepth {
    Bounded(u32),
    Unbounded,
}

impl MemoryDepth {
    pub fn is_unbounded(self) -> bool {
        matches!(self, MemoryDepth::Unbounded)
    }
}

/// Match information a strategy inspects beyond the two histories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Feature {
    /// The total match length.
    Length,
    /// The payoff matrix.
    Game,
}

/// Declarative properties of a strategy type.
///
/// Attached as a constant to each policy; never varies per instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Classifier {
    pub memory_depth: MemoryDepth,
    pub stochastic: bool,
    pub makes_use_of: &'static [Feature],
    pub long_run_time: bool,
    pub inspects_source: bool,
    pub manipulates_source: bool,
    pub manipulates_state: bool,
}

impl Classifier {
    /// Deterministic, no extra features, no meta-strategy flags.
    pub const fn deterministic(memory_depth: MemoryDepth) -> Self {
        Self {
            memory_depth,
            stochastic: false,
            makes_use_of: &[],
            long_run_time: false,
            inspects_source: false,
            manipulates_source: false,
            manipulates_state: false,
        }
    }

    pub const fn stochastic(memory_depth: MemoryDepth) -> Self {
        Self {
            stochastic: true,
            ..Self::deterministic(memory_depth)
        }
    }

    pub fn uses(&self, feature: Feature) -> bool {
        self.makes_use_of.contains(&feature)
    }

    /// True if the strategy reaches into source or state of other players.
    pub fn is_meta(&self) -> bool {
        self.inspects_source || self.manipulates_source || self.manipulates_state
    }
}
