//! Match execution engine

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::MatchConfig;
use crate::error::StrategyError;
use crate::registry::StrategyKind;
use crate::strategy::{Move, Strategy};

/// Result of a single round
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub round: usize,
    pub move_a: Move,
    pub move_b: Move,
}

/// Result of a complete match
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub player_a: String,
    pub player_b: String,
    pub rounds: Vec<RoundResult>,
}

impl MatchResult {
    pub fn history_a(&self) -> Vec<Move> {
        self.rounds.iter().map(|r| r.move_a).collect()
    }

    pub fn history_b(&self) -> Vec<Move> {
        self.rounds.iter().map(|r| r.move_b).collect()
    }
}

/// Two strategies and the histories they build together.
///
/// The match owns both histories; strategies only ever see them as
/// read-only slices. Moves are chosen simultaneously from the pre-round
/// histories, then appended.
pub struct Match {
    player_a: Box<dyn Strategy>,
    player_b: Box<dyn Strategy>,
    history_a: Vec<Move>,
    history_b: Vec<Move>,
    round: usize,
}

impl Match {
    pub fn new(player_a: Box<dyn Strategy>, player_b: Box<dyn Strategy>) -> Self {
        Self {
            player_a,
            player_b,
            history_a: Vec::new(),
            history_b: Vec::new(),
            round: 0,
        }
    }

    /// Build both players from the registry, each with its own RNG stream.
    pub fn from_kinds(kind_a: StrategyKind, kind_b: StrategyKind, config: &MatchConfig) -> Self {
        Self::new(kind_a.build(config.player_rng(0)), kind_b.build(config.player_rng(1)))
    }

    pub fn round(&self) -> usize {
        self.round
    }

    pub fn history_a(&self) -> &[Move] {
        &self.history_a
    }

    pub fn history_b(&self) -> &[Move] {
        &self.history_b
    }

    /// Play one round and record both moves.
    pub fn play_round(&mut self) -> Result<RoundResult, StrategyError> {
        debug_assert!(self.history_a.len() == self.round && self.history_b.len() == self.round);

        let move_a = self.player_a.play(&self.history_a, &self.history_b)?;
        let move_b = self.player_b.play(&self.history_b, &self.history_a)?;

        debug!(
            round = self.round,
            a = %move_a,
            b = %move_b,
            "{} vs {}",
            self.player_a.name(),
            self.player_b.name()
        );

        self.history_a.push(move_a);
        self.history_b.push(move_b);
        let result = RoundResult {
            round: self.round,
            move_a,
            move_b,
        };
        self.round += 1;
        Ok(result)
    }

    /// Reset both strategies and play `turns` rounds from scratch.
    pub fn play(&mut self, turns: u32) -> Result<MatchResult, StrategyError> {
        self.reset();
        let mut rounds = Vec::with_capacity(turns as usize);
        for _ in 0..turns {
            rounds.push(self.play_round()?);
        }
        Ok(MatchResult {
            player_a: self.player_a.name().to_string(),
            player_b: self.player_b.name().to_string(),
            rounds,
        })
    }

    /// Clear the histories and return both strategies to their initial state.
    pub fn reset(&mut self) {
        debug!(
            played = self.round,
            "resetting {} vs {}",
            self.player_a.name(),
            self.player_b.name()
        );
        self.history_a.clear();
        self.history_b.clear();
        self.round = 0;
        self.player_a.reset();
        self.player_b.reset();
    }
}

/// Run a complete match between two registered strategies
pub fn run_match(
    kind_a: StrategyKind,
    kind_b: StrategyKind,
    config: &MatchConfig,
) -> Result<MatchResult, StrategyError> {
    Match::from_kinds(kind_a, kind_b, config).play(config.turns)
}
