//! Strategy contract and history inspection

use serde::{Deserialize, Serialize};

use crate::classifier::Classifier;
use crate::error::{HistoryError, StrategyError};

/// A move in the Prisoner's Dilemma
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Cooperate,
    Defect,
}

impl Move {
    pub fn flip(self) -> Self {
        match self {
            Move::Cooperate => Move::Defect,
            Move::Defect => Move::Cooperate,
        }
    }

    pub fn is_defect(self) -> bool {
        self == Move::Defect
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Cooperate => write!(f, "C"),
            Move::Defect => write!(f, "D"),
        }
    }
}

/// Read-only view over both players' histories for one decision.
///
/// Construction guarantees the two histories are non-empty and of
/// equal length, so policies can index the last round freely.
#[derive(Clone, Copy, Debug)]
pub struct HistoryView<'a> {
    own: &'a [Move],
    opponent: &'a [Move],
}

impl<'a> HistoryView<'a> {
    pub fn new(own: &'a [Move], opponent: &'a [Move]) -> Result<Self, HistoryError> {
        if own.len() != opponent.len() {
            return Err(HistoryError::UnequalLengths {
                own: own.len(),
                opponent: opponent.len(),
            });
        }
        if own.is_empty() {
            return Err(HistoryError::Empty);
        }
        Ok(Self { own, opponent })
    }

    /// Index of the round about to be played.
    pub fn round(&self) -> usize {
        self.own.len()
    }

    pub fn own(&self) -> &'a [Move] {
        self.own
    }

    pub fn opponent(&self) -> &'a [Move] {
        self.opponent
    }

    pub fn own_last(&self) -> Move {
        self.own[self.own.len() - 1]
    }

    pub fn opponent_last(&self) -> Move {
        self.opponent[self.opponent.len() - 1]
    }

    pub fn opponent_defected_last(&self) -> bool {
        self.opponent_last().is_defect()
    }

    pub fn opponent_defections(&self) -> usize {
        self.opponent.iter().filter(|m| m.is_defect()).count()
    }

    pub fn opponent_ever_defected(&self) -> bool {
        self.opponent.contains(&Move::Defect)
    }

    pub fn first_opponent_defection(&self) -> Option<usize> {
        self.opponent.iter().position(|m| m.is_defect())
    }
}

/// Static metadata for a strategy type, readable without an instance.
pub trait Classified {
    const NAME: &'static str;
    const CLASSIFIER: Classifier;
}

/// A decision-making agent for one side of a match.
///
/// The driver owns both histories. A strategy only reads them and keeps
/// its own per-match state, which `reset` returns to its defaults.
pub trait Strategy: Send {
    fn name(&self) -> &'static str;

    fn classifier(&self) -> Classifier;

    /// Move for round 0, when both histories are empty.
    fn initial_move(&self) -> Move;

    /// Policy step for round `view.round() >= 1`.
    fn respond(&mut self, view: HistoryView<'_>) -> Result<Move, StrategyError>;

    /// Restore the pre-match state.
    fn reset(&mut self);

    /// Validate the histories and choose the move for the current round.
    fn next_move(&mut self, own: &[Move], opponent: &[Move]) -> Result<Move, StrategyError> {
        let view = HistoryView::new(own, opponent)?;
        self.respond(view)
    }

    /// Round 0 dispatches to `initial_move`, everything else to `next_move`.
    fn play(&mut self, own: &[Move], opponent: &[Move]) -> Result<Move, StrategyError> {
        if own.is_empty() && opponent.is_empty() {
            Ok(self.initial_move())
        } else {
            self.next_move(own, opponent)
        }
    }
}
