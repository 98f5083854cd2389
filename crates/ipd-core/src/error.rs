//! Error types for strategy decisions and match setup

use thiserror::Error;

/// Histories handed to a strategy that cannot belong to a real match.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum HistoryError {
    /// Own and opponent histories differ in length.
    #[error("histories differ in length (own {own}, opponent {opponent})")]
    UnequalLengths { own: usize, opponent: usize },
    /// `next_move` was called before any round has been played.
    #[error("histories are empty; round 0 must use the initial move")]
    Empty,
}

/// Errors surfaced to the match driver by a decision step.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StrategyError {
    #[error("invalid history state: {0}")]
    InvalidHistoryState(#[from] HistoryError),

    /// A policy's internal state broke its own invariant. This is a logic
    /// defect, never a condition a caller should recover from.
    #[error("unreachable state in {strategy}: {detail}")]
    UnreachableState {
        strategy: &'static str,
        detail: String,
    },
}

impl StrategyError {
    pub(crate) fn unreachable(strategy: &'static str, detail: impl Into<String>) -> Self {
        let detail = detail.into();
        debug_assert!(false, "unreachable state in {strategy}: {detail}");
        StrategyError::UnreachableState { strategy, detail }
    }
}

/// Errors loading a match configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse match config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid match config: {0}")]
    Invalid(String),
    #[error("unknown strategy {0:?}")]
    UnknownStrategy(String),
}
