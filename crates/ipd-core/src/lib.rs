//! Strategy core for the Iterated Prisoner's Dilemma
//!
//! Decision-making agents that observe both players' move histories and
//! choose to cooperate or defect each round. This crate provides:
//! - The `Strategy` contract (history validation, move selection, reset)
//! - Static classifier profiles for every policy
//! - The grudger family of policies plus a seeded stochastic reference policy
//! - A reference match driver for playing two strategies against each other

mod classifier;
mod config;
mod error;
mod game;
mod grudger;
mod random;
mod registry;
mod strategy;

pub use classifier::{Classifier, Feature, MemoryDepth};
pub use config::MatchConfig;
pub use error::{ConfigError, HistoryError, StrategyError};
pub use game::{run_match, Match, MatchResult, RoundResult};
pub use grudger::{
    Aggravater, EasyGo, ForgetfulGrudger, Grudger, GrudgerAlternator, OppositeGrudger,
    SoftGrudger,
};
pub use random::{Random, SeededRng};
pub use registry::StrategyKind;
pub use strategy::{Classified, HistoryView, Move, Strategy};
