//! Registry of every concrete strategy

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::classifier::Classifier;
use crate::error::ConfigError;
use crate::grudger::{
    Aggravater, EasyGo, ForgetfulGrudger, Grudger, GrudgerAlternator, OppositeGrudger,
    SoftGrudger,
};
use crate::random::{Random, SeededRng};
use crate::strategy::{Classified, Strategy};

/// A concrete strategy type, selectable from configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrategyKind {
    /// Cooperate until the opponent defects once, then always defect.
    Grudger,
    /// Punish a defection for ten rounds, then forgive.
    ForgetfulGrudger,
    /// Defect until the opponent cooperates once, then always cooperate.
    OppositeGrudger,
    /// Grudger that opens with a defection.
    Aggravater,
    /// Answer a defection with D, D, D, D, C, C.
    SoftGrudger,
    /// Alternate D and C forever after the first defection.
    GrudgerAlternator,
    /// Defect until the opponent defects, then always cooperate.
    EasyGo,
    /// Random choice each round.
    Random { cooperate_bias: u8 },
}

impl StrategyKind {
    /// The grudger family.
    pub const GRUDGERS: [StrategyKind; 7] = [
        StrategyKind::Grudger,
        StrategyKind::ForgetfulGrudger,
        StrategyKind::OppositeGrudger,
        StrategyKind::Aggravater,
        StrategyKind::SoftGrudger,
        StrategyKind::GrudgerAlternator,
        StrategyKind::EasyGo,
    ];

    /// Every registered strategy, with default parameters where needed.
    pub fn all() -> Vec<StrategyKind> {
        let mut kinds = Self::GRUDGERS.to_vec();
        kinds.push(StrategyKind::Random { cooperate_bias: 50 });
        kinds
    }

    pub fn name(&self) -> &'static str {
        match self {
            StrategyKind::Grudger => Grudger::NAME,
            StrategyKind::ForgetfulGrudger => ForgetfulGrudger::NAME,
            StrategyKind::OppositeGrudger => OppositeGrudger::NAME,
            StrategyKind::Aggravater => Aggravater::NAME,
            StrategyKind::SoftGrudger => SoftGrudger::NAME,
            StrategyKind::GrudgerAlternator => GrudgerAlternator::NAME,
            StrategyKind::EasyGo => EasyGo::NAME,
            StrategyKind::Random { .. } => Random::NAME,
        }
    }

    /// Static profile, available without building the strategy.
    pub fn classifier(&self) -> Classifier {
        match self {
            StrategyKind::Grudger => Grudger::CLASSIFIER,
            StrategyKind::ForgetfulGrudger => ForgetfulGrudger::CLASSIFIER,
            StrategyKind::OppositeGrudger => OppositeGrudger::CLASSIFIER,
            StrategyKind::Aggravater => Aggravater::CLASSIFIER,
            StrategyKind::SoftGrudger => SoftGrudger::CLASSIFIER,
            StrategyKind::GrudgerAlternator => GrudgerAlternator::CLASSIFIER,
            StrategyKind::EasyGo => EasyGo::CLASSIFIER,
            StrategyKind::Random { .. } => Random::CLASSIFIER,
        }
    }

    /// Instantiate the strategy. `rng` is only consumed by stochastic kinds.
    pub fn build(&self, rng: SeededRng) -> Box<dyn Strategy> {
        match *self {
            StrategyKind::Grudger => Box::new(Grudger::new()),
            StrategyKind::ForgetfulGrudger => Box::new(ForgetfulGrudger::new()),
            StrategyKind::OppositeGrudger => Box::new(OppositeGrudger::new()),
            StrategyKind::Aggravater => Box::new(Aggravater::new()),
            StrategyKind::SoftGrudger => Box::new(SoftGrudger::new()),
            StrategyKind::GrudgerAlternator => Box::new(GrudgerAlternator::new()),
            StrategyKind::EasyGo => Box::new(EasyGo::new()),
            StrategyKind::Random { cooperate_bias } => Box::new(Random::new(cooperate_bias, rng)),
        }
    }

    /// Human-readable description of the strategy
    pub fn describe(&self) -> String {
        let base = match self {
            StrategyKind::Grudger => "Cooperates until betrayed, then always defects.",
            StrategyKind::ForgetfulGrudger => {
                "Defects for ten rounds after a betrayal, then forgives."
            }
            StrategyKind::OppositeGrudger => {
                "Defects until the opponent cooperates, then always cooperates."
            }
            StrategyKind::Aggravater => "Opens with a defection, then plays as a Grudger.",
            StrategyKind::SoftGrudger => {
                "Answers a betrayal with four defections and two cooperations."
            }
            StrategyKind::GrudgerAlternator => {
                "After the first betrayal, alternates defect and cooperate."
            }
            StrategyKind::EasyGo => "Defects until betrayed, then always cooperates.",
            StrategyKind::Random { .. } => "Randomly cooperates or defects each round.",
        };

        let mut desc = base.to_string();
        if let StrategyKind::Random { cooperate_bias } = self {
            desc.push_str(&format!(" {}% chance to cooperate.", cooperate_bias));
        }
        desc
    }
}

impl FromStr for StrategyKind {
    type Err = ConfigError;

    /// Look up a strategy by its display name, e.g. `"Soft Grudger"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        StrategyKind::all()
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ConfigError::UnknownStrategy(s.to_string()))
    }
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
