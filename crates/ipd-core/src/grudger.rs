//! Grudging strategies
//!
//! Policies that hold or release resentment depending on the opponent's
//! defections. Each stateful policy carries an explicit state enum so that
//! every transition is visible in one `match`.

use tracing::trace;

use crate::classifier::{Classifier, MemoryDepth};
use crate::error::StrategyError;
use crate::strategy::{Classified, HistoryView, Move, Strategy};

/// One-way state shared by the absorbing policies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum GrudgeState {
    #[default]
    Neutral,
    /// Entered once; only `reset` leaves it.
    Settled,
}

impl GrudgeState {
    /// Settle on `condition`; report whether the state is (now) settled.
    fn settle_if(&mut self, condition: bool) -> bool {
        if condition {
            *self = GrudgeState::Settled;
        }
        *self == GrudgeState::Settled
    }

    fn is_settled(self) -> bool {
        self == GrudgeState::Settled
    }
}

// ── Grudger ──────────────────────────────────────────────────────────

/// Cooperates until the opponent defects once, then defects forever.
#[derive(Clone, Debug, Default)]
pub struct Grudger {
    grudge: GrudgeState,
}

impl Grudger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grudged(&self) -> bool {
        self.grudge.is_settled()
    }

    fn decide(&mut self, view: &HistoryView<'_>) -> Move {
        let was_grudged = self.grudged();
        if self.grudge.settle_if(view.opponent_defected_last()) {
            if !was_grudged {
                trace!(round = view.round(), "grudge started");
            }
            Move::Defect
        } else {
            Move::Cooperate
        }
    }
}

impl Classified for Grudger {
    const NAME: &'static str = "Grudger";
    const CLASSIFIER: Classifier = Classifier::deterministic(MemoryDepth::Unbounded);
}

impl Strategy for Grudger {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn classifier(&self) -> Classifier {
        Self::CLASSIFIER
    }

    fn initial_move(&self) -> Move {
        Move::Cooperate
    }

    fn respond(&mut self, view: HistoryView<'_>) -> Result<Move, StrategyError> {
        Ok(self.decide(&view))
    }

    fn reset(&mut self) {
        self.grudge = GrudgeState::Neutral;
    }
}

// ── Forgetful Grudger ────────────────────────────────────────────────

/// Rounds of punishment before a forgetful grudge is released.
pub const FORGETFUL_MEM_LENGTH: u32 = 10;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum ForgetfulState {
    #[default]
    Neutral,
    /// `memory` rounds have passed since the grudge started.
    Grudging { memory: u32 },
}

/// Grudges for `FORGETFUL_MEM_LENGTH` rounds after a defection, then forgives.
///
/// The round that starts the grudge defects with `grudge_memory == 0`. Each
/// later round bumps the counter and keeps defecting while it is below
/// `mem_length`; the round it reaches `mem_length` cooperates and clears the
/// grudge.
#[derive(Clone, Debug, Default)]
pub struct ForgetfulGrudger {
    state: ForgetfulState,
}

impl ForgetfulGrudger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grudged(&self) -> bool {
        matches!(self.state, ForgetfulState::Grudging { .. })
    }

    pub fn grudge_memory(&self) -> u32 {
        match self.state {
            ForgetfulState::Neutral => 0,
            ForgetfulState::Grudging { memory } => memory,
        }
    }

    pub fn mem_length(&self) -> u32 {
        FORGETFUL_MEM_LENGTH
    }
}

impl Classified for ForgetfulGrudger {
    const NAME: &'static str = "Forgetful Grudger";
    const CLASSIFIER: Classifier =
        Classifier::deterministic(MemoryDepth::Bounded(FORGETFUL_MEM_LENGTH));
}

impl Strategy for ForgetfulGrudger {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn classifier(&self) -> Classifier {
        Self::CLASSIFIER
    }

    fn initial_move(&self) -> Move {
        Move::Cooperate
    }

    fn respond(&mut self, view: HistoryView<'_>) -> Result<Move, StrategyError> {
        match self.state {
            ForgetfulState::Neutral => {
                if view.opponent_defected_last() {
                    trace!(round = view.round(), "forgetful grudge started");
                    self.state = ForgetfulState::Grudging { memory: 0 };
                    Ok(Move::Defect)
                } else {
                    Ok(Move::Cooperate)
                }
            }
            ForgetfulState::Grudging { memory } if memory >= FORGETFUL_MEM_LENGTH => {
                Err(StrategyError::unreachable(
                    Self::NAME,
                    format!("grudge_memory {} not released at {}", memory, FORGETFUL_MEM_LENGTH),
                ))
            }
            ForgetfulState::Grudging { memory } => {
                let memory = memory + 1;
                if memory < FORGETFUL_MEM_LENGTH {
                    self.state = ForgetfulState::Grudging { memory };
                    Ok(Move::Defect)
                } else {
                    trace!(round = view.round(), "forgetful grudge released");
                    self.state = ForgetfulState::Neutral;
                    Ok(Move::Cooperate)
                }
            }
        }
    }

    fn reset(&mut self) {
        self.state = ForgetfulState::Neutral;
    }
}

// ── Opposite Grudger ─────────────────────────────────────────────────

/// Defects until the opponent cooperates once, then cooperates forever.
#[derive(Clone, Debug, Default)]
pub struct OppositeGrudger {
    forgiven: GrudgeState,
}

impl OppositeGrudger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn forgiven(&self) -> bool {
        self.forgiven.is_settled()
    }
}

impl Classified for OppositeGrudger {
    const NAME: &'static str = "Opposite Grudger";
    const CLASSIFIER: Classifier = Classifier::deterministic(MemoryDepth::Unbounded);
}

impl Strategy for OppositeGrudger {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn classifier(&self) -> Classifier {
        Self::CLASSIFIER
    }

    fn initial_move(&self) -> Move {
        Move::Defect
    }

    fn respond(&mut self, view: HistoryView<'_>) -> Result<Move, StrategyError> {
        if self.forgiven.settle_if(!view.opponent_defected_last()) {
            Ok(Move::Cooperate)
        } else {
            Ok(Move::Defect)
        }
    }

    fn reset(&mut self) {
        self.forgiven = GrudgeState::Neutral;
    }
}

// ── Aggravater ───────────────────────────────────────────────────────

/// Opens with a defection, then plays as a Grudger.
#[derive(Clone, Debug, Default)]
pub struct Aggravater {
    inner: Grudger,
}

impl Aggravater {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grudged(&self) -> bool {
        self.inner.grudged()
    }
}

impl Classified for Aggravater {
    const NAME: &'static str = "Aggravater";
    const CLASSIFIER: Classifier = Classifier::deterministic(MemoryDepth::Unbounded);
}

impl Strategy for Aggravater {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn classifier(&self) -> Classifier {
        Self::CLASSIFIER
    }

    fn initial_move(&self) -> Move {
        Move::Defect
    }

    fn respond(&mut self, view: HistoryView<'_>) -> Result<Move, StrategyError> {
        Ok(self.inner.decide(&view))
    }

    fn reset(&mut self) {
        self.inner.reset();
    }
}

// ── Soft Grudger ─────────────────────────────────────────────────────

/// Response to a defection: four defections, then two reconciling cooperations.
const SOFT_PUNISHMENT: [Move; 6] = [
    Move::Defect,
    Move::Defect,
    Move::Defect,
    Move::Defect,
    Move::Cooperate,
    Move::Cooperate,
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum SoftState {
    #[default]
    Neutral,
    /// `step` is the index of the punishment entry played last round.
    Punishing { step: usize },
}

/// Answers a defection with `D, D, D, D, C, C`, ignoring the opponent until
/// the run is finished.
#[derive(Clone, Debug, Default)]
pub struct SoftGrudger {
    state: SoftState,
}

impl SoftGrudger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grudged(&self) -> bool {
        matches!(self.state, SoftState::Punishing { .. })
    }

    pub fn grudge_memory(&self) -> usize {
        match self.state {
            SoftState::Neutral => 0,
            SoftState::Punishing { step } => step,
        }
    }
}

impl Classified for SoftGrudger {
    const NAME: &'static str = "Soft Grudger";
    const CLASSIFIER: Classifier =
        Classifier::deterministic(MemoryDepth::Bounded(SOFT_PUNISHMENT.len() as u32));
}

impl Strategy for SoftGrudger {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn classifier(&self) -> Classifier {
        Self::CLASSIFIER
    }

    fn initial_move(&self) -> Move {
        Move::Cooperate
    }

    fn respond(&mut self, view: HistoryView<'_>) -> Result<Move, StrategyError> {
        let step = match self.state {
            SoftState::Neutral if !view.opponent_defected_last() => return Ok(Move::Cooperate),
            SoftState::Neutral => {
                trace!(round = view.round(), "soft grudge started");
                self.state = SoftState::Punishing { step: 0 };
                return Ok(SOFT_PUNISHMENT[0]);
            }
            SoftState::Punishing { step } => step + 1,
        };
        let Some(&m) = SOFT_PUNISHMENT.get(step) else {
            return Err(StrategyError::unreachable(
                Self::NAME,
                format!("punishment step {} past run of {}", step, SOFT_PUNISHMENT.len()),
            ));
        };
        self.state = if step + 1 == SOFT_PUNISHMENT.len() {
            trace!(round = view.round(), "soft grudge released");
            SoftState::Neutral
        } else {
            SoftState::Punishing { step }
        };
        Ok(m)
    }

    fn reset(&mut self) {
        self.state = SoftState::Neutral;
    }
}

// ── Grudger Alternator ───────────────────────────────────────────────

/// After the opponent's first defection, alternates D, C, D, C, ... forever.
///
/// Stateless: the phase is recomputed from the opponent history each round.
#[derive(Clone, Debug, Default)]
pub struct GrudgerAlternator;

impl GrudgerAlternator {
    pub fn new() -> Self {
        Self
    }
}

impl Classified for GrudgerAlternator {
    const NAME: &'static str = "GrudgerAlternator";
    const CLASSIFIER: Classifier = Classifier::deterministic(MemoryDepth::Unbounded);
}

impl Strategy for GrudgerAlternator {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn classifier(&self) -> Classifier {
        Self::CLASSIFIER
    }

    fn initial_move(&self) -> Move {
        Move::Cooperate
    }

    fn respond(&mut self, view: HistoryView<'_>) -> Result<Move, StrategyError> {
        match view.first_opponent_defection() {
            None => Ok(Move::Cooperate),
            Some(first) => {
                // 1 on the round right after the first defection
                let elapsed = view.round() - first;
                if elapsed % 2 == 1 {
                    Ok(Move::Defect)
                } else {
                    Ok(Move::Cooperate)
                }
            }
        }
    }

    fn reset(&mut self) {}
}

// ── EasyGo ───────────────────────────────────────────────────────────

/// Defects while the opponent cooperates; cooperates forever once it defects.
#[derive(Clone, Debug, Default)]
pub struct EasyGo;

impl EasyGo {
    pub fn new() -> Self {
        Self
    }
}

impl Classified for EasyGo {
    const NAME: &'static str = "EasyGo";
    const CLASSIFIER: Classifier = Classifier::deterministic(MemoryDepth::Unbounded);
}

impl Strategy for EasyGo {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn classifier(&self) -> Classifier {
        Self::CLASSIFIER
    }

    fn initial_move(&self) -> Move {
        Move::Defect
    }

    fn respond(&mut self, view: HistoryView<'_>) -> Result<Move, StrategyError> {
        if view.opponent_ever_defected() {
            Ok(Move::Cooperate)
        } else {
            Ok(Move::Defect)
        }
    }

    fn reset(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HistoryError;
    use crate::strategy::tests::replay;
    use proptest::prelude::{prop, prop_assert, prop_assert_eq, prop_oneof, proptest, Just};
    use Move::{Cooperate as C, Defect as D};

    /// Play `strategy` through the forced histories (so its state evolves
    /// exactly as in a real match) and return its next move.
    fn respond_after(strategy: &mut dyn Strategy, own: &[Move], opponent: &[Move]) -> Move {
        for round in 0..own.len() {
            strategy.play(&own[..round], &opponent[..round]).unwrap();
        }
        strategy.play(own, opponent).unwrap()
    }

    fn moves() -> impl proptest::strategy::Strategy<Value = Vec<Move>> {
        prop::collection::vec(prop_oneof![Just(C), Just(D)], 1..60)
    }

    #[test]
    fn test_grudger_initial_move() {
        let g = Grudger::new();
        assert_eq!(g.initial_move(), C);
        assert_eq!(g.initial_move(), C);
    }

    #[test]
    fn test_grudger_defects_forever() {
        assert_eq!(respond_after(&mut Grudger::new(), &[C, D, D, D], &[C, C, C, C]), C);
        assert_eq!(respond_after(&mut Grudger::new(), &[C, C, D, D, D], &[C, D, C, C, C]), D);
    }

    #[test]
    fn test_grudger_flag() {
        let mut g = Grudger::new();
        assert!(!g.grudged());
        g.next_move(&[C], &[D]).unwrap();
        assert!(g.grudged());
        assert_eq!(g.next_move(&[C, D], &[D, C]).unwrap(), D);
        g.reset();
        assert!(!g.grudged());
    }

    #[test]
    fn test_next_move_rejects_bad_histories() {
        let mut g = Grudger::new();
        assert_eq!(
            g.next_move(&[], &[]),
            Err(StrategyError::InvalidHistoryState(HistoryError::Empty))
        );
        assert_eq!(
            g.next_move(&[C], &[C, D]),
            Err(StrategyError::InvalidHistoryState(HistoryError::UnequalLengths {
                own: 1,
                opponent: 2
            }))
        );
        assert!(!g.grudged(), "rejected call must not touch state");
    }

    #[test]
    fn test_forgetful_grudger_window() {
        let mut g = ForgetfulGrudger::new();
        assert_eq!(g.play(&[], &[]).unwrap(), C);
        assert!(!g.grudged());

        let mut g = ForgetfulGrudger::new();
        assert_eq!(respond_after(&mut g, &[C], &[C]), C);
        assert!(!g.grudged());

        let mut g = ForgetfulGrudger::new();
        assert_eq!(respond_after(&mut g, &[C], &[D]), D);
        assert!(g.grudged());
        assert_eq!(g.grudge_memory(), 0);

        for i in 0..10 {
            let own: Vec<Move> = [C, C].into_iter().chain(std::iter::repeat(D).take(i)).collect();
            let opp: Vec<Move> = [C, D].into_iter().chain(std::iter::repeat(C).take(i)).collect();
            let mut g = ForgetfulGrudger::new();
            assert_eq!(respond_after(&mut g, &own, &opp), D, "i = {}", i);
            assert!(g.grudged());
            assert_eq!(g.grudge_memory(), i as u32);
            assert_eq!(g.mem_length(), 10);
        }
    }

    #[test]
    fn test_forgetful_grudger_forgives_when_memory_reaches_length() {
        let mut opp = vec![C, D];
        opp.extend(std::iter::repeat(C).take(12));
        let mut g = ForgetfulGrudger::new();
        let own = replay(&mut g, &opp);
        // defection at round 1: punished on rounds 2..=11, forgiven on 12
        assert_eq!(&own[..2], &[C, C]);
        assert!(own[2..12].iter().all(|m| *m == D), "{:?}", own);
        assert_eq!(own[12], C);
        assert_eq!(own[13], C);
        assert!(!g.grudged());
        assert_eq!(g.grudge_memory(), 0);
    }

    #[test]
    fn test_forgetful_grudger_reset() {
        let mut g = ForgetfulGrudger::new();
        replay(&mut g, &[C, D, C, C, C]);
        assert!(g.grudged());
        assert_eq!(g.grudge_memory(), 2);
        g.reset();
        assert!(!g.grudged());
        assert_eq!(g.grudge_memory(), 0);
        g.reset();
        assert!(!g.grudged());
    }

    #[test]
    fn test_opposite_grudger() {
        assert_eq!(OppositeGrudger::new().initial_move(), D);
        assert_eq!(respond_after(&mut OppositeGrudger::new(), &[C, D, D, D], &[D, D, D, D]), D);
        let mut g = OppositeGrudger::new();
        assert_eq!(respond_after(&mut g, &[C, C, D, D, D], &[C, D, C, C, C]), C);
        assert!(g.forgiven());
        // forgiven stays put even after a defection
        assert_eq!(g.next_move(&[C, C, D, D, D, C], &[C, D, C, C, C, D]).unwrap(), C);
        g.reset();
        assert!(!g.forgiven());
    }

    #[test]
    fn test_aggravater() {
        let a = Aggravater::new();
        assert_eq!(a.initial_move(), D);
        assert_eq!(respond_after(&mut Aggravater::new(), &[C, D, D, D], &[C, C, C, C]), C);
        let mut a = Aggravater::new();
        assert_eq!(respond_after(&mut a, &[C, C, D, D, D], &[C, D, C, C, C]), D);
        assert!(a.grudged());
        a.reset();
        assert!(!a.grudged());
    }

    #[test]
    fn test_soft_grudger_sequence() {
        assert_eq!(SoftGrudger::new().initial_move(), C);
        let cases: [(&[Move], &[Move], Move); 9] = [
            (&[C], &[C], C),
            (&[C, C], &[C, D], D),
            (&[C, C, D], &[C, D, C], D),
            (&[C, C, D, D], &[C, D, C, C], D),
            (&[C, C, D, D, D], &[C, D, C, C, C], D),
            (&[C, C, D, D, D, D], &[C, D, C, C, C, C], C),
            (&[C, C, D, D, D, D, C], &[C, D, C, C, C, C, C], C),
            (&[C, C, D, D, D, D, C, C], &[C, D, C, C, C, C, C, D], D),
            (&[C, C, D, D, D, D, C, C, D], &[C, D, C, C, C, C, C, D, C], D),
        ];
        for (own, opp, expected) in cases {
            assert_eq!(respond_after(&mut SoftGrudger::new(), own, opp), expected, "{:?}", opp);
        }
    }

    #[test]
    fn test_soft_grudger_ignores_defection_mid_run() {
        let mut g = SoftGrudger::new();
        let own = replay(&mut g, &[C, D, D, D, D, D, D, D, C]);
        assert_eq!(own, vec![C, C, D, D, D, D, C, C, D]);
    }

    #[test]
    fn test_soft_grudger_memory_counts_from_trigger() {
        let mut g = SoftGrudger::new();
        assert_eq!(g.next_move(&[C], &[D]).unwrap(), D);
        assert!(g.grudged());
        assert_eq!(g.grudge_memory(), 0);

        let mut own = vec![C, D];
        let mut opp = vec![D, C];
        let expected = [(D, 1), (D, 2), (D, 3), (C, 4)];
        for (m, memory) in expected {
            assert_eq!(g.next_move(&own, &opp).unwrap(), m);
            assert!(g.grudged());
            assert_eq!(g.grudge_memory(), memory);
            own.push(m);
            opp.push(C);
        }

        // last entry of the run releases the grudge
        assert_eq!(g.next_move(&own, &opp).unwrap(), C);
        assert!(!g.grudged());
        assert_eq!(g.grudge_memory(), 0);
    }

    #[test]
    fn test_grudge_state_settles_once() {
        let mut state = GrudgeState::default();
        assert!(!state.settle_if(false));
        assert!(state.settle_if(true));
        assert!(state.settle_if(false));
        assert!(state.is_settled());
    }

    #[test]
    fn test_soft_grudger_reset() {
        let mut g = SoftGrudger::new();
        replay(&mut g, &[C, D, C, C, C, C]);
        assert!(g.grudged());
        assert_eq!(g.grudge_memory(), 3);
        g.reset();
        assert!(!g.grudged());
        assert_eq!(g.grudge_memory(), 0);
    }

    #[test]
    fn test_grudger_alternator() {
        let mut g = GrudgerAlternator::new();
        assert_eq!(g.initial_move(), C);
        assert_eq!(respond_after(&mut g, &[C; 5], &[C; 5]), C);
        let cases: [(&[Move], &[Move], Move); 4] = [
            (&[C, C, C, C, C, C], &[C, C, C, C, C, D], D),
            (&[C, C, C, C, C, C, D], &[C, C, C, C, C, D, D], C),
            (&[C, C, C, C, C, C, D, C], &[C, C, C, C, C, D, D, C], D),
            (&[C, C, C, C, C, C, D, C, D], &[C, C, C, C, C, D, D, C, C], C),
        ];
        for (own, opp, expected) in cases {
            assert_eq!(respond_after(&mut GrudgerAlternator::new(), own, opp), expected);
        }
    }

    #[test]
    fn test_easy_go() {
        assert_eq!(EasyGo::new().initial_move(), D);
        assert_eq!(respond_after(&mut EasyGo::new(), &[C, D, D, D], &[C, C, C, C]), D);
        assert_eq!(respond_after(&mut EasyGo::new(), &[C, C, D, D, D], &[C, D, C, C, C]), C);
    }

    #[test]
    fn test_classifiers() {
        assert_eq!(Grudger::CLASSIFIER.memory_depth, MemoryDepth::Unbounded);
        assert_eq!(ForgetfulGrudger::CLASSIFIER.memory_depth, MemoryDepth::Bounded(10));
        assert_eq!(OppositeGrudger::CLASSIFIER.memory_depth, MemoryDepth::Unbounded);
        assert_eq!(Aggravater::CLASSIFIER.memory_depth, MemoryDepth::Unbounded);
        assert_eq!(SoftGrudger::CLASSIFIER.memory_depth, MemoryDepth::Bounded(6));
        assert_eq!(GrudgerAlternator::CLASSIFIER.memory_depth, MemoryDepth::Unbounded);
        assert_eq!(EasyGo::CLASSIFIER.memory_depth, MemoryDepth::Unbounded);
        for c in [
            Grudger::CLASSIFIER,
            ForgetfulGrudger::CLASSIFIER,
            OppositeGrudger::CLASSIFIER,
            Aggravater::CLASSIFIER,
            SoftGrudger::CLASSIFIER,
            GrudgerAlternator::CLASSIFIER,
            EasyGo::CLASSIFIER,
        ] {
            assert!(!c.stochastic);
            assert!(c.makes_use_of.is_empty());
            assert!(!c.long_run_time);
            assert!(!c.is_meta());
        }
    }

    proptest! {
        #[test]
        fn grudger_defection_is_absorbing(opp in moves()) {
            let own = replay(&mut Grudger::new(), &opp);
            match opp.iter().position(|m| *m == D) {
                Some(first) => {
                    prop_assert!(own[..=first].iter().all(|m| *m == C));
                    prop_assert!(own[first + 1..].iter().all(|m| *m == D));
                }
                None => prop_assert!(own.iter().all(|m| *m == C)),
            }
        }

        #[test]
        fn aggravater_matches_grudger_after_opening(opp in moves()) {
            let grudger = replay(&mut Grudger::new(), &opp);
            let aggravater = replay(&mut Aggravater::new(), &opp);
            prop_assert_eq!(aggravater[0], D);
            prop_assert_eq!(&aggravater[1..], &grudger[1..]);
        }

        #[test]
        fn opposite_grudger_cooperation_is_absorbing(opp in moves()) {
            let own = replay(&mut OppositeGrudger::new(), &opp);
            match opp.iter().position(|m| *m == C) {
                Some(first) => {
                    prop_assert!(own[..=first].iter().all(|m| *m == D));
                    prop_assert!(own[first + 1..].iter().all(|m| *m == C));
                }
                None => prop_assert!(own.iter().all(|m| *m == D)),
            }
        }

        #[test]
        fn easy_go_cooperation_is_absorbing(opp in moves()) {
            let own = replay(&mut EasyGo::new(), &opp);
            let first = opp.iter().position(|m| *m == D).unwrap_or(opp.len());
            prop_assert!(own[..(first + 1).min(own.len())].iter().all(|m| *m == D));
            prop_assert!(own.iter().skip(first + 1).all(|m| *m == C));
        }

        #[test]
        fn forgetful_grudger_single_defection(i in 0usize..30, tail in 12usize..30) {
            let mut opp = vec![C; i + 1 + tail];
            opp[i] = D;
            let mut g = ForgetfulGrudger::new();
            let mut own = Vec::new();
            for round in 0..opp.len() {
                let m = g.play(&own, &opp[..round]).unwrap();
                if (i + 1..=i + 10).contains(&round) {
                    prop_assert_eq!(m, D);
                    prop_assert_eq!(g.grudge_memory() as usize, round - i - 1);
                } else {
                    prop_assert_eq!(m, C);
                    prop_assert_eq!(g.grudge_memory(), 0);
                }
                own.push(m);
            }
        }

        #[test]
        fn grudger_alternator_alternates(i in 1usize..30, j in 1usize..30) {
            let mut opp = vec![C; i];
            opp.push(D);
            let own = vec![C; i + 1];
            let mut g = GrudgerAlternator::new();
            let mut own_hist = own.clone();
            let mut opp_hist = opp.clone();
            for r in 0..j {
                let m = g.next_move(&own_hist, &opp_hist).unwrap();
                prop_assert_eq!(m, if r % 2 == 0 { D } else { C });
                own_hist.push(m);
                opp_hist.push(C);
            }
        }
    }
}
