//! Plate-appearance transition engine.
//!
//! [`BaseState`] resolves outcomes and the sub-events around them
//! (steals, double plays, sacrifice advancement) into the next
//! [`GameState`]. Deterministic tables come from [`BaseOccupancy`]; this
//! module adds the rules that draw on the injected [`Randomness`].
//!
//! Each transition computes the complete next configuration from the
//! configuration at the start of the play, so secondary decisions never
//! see a half-updated base state.

use crate::bases::{Advance, Base, BaseOccupancy};
use crate::config::SimConfig;
use crate::narration::{self, Narrator, PlayEvent};
use crate::outcome::Outcome;
use crate::random::Randomness;
use crate::state::GameState;

/// Transition rules bound to a configuration, a randomness provider and a
/// narrator.
///
/// Every method takes the current state by value and returns the next one.
///
/// # Examples
///
/// ```rust
/// use lineupsim::{BaseOccupancy, BaseState, GameState, Outcome, SimConfig};
/// use lineupsim::narration::Silent;
/// use lineupsim::random::ScriptedRandomness;
///
/// let config = SimConfig::default();
/// // runner from second scores on the single
/// let mut rng = ScriptedRandomness::new([0.0]);
/// let mut narrator = Silent;
/// let mut rules = BaseState::new(&config, &mut rng, &mut narrator);
///
/// let state = GameState::new().with_bases(BaseOccupancy::Second);
/// let next = rules.resolve(state, Outcome::Single);
/// assert_eq!(next.score, 1);
/// assert_eq!(next.bases, BaseOccupancy::First);
/// ```
pub struct BaseState<'a, R, N: ?Sized> {
    config: &'a SimConfig,
    rng: &'a mut R,
    narrator: &'a mut N,
}

impl<'a, R: Randomness, N: Narrator + ?Sized> BaseState<'a, R, N> {
    pub fn new(config: &'a SimConfig, rng: &'a mut R, narrator: &'a mut N) -> Self {
        Self {
            config,
            rng,
            narrator,
        }
    }

    /// The randomness provider, for draws made outside the transition
    /// rules (the batter's outcome).
    pub fn randomness(&mut self) -> &mut R {
        self.rng
    }

    pub fn narrate(&mut self, event: PlayEvent) {
        narration::emit(&mut *self.narrator, event);
    }

    /// Apply one plate-appearance outcome.
    pub fn resolve(&mut self, state: GameState, outcome: Outcome) -> GameState {
        let next = match outcome {
            Outcome::StrikeOut => return self.strike_out(state),
            Outcome::InPlayOut => return self.in_play_out(state),
            Outcome::Walk => state.apply(state.bases.walk()),
            Outcome::Single => state.apply(self.single(state.bases)),
            Outcome::Double => state.apply(self.double(state.bases)),
            Outcome::Triple => state.apply(state.bases.triple()),
            Outcome::HomeRun => state.apply(state.bases.home_run()),
        };
        self.narrate(PlayEvent::PlateAppearance {
            outcome,
            runs: next.score - state.score,
        });
        next
    }

    pub fn strike_out(&mut self, state: GameState) -> GameState {
        self.narrate(PlayEvent::PlateAppearance {
            outcome: Outcome::StrikeOut,
            runs: 0,
        });
        state.record_out()
    }

    /// Out on a ball in play.
    ///
    /// With runners on and the inning still alive, a single draw picks
    /// sacrifice advancement (`[0, advance_on_out)`), a double play (the
    /// next `double_play` of the interval) or nothing.
    pub fn in_play_out(&mut self, state: GameState) -> GameState {
        self.narrate(PlayEvent::PlateAppearance {
            outcome: Outcome::InPlayOut,
            runs: 0,
        });
        let state = state.record_out();
        if state.bases.is_empty() || state.inning_over() {
            return state;
        }

        let u = self.rng.uniform();
        if u < self.config.advance_on_out {
            self.sacrifice_advance(state)
        } else if u < self.config.advance_on_out + self.config.double_play {
            self.double_play(state)
        } else {
            state
        }
    }

    /// Single. A runner from second may score (`score_from_second_on_single`);
    /// a runner from first may take third (`first_to_third_on_single`) once
    /// third is open.
    pub fn single(&mut self, bases: BaseOccupancy) -> Advance {
        use BaseOccupancy::*;

        let p_score = self.config.score_from_second_on_single;
        match bases {
            Empty => Advance::new(First, 0),
            First => {
                if self.rng.chance(self.config.first_to_third_on_single) {
                    Advance::new(FirstThird, 0)
                } else {
                    Advance::new(FirstSecond, 0)
                }
            }
            Second => {
                if self.rng.chance(p_score) {
                    Advance::new(First, 1)
                } else {
                    Advance::new(FirstThird, 0)
                }
            }
            Third => Advance::new(First, 1),
            FirstSecond => {
                if self.rng.chance(p_score) {
                    self.first_to_third_after_lead_scores(1)
                } else {
                    Advance::new(Loaded, 0)
                }
            }
            FirstThird => {
                if self.rng.chance(self.config.first_to_third_on_single) {
                    Advance::new(FirstThird, 1)
                } else {
                    Advance::new(FirstSecond, 1)
                }
            }
            SecondThird => {
                if self.rng.chance(p_score) {
                    Advance::new(First, 2)
                } else {
                    Advance::new(FirstThird, 1)
                }
            }
            Loaded => {
                if self.rng.chance(p_score) {
                    self.first_to_third_after_lead_scores(2)
                } else {
                    Advance::new(Loaded, 1)
                }
            }
        }
    }

    /// Runner from second has scored on a single; the runner from first
    /// now decides between second and third.
    fn first_to_third_after_lead_scores(&mut self, runs: u32) -> Advance {
        if self.rng.chance(self.config.first_to_third_on_single) {
            Advance::new(BaseOccupancy::FirstThird, runs)
        } else {
            Advance::new(BaseOccupancy::FirstSecond, runs)
        }
    }

    /// Double. Runners on second and third score; a runner from first
    /// reaches third or scores (`score_from_first_on_double`).
    pub fn double(&mut self, bases: BaseOccupancy) -> Advance {
        use BaseOccupancy::*;

        let p_score = self.config.score_from_first_on_double;
        match bases {
            Empty => Advance::new(Second, 0),
            Second => Advance::new(Second, 1),
            Third => Advance::new(Second, 1),
            SecondThird => Advance::new(Second, 2),
            First => {
                if self.rng.chance(p_score) {
                    Advance::new(Second, 1)
                } else {
                    Advance::new(SecondThird, 0)
                }
            }
            FirstSecond | FirstThird => {
                if self.rng.chance(p_score) {
                    Advance::new(Second, 2)
                } else {
                    Advance::new(SecondThird, 1)
                }
            }
            Loaded => {
                if self.rng.chance(p_score) {
                    Advance::new(Second, 3)
                } else {
                    Advance::new(SecondThird, 2)
                }
            }
        }
    }

    /// Steal attempts before a pitch: first to second, then second to
    /// third (a double steal when first is also occupied), then home.
    ///
    /// Each check draws only when its runner is on base and the base
    /// ahead is open.
    pub fn attempt_steals(&mut self, state: GameState) -> GameState {
        let mut bases = state.bases;
        let mut runs = 0;

        if bases.is_occupied(Base::First)
            && !bases.is_occupied(Base::Second)
            && self.rng.chance(self.config.steal_second)
        {
            let (_, _, third) = bases.runners_on();
            bases = BaseOccupancy::from_runners(false, true, third);
            self.narrate(PlayEvent::StolenBase { base: Base::Second });
        }

        if bases.is_occupied(Base::Second)
            && !bases.is_occupied(Base::Third)
            && self.rng.chance(self.config.steal_third)
        {
            if bases.is_occupied(Base::First) {
                bases = BaseOccupancy::SecondThird;
                self.narrate(PlayEvent::DoubleSteal);
            } else {
                bases = BaseOccupancy::Third;
                self.narrate(PlayEvent::StolenBase { base: Base::Third });
            }
        }

        if bases.is_occupied(Base::Third) && self.rng.chance(self.config.steal_home) {
            let (first, second, _) = bases.runners_on();
            bases = BaseOccupancy::from_runners(first, second, false);
            runs += 1;
            self.narrate(PlayEvent::StealHome);
        }

        state.apply(Advance::new(bases, runs))
    }

    /// Double play: the out that makes it a double play is recorded first,
    /// then one runner is removed. A runner crossing home on the turn only
    /// scores while the inning is still alive.
    ///
    /// With the bases empty or the inning already over this is a no-op.
    pub fn double_play(&mut self, state: GameState) -> GameState {
        if state.inning_over() {
            return state;
        }
        let Some(dp) = state.bases.double_play() else {
            return state;
        };
        let state = state.record_out();
        let runs = if state.inning_over() { 0 } else { dp.run_on_play };
        self.narrate(PlayEvent::DoublePlay { runs });
        state.apply(Advance::new(dp.bases, runs))
    }

    /// Sacrifice fly or bunt: runners move up one base each. Nothing moves
    /// once the inning is over.
    pub fn sacrifice_advance(&mut self, state: GameState) -> GameState {
        if state.inning_over() {
            return state;
        }
        let advance = state.bases.sacrifice_advance();
        self.narrate(PlayEvent::SacrificeAdvance { runs: advance.runs });
        state.apply(advance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{ScriptedRandomness, NEVER};

    const ALWAYS: f64 = 0.0;

    fn run<T>(
        config: &SimConfig,
        draws: &[f64],
        f: impl FnOnce(&mut BaseState<'_, ScriptedRandomness, Vec<PlayEvent>>) -> T,
    ) -> (T, usize) {
        let mut rng = ScriptedRandomness::new(draws.iter().copied());
        let mut log: Vec<PlayEvent> = Vec::new();
        let result = {
            let mut rules = BaseState::new(config, &mut rng, &mut log);
            f(&mut rules)
        };
        (result, rng.consumed())
    }

    fn on(bases: BaseOccupancy, outs: u8) -> GameState {
        GameState {
            outs,
            ..GameState::new().with_bases(bases)
        }
    }

    #[test]
    fn test_strike_out_leaves_bases() {
        let config = SimConfig::default();
        let (next, draws) = run(&config, &[], |r| {
            r.strike_out(on(BaseOccupancy::Loaded, 1))
        });
        assert_eq!(next.outs, 2);
        assert_eq!(next.bases, BaseOccupancy::Loaded);
        assert_eq!(draws, 0);
    }

    #[test]
    fn test_single_without_extra_bases() {
        use BaseOccupancy::*;
        let config = SimConfig::default();
        let expected = [
            (Empty, First, 0),
            (First, FirstSecond, 0),
            (Second, FirstThird, 0),
            (Third, First, 1),
            (FirstSecond, Loaded, 0),
            (FirstThird, FirstSecond, 1),
            (SecondThird, FirstThird, 1),
            (Loaded, Loaded, 1),
        ];
        for (before, after, runs) in expected {
            let (advance, _) = run(&config, &[NEVER, NEVER], |r| r.single(before));
            assert_eq!(advance, Advance::new(after, runs), "{before}");
        }
    }

    #[test]
    fn test_single_with_every_extra_base() {
        use BaseOccupancy::*;
        let config = SimConfig::default();
        let expected = [
            (Empty, First, 0),
            (First, FirstThird, 0),
            (Second, First, 1),
            (Third, First, 1),
            (FirstSecond, FirstThird, 1),
            (FirstThird, FirstThird, 1),
            (SecondThird, First, 2),
            (Loaded, FirstThird, 2),
        ];
        for (before, after, runs) in expected {
            let (advance, _) = run(&config, &[ALWAYS, ALWAYS], |r| r.single(before));
            assert_eq!(advance, Advance::new(after, runs), "{before}");
        }
    }

    #[test]
    fn test_single_first_to_third_only_after_lead_runner_scores() {
        let config = SimConfig::default();
        // lead runner held at third: trailing runner is not given a draw
        let (advance, draws) = run(&config, &[NEVER, ALWAYS], |r| {
            r.single(BaseOccupancy::FirstSecond)
        });
        assert_eq!(advance, Advance::new(BaseOccupancy::Loaded, 0));
        assert_eq!(draws, 1);

        // lead runner scores, trailing runner stops at second
        let (advance, draws) = run(&config, &[ALWAYS, NEVER], |r| {
            r.single(BaseOccupancy::FirstSecond)
        });
        assert_eq!(advance, Advance::new(BaseOccupancy::FirstSecond, 1));
        assert_eq!(draws, 2);
    }

    #[test]
    fn test_double_table() {
        use BaseOccupancy::*;
        let config = SimConfig::default();
        let held = [
            (Empty, Second, 0),
            (First, SecondThird, 0),
            (Second, Second, 1),
            (Third, Second, 1),
            (FirstSecond, SecondThird, 1),
            (FirstThird, SecondThird, 1),
            (SecondThird, Second, 2),
            (Loaded, SecondThird, 2),
        ];
        for (before, after, runs) in held {
            let (advance, _) = run(&config, &[NEVER], |r| r.double(before));
            assert_eq!(advance, Advance::new(after, runs), "{before}");
        }

        let (advance, _) = run(&config, &[ALWAYS], |r| r.double(Loaded));
        assert_eq!(advance, Advance::new(Second, 3));
        let (advance, _) = run(&config, &[ALWAYS], |r| r.double(First));
        assert_eq!(advance, Advance::new(Second, 1));
    }

    #[test]
    fn test_hits_conserve_runners_for_every_decision() {
        let config = SimConfig::default();
        for bases in BaseOccupancy::ALL {
            for first in [ALWAYS, NEVER] {
                for second in [ALWAYS, NEVER] {
                    let (single, _) = run(&config, &[first, second], |r| r.single(bases));
                    let (double, _) = run(&config, &[first, second], |r| r.double(bases));
                    for advance in [single, double] {
                        assert_eq!(
                            advance.bases.runners() + advance.runs,
                            bases.runners() + 1,
                            "{bases}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_walk_and_home_run_through_resolve() {
        let config = SimConfig::default();
        let (next, draws) = run(&config, &[], |r| {
            r.resolve(on(BaseOccupancy::Loaded, 2), Outcome::HomeRun)
        });
        assert_eq!(next.score, 4);
        assert!(next.bases.is_empty());
        assert_eq!(next.outs, 2);
        assert_eq!(draws, 0);

        let (next, _) = run(&config, &[], |r| {
            r.resolve(on(BaseOccupancy::Loaded, 0), Outcome::Walk)
        });
        assert_eq!(next.score, 1);
        assert_eq!(next.bases, BaseOccupancy::Loaded);
    }

    #[test]
    fn test_in_play_out_bases_empty_draws_nothing() {
        let config = SimConfig::default();
        let (next, draws) = run(&config, &[ALWAYS], |r| {
            r.in_play_out(on(BaseOccupancy::Empty, 0))
        });
        assert_eq!(next.outs, 1);
        assert_eq!(draws, 0);
    }

    #[test]
    fn test_in_play_out_third_out_ends_play() {
        let config = SimConfig::default();
        let (next, draws) = run(&config, &[ALWAYS], |r| {
            r.in_play_out(on(BaseOccupancy::Third, 2))
        });
        assert_eq!(next.outs, 3);
        assert_eq!(next.score, 0);
        assert_eq!(next.bases, BaseOccupancy::Third);
        assert_eq!(draws, 0);
    }

    #[test]
    fn test_in_play_out_bands() {
        let config = SimConfig::default()
            .with_advance_on_out(0.2)
            .with_double_play(0.4);
        let start = on(BaseOccupancy::FirstThird, 0);

        // sacrifice band
        let (next, _) = run(&config, &[0.1], |r| r.in_play_out(start));
        assert_eq!(next.outs, 1);
        assert_eq!(next.score, 1);
        assert_eq!(next.bases, BaseOccupancy::Second);

        // double play band
        let (next, _) = run(&config, &[0.5], |r| r.in_play_out(start));
        assert_eq!(next.outs, 2);
        assert_eq!(next.score, 1);
        assert!(next.bases.is_empty());

        // nothing else happens
        let (next, _) = run(&config, &[0.7], |r| r.in_play_out(start));
        assert_eq!(next.outs, 1);
        assert_eq!(next.bases, BaseOccupancy::FirstThird);
    }

    #[test]
    fn test_double_play_empty_bases_is_noop() {
        let config = SimConfig::default();
        let state = on(BaseOccupancy::Empty, 1);
        let (next, _) = run(&config, &[], |r| r.double_play(state));
        assert_eq!(next, state);
    }

    #[test]
    fn test_double_play_run_gated_by_third_out() {
        let config = SimConfig::default();
        let (next, _) = run(&config, &[], |r| {
            r.double_play(on(BaseOccupancy::FirstThird, 1))
        });
        assert_eq!(next.outs, 2);
        assert_eq!(next.score, 1);

        let (next, _) = run(&config, &[], |r| {
            r.double_play(on(BaseOccupancy::FirstThird, 2))
        });
        assert_eq!(next.outs, 3);
        assert_eq!(next.score, 0);
    }

    #[test]
    fn test_double_play_after_third_out_is_noop() {
        let config = SimConfig::default();
        let state = on(BaseOccupancy::Loaded, 3);
        let (next, _) = run(&config, &[], |r| r.double_play(state));
        assert_eq!(next, state);

        let state = on(BaseOccupancy::FirstThird, 3);
        let (next, _) = run(&config, &[], |r| r.double_play(state));
        assert_eq!(next.score, 0);
        assert_eq!(next.bases, BaseOccupancy::FirstThird);
    }

    #[test]
    fn test_sacrifice_advance_after_third_out_is_noop() {
        let config = SimConfig::default();
        let state = on(BaseOccupancy::Third, 3);
        let (next, _) = run(&config, &[], |r| r.sacrifice_advance(state));
        assert_eq!(next, state);
        assert_eq!(next.score, 0);
    }

    #[test]
    fn test_sacrifice_advance_scores_from_third() {
        let config = SimConfig::default();
        let (next, _) = run(&config, &[], |r| {
            r.sacrifice_advance(on(BaseOccupancy::Third, 1))
        });
        assert_eq!(next.score, 1);
        assert!(next.bases.is_empty());
    }

    #[test]
    fn test_double_play_loaded() {
        let config = SimConfig::default();
        let (next, _) = run(&config, &[], |r| {
            r.double_play(on(BaseOccupancy::Loaded, 1))
        });
        assert_eq!(next.outs, 2);
        assert_eq!(next.bases, BaseOccupancy::SecondThird);
        assert_eq!(next.score, 0);
    }

    #[test]
    fn test_steal_second() {
        let config = SimConfig::default();
        let (next, draws) = run(&config, &[ALWAYS, NEVER], |r| {
            r.attempt_steals(on(BaseOccupancy::First, 0))
        });
        assert_eq!(next.bases, BaseOccupancy::Second);
        // steal of third is then attempted too
        assert_eq!(draws, 2);
    }

    #[test]
    fn test_double_steal() {
        let config = SimConfig::default();
        let (next, draws) = run(&config, &[ALWAYS, NEVER], |r| {
            r.attempt_steals(on(BaseOccupancy::FirstSecond, 0))
        });
        assert_eq!(next.bases, BaseOccupancy::SecondThird);
        assert_eq!(draws, 2);
    }

    #[test]
    fn test_steal_chain_all_the_way_home() {
        let config = SimConfig::default();
        let (next, draws) = run(&config, &[ALWAYS, ALWAYS, ALWAYS], |r| {
            r.attempt_steals(on(BaseOccupancy::First, 0))
        });
        assert_eq!(next.score, 1);
        assert!(next.bases.is_empty());
        assert_eq!(draws, 3);
    }

    #[test]
    fn test_blocked_steals_draw_nothing() {
        let config = SimConfig::default().with_steals(1.0, 1.0, 0.0);
        let (next, draws) = run(&config, &[], |r| {
            r.attempt_steals(on(BaseOccupancy::Loaded, 0))
        });
        // only the steal of home is checked
        assert_eq!(draws, 1);
        assert_eq!(next.bases, BaseOccupancy::Loaded);
        assert_eq!(next.score, 0);
    }

    #[test]
    fn test_narration_records_events() {
        let config = SimConfig::default();
        let mut rng = ScriptedRandomness::new([ALWAYS]);
        let mut log: Vec<PlayEvent> = Vec::new();
        {
            let mut rules = BaseState::new(&config, &mut rng, &mut log);
            let state = rules.attempt_steals(on(BaseOccupancy::Third, 0));
            rules.resolve(state, Outcome::Triple);
        }
        assert_eq!(
            log,
            vec![
                PlayEvent::StealHome,
                PlayEvent::PlateAppearance {
                    outcome: Outcome::Triple,
                    runs: 0
                },
            ]
        );
    }
}
