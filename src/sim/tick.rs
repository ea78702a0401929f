//! Turn resolution and match flow
//!
//! `fire` resolves a whole shot synchronously and reports a typed verdict
//! the caller pattern-matches on; `tick` advances the only two time-driven
//! behaviors, the quick-mode clock and the computer's thinking delay.
//! Nothing blocks, and no path leaves the match without a current turn.

use std::fmt;

use glam::Vec2;

use super::ai;
use super::shot::{self, FiringSide, Landing, Projectile};
use super::state::{MatchPhase, MatchResult, MatchState, PlayerId};
use crate::consts::{AI_THINK_SECONDS, HIT_TOLERANCE, TOURNAMENT_TARGET_WINS};
use crate::settings::GameMode;

/// A rejected fire call
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FireError {
    /// Angle or power outside the valid input ranges
    InvalidShotParameters { angle: f32, power: f32 },
    /// The machine is not waiting for input (computer thinking, match over,
    /// or the computer's own turn)
    NotAwaitingInput,
}

impl fmt::Display for FireError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FireError::InvalidShotParameters { angle, power } => {
                write!(f, "invalid shot parameters: angle {angle}, power {power}")
            }
            FireError::NotAwaitingInput => write!(f, "not awaiting input"),
        }
    }
}

impl std::error::Error for FireError {}

/// Match-level meaning of a resolved shot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Missed; play passes to the other side
    Miss { next_turn: PlayerId },
    /// Round taken; the next round has already been set up
    RoundWon { winner: PlayerId },
    /// Match over
    MatchWon { winner: PlayerId },
    /// Quick-mode clock ran out with the score level
    MatchDrawn,
}

/// A resolved shot: who fired, where it ended, what it meant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShotReport {
    pub shooter: PlayerId,
    pub landing: Landing,
    pub verdict: Verdict,
}

/// Something `tick` made happen
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickEvent {
    /// The computer's scheduled shot resolved
    ComputerShot(ShotReport),
    /// The quick-mode clock expired at a round boundary
    TimeUp(Verdict),
}

/// Fire the current player's shot.
///
/// Validation failures reject the call without touching turn state. A
/// valid shot always resolves to a verdict, even when the flight itself
/// fails; a failed flight is logged and scored as a miss so the match can
/// never wedge.
pub fn fire(state: &mut MatchState, angle: f32, power: f32) -> Result<ShotReport, FireError> {
    if !matches!(state.phase, MatchPhase::AwaitingInput) {
        log::warn!("fire ignored: machine is not awaiting input");
        return Err(FireError::NotAwaitingInput);
    }
    if state.mode.computer_opponent() && state.turn == PlayerId::Two {
        // The computer's shot arrives through tick, never through fire
        log::warn!("fire ignored: it is the computer's turn");
        return Err(FireError::NotAwaitingInput);
    }
    let max_power = state.difficulty.max_power();
    if !(0.0..=90.0).contains(&angle) || !(0.0..=max_power).contains(&power) {
        log::warn!("rejected shot: angle {angle}, power {power} (max {max_power})");
        return Err(FireError::InvalidShotParameters { angle, power });
    }
    Ok(resolve_shot(state, angle, power))
}

/// Advance the quick-mode clock and the computer's thinking delay.
///
/// Clock expiry only takes effect at a round boundary: a pending computer
/// shot still resolves, and the time-up result lands on a later call once
/// the machine is back to awaiting input.
pub fn tick(state: &mut MatchState, dt: f32) -> Option<TickEvent> {
    if let Some(t) = state.time_remaining.as_mut() {
        *t = (*t - dt).max(0.0);
    }

    match state.phase {
        MatchPhase::ComputerThinking { remaining } => {
            let remaining = remaining - dt;
            if remaining > 0.0 {
                state.phase = MatchPhase::ComputerThinking { remaining };
                return None;
            }
            Some(TickEvent::ComputerShot(computer_shot(state)))
        }
        MatchPhase::AwaitingInput if state.time_expired() => {
            Some(TickEvent::TimeUp(conclude_on_score(state)))
        }
        _ => None,
    }
}

/// Resolve a validated shot for the current player.
fn resolve_shot(state: &mut MatchState, angle: f32, power: f32) -> ShotReport {
    // The computer path arrives here still in ComputerThinking
    state.phase = MatchPhase::AwaitingInput;
    let shooter = state.turn;
    let origin_x = state.position_of(shooter);
    let origin = Vec2::new(origin_x as f32, state.round.terrain.height_at(origin_x));
    let side = match shooter {
        PlayerId::One => FiringSide::Left,
        PlayerId::Two => FiringSide::Right,
    };
    let mut projectile = Projectile::launch(origin, angle, power, side);

    let gravity = state.difficulty.gravity();
    let wind = state.round.wind;
    let landing = match shot::fly(&mut projectile, &mut state.round.terrain, wind, gravity) {
        Ok(landing) => landing,
        Err(_) => {
            // A runaway flight must not wedge the match: force the turn over
            log::error!("flight aborted after step limit; forcing the turn over");
            let verdict = advance_turn(state);
            return ShotReport {
                shooter,
                landing: Landing::OffField {
                    x: projectile.pos.x,
                    y: projectile.pos.y,
                },
                verdict,
            };
        }
    };

    let target_x = state.position_of(shooter.opponent()) as f32;
    let verdict = if is_direct_hit(landing.x(), target_x) {
        score_round(state, shooter)
    } else {
        advance_turn(state)
    };
    log::info!(
        "player {} landed at x {:.1}: {verdict:?}",
        shooter.index(),
        landing.x()
    );
    ShotReport {
        shooter,
        landing,
        verdict,
    }
}

/// Direct hit: inside the tolerance band around the opponent, inclusive.
/// The final x counts however the flight terminated, so a shot that exits
/// the field at the opponent's column still connects.
fn is_direct_hit(landing_x: f32, opponent_x: f32) -> bool {
    (landing_x - opponent_x).abs() <= HIT_TOLERANCE
}

/// Miss path: flip the turn, redraw the wind, schedule the computer.
fn advance_turn(state: &mut MatchState) -> Verdict {
    let next = state.turn.opponent();
    state.turn = next;
    state.roll_wind();
    if state.mode.computer_opponent() && next == PlayerId::Two {
        state.phase = MatchPhase::ComputerThinking {
            remaining: AI_THINK_SECONDS,
        };
    }
    Verdict::Miss { next_turn: next }
}

/// Hit path: credit the round and work out what it means for the match.
fn score_round(state: &mut MatchState, winner: PlayerId) -> Verdict {
    state.score.add_win(winner);
    if state.mode.sudden_death() {
        return conclude(state, MatchResult::Winner(winner));
    }
    if state.mode == GameMode::Tournament && state.score.of(winner) >= TOURNAMENT_TARGET_WINS {
        return conclude(state, MatchResult::Winner(winner));
    }
    if state.time_expired() {
        // The quick-mode clock ran out while this shot was up
        return conclude_on_score(state);
    }
    next_round(state);
    Verdict::RoundWon { winner }
}

fn next_round(state: &mut MatchState) {
    state.round_number += 1;
    state.reset_round();
}

fn conclude(state: &mut MatchState, result: MatchResult) -> Verdict {
    state.phase = MatchPhase::Over(result);
    match result {
        MatchResult::Winner(winner) => {
            log::info!("match over: player {} wins", winner.index());
            Verdict::MatchWon { winner }
        }
        MatchResult::Draw => {
            log::info!("match over: draw");
            Verdict::MatchDrawn
        }
    }
}

fn conclude_on_score(state: &mut MatchState) -> Verdict {
    let result = match state.score.leader() {
        Some(winner) => MatchResult::Winner(winner),
        None => MatchResult::Draw,
    };
    conclude(state, result)
}

/// The computer's scheduled turn: estimate, then resolve like any shot.
fn computer_shot(state: &mut MatchState) -> ShotReport {
    let origin = state.position_of(PlayerId::Two) as f32;
    let target = state.position_of(PlayerId::One) as f32;
    let wind = state.round.wind;
    let gravity = state.difficulty.gravity();
    let difficulty = state.difficulty;
    let max_power = difficulty.max_power();
    let aim = ai::estimate_shot(
        origin,
        target,
        wind,
        gravity,
        difficulty,
        max_power,
        state.rng_mut(),
    );
    log::debug!("computer aims angle {:.1}, power {:.1}", aim.angle, aim.power);
    resolve_shot(state, aim.angle, aim.power)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Difficulty;
    use crate::sim::environment::Biome;
    use crate::sim::state::Round;
    use crate::sim::terrain::Terrain;

    fn flat_round(wind: i32, player1_x: usize, player2_x: usize) -> Round {
        Round {
            biome: Biome::Grass,
            terrain: Terrain::flat(300.0),
            wind,
            player1_x,
            player2_x,
        }
    }

    #[test]
    fn test_hit_tolerance_inclusive_at_twenty() {
        assert!(is_direct_hit(820.0, 800.0));
        assert!(is_direct_hit(780.0, 800.0));
        assert!(!is_direct_hit(821.0, 800.0));
        assert!(!is_direct_hit(779.0, 800.0));
    }

    #[test]
    fn test_invalid_parameters_leave_state_untouched() {
        let mut state = MatchState::new(GameMode::TwoPlayers, Difficulty::Medium, 4);
        let turn_before = state.turn;
        let wind_before = state.round.wind;

        assert!(matches!(
            fire(&mut state, 95.0, 50.0),
            Err(FireError::InvalidShotParameters { .. })
        ));
        assert!(matches!(
            fire(&mut state, -1.0, 50.0),
            Err(FireError::InvalidShotParameters { .. })
        ));
        assert!(matches!(
            fire(&mut state, 45.0, 100.5),
            Err(FireError::InvalidShotParameters { .. })
        ));

        assert_eq!(state.turn, turn_before);
        assert_eq!(state.round.wind, wind_before);
        assert_eq!(state.phase, MatchPhase::AwaitingInput);
    }

    #[test]
    fn test_fire_rejected_while_computer_thinks() {
        let mut state = MatchState::new(GameMode::VsComputer, Difficulty::Medium, 4);
        state.phase = MatchPhase::ComputerThinking { remaining: 0.5 };
        assert_eq!(
            fire(&mut state, 45.0, 30.0),
            Err(FireError::NotAwaitingInput)
        );
    }

    #[test]
    fn test_fire_rejected_after_match_over() {
        let mut state = MatchState::new(GameMode::Classic, Difficulty::Medium, 4);
        state.phase = MatchPhase::Over(MatchResult::Winner(PlayerId::One));
        assert_eq!(
            fire(&mut state, 45.0, 30.0),
            Err(FireError::NotAwaitingInput)
        );
    }

    #[test]
    fn test_miss_flips_turn() {
        let mut state = MatchState::new(GameMode::TwoPlayers, Difficulty::Medium, 4);
        state.round = flat_round(0, 100, 800);
        // Straight up: lands back near the firer, far from the opponent
        let report = fire(&mut state, 90.0, 30.0).unwrap();
        assert_eq!(
            report.verdict,
            Verdict::Miss {
                next_turn: PlayerId::Two
            }
        );
        assert_eq!(state.turn, PlayerId::Two);
        assert_eq!(state.phase, MatchPhase::AwaitingInput);
    }

    #[test]
    fn test_miss_schedules_computer_turn() {
        let mut state = MatchState::new(GameMode::VsComputer, Difficulty::Medium, 4);
        state.round = flat_round(0, 100, 800);
        let report = fire(&mut state, 90.0, 30.0).unwrap();
        assert!(matches!(report.verdict, Verdict::Miss { .. }));
        assert!(matches!(
            state.phase,
            MatchPhase::ComputerThinking { .. }
        ));
        // Still thinking after half the delay
        assert!(tick(&mut state, 0.5).is_none());
        // The scheduled shot matures
        match tick(&mut state, 0.6) {
            Some(TickEvent::ComputerShot(report)) => assert_eq!(report.shooter, PlayerId::Two),
            other => panic!("expected the computer's shot, got {other:?}"),
        }
        // Whatever happened, the machine is in a playable phase
        assert!(!matches!(state.phase, MatchPhase::ComputerThinking { .. }));
    }
}
