//! Match and round state
//!
//! All mutable game state lives in one aggregate; no ambient globals. The
//! round-scoped pieces (biome, terrain, wind, combatant columns) are
//! replaced wholesale on every round reset, never patched in place.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::environment::Biome;
use super::terrain::Terrain;
use crate::consts::{
    LEFT_SPAWN_MIN, QUICK_MATCH_SECONDS, RIGHT_SPAWN_MIN, SPAWN_BAND, TOURNAMENT_MAX_ROUNDS,
};
use crate::settings::{Difficulty, GameMode};

/// One of the two combatants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    pub fn opponent(&self) -> PlayerId {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// 1-based index for display
    pub fn index(&self) -> u8 {
        match self {
            PlayerId::One => 1,
            PlayerId::Two => 2,
        }
    }
}

/// Round wins per player
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub player1: u32,
    pub player2: u32,
}

impl Score {
    pub fn add_win(&mut self, winner: PlayerId) {
        match winner {
            PlayerId::One => self.player1 += 1,
            PlayerId::Two => self.player2 += 1,
        }
    }

    pub fn of(&self, player: PlayerId) -> u32 {
        match player {
            PlayerId::One => self.player1,
            PlayerId::Two => self.player2,
        }
    }

    /// Leader on points, `None` when level
    pub fn leader(&self) -> Option<PlayerId> {
        match self.player1.cmp(&self.player2) {
            std::cmp::Ordering::Greater => Some(PlayerId::One),
            std::cmp::Ordering::Less => Some(PlayerId::Two),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// How a finished match ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchResult {
    Winner(PlayerId),
    Draw,
}

/// What the state machine is waiting on
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MatchPhase {
    /// Ready for the current player's fire call
    AwaitingInput,
    /// Computer turn scheduled; it fires once the delay runs out
    ComputerThinking { remaining: f32 },
    /// Match concluded; only a fresh match starts play again
    Over(MatchResult),
}

/// Round-scoped state, replaced on every reset
#[derive(Debug, Clone)]
pub struct Round {
    pub biome: Biome,
    pub terrain: Terrain,
    pub wind: i32,
    pub player1_x: usize,
    pub player2_x: usize,
}

impl Round {
    /// Fresh biome, skyline, spawn columns and wind for one round.
    fn generate(difficulty: Difficulty, rng: &mut Pcg32) -> Self {
        let biome = Biome::roll(rng);
        let terrain = Terrain::generate(biome, difficulty.terrain_complexity(), rng);
        let player1_x = LEFT_SPAWN_MIN + rng.random_range(0..SPAWN_BAND);
        let player2_x = RIGHT_SPAWN_MIN + rng.random_range(0..SPAWN_BAND);
        let wind = roll_wind(difficulty.max_wind(), rng);
        log::debug!(
            "round setup: {} biome, wind {wind}, tanks at {player1_x}/{player2_x}",
            biome.as_str()
        );
        Self {
            biome,
            terrain,
            wind,
            player1_x,
            player2_x,
        }
    }
}

/// Whole-match aggregate
#[derive(Debug, Clone)]
pub struct MatchState {
    seed: u64,
    rng: Pcg32,
    pub mode: GameMode,
    pub difficulty: Difficulty,
    pub phase: MatchPhase,
    pub turn: PlayerId,
    pub score: Score,
    pub round_number: u32,
    /// Round cap for the `current/max` display; `None` in open-ended modes
    pub max_rounds: Option<u32>,
    /// Quick-mode clock in seconds; `None` in untimed modes
    pub time_remaining: Option<f32>,
    pub round: Round,
}

impl MatchState {
    /// Start a match with the given mode, difficulty and RNG seed.
    pub fn new(mode: GameMode, difficulty: Difficulty, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let round = Round::generate(difficulty, &mut rng);
        log::info!(
            "new {} match, {} difficulty, seed {seed}",
            mode.as_str(),
            difficulty.as_str()
        );
        Self {
            seed,
            rng,
            mode,
            difficulty,
            phase: MatchPhase::AwaitingInput,
            turn: PlayerId::One,
            score: Score::default(),
            round_number: 1,
            max_rounds: (mode == GameMode::Tournament).then_some(TOURNAMENT_MAX_ROUNDS),
            time_remaining: mode.timed().then_some(QUICK_MATCH_SECONDS),
            round,
        }
    }

    /// Seed this match was created with (for reproducing a run)
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Replace everything round-scoped and hand the turn back to player 1.
    pub fn reset_round(&mut self) {
        self.round = Round::generate(self.difficulty, &mut self.rng);
        self.turn = PlayerId::One;
        if !matches!(self.phase, MatchPhase::Over(_)) {
            self.phase = MatchPhase::AwaitingInput;
        }
    }

    /// Switch difficulty; the new table takes effect through a round reset.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        log::info!("difficulty set to {}", difficulty.as_str());
        self.reset_round();
    }

    /// Redraw the wind after a completed shot.
    pub fn roll_wind(&mut self) {
        self.round.wind = roll_wind(self.difficulty.max_wind(), &mut self.rng);
    }

    /// Firing column of a player this round
    pub fn position_of(&self, player: PlayerId) -> usize {
        match player {
            PlayerId::One => self.round.player1_x,
            PlayerId::Two => self.round.player2_x,
        }
    }

    /// Quick-mode clock has run out
    pub fn time_expired(&self) -> bool {
        matches!(self.time_remaining, Some(t) if t <= 0.0)
    }

    pub(crate) fn rng_mut(&mut self) -> &mut Pcg32 {
        &mut self.rng
    }
}

/// Uniform wind draw in `[-max, +max]` inclusive
pub fn roll_wind(max: i32, rng: &mut impl Rng) -> i32 {
    rng.random_range(-max..=max)
}
