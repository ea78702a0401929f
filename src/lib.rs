//! Barrage - a two-player artillery duel core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (terrain, trajectory, turn machine)
//! - `settings`: Difficulty table and game-mode selection
//! - `snapshot`: Read-only per-frame view for the presentation layer
//!
//! The crate owns no rendering or input handling. A presentation layer
//! reads [`snapshot::Snapshot`] each frame and drives the core through
//! [`sim::fire`] and [`sim::tick`].

pub mod settings;
pub mod sim;
pub mod snapshot;

pub use settings::{Difficulty, GameMode};
pub use sim::{MatchState, fire, tick};

/// Game configuration constants
pub mod consts {
    /// Field width in pixel columns
    pub const FIELD_WIDTH: usize = 1000;
    /// Field height in pixels (canvas coordinates, y grows downward)
    pub const FIELD_HEIGHT: f32 = 500.0;
    /// Baseline terrain elevation before biome shaping
    pub const BASE_ELEVATION: f32 = 300.0;

    /// Direct-hit tolerance around the opponent's column (inclusive)
    pub const HIT_TOLERANCE: f32 = 20.0;
    /// Crater radius carved on ground impact
    pub const CRATER_RADIUS: usize = 20;
    /// Height added to each cratered column per impact
    pub const CRATER_DEPTH: f32 = 10.0;

    /// Wind-to-horizontal-velocity coupling per flight step
    pub const WIND_COUPLING: f32 = 0.2;
    /// Flight step cap before a shot is abandoned as failed
    pub const MAX_FLIGHT_STEPS: u32 = 100_000;

    /// Player 1 spawns in [LEFT_SPAWN_MIN, LEFT_SPAWN_MIN + SPAWN_BAND)
    pub const LEFT_SPAWN_MIN: usize = 50;
    /// Player 2 spawns in [RIGHT_SPAWN_MIN, RIGHT_SPAWN_MIN + SPAWN_BAND)
    pub const RIGHT_SPAWN_MIN: usize = FIELD_WIDTH - SPAWN_BAND;
    /// Width of each spawn band, a quarter of the field
    pub const SPAWN_BAND: usize = FIELD_WIDTH / 4;

    /// Seconds the computer "thinks" before its scheduled shot
    pub const AI_THINK_SECONDS: f32 = 1.0;
    /// Linear wind correction in the computer's power estimate
    pub const AI_WIND_CORRECTION: f32 = 0.1;
    /// Floor of the computer's power estimate
    pub const AI_MIN_POWER: f32 = 10.0;
    /// Half-range of the jitter applied to the computer's estimate
    pub const AI_JITTER: f32 = 5.0;

    /// Quick-mode match clock in seconds
    pub const QUICK_MATCH_SECONDS: f32 = 60.0;
    /// Round wins that take a tournament match
    pub const TOURNAMENT_TARGET_WINS: u32 = 2;
    /// Tournament round cap shown as `current/max`
    pub const TOURNAMENT_MAX_ROUNDS: u32 = 3;
}
