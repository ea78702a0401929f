//! Read-only view for the presentation layer
//!
//! The core owns no drawing: each frame the renderer captures a
//! [`Snapshot`] and draws from it. Serializable, so an out-of-process
//! frontend can consume the same view as JSON.

use serde::Serialize;

use crate::sim::environment::{Biome, Palette};
use crate::sim::state::{MatchPhase, MatchResult, MatchState, PlayerId};

/// A combatant's render position; y is derived from the terrain
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TankPos {
    pub x: usize,
    pub y: f32,
}

/// Match status, flattened for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Status {
    /// Waiting on the numbered player's input
    Turn(u8),
    /// The computer is lining up its shot
    ComputerThinking,
    /// The numbered player took the match
    Won(u8),
    Draw,
}

/// Everything the presentation layer needs for one frame
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot<'a> {
    pub terrain: &'a [f32],
    pub biome: Biome,
    pub palette: Palette,
    pub wind: i32,
    pub status: Status,
    pub score: (u32, u32),
    pub round: u32,
    pub max_rounds: Option<u32>,
    pub time_remaining: Option<f32>,
    pub tanks: [TankPos; 2],
    pub max_power: f32,
}

impl<'a> Snapshot<'a> {
    /// Capture the current frame's view of a match.
    pub fn of(state: &'a MatchState) -> Self {
        let terrain = state.round.terrain.heights();
        let p1 = state.position_of(PlayerId::One);
        let p2 = state.position_of(PlayerId::Two);
        Self {
            terrain,
            biome: state.round.biome,
            palette: state.round.biome.palette(),
            wind: state.round.wind,
            status: match state.phase {
                MatchPhase::AwaitingInput => Status::Turn(state.turn.index()),
                MatchPhase::ComputerThinking { .. } => Status::ComputerThinking,
                MatchPhase::Over(MatchResult::Winner(winner)) => Status::Won(winner.index()),
                MatchPhase::Over(MatchResult::Draw) => Status::Draw,
            },
            score: (state.score.player1, state.score.player2),
            round: state.round_number,
            max_rounds: state.max_rounds,
            time_remaining: state.time_remaining,
            tanks: [
                TankPos { x: p1, y: terrain[p1] },
                TankPos { x: p2, y: terrain[p2] },
            ],
            max_power: state.difficulty.max_power(),
        }
    }
}
