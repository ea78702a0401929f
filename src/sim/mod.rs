//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Per-step physics with fixed deltas only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod ai;
pub mod environment;
pub mod shot;
pub mod state;
pub mod terrain;
pub mod tick;

pub use ai::{AimEstimate, estimate_shot};
pub use environment::{Biome, Palette, TerrainProfile};
pub use shot::{FiringSide, FlightOverrun, Landing, Projectile, fly};
pub use state::{MatchPhase, MatchResult, MatchState, PlayerId, Round, Score, roll_wind};
pub use terrain::Terrain;
pub use tick::{FireError, ShotReport, TickEvent, Verdict, fire, tick};
