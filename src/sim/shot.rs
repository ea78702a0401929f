//! Projectile flight
//!
//! Discrete per-step integration in canvas coordinates (y grows downward).
//! A shot is a tiny state machine: flying until it either strikes the
//! ground or leaves the field through a side edge. Ground impact carves
//! its crater before the landing is reported, so callers always classify
//! against already-deformed terrain.

use glam::Vec2;

use super::terrain::Terrain;
use crate::consts::{CRATER_RADIUS, MAX_FLIGHT_STEPS, WIND_COUPLING};

/// Which side of the field the shot leaves from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FiringSide {
    Left,
    Right,
}

/// Where a shot came to rest
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Landing {
    /// Struck terrain inside the field; the crater is already carved
    Ground { x: f32, y: f32 },
    /// Left through the left or right edge
    OffField { x: f32, y: f32 },
}

impl Landing {
    /// Final horizontal coordinate, however the flight ended
    pub fn x(&self) -> f32 {
        match *self {
            Landing::Ground { x, .. } | Landing::OffField { x, .. } => x,
        }
    }
}

/// The flight loop ran past its step cap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlightOverrun;

/// In-flight projectile state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projectile {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Projectile {
    /// Aim from the horizontal, opening toward the opponent: a right-side
    /// firer mirrors the angle, so 0 degrees points at the other tank and
    /// 90 degrees is straight up for both players.
    pub fn launch(origin: Vec2, angle_deg: f32, power: f32, side: FiringSide) -> Self {
        let theta = match side {
            FiringSide::Left => angle_deg.to_radians(),
            FiringSide::Right => (180.0 - angle_deg).to_radians(),
        };
        Self {
            pos: origin,
            vel: Vec2::new(power * theta.cos(), -power * theta.sin()),
        }
    }

    /// One integration step: wind couples into vx by sign agreement, then
    /// position advances, then gravity. The sign branch is load-bearing; a
    /// tailwind compounds every step.
    pub fn step(&mut self, wind: f32, gravity: f32) {
        if (self.vel.x >= 0.0) == (wind >= 0.0) {
            self.vel.x += wind * WIND_COUPLING;
        } else {
            self.vel.x -= wind * WIND_COUPLING;
        }
        self.pos += self.vel;
        self.vel.y += gravity;
    }
}

/// Fly a projectile to termination, deforming `terrain` on ground impact.
///
/// Termination is checked after every step: out either side edge first,
/// then ground contact. The step cap turns a pathological flight into a
/// recoverable error instead of a hang.
pub fn fly(
    projectile: &mut Projectile,
    terrain: &mut Terrain,
    wind: i32,
    gravity: f32,
) -> Result<Landing, FlightOverrun> {
    let right_edge = terrain.width() as f32;
    for _ in 0..MAX_FLIGHT_STEPS {
        projectile.step(wind as f32, gravity);
        let Vec2 { x, y } = projectile.pos;
        if x < 0.0 || x > right_edge {
            return Ok(Landing::OffField { x, y });
        }
        if let Some(surface) = terrain.sample(x) {
            if y > surface {
                terrain.crater(x.round() as usize, CRATER_RADIUS);
                return Ok(Landing::Ground { x, y });
            }
        }
    }
    Err(FlightOverrun)
}
