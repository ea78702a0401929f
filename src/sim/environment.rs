//! Biome selection and terrain shaping parameters
//!
//! A biome is a visual theme plus the noise profile that shapes its
//! skyline. One is drawn uniformly at random per round and stays fixed
//! until the next round reset.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Visual and terrain-shape theme for one round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Biome {
    Grass,
    Desert,
    Jungle,
    Mountain,
}

/// Render colors for a biome (hex, consumed by the presentation layer)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub sky: &'static str,
    pub terrain: &'static str,
    pub terrain_detail: &'static str,
    pub cloud: &'static str,
}

/// Skyline noise profile:
/// `height = base + sin(i / wavelength) * amplitude * c + uniform(0, jitter) * c - bias`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TerrainProfile {
    pub amplitude: f32,
    pub wavelength: f32,
    pub jitter: f32,
    pub bias: f32,
}

impl Biome {
    pub const ALL: [Biome; 4] = [Biome::Grass, Biome::Desert, Biome::Jungle, Biome::Mountain];

    /// Uniform biome draw for a new round
    pub fn roll(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Biome::Grass => "grass",
            Biome::Desert => "desert",
            Biome::Jungle => "jungle",
            Biome::Mountain => "mountain",
        }
    }

    pub fn palette(&self) -> Palette {
        match self {
            Biome::Grass => Palette {
                sky: "#87CEEB",
                terrain: "#8BC34A",
                terrain_detail: "#689F38",
                cloud: "#FFFFFF",
            },
            Biome::Desert => Palette {
                sky: "#FFB74D",
                terrain: "#FFD54F",
                terrain_detail: "#FFA000",
                cloud: "#FFE0B2",
            },
            Biome::Jungle => Palette {
                sky: "#4CAF50",
                terrain: "#2E7D32",
                terrain_detail: "#1B5E20",
                cloud: "#A5D6A7",
            },
            Biome::Mountain => Palette {
                sky: "#90CAF9",
                terrain: "#78909C",
                terrain_detail: "#546E7A",
                cloud: "#ECEFF1",
            },
        }
    }

    /// Noise constants shaping this biome's skyline. Mountains swell the
    /// hardest, deserts ripple on the shortest wavelength.
    pub fn terrain_profile(&self) -> TerrainProfile {
        match self {
            Biome::Grass => TerrainProfile {
                amplitude: 30.0,
                wavelength: 50.0,
                jitter: 20.0,
                bias: 10.0,
            },
            Biome::Desert => TerrainProfile {
                amplitude: 40.0,
                wavelength: 30.0,
                jitter: 30.0,
                bias: 15.0,
            },
            Biome::Jungle => TerrainProfile {
                amplitude: 50.0,
                wavelength: 40.0,
                jitter: 25.0,
                bias: 12.0,
            },
            Biome::Mountain => TerrainProfile {
                amplitude: 100.0,
                wavelength: 60.0,
                jitter: 40.0,
                bias: 20.0,
            },
        }
    }
}
