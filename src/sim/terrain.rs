//! Destructible terrain height-map
//!
//! One height per pixel column, in canvas coordinates: a larger value sits
//! lower on screen. The map is regenerated wholesale at round start and
//! afterwards mutated only by craters, which only ever deepen.

use rand::Rng;

use super::environment::Biome;
use crate::consts::{BASE_ELEVATION, CRATER_DEPTH, FIELD_HEIGHT, FIELD_WIDTH};

/// Column heights across the whole field
#[derive(Debug, Clone, PartialEq)]
pub struct Terrain {
    heights: Vec<f32>,
}

impl Terrain {
    /// Generate a fresh skyline for `biome` at the given complexity.
    ///
    /// Each column gets independent jitter on top of the biome sinusoid,
    /// no smoothing pass, so high complexity reads as jagged.
    pub fn generate(biome: Biome, complexity: f32, rng: &mut impl Rng) -> Self {
        let profile = biome.terrain_profile();
        let heights = (0..FIELD_WIDTH)
            .map(|i| {
                let swell = (i as f32 / profile.wavelength).sin() * profile.amplitude * complexity;
                let jitter = rng.random_range(0.0..profile.jitter) * complexity - profile.bias;
                (BASE_ELEVATION + swell + jitter).clamp(0.0, FIELD_HEIGHT)
            })
            .collect();
        Self { heights }
    }

    /// Uniform terrain at a fixed elevation (fixtures and demos)
    pub fn flat(height: f32) -> Self {
        Self {
            heights: vec![height.clamp(0.0, FIELD_HEIGHT); FIELD_WIDTH],
        }
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.heights.len()
    }

    /// Full height slice, one entry per column
    pub fn heights(&self) -> &[f32] {
        &self.heights
    }

    /// Stored height of an in-range column
    pub fn height_at(&self, col: usize) -> f32 {
        self.heights[col]
    }

    /// Height under an arbitrary x, rounded to the nearest column.
    /// `None` once x rounds past either edge.
    pub fn sample(&self, x: f32) -> Option<f32> {
        if x < -0.5 {
            return None;
        }
        self.heights.get(x.round() as usize).copied()
    }

    /// Carve a crater: every column strictly closer than `radius` to `x`
    /// sinks by a fixed depth, clamped to the field bottom.
    pub fn crater(&mut self, x: usize, radius: usize) {
        let lo = x.saturating_sub(radius);
        let hi = (x + radius).min(self.heights.len());
        for i in lo..hi {
            if x.abs_diff(i) < radius {
                self.heights[i] = (self.heights[i] + CRATER_DEPTH).min(FIELD_HEIGHT);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_generate_full_width_in_bounds() {
        let mut rng = Pcg32::seed_from_u64(99);
        for biome in Biome::ALL {
            let terrain = Terrain::generate(biome, 1.3, &mut rng);
            assert_eq!(terrain.width(), FIELD_WIDTH);
            assert!(
                terrain
                    .heights()
                    .iter()
                    .all(|h| (0.0..=FIELD_HEIGHT).contains(h))
            );
        }
    }

    #[test]
    fn test_crater_strict_radius() {
        let mut terrain = Terrain::flat(300.0);
        terrain.crater(500, 20);
        // Columns exactly at the radius stay put
        assert_eq!(terrain.height_at(480), 300.0);
        assert_eq!(terrain.height_at(520), 300.0);
        // Everything strictly inside sinks by the crater depth
        assert_eq!(terrain.height_at(481), 310.0);
        assert_eq!(terrain.height_at(500), 310.0);
        assert_eq!(terrain.height_at(519), 310.0);
    }

    #[test]
    fn test_crater_clamps_to_field_bottom() {
        let mut terrain = Terrain::flat(495.0);
        terrain.crater(100, 10);
        assert_eq!(terrain.height_at(100), FIELD_HEIGHT);
    }

    #[test]
    fn test_overlapping_craters_only_deepen() {
        let mut terrain = Terrain::flat(300.0);
        terrain.crater(500, 20);
        let before: Vec<f32> = terrain.heights().to_vec();
        terrain.crater(510, 20);
        for (after, before) in terrain.heights().iter().zip(&before) {
            assert!(after >= before);
        }
        // Overlap region took both passes
        assert_eq!(terrain.height_at(505), 320.0);
    }

    #[test]
    fn test_crater_at_field_edge() {
        let mut terrain = Terrain::flat(300.0);
        terrain.crater(5, 20);
        terrain.crater(995, 20);
        assert_eq!(terrain.height_at(0), 310.0);
        assert_eq!(terrain.height_at(999), 310.0);
    }

    #[test]
    fn test_sample_rounds_and_bounds() {
        let terrain = Terrain::flat(300.0);
        assert_eq!(terrain.sample(0.0), Some(300.0));
        assert_eq!(terrain.sample(999.4), Some(300.0));
        assert_eq!(terrain.sample(999.6), None);
        assert_eq!(terrain.sample(-1.0), None);
    }
}
