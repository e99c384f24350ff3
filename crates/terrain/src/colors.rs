//! Per-vertex color noise.
//!
//! Colors are uniform random RGB triples with no relation to height. The
//! buffer is sized from the actual vertex count.

use bevy::prelude::*;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// One RGB triple per terrain vertex, components in `[0, 1]`.
#[derive(Resource, Debug, Clone, PartialEq, Default)]
pub struct VertexColors(pub Vec<[f32; 3]>);

impl VertexColors {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// RGBA copy with opaque alpha, the layout the color vertex attribute
    /// expects.
    pub fn to_rgba(&self) -> Vec<[f32; 4]> {
        self.0.iter().map(|&[r, g, b]| [r, g, b, 1.0]).collect()
    }
}

pub fn build_vertex_colors<R: Rng + ?Sized>(count: usize, rng: &mut R) -> VertexColors {
    let mut channel = || -> f32 { rng.gen_range(0.0..=1.0) };
    VertexColors((0..count).map(|_| [channel(), channel(), channel()]).collect())
}

/// Colors for `count` vertices from a ChaCha8 stream seeded with `seed`.
pub fn seeded_vertex_colors(count: usize, seed: u64) -> VertexColors {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    build_vertex_colors(count, &mut rng)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_matches_count() {
        for count in [0, 1, 4, 10_201] {
            assert_eq!(seeded_vertex_colors(count, 1).len(), count);
        }
        assert!(seeded_vertex_colors(0, 1).is_empty());
    }

    #[test]
    fn test_components_in_unit_range() {
        let colors = seeded_vertex_colors(5_000, 99);
        for c in &colors.0 {
            for &v in c {
                assert!((0.0..=1.0).contains(&v), "component {v} out of range");
            }
        }
    }

    #[test]
    fn test_same_seed_same_colors() {
        assert_eq!(seeded_vertex_colors(256, 42), seeded_vertex_colors(256, 42));
    }

    #[test]
    fn test_different_seeds_differ() {
        assert_ne!(seeded_vertex_colors(256, 1), seeded_vertex_colors(256, 2));
    }

    #[test]
    fn test_colors_are_spread() {
        let colors = seeded_vertex_colors(10_000, 7);
        let mean: f32 = colors.0.iter().map(|c| c[0]).sum::<f32>() / colors.len() as f32;
        assert!((mean - 0.5).abs() < 0.02, "red mean {mean}");
    }

    #[test]
    fn test_to_rgba_adds_opaque_alpha() {
        let colors = VertexColors(vec![[0.1, 0.2, 0.3], [1.0, 0.0, 0.5]]);
        assert_eq!(
            colors.to_rgba(),
            vec![[0.1, 0.2, 0.3, 1.0], [1.0, 0.0, 0.5, 1.0]]
        );
    }

    #[test]
    fn test_accepts_dyn_rng() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let dyn_rng: &mut dyn rand::RngCore = &mut rng;
        assert_eq!(build_vertex_colors(8, dyn_rng).len(), 8);
    }
}
