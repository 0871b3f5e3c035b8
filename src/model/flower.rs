use std::f32::consts::TAU;
use crate::config::FlowerConfig;
use crate::math::{Color, Vec3};
use super::Transform;

/// Smallest scale a part ever takes. Never exactly zero so the geometry
/// stays non-degenerate while hidden.
pub const MIN_SCALE: f32 = 0.001;

/// One petal: a fixed angular slot around the head and a mutable
/// opener hinge angle
#[derive(Debug, Clone, Copy)]
pub struct Petal {
    /// Rotation around the head axis, set at construction
    pub azimuth: f32,
    /// Hinge rotation controlling open/closed, mutated every tick
    pub opener: f32,
}

/// One leaf riding on the stem
#[derive(Debug, Clone, Copy)]
pub struct Leaf {
    pub height_fraction: f32,
    pub y_rot: f32,
    pub z_tilt: f32,
    pub target_scale: f32,
    pub transform: Transform,
}

/// A material with a mutable color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub color: Color,
}

/// The full flower part hierarchy
#[derive(Debug, Clone)]
pub struct Flower {
    /// Whole-plant group; idle sway tilts this
    pub root: Transform,
    pub stem: Transform,
    /// Anchor at the stem's current top; petals and center hang off it
    pub head: Transform,
    pub center: Transform,
    pub inner_petals: Vec<Petal>,
    pub outer_petals: Vec<Petal>,
    pub leaves: Vec<Leaf>,
    pub inner_material: Material,
    pub outer_material: Material,
    /// Stem height at full growth, fixed at construction
    pub stem_height: f32,
}

impl Flower {
    /// Build the flower in its pre-bloom pose. Fails fast on a config
    /// that would produce a malformed model.
    pub fn build(config: &FlowerConfig) -> Result<Self, String> {
        config.validate()?;

        let mut stem = Transform::default();
        stem.scale.y = MIN_SCALE;

        let mut center = Transform::default();
        center.set_scale_uniform(MIN_SCALE);

        // Outer ring is offset by half a slot so the rings interleave
        let inner_petals = petal_ring(config.inner_petals.count, 0.0);
        let outer_offset = std::f32::consts::PI / config.outer_petals.count as f32;
        let outer_petals = petal_ring(config.outer_petals.count, outer_offset);

        let leaves = config
            .leaves
            .iter()
            .map(|leaf| {
                let mut transform = Transform {
                    rotation: Vec3::new(0.0, leaf.y_rot, 0.0),
                    ..Transform::default()
                };
                transform.set_scale_uniform(MIN_SCALE);
                Leaf {
                    height_fraction: leaf.height_fraction,
                    y_rot: leaf.y_rot,
                    z_tilt: leaf.z_tilt,
                    target_scale: leaf.target_scale,
                    transform,
                }
            })
            .collect();

        Ok(Self {
            root: Transform::default(),
            stem,
            head: Transform::default(),
            center,
            inner_petals,
            outer_petals,
            leaves,
            inner_material: Material {
                color: config.inner_petals.bud_color,
            },
            outer_material: Material {
                color: config.outer_petals.bud_color,
            },
            stem_height: config.stem.height,
        })
    }

    /// Current world height of the stem top (scale-dependent)
    pub fn stem_world_height(&self) -> f32 {
        self.stem.scale.y * self.stem_height
    }
}

fn petal_ring(count: usize, offset: f32) -> Vec<Petal> {
    (0..count)
        .map(|i| Petal {
            azimuth: (i as f32 / count as f32) * TAU + offset,
            opener: 0.0,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_default() {
        let flower = Flower::build(&FlowerConfig::default()).unwrap();
        assert_eq!(flower.inner_petals.len(), 5);
        assert_eq!(flower.outer_petals.len(), 8);
        assert_eq!(flower.leaves.len(), 2);
    }

    #[test]
    fn test_build_rejects_invalid_config() {
        let mut config = FlowerConfig::default();
        config.outer_petals.count = 0;
        assert!(Flower::build(&config).is_err());
    }

    #[test]
    fn test_pre_bloom_pose() {
        let config = FlowerConfig::default();
        let flower = Flower::build(&config).unwrap();

        assert_eq!(flower.stem.scale.y, MIN_SCALE);
        assert_eq!(flower.head.position.y, 0.0);
        assert_eq!(flower.center.scale, Vec3::splat(MIN_SCALE));
        assert!(flower.inner_petals.iter().all(|p| p.opener == 0.0));
        assert!(flower.outer_petals.iter().all(|p| p.opener == 0.0));
        assert!(flower.leaves.iter().all(|l| l.transform.scale.x == MIN_SCALE));
        assert_eq!(flower.inner_material.color, config.inner_petals.bud_color);
        assert_eq!(flower.outer_material.color, config.outer_petals.bud_color);
    }

    #[test]
    fn test_petal_slots_evenly_spaced() {
        let flower = Flower::build(&FlowerConfig::default()).unwrap();
        let slot = TAU / 5.0;
        for (i, petal) in flower.inner_petals.iter().enumerate() {
            assert!((petal.azimuth - i as f32 * slot).abs() < 0.0001);
        }
    }

    #[test]
    fn test_outer_ring_interleaves() {
        let flower = Flower::build(&FlowerConfig::default()).unwrap();
        let half_slot = std::f32::consts::PI / 8.0;
        assert!((flower.outer_petals[0].azimuth - half_slot).abs() < 0.0001);
    }

    #[test]
    fn test_stem_world_height_tracks_scale() {
        let mut flower = Flower::build(&FlowerConfig::default()).unwrap();
        assert!(flower.stem_world_height() < 0.01);
        flower.stem.scale.y = 1.0;
        assert!((flower.stem_world_height() - 2.5).abs() < 0.0001);
    }
}
