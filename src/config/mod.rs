use std::f32::consts::PI;
use serde::{Deserialize, Serialize};
use crate::math::Color;

/// Stem proportions and material
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StemConfig {
    pub height: f32,
    pub radius_top: f32,
    pub radius_bottom: f32,
    pub color: Color,
}

impl Default for StemConfig {
    fn default() -> Self {
        Self {
            height: 2.5,
            radius_top: 0.035,
            radius_bottom: 0.055,
            color: Color::from_hex(0x2e8b57),
        }
    }
}

/// One ring of petals: geometry, color endpoints, and the fully-open angle
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PetalRingConfig {
    pub count: usize,
    pub width: f32,
    pub length: f32,
    /// Material color while the flower is still a bud
    pub bud_color: Color,
    /// Material color once fully bloomed
    pub bloom_color: Color,
    /// Opener rotation at full bloom (radians)
    pub open_angle: f32,
}

/// Pistil at the center of the flower head
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CenterConfig {
    pub radius: f32,
    pub color: Color,
}

impl Default for CenterConfig {
    fn default() -> Self {
        Self {
            radius: 0.14,
            color: Color::from_hex(0xffd700),
        }
    }
}

/// Placement of a single leaf along the stem
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LeafConfig {
    /// Position along the stem, as a fraction of its current height (0..1)
    pub height_fraction: f32,
    /// Fixed rotation around the stem
    pub y_rot: f32,
    /// Droop of the blade away from the stem
    pub z_tilt: f32,
    /// Scale factor once fully grown
    pub target_scale: f32,
}

/// Complete flower tuning, loadable from YAML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowerConfig {
    pub stem: StemConfig,
    pub inner_petals: PetalRingConfig,
    pub outer_petals: PetalRingConfig,
    pub center: CenterConfig,
    pub leaves: Vec<LeafConfig>,
    pub leaf_color: Color,
    /// Seconds from first growth to full bloom
    pub bloom_duration: f32,
    /// Seconds of stillness before growth starts
    pub initial_delay: f32,
}

impl Default for FlowerConfig {
    fn default() -> Self {
        Self {
            stem: StemConfig::default(),
            inner_petals: PetalRingConfig {
                count: 5,
                width: 0.28,
                length: 0.55,
                bud_color: Color::from_hex(0x8b2252),
                bloom_color: Color::from_hex(0xff69b4),
                open_angle: PI / 2.3,
            },
            outer_petals: PetalRingConfig {
                count: 8,
                width: 0.33,
                length: 0.7,
                bud_color: Color::from_hex(0x6b1a3a),
                bloom_color: Color::from_hex(0xffb6c1),
                open_angle: PI / 1.95,
            },
            center: CenterConfig::default(),
            leaves: vec![
                LeafConfig {
                    height_fraction: 0.35,
                    y_rot: 0.3,
                    z_tilt: -0.5,
                    target_scale: 1.6,
                },
                LeafConfig {
                    height_fraction: 0.55,
                    y_rot: PI + 0.5,
                    z_tilt: -0.45,
                    target_scale: 1.3,
                },
            ],
            leaf_color: Color::from_hex(0x3da35d),
            bloom_duration: 7.0,
            initial_delay: 0.8,
        }
    }
}

impl FlowerConfig {
    /// Parse from YAML string; unspecified fields keep their defaults
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        let config: FlowerConfig = serde_yaml::from_str(yaml)
            .map_err(|e| format!("YAML parse error: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configs that would build a degenerate or unanimatable flower
    pub fn validate(&self) -> Result<(), String> {
        if self.stem.height <= 0.0 {
            return Err(format!("Stem height must be positive, got {}", self.stem.height));
        }
        if self.inner_petals.count == 0 {
            return Err("Inner petal ring must have at least one petal".to_string());
        }
        if self.outer_petals.count == 0 {
            return Err("Outer petal ring must have at least one petal".to_string());
        }
        for ring in [&self.inner_petals, &self.outer_petals] {
            if ring.width <= 0.0 || ring.length <= 0.0 {
                return Err("Petal width and length must be positive".to_string());
            }
        }
        if self.center.radius <= 0.0 {
            return Err("Center radius must be positive".to_string());
        }
        for (i, leaf) in self.leaves.iter().enumerate() {
            if !(0.0..=1.0).contains(&leaf.height_fraction) {
                return Err(format!(
                    "Leaf {} height_fraction {} outside [0, 1]",
                    i, leaf.height_fraction
                ));
            }
            if leaf.target_scale <= 0.0 {
                return Err(format!("Leaf {} target_scale must be positive", i));
            }
        }
        if self.bloom_duration <= 0.0 {
            return Err(format!(
                "bloom_duration must be positive, got {}",
                self.bloom_duration
            ));
        }
        if self.initial_delay < 0.0 {
            return Err(format!(
                "initial_delay must not be negative, got {}",
                self.initial_delay
            ));
        }
        Ok(())
    }
}
