use crate::math::{Mat4, Vec3};

/// Mutable transform handle for one part of the flower
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    /// Euler angles in radians, applied yaw (y) then pitch (x) then roll (z)
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    /// Compose the local matrix: translate, rotate (y, x, z), scale
    pub fn matrix(&self) -> Mat4 {
        Mat4::translation(self.position.x, self.position.y, self.position.z)
            .mul(&Mat4::rotation_y(self.rotation.y))
            .mul(&Mat4::rotation_x(self.rotation.x))
            .mul(&Mat4::rotation_z(self.rotation.z))
            .mul(&Mat4::scale(self.scale.x, self.scale.y, self.scale.z))
    }

    /// Set uniform scale on all three axes
    pub fn set_scale_uniform(&mut self, s: f32) {
        self.scale = Vec3::splat(s);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_identity() {
        let t = Transform::default();
        let p = t.matrix().transform_point(Vec3::new(1.0, 2.0, 3.0));
        assert!((p.x - 1.0).abs() < 0.0001);
        assert!((p.y - 2.0).abs() < 0.0001);
        assert!((p.z - 3.0).abs() < 0.0001);
    }

    #[test]
    fn test_scale_applies_before_translation() {
        let t = Transform {
            position: Vec3::new(0.0, 2.0, 0.0),
            rotation: Vec3::ZERO,
            scale: Vec3::new(1.0, 0.5, 1.0),
        };
        let p = t.matrix().transform_point(Vec3::new(0.0, 1.0, 0.0));
        assert!((p.y - 2.5).abs() < 0.0001);
    }

    #[test]
    fn test_set_scale_uniform() {
        let mut t = Transform::default();
        t.set_scale_uniform(0.001);
        assert_eq!(t.scale, Vec3::splat(0.001));
    }
}
