//! Viewer pose and local-to-world conversion
//!
//! The tracked camera pose is the one transform the controller needs: the
//! cup preview, the aim hold and the throw direction are all specified in
//! viewer-local space and converted to world space through it.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// The viewer (camera) transform in world space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    /// World-space position of the viewer.
    pub position: Vec3,
    /// World-space orientation. Identity looks down -Z with +Y up.
    pub rotation: Quat,
}

impl Pose {
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
    };

    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    /// Convert a viewer-local position to world space.
    #[inline]
    pub fn convert_position(&self, local: Vec3) -> Vec3 {
        self.rotation * local + self.position
    }

    /// Convert a viewer-local direction to world space (rotation only, no
    /// translation).
    #[inline]
    pub fn convert_vector(&self, local: Vec3) -> Vec3 {
        self.rotation * local
    }

    /// Unit vector the viewer is facing, world space.
    #[inline]
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_identity_conversion() {
        let pose = Pose::IDENTITY;
        let local = Vec3::new(0.0, 0.0, -1.0);
        assert_eq!(pose.convert_position(local), local);
        assert_eq!(pose.convert_vector(local), local);
    }

    #[test]
    fn test_translated_viewer() {
        let pose = Pose::new(Vec3::new(1.0, 2.0, 3.0), Quat::IDENTITY);
        // Positions pick up the translation, vectors do not
        assert_eq!(
            pose.convert_position(Vec3::new(0.0, 0.0, -1.0)),
            Vec3::new(1.0, 2.0, 2.0)
        );
        assert_eq!(
            pose.convert_vector(Vec3::new(0.0, 0.0, -1.0)),
            Vec3::new(0.0, 0.0, -1.0)
        );
    }

    #[test]
    fn test_rotated_viewer() {
        // Viewer turned 90° left: local -Z maps to world -X
        let pose = Pose::new(Vec3::ZERO, Quat::from_rotation_y(FRAC_PI_2));
        let world = pose.convert_vector(Vec3::new(0.0, 0.0, -1.0));
        assert!((world - Vec3::new(-1.0, 0.0, 0.0)).length() < 1e-5);
        assert!((pose.forward() - Vec3::new(-1.0, 0.0, 0.0)).length() < 1e-5);
    }
}
