use glam::{Mat4, Vec3};
use lightstage_common::Color;
use serde::{Deserialize, Serialize};

/// Uniform fill light with no position or direction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmbientLight {
    pub color: Color,
    pub intensity: f32,
}

impl AmbientLight {
    pub fn new(color: Color, intensity: f32) -> Self {
        Self { color, intensity }
    }
}

/// Gradient light between a sky color (from above) and a ground color (from below).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HemisphereLight {
    pub sky_color: Color,
    pub ground_color: Color,
    pub intensity: f32,
}

impl HemisphereLight {
    pub fn new(sky_color: Color, ground_color: Color, intensity: f32) -> Self {
        Self {
            sky_color,
            ground_color,
            intensity,
        }
    }
}

/// Parallel-ray light aimed from `position` toward `target`.
///
/// The target's world matrix is cached derived state: it must be refreshed
/// after any write to `target` before downstream frustum or helper
/// recomputation reads it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DirectionalLight {
    pub color: Color,
    pub intensity: f32,
    pub position: Vec3,
    pub target: Vec3,
    /// Shadow map resolution in texels per side. A control may feed this as a
    /// string; unparsable input degrades to NaN rather than failing.
    pub shadow_map_size: f32,
    target_matrix: Mat4,
}

impl DirectionalLight {
    pub fn new(color: Color, intensity: f32) -> Self {
        Self {
            color,
            intensity,
            position: Vec3::new(0.0, 10.0, 0.0),
            target: Vec3::ZERO,
            shadow_map_size: 512.0,
            target_matrix: Mat4::IDENTITY,
        }
    }

    /// Recompute the cached target world matrix from the current target
    /// position. First stage of the propagation order.
    pub fn refresh_target(&mut self) {
        tracing::trace!(light_target = ?self.target, "refresh light target matrix");
        self.target_matrix = Mat4::from_translation(self.target);
    }

    /// Cached target world matrix from the last `refresh_target`.
    pub fn target_matrix(&self) -> &Mat4 {
        &self.target_matrix
    }

    /// Normalized direction the light shines in, position toward target.
    pub fn direction(&self) -> Vec3 {
        (self.target - self.position).normalize_or_zero()
    }
}

/// Omnidirectional light radiating from a point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointLight {
    pub color: Color,
    pub intensity: f32,
    pub position: Vec3,
    /// Falloff distance; 0 means no falloff.
    pub distance: f32,
}

impl PointLight {
    pub fn new(color: Color, intensity: f32) -> Self {
        Self {
            color,
            intensity,
            position: Vec3::new(0.0, 10.0, 0.0),
            distance: 0.0,
        }
    }
}

/// Cone light aimed from `position` toward `target`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpotLight {
    pub color: Color,
    pub intensity: f32,
    pub position: Vec3,
    pub target: Vec3,
    /// Half-angle of the cone, stored in radians. Controls present degrees.
    pub angle: f32,
    /// Fraction of the cone over which intensity fades to zero, in `[0, 1]`.
    pub penumbra: f32,
    /// Falloff distance; 0 means no falloff.
    pub distance: f32,
}

impl SpotLight {
    pub fn new(color: Color, intensity: f32) -> Self {
        Self {
            color,
            intensity,
            position: Vec3::new(0.0, 10.0, 0.0),
            target: Vec3::ZERO,
            angle: 30.0_f32.to_radians(),
            penumbra: 0.0,
            distance: 0.0,
        }
    }
}
