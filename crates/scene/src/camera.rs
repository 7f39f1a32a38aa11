use glam::Mat4;
use serde::{Deserialize, Serialize};

/// Orthographic shadow camera with a cached projection matrix.
///
/// The extent fields are raw owner state for control bindings: the symmetric
/// pair (left, right) and (bottom, top) are typically driven through one
/// logical size value, and (near, far) through a min/max pair. Degenerate
/// extents (near == far, zoom == 0) are accepted here; the non-finite matrix
/// they produce surfaces as an error at helper refresh, not before.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrthographicCamera {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
    pub near: f32,
    pub far: f32,
    pub zoom: f32,
    projection: Mat4,
}

impl OrthographicCamera {
    pub fn new(extent: f32, near: f32, far: f32) -> Self {
        Self {
            left: -extent / 2.0,
            right: extent / 2.0,
            top: extent / 2.0,
            bottom: -extent / 2.0,
            near,
            far,
            zoom: 1.0,
            projection: Mat4::IDENTITY,
        }
    }

    /// Recompute the cached projection matrix from the current extents,
    /// divided by zoom. Second stage of the propagation order.
    pub fn refresh_projection(&mut self) {
        self.projection = Mat4::orthographic_rh(
            self.left / self.zoom,
            self.right / self.zoom,
            self.bottom / self.zoom,
            self.top / self.zoom,
            self.near,
            self.far,
        );
    }

    /// Cached projection from the last `refresh_projection`.
    pub fn projection(&self) -> &Mat4 {
        &self.projection
    }
}

/// Perspective shadow camera (spot lights) with a cached projection matrix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerspectiveCamera {
    /// Vertical field of view, stored in radians. Controls present degrees.
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    projection: Mat4,
}

impl PerspectiveCamera {
    pub fn new(fov: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            fov,
            aspect,
            near,
            far,
            projection: Mat4::IDENTITY,
        }
    }

    /// Recompute the cached projection matrix from the current parameters.
    pub fn refresh_projection(&mut self) {
        self.projection = Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far);
    }

    /// Cached projection from the last `refresh_projection`.
    pub fn projection(&self) -> &Mat4 {
        &self.projection
    }
}
