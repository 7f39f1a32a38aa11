use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// Errors from refreshing helper geometry against degenerate source state.
///
/// A failed refresh is fatal to the frame that requested it; the scheduler
/// propagates it to whatever drives the frame loop.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum HelperError {
    #[error("projection matrix is not finite (degenerate camera extents)")]
    DegenerateProjection,
    #[error("light {0} is not finite")]
    DegenerateLight(&'static str),
}

/// Line-box visualization of a shadow camera's frustum.
///
/// Caches the eight frustum corners in camera space, recovered by unprojecting
/// the NDC cube through the inverse projection. Corners 0..4 lie on the near
/// plane, 4..8 on the far plane, each quad wound (-x,-y), (+x,-y), (+x,+y),
/// (-x,+y).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraHelper {
    corners: [Vec3; 8],
}

impl CameraHelper {
    pub fn new() -> Self {
        Self {
            corners: [Vec3::ZERO; 8],
        }
    }

    /// Recompute the cached corners from a projection matrix. Third stage of
    /// the propagation order; must run after the projection itself refreshed.
    pub fn refresh(&mut self, projection: &Mat4) -> Result<(), HelperError> {
        if !projection.is_finite() {
            return Err(HelperError::DegenerateProjection);
        }
        let inverse = projection.inverse();
        let mut corners = [Vec3::ZERO; 8];
        // glam projections map depth to [0, 1]: near plane z = 0, far z = 1
        for (i, corner) in corners.iter_mut().enumerate() {
            let x = if i % 4 == 1 || i % 4 == 2 { 1.0 } else { -1.0 };
            let y = if i % 4 >= 2 { 1.0 } else { -1.0 };
            let z = if i < 4 { 0.0 } else { 1.0 };
            *corner = inverse.project_point3(Vec3::new(x, y, z));
        }
        if corners.iter().any(|c| !c.is_finite()) {
            return Err(HelperError::DegenerateProjection);
        }
        self.corners = corners;
        tracing::trace!("camera helper refreshed");
        Ok(())
    }

    /// Cached corners from the last successful refresh.
    pub fn corners(&self) -> &[Vec3; 8] {
        &self.corners
    }
}

impl Default for CameraHelper {
    fn default() -> Self {
        Self::new()
    }
}

/// Indicator line from a light's position to its target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LightHelper {
    endpoints: [Vec3; 2],
}

impl LightHelper {
    pub fn new() -> Self {
        Self {
            endpoints: [Vec3::ZERO; 2],
        }
    }

    /// Recompute the cached indicator line. Runs in the helper stage, after
    /// the light's target matrix refreshed.
    pub fn refresh(&mut self, position: Vec3, target: Vec3) -> Result<(), HelperError> {
        if !position.is_finite() {
            return Err(HelperError::DegenerateLight("position"));
        }
        if !target.is_finite() {
            return Err(HelperError::DegenerateLight("target"));
        }
        self.endpoints = [position, target];
        Ok(())
    }

    /// Cached line endpoints from the last successful refresh.
    pub fn endpoints(&self) -> &[Vec3; 2] {
        &self.endpoints
    }
}

impl Default for LightHelper {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lightstage_scene::OrthographicCamera;

    #[test]
    fn camera_helper_recovers_ortho_extents() {
        let mut cam = OrthographicCamera::new(40.0, 0.5, 100.0);
        cam.refresh_projection();

        let mut helper = CameraHelper::new();
        helper.refresh(cam.projection()).unwrap();

        let corners = helper.corners();
        // Near quad spans the full extent at z = -near
        assert!((corners[0].x - -20.0).abs() < 1e-3);
        assert!((corners[1].x - 20.0).abs() < 1e-3);
        assert!((corners[2].y - 20.0).abs() < 1e-3);
        assert!((corners[0].z - -0.5).abs() < 1e-3);
        // Far quad sits at z = -far
        assert!((corners[4].z - -100.0).abs() < 1e-3);
    }

    #[test]
    fn camera_helper_stale_until_refresh() {
        let helper = CameraHelper::new();
        assert_eq!(helper.corners(), &[Vec3::ZERO; 8]);
    }

    #[test]
    fn camera_helper_rejects_degenerate_projection() {
        let mut cam = OrthographicCamera::new(40.0, 5.0, 5.0);
        cam.refresh_projection();

        let mut helper = CameraHelper::new();
        assert_eq!(
            helper.refresh(cam.projection()),
            Err(HelperError::DegenerateProjection)
        );
        // Cache untouched by the failed refresh
        assert_eq!(helper.corners(), &[Vec3::ZERO; 8]);
    }

    #[test]
    fn camera_helper_tracks_frustum_writes() {
        let mut cam = OrthographicCamera::new(40.0, 0.5, 100.0);
        cam.refresh_projection();
        let mut helper = CameraHelper::new();
        helper.refresh(cam.projection()).unwrap();

        cam.right = 5.0;
        cam.left = -5.0;
        cam.refresh_projection();
        helper.refresh(cam.projection()).unwrap();
        assert!((helper.corners()[1].x - 5.0).abs() < 1e-3);
    }

    #[test]
    fn light_helper_caches_endpoints() {
        let mut helper = LightHelper::new();
        helper
            .refresh(Vec3::new(0.0, 10.0, 0.0), Vec3::new(-4.0, 0.0, -4.0))
            .unwrap();
        assert_eq!(helper.endpoints()[0], Vec3::new(0.0, 10.0, 0.0));
        assert_eq!(helper.endpoints()[1], Vec3::new(-4.0, 0.0, -4.0));
    }

    #[test]
    fn light_helper_rejects_nan_position() {
        let mut helper = LightHelper::new();
        let err = helper
            .refresh(Vec3::new(f32::NAN, 0.0, 0.0), Vec3::ZERO)
            .unwrap_err();
        assert_eq!(err, HelperError::DegenerateLight("position"));
    }
}
