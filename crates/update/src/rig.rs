use crate::propagate::{Propagation, Stage};
use lightstage_bind::{
    ColorBinding, ColorLens, MinMaxBinding, ParsedScalarBinding, ScalarLens,
    SymmetricExtentBinding, VectorGroup, VectorLens,
};
use lightstage_common::Color;
use lightstage_scene::{DirectionalLight, OrthographicCamera};
use lightstage_view::{CameraHelper, LightHelper};
use serde::{Deserialize, Serialize};

/// Minimum near/far separation the shadow camera controls maintain.
const NEAR_FAR_GAP: f32 = 0.1;

/// A directional light, its orthographic shadow camera, and the two helpers
/// that visualize them.
///
/// This is the owner object the standard shadow controls bind to. The
/// associated constructors hand out lenses and bindings into its fields, and
/// [`ShadowRig::propagation`] wires the recomputation chain every one of
/// those writes must be followed by.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShadowRig {
    pub light: DirectionalLight,
    pub camera: OrthographicCamera,
    pub camera_helper: CameraHelper,
    pub light_helper: LightHelper,
}

impl ShadowRig {
    /// A white directional light over the checkerboard scene, shadow camera
    /// framing the area around the origin.
    pub fn new() -> Self {
        let mut light = DirectionalLight::new(Color::WHITE, 1.0);
        light.target = glam::Vec3::new(-4.0, 0.0, -4.0);
        Self {
            light,
            camera: OrthographicCamera::new(10.0, 0.5, 100.0),
            camera_helper: CameraHelper::new(),
            light_helper: LightHelper::new(),
        }
    }

    /// The recomputation chain for any control write into this rig:
    /// light target matrix, then shadow projection, then both helpers.
    pub fn propagation() -> Propagation<ShadowRig> {
        let mut propagation = Propagation::new();
        propagation.register(Stage::Transform, |rig: &mut ShadowRig| {
            rig.light.refresh_target();
            Ok(())
        });
        propagation.register(Stage::Frustum, |rig: &mut ShadowRig| {
            rig.camera.refresh_projection();
            Ok(())
        });
        propagation.register(Stage::Helper, |rig: &mut ShadowRig| {
            rig.camera_helper.refresh(rig.camera.projection())?;
            Ok(())
        });
        propagation.register(Stage::Helper, |rig: &mut ShadowRig| {
            rig.light_helper
                .refresh(rig.light.position, rig.light.target)?;
            Ok(())
        });
        propagation
    }

    /// Near/far controls; a near write drags far along, a short far snaps
    /// back to near plus the gap.
    pub fn near_far_binding() -> MinMaxBinding<ShadowRig> {
        MinMaxBinding::new(
            ScalarLens::new(|r: &ShadowRig| r.camera.near, |r, v| r.camera.near = v),
            ScalarLens::new(|r: &ShadowRig| r.camera.far, |r, v| r.camera.far = v),
            NEAR_FAR_GAP,
        )
    }

    /// One width control over the camera's left/right pair.
    pub fn width_binding() -> SymmetricExtentBinding<ShadowRig> {
        SymmetricExtentBinding::new(
            ScalarLens::new(|r: &ShadowRig| r.camera.left, |r, v| r.camera.left = v),
            ScalarLens::new(|r: &ShadowRig| r.camera.right, |r, v| r.camera.right = v),
        )
    }

    /// One height control over the camera's bottom/top pair.
    pub fn height_binding() -> SymmetricExtentBinding<ShadowRig> {
        SymmetricExtentBinding::new(
            ScalarLens::new(|r: &ShadowRig| r.camera.bottom, |r, v| r.camera.bottom = v),
            ScalarLens::new(|r: &ShadowRig| r.camera.top, |r, v| r.camera.top = v),
        )
    }

    /// Direct zoom access for a plain slider.
    pub fn zoom_lens() -> ScalarLens<ShadowRig> {
        ScalarLens::new(|r: &ShadowRig| r.camera.zoom, |r, v| r.camera.zoom = v)
    }

    /// Hex-string control over the light color.
    pub fn color_binding() -> ColorBinding<ShadowRig> {
        ColorBinding::new(ColorLens::new(
            |r: &ShadowRig| r.light.color,
            |r, c| r.light.color = c,
        ))
    }

    /// String-fed shadow map size control; garbage input degrades to NaN.
    pub fn map_size_binding() -> ParsedScalarBinding<ShadowRig> {
        ParsedScalarBinding::new(ScalarLens::new(
            |r: &ShadowRig| r.light.shadow_map_size,
            |r, v| r.light.shadow_map_size = v,
        ))
    }

    /// Per-axis controls over the light position.
    pub fn position_group() -> VectorGroup<ShadowRig> {
        VectorGroup::new(
            "position",
            VectorLens::new(|r: &ShadowRig| r.light.position, |r, v| r.light.position = v),
        )
    }

    /// Per-axis controls over the light target.
    pub fn target_group() -> VectorGroup<ShadowRig> {
        VectorGroup::new(
            "target",
            VectorLens::new(|r: &ShadowRig| r.light.target, |r, v| r.light.target = v),
        )
    }
}

impl Default for ShadowRig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use lightstage_bind::Axis;

    #[test]
    fn near_far_controls_reclamp_through_the_min_rule() {
        let mut rig = ShadowRig::new();
        rig.camera.near = 0.1;
        rig.camera.far = 50.0;
        let near_far = ShadowRig::near_far_binding();

        near_far.set_min(&mut rig, 60.0);
        assert_eq!(near_far.min(&rig), 60.0);
        assert!(near_far.max(&rig) >= 60.1 - 1e-4);

        // The far control cannot cross under near: 10 comes back as 60.1
        near_far.set_max(&mut rig, 10.0);
        assert!((near_far.max(&rig) - 60.1).abs() < 1e-3);
        assert_eq!(near_far.min(&rig), 60.0);
    }

    #[test]
    fn width_write_plus_propagation_reaches_the_helper() {
        let mut rig = ShadowRig::new();
        let mut propagation = ShadowRig::propagation();
        let width = ShadowRig::width_binding();

        width.set_value(&mut rig, 40.0);
        propagation.run(&mut rig).unwrap();

        assert_eq!(rig.camera.left, -20.0);
        assert_eq!(rig.camera.right, 20.0);
        // Helper mirrors the fresh frustum, not the construction-time extents
        assert!((rig.camera_helper.corners()[1].x - 20.0).abs() < 1e-3);
    }

    #[test]
    fn target_write_updates_matrix_before_helpers_read_it() {
        let mut rig = ShadowRig::new();
        let mut propagation = ShadowRig::propagation();
        let target = ShadowRig::target_group();

        target.set(&mut rig, Axis::X, 6.0);
        propagation.run(&mut rig).unwrap();

        let expected = Vec3::new(6.0, 0.0, -4.0);
        assert_eq!(
            *rig.light.target_matrix(),
            glam::Mat4::from_translation(expected)
        );
        assert_eq!(rig.light_helper.endpoints()[1], expected);
    }

    #[test]
    fn degenerate_camera_kills_the_propagation_run() {
        let mut rig = ShadowRig::new();
        let mut propagation = ShadowRig::propagation();
        rig.camera.near = 5.0;
        rig.camera.far = 5.0; // direct field write, bypassing the binding

        assert!(propagation.run(&mut rig).is_err());
    }

    #[test]
    fn full_control_surface_round_trips() {
        let mut rig = ShadowRig::new();
        let mut propagation = ShadowRig::propagation();

        ShadowRig::color_binding()
            .set_value(&mut rig, "#ca8")
            .unwrap();
        ShadowRig::map_size_binding().set_value(&mut rig, "1024");
        ShadowRig::position_group().set_all(&mut rig, Vec3::new(3.0, 8.0, 2.0));
        ShadowRig::height_binding().set_value(&mut rig, 30.0);
        ShadowRig::zoom_lens().set(&mut rig, 2.0);
        propagation.run(&mut rig).unwrap();

        assert_eq!(ShadowRig::color_binding().value(&rig), "#ccaa88");
        assert_eq!(rig.light.shadow_map_size, 1024.0);
        assert_eq!(rig.camera.top, 15.0);
        assert_eq!(rig.light_helper.endpoints()[0], Vec3::new(3.0, 8.0, 2.0));
        // Zoom 2 halves the visible extent the helper sees
        assert!((rig.camera_helper.corners()[2].y - 7.5).abs() < 1e-3);
    }
}
